use {
    crate::{
        api::{Error, State, error::invalid_request},
        infra::observe,
    },
    axum::{extract::Query, extract::rejection::QueryRejection, http::StatusCode},
    solvers_dto::quote::{Request, Response},
    tracing::Instrument,
};

mod dto;

pub(in crate::api) fn quote(router: axum::Router<State>) -> axum::Router<State> {
    router.route("/quote", axum::routing::get(route))
}

async fn route(
    state: axum::extract::State<State>,
    query: Result<Query<Request>, QueryRejection>,
) -> Result<axum::Json<Response>, (StatusCode, axum::Json<Error>)> {
    let Query(req) = query.map_err(|err| invalid_request(err.body_text()))?;
    let order = dto::to_domain(&req);
    let handle_request = async {
        let quoter = state.quoter();
        let result = quoter
            .estimator
            .estimate(&order)
            .and_then(|quote| dto::from_domain(&quote, quoter));
        observe::quoted(&order, &result);
        Ok(axum::Json(result?))
    };

    handle_request
        .instrument(tracing::info_span!(
            "/quote",
            sell = %order.sell,
            buy = %order.buy,
            side = ?order.side,
        ))
        .await
}
