use {
    crate::{
        api::{Error, State, error::invalid_request},
        domain::{auction, solution},
        infra::cache,
    },
    axum::http::StatusCode,
    solvers_dto::settle as dto,
    tracing::Instrument,
};

pub(in crate::api) fn settle(router: axum::Router<State>) -> axum::Router<State> {
    router.route("/settle", axum::routing::post(route))
}

async fn route(
    state: axum::extract::State<State>,
    body: axum::body::Bytes,
) -> Result<axum::Json<dto::Response>, (StatusCode, axum::Json<Error>)> {
    let req = solvers_dto::decode::<dto::Request>(&body).map_err(invalid_request)?;
    let solution_id = solution::Id(req.solution_id);
    let auction_id = auction::Id(req.auction_id);
    let handle_request = async {
        state.solver().settle(
            solution_id,
            cache::Settle {
                auction_id,
                submission_deadline_latest_block: req.submission_deadline_latest_block,
            },
        );
        Ok(axum::Json(dto::Response {}))
    };

    handle_request
        .instrument(tracing::info_span!("/settle", %solution_id, %auction_id))
        .await
}
