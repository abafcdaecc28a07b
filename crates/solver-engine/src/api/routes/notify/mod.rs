use {
    crate::api::{Error, State, error::invalid_request},
    axum::http::StatusCode,
    solvers_dto::notification::Notification,
    tracing::Instrument,
};

mod dto;

pub(in crate::api) fn notify(router: axum::Router<State>) -> axum::Router<State> {
    router.route("/notify", axum::routing::post(route))
}

/// Receive a status notification about a previously provided solution.
async fn route(
    state: axum::extract::State<State>,
    body: axum::body::Bytes,
) -> Result<axum::Json<serde_json::Value>, (StatusCode, axum::Json<Error>)> {
    let value = solvers_dto::decode::<serde_json::Value>(&body).map_err(invalid_request)?;
    let notification = Notification::from_value(value).map_err(invalid_request)?;
    let handle_request = async {
        let notification = dto::to_domain(notification);
        tracing::trace!(?notification);
        state.solver().notify(notification);
        Ok(axum::Json(serde_json::json!({})))
    };

    handle_request
        .instrument(tracing::info_span!("/notify"))
        .await
}
