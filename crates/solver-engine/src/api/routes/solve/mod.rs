use {
    crate::api::{Error, State, error::invalid_request},
    axum::http::StatusCode,
    solvers_dto::{auction::Auction, solution::Solutions},
    tracing::Instrument,
};

mod dto;

pub(in crate::api) fn solve(router: axum::Router<State>) -> axum::Router<State> {
    router.route("/solve", axum::routing::post(route))
}

async fn route(
    state: axum::extract::State<State>,
    body: axum::body::Bytes,
) -> Result<axum::Json<Solutions>, (StatusCode, axum::Json<Error>)> {
    let auction = solvers_dto::decode::<Auction>(&body).map_err(invalid_request)?;
    let auction = dto::auction::to_domain(auction);
    let handle_request = async {
        let candidates = state.solver().solve(&auction)?;
        Ok(axum::Json(dto::solution::from_domain(&candidates)))
    };

    handle_request
        .instrument(tracing::info_span!("/solve", auction_id = ?auction.id.map(|id| id.0)))
        .await
}
