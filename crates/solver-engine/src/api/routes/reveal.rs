use {
    crate::{
        api::{Error, State, error::invalid_request},
        domain::{auction, solution},
    },
    axum::http::StatusCode,
    solvers_dto::reveal as dto,
    tracing::Instrument,
};

pub(in crate::api) fn reveal(router: axum::Router<State>) -> axum::Router<State> {
    router.route("/reveal", axum::routing::post(route))
}

async fn route(
    state: axum::extract::State<State>,
    body: axum::body::Bytes,
) -> Result<axum::Json<dto::Response>, (StatusCode, axum::Json<Error>)> {
    let req = solvers_dto::decode::<dto::Request>(&body).map_err(invalid_request)?;
    let solution_id = solution::Id(req.solution_id);
    let auction_id = auction::Id(req.auction_id);
    let handle_request = async {
        let calldata = state.solver().reveal(solution_id, auction_id)?;
        Ok(axum::Json(dto::Response {
            calldata: dto::Calldata {
                internalized: calldata.internalized,
                uninternalized: calldata.uninternalized,
            },
        }))
    };

    handle_request
        .instrument(tracing::info_span!("/reveal", %solution_id, %auction_id))
        .await
}
