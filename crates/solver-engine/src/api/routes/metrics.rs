use crate::api::State;

pub(in crate::api) fn metrics(router: axum::Router<State>) -> axum::Router<State> {
    router.route(
        "/metrics",
        axum::routing::get(observe::metrics::handle_metrics),
    )
}
