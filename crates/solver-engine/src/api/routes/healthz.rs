use {crate::api::State, serde::Serialize};

pub(in crate::api) fn healthz(router: axum::Router<State>) -> axum::Router<State> {
    router.route("/healthz", axum::routing::get(route))
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

async fn route() -> axum::Json<Health> {
    axum::Json(Health { status: "ok" })
}
