//! Serve the solver engine API.

use {
    crate::{
        domain::{eth, quote, solver::Solver},
        infra::config::QuoteFormat,
    },
    std::{future::Future, net::SocketAddr, sync::Arc},
    tokio::sync::oneshot,
};

mod error;
mod routes;

pub use error::Error;

pub struct Api {
    pub addr: SocketAddr,
    pub solver: Solver,
    pub quoter: Quoter,
    /// If this channel is specified, the bound address will be sent to it.
    /// This allows the engine to bind to 127.0.0.1:0 during testing.
    pub addr_sender: Option<oneshot::Sender<SocketAddr>>,
}

/// Everything needed to answer `/quote` requests.
pub struct Quoter {
    pub estimator: Box<dyn quote::Estimator>,
    pub format: QuoteFormat,
    /// The solver account reported in quotes.
    pub solver: eth::Address,
    pub gas: eth::Gas,
}

impl Api {
    pub async fn serve(
        self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), std::io::Error> {
        let app = axum::Router::new();
        let app = routes::healthz(app);
        let app = routes::metrics(app);
        let app = routes::quote(app);
        let app = routes::solve(app);
        let app = routes::reveal(app);
        let app = routes::settle(app);
        let app = routes::notify(app);

        let app = app
            .with_state(State(Arc::new(Inner {
                solver: self.solver,
                quoter: self.quoter,
            })))
            .layer(
                tower::ServiceBuilder::new()
                    .layer(tower_http::trace::TraceLayer::new_for_http())
                    .layer(axum::middleware::from_fn(
                        observe::request_id::with_request_id,
                    )),
            );

        // Start the server.
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "serving solver engine");
        if let Some(addr_sender) = self.addr_sender {
            // The receiver only goes away if the caller lost interest.
            let _ = addr_sender.send(local_addr);
        }
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
    }
}

#[derive(Clone)]
struct State(Arc<Inner>);

impl State {
    fn solver(&self) -> &Solver {
        &self.0.solver
    }

    fn quoter(&self) -> &Quoter {
        &self.0.quoter
    }
}

struct Inner {
    solver: Solver,
    quoter: Quoter,
}
