#[cfg(unix)]
use tokio::signal::unix::{self, SignalKind};
use {
    crate::{
        api,
        domain::solver::{BreakEven, Solver},
        infra::{cache::SolutionCache, cli, config, observe},
    },
    anyhow::{Context, Result},
    clap::Parser,
    std::{net::SocketAddr, sync::Arc},
    tokio::sync::oneshot,
};

/// Parses the command line and runs the engine until a shutdown signal is
/// received.
pub async fn start(args: impl IntoIterator<Item = String>) -> Result<()> {
    run(args, None).await
}

/// Runs the engine. If `bind` is specified, the address the API is bound to is
/// sent to it once the server is listening.
pub async fn run(
    args: impl IntoIterator<Item = String>,
    bind: Option<oneshot::Sender<SocketAddr>>,
) -> Result<()> {
    let args = cli::Args::parse_from(args);
    ::observe::tracing::initialize_reentrant(&::observe::Config::new(
        &args.log,
        None,
        args.use_json_logs,
    ));
    observe::metrics::init();
    tracing::info!("running solver engine with {args:#?}");

    let config = config::load(args.config.as_deref())
        .await
        .context("failed to load configuration")?;
    tracing::info!(?config, "loaded configuration");

    let cache = Arc::new(SolutionCache::new(config.solution_retention));
    // Stops sweeping once the server shut down.
    let _sweeper = cache.spawn_sweeper(config.cache_sweep_interval);

    api::Api {
        addr: args.addr,
        solver: Solver::new(
            Box::new(BreakEven::new(config.solution_gas)),
            cache,
            config.settlement_contract,
        ),
        quoter: api::Quoter {
            estimator: Box::new(config.quote_ratio),
            format: config.quote_format,
            solver: config.solver_address,
            gas: config.quote_gas,
        },
        addr_sender: bind,
    }
    .serve(shutdown_signal())
    .await
    .context("failed to serve API")
}

#[cfg(unix)]
async fn shutdown_signal() {
    // Intercept main signals for graceful shutdown.
    // Kubernetes sends sigterm, whereas locally sigint (ctrl-c) is most common.
    let (Ok(mut interrupt), Ok(mut terminate)) = (
        unix::signal(SignalKind::interrupt()),
        unix::signal(SignalKind::terminate()),
    ) else {
        tracing::error!("failed to install signal handlers, graceful shutdown is disabled");
        return std::future::pending().await;
    };
    tokio::select! {
        _ = interrupt.recv() => (),
        _ = terminate.recv() => (),
    };
    tracing::info!("shutting down");
}

#[cfg(windows)]
async fn shutdown_signal() {
    // We don't support signal handling on Windows.
    std::future::pending().await
}
