//! CLI arguments for the `solver-engine` binary.

use {
    clap::Parser,
    std::{net::SocketAddr, path::PathBuf},
};

/// Run the solver engine
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// The log filter.
    #[arg(long, env, default_value = "info,solver_engine=debug")]
    pub log: String,

    /// Whether to emit logs as JSON.
    #[arg(long, env)]
    pub use_json_logs: bool,

    /// The socket address to bind to.
    #[arg(long, env, default_value = "127.0.0.1:7872")]
    pub addr: SocketAddr,

    /// Path to the engine configuration file. This file should be in TOML
    /// format. Defaults are used for everything when omitted.
    #[arg(long, env)]
    pub config: Option<PathBuf>,
}
