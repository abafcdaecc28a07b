mod healthz;
mod metrics;
mod notify;
mod quote;
mod reveal;
mod settle;
mod solve;

pub(super) use {
    healthz::healthz,
    metrics::metrics,
    notify::notify,
    quote::quote,
    reveal::reveal,
    settle::settle,
    solve::solve,
};
