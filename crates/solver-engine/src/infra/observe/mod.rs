//! Logging and metrics for everything the engine does.

use {
    crate::{
        domain::{
            auction,
            notification::Notification,
            quote,
            settlement,
            solution,
            solver::RevealError,
        },
        infra::cache,
    },
    chrono::Utc,
    std::fmt::Debug,
};

pub mod metrics;

pub fn solve(auction: &auction::Auction) {
    tracing::info!(
        id = ?auction.id,
        orders = auction.orders.len(),
        liquidity = auction.liquidity.len(),
        deadline = %auction.deadline.0,
        "solving auction",
    );
    metrics::get()
        .time_limit
        .observe(remaining_time(&auction.deadline));
}

pub fn solved(deadline: &auction::Deadline, candidates: &[solution::Candidate]) {
    tracing::info!(
        ids = ?candidates.iter().map(|candidate| candidate.id.0).collect::<Vec<_>>(),
        "found solutions",
    );
    metrics::get()
        .remaining_time
        .observe(remaining_time(deadline));
    metrics::get().solutions.inc_by(candidates.len() as u64);
}

pub fn solve_error(err: &settlement::Error) {
    tracing::warn!(?err, "failed to encode solution");
    let reason = match err {
        settlement::Error::MissingPrice(_) => "missing_price",
    };
    metrics::get()
        .solve_errors
        .with_label_values(&[reason])
        .inc();
}

pub fn revealed(id: solution::Id, result: &Result<settlement::Calldata, RevealError>) {
    let label = match result {
        Ok(_) => {
            tracing::debug!(%id, "revealed solution");
            "ok"
        }
        Err(RevealError::NotFound(err)) => {
            tracing::debug!(%id, ?err, "solution not revealable");
            lookup_error_label(err)
        }
    };
    metrics::get().reveals.with_label_values(&[label]).inc();
}

pub fn settle(
    id: solution::Id,
    settle: &cache::Settle,
    result: &Result<(), cache::LookupError>,
) {
    let label = match result {
        Ok(()) => {
            tracing::info!(%id, ?settle, "driver settles solution");
            "known"
        }
        Err(err) => {
            tracing::warn!(%id, ?settle, ?err, "driver settles unknown solution");
            lookup_error_label(err)
        }
    };
    metrics::get().settles.with_label_values(&[label]).inc();
}

fn lookup_error_label(err: &cache::LookupError) -> &'static str {
    match err {
        cache::LookupError::Unknown => "unknown",
        cache::LookupError::Expired => "expired",
        cache::LookupError::AuctionMismatch => "auction_mismatch",
    }
}

pub fn notification(notification: &Notification) {
    tracing::debug!(
        auction_id = ?notification.auction_id,
        solution_id = ?notification.solution_id,
        kind = ?notification.kind,
        "received notification",
    );
    metrics::get()
        .notifications
        .with_label_values(&[notification.kind.label()])
        .inc();
}

pub fn quoted<T: Debug>(order: &quote::Order, result: &Result<T, quote::Error>) {
    let label = match result {
        Ok(quote) => {
            tracing::debug!(?order, ?quote, "quoted order");
            "ok"
        }
        Err(err) => {
            tracing::debug!(?order, ?err, "failed to quote order");
            match err {
                quote::Error::SameTokens => "same_tokens",
                quote::Error::Overflow => "overflow",
                quote::Error::InvalidRatio => "invalid_ratio",
            }
        }
    };
    metrics::get().quotes.with_label_values(&[label]).inc();
}

pub fn cache_size(len: usize) {
    metrics::get()
        .cache_size
        .set(i64::try_from(len).unwrap_or(i64::MAX));
}

fn remaining_time(deadline: &auction::Deadline) -> f64 {
    deadline
        .0
        .signed_duration_since(Utc::now())
        .num_milliseconds() as f64
        / 1000.0
}
