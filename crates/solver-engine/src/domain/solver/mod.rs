//! The solver: runs a [`Strategy`] over an auction and keeps track of the
//! produced solutions until the driver reveals or settles them.

use {
    crate::{
        domain::{
            auction,
            eth,
            notification::{self, Notification},
            settlement::{self, Settlement},
            solution,
        },
        infra::{
            cache::{self, SolutionCache},
            observe,
        },
    },
    std::sync::Arc,
};

pub mod break_even;

pub use break_even::BreakEven;

/// A way of turning an auction into solutions.
pub trait Strategy: Send + Sync {
    fn solve(&self, auction: &auction::Auction) -> Vec<solution::Solution>;
}

pub struct Solver {
    strategy: Box<dyn Strategy>,
    cache: Arc<SolutionCache>,
    settlement_contract: eth::ContractAddress,
}

impl Solver {
    pub fn new(
        strategy: Box<dyn Strategy>,
        cache: Arc<SolutionCache>,
        settlement_contract: eth::ContractAddress,
    ) -> Self {
        Self {
            strategy,
            cache,
            settlement_contract,
        }
    }

    /// Solves the specified auction. Every returned solution got a fresh ID
    /// and can be revealed until the auction deadline passed.
    pub fn solve(&self, auction: &auction::Auction) -> Result<Vec<solution::Candidate>, Error> {
        observe::solve(auction);

        // Encode everything before handing out IDs so that a failure leaves
        // no partially registered solutions behind.
        let solutions = self
            .strategy
            .solve(auction)
            .into_iter()
            .map(|solution| {
                let settlement = Settlement::new(&solution, self.settlement_contract)?;
                Ok((solution, settlement))
            })
            .collect::<Result<Vec<_>, settlement::Error>>()
            .inspect_err(|err| observe::solve_error(err))?;

        let candidates = solutions
            .into_iter()
            .map(|(solution, settlement)| {
                let id = self.cache.next_id();
                self.cache.insert(
                    id,
                    cache::Entry {
                        auction_id: auction.id,
                        deadline: auction.deadline,
                        settlement,
                        settle: None,
                    },
                );
                solution::Candidate { id, solution }
            })
            .collect::<Vec<_>>();

        observe::solved(&auction.deadline, &candidates);
        Ok(candidates)
    }

    /// Returns the calldata executing a previously produced solution.
    pub fn reveal(
        &self,
        id: solution::Id,
        auction_id: auction::Id,
    ) -> Result<settlement::Calldata, RevealError> {
        let result = self
            .cache
            .settlement(id, auction_id)
            .map(|settlement| settlement.calldata(auction_id))
            .map_err(RevealError::NotFound);
        observe::revealed(id, &result);
        result
    }

    /// Records that the driver is about to execute a solution. Solutions
    /// that can't be revealed for the announced auction are only logged.
    pub fn settle(&self, id: solution::Id, settle: cache::Settle) {
        let result = self.cache.record_settle(id, settle);
        observe::settle(id, &settle, &result);
    }

    pub fn notify(&self, notification: Notification) {
        observe::notification(&notification);
        if let notification::Kind::Unrecognized(kind) = &notification.kind {
            tracing::debug!(?kind, "received unrecognized notification");
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Settlement(#[from] settlement::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum RevealError {
    #[error("solution not found: {0}")]
    NotFound(#[source] cache::LookupError),
}
