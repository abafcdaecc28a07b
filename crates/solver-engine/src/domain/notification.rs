use {
    super::{
        auction,
        eth::{self, TokenAddress},
        solution,
    },
    std::collections::BTreeSet,
};

/// The notification about important events happened in driver, that solvers
/// need to know about.
#[derive(Debug)]
pub struct Notification {
    pub auction_id: Option<auction::Id>,
    pub solution_id: Option<SolutionId>,
    pub kind: Kind,
}

/// The solution(s) a notification refers to. The driver may merge several
/// solutions into one and then reports all of their IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionId {
    Single(solution::Id),
    Merged(Vec<solution::Id>),
}

pub type TransactionHash = [u8; 32];

/// All types of notifications solvers can be informed about.
#[derive(Debug)]
pub enum Kind {
    Timeout,
    EmptySolution,
    DuplicatedSolutionId,
    SimulationFailed { block: u64, succeeded_once: bool },
    InvalidClearingPrices,
    MissingPrice(TokenAddress),
    InvalidExecutedAmount,
    NonBufferableTokensUsed(BTreeSet<TokenAddress>),
    SolverAccountInsufficientBalance(eth::Ether),
    Success(TransactionHash),
    Revert(TransactionHash),
    DriverError(String),
    Cancelled,
    Fail,
    PostprocessingTimedOut,
    Banned { reason: String, until: u64 },
    /// Anything the engine doesn't know how to interpret, with the `kind` tag
    /// it was sent with.
    Unrecognized(Option<String>),
}

impl Kind {
    /// A short, stable label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::EmptySolution => "emptySolution",
            Self::DuplicatedSolutionId => "duplicatedSolutionId",
            Self::SimulationFailed { .. } => "simulationFailed",
            Self::InvalidClearingPrices => "invalidClearingPrices",
            Self::MissingPrice(_) => "missingPrice",
            Self::InvalidExecutedAmount => "invalidExecutedAmount",
            Self::NonBufferableTokensUsed(_) => "nonBufferableTokensUsed",
            Self::SolverAccountInsufficientBalance(_) => "solverAccountInsufficientBalance",
            Self::Success(_) => "success",
            Self::Revert(_) => "revert",
            Self::DriverError(_) => "driverError",
            Self::Cancelled => "cancelled",
            Self::Fail => "fail",
            Self::PostprocessingTimedOut => "postprocessingTimedOut",
            Self::Banned { .. } => "banned",
            Self::Unrecognized(_) => "unrecognized",
        }
    }
}
