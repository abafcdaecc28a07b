use {
    crate::domain::{auction, eth, notification, solution},
    solvers_dto::notification::{Kind, Notification, SolutionId},
};

pub fn to_domain(value: Notification) -> notification::Notification {
    notification::Notification {
        auction_id: value.auction_id.map(auction::Id),
        solution_id: value.solution_id.map(|id| match id {
            SolutionId::Single(id) => notification::SolutionId::Single(solution::Id(id)),
            SolutionId::Merged(ids) => {
                notification::SolutionId::Merged(ids.into_iter().map(solution::Id).collect())
            }
        }),
        kind: match value.kind {
            Kind::Timeout => notification::Kind::Timeout,
            Kind::EmptySolution => notification::Kind::EmptySolution,
            Kind::DuplicatedSolutionId => notification::Kind::DuplicatedSolutionId,
            Kind::SimulationFailed {
                block,
                succeeded_once,
                ..
            } => notification::Kind::SimulationFailed {
                block,
                succeeded_once,
            },
            Kind::InvalidClearingPrices => notification::Kind::InvalidClearingPrices,
            Kind::MissingPrice { token_address } => {
                notification::Kind::MissingPrice(eth::TokenAddress(token_address))
            }
            Kind::InvalidExecutedAmount => notification::Kind::InvalidExecutedAmount,
            Kind::NonBufferableTokensUsed { tokens } => {
                notification::Kind::NonBufferableTokensUsed(
                    tokens.into_iter().map(eth::TokenAddress).collect(),
                )
            }
            Kind::SolverAccountInsufficientBalance { required } => {
                notification::Kind::SolverAccountInsufficientBalance(eth::Ether(required))
            }
            Kind::Success { transaction } => notification::Kind::Success(transaction),
            Kind::Revert { transaction } => notification::Kind::Revert(transaction),
            Kind::DriverError { reason } => notification::Kind::DriverError(reason),
            Kind::Cancelled => notification::Kind::Cancelled,
            Kind::Fail => notification::Kind::Fail,
            Kind::PostprocessingTimedOut => notification::Kind::PostprocessingTimedOut,
            Kind::Banned { reason, until } => notification::Kind::Banned { reason, until },
            Kind::Unrecognized(kind) => notification::Kind::Unrecognized(kind),
        },
    }
}
