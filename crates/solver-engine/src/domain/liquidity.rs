use {
    crate::domain::eth,
    bigdecimal::BigDecimal,
    std::collections::HashMap,
};

/// A source of liquidity which can be used by the solver.
///
/// The pool kind is not interpreted by the engine. Every liquidity is assumed
/// to be reachable through a Uniswap V2 compatible router.
#[derive(Debug, Clone)]
pub struct Liquidity {
    pub id: Id,
    pub address: eth::Address,
    pub router: eth::ContractAddress,
    /// The pool fee, for example `0.003` for 0.3%.
    pub fee: BigDecimal,
    pub gas: eth::Gas,
    pub kind: String,
    pub reserves: HashMap<eth::TokenAddress, eth::U256>,
}

/// An opaque ID used for uniquely identifying a liquidity source.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Id(pub String);
