use {
    crate::domain::{eth, liquidity, order},
    std::collections::HashMap,
};

/// A unique solution ID. Never reused for the lifetime of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub u64);

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// A solution to an auction, as proposed by a strategy.
#[derive(Debug, Clone)]
pub struct Solution {
    pub prices: ClearingPrices,
    pub trades: Vec<Fulfillment>,
    pub interactions: Vec<LiquidityInteraction>,
    pub gas: Option<eth::Gas>,
}

/// A solution which got assigned an ID and can be revealed later.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub id: Id,
    pub solution: Solution,
}

/// A set of uniform clearing prices. They are represented as a mapping of token
/// addresses to price in an arbitrarily denominated price.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearingPrices(pub HashMap<eth::TokenAddress, eth::U256>);

impl ClearingPrices {
    /// Creates a new set of clearing prices.
    pub fn new(prices: impl IntoIterator<Item = (eth::TokenAddress, eth::U256)>) -> Self {
        Self(prices.into_iter().collect())
    }
}

/// A traded order within a solution.
#[derive(Debug, Clone)]
pub struct Fulfillment {
    order: order::Order,
    executed: eth::U256,
}

impl Fulfillment {
    /// Creates a new trade for a fully executed order.
    pub fn fill(order: order::Order) -> Self {
        let executed = match order.side {
            order::Side::Buy => order.buy.amount,
            order::Side::Sell => order.sell.amount,
        };
        Self { order, executed }
    }

    /// Get a reference to the traded order.
    pub fn order(&self) -> &order::Order {
        &self.order
    }

    /// The executed amount, denominated in the sell token for sell orders and
    /// in the buy token for buy orders.
    pub fn executed(&self) -> eth::U256 {
        self.executed
    }
}

/// An interaction using input liquidity.
#[derive(Debug, Clone)]
pub struct LiquidityInteraction {
    pub liquidity: liquidity::Liquidity,
    pub input: eth::Asset,
    pub output: eth::Asset,
    /// Whether the interaction may be skipped by settling against the
    /// settlement contract's buffers.
    pub internalize: bool,
}
