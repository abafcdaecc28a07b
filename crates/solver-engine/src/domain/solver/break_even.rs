//! "Break-even" strategy.
//!
//! Fills the first order of the auction exactly at its limit price by routing
//! it through the first liquidity source. It neither searches for better
//! prices nor matches orders against each other, which makes its output fully
//! predictable.

use {
    super::Strategy,
    crate::domain::{
        auction,
        eth,
        solution::{self, ClearingPrices, Fulfillment, LiquidityInteraction},
    },
};

pub struct BreakEven {
    /// The gas estimate reported for every solution.
    gas: eth::Gas,
}

impl BreakEven {
    pub fn new(gas: eth::Gas) -> Self {
        Self { gas }
    }
}

impl Strategy for BreakEven {
    fn solve(&self, auction: &auction::Auction) -> Vec<solution::Solution> {
        let (Some(order), Some(liquidity)) = (auction.orders.first(), auction.liquidity.first())
        else {
            return vec![];
        };
        if order.trades_same_token() {
            tracing::debug!(uid = %order.uid, "order sells and buys the same token");
            return vec![];
        }
        tracing::debug!(
            uid = %order.uid,
            class = ?order.class,
            liquidity = %liquidity.id.0,
            "filling order at its limit price",
        );

        let internalize =
            auction.tokens.trusted(&order.sell.token) && auction.tokens.trusted(&order.buy.token);

        vec![solution::Solution {
            prices: ClearingPrices::new([
                (order.sell.token, order.buy.amount),
                (order.buy.token, order.sell.amount),
            ]),
            trades: vec![Fulfillment::fill(order.clone())],
            interactions: vec![LiquidityInteraction {
                liquidity: liquidity.clone(),
                input: order.sell,
                output: order.buy,
                internalize,
            }],
            gas: Some(self.gas),
        }]
    }
}
