//! Synthetic price estimates for single trades.

use {
    crate::domain::{auction, eth, order},
    num::BigUint,
    number::u256_ext::U256Ext,
    std::collections::HashMap,
};

/// A trade to quote.
#[derive(Debug, Clone)]
pub struct Order {
    pub sell: eth::TokenAddress,
    pub buy: eth::TokenAddress,
    pub side: order::Side,
    /// The sell amount for sell orders or the buy amount for buy orders.
    pub amount: eth::U256,
    /// Accepted for compatibility with the driver, not enforced.
    pub deadline: auction::Deadline,
}

/// The result of quoting an [`Order`]. Amounts are unbounded since deriving
/// the sell amount of a buy order can exceed 256 bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub sell: eth::TokenAddress,
    pub buy: eth::TokenAddress,
    pub side: order::Side,
    pub sell_amount: BigUint,
    pub buy_amount: BigUint,
}

impl Quote {
    /// Uniform clearing prices such that
    /// `price[sell] * sell_amount == price[buy] * buy_amount`.
    pub fn clearing_prices(&self) -> HashMap<eth::TokenAddress, BigUint> {
        HashMap::from([
            (self.sell, self.buy_amount.clone()),
            (self.buy, self.sell_amount.clone()),
        ])
    }

    /// The amount computed by the estimator, i.e. the buy amount for sell
    /// orders and the sell amount for buy orders.
    pub fn counter_amount(&self) -> Result<eth::U256, Error> {
        let amount = match self.side {
            order::Side::Sell => &self.buy_amount,
            order::Side::Buy => &self.sell_amount,
        };
        eth::U256::from_big_uint(amount).map_err(|_| Error::Overflow)
    }
}

/// Produces price estimates for trades.
pub trait Estimator: Send + Sync {
    fn estimate(&self, order: &Order) -> Result<Quote, Error>;
}

/// Estimates trades at a fixed exchange ratio: selling `amount` yields
/// `amount * numerator / denominator` and buying `amount` costs
/// `amount * denominator / numerator`, rounded down.
#[derive(Debug, Clone, Copy)]
pub struct Ratio {
    numerator: u64,
    denominator: u64,
}

impl Ratio {
    pub fn new(numerator: u64, denominator: u64) -> Result<Self, Error> {
        if numerator == 0 || denominator == 0 {
            return Err(Error::InvalidRatio);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self {
            numerator: 95,
            denominator: 100,
        }
    }
}

impl Estimator for Ratio {
    fn estimate(&self, order: &Order) -> Result<Quote, Error> {
        if order.sell == order.buy {
            return Err(Error::SameTokens);
        }

        let amount = order.amount.to_big_uint();
        let (sell_amount, buy_amount) = match order.side {
            order::Side::Sell => {
                let buy = &amount * self.numerator / self.denominator;
                (amount, buy)
            }
            order::Side::Buy => {
                let sell = &amount * self.denominator / self.numerator;
                (sell, amount)
            }
        };

        Ok(Quote {
            sell: order.sell,
            buy: order.buy,
            side: order.side,
            sell_amount,
            buy_amount,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("sell and buy tokens are the same")]
    SameTokens,
    #[error("quoted amount does not fit into 256 bits")]
    Overflow,
    #[error("quote price ratio must not contain zero")]
    InvalidRatio,
}
