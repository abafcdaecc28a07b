use {
    crate::domain::{eth, liquidity, order},
    chrono::{DateTime, Utc},
    std::{collections::HashMap, fmt, time::Duration},
};

/// The auction that the solvers need to find solutions to.
#[derive(Debug, Clone)]
pub struct Auction {
    pub id: Option<Id>,
    pub tokens: Tokens,
    pub orders: Vec<order::Order>,
    pub liquidity: Vec<liquidity::Liquidity>,
    pub gas_price: GasPrice,
    pub deadline: Deadline,
}

/// The ID of an auction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Id(pub i64);

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Information about tokens used in the auction.
#[derive(Debug, Clone, Default)]
pub struct Tokens(pub HashMap<eth::TokenAddress, Token>);

impl Tokens {
    pub fn get(&self, address: &eth::TokenAddress) -> Option<&Token> {
        self.0.get(address)
    }

    /// Whether the protocol trusts the token for internalizing interactions.
    /// Unknown tokens are never trusted.
    pub fn trusted(&self, address: &eth::TokenAddress) -> bool {
        self.get(address).is_some_and(|token| token.trusted)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub decimals: Option<u8>,
    pub symbol: Option<String>,
    pub reference_price: Option<Price>,
    pub available_balance: eth::U256,
    pub trusted: bool,
}

/// The price of a token in wei. This represents how much wei is needed to buy
/// 10**18 of another token.
#[derive(Clone, Copy, Debug)]
pub struct Price(pub eth::Ether);

/// The estimated effective gas price that will likely be used for executing the
/// settlement transaction.
#[derive(Clone, Copy, Debug)]
pub struct GasPrice(pub eth::Ether);

/// The time by which a solution has to be provided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline(pub DateTime<Utc>);

impl Deadline {
    /// Returns the amount of time left to solve. `None` if the deadline
    /// already passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.0.signed_duration_since(Utc::now()).to_std().ok()
    }

    /// Whether the deadline passed more than `grace` ago at `now`. Deadlines
    /// so far in the future that adding `grace` overflows never expire.
    pub fn expired(&self, grace: Duration, now: DateTime<Utc>) -> bool {
        chrono::Duration::from_std(grace)
            .ok()
            .and_then(|grace| self.0.checked_add_signed(grace))
            .is_some_and(|end| end < now)
    }
}
