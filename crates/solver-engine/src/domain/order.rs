//! The domain object representing a CoW Protocol order.

use {
    crate::domain::eth,
    std::fmt::{self, Debug, Display, Formatter},
};

/// A CoW Protocol order in the auction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub uid: Uid,
    pub sell: eth::Asset,
    pub buy: eth::Asset,
    pub side: Side,
    pub class: Class,
    pub partially_fillable: bool,
    pub valid_to: u32,
    pub owner: eth::Address,
    pub receiver: Option<eth::Address>,
    pub app_data: AppData,
    pub sell_token_balance: SellTokenBalance,
    pub buy_token_balance: BuyTokenBalance,
    pub signature: Signature,
    pub pre_interactions: Vec<Interaction>,
    pub post_interactions: Vec<Interaction>,
}

impl Order {
    /// Returns `true` if the order sells and buys the same token. Such orders
    /// can't be priced with uniform clearing prices.
    pub fn trades_same_token(&self) -> bool {
        self.sell.token == self.buy.token
    }
}

/// UID of an order.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Uid(pub [u8; 56]);

impl Debug for Uid {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("Uid").field(&format_args!("{self}")).finish()
    }
}

impl Display for Uid {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&const_hex::encode_prefixed(self.0))
    }
}

/// The trading side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// An order with a fixed buy amount and maximum sell amount.
    Buy,
    /// An order with a fixed sell amount and a minimum buy amount.
    Sell,
}

/// The order classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Market,
    Limit,
}

/// Where the sell amount is drawn from when the order gets settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SellTokenBalance {
    Erc20,
    External,
    Internal,
}

/// Where the buy amount is paid to when the order gets settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuyTokenBalance {
    Erc20,
    Internal,
}

/// Signature over the order data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub scheme: SigningScheme,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningScheme {
    /// The order struct is signed according to EIP-712.
    ///
    /// https://eips.ethereum.org/EIPS/eip-712
    Eip712,
    /// The order hash is signed according to EIP-191's personal_sign
    /// signature format.
    ///
    /// https://eips.ethereum.org/EIPS/eip-191
    EthSign,
    /// Signature verified according to EIP-1271 by the owner contract.
    ///
    /// https://eips.ethereum.org/EIPS/eip-1271
    Eip1271,
    /// The user approves the order with an on-chain transaction.
    PreSign,
}

/// This is a hash allowing arbitrary user data to be associated with an order.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct AppData(pub [u8; 32]);

impl Debug for AppData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AppData")
            .field(&format_args!("{}", const_hex::encode_prefixed(self.0)))
            .finish()
    }
}

/// A user provided hook executed before or after the order settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub target: eth::Address,
    pub value: eth::Ether,
    pub call_data: Vec<u8>,
}
