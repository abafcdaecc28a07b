pub use alloy_primitives::{Address, U256};
use std::fmt::{self, Display, Formatter};

/// An ERC20 token address.
///
/// https://eips.ethereum.org/EIPS/eip-20
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TokenAddress(pub Address);

impl Display for TokenAddress {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl From<Address> for TokenAddress {
    fn from(value: Address) -> Self {
        Self(value)
    }
}

/// An address of a smart contract the settlement interacts with, like the
/// settlement contract itself or a router.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ContractAddress(pub Address);

/// An asset on the Ethereum blockchain. Represents a particular amount of a
/// particular token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub amount: U256,
    pub token: TokenAddress,
}

/// Gas amount.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Gas(pub u64);

/// An amount of native Ether tokens denominated in wei.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Ether(pub U256);
