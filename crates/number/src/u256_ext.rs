//! Extension trait for converting between [`U256`] and unbounded integers.

use {
    alloy_primitives::U256,
    anyhow::Result,
    num::BigUint,
};

/// Extension trait for U256 to add utility methods.
pub trait U256Ext: Sized {
    /// Convert to BigUint.
    fn to_big_uint(&self) -> BigUint;

    /// Create from BigUint. Fails if the value does not fit into 256 bits.
    fn from_big_uint(input: &BigUint) -> Result<Self>;
}

impl U256Ext for U256 {
    fn to_big_uint(&self) -> BigUint {
        BigUint::from_bytes_be(self.to_be_bytes::<32>().as_slice())
    }

    fn from_big_uint(input: &BigUint) -> Result<Self> {
        let bytes = input.to_bytes_be();
        anyhow::ensure!(bytes.len() <= 32, "too large");
        Ok(U256::from_be_slice(&bytes))
    }
}
