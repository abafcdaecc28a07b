//! Arbitrary precision token amounts and their decimal wire encoding.

pub mod serialization;
pub mod u256_ext;

pub use serialization::{ParseDecimalError, parse_big_uint, parse_u256};
