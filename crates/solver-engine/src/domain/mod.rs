//! Core solver engine logic.

pub mod auction;
pub mod eth;
pub mod liquidity;
pub mod notification;
pub mod order;
pub mod quote;
pub mod settlement;
pub mod solution;
pub mod solver;
