pub mod auction;
pub mod solution;
