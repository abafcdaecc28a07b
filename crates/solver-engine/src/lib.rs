mod api;
pub mod domain;
mod infra;
mod run;
#[cfg(test)]
mod tests;

pub use self::run::{run, start};
