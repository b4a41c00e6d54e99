pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::calculator::{RevenueSplitCalculator, round_currency};
pub use crate::core::errors::ComandaError;
pub use crate::core::services::ComandaService;

#[cfg(test)]
mod tests;
