pub mod contract;
mod error;
pub mod escrow;
pub mod handler;
pub mod query;
pub mod state;


pub use crate::error::ContractError;
