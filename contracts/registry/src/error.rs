use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw0::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized: Sender {sender} is not admin.")]
    Unauthorized { sender: String },

    #[error("NotRegistered: Name {name} is not registered.")]
    NotRegistered { name: String },

    #[error("NameTaken: Name {name} is already registered.")]
    NameTaken { name: String },

    #[error("NotOwner: Sender is {sender}, but owner is {owner}.")]
    NotOwner { sender: String, owner: String },

    #[error("StillLocked: Name is locked until {locked_until}. Current time is {current}.")]
    StillLocked { locked_until: u64, current: u64 },

    #[error("InsufficientFunds: Sent {amount}, but {required} is required.")]
    InsufficientFunds { amount: Uint128, required: Uint128 },

    #[error("EmptyName")]
    EmptyName {},

    #[error("InvalidConfig: {field} must be set and non-zero.")]
    InvalidConfig { field: String },
}
