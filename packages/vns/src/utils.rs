use cosmwasm_std::{OverflowError, Uint128};
use unicode_segmentation::UnicodeSegmentation;

/// Number of user-perceived characters in `name`.
pub fn name_length(name: &str) -> u64 {
    name.graphemes(true).count() as u64
}

/// Deposit required to lock `name` at the given price per character.
pub fn lock_cost(price_per_char: Uint128, name: &str) -> Result<Uint128, OverflowError> {
    price_per_char.checked_mul(Uint128::from(name_length(name)))
}
