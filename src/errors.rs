//! Error definitions shared outside the lending module
use odra::prelude::*;

/// Custom errors for the faucet token contract
#[odra::odra_error]
pub enum TokenError {
    /// Insufficient allowance for transfer
    InsufficientAllowance = 100,

    /// Insufficient balance for operation
    InsufficientBalance = 101,

    /// Caller is not the token owner
    Unauthorized = 102,

    /// Supply or balance would exceed U256
    Overflow = 103,
}
