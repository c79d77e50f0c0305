//! Error types for the lending ledger

use odra::prelude::*;

/// Errors that can occur in the lending ledger
#[odra::odra_error]
pub enum LendingError {
    /// Caller is not the administrator
    Unauthorized = 1,
    /// Token is not listed for the operation, or no collateral token is set
    InvalidToken = 2,
    /// Amount exceeds the caller's recorded balance
    InsufficientBalance = 3,
    /// The token contract did not move the funds
    TransferFailed = 4,
    /// Zero amount not allowed
    ZeroAmount = 5,
    /// Balance would exceed U256
    MathOverflow = 6,
    /// Reentrant call into a balance-moving entry point
    Locked = 7,
}
