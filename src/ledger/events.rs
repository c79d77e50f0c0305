//! Events for the lending ledger

use odra::prelude::*;
use odra::casper_types::U256;
use super::registry::ListingSide;

// ============================================================================
// Registry Events
// ============================================================================

/// Event emitted when a token is appended to a registry
#[odra::event]
pub struct TokenListed {
    /// Registry the token was added to
    pub side: ListingSide,
    /// Human readable name given by the admin
    pub display_name: String,
    /// Token contract address
    pub token_address: Address,
    /// Position in the registry
    pub index: u32,
}

/// Event emitted when the collateral token is (re)configured
#[odra::event]
pub struct CollateralTokenSet {
    /// Previously configured collateral token
    pub previous: Option<Address>,
    /// New collateral token
    pub token_address: Address,
}

// ============================================================================
// Lender Events
// ============================================================================

/// Event emitted when tokens are supplied
#[odra::event]
pub struct Lent {
    pub lender: Address,
    pub token_address: Address,
    pub amount: U256,
    /// Lender balance after the operation
    pub balance: U256,
    pub timestamp: u64,
}

/// Event emitted when supplied tokens are withdrawn
#[odra::event]
pub struct LentTokensWithdrawn {
    pub lender: Address,
    pub token_address: Address,
    pub amount: U256,
    /// Lender balance after the operation
    pub balance: U256,
    pub timestamp: u64,
}

// ============================================================================
// Collateral Events
// ============================================================================

/// Event emitted when collateral is posted
#[odra::event]
pub struct CollateralDeposited {
    pub borrower: Address,
    pub token_address: Address,
    pub amount: U256,
    /// Collateral balance after the operation
    pub balance: U256,
    pub timestamp: u64,
}

/// Event emitted when collateral is handed back
#[odra::event]
pub struct CollateralReleased {
    pub borrower: Address,
    pub token_address: Address,
    pub amount: U256,
    /// Collateral balance after the operation
    pub balance: U256,
    pub timestamp: u64,
}

// ============================================================================
// Borrower Events
// ============================================================================

/// Event emitted when tokens are borrowed
#[odra::event]
pub struct Borrowed {
    pub borrower: Address,
    pub token_address: Address,
    pub amount: U256,
    /// Outstanding debt after the operation
    pub debt: U256,
    pub timestamp: u64,
}

/// Event emitted when debt is repaid
#[odra::event]
pub struct DebtPaid {
    pub borrower: Address,
    pub token_address: Address,
    pub amount: U256,
    /// Outstanding debt after the operation
    pub debt: U256,
    pub timestamp: u64,
}
