//! Collateral Vault - one global collateral token, one balance per borrower
//!
//! The collateral token can be replaced by the admin at any time. Balances
//! are not migrated; they are always paid out in the token configured at
//! release time.

use odra::prelude::*;
use odra::casper_types::U256;
use super::errors::LendingError;
use crate::math::LedgerMath;

/// Collateral posted by borrowers
#[odra::module]
pub struct CollateralVault {
    /// Token every borrower posts as collateral
    collateral_token: Var<Address>,
    /// borrower -> posted amount
    balances: Mapping<Address, U256>,
}

#[odra::module]
impl CollateralVault {
    pub fn collateral_token(&self) -> Option<Address> {
        self.collateral_token.get()
    }

    /// Replace the collateral token, returning the previous one.
    /// Existing balances now refer to the new token.
    pub fn set_collateral_token(&mut self, token: Address) -> Option<Address> {
        let previous = self.collateral_token.get();
        self.collateral_token.set(token);
        previous
    }

    /// Configured collateral token, reverting when none is set
    pub fn require_collateral_token(&self) -> Address {
        self.collateral_token
            .get_or_revert_with(LendingError::InvalidToken)
    }

    pub fn balance(&self, borrower: Address) -> U256 {
        self.balances.get(&borrower).unwrap_or_default()
    }

    /// Record posted collateral and return the new balance
    pub fn credit(&mut self, borrower: Address, amount: U256) -> U256 {
        let updated = LedgerMath::credit(self.balance(borrower), amount)
            .unwrap_or_else(|error| self.env().revert(error));
        self.balances.set(&borrower, updated);
        updated
    }

    /// Record released collateral and return the new balance
    pub fn debit(&mut self, borrower: Address, amount: U256) -> U256 {
        let updated = LedgerMath::debit(self.balance(borrower), amount)
            .unwrap_or_else(|error| self.env().revert(error));
        self.balances.set(&borrower, updated);
        updated
    }
}
