//! Lender Ledger - supplied amounts per (token, lender)

use odra::prelude::*;
use odra::casper_types::U256;
use crate::math::LedgerMath;

/// Tracks how much of each lending token each lender has supplied
#[odra::module]
pub struct LenderLedger {
    /// (token, lender) -> amount supplied and not yet withdrawn
    balances: Mapping<(Address, Address), U256>,
}

#[odra::module]
impl LenderLedger {
    pub fn balance(&self, token: Address, lender: Address) -> U256 {
        self.balances.get(&(token, lender)).unwrap_or_default()
    }

    /// Record a supply and return the new balance
    pub fn credit(&mut self, token: Address, lender: Address, amount: U256) -> U256 {
        let updated = LedgerMath::credit(self.balance(token, lender), amount)
            .unwrap_or_else(|error| self.env().revert(error));
        self.balances.set(&(token, lender), updated);
        updated
    }

    /// Record a withdrawal and return the new balance
    pub fn debit(&mut self, token: Address, lender: Address, amount: U256) -> U256 {
        let updated = LedgerMath::debit(self.balance(token, lender), amount)
            .unwrap_or_else(|error| self.env().revert(error));
        self.balances.set(&(token, lender), updated);
        updated
    }
}
