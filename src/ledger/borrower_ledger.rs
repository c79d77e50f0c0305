//! Borrower Ledger - outstanding debt per (token, borrower)

use odra::prelude::*;
use odra::casper_types::U256;
use crate::math::LedgerMath;

/// Tracks how much of each borrowing token each borrower owes
#[odra::module]
pub struct BorrowerLedger {
    /// (token, borrower) -> outstanding debt
    debts: Mapping<(Address, Address), U256>,
}

#[odra::module]
impl BorrowerLedger {
    pub fn debt(&self, token: Address, borrower: Address) -> U256 {
        self.debts.get(&(token, borrower)).unwrap_or_default()
    }

    /// Record a new draw and return the outstanding debt
    pub fn credit(&mut self, token: Address, borrower: Address, amount: U256) -> U256 {
        let updated = LedgerMath::credit(self.debt(token, borrower), amount)
            .unwrap_or_else(|error| self.env().revert(error));
        self.debts.set(&(token, borrower), updated);
        updated
    }

    /// Record a repayment and return the outstanding debt.
    /// Repaying more than is owed fails, there is no overpayment refund.
    pub fn debit(&mut self, token: Address, borrower: Address, amount: U256) -> U256 {
        let updated = LedgerMath::debit(self.debt(token, borrower), amount)
            .unwrap_or_else(|error| self.env().revert(error));
        self.debts.set(&(token, borrower), updated);
        updated
    }
}
