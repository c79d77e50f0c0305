//! Lending and Borrowing - the deployed ledger contract
//!
//! Coordinates:
//! - Token registries (admin only)
//! - Lender supply and withdrawal
//! - Collateral deposit and release
//! - Borrowing and repayment
//!
//! Outbound pushes (withdraw, release, borrow) update the ledger before the
//! token is called. Inbound pulls (lend, deposit, repay) credit or debit the
//! ledger after the token has moved. Every balance-moving entry point holds
//! the reentrancy lock for its whole duration.

use odra::prelude::*;
use odra::casper_types::U256;
use super::borrower_ledger::BorrowerLedger;
use super::collateral_vault::CollateralVault;
use super::errors::LendingError;
use super::events::*;
use super::lender_ledger::LenderLedger;
use super::registry::{ListingSide, TokenListing, TokenRegistry};
use super::transfer_gateway::TransferGateway;
use crate::math::LedgerMath;

/// Lending and borrowing ledger contract
#[odra::module(
    events = [
        TokenListed,
        CollateralTokenSet,
        Lent,
        LentTokensWithdrawn,
        CollateralDeposited,
        CollateralReleased,
        Borrowed,
        DebtPaid
    ],
    errors = LendingError
)]
pub struct LendingAndBorrowing {
    /// Deployer, fixed for the lifetime of the contract
    admin: Var<Address>,
    /// Lending and borrowing token lists
    registry: SubModule<TokenRegistry>,
    /// Supplied balances
    lenders: SubModule<LenderLedger>,
    /// Posted collateral
    vault: SubModule<CollateralVault>,
    /// Outstanding debt
    borrowers: SubModule<BorrowerLedger>,
    /// Reentrancy lock
    locked: Var<bool>,
}

#[odra::module]
impl LendingAndBorrowing {
    /// Initialize the ledger. The caller becomes the administrator.
    pub fn init(&mut self) {
        let caller = self.env().caller();
        self.admin.set(caller);
        self.locked.set(false);
    }

    // ========================================
    // Registry (Admin)
    // ========================================

    /// List a token that suppliers may lend
    pub fn add_tokens_for_lending(&mut self, name: String, token_address: Address) {
        self.only_admin();
        self.list_token(ListingSide::Lending, name, token_address);
    }

    /// List a token that borrowers may draw
    pub fn add_tokens_for_borrowing(&mut self, name: String, token_address: Address) {
        self.only_admin();
        self.list_token(ListingSide::Borrowing, name, token_address);
    }

    /// Set the global collateral token. Last write wins.
    ///
    /// Posted balances are not migrated: they are released in the new token.
    /// Pointing this at a lending or borrowing token lets borrowers drain that
    /// token's pool liquidity with their old collateral balance.
    pub fn set_collateral_token(&mut self, token_address: Address) {
        self.only_admin();
        let previous = self.vault.set_collateral_token(token_address);

        self.env().emit_event(CollateralTokenSet {
            previous,
            token_address,
        });
    }

    pub fn get_tokens_for_lending_array(&self) -> Vec<TokenListing> {
        self.registry.listings(ListingSide::Lending)
    }

    pub fn get_tokens_for_borrowing_array(&self) -> Vec<TokenListing> {
        self.registry.listings(ListingSide::Borrowing)
    }

    pub fn is_lending_token(&self, token_address: Address) -> bool {
        self.registry.is_listed(ListingSide::Lending, token_address)
    }

    pub fn is_borrowing_token(&self, token_address: Address) -> bool {
        self.registry.is_listed(ListingSide::Borrowing, token_address)
    }

    pub fn collateral_token(&self) -> Option<Address> {
        self.vault.collateral_token()
    }

    pub fn admin(&self) -> Address {
        self.admin.get_or_revert_with(LendingError::Unauthorized)
    }

    // ========================================
    // Lending
    // ========================================

    /// Supply `amount` of a lending token. Requires prior approval.
    pub fn to_lend(&mut self, token_address: Address, amount: U256) {
        self.lock();
        self.ensure_non_zero(amount);
        self.ensure_listed(ListingSide::Lending, token_address);

        let lender = self.env().caller();
        self.gateway().pull_from(token_address, lender, amount);
        let balance = self.lenders.credit(token_address, lender, amount);

        let timestamp = self.env().get_block_time();
        self.env().emit_event(Lent {
            lender,
            token_address,
            amount,
            balance,
            timestamp,
        });
        self.unlock();
    }

    /// Take back previously supplied tokens
    pub fn to_withdraw_lent_tokens(&mut self, token_address: Address, amount: U256) {
        self.lock();
        self.ensure_listed(ListingSide::Lending, token_address);

        let lender = self.env().caller();
        let balance = self.lenders.debit(token_address, lender, amount);
        self.gateway().push_to(token_address, lender, amount);

        let timestamp = self.env().get_block_time();
        self.env().emit_event(LentTokensWithdrawn {
            lender,
            token_address,
            amount,
            balance,
            timestamp,
        });
        self.unlock();
    }

    // ========================================
    // Collateral
    // ========================================

    /// Post `amount` of the collateral token. Deposits accumulate.
    pub fn deposit_collateral(&mut self, amount: U256) {
        self.lock();
        self.ensure_non_zero(amount);
        let token_address = self.vault.require_collateral_token();

        let borrower = self.env().caller();
        self.gateway().pull_from(token_address, borrower, amount);
        let balance = self.vault.credit(borrower, amount);

        let timestamp = self.env().get_block_time();
        self.env().emit_event(CollateralDeposited {
            borrower,
            token_address,
            amount,
            balance,
            timestamp,
        });
        self.unlock();
    }

    /// Hand back posted collateral. Outstanding debt is not checked.
    pub fn release_collateral(&mut self, amount: U256) {
        self.lock();
        let token_address = self.vault.require_collateral_token();

        let borrower = self.env().caller();
        let balance = self.vault.debit(borrower, amount);
        self.gateway().push_to(token_address, borrower, amount);

        let timestamp = self.env().get_block_time();
        self.env().emit_event(CollateralReleased {
            borrower,
            token_address,
            amount,
            balance,
            timestamp,
        });
        self.unlock();
    }

    // ========================================
    // Borrowing
    // ========================================

    /// Draw `amount` of a borrowing token from the pooled liquidity
    pub fn borrow(&mut self, token_address: Address, amount: U256) {
        self.lock();
        self.ensure_non_zero(amount);
        self.ensure_listed(ListingSide::Borrowing, token_address);

        let borrower = self.env().caller();
        let debt = self.borrowers.credit(token_address, borrower, amount);
        self.gateway().push_to(token_address, borrower, amount);

        let timestamp = self.env().get_block_time();
        self.env().emit_event(Borrowed {
            borrower,
            token_address,
            amount,
            debt,
            timestamp,
        });
        self.unlock();
    }

    /// Repay outstanding debt. Requires prior approval.
    pub fn pay_debt(&mut self, token_address: Address, amount: U256) {
        self.lock();
        self.ensure_listed(ListingSide::Borrowing, token_address);

        let borrower = self.env().caller();
        if amount > self.borrowers.debt(token_address, borrower) {
            self.env().revert(LendingError::InsufficientBalance);
        }
        self.gateway().pull_from(token_address, borrower, amount);
        let debt = self.borrowers.debit(token_address, borrower, amount);

        let timestamp = self.env().get_block_time();
        self.env().emit_event(DebtPaid {
            borrower,
            token_address,
            amount,
            debt,
            timestamp,
        });
        self.unlock();
    }

    // ========================================
    // View Functions
    // ========================================

    pub fn tokens_lent_amount(&self, token_address: Address, account: Address) -> U256 {
        self.lenders.balance(token_address, account)
    }

    pub fn tokens_collateral_amount(&self, account: Address) -> U256 {
        self.vault.balance(account)
    }

    pub fn tokens_borrowed_amount(&self, token_address: Address, account: Address) -> U256 {
        self.borrowers.debt(token_address, account)
    }

    /// Amount of `token_address` the contract holds and could pay out
    pub fn available_liquidity(&self, token_address: Address) -> U256 {
        self.gateway().custodied(token_address)
    }

    // ========================================
    // Internal
    // ========================================

    fn list_token(&mut self, side: ListingSide, display_name: String, token_address: Address) {
        let index = self.registry.append(side.clone(), display_name.clone(), token_address);

        self.env().emit_event(TokenListed {
            side,
            display_name,
            token_address,
            index,
        });
    }

    fn gateway(&self) -> TransferGateway {
        TransferGateway::new(self.env())
    }

    fn only_admin(&self) {
        let caller = self.env().caller();
        let admin = self.admin.get_or_revert_with(LendingError::Unauthorized);
        if caller != admin {
            self.env().revert(LendingError::Unauthorized);
        }
    }

    fn ensure_listed(&self, side: ListingSide, token_address: Address) {
        if !self.registry.is_listed(side, token_address) {
            self.env().revert(LendingError::InvalidToken);
        }
    }

    fn ensure_non_zero(&self, amount: U256) {
        if let Err(error) = LedgerMath::non_zero(amount) {
            self.env().revert(error);
        }
    }

    fn lock(&mut self) {
        if self.locked.get_or_default() {
            self.env().revert(LendingError::Locked);
        }
        self.locked.set(true);
    }

    fn unlock(&mut self) {
        self.locked.set(false);
    }
}
