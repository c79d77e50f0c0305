//! CEP-18 token used as lending, borrowing and collateral asset on local networks
//!
//! `FaucetToken` lets anyone mint, which makes it handy for tests and demo
//! deployments. The owner can switch transfers off so that `transfer` and
//! `transfer_from` report failure by returning `false` instead of moving funds.
use odra::prelude::*;
use odra::casper_types::U256;
use crate::events::{Approval, Transfer, TransfersToggled};
use crate::errors::TokenError;

/// Faucet token module implementing CEP-18 standard
#[odra::module(events = [Transfer, Approval, TransfersToggled], errors = TokenError)]
pub struct FaucetToken {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Token decimals
    decimals: Var<u8>,
    /// Total supply of tokens
    total_supply: Var<U256>,
    /// Balance mapping: owner -> balance
    balances: Mapping<Address, U256>,
    /// Allowance mapping: owner -> spender -> amount
    allowances: Mapping<(Address, Address), U256>,
    /// Deployer, allowed to toggle transfers
    owner: Var<Address>,
    /// When false, transfers are rejected
    transfers_enabled: Var<bool>,
}

#[odra::module]
impl FaucetToken {
    /// Initialize the token with its metadata
    pub fn init(&mut self, name: String, symbol: String, decimals: u8) {
        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(decimals);
        self.total_supply.set(U256::zero());
        self.owner.set(self.env().caller());
        self.transfers_enabled.set(true);
    }

    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    /// Get the balance of an address
    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(&owner).unwrap_or_default()
    }

    /// Get the allowance for a spender
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or_default()
    }

    /// Whether transfers are currently accepted
    pub fn transfers_enabled(&self) -> bool {
        self.transfers_enabled.get_or_default()
    }

    /// Transfer tokens to another address
    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        if !self.transfers_enabled() {
            return false;
        }
        let caller = self.env().caller();
        self.transfer_internal(caller, to, amount);
        true
    }

    /// Approve a spender to spend tokens
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.approve_internal(caller, spender, amount);
        true
    }

    /// Transfer tokens from one address to another (requires approval)
    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        if !self.transfers_enabled() {
            return false;
        }
        let caller = self.env().caller();
        let current_allowance = self.allowance(from, caller);

        if current_allowance < amount {
            self.env().revert(TokenError::InsufficientAllowance);
        }

        self.approve_internal(from, caller, current_allowance - amount);
        self.transfer_internal(from, to, amount);
        true
    }

    /// Mint new tokens to any address
    pub fn mint(&mut self, to: Address, amount: U256) {
        let new_supply = self.total_supply().checked_add(amount)
            .unwrap_or_else(|| self.env().revert(TokenError::Overflow));
        self.total_supply.set(new_supply);

        // Cannot overflow once the supply addition succeeded
        let current_balance = self.balance_of(to);
        self.balances.set(&to, current_balance + amount);

        self.env().emit_event(Transfer {
            from: Address::from(self.env().self_address()),
            to,
            value: amount,
        });
    }

    /// Owner-only switch making transfers return `false`
    pub fn set_transfers_enabled(&mut self, enabled: bool) {
        let caller = self.env().caller();
        let owner = self.owner.get_or_revert_with(TokenError::Unauthorized);
        if caller != owner {
            self.env().revert(TokenError::Unauthorized);
        }
        self.transfers_enabled.set(enabled);

        self.env().emit_event(TransfersToggled {
            enabled,
            toggled_by: caller,
        });
    }

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(TokenError::InsufficientBalance);
        }

        self.balances.set(&from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);

        self.env().emit_event(Transfer {
            from,
            to,
            value: amount,
        });
    }

    fn approve_internal(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances.set(&(owner, spender), amount);

        self.env().emit_event(Approval {
            owner,
            spender,
            value: amount,
        });
    }
}

/// External token interface for interacting with CEP-18 tokens
#[odra::external_contract]
pub trait Cep18Token {
    /// Get the balance of an address
    fn balance_of(&self, owner: Address) -> U256;

    /// Transfer tokens
    fn transfer(&mut self, to: Address, amount: U256) -> bool;

    /// Transfer tokens from another address
    fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool;

    /// Approve a spender
    fn approve(&mut self, spender: Address, amount: U256) -> bool;

    /// Get allowance
    fn allowance(&self, owner: Address, spender: Address) -> U256;

    fn total_supply(&self) -> U256;

    fn name(&self) -> String;

    fn symbol(&self) -> String;

    fn decimals(&self) -> u8;
}

#[cfg(test)]
mod tests {
    use super::*;
    use odra::host::{Deployer, HostEnv};

    fn setup() -> (HostEnv, FaucetTokenHostRef) {
        let env = odra_test::env();
        let init_args = FaucetTokenInitArgs {
            name: String::from("Token A"),
            symbol: String::from("TKA"),
            decimals: 18,
        };
        let token = FaucetToken::deploy(&env, init_args);
        (env, token)
    }

    #[test]
    fn test_init() {
        let (_, token) = setup();
        assert_eq!(token.name(), "Token A");
        assert_eq!(token.symbol(), "TKA");
        assert_eq!(token.decimals(), 18);
        assert_eq!(token.total_supply(), U256::zero());
        assert!(token.transfers_enabled());
    }

    #[test]
    fn test_anyone_can_mint() {
        let (env, mut token) = setup();
        let user = env.get_account(3);

        env.set_caller(user);
        token.mint(user, U256::from(1000));
        assert_eq!(token.balance_of(user), U256::from(1000));
        assert_eq!(token.total_supply(), U256::from(1000));
    }

    #[test]
    fn test_mint_rejects_supply_overflow() {
        let (env, mut token) = setup();
        let user1 = env.get_account(1);
        let user2 = env.get_account(2);
        token.mint(user1, U256::MAX);

        assert_eq!(
            token.try_mint(user2, U256::one()),
            Err(TokenError::Overflow.into())
        );
        assert_eq!(token.total_supply(), U256::MAX);
        assert_eq!(token.balance_of(user2), U256::zero());
    }

    #[test]
    fn test_transfer_from_consumes_allowance() {
        let (env, mut token) = setup();
        let holder = env.get_account(1);
        let spender = env.get_account(2);
        token.mint(holder, U256::from(1000));

        env.set_caller(holder);
        token.approve(spender, U256::from(300));

        env.set_caller(spender);
        assert!(token.transfer_from(holder, spender, U256::from(200)));
        assert_eq!(token.allowance(holder, spender), U256::from(100));
        assert_eq!(token.balance_of(spender), U256::from(200));

        assert_eq!(
            token.try_transfer_from(holder, spender, U256::from(101)),
            Err(TokenError::InsufficientAllowance.into())
        );
    }

    #[test]
    fn test_disabled_transfers_return_false() {
        let (env, mut token) = setup();
        let owner = env.get_account(0);
        let user1 = env.get_account(1);
        let user2 = env.get_account(2);
        token.mint(user1, U256::from(1000));

        env.set_caller(owner);
        token.set_transfers_enabled(false);

        env.set_caller(user1);
        assert!(!token.transfer(user2, U256::from(500)));
        assert_eq!(token.balance_of(user1), U256::from(1000));
        assert_eq!(token.balance_of(user2), U256::zero());
    }

    #[test]
    fn test_only_owner_toggles_transfers() {
        let (env, mut token) = setup();
        env.set_caller(env.get_account(1));
        assert_eq!(
            token.try_set_transfers_enabled(false),
            Err(TokenError::Unauthorized.into())
        );
        assert!(token.transfers_enabled());
    }
}
