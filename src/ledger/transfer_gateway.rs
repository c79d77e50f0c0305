//! Transfer Gateway - pull/push movements against CEP-18 token contracts
//!
//! Every token movement of the ledger goes through here. Insufficient
//! balance, missing approval and a `false` return from the token all revert
//! with `TransferFailed`, which discards every write of the enclosing call.

use alloc::rc::Rc;
use odra::prelude::*;
use odra::casper_types::U256;
use odra::{ContractEnv, ContractRef};
use super::errors::LendingError;
use crate::token::Cep18TokenContractRef;

/// Stateless adapter bound to the calling contract's environment
pub struct TransferGateway {
    env: Rc<ContractEnv>,
}

impl TransferGateway {
    pub fn new(env: Rc<ContractEnv>) -> Self {
        Self { env }
    }

    /// Pull `amount` of `token` from `from` into the contract.
    /// `from` must have approved the contract beforehand.
    pub fn pull_from(&self, token: Address, from: Address, amount: U256) {
        let custodian = Address::from(self.env.self_address());
        let mut contract = Cep18TokenContractRef::new(self.env.clone(), token);

        if contract.allowance(from, custodian) < amount || contract.balance_of(from) < amount {
            self.env.revert(LendingError::TransferFailed);
        }
        if !contract.transfer_from(from, custodian, amount) {
            self.env.revert(LendingError::TransferFailed);
        }
    }

    /// Push `amount` of `token` from the contract to `to`
    pub fn push_to(&self, token: Address, to: Address, amount: U256) {
        let mut contract = Cep18TokenContractRef::new(self.env.clone(), token);

        if self.custodied(token) < amount {
            self.env.revert(LendingError::TransferFailed);
        }
        if !contract.transfer(to, amount) {
            self.env.revert(LendingError::TransferFailed);
        }
    }

    /// Balance of `token` held by the contract
    pub fn custodied(&self, token: Address) -> U256 {
        let custodian = Address::from(self.env.self_address());
        Cep18TokenContractRef::new(self.env.clone(), token).balance_of(custodian)
    }
}
