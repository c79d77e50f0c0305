#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]
extern crate alloc;

// CEP-18 token used for local deployments and tests
pub mod token;
pub mod errors;
pub mod events;
pub mod math;

// Lending ledger
pub mod ledger;
