//! Lending Ledger - collateral-backed token lending and borrowing
//!
//! An admin lists tokens that may be lent and borrowed and picks the single
//! collateral token. Lenders supply listed tokens, borrowers post collateral
//! and draw from the liquidity the contract holds.
//!
//! There is no interest, no price oracle and no liquidation: the contract
//! is a ledger of who supplied, posted and owes what.

pub mod lending_and_borrowing;
pub mod registry;
pub mod lender_ledger;
pub mod collateral_vault;
pub mod borrower_ledger;
pub mod transfer_gateway;
pub mod errors;
pub mod events;


pub use lending_and_borrowing::LendingAndBorrowing;
pub use registry::{ListingSide, TokenListing, TokenRegistry};
pub use lender_ledger::LenderLedger;
pub use collateral_vault::CollateralVault;
pub use borrower_ledger::BorrowerLedger;
pub use transfer_gateway::TransferGateway;
pub use errors::LendingError;
pub use events::*;
