//! CEP-18 event definitions for the faucet token
use odra::prelude::*;
use odra::casper_types::U256;

/// Event emitted when tokens are transferred
#[odra::event]
pub struct Transfer {
    /// From address
    pub from: Address,
    /// To address
    pub to: Address,
    /// Amount transferred
    pub value: U256,
}

/// Event emitted when approval is granted
#[odra::event]
pub struct Approval {
    /// Owner address
    pub owner: Address,
    /// Spender address
    pub spender: Address,
    /// Amount approved
    pub value: U256,
}

/// Event emitted when the owner toggles transfers
#[odra::event]
pub struct TransfersToggled {
    /// Whether transfers are now accepted
    pub enabled: bool,
    /// Owner that flipped the switch
    pub toggled_by: Address,
}
