//! Checked balance arithmetic for the ledgers
//! Every ledger mutation goes through these helpers so that balances
//! never wrap and never drop below zero.
use odra::casper_types::U256;
use crate::ledger::errors::LendingError;

/// Safe balance operations for U256 ledgers
pub struct LedgerMath;

impl LedgerMath {
    /// Add `amount` to `balance`, failing on overflow
    pub fn credit(balance: U256, amount: U256) -> Result<U256, LendingError> {
        balance.checked_add(amount).ok_or(LendingError::MathOverflow)
    }

    /// Subtract `amount` from `balance`, failing when the balance is too small
    pub fn debit(balance: U256, amount: U256) -> Result<U256, LendingError> {
        balance
            .checked_sub(amount)
            .ok_or(LendingError::InsufficientBalance)
    }

    /// Reject zero amounts
    pub fn non_zero(amount: U256) -> Result<U256, LendingError> {
        if amount.is_zero() {
            return Err(LendingError::ZeroAmount);
        }
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit() {
        let balance = LedgerMath::credit(U256::from(100), U256::from(50)).unwrap();
        assert_eq!(balance, U256::from(150));

        assert_eq!(
            LedgerMath::credit(U256::MAX, U256::one()),
            Err(LendingError::MathOverflow)
        );
    }

    #[test]
    fn test_debit() {
        assert_eq!(
            LedgerMath::debit(U256::from(100), U256::from(100)),
            Ok(U256::zero())
        );
        assert_eq!(
            LedgerMath::debit(U256::from(100), U256::from(101)),
            Err(LendingError::InsufficientBalance)
        );
        // Zero is always within balance
        assert_eq!(
            LedgerMath::debit(U256::zero(), U256::zero()),
            Ok(U256::zero())
        );
    }

    #[test]
    fn test_non_zero() {
        assert_eq!(LedgerMath::non_zero(U256::zero()), Err(LendingError::ZeroAmount));
        assert_eq!(LedgerMath::non_zero(U256::one()), Ok(U256::one()));
    }
}
