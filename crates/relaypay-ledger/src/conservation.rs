//! Supply conservation invariant checker.
//!
//! Mathematical invariant enforced after every settlement:
//! ```text
//! Σ(balances) == Σ(mints) - Σ(burns)
//! ```
//!
//! Settlement only moves value between accounts (sender → recipient,
//! sender → relayer); mints and burns are the only operations allowed to
//! change total supply. If this invariant ever breaks, something has gone
//! catastrophically wrong and the caller must halt.

use relaypay_types::{RelaypayError, Result, U256};

/// Tracks total mints and burns and validates conservation against the
/// actual sum of balances.
#[derive(Debug, Clone, Default)]
pub struct SupplyTracker {
    /// Total value minted since genesis.
    minted: U256,
    /// Total value burned since genesis.
    burned: U256,
}

impl SupplyTracker {
    /// Create a new tracker with zero supply.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mint. Refuses mints that would push total supply past
    /// `U256::MAX` — this cap is what keeps every downstream accumulation
    /// (balances, fee totals) inside checked arithmetic.
    pub fn record_mint(&mut self, amount: U256) -> Result<()> {
        let minted = self
            .minted
            .checked_add(amount)
            .ok_or(RelaypayError::BalanceOverflow)?;
        self.minted = minted;
        Ok(())
    }

    /// Record a burn.
    pub fn record_burn(&mut self, amount: U256) -> Result<()> {
        let burned = self
            .burned
            .checked_add(amount)
            .ok_or(RelaypayError::BalanceOverflow)?;
        if burned > self.minted {
            return Err(RelaypayError::SupplyInvariantViolation {
                reason: format!(
                    "burn total {burned} exceeds mint total {}",
                    self.minted
                ),
            });
        }
        self.burned = burned;
        Ok(())
    }

    /// Expected total supply: mints - burns.
    #[must_use]
    pub fn expected_supply(&self) -> U256 {
        self.minted.checked_sub(self.burned).unwrap_or_default()
    }

    /// Verify that the actual supply (sum of all balances) matches the
    /// expected supply.
    ///
    /// # Errors
    /// Returns [`RelaypayError::SupplyInvariantViolation`] if actual ≠ expected.
    pub fn verify(&self, actual_supply: U256) -> Result<()> {
        let expected = self.expected_supply();
        if actual_supply != expected {
            return Err(RelaypayError::SupplyInvariantViolation {
                reason: format!(
                    "actual supply {actual_supply} != expected {expected} \
                     (minted={}, burned={})",
                    self.minted, self.burned,
                ),
            });
        }
        Ok(())
    }

    /// Total mints since genesis.
    #[must_use]
    pub fn total_minted(&self) -> U256 {
        self.minted
    }

    /// Total burns since genesis.
    #[must_use]
    pub fn total_burned(&self) -> U256 {
        self.burned
    }
}
