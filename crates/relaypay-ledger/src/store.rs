//! Balance store: the [`Ledger`] trait and its in-memory implementation.
//!
//! The settlement engine is generic over [`Ledger`] so it can be tested
//! against an in-memory fake implementing the same contract as a real
//! token ledger. All mutations are atomic: either the full operation
//! succeeds or the balance is unchanged.

use std::collections::HashMap;

use relaypay_types::{Address, RelaypayError, Result, U256};

use crate::conservation::SupplyTracker;

/// The balance primitives the settlement engine consumes.
///
/// `debit` must fail rather than drive a balance negative. The engine
/// pre-checks balances before debiting, so a failure here is only reachable
/// through a misbehaving implementation — but the primitive refuses anyway.
pub trait Ledger {
    /// Current balance of an account. Zero for never-seen accounts.
    fn balance_of(&self, account: Address) -> U256;

    /// Remove `amount` from an account.
    ///
    /// # Errors
    /// Returns [`RelaypayError::InsufficientBalance`] if `amount` exceeds
    /// the account's balance.
    fn debit(&mut self, account: Address, amount: U256) -> Result<()>;

    /// Add `amount` to an account.
    ///
    /// # Errors
    /// Returns [`RelaypayError::BalanceOverflow`] if the credit would
    /// overflow the balance.
    fn credit(&mut self, account: Address, amount: U256) -> Result<()>;
}

/// In-memory reference ledger: per-account balances plus mint/burn entry
/// points feeding a [`SupplyTracker`].
///
/// Minting enforces the global supply cap (total supply fits in `U256`),
/// which is what makes every downstream accumulation in the engine —
/// including the relayer fee total — safe under checked arithmetic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    /// Per-account balances.
    balances: HashMap<Address, U256>,
    /// Conservation tracker.
    supply: SupplyTracker,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint new value into an account (increases total supply).
    ///
    /// # Errors
    /// Returns [`RelaypayError::BalanceOverflow`] if the mint would push
    /// total supply past `U256::MAX`.
    pub fn mint(&mut self, account: Address, amount: U256) -> Result<()> {
        self.supply.record_mint(amount)?;
        self.credit(account, amount)?;
        tracing::debug!(%account, %amount, "minted");
        Ok(())
    }

    /// Burn value from an account (decreases total supply).
    ///
    /// # Errors
    /// Returns [`RelaypayError::InsufficientBalance`] if the account cannot
    /// cover the burn.
    pub fn burn(&mut self, account: Address, amount: U256) -> Result<()> {
        self.debit(account, amount)?;
        self.supply.record_burn(amount)?;
        tracing::debug!(%account, %amount, "burned");
        Ok(())
    }

    /// Sum of all account balances.
    #[must_use]
    pub fn total_supply(&self) -> U256 {
        self.balances
            .values()
            .fold(U256::ZERO, |acc, b| acc.saturating_add(*b))
    }

    /// Verify the conservation invariant: actual supply equals
    /// mints - burns.
    ///
    /// # Errors
    /// Returns [`RelaypayError::SupplyInvariantViolation`] on mismatch.
    pub fn verify_supply(&self) -> Result<()> {
        self.supply.verify(self.total_supply())
    }

    /// Access the conservation tracker.
    #[must_use]
    pub fn supply(&self) -> &SupplyTracker {
        &self.supply
    }
}

impl Ledger for InMemoryLedger {
    fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    fn debit(&mut self, account: Address, amount: U256) -> Result<()> {
        let balance = self.balance_of(account);
        let remaining = balance
            .checked_sub(amount)
            .ok_or(RelaypayError::InsufficientBalance {
                needed: amount,
                available: balance,
            })?;
        self.balances.insert(account, remaining);
        Ok(())
    }

    fn credit(&mut self, account: Address, amount: U256) -> Result<()> {
        let balance = self.balance_of(account);
        let updated = balance
            .checked_add(amount)
            .ok_or(RelaypayError::BalanceOverflow)?;
        self.balances.insert(account, updated);
        Ok(())
    }
}
