//! Per-account replay counters.
//!
//! For every account the committed sequence is exactly 0,1,2,3,… — no gaps,
//! no repeats, never decreased. `advance` is crate-internal: only a full
//! record commit may move a counter, at most once per record.
//!
//! Because the signed nonce is derived (`current + 1`) rather than supplied,
//! two same-sender records in one batch are coupled: if the first skips, the
//! second's signature was produced against a nonce the engine will no longer
//! compute, so it skips too. That cascade is intentional — it prevents a
//! skipped authorization from being silently superseded by a later one.

use std::collections::HashMap;

use relaypay_types::{Address, Nonce};

/// Account → last committed nonce. Implicitly 0 for every account.
#[derive(Debug, Clone, Default)]
pub struct NonceRegistry {
    nonces: HashMap<Address, Nonce>,
}

impl NonceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last committed nonce for an account; 0 if it has never committed.
    #[must_use]
    pub fn current(&self, account: Address) -> Nonce {
        self.nonces.get(&account).copied().unwrap_or_default()
    }

    /// Advance an account's counter by exactly one. Called only on a full
    /// record commit.
    pub(crate) fn advance(&mut self, account: Address) {
        *self.nonces.entry(account).or_default() += 1;
    }

    /// Number of accounts that have ever committed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nonces.len()
    }

    /// Whether no account has ever committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nonces.is_empty()
    }
}
