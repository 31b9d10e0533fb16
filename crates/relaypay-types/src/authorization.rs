//! # AuthorizationRecord — one signed request to move value
//!
//! An `AuthorizationRecord` is created off-chain by its signer, handed to a
//! relayer, and either consumed exactly once by the settlement engine
//! (nonce advances, balances move) or discarded with zero residual state.
//!
//! ## Lifecycle
//!
//! ```text
//!   signer ──sign──▶ relayer ──batch──▶ engine ──▶ COMMITTED
//!                                         │
//!                                         └──────▶ SKIPPED (no state change)
//! ```
//!
//! ## Security Properties
//!
//! - **Forgery-resistant**: the signature covers every transfer field
//! - **Replay-resistant**: the signed nonce is derived from engine state at
//!   evaluation time, never supplied by the caller
//! - **Context-bound**: the engine identity and the relayer identity are
//!   folded into the digest but never transmitted as record fields, so a
//!   record signed for one engine or one relayer is worthless to any other
//! - **Time-bound**: void once the chain height passes `expiry_block`

use alloy_primitives::keccak256;
use serde::{Deserialize, Serialize};

use crate::{Address, B256, BlockHeight, Nonce, U256};

/// One requested transfer and its cryptographic proof.
///
/// Carried on the wire as parallel column arrays (see the engine crate's
/// batch module); this struct is the per-index row view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationRecord {
    /// The party whose balance decreases. Must be non-zero.
    pub sender: Address,
    /// The party whose balance increases. Must be non-zero.
    pub recipient: Address,
    /// Value units moved from sender to recipient.
    pub amount: U256,
    /// Compensation for the relayer, debited from the sender in the same
    /// unit as `amount`.
    pub relayer_fee: U256,
    /// Block height beyond which this authorization is void.
    pub expiry_block: BlockHeight,
    /// ECDSA recovery id (0/1, or 27/28 in the legacy convention).
    pub sig_v: u8,
    /// ECDSA signature scalar r.
    pub sig_r: B256,
    /// ECDSA signature scalar s.
    pub sig_s: B256,
}

impl AuthorizationRecord {
    /// Total debit against the sender: `amount + relayer_fee`.
    ///
    /// Returns `None` on overflow; the engine treats that as a whole-call
    /// fatal condition, never a skip.
    #[must_use]
    pub fn charge(&self) -> Option<U256> {
        self.amount.checked_add(self.relayer_fee)
    }

    /// Canonical signing digest for this record.
    ///
    /// `keccak256` over the packed encoding:
    ///
    /// ```text
    /// sender ‖ recipient ‖ amount ‖ relayer_fee ‖ nonce ‖ expiry_block
    ///        ‖ ledger_identity ‖ relayer
    /// ```
    ///
    /// with amounts, nonce, and expiry widened to 32-byte big-endian words.
    /// `nonce` is always derived by the engine as `current(sender) + 1`;
    /// `ledger_identity` and `relayer` come from the execution context.
    /// Off-chain signers must reproduce this encoding bit-for-bit, then sign
    /// the EIP-191 wrap of the digest.
    #[must_use]
    pub fn signing_digest(
        &self,
        nonce: Nonce,
        ledger_identity: Address,
        relayer: Address,
    ) -> B256 {
        let mut payload = Vec::with_capacity(208);
        payload.extend_from_slice(self.sender.as_slice());
        payload.extend_from_slice(self.recipient.as_slice());
        payload.extend_from_slice(&self.amount.to_be_bytes::<32>());
        payload.extend_from_slice(&self.relayer_fee.to_be_bytes::<32>());
        payload.extend_from_slice(&U256::from(nonce).to_be_bytes::<32>());
        payload.extend_from_slice(&U256::from(self.expiry_block).to_be_bytes::<32>());
        payload.extend_from_slice(ledger_identity.as_slice());
        payload.extend_from_slice(relayer.as_slice());
        keccak256(&payload)
    }
}

/// Unsigned dummy record for testing skip paths. **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
impl AuthorizationRecord {
    /// Create a record with a zeroed signature (guaranteed to fail
    /// signature recovery against any sender).
    pub fn dummy(
        sender: Address,
        recipient: Address,
        amount: U256,
        relayer_fee: U256,
        expiry_block: BlockHeight,
    ) -> Self {
        Self {
            sender,
            recipient,
            amount,
            relayer_fee,
            expiry_block,
            sig_v: 0,
            sig_r: B256::ZERO,
            sig_s: B256::ZERO,
        }
    }
}
