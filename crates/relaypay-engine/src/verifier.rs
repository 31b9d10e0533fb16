//! Stateless signature verification.
//!
//! Recovers the signing account from a canonical digest and an ECDSA
//! signature. Pure, total, side-effect-free: every malformed or
//! self-inconsistent input maps to `None` (a per-record skip upstream),
//! never to a fatal error.
//!
//! Off-chain signers sign the EIP-191 wrap of the record digest
//! (`"\x19Ethereum Signed Message:\n32" ‖ digest`, then keccak256); this
//! module reproduces that convention bit-for-bit before recovery.

use alloy_primitives::{Signature, eip191_hash_message};
use relaypay_types::{Address, B256, U256};

/// Recover the account that signed `digest`.
///
/// Accepts the recovery id in both conventions: 0/1 and the legacy 27/28.
/// Returns `None` when `v` is out of range, when the scalars are invalid,
/// or when no public key can be recovered — callers compare the result
/// against the claimed sender and skip on any mismatch.
#[must_use]
pub fn recover_signer(digest: B256, v: u8, r: B256, s: B256) -> Option<Address> {
    let y_parity = match v {
        0 | 27 => false,
        1 | 28 => true,
        _ => return None,
    };
    let signature = Signature::new(U256::from_be_bytes(r.0), U256::from_be_bytes(s.0), y_parity);
    signature
        .recover_address_from_prehash(&eip191_hash_message(digest))
        .ok()
}
