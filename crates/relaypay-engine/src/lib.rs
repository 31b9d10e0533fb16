//! # relaypay-engine
//!
//! **The batch authorization settlement core**: one untrusted relayer
//! submits a batch of independently signed transfer authorizations; each is
//! validated and settled individually, and no bad record can corrupt or
//! block the rest.
//!
//! ## Architecture
//!
//! ```text
//! BatchColumns ──▶ Vec<AuthorizationRecord>
//!                        │
//!                        ▼            per record, in array order
//! SettlementEngine::settle ──▶ zero-address / expiry / balance / signature
//!                        │                 │
//!                        │            skip ┘ (zero writes, continue)
//!                        ▼
//!             NonceRegistry.advance + Ledger.debit/credit
//!                        │
//!                        ▼
//!             Ledger.credit(relayer, Σ fees)   — one terminal write
//! ```
//!
//! ## Components
//!
//! 1. **[`verifier`]**: stateless ECDSA recovery — digest + (v, r, s) to
//!    signing address, `None` for anything malformed
//! 2. **[`NonceRegistry`]**: per-account monotonic counters; the signed
//!    nonce is always derived as `current + 1` at evaluation time, never
//!    supplied by the caller
//! 3. **[`BatchColumns`]**: the parallel-array wire format; unequal lengths
//!    are a whole-call fatal error
//! 4. **[`SettlementEngine`]**: the per-record validation pipeline and the
//!    ledger mutation it performs, including relayer fee aggregation
//!
//! ## Exclusive execution
//!
//! A settle call is one indivisible unit of work: `settle` takes `&mut self`
//! and `&mut impl Ledger`, so the borrow checker guarantees no other caller
//! observes or interleaves with a partially evaluated batch. Hosts sharing
//! an engine across threads must serialize calls (a single mutex or a
//! single-writer actor).

pub mod batch;
pub mod engine;
pub mod nonce_registry;
pub mod verifier;

pub use batch::BatchColumns;
pub use engine::SettlementEngine;
pub use nonce_registry::NonceRegistry;
pub use verifier::recover_signer;
