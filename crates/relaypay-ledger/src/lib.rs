//! # relaypay-ledger
//!
//! The fungible-token ledger the settlement engine settles against. The
//! engine treats the ledger as an external collaborator: it consumes balance
//! state and the debit/credit primitives, nothing more.
//!
//! ## Architecture
//!
//! 1. **[`Ledger`]**: the store abstraction the engine is generic over —
//!    `balance_of` / `debit` / `credit`, with checked arithmetic on every
//!    mutation
//! 2. **[`InMemoryLedger`]**: the reference implementation, a per-account
//!    balance map plus mint/burn entry points
//! 3. **[`SupplyTracker`]**: conservation invariant checker — settlement
//!    moves value between accounts and never creates or destroys it
//!
//! Balances are `U256` and can never go negative: `debit` refuses rather
//! than underflows, `credit` refuses rather than overflows.

pub mod conservation;
pub mod store;

pub use conservation::SupplyTracker;
pub use store::{InMemoryLedger, Ledger};
