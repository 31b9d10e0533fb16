//! # relaypay-types
//!
//! Shared types, errors, and configuration for the **RelayPay** batch
//! authorization settlement engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`Address`], [`Nonce`], [`BlockHeight`], [`ReceiptId`]
//! - **Authorization model**: [`AuthorizationRecord`] and its canonical
//!   signing digest
//! - **Outcome model**: [`RecordOutcome`], [`SkipReason`], [`SettlementReport`]
//! - **Receipt model**: [`SettlementReceipt`]
//! - **Configuration**: [`EngineConfig`]
//! - **Errors**: [`RelaypayError`] with `RP_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod authorization;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod outcome;
pub mod receipt;

// Re-export all primary types at crate root for ergonomic imports:
//   use relaypay_types::{AuthorizationRecord, SkipReason, SettlementReport, ...};

pub use authorization::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use outcome::*;
pub use receipt::*;

// Constants are accessed via `relaypay_types::constants::FOO`
// (not re-exported to avoid name collisions).
