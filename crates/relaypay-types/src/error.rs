//! Error types for the RelayPay settlement engine.
//!
//! All errors use the `RP_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Wire / batch errors
//! - 2xx: Balance errors
//! - 3xx: Supply errors
//! - 5xx: Arithmetic errors
//! - 9xx: General / internal errors
//!
//! Every variant here is a **whole-call fatal** condition: the call aborts
//! with pre-call state fully preserved. Per-record rejections (zero address,
//! expired, insufficient balance, bad signature) are *not* errors — they are
//! [`SkipReason`](crate::SkipReason) values inside a successful call.

use thiserror::Error;

use crate::U256;

/// Central error enum for all RelayPay operations.
#[derive(Debug, Error)]
pub enum RelaypayError {
    // =================================================================
    // Wire / Batch Errors (1xx)
    // =================================================================
    /// A wire column's length disagrees with the senders column.
    #[error("RP_ERR_100: Column length mismatch: {column} has {actual} entries, expected {expected}")]
    ColumnLengthMismatch {
        column: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The batch exceeds the configured record cap (execution budget).
    #[error("RP_ERR_101: Batch too large: {len} records, max {max}")]
    BatchTooLarge { len: usize, max: usize },

    // =================================================================
    // Balance Errors (2xx)
    // =================================================================
    /// A debit would drive a balance negative.
    #[error("RP_ERR_200: Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: U256, available: U256 },

    /// A credit would overflow a balance.
    #[error("RP_ERR_201: Balance overflow on credit")]
    BalanceOverflow,

    // =================================================================
    // Supply Errors (3xx)
    // =================================================================
    /// Supply conservation invariant violated — critical safety alert.
    #[error("RP_ERR_300: Supply invariant violation: {reason}")]
    SupplyInvariantViolation { reason: String },

    // =================================================================
    // Arithmetic Errors (5xx)
    // =================================================================
    /// `amount + relayer_fee` overflowed for the record at `index`.
    #[error("RP_ERR_500: Charge overflow in record {index}")]
    ChargeOverflow { index: usize },

    /// The running relayer fee total overflowed.
    #[error("RP_ERR_501: Relayer fee accumulation overflow")]
    FeeAccumulationOverflow,

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("RP_ERR_900: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, RelaypayError>;
