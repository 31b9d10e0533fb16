//! System-wide constants for the RelayPay settlement engine.

/// Maximum records allowed in a single settlement call. The in-process
/// analogue of a metered-execution budget: oversized batches are rejected
/// fatally before any state change.
pub const MAX_RECORDS_PER_BATCH: usize = 10_000;

/// Number of parallel wire columns in the external entry point.
pub const WIRE_COLUMN_COUNT: usize = 8;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "RelayPay";
