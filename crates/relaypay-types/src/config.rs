//! Configuration for the settlement engine.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Tunables for the settlement engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Hard cap on records per settlement call. Exceeding it is a fatal,
    /// whole-call-aborting error.
    pub max_batch_records: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_batch_records: constants::MAX_RECORDS_PER_BATCH,
        }
    }
}
