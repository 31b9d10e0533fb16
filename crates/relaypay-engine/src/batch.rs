//! Wire format: parallel column arrays.
//!
//! The external entry point carries N authorizations as eight equal-length
//! columns. Mismatched lengths are malformed input — a whole-call fatal
//! error, not a skip — because a misaligned batch cannot be attributed to
//! any single record.

use relaypay_types::{
    Address, AuthorizationRecord, B256, BlockHeight, RelaypayError, Result, U256,
};

/// The N parallel sequences of one settlement call.
#[derive(Debug, Clone, Default)]
pub struct BatchColumns {
    pub senders: Vec<Address>,
    pub recipients: Vec<Address>,
    pub amounts: Vec<U256>,
    pub relayer_fees: Vec<U256>,
    pub expiry_blocks: Vec<BlockHeight>,
    pub sig_v: Vec<u8>,
    pub sig_r: Vec<B256>,
    pub sig_s: Vec<B256>,
}

impl BatchColumns {
    /// Number of records, taken from the senders column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.senders.len()
    }

    /// Whether the batch carries no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }

    /// Pivot the columns into per-index records.
    ///
    /// # Errors
    /// Returns [`RelaypayError::ColumnLengthMismatch`] naming the first
    /// column whose length disagrees with the senders column.
    pub fn into_records(self) -> Result<Vec<AuthorizationRecord>> {
        let expected = self.senders.len();
        let check = |column: &'static str, actual: usize| -> Result<()> {
            if actual == expected {
                Ok(())
            } else {
                Err(RelaypayError::ColumnLengthMismatch {
                    column,
                    expected,
                    actual,
                })
            }
        };
        check("recipients", self.recipients.len())?;
        check("amounts", self.amounts.len())?;
        check("relayer_fees", self.relayer_fees.len())?;
        check("expiry_blocks", self.expiry_blocks.len())?;
        check("sig_v", self.sig_v.len())?;
        check("sig_r", self.sig_r.len())?;
        check("sig_s", self.sig_s.len())?;

        let records = self
            .senders
            .into_iter()
            .zip(self.recipients)
            .zip(self.amounts)
            .zip(self.relayer_fees)
            .zip(self.expiry_blocks)
            .zip(self.sig_v)
            .zip(self.sig_r)
            .zip(self.sig_s)
            .map(
                |(((((((sender, recipient), amount), relayer_fee), expiry_block), v), r), s)| {
                    AuthorizationRecord {
                        sender,
                        recipient,
                        amount,
                        relayer_fee,
                        expiry_block,
                        sig_v: v,
                        sig_r: r,
                        sig_s: s,
                    }
                },
            )
            .collect();
        Ok(records)
    }
}
