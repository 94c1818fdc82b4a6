//! Session transaction ledger
//!
//! In-memory record of every confirmed transfer in the current run. Each
//! entry carries a short opaque token, quoted back to the user in the
//! confirmation line, derived from the receipt's canonical JSON form. The
//! ledger lives and dies with the session.

use crate::models::{Transaction, TransactionReceipt};
use crate::Result;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::io::Write;
use uuid::Uuid;

/// Length of the user-facing transaction token, in hex characters.
const TOKEN_LEN: usize = 14;

/// Session-scoped receipt storage
#[derive(Debug, Default)]
pub struct SessionLedger {
    receipts: Vec<TransactionReceipt>,
}

impl SessionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a receipt for a confirmed transaction and store it.
    pub fn record(
        &mut self,
        transaction: Transaction,
        balance_after: f64,
    ) -> Result<TransactionReceipt> {
        let receipt_id = Uuid::new_v4();
        let created_at = Utc::now();
        let token = mint_token(receipt_id, &transaction, created_at)?;

        let receipt = TransactionReceipt {
            receipt_id,
            token,
            verb: transaction.verb,
            recipient: transaction.recipient,
            amount: transaction.amount,
            location: transaction.location,
            balance_after,
            created_at,
        };
        self.receipts.push(receipt.clone());

        Ok(receipt)
    }

    pub fn receipts(&self) -> &[TransactionReceipt] {
        &self.receipts
    }

    pub fn count(&self) -> usize {
        self.receipts.len()
    }

    /// Sum of all confirmed amounts this session.
    pub fn total_sent(&self) -> f64 {
        self.receipts.iter().map(|r| r.amount).sum()
    }
}

/// Short uppercase transaction token: SHA256 over the receipt's canonical
/// JSON form, streamed without an intermediate String, truncated to
/// [`TOKEN_LEN`] hex characters.
fn mint_token(
    receipt_id: Uuid,
    transaction: &Transaction,
    created_at: DateTime<Utc>,
) -> Result<String> {
    let mut hasher = Sha256::new();

    serde_json::to_writer(
        &mut HashWriter(&mut hasher),
        &(receipt_id, transaction, created_at),
    )?;

    let mut token = hex::encode(hasher.finalize());
    token.truncate(TOKEN_LEN);
    Ok(token.to_ascii_uppercase())
}

/// Adapter to allow writing into Sha256 via std::io::Write
struct HashWriter<'a, H: Digest>(&'a mut H);

impl<'a, H: Digest> Write for HashWriter<'a, H> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
