//! Core data models for the mobile processor simulator

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

//
// ================= Enums =================
//

/// Accepted transaction verbs. Both debit the account the same way; the
/// verb is kept for the announcement line and the receipt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Send,
    Pay,
}

//
// ================= Intent =================
//

/// Structured form of a voice transaction line, produced by the parser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Intent {
    pub verb: Verb,
    pub amount: f64,
    pub recipient: String,
}

//
// ================= Transaction =================
//

/// A fully specified transfer: parsed intent plus the operator-supplied
/// location. Built after a successful parse, before the debit attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub verb: Verb,
    pub recipient: String,
    pub amount: f64,
    pub location: String,
}

impl Transaction {
    pub fn new(intent: Intent, location: String) -> Self {
        Self {
            verb: intent.verb,
            recipient: intent.recipient,
            amount: intent.amount,
            location,
        }
    }
}

//
// ================= Receipt =================
//

/// Ledger entry for a confirmed transaction. `token` is the short opaque
/// identifier quoted to the user in the confirmation line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub receipt_id: Uuid,
    pub token: String,
    pub verb: Verb,
    pub recipient: String,
    pub amount: f64,
    pub location: String,
    pub balance_after: f64,
    pub created_at: DateTime<Utc>,
}

//
// ================= Money Display =================
//

/// Monetary rendering helper. Values are printed with the `M` currency
/// prefix and default float formatting (`M150`, `M83.25`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Money(pub f64);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.0)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verb::Send => "send",
            Verb::Pay => "pay",
        };
        write!(f, "{}", s)
    }
}
