//! Error types for the mobile processor simulator

use thiserror::Error;

/// Result type alias for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Failures while parsing a voice transaction line.
///
/// Each variant names the first rule the line broke; the parser stops at
/// that rule and never partially succeeds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Command must start with 'send' or 'pay'.")]
    BadVerb,

    #[error("Invalid format. Missing 'to'.")]
    MissingSeparator,

    #[error("No numeric amount found.")]
    NoAmount,

    #[error("Invalid amount.")]
    BadAmount,

    #[error("Recipient not specified.")]
    NoRecipient,
}

/// Failures while debiting an account. The balance is untouched on every
/// variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DebitError {
    #[error("Invalid amount. Must be greater than zero.")]
    InvalidAmount,

    #[error("Insufficient balance.")]
    Insufficient,
}

#[derive(Error, Debug)]
pub enum SimulatorError {

    // =============================
    // Domain Errors
    // =============================

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Debit error: {0}")]
    Debit(#[from] DebitError),

    // =============================
    // External Library Conversions
    // =============================

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
