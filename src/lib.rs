//! AI-Enabled Mobile Processor Simulator
//!
//! A menu-driven, single-process simulation of four device capabilities:
//! - Recognizes voice commands by keyword spotting
//! - Authenticates a face vector by Euclidean distance
//! - Predicts signal strength from recent history (moving average)
//! - Sends mobile money from a parsed voice command, geo-tagged and
//!   debited against a session-local balance with a ledgered receipt
//!
//! TRANSACTION FLOW:
//! PARSE → LOCATE → ANNOUNCE → DEBIT → CONFIRM / REJECT

pub mod account;
pub mod classifiers;
pub mod console;
pub mod error;
pub mod ledger;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod shell;

pub use error::{DebitError, ParseError, Result, SimulatorError};

// Re-export common types
pub use account::Account;
pub use classifiers::{authenticate, euclidean_distance, predict, recognize};
pub use console::{Console, LineReader, LineWriter, ScriptedConsole};
pub use models::*;
pub use orchestrator::TransactionOrchestrator;
pub use parser::parse;
pub use shell::Shell;
