//! Voice transaction orchestrator
//!
//! Runs one transfer attempt end to end:
//! PARSE → LOCATE → ANNOUNCE → DEBIT → CONFIRM / REJECT
//!
//! Every failure is terminal for the attempt and leaves the balance
//! untouched; the outcome is reported through the writer as labeled
//! lines, never as an `Err`. Only console I/O failures propagate.

use crate::account::Account;
use crate::console::{LineReader, LineWriter};
use crate::ledger::SessionLedger;
use crate::models::{Money, Transaction};
use crate::parser::parse;
use crate::Result;
use tracing::{debug, info, warn};

/// Coordinates parser, geo prompt, account, and ledger for the
/// voice-driven money send. Owns the session ledger so confirmed
/// transfers stay queryable until exit.
pub struct TransactionOrchestrator {
    ledger: SessionLedger,
}

impl TransactionOrchestrator {
    pub fn new() -> Self {
        Self {
            ledger: SessionLedger::new(),
        }
    }

    pub fn ledger(&self) -> &SessionLedger {
        &self.ledger
    }

    /// Process one voice transaction line. `Ok(true)` means the debit
    /// confirmed; `Ok(false)` is a handled business failure already
    /// reported to the writer.
    pub fn send<R: LineReader, W: LineWriter>(
        &mut self,
        line: &str,
        account: &mut Account,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<bool> {
        // === PARSE ===
        let intent = match parse(line) {
            Ok(intent) => intent,
            Err(err) => {
                warn!(%err, line, "Voice transaction rejected at parse");
                writer.write_line(&format!("[Error] {}", err))?;
                return Ok(false);
            }
        };

        debug!(
            verb = %intent.verb,
            amount = intent.amount,
            recipient = %intent.recipient,
            "Voice transaction parsed"
        );

        // === LOCATE ===
        writer.write_line("[Geo] Enter your current location (e.g., Maseru, Roma):")?;
        let location = reader.read_line()?.unwrap_or_default();

        // === ANNOUNCE ===
        writer.write_line(&format!(
            "[Voice] Sending {} to {} from location: {}...",
            Money(intent.amount),
            intent.recipient,
            location
        ))?;

        // === DEBIT ===
        let transaction = Transaction::new(intent, location);
        match account.debit(transaction.amount) {
            Ok(new_balance) => {
                let receipt = self.ledger.record(transaction, new_balance)?;

                info!(
                    token = %receipt.token,
                    amount = receipt.amount,
                    recipient = %receipt.recipient,
                    new_balance,
                    "Transaction confirmed"
                );

                writer.write_line(&format!(
                    "[Success] {} sent successfully.",
                    Money(receipt.amount)
                ))?;
                writer.write_line(&format!(
                    "[Info] Remaining balance: {}",
                    Money(new_balance)
                ))?;
                writer.write_line(&format!(
                    "[Finance] Transact ID {} confirmed. {} sent successfully to {}.",
                    receipt.token,
                    Money(receipt.amount),
                    receipt.recipient
                ))?;
                writer.write_line(&format!(
                    "New available balance: {}",
                    Money(new_balance)
                ))?;
                writer.write_line("Customer Care: 114.")?;

                Ok(true)
            }
            Err(err) => {
                warn!(
                    %err,
                    amount = transaction.amount,
                    balance = account.balance(),
                    "Debit rejected"
                );

                writer.write_line(&format!("[Error] {}", err))?;
                writer.write_line("[Error] Mpesa failed to process your transaction.")?;
                writer.write_line("Customer Care: 114.")?;

                Ok(false)
            }
        }
    }
}

impl Default for TransactionOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    fn run_send(
        line: &str,
        account: &mut Account,
        inputs: &[&str],
    ) -> (TransactionOrchestrator, ScriptedConsole, bool) {
        let mut orchestrator = TransactionOrchestrator::new();
        let mut reader = ScriptedConsole::with_inputs(inputs);
        let mut writer = ScriptedConsole::new();

        let confirmed = orchestrator
            .send(line, account, &mut reader, &mut writer)
            .unwrap();

        (orchestrator, writer, confirmed)
    }

    #[test]
    fn test_send_confirms_and_debits() {
        let mut account = Account::default();
        let (orchestrator, writer, confirmed) =
            run_send("send 150 to Palesa", &mut account, &["Maseru"]);

        assert!(confirmed);
        assert_eq!(account.balance(), 49850.0);
        assert!(writer.contains_line(
            "[Voice] Sending M150 to Palesa from location: Maseru..."
        ));
        assert!(writer.contains_line("[Success] M150 sent successfully."));
        assert!(writer.contains_line("[Info] Remaining balance: M49850"));
        assert!(writer.contains_line("confirmed. M150 sent successfully to Palesa."));
        assert!(writer.contains_line("New available balance: M49850"));
        assert!(writer.contains_line("Customer Care: 114."));
        assert_eq!(orchestrator.ledger().count(), 1);
    }

    #[test]
    fn test_send_zero_amount_rejected_without_mutation() {
        let mut account = Account::default();
        let (orchestrator, writer, confirmed) =
            run_send("pay 0 to Palesa", &mut account, &["Maseru"]);

        assert!(!confirmed);
        assert_eq!(account.balance(), 50000.0);
        assert!(writer.contains_line("[Error] Invalid amount. Must be greater than zero."));
        assert!(writer.contains_line("[Error] Mpesa failed to process your transaction."));
        assert_eq!(orchestrator.ledger().count(), 0);
    }

    #[test]
    fn test_send_insufficient_balance_rejected_without_mutation() {
        let mut account = Account::default();
        let (orchestrator, writer, confirmed) =
            run_send("send 999999 to Palesa", &mut account, &["Maseru"]);

        assert!(!confirmed);
        assert_eq!(account.balance(), 50000.0);
        assert!(writer.contains_line("[Error] Insufficient balance."));
        assert_eq!(orchestrator.ledger().count(), 0);
    }

    #[test]
    fn test_send_parse_failure_skips_geo_prompt() {
        let mut account = Account::default();
        let (orchestrator, writer, confirmed) =
            run_send("send 100 Palesa", &mut account, &["Maseru"]);

        assert!(!confirmed);
        assert_eq!(account.balance(), 50000.0);
        assert!(writer.contains_line("[Error] Invalid format. Missing 'to'."));
        assert!(!writer.contains_line("[Geo]"));
        assert_eq!(orchestrator.ledger().count(), 0);
    }

    #[test]
    fn test_send_eof_at_geo_prompt_records_empty_location() {
        let mut account = Account::default();
        let (orchestrator, writer, confirmed) =
            run_send("send 150 to Palesa", &mut account, &[]);

        assert!(confirmed);
        assert!(writer.contains_line(
            "[Voice] Sending M150 to Palesa from location: ..."
        ));
        assert_eq!(orchestrator.ledger().receipts()[0].location, "");
    }

    #[test]
    fn test_send_sequence_conserves_balance() {
        let mut account = Account::default();
        let mut orchestrator = TransactionOrchestrator::new();

        let attempts = vec![
            ("send 150 to Palesa", true),
            ("pay 0 to Palesa", false),
            ("send 999999 to Palesa", false),
            ("pay 49.5 to Thabo", true),
        ];

        for (line, expect_confirmed) in attempts {
            let mut reader = ScriptedConsole::with_inputs(&["Roma"]);
            let mut writer = ScriptedConsole::new();
            let confirmed = orchestrator
                .send(line, &mut account, &mut reader, &mut writer)
                .unwrap();

            assert_eq!(confirmed, expect_confirmed, "line: {:?}", line);
            assert!(account.balance() >= 0.0);
        }

        assert_eq!(account.balance(), 50000.0 - 150.0 - 49.5);
        assert_eq!(orchestrator.ledger().count(), 2);
        assert_eq!(orchestrator.ledger().total_sent(), 199.5);
    }
}
