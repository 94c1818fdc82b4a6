//! Interactive simulation shell
//!
//! Menu loop over the four simulated capabilities. Reads one choice per
//! line, dispatches, and keeps going until `0` or end of input. All
//! interaction flows through the [`LineReader`]/[`LineWriter`] pair, so
//! whole sessions can be scripted in tests.

use crate::account::Account;
use crate::classifiers::{authenticate, matched_keyword, predict, recognize};
use crate::console::{LineReader, LineWriter};
use crate::models::Money;
use crate::orchestrator::TransactionOrchestrator;
use crate::Result;
use tracing::{debug, info};

// Fixtures used by the canned demos, matching the simulated device's
// enrolled template and recent radio history.
const DEMO_FACE_INPUT: [i32; 4] = [100, 98, 105, 97];
const DEMO_FACE_TEMPLATE: [i32; 4] = [102, 97, 106, 96];
const DEMO_SIGNAL_HISTORY: [i32; 4] = [-85, -80, -78, -90];
const DEMO_VOICE_LINE: &str = "call mom";
const DEMO_SEND_LINE: &str = "send 150 to Palesa";

pub struct Shell<R: LineReader, W: LineWriter> {
    reader: R,
    writer: W,
    account: Account,
    orchestrator: TransactionOrchestrator,
}

impl<R: LineReader, W: LineWriter> Shell<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            account: Account::default(),
            orchestrator: TransactionOrchestrator::new(),
        }
    }

    /// Run the menu loop until exit or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.print_banner()?;

        loop {
            self.print_menu()?;

            let line = match self.reader.read_line()? {
                Some(line) => line,
                None => {
                    debug!("End of input, leaving menu loop");
                    return self.write_exit();
                }
            };

            match line.trim().parse::<i64>() {
                Ok(1) => self.voice_demo()?,
                Ok(2) => self.biometric_demo()?,
                Ok(3) => self.signal_demo()?,
                Ok(4) => self.money_demo()?,
                Ok(5) => self.run_all()?,
                Ok(0) => return self.write_exit(),
                _ => {
                    debug!(input = %line, "Invalid menu choice");
                    self.writer.write_line("")?;
                    self.writer
                        .write_line("[Error] Invalid choice. Please try again.")?;
                }
            }
        }
    }

    fn print_banner(&mut self) -> Result<()> {
        self.writer
            .write_line("===========================================")?;
        self.writer
            .write_line("   AI-Enabled Mobile Processor Simulation")?;
        self.writer
            .write_line("===========================================")?;
        self.writer.write_line("")
    }

    fn print_menu(&mut self) -> Result<()> {
        self.writer.write_line("")?;
        self.writer.write_line("Choose an application to simulate:")?;
        self.writer.write_line("1. Voice Command Recognition")?;
        self.writer.write_line("2. Biometric Authentication")?;
        self.writer.write_line("3. Signal Strength Prediction")?;
        self.writer
            .write_line("4. Voice-Driven Mobile Money (Geo-tracked)")?;
        self.writer.write_line("5. Run All")?;
        self.writer.write_line("0. Exit")?;
        self.writer.write_line("Enter your choice:")
    }

    fn voice_demo(&mut self) -> Result<()> {
        self.writer.write_line("")?;
        self.writer
            .write_line("[Voice] Enter a voice command (e.g., 'call mom'):")?;
        let command = self.reader.read_line()?.unwrap_or_default();

        debug!(keyword = ?matched_keyword(&command), "Voice command classified");

        if recognize(&command) {
            self.writer
                .write_line(&format!("[Voice] Command recognized: {}", command))
        } else {
            self.writer.write_line("[Voice] No valid command detected.")
        }
    }

    fn biometric_demo(&mut self) -> Result<()> {
        self.writer.write_line("")?;
        self.writer.write_line("[Biometric] Authenticating face...")?;

        if authenticate(&DEMO_FACE_INPUT, &DEMO_FACE_TEMPLATE) {
            self.writer
                .write_line("[Biometric] Face authentication successful.")
        } else {
            self.writer.write_line("[Biometric] Authentication failed.")
        }
    }

    fn signal_demo(&mut self) -> Result<()> {
        self.writer.write_line("")?;
        self.writer
            .write_line("[Signal] Analyzing recent signal strengths...")?;

        let prediction = predict(&DEMO_SIGNAL_HISTORY);
        self.writer
            .write_line(&format!("[Signal] Network strength: {} dBm", prediction))
    }

    fn money_demo(&mut self) -> Result<()> {
        self.writer.write_line("")?;
        self.writer.write_line(
            "[Voice] Enter a voice command to send money (e.g., 'send 250 to Palesa'):",
        )?;
        let command = self.reader.read_line()?.unwrap_or_default();

        self.process_send(&command)
    }

    fn run_all(&mut self) -> Result<()> {
        self.writer.write_line("")?;
        self.writer.write_line("[All] Running full simulation...")?;

        if recognize(DEMO_VOICE_LINE) {
            self.writer
                .write_line(&format!("[Voice] Command recognized: {}", DEMO_VOICE_LINE))?;
        }

        if authenticate(&DEMO_FACE_INPUT, &DEMO_FACE_TEMPLATE) {
            self.writer
                .write_line("[Biometric] Face authentication successful.")?;
        }

        let prediction = predict(&DEMO_SIGNAL_HISTORY);
        self.writer
            .write_line(&format!("[Signal] Network strength: {} dBm", prediction))?;

        self.process_send(DEMO_SEND_LINE)
    }

    fn process_send(&mut self, command: &str) -> Result<()> {
        let confirmed = self.orchestrator.send(
            command,
            &mut self.account,
            &mut self.reader,
            &mut self.writer,
        )?;

        if !confirmed {
            self.writer
                .write_line("[Voice] Could not process voice transaction.")?;
        }
        Ok(())
    }

    fn write_exit(&mut self) -> Result<()> {
        let ledger = self.orchestrator.ledger();
        info!(
            transactions = ledger.count(),
            total_sent = ledger.total_sent(),
            final_balance = self.account.balance(),
            "Session ended"
        );

        self.writer.write_line("")?;
        if ledger.count() > 0 {
            self.writer.write_line(&format!(
                "[Info] Session summary: {} transaction(s), {} sent.",
                ledger.count(),
                Money(ledger.total_sent())
            ))?;
        }
        self.writer.write_line("[Exit] Simulation ended. Goodbye!")
    }
}
