//! Console line I/O
//!
//! The shell talks to the operator through two single-method capabilities,
//! [`LineReader`] and [`LineWriter`], so the whole interaction surface can
//! be scripted in tests. [`Console`] is the production implementation over
//! stdin/stdout; [`ScriptedConsole`] queues input lines and captures
//! output.

use crate::Result;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait LineReader {
    /// Next input line without its trailing line ending; `None` at end of
    /// input.
    fn read_line(&mut self) -> Result<Option<String>>;
}

pub trait LineWriter {
    /// Emit one whole line. Prompts are lines too (ending in `:`), with
    /// the reply typed on the following line.
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Production console over stdin/stdout. Diagnostics go to stderr via
/// tracing, so stdout carries only the interaction surface.
#[derive(Debug, Default)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Self
    }
}

impl LineReader for Console {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        let n = io::stdin().lock().read_line(&mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }
}

impl LineWriter for Console {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(line.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
        Ok(())
    }
}

/// Scripted console for tests: queued input lines and captured output.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    outputs: Vec<String>,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs(lines: &[&str]) -> Self {
        Self {
            inputs: lines.iter().map(|l| l.to_string()).collect(),
            outputs: Vec::new(),
        }
    }

    pub fn push_input(&mut self, line: &str) {
        self.inputs.push_back(line.to_string());
    }

    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// True iff some emitted line contains `needle`.
    pub fn contains_line(&self, needle: &str) -> bool {
        self.outputs.iter().any(|l| l.contains(needle))
    }
}

impl LineReader for ScriptedConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.inputs.pop_front())
    }
}

impl LineWriter for ScriptedConsole {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.outputs.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_console_replays_inputs_in_order() {
        let mut console = ScriptedConsole::with_inputs(&["first", "second"]);

        assert_eq!(console.read_line().unwrap(), Some("first".to_string()));
        assert_eq!(console.read_line().unwrap(), Some("second".to_string()));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_scripted_console_captures_output() {
        let mut console = ScriptedConsole::new();
        console.write_line("[Info] hello").unwrap();
        console.write_line("[Exit] bye").unwrap();

        assert_eq!(console.outputs().len(), 2);
        assert!(console.contains_line("[Info] hello"));
        assert!(!console.contains_line("[Error]"));
    }

    #[test]
    fn test_push_input_appends_to_queue() {
        let mut console = ScriptedConsole::new();
        console.push_input("later");

        assert_eq!(console.read_line().unwrap(), Some("later".to_string()));
        assert_eq!(console.read_line().unwrap(), None);
    }
}
