//! Interactive yes/no confirmation on the terminal.

use std::io::{self, BufRead, Write};

use birthday_pass_core::confirm::{AutoConfirm, ConfirmationGate};

/// Asks on stderr and reads the answer from stdin. Anything other than
/// `y`/`yes` (case-insensitive), including a read failure, declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalGate;

impl ConfirmationGate for TerminalGate {
    fn confirm(&mut self, prompt: &str) -> bool {
        let mut stderr = io::stderr().lock();
        if write!(stderr, "{prompt} [y/N] ")
            .and_then(|()| stderr.flush())
            .is_err()
        {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_affirmative(&answer),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read confirmation");
                false
            }
        }
    }
}

/// The gate for a command: skip the prompt when `--yes` was given.
pub fn gate(assume_yes: bool) -> Box<dyn ConfirmationGate> {
    if assume_yes {
        Box::new(AutoConfirm)
    } else {
        Box::new(TerminalGate)
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
