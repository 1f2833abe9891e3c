//! Interactive confirmation on the controlling terminal.

use std::io::{self, BufRead, IsTerminal, Write};

use integrations_aws_pinpoint::command::ConfirmPrompt;

/// Asks on stderr and reads the answer from stdin.
///
/// Without a terminal on stdin (scripts, piped input) every prompt is
/// declined; pass `--force` for unattended runs.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl ConfirmPrompt for TerminalPrompt {
    fn confirm(&self, operation: &str, target: &str) -> bool {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            eprintln!("Skipping {operation} on \"{target}\": confirmation required (use --force)");
            return false;
        }

        let mut stderr = io::stderr();
        let _ = write!(
            stderr,
            "Performing the operation \"{operation}\" on target \"{target}\".\nContinue? [y/N] "
        );
        let _ = stderr.flush();

        let mut answer = String::new();
        if stdin.lock().read_line(&mut answer).is_err() {
            return false;
        }
        parse_answer(&answer)
    }
}

fn parse_answer(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
