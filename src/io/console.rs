//! Terminal side channel: dropped paths, filename prompts and notifications
//!
//! Stdin is read on a background thread and delivered line by line. Between
//! prompts every line is a drop event; while a prompt or notification is open
//! the next line answers it and the animation waits.

use crate::io::dragdrop::{DropEvent, parse_drop_payload};
use std::io::{BufRead, Write};
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Reply that cancels a prompt
pub const CANCEL_REPLY: &str = "-";

/// Synchronous question to the user
pub trait Prompter {
    /// Ask `message`, suggesting `default`; `None` means the user cancelled
    fn prompt(&mut self, message: &str, default: &str) -> Option<String>;
}

/// Blocking notification to the user
pub trait Notifier {
    /// Show `message` and wait until the user dismisses it
    fn alert(&mut self, message: &str);
}

/// Line-oriented console backed by a channel of input lines
pub struct Console {
    lines: Receiver<String>,
}

impl Console {
    /// Start reading stdin on a background thread
    pub fn spawn_stdin() -> Self {
        let (sender, lines) = mpsc::channel();
        thread::spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if sender.send(line).is_err() {
                    break;
                }
            }
        });
        Self { lines }
    }

    /// Console fed from an existing line channel
    pub const fn from_receiver(lines: Receiver<String>) -> Self {
        Self { lines }
    }

    /// Next pending line as a drop event, without blocking
    pub fn next_drop(&self) -> Option<DropEvent> {
        self.lines.try_recv().ok().map(|line| DropEvent::Drop {
            files: parse_drop_payload(&line),
        })
    }

    // Allow print for the interactive prompt text
    #[allow(clippy::print_stderr)]
    fn show(text: &str) {
        eprint!("{text}");
        let _ = std::io::stderr().flush();
    }
}

impl Prompter for Console {
    fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        Self::show(&format!("{message} [{default}] ('{CANCEL_REPLY}' cancels) "));
        // End of input cancels like a dismissed dialog
        let reply = self.lines.recv().ok()?;
        let reply = reply.trim();
        if reply == CANCEL_REPLY {
            None
        } else if reply.is_empty() {
            Some(default.to_string())
        } else {
            Some(reply.to_string())
        }
    }
}

impl Notifier for Console {
    fn alert(&mut self, message: &str) {
        Self::show(&format!("{message} (press Enter) "));
        let _ = self.lines.recv();
    }
}
