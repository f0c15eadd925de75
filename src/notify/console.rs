//! Console listener: one colored line per message on stderr.

use std::io::{self, Write};

use colored::Colorize;

use super::{Channel, Listener};

/// Prints messages to stderr, prefixed by channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleListener;

impl ConsoleListener {
    /// Format a message the way it is printed.
    pub fn render(channel: Channel, message: &str) -> String {
        let prefix = match channel {
            Channel::General => "warning:".yellow().bold(),
            Channel::Calculation => "calc error:".red().bold(),
        };
        format!("  {prefix} {message}")
    }
}

impl Listener for ConsoleListener {
    fn notify(&mut self, channel: Channel, message: &str) {
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        let _ = writeln!(handle, "{}", Self::render(channel, message));
    }
}
