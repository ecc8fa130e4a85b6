//! Terminal sink
//!
//! Prints one line per builder plus the aggregate banner after each
//! cycle.

use colored::*;

use buildwatch_core::domain::{BuilderName, StatusBoard};

use crate::render::StatusSink;

/// Sink that prints the board to stdout
pub struct ConsoleSink;

impl ConsoleSink {
    /// Creates a new console sink
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSink for ConsoleSink {
    fn publish(&self, builders: &[BuilderName], board: &StatusBoard) {
        println!();
        for builder in builders {
            let state = match board.get(builder) {
                Some(true) => "passing".green(),
                Some(false) => "failing".red(),
                None => "unknown".yellow(),
            };
            println!("  {:<16} {}", builder.to_string(), state);
        }

        if board.all_green() {
            println!("{}", "All builds green.".green().bold());
        } else {
            println!("{}", "Build broken!".red().bold());
        }
    }
}
