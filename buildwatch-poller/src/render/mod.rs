//! Render layer
//!
//! Sinks turn a board snapshot into something user-visible. The poller
//! publishes to every configured sink after each cycle; sinks must never
//! fail the cycle, so they log their own errors and return.

mod console;
mod html;

pub use console::ConsoleSink;
pub use html::{HtmlSink, render_page};

use buildwatch_core::domain::{BuilderName, StatusBoard};

/// A destination for board snapshots
///
/// `builders` is the full configured list, including builders the board
/// has never resolved; sinks decide how to show the unknown state.
pub trait StatusSink: Send + Sync {
    /// Publish one snapshot of the board
    fn publish(&self, builders: &[BuilderName], board: &StatusBoard);
}
