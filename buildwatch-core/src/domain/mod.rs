//! Core domain types
//!
//! These types represent the builders being watched and the aggregate
//! state the poller maintains across cycles. The wire format of the
//! buildbot API lives in [`crate::dto`]; nothing here knows about HTTP.

pub mod board;
pub mod builder;

pub use board::StatusBoard;
pub use builder::BuilderName;
