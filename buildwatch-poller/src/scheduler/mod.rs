//! Scheduler layer for the poller
//!
//! This layer drives the indefinite polling loop: fan out one status
//! fetch per builder, wait for all of them to settle, fold the results
//! into the status board, and pick the delay before the next cycle.

pub mod poller;

pub use poller::{CycleOutcome, StatusPoller};
