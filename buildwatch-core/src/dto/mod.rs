//! Wire-format types for the buildbot JSON API
//!
//! These mirror the two payloads the poller consumes: the per-builder
//! builds listing and the single-build detail.

pub mod build;

pub use build::{BuildDetail, BuildListing};
