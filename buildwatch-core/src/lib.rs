//! Buildwatch Core
//!
//! Core types for the buildwatch status poller.
//!
//! This crate contains:
//! - Domain types: builder identity and the aggregate status board
//! - DTOs: wire-format types for the buildbot JSON API

pub mod domain;
pub mod dto;
