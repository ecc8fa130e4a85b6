//! Build payloads from the buildbot master
//!
//! `GET {base}/{builder}/builds` returns a JSON object keyed by
//! build-number strings; `GET {base}/{builder}/builds/{n}` returns the
//! build detail, whose `text` array encodes the outcome.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The `text` entry a successful build carries at index 1
const SUCCESS_TEXT: &str = "successful";

/// Builds listing for one builder
///
/// The object's keys are build numbers rendered as strings. The buildbot
/// master emits them in ascending order, but a JSON decoder gives no
/// ordering guarantee, so the latest build is selected by numeric value
/// rather than by position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildListing {
    builds: BTreeMap<String, serde_json::Value>,
}

impl BuildListing {
    /// Number of builds in the listing
    pub fn len(&self) -> usize {
        self.builds.len()
    }

    /// True when the builder has no builds at all
    pub fn is_empty(&self) -> bool {
        self.builds.is_empty()
    }

    /// Key of the numerically greatest build number
    ///
    /// Keys that do not parse as integers are ignored. Returns `None`
    /// for an empty listing.
    pub fn latest_build_number(&self) -> Option<&str> {
        self.builds
            .keys()
            .filter_map(|k| k.parse::<u64>().ok().map(|n| (n, k)))
            .max_by_key(|&(n, _)| n)
            .map(|(_, k)| k.as_str())
    }
}

/// Detail of a single build
///
/// Only the `text` field matters for status: the build succeeded iff
/// `text[1]` is `"successful"`. Everything else in the payload is
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildDetail {
    #[serde(default)]
    pub text: Vec<String>,
}

impl BuildDetail {
    /// Whether this build completed successfully
    ///
    /// A missing or short `text` array reads as failure, matching the
    /// original widget's falsy check.
    pub fn is_successful(&self) -> bool {
        self.text.get(1).is_some_and(|t| t == SUCCESS_TEXT)
    }
}
