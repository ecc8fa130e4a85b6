//! Builder identity
//!
//! Builders are continuous-integration targets identified by the display
//! name the buildbot master uses (e.g. "Linux", "Mac Engine"). The same
//! name appears verbatim in API paths and, slugified, in the status page
//! element ids.

use serde::{Deserialize, Serialize};

/// Name of a continuous-integration builder
///
/// Wraps the display name used by the buildbot master. Ordering is by
/// name so builder listings render in a stable order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuilderName(String);

impl BuilderName {
    /// Creates a builder name from a display name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The display name as used in API paths
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased, dash-separated form of the name
    ///
    /// "Mac Engine" becomes "mac-engine". Used to key the per-builder
    /// element on the status page.
    pub fn slug(&self) -> String {
        self.0.to_lowercase().replace(' ', "-")
    }

    /// Element id of this builder's indicator on the status page
    ///
    /// # Example
    /// ```
    /// use buildwatch_core::domain::BuilderName;
    ///
    /// let name = BuilderName::new("Mac Engine");
    /// assert_eq!(name.element_id(), "buildbot-mac-engine-status");
    /// ```
    pub fn element_id(&self) -> String {
        format!("buildbot-{}-status", self.slug())
    }
}

impl std::fmt::Display for BuilderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BuilderName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
