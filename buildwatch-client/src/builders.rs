//! Builder-related API endpoints

use tracing::debug;

use crate::BuildbotClient;
use crate::error::{ClientError, Result};
use buildwatch_core::domain::BuilderName;
use buildwatch_core::dto::{BuildDetail, BuildListing};

impl BuildbotClient {
    /// List the builds of a builder
    ///
    /// # Arguments
    /// * `builder` - The builder to list
    ///
    /// # Returns
    /// The builds listing, keyed by build number
    pub async fn list_builds(&self, builder: &BuilderName) -> Result<BuildListing> {
        let url = format!("{}/{}/builds", self.base_url(), builder.as_str());
        self.get_json(&url).await
    }

    /// Get the detail of a single build
    ///
    /// # Arguments
    /// * `builder` - The builder the build belongs to
    /// * `number` - The build number, as it appears in the listing keys
    pub async fn get_build(&self, builder: &BuilderName, number: &str) -> Result<BuildDetail> {
        let url = format!("{}/{}/builds/{}", self.base_url(), builder.as_str(), number);
        self.get_json(&url).await
    }

    /// Fetch whether a builder's latest build succeeded
    ///
    /// Issues two sequential requests: the builds listing, then the
    /// detail of the numerically latest build. Rejects on a non-200
    /// status at either step, on transport failure, or when the builder
    /// has no builds; the caller decides what a rejection means for the
    /// aggregate state.
    pub async fn fetch_builder_status(&self, builder: &BuilderName) -> Result<bool> {
        let listing = self.list_builds(builder).await?;

        let latest = listing
            .latest_build_number()
            .ok_or_else(|| ClientError::NoBuilds(builder.as_str().to_string()))?
            .to_string();

        debug!("Builder '{}' latest build is {}", builder, latest);

        let detail = self.get_build(builder, &latest).await?;
        Ok(detail.is_successful())
    }
}
