mod api;
mod model;
mod summary;
mod wire;

pub use model::{
    BiodiversityFigures, BiodiversityLandUse, Compliance, LandUse, LandUseTrendPoint, Site,
};
pub use summary::{BiodiversitySummary, TrendDirection, summarize};

use crate::{EsgClient, EsgError, core::RetryConfig};

/// A builder for fetching biodiversity and land use data for a company.
pub struct BiodiversityBuilder<'a> {
    client: &'a EsgClient,
    company_id: String,
    year: Option<i32>,
    retry_override: Option<RetryConfig>,
}

impl<'a> BiodiversityBuilder<'a> {
    /// Creates a new `BiodiversityBuilder` for a given company.
    pub fn new(client: &'a EsgClient, company_id: impl Into<String>) -> Self {
        Self {
            client,
            company_id: company_id.into(),
            year: None,
            retry_override: None,
        }
    }

    #[must_use]
    pub const fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Fetches the land use figures and derives the summary cards.
    ///
    /// # Errors
    ///
    /// Returns [`EsgError::Validation`] for a blank company id, [`EsgError::Status`] for
    /// non-2xx answers, or a parse error if the body is not a biodiversity document.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(company = %self.company_id, year = ?self.year)))]
    pub async fn fetch(self) -> Result<BiodiversityLandUse, EsgError> {
        api::fetch_biodiversity(
            self.client,
            &self.company_id,
            self.year,
            self.retry_override.as_ref(),
        )
        .await
    }
}
