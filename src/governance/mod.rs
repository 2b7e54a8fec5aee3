mod api;
mod model;
mod score;
mod wire;

pub use model::{
    BoardComposition, BoardMember, Committee, Compensation, EthicsCompliance, GovernanceBoard,
};
pub use score::{
    COMPONENT_CAP, ESG_LINKED_PAY_CAP, GovernanceBreakdown, GovernanceIndicators,
    GovernanceRating, GovernanceScore, score,
};

use crate::{EsgClient, EsgError, core::RetryConfig};

/// A builder for fetching the governance and board composition view of a company.
pub struct GovernanceBuilder<'a> {
    client: &'a EsgClient,
    company_id: String,
    year: Option<i32>,
    retry_override: Option<RetryConfig>,
}

impl<'a> GovernanceBuilder<'a> {
    /// Creates a new `GovernanceBuilder` for a given company.
    pub fn new(client: &'a EsgClient, company_id: impl Into<String>) -> Self {
        Self {
            client,
            company_id: company_id.into(),
            year: None,
            retry_override: None,
        }
    }

    /// Reporting year to request. Without one the backend picks its latest.
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

    /// Fetches the governance data and computes its score.
    ///
    /// # Errors
    ///
    /// Returns [`EsgError::Validation`] for a blank company id, [`EsgError::Status`] for
    /// non-2xx answers, or a parse error if the body is not a governance document.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(company = %self.company_id, year = ?self.year)))]
    pub async fn fetch(self) -> Result<GovernanceBoard, EsgError> {
        api::fetch_governance(
            self.client,
            &self.company_id,
            self.year,
            self.retry_override.as_ref(),
        )
        .await
    }
}
