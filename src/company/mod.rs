mod api;
mod model;
mod wire;

pub use model::{Company, CompanyDraft, CompanySummary};

pub(crate) use api::require_id;
pub(crate) use wire::CompanyNode;

use crate::{EsgClient, EsgError, core::RetryConfig, storage::ImageUpload};

/// Entry point for listing companies and saving the company form.
pub struct CompanyBuilder<'a> {
    client: &'a EsgClient,
    retry_override: Option<RetryConfig>,
}

impl<'a> CompanyBuilder<'a> {
    pub const fn new(client: &'a EsgClient) -> Self {
        Self {
            client,
            retry_override: None,
        }
    }

    /// Overrides the default retry policy for the read calls made by this builder.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Fetches every company the current user can see.
    ///
    /// Records without an id are skipped since they cannot be selected.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn list(&self) -> Result<Vec<Company>, EsgError> {
        api::list_companies(self.client, self.retry_override.as_ref()).await
    }

    /// Fetches a single company.
    ///
    /// # Errors
    ///
    /// Returns [`EsgError::Validation`] for a blank id, otherwise any request or parse error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get(&self, company_id: &str) -> Result<Company, EsgError> {
        api::get_company(self.client, company_id, self.retry_override.as_ref()).await
    }

    /// Creates a company, uploading `logo` first when one is given.
    ///
    /// The draft is validated before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns [`EsgError::Validation`] for bad input, [`EsgError::Storage`] if the logo
    /// upload fails, or any request error from the save itself.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, draft, logo), err))]
    pub async fn create(
        &self,
        draft: &CompanyDraft,
        logo: Option<ImageUpload>,
    ) -> Result<Company, EsgError> {
        api::save_company(self.client, api::SaveTarget::Create, draft, logo).await
    }

    /// Updates an existing company, uploading `logo` first when one is given.
    ///
    /// # Errors
    ///
    /// Same as [`CompanyBuilder::create`], plus [`EsgError::Validation`] for a blank id.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, draft, logo), err))]
    pub async fn update(
        &self,
        company_id: &str,
        draft: &CompanyDraft,
        logo: Option<ImageUpload>,
    ) -> Result<Company, EsgError> {
        api::save_company(self.client, api::SaveTarget::Update(company_id), draft, logo).await
    }
}
