mod state;

pub use state::{DashboardState, LoadingFlags};

use crate::{
    biodiversity::{BiodiversityBuilder, BiodiversityLandUse},
    company::Company,
    core::{EsgClient, EsgError, RetryConfig},
    governance::{GovernanceBoard, GovernanceBuilder},
    report::DashboardReport,
    years::{latest_year, resolve_years},
};
use futures::future::join_all;

/// Both dashboard panels for one year. Each half succeeds or fails on its own.
#[derive(Debug)]
pub struct Overview {
    /// The requested year, or the one the backend answered with when none was asked for.
    pub year: Option<i32>,
    pub governance: Result<GovernanceBoard, EsgError>,
    pub biodiversity: Result<BiodiversityLandUse, EsgError>,
}

impl Overview {
    /// The year list reported by whichever panel loaded, governance first.
    pub fn backend_years(&self) -> Option<&[i32]> {
        let gov = self.governance.as_ref().ok().map(|g| g.available_years.as_slice());
        let bio = self.biodiversity.as_ref().ok().map(|b| b.available_years.as_slice());
        gov.filter(|y| !y.is_empty())
            .or_else(|| bio.filter(|y| !y.is_empty()))
    }

    pub fn is_complete(&self) -> bool {
        self.governance.is_ok() && self.biodiversity.is_ok()
    }
}

/// A high-level interface for one selected company, giving access to every dashboard panel.
///
/// # Example
///
/// ```no_run
/// # use esg_dashboard::{CompanyBuilder, Dashboard, EsgClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EsgClient::default();
/// let company = CompanyBuilder::new(&client).get("42").await?;
/// let dashboard = Dashboard::new(&client, company);
///
/// if let Some(year) = dashboard.latest_year() {
///     let governance = dashboard.governance(year).await?;
///     println!("governance score: {}", governance.score.score);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Dashboard {
    client: EsgClient,
    company: Company,
    retry_override: Option<RetryConfig>,
}

impl Dashboard {
    pub fn new(client: &EsgClient, company: Company) -> Self {
        Self {
            client: client.clone(),
            company,
            retry_override: None,
        }
    }

    /// Overrides the client's default retry policy for every fetch made through this dashboard.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    pub fn company(&self) -> &Company {
        &self.company
    }

    /// Years to offer before anything was fetched, newest first.
    pub fn available_years(&self) -> Vec<i32> {
        resolve_years(&self.company)
    }

    /// The year the dashboard opens on.
    pub fn latest_year(&self) -> Option<i32> {
        latest_year(&self.available_years())
    }

    /// # Errors
    ///
    /// See [`GovernanceBuilder::fetch`].
    pub async fn governance(&self, year: i32) -> Result<GovernanceBoard, EsgError> {
        self.governance_for(Some(year)).await
    }

    /// # Errors
    ///
    /// See [`BiodiversityBuilder::fetch`].
    pub async fn biodiversity(&self, year: i32) -> Result<BiodiversityLandUse, EsgError> {
        self.biodiversity_for(Some(year)).await
    }

    async fn governance_for(&self, year: Option<i32>) -> Result<GovernanceBoard, EsgError> {
        let mut builder = GovernanceBuilder::new(&self.client, self.company.id.as_str())
            .retry_policy(self.retry_override.clone());
        if let Some(year) = year {
            builder = builder.year(year);
        }
        builder.fetch().await
    }

    async fn biodiversity_for(&self, year: Option<i32>) -> Result<BiodiversityLandUse, EsgError> {
        let mut builder = BiodiversityBuilder::new(&self.client, self.company.id.as_str())
            .retry_policy(self.retry_override.clone());
        if let Some(year) = year {
            builder = builder.year(year);
        }
        builder.fetch().await
    }

    /// Loads both panels concurrently.
    ///
    /// With no year the backend serves its latest one, and [`Overview::year`]
    /// reports which year that was.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(company = %self.company.id)))]
    pub async fn overview(&self, year: Option<i32>) -> Overview {
        let (governance, biodiversity) =
            tokio::join!(self.governance_for(year), self.biodiversity_for(year));

        #[cfg(feature = "tracing")]
        for (panel, err) in [
            ("governance", governance.as_ref().err()),
            ("biodiversity", biodiversity.as_ref().err()),
        ] {
            if let Some(e) = err {
                tracing::warn!(panel, year = ?year, error = %e, "dashboard panel failed to load");
            }
        }

        let year = year
            .or_else(|| governance.as_ref().ok().and_then(|g| g.year))
            .or_else(|| biodiversity.as_ref().ok().and_then(|b| b.year));

        Overview {
            year,
            governance,
            biodiversity,
        }
    }

    /// Governance score per year for the trend chart, oldest first. Years that fail to load are left out.
    pub async fn governance_trend(&self, years: &[i32]) -> Vec<(i32, u8)> {
        let results = join_all(years.iter().map(|&y| async move {
            self.governance(y).await.map(|g| (y, g.score.score))
        }))
        .await;

        let mut points: Vec<(i32, u8)> = results.into_iter().filter_map(Result::ok).collect();
        points.sort_by_key(|(year, _)| *year);
        points
    }

    /// Fetches the state's selected year and stores the outcome in it.
    ///
    /// When the company's hints yield no year at all, the backend's latest is
    /// fetched and its year list is adopted. Nothing is retried here; a failure
    /// leaves its message in [`DashboardState::error`].
    pub async fn refresh(&self, state: &mut DashboardState) {
        if state.selected_company().map(|c| c.id.as_str()) != Some(self.company.id.as_str()) {
            state.select_company(self.company.clone());
        }
        state.begin_loading();
        let overview = self.overview(state.selected_year()).await;
        state.apply_overview(overview);
    }

    /// Builds an export of whatever loaded in `overview`.
    pub fn report(&self, overview: &Overview) -> DashboardReport {
        let mut report = DashboardReport::new(self.company.name.as_str(), overview.year);
        if let Ok(g) = &overview.governance {
            report = report.with_governance(g);
        }
        if let Ok(b) = &overview.biodiversity {
            report = report.with_biodiversity(b);
        }
        report
    }
}
