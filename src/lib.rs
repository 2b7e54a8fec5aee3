//! esg-dashboard: typed client for the ESG reporting dashboard backend.
//!
//! Fetches governance and biodiversity metrics per company and year, reshapes
//! them into view-ready models, and derives the figures the dashboard shows:
//! the governance score, land use shares, and the list of selectable years.

pub mod biodiversity;
pub mod company;
pub mod core;
pub mod dashboard;
pub mod governance;
pub mod report;
pub mod storage;
pub mod years;

pub use biodiversity::{BiodiversityBuilder, BiodiversityLandUse, BiodiversitySummary};
pub use company::{Company, CompanyBuilder, CompanyDraft, CompanySummary};
pub use crate::core::{Backoff, EsgClient, EsgClientBuilder, EsgError, RetryConfig, status_message};
pub use dashboard::{Dashboard, DashboardState, Overview};
pub use governance::{
    GovernanceBoard, GovernanceBreakdown, GovernanceBuilder, GovernanceIndicators,
    GovernanceScore,
};
pub use report::DashboardReport;
pub use storage::ImageUpload;
pub use years::{YearHints, YearSource, parse_range, resolve_years};
