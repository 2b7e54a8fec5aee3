use super::Overview;
use crate::{
    biodiversity::BiodiversityLandUse,
    company::Company,
    core::EsgError,
    governance::GovernanceBoard,
    years::{effective_years, latest_year, resolve_years},
};

/// Which fetches are still outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingFlags {
    pub governance: bool,
    pub biodiversity: bool,
}

/// Everything one dashboard screen knows. Owned by the screen and dropped on navigation.
#[derive(Debug, Default)]
pub struct DashboardState {
    companies: Vec<Company>,
    selected_company: Option<Company>,
    available_years: Vec<i32>,
    selected_year: Option<i32>,
    loading: LoadingFlags,
    error: Option<String>,
    governance: Option<GovernanceBoard>,
    biodiversity: Option<BiodiversityLandUse>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_companies(&mut self, companies: Vec<Company>) {
        self.companies = companies;
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn selected_company(&self) -> Option<&Company> {
        self.selected_company.as_ref()
    }

    /// Newest first.
    pub fn available_years(&self) -> &[i32] {
        &self.available_years
    }

    pub fn selected_year(&self) -> Option<i32> {
        self.selected_year
    }

    pub fn loading(&self) -> LoadingFlags {
        self.loading
    }

    pub fn is_loading(&self) -> bool {
        self.loading.governance || self.loading.biodiversity
    }

    /// The message to show in the error banner, if the last action failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn governance(&self) -> Option<&GovernanceBoard> {
        self.governance.as_ref()
    }

    pub fn biodiversity(&self) -> Option<&BiodiversityLandUse> {
        self.biodiversity.as_ref()
    }

    /// Selects a company, resolves its years and opens on the latest one.
    ///
    /// Returns the year that should be fetched first.
    pub fn select_company(&mut self, company: Company) -> Option<i32> {
        self.available_years = resolve_years(&company);
        self.selected_year = latest_year(&self.available_years);
        self.selected_company = Some(company);
        self.governance = None;
        self.biodiversity = None;
        self.error = None;
        self.selected_year
    }

    /// Selects a company from the loaded list by id.
    pub fn select_company_by_id(&mut self, company_id: &str) -> Option<i32> {
        let company = self.companies.iter().find(|c| c.id == company_id)?.clone();
        self.select_company(company)
    }

    /// Switches to another year. Years outside the current list are ignored.
    pub fn select_year(&mut self, year: i32) -> bool {
        if !self.available_years.contains(&year) {
            return false;
        }
        if self.selected_year != Some(year) {
            self.selected_year = Some(year);
            self.governance = None;
            self.biodiversity = None;
        }
        true
    }

    pub fn begin_loading(&mut self) {
        self.loading = LoadingFlags {
            governance: true,
            biodiversity: true,
        };
        self.error = None;
    }

    pub fn apply_governance(&mut self, result: Result<GovernanceBoard, EsgError>) {
        self.loading.governance = false;
        match result {
            Ok(board) => {
                self.adopt_backend_years(&board.available_years);
                self.governance = Some(board);
            }
            Err(e) => {
                self.governance = None;
                self.record_error(&e);
            }
        }
    }

    pub fn apply_biodiversity(&mut self, result: Result<BiodiversityLandUse, EsgError>) {
        self.loading.biodiversity = false;
        match result {
            Ok(data) => {
                self.adopt_backend_years(&data.available_years);
                self.biodiversity = Some(data);
            }
            Err(e) => {
                self.biodiversity = None;
                self.record_error(&e);
            }
        }
    }

    pub fn apply_overview(&mut self, overview: Overview) {
        self.apply_governance(overview.governance);
        self.apply_biodiversity(overview.biodiversity);
    }

    /// Stores the user-facing message for `err`.
    pub fn record_error(&mut self, err: &EsgError) {
        self.error = Some(err.user_message());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // The backend knows which years hold data; its list replaces the client-side guess.
    fn adopt_backend_years(&mut self, backend: &[i32]) {
        if backend.is_empty() {
            return;
        }
        let resolved = std::mem::take(&mut self.available_years);
        self.available_years = effective_years(resolved, Some(backend));
        if self.selected_year.is_none() {
            self.selected_year = latest_year(&self.available_years);
        }
    }
}
