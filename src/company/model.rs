use crate::{
    core::{EsgError, wire::or_na},
    years::{REPORT_YEARS, YearSource, parse_range},
};
use serde::Serialize;

/// A company as listed in the company selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub country: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    /// Free-text reporting range such as `"2020-2023"`.
    pub year_range: Option<String>,
    pub latest_report_year: Option<i32>,
}

impl YearSource for Company {
    fn year_range(&self) -> Option<&str> {
        self.year_range.as_deref()
    }

    fn latest_report_year(&self) -> Option<i32> {
        self.latest_report_year
    }
}

/// The company header embedded in metric responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanySummary {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub country: String,
}

impl CompanySummary {
    pub(crate) fn from_node(node: Option<super::wire::CompanyNode>, requested_id: &str) -> Self {
        let node = node.unwrap_or_default();
        Self {
            id: node.id.unwrap_or_else(|| requested_id.to_string()),
            name: or_na(node.name),
            industry: or_na(node.industry),
            country: or_na(node.country),
        }
    }
}

/// Form input for creating or editing a company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDraft {
    pub name: String,
    pub industry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_report_year: Option<i32>,
}

impl CompanyDraft {
    pub fn new(name: impl Into<String>, industry: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            industry: industry.into(),
            ..Self::default()
        }
    }

    /// Checks the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`EsgError::Validation`] naming the first problem found.
    pub fn validate(&self) -> Result<(), EsgError> {
        if self.name.trim().is_empty() {
            return Err(EsgError::Validation("Company name is required.".into()));
        }
        if self.industry.trim().is_empty() {
            return Err(EsgError::Validation("Industry is required.".into()));
        }
        if let Some(year) = self.latest_report_year
            && !REPORT_YEARS.contains(&year)
        {
            return Err(EsgError::Validation(
                "Latest report year must be between 1900 and 2100.".into(),
            ));
        }
        if let Some(range) = self.year_range.as_deref()
            && !range.trim().is_empty()
            && parse_range(Some(range)).is_empty()
        {
            return Err(EsgError::Validation(
                "Year range must look like 2020-2023.".into(),
            ));
        }
        Ok(())
    }

    /// Trims text fields and drops blank optional ones.
    pub(crate) fn normalized(&self) -> Self {
        let opt = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            name: self.name.trim().to_string(),
            industry: self.industry.trim().to_string(),
            country: opt(&self.country),
            description: opt(&self.description),
            logo_url: opt(&self.logo_url),
            year_range: opt(&self.year_range),
            latest_report_year: self.latest_report_year,
        }
    }
}
