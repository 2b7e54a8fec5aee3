//! Exportable dashboard reports (JSON and flat `section,metric,value` CSV).

use crate::{
    biodiversity::{BiodiversityLandUse, BiodiversitySummary},
    core::EsgError,
    governance::GovernanceBoard,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::{collections::BTreeMap, path::Path};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GovernanceSection {
    pub score: u8,
    pub rating: String,
    pub breakdown: BTreeMap<&'static str, f64>,
    pub board_size: u32,
    pub independence_percent: f64,
    pub women_percent: f64,
    pub attendance_rate: f64,
    pub regulatory_incidents: u32,
    pub committees: usize,
}

impl From<&GovernanceBoard> for GovernanceSection {
    fn from(g: &GovernanceBoard) -> Self {
        Self {
            score: g.score.score,
            rating: g.score.rating().label().to_string(),
            breakdown: g.score.breakdown.to_map(),
            board_size: g.board.total_members,
            independence_percent: g.board.independence_percent,
            women_percent: g.board.women_percent,
            attendance_rate: g.board.attendance_rate,
            regulatory_incidents: g.ethics.regulatory_incidents,
            committees: g.committees.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiodiversitySection {
    pub total_area_ha: f64,
    pub protected_area_ha: f64,
    pub species_monitored: u32,
    pub threatened_species: u32,
    pub certifications: Vec<String>,
    pub summary: BiodiversitySummary,
}

impl From<&BiodiversityLandUse> for BiodiversitySection {
    fn from(b: &BiodiversityLandUse) -> Self {
        Self {
            total_area_ha: b.land_use.total_area_ha,
            protected_area_ha: b.land_use.protected_area_ha,
            species_monitored: b.biodiversity.species_monitored,
            threatened_species: b.biodiversity.threatened_species,
            certifications: b.compliance.certifications.clone(),
            summary: b.summary.clone(),
        }
    }
}

/// One line of the CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub section: &'static str,
    pub metric: String,
    pub value: String,
}

impl ReportRow {
    fn new(section: &'static str, metric: impl Into<String>, value: impl ToString) -> Self {
        Self {
            section,
            metric: metric.into(),
            value: value.to_string(),
        }
    }
}

fn two_dp(v: f64) -> String {
    format!("{v:.2}")
}

/// Snapshot of what the dashboard shows for one company and year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub company: String,
    pub year: Option<i32>,
    pub generated_at: DateTime<Utc>,
    pub governance: Option<GovernanceSection>,
    pub biodiversity: Option<BiodiversitySection>,
}

impl DashboardReport {
    pub fn new(company: impl Into<String>, year: Option<i32>) -> Self {
        Self {
            company: company.into(),
            year,
            generated_at: Utc::now(),
            governance: None,
            biodiversity: None,
        }
    }

    #[must_use]
    pub fn with_governance(mut self, governance: &GovernanceBoard) -> Self {
        self.governance = Some(governance.into());
        self
    }

    #[must_use]
    pub fn with_biodiversity(mut self, biodiversity: &BiodiversityLandUse) -> Self {
        self.biodiversity = Some(biodiversity.into());
        self
    }

    /// Flattens the report into `section,metric,value` rows.
    #[must_use]
    pub fn rows(&self) -> Vec<ReportRow> {
        let mut rows = vec![
            ReportRow::new("report", "company", &self.company),
            ReportRow::new(
                "report",
                "year",
                self.year.map_or_else(|| "N/A".to_string(), |y| y.to_string()),
            ),
        ];

        if let Some(g) = &self.governance {
            rows.push(ReportRow::new("governance", "score", g.score));
            rows.push(ReportRow::new("governance", "rating", &g.rating));
            for (name, points) in &g.breakdown {
                rows.push(ReportRow::new("governance", *name, two_dp(*points)));
            }
            rows.push(ReportRow::new("governance", "boardSize", g.board_size));
            rows.push(ReportRow::new(
                "governance",
                "independencePercent",
                two_dp(g.independence_percent),
            ));
            rows.push(ReportRow::new("governance", "womenPercent", two_dp(g.women_percent)));
            rows.push(ReportRow::new(
                "governance",
                "attendanceRate",
                two_dp(g.attendance_rate),
            ));
            rows.push(ReportRow::new(
                "governance",
                "regulatoryIncidents",
                g.regulatory_incidents,
            ));
            rows.push(ReportRow::new("governance", "committees", g.committees));
        }

        if let Some(b) = &self.biodiversity {
            let s = &b.summary;
            rows.push(ReportRow::new("biodiversity", "totalAreaHa", two_dp(b.total_area_ha)));
            rows.push(ReportRow::new(
                "biodiversity",
                "protectedAreaHa",
                two_dp(b.protected_area_ha),
            ));
            rows.push(ReportRow::new(
                "biodiversity",
                "protectedPercent",
                two_dp(s.protected_percent),
            ));
            rows.push(ReportRow::new(
                "biodiversity",
                "restoredPercent",
                two_dp(s.restored_percent),
            ));
            rows.push(ReportRow::new("biodiversity", "hvePercent", two_dp(s.hve_percent)));
            rows.push(ReportRow::new(
                "biodiversity",
                "netLandChangeHa",
                two_dp(s.net_land_change_ha),
            ));
            rows.push(ReportRow::new("biodiversity", "sites", s.site_count));
            rows.push(ReportRow::new("biodiversity", "mappedSites", s.mapped_site_count));
            rows.push(ReportRow::new(
                "biodiversity",
                "speciesMonitored",
                b.species_monitored,
            ));
            rows.push(ReportRow::new(
                "biodiversity",
                "threatenedSpecies",
                b.threatened_species,
            ));
            rows.push(ReportRow::new(
                "biodiversity",
                "certifications",
                b.certifications.join("; "),
            ));
        }

        rows
    }

    /// # Errors
    ///
    /// Returns [`EsgError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, EsgError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// # Errors
    ///
    /// Returns [`EsgError::Csv`] if a row cannot be written.
    pub fn to_csv(&self) -> Result<String, EsgError> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in self.rows() {
            wtr.serialize(row)?;
        }
        let bytes = wtr.into_inner().map_err(|e| EsgError::Io(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| EsgError::Data(format!("csv output not utf-8: {e}")))
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), EsgError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be created or a row cannot be written.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<(), EsgError> {
        let mut wtr = csv::Writer::from_path(path)?;
        for row in self.rows() {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
