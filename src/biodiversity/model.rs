use super::summary::BiodiversitySummary;
use crate::company::CompanySummary;
use serde::Serialize;

/// Biodiversity and land use figures for one company and year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiodiversityLandUse {
    pub company: CompanySummary,
    pub year: Option<i32>,
    /// Years the backend holds data for, newest first. Empty if not reported.
    pub available_years: Vec<i32>,
    pub land_use: LandUse,
    pub biodiversity: BiodiversityFigures,
    pub compliance: Compliance,
    pub sites: Vec<Site>,
    /// Oldest year first.
    pub trend: Vec<LandUseTrendPoint>,
    pub summary: BiodiversitySummary,
}

/// Areas in hectares.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LandUse {
    pub total_area_ha: f64,
    pub protected_area_ha: f64,
    pub restored_area_ha: f64,
    /// Area classified as High Conservation Value Ecosystem.
    pub hve_area_ha: f64,
    pub conservation_area_ha: f64,
    pub agricultural_area_ha: f64,
    pub deforested_area_ha: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BiodiversityFigures {
    pub species_monitored: u32,
    pub threatened_species: u32,
    pub iucn_red_list_species: u32,
    pub biodiversity_programmes: u32,
    pub habitats_restored: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Compliance {
    pub hve_compliant: Option<bool>,
    pub no_deforestation_commitment: Option<bool>,
    pub certifications: Vec<String>,
    pub last_audit_date: String,
}

/// An operating site, plotted on the map when it has valid coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Site {
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub area_ha: f64,
    pub classification: String,
}

impl Site {
    /// Both coordinates present and within WGS84 bounds.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon))
                if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) =>
            {
                Some((lat, lon))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LandUseTrendPoint {
    pub year: i32,
    pub protected_area_ha: f64,
    pub restored_area_ha: f64,
    pub deforested_area_ha: f64,
}
