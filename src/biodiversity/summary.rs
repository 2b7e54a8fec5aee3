use super::model::{LandUse, LandUseTrendPoint, Site};
use crate::core::wire::percent_of;
use serde::Serialize;

/// Direction of a series between its first and last point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
    /// Fewer than two points.
    Unknown,
}

/// Figures shown on the biodiversity summary cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiodiversitySummary {
    pub protected_percent: f64,
    pub restored_percent: f64,
    pub hve_percent: f64,
    pub conservation_percent: f64,
    /// Restored minus deforested hectares.
    pub net_land_change_ha: f64,
    pub site_count: usize,
    /// Sites that can be placed on the map.
    pub mapped_site_count: usize,
    pub total_site_area_ha: f64,
    pub protected_area_trend: TrendDirection,
}

/// Derives the summary cards from already-fetched figures. `trend` must be sorted by year.
#[must_use]
pub fn summarize(land: &LandUse, sites: &[Site], trend: &[LandUseTrendPoint]) -> BiodiversitySummary {
    let total = land.total_area_ha;
    BiodiversitySummary {
        protected_percent: percent_of(land.protected_area_ha, total),
        restored_percent: percent_of(land.restored_area_ha, total),
        hve_percent: percent_of(land.hve_area_ha, total),
        conservation_percent: percent_of(land.conservation_area_ha, total),
        net_land_change_ha: land.restored_area_ha - land.deforested_area_ha,
        site_count: sites.len(),
        mapped_site_count: sites.iter().filter(|s| s.coordinates().is_some()).count(),
        total_site_area_ha: sites.iter().map(|s| s.area_ha).sum(),
        protected_area_trend: direction(trend.iter().map(|p| p.protected_area_ha)),
    }
}

fn direction(mut series: impl Iterator<Item = f64>) -> TrendDirection {
    let Some(first) = series.next() else {
        return TrendDirection::Unknown;
    };
    let Some(last) = series.last() else {
        return TrendDirection::Unknown;
    };
    let delta = last - first;
    if delta.abs() < f64::EPSILON {
        TrendDirection::Stable
    } else if delta > 0.0 {
        TrendDirection::Increasing
    } else {
        TrendDirection::Decreasing
    }
}
