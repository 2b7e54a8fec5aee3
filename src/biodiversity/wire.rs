use crate::{
    company::CompanyNode,
    core::wire::{de_lenient_f64, de_lenient_i32, de_lenient_u32, de_lenient_years},
};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BiodiversityDocument {
    pub(crate) company: Option<CompanyNode>,
    #[serde(default, deserialize_with = "de_lenient_i32")]
    pub(crate) year: Option<i32>,
    #[serde(default, deserialize_with = "de_lenient_years")]
    pub(crate) available_years: Option<Vec<i32>>,
    pub(crate) land_use: Option<LandUseNode>,
    pub(crate) biodiversity: Option<BiodiversityNode>,
    pub(crate) compliance: Option<ComplianceNode>,
    pub(crate) sites: Option<Vec<SiteNode>>,
    pub(crate) trend: Option<Vec<TrendNode>>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LandUseNode {
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) total_area_ha: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) protected_area_ha: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) restored_area_ha: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) hve_area_ha: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) conservation_area_ha: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) agricultural_area_ha: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) deforested_area_ha: Option<f64>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BiodiversityNode {
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub(crate) species_monitored: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub(crate) threatened_species: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub(crate) iucn_red_list_species: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub(crate) biodiversity_programmes: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub(crate) habitats_restored: Option<u32>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ComplianceNode {
    pub(crate) hve_compliant: Option<bool>,
    pub(crate) no_deforestation_commitment: Option<bool>,
    pub(crate) certifications: Option<Vec<String>>,
    pub(crate) last_audit_date: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SiteNode {
    pub(crate) name: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_f64", alias = "lat")]
    pub(crate) latitude: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64", alias = "lng", alias = "lon")]
    pub(crate) longitude: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) area_ha: Option<f64>,
    pub(crate) classification: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TrendNode {
    #[serde(default, deserialize_with = "de_lenient_i32")]
    pub(crate) year: Option<i32>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) protected_area_ha: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) restored_area_ha: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) deforested_area_ha: Option<f64>,
}
