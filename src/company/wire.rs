use crate::core::wire::{de_id, de_lenient_i32};
use serde::Deserialize;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CompanyNode {
    #[serde(default, deserialize_with = "de_id", alias = "_id", alias = "companyId")]
    pub(crate) id: Option<String>,
    #[serde(alias = "companyName")]
    pub(crate) name: Option<String>,
    #[serde(alias = "sector")]
    pub(crate) industry: Option<String>,
    pub(crate) country: Option<String>,
    pub(crate) description: Option<String>,
    #[serde(alias = "logo", alias = "logo_url")]
    pub(crate) logo_url: Option<String>,
    #[serde(alias = "year_range", alias = "reportingPeriod")]
    pub(crate) year_range: Option<String>,
    #[serde(
        default,
        deserialize_with = "de_lenient_i32",
        alias = "latest_report_year"
    )]
    pub(crate) latest_report_year: Option<i32>,
}
