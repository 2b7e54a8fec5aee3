use crate::{
    company::CompanyNode,
    core::wire::{de_lenient_f64, de_lenient_i32, de_lenient_u32, de_lenient_years},
};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GovernanceDocument {
    pub(crate) company: Option<CompanyNode>,
    #[serde(default, deserialize_with = "de_lenient_i32")]
    pub(crate) year: Option<i32>,
    #[serde(default, deserialize_with = "de_lenient_years")]
    pub(crate) available_years: Option<Vec<i32>>,
    pub(crate) board: Option<BoardNode>,
    pub(crate) committees: Option<Vec<CommitteeNode>>,
    pub(crate) ethics: Option<EthicsNode>,
    pub(crate) compensation: Option<CompensationNode>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BoardNode {
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub(crate) total_members: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub(crate) independent_members: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) independence_percent: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub(crate) women_members: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) women_percent: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) attendance_rate: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub(crate) meetings_held: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) average_tenure_years: Option<f64>,
    pub(crate) chair_independent: Option<bool>,
    pub(crate) ceo_chair_separated: Option<bool>,
    pub(crate) members: Option<Vec<MemberNode>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MemberNode {
    pub(crate) name: Option<String>,
    pub(crate) role: Option<String>,
    pub(crate) gender: Option<String>,
    pub(crate) is_independent: Option<bool>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) tenure_years: Option<f64>,
    pub(crate) committees: Option<Vec<String>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommitteeNode {
    pub(crate) name: Option<String>,
    pub(crate) chair: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub(crate) members: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub(crate) independent_members: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub(crate) meetings_held: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) attendance_rate: Option<f64>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EthicsNode {
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub(crate) regulatory_incidents: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub(crate) corruption_cases: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub(crate) whistleblower_reports: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) ethics_training_percent: Option<f64>,
    pub(crate) anti_corruption_policy: Option<bool>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CompensationNode {
    pub(crate) esg_linked_pay: Option<bool>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) esg_linked_pay_percent: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) ceo_pay_ratio: Option<f64>,
}
