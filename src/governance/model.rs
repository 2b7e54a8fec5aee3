use super::score::{GovernanceIndicators, GovernanceScore};
use crate::company::CompanySummary;
use serde::Serialize;

/// Governance and board composition for one company and year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GovernanceBoard {
    pub company: CompanySummary,
    /// The year the backend answered for, if it said.
    pub year: Option<i32>,
    /// Years the backend holds governance data for, newest first. Empty if not reported.
    pub available_years: Vec<i32>,
    pub board: BoardComposition,
    pub committees: Vec<Committee>,
    pub ethics: EthicsCompliance,
    pub compensation: Compensation,
    /// The inputs the score was computed from.
    pub indicators: GovernanceIndicators,
    pub score: GovernanceScore,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoardComposition {
    pub total_members: u32,
    pub independent_members: u32,
    pub independence_percent: f64,
    pub women_members: u32,
    pub women_percent: f64,
    /// Board meeting attendance, in percent.
    pub attendance_rate: f64,
    pub meetings_held: u32,
    pub average_tenure_years: f64,
    pub chair_independent: Option<bool>,
    pub ceo_chair_separated: Option<bool>,
    pub members: Vec<BoardMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardMember {
    pub name: String,
    pub role: String,
    pub gender: String,
    pub independent: bool,
    pub tenure_years: f64,
    pub committees: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Committee {
    pub name: String,
    pub chair: String,
    pub members: u32,
    pub independent_members: u32,
    pub independence_percent: f64,
    pub meetings_held: u32,
    pub attendance_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EthicsCompliance {
    pub regulatory_incidents: u32,
    pub corruption_cases: u32,
    pub whistleblower_reports: u32,
    /// Share of staff trained on the code of conduct, in percent.
    pub ethics_training_percent: f64,
    pub anti_corruption_policy: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Compensation {
    pub esg_linked_pay: bool,
    pub esg_linked_pay_percent: f64,
    pub ceo_pay_ratio: f64,
}
