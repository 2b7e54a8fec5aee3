use serde::Serialize;
use std::collections::BTreeMap;

/// Points each of the four core components can contribute.
pub const COMPONENT_CAP: f64 = 25.0;
/// Extra points available when ESG-linked pay is reported.
pub const ESG_LINKED_PAY_CAP: f64 = 10.0;

/// Independence share that earns the full board-independence component.
const INDEPENDENCE_TARGET_PERCENT: f64 = 50.0;
/// Women share that earns the full gender-diversity component.
const WOMEN_TARGET_PERCENT: f64 = 30.0;
/// ESG-linked share of variable pay that earns the full bonus.
const ESG_LINKED_PAY_TARGET_PERCENT: f64 = 20.0;
/// Ethics points when at least one regulatory incident was recorded.
const ETHICS_WITH_INCIDENTS: f64 = 15.0;

/// Raw inputs to the governance score. Missing values count as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GovernanceIndicators {
    pub independence_percent: Option<f64>,
    pub women_percent: Option<f64>,
    pub attendance_rate_percent: Option<f64>,
    pub regulatory_incidents: Option<u32>,
    /// Present only when the company reports ESG-linked executive pay.
    pub esg_linked_pay_percent: Option<f64>,
}

/// Per-component points behind a [`GovernanceScore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GovernanceBreakdown {
    pub board_independence: f64,
    pub gender_diversity: f64,
    pub committee_effectiveness: f64,
    pub ethics_compliance: f64,
    pub esg_linked_pay: Option<f64>,
}

impl GovernanceBreakdown {
    /// Components as `(name, points)` pairs, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        [
            ("boardIndependence", Some(self.board_independence)),
            ("genderDiversity", Some(self.gender_diversity)),
            ("committeeEffectiveness", Some(self.committee_effectiveness)),
            ("ethicsCompliance", Some(self.ethics_compliance)),
            ("esgLinkedPay", self.esg_linked_pay),
        ]
        .into_iter()
        .filter_map(|(name, points)| points.map(|p| (name, p)))
    }

    #[must_use]
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        self.iter().collect()
    }

    /// Sum of all components.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, p)| p).sum()
    }
}

/// Coarse rating used for the score card colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GovernanceRating {
    Excellent,
    Good,
    Fair,
    Weak,
}

impl GovernanceRating {
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::Weak,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Weak => "Needs improvement",
        }
    }
}

/// Composite governance score in `0..=100` and what it is made of.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GovernanceScore {
    pub score: u8,
    /// Denominator the components were normalized against.
    pub max_score: f64,
    pub breakdown: GovernanceBreakdown,
}

impl GovernanceScore {
    #[must_use]
    pub const fn rating(&self) -> GovernanceRating {
        GovernanceRating::from_score(self.score)
    }
}

/// Computes the governance score.
///
/// Board independence and gender diversity are capped at 25 points each.
/// Committee effectiveness scales attendance linearly and is not capped.
/// Ethics earns 25 points with no regulatory incidents and 15 otherwise.
/// Reporting ESG-linked pay adds up to 10 bonus points and also raises the
/// denominator by 10, so the result stays self-normalized.
#[must_use]
pub fn score(indicators: &GovernanceIndicators) -> GovernanceScore {
    let independence = indicators.independence_percent.unwrap_or(0.0);
    let women = indicators.women_percent.unwrap_or(0.0);
    let attendance = indicators.attendance_rate_percent.unwrap_or(0.0);
    let incidents = indicators.regulatory_incidents.unwrap_or(0);

    let mut breakdown = GovernanceBreakdown {
        board_independence: (independence / INDEPENDENCE_TARGET_PERCENT * COMPONENT_CAP)
            .min(COMPONENT_CAP),
        gender_diversity: (women / WOMEN_TARGET_PERCENT * COMPONENT_CAP).min(COMPONENT_CAP),
        committee_effectiveness: attendance / 100.0 * COMPONENT_CAP,
        ethics_compliance: if incidents == 0 {
            COMPONENT_CAP
        } else {
            ETHICS_WITH_INCIDENTS
        },
        esg_linked_pay: None,
    };
    let mut max_score = COMPONENT_CAP * 4.0;

    if let Some(pct) = indicators.esg_linked_pay_percent {
        breakdown.esg_linked_pay = Some(
            (pct / ESG_LINKED_PAY_TARGET_PERCENT * ESG_LINKED_PAY_CAP).min(ESG_LINKED_PAY_CAP),
        );
        max_score += ESG_LINKED_PAY_CAP;
    }

    let normalized = (breakdown.total() / max_score * 100.0).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = if normalized.is_finite() {
        normalized.clamp(0.0, 100.0) as u8
    } else {
        0
    };

    GovernanceScore {
        score,
        max_score,
        breakdown,
    }
}
