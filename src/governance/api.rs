use super::{
    model::{BoardComposition, BoardMember, Committee, Compensation, EthicsCompliance, GovernanceBoard},
    score::{GovernanceIndicators, score},
    wire::{BoardNode, CommitteeNode, CompensationNode, EthicsNode, GovernanceDocument, MemberNode},
};
use crate::{
    company::{CompanySummary, require_id},
    core::{
        EsgClient, EsgError, RetryConfig, net,
        wire::{or_na, or_zero, or_zero_u32, percent_of},
    },
    years::effective_years,
};

pub(super) async fn fetch_governance(
    client: &EsgClient,
    company_id: &str,
    year: Option<i32>,
    retry_override: Option<&RetryConfig>,
) -> Result<GovernanceBoard, EsgError> {
    let id = require_id(company_id)?;
    let mut url = client.api_url(&["esg-dashboard", "governance-board", id])?;
    if let Some(y) = year {
        url.query_pairs_mut().append_pair("year", &y.to_string());
    }

    let resp = client.send_with_retry(client.get(url), retry_override).await?;
    let text = net::get_text(resp, "governance_board").await?;
    let doc: GovernanceDocument = net::parse_document(&text, "governance-board")?;
    Ok(assemble(doc, id))
}

pub(super) fn assemble(doc: GovernanceDocument, company_id: &str) -> GovernanceBoard {
    let board = board_composition(doc.board.unwrap_or_default());
    let committees: Vec<Committee> = doc
        .committees
        .unwrap_or_default()
        .into_iter()
        .map(committee)
        .collect();
    let ethics = ethics(doc.ethics.unwrap_or_default());
    let compensation_node = doc.compensation.unwrap_or_default();
    // An explicit `false` overrides a stray percentage.
    let linked_pay_reported = match compensation_node.esg_linked_pay {
        Some(flag) => flag,
        None => compensation_node.esg_linked_pay_percent.is_some(),
    };
    let compensation = compensation(compensation_node);

    let indicators = GovernanceIndicators {
        independence_percent: Some(board.independence_percent),
        women_percent: Some(board.women_percent),
        attendance_rate_percent: Some(board.attendance_rate),
        regulatory_incidents: Some(ethics.regulatory_incidents),
        esg_linked_pay_percent: linked_pay_reported.then_some(compensation.esg_linked_pay_percent),
    };

    GovernanceBoard {
        company: CompanySummary::from_node(doc.company, company_id),
        year: doc.year,
        available_years: effective_years(Vec::new(), doc.available_years.as_deref()),
        score: score(&indicators),
        board,
        committees,
        ethics,
        compensation,
        indicators,
    }
}

fn board_composition(node: BoardNode) -> BoardComposition {
    let members: Vec<BoardMember> = node
        .members
        .unwrap_or_default()
        .into_iter()
        .map(member)
        .collect();

    // Headcounts fall back to the member roster when the summary omits them.
    let roster = u32::try_from(members.len()).unwrap_or(u32::MAX);
    let roster_independent =
        u32::try_from(members.iter().filter(|m| m.independent).count()).unwrap_or(u32::MAX);
    let roster_women = u32::try_from(
        members
            .iter()
            .filter(|m| m.gender.eq_ignore_ascii_case("female") || m.gender.eq_ignore_ascii_case("f"))
            .count(),
    )
    .unwrap_or(u32::MAX);

    let total_members = node.total_members.unwrap_or(roster);
    let independent_members = node.independent_members.unwrap_or(roster_independent);
    let women_members = node.women_members.unwrap_or(roster_women);

    BoardComposition {
        independence_percent: node.independence_percent.unwrap_or_else(|| {
            percent_of(f64::from(independent_members), f64::from(total_members))
        }),
        women_percent: node
            .women_percent
            .unwrap_or_else(|| percent_of(f64::from(women_members), f64::from(total_members))),
        total_members,
        independent_members,
        women_members,
        attendance_rate: or_zero(node.attendance_rate),
        meetings_held: or_zero_u32(node.meetings_held),
        average_tenure_years: node.average_tenure_years.unwrap_or_else(|| {
            if members.is_empty() {
                0.0
            } else {
                members.iter().map(|m| m.tenure_years).sum::<f64>() / members.len() as f64
            }
        }),
        chair_independent: node.chair_independent,
        ceo_chair_separated: node.ceo_chair_separated,
        members,
    }
}

fn member(node: MemberNode) -> BoardMember {
    BoardMember {
        name: or_na(node.name),
        role: or_na(node.role),
        gender: or_na(node.gender),
        independent: node.is_independent.unwrap_or(false),
        tenure_years: or_zero(node.tenure_years),
        committees: node.committees.unwrap_or_default(),
    }
}

fn committee(node: CommitteeNode) -> Committee {
    let members = or_zero_u32(node.members);
    let independent_members = or_zero_u32(node.independent_members);
    Committee {
        name: or_na(node.name),
        chair: or_na(node.chair),
        members,
        independent_members,
        independence_percent: percent_of(f64::from(independent_members), f64::from(members)),
        meetings_held: or_zero_u32(node.meetings_held),
        attendance_rate: or_zero(node.attendance_rate),
    }
}

fn ethics(node: EthicsNode) -> EthicsCompliance {
    EthicsCompliance {
        regulatory_incidents: or_zero_u32(node.regulatory_incidents),
        corruption_cases: or_zero_u32(node.corruption_cases),
        whistleblower_reports: or_zero_u32(node.whistleblower_reports),
        ethics_training_percent: or_zero(node.ethics_training_percent),
        anti_corruption_policy: node.anti_corruption_policy,
    }
}

fn compensation(node: CompensationNode) -> Compensation {
    Compensation {
        esg_linked_pay: node.esg_linked_pay.unwrap_or(false),
        esg_linked_pay_percent: or_zero(node.esg_linked_pay_percent),
        ceo_pay_ratio: or_zero(node.ceo_pay_ratio),
    }
}
