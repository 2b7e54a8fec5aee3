use esg_dashboard::governance::{GovernanceIndicators, GovernanceRating, score};

fn indicators(
    independence: f64,
    women: f64,
    attendance: f64,
    incidents: u32,
) -> GovernanceIndicators {
    GovernanceIndicators {
        independence_percent: Some(independence),
        women_percent: Some(women),
        attendance_rate_percent: Some(attendance),
        regulatory_incidents: Some(incidents),
        esg_linked_pay_percent: None,
    }
}

#[test]
fn targets_met_score_full_marks() {
    let s = score(&indicators(50.0, 30.0, 100.0, 0));
    assert_eq!(s.score, 100);
    assert!((s.max_score - 100.0).abs() < f64::EPSILON);
    assert_eq!(s.rating(), GovernanceRating::Excellent);
}

#[test]
fn missing_indicators_default_to_zero_incidents() {
    let s = score(&GovernanceIndicators::default());
    assert_eq!(s.score, 25);
    let b = s.breakdown;
    assert_eq!(b.board_independence, 0.0);
    assert_eq!(b.gender_diversity, 0.0);
    assert_eq!(b.committee_effectiveness, 0.0);
    assert_eq!(b.ethics_compliance, 25.0);
}

#[test]
fn all_zero_with_an_incident_scores_fifteen() {
    let s = score(&indicators(0.0, 0.0, 0.0, 2));
    assert_eq!(s.score, 15);
    assert_eq!(s.rating(), GovernanceRating::Weak);
}

#[test]
fn independence_and_diversity_are_capped() {
    let s = score(&indicators(90.0, 60.0, 0.0, 1));
    assert_eq!(s.breakdown.board_independence, 25.0);
    assert_eq!(s.breakdown.gender_diversity, 25.0);
    // 25 + 25 + 0 + 15 = 65
    assert_eq!(s.score, 65);
}

#[test]
fn partial_values_scale_linearly() {
    let s = score(&indicators(25.0, 15.0, 80.0, 0));
    assert!((s.breakdown.board_independence - 12.5).abs() < 1e-9);
    assert!((s.breakdown.gender_diversity - 12.5).abs() < 1e-9);
    assert!((s.breakdown.committee_effectiveness - 20.0).abs() < 1e-9);
    // 12.5 + 12.5 + 20 + 25 = 70
    assert_eq!(s.score, 70);
}

#[test]
fn esg_linked_pay_raises_the_denominator() {
    let mut ind = indicators(50.0, 30.0, 100.0, 0);
    ind.esg_linked_pay_percent = Some(10.0);
    let s = score(&ind);
    assert!((s.max_score - 110.0).abs() < f64::EPSILON);
    assert_eq!(s.breakdown.esg_linked_pay, Some(5.0));
    // 105 / 110 = 95.45
    assert_eq!(s.score, 95);

    ind.esg_linked_pay_percent = Some(40.0);
    let s = score(&ind);
    assert_eq!(s.breakdown.esg_linked_pay, Some(10.0));
    assert_eq!(s.score, 100);
}

#[test]
fn reported_but_zero_linked_pay_still_inflates_max() {
    let mut ind = indicators(50.0, 30.0, 100.0, 0);
    ind.esg_linked_pay_percent = Some(0.0);
    // 100 / 110 = 90.9
    assert_eq!(score(&ind).score, 91);
}

#[test]
fn attendance_above_hundred_is_clamped_in_final_score() {
    let s = score(&indicators(50.0, 30.0, 140.0, 0));
    assert!(s.breakdown.committee_effectiveness > 25.0);
    assert_eq!(s.score, 100);
}

#[test]
fn breakdown_map_names_components() {
    let s = score(&indicators(50.0, 30.0, 100.0, 0));
    let map = s.breakdown.to_map();
    assert_eq!(map.len(), 4);
    assert_eq!(map["boardIndependence"], 25.0);
    assert_eq!(map["ethicsCompliance"], 25.0);
    assert!(!map.contains_key("esgLinkedPay"));
    assert!((s.breakdown.total() - 100.0).abs() < 1e-9);
}
