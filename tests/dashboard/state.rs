use crate::common::company;
use esg_dashboard::{DashboardState, EsgError, years::latest_year};

#[test]
fn selecting_a_company_opens_on_its_latest_year() {
    let mut state = DashboardState::new();
    let first = state.select_company(company("C001", Some("2020–2023"), None));

    assert_eq!(state.available_years(), &[2023, 2022, 2021, 2020]);
    assert_eq!(first, Some(2023));
    // The selector's first entry is the year the initial fetch used.
    assert_eq!(latest_year(state.available_years()), state.selected_year());
}

#[test]
fn latest_report_year_seeds_a_window() {
    let mut state = DashboardState::new();
    state.select_company(company("C002", None, Some(2023)));
    assert_eq!(state.available_years(), &[2023, 2022, 2021]);
    assert_eq!(state.selected_year(), Some(2023));
}

#[test]
fn select_by_id_uses_loaded_companies() {
    let mut state = DashboardState::new();
    state.set_companies(vec![
        company("C001", Some("2021-2022"), None),
        company("C002", None, Some(2024)),
    ]);

    assert_eq!(state.select_company_by_id("C002"), Some(2024));
    assert_eq!(state.selected_company().map(|c| c.id.as_str()), Some("C002"));
    assert_eq!(state.select_company_by_id("missing"), None);
    assert_eq!(state.selected_company().map(|c| c.id.as_str()), Some("C002"));
}

#[test]
fn only_listed_years_can_be_selected() {
    let mut state = DashboardState::new();
    state.select_company(company("C001", Some("2021-2023"), None));

    assert!(state.select_year(2022));
    assert_eq!(state.selected_year(), Some(2022));
    assert!(!state.select_year(2019));
    assert_eq!(state.selected_year(), Some(2022));
}

#[test]
fn errors_are_stored_as_user_messages_and_clear_loading() {
    let mut state = DashboardState::new();
    state.select_company(company("C001", Some("2021-2023"), None));
    state.begin_loading();
    assert!(state.is_loading());

    state.apply_governance(Err(EsgError::Status {
        status: 403,
        url: "http://x/api".into(),
        message: None,
    }));
    assert!(!state.loading().governance);
    assert!(state.loading().biodiversity);
    assert_eq!(
        state.error(),
        Some("You do not have permission to perform this action.")
    );

    state.clear_error();
    assert_eq!(state.error(), None);
}

#[test]
fn switching_company_resets_previous_results() {
    let mut state = DashboardState::new();
    state.select_company(company("C001", Some("2021-2023"), None));
    state.record_error(&EsgError::Validation("Please select a company.".into()));

    state.select_company(company("C002", None, Some(2022)));
    assert_eq!(state.error(), None);
    assert!(state.governance().is_none());
    assert_eq!(state.available_years(), &[2022, 2021]);
}
