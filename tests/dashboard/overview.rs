use crate::common::{client_for, company, fixture};
use chrono::Datelike;
use esg_dashboard::{Dashboard, DashboardState};
use httpmock::{Method::GET, MockServer};

#[tokio::test]
async fn refresh_keeps_the_panel_that_loaded() {
    let server = MockServer::start();
    let gov = server.mock(|when, then| {
        when.method(GET)
            .path("/api/esg-dashboard/governance-board/C001")
            .query_param("year", "2023");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("governance_board_C001"));
    });
    let bio = server.mock(|when, then| {
        when.method(GET)
            .path("/api/esg-dashboard/biodiversity-landuse/C001")
            .query_param("year", "2023");
        then.status(500).body("");
    });

    let client = client_for(&server);
    let dashboard = Dashboard::new(&client, company("C001", None, Some(2023)));
    let mut state = DashboardState::new();
    dashboard.refresh(&mut state).await;

    gov.assert();
    bio.assert();
    assert!(!state.is_loading());
    assert_eq!(state.governance().map(|g| g.score.score), Some(87));
    assert!(state.biodiversity().is_none());
    assert_eq!(
        state.error(),
        Some("Internal server error. Please try again later.")
    );
}

#[tokio::test]
async fn backend_year_list_replaces_the_guess() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/esg-dashboard/governance-board/C009");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("governance_board_C001"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/esg-dashboard/biodiversity-landuse/C009");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"availableYears": []}"#);
    });

    let client = client_for(&server);
    let dashboard = Dashboard::new(&client, company("C009", None, None));
    let current = chrono::Utc::now().year();
    assert_eq!(dashboard.available_years(), vec![current]);

    let mut state = DashboardState::new();
    dashboard.refresh(&mut state).await;

    assert_eq!(state.error(), None);
    assert_eq!(state.available_years(), &[2023, 2022, 2021]);
    assert_eq!(state.selected_year(), Some(current));
}

#[tokio::test]
async fn overview_exposes_backend_years_and_completeness() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/esg-dashboard/governance-board/C001");
        then.status(401).body("");
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/esg-dashboard/biodiversity-landuse/C001");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("biodiversity_landuse_C001"));
    });

    let client = client_for(&server);
    let dashboard = Dashboard::new(&client, company("C001", Some("2021-2023"), None));
    let overview = dashboard.overview(Some(2023)).await;

    assert!(!overview.is_complete());
    assert_eq!(overview.governance.as_ref().unwrap_err().status(), Some(401));
    assert_eq!(overview.backend_years(), Some(&[2023, 2022, 2021][..]));
}

#[tokio::test]
async fn governance_trend_skips_failed_years() {
    let server = MockServer::start();
    for (year, status) in [("2021", 200), ("2022", 503), ("2023", 200)] {
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/esg-dashboard/governance-board/C001")
                .query_param("year", year);
            then.status(status)
                .header("content-type", "application/json")
                .body(if status == 200 {
                    fixture("governance_board_C001")
                } else {
                    String::new()
                });
        });
    }

    let client = client_for(&server);
    let dashboard = Dashboard::new(&client, company("C001", Some("2021-2023"), None));
    let points = dashboard.governance_trend(&[2023, 2022, 2021]).await;

    assert_eq!(points, vec![(2021, 87), (2023, 87)]);
}

#[tokio::test]
async fn stale_company_adopts_backend_years_on_refresh() {
    let server = MockServer::start();
    let gov = server.mock(|when, then| {
        when.method(GET)
            .path("/api/esg-dashboard/governance-board/C9")
            .query_param_missing("year");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"year": 2019, "availableYears": [2018, 2019]}"#);
    });
    let bio = server.mock(|when, then| {
        when.method(GET)
            .path("/api/esg-dashboard/biodiversity-landuse/C9")
            .query_param_missing("year");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"year": 2019}"#);
    });

    let client = client_for(&server);
    let dashboard = Dashboard::new(&client, company("C9", None, Some(2019)));
    assert!(dashboard.available_years().is_empty());

    let mut state = DashboardState::new();
    dashboard.refresh(&mut state).await;

    gov.assert();
    bio.assert();
    assert_eq!(state.error(), None);
    assert_eq!(state.available_years(), &[2019, 2018]);
    assert_eq!(state.selected_year(), Some(2019));
    assert_eq!(state.governance().and_then(|g| g.year), Some(2019));

    let overview = dashboard.overview(None).await;
    assert_eq!(overview.year, Some(2019));
}
