use crate::common::{client_for, company, fixture};
use esg_dashboard::Dashboard;
use httpmock::{Method::GET, MockServer};

fn mock_both(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/api/esg-dashboard/governance-board/C001");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("governance_board_C001"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/esg-dashboard/biodiversity-landuse/C001");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("biodiversity_landuse_C001"));
    });
}

#[tokio::test]
async fn csv_export_flattens_both_panels() {
    let server = MockServer::start();
    mock_both(&server);

    let client = client_for(&server);
    let dashboard = Dashboard::new(&client, company("C001", Some("2021-2023"), None));
    let overview = dashboard.overview(Some(2023)).await;
    let csv = dashboard.report(&overview).to_csv().unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "section,metric,value");
    assert!(lines.contains(&"report,company,Company C001"));
    assert!(lines.contains(&"report,year,2023"));
    assert!(lines.contains(&"governance,score,87"));
    assert!(lines.contains(&"governance,rating,Excellent"));
    assert!(lines.contains(&"governance,esgLinkedPay,7.50"));
    assert!(lines.contains(&"biodiversity,protectedPercent,25.00"));
    assert!(lines.contains(&"biodiversity,mappedSites,2"));
    assert!(lines.contains(&"biodiversity,certifications,RSPO; ISPO"));
}

#[tokio::test]
async fn json_export_and_files() {
    let server = MockServer::start();
    mock_both(&server);

    let client = client_for(&server);
    let dashboard = Dashboard::new(&client, company("C001", Some("2021-2023"), None));
    let overview = dashboard.overview(Some(2023)).await;
    let report = dashboard.report(&overview);

    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(value["company"], "Company C001");
    assert_eq!(value["governance"]["score"], 87);
    assert_eq!(value["biodiversity"]["summary"]["site_count"], 3);

    let dir = std::env::temp_dir().join(format!("esg-dashboard-report-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    report.write_csv(dir.join("report.csv")).unwrap();
    report.write_json(dir.join("report.json")).unwrap();
    let written = std::fs::read_to_string(dir.join("report.csv")).unwrap();
    assert_eq!(written, report.to_csv().unwrap());
    std::fs::remove_dir_all(&dir).unwrap();
}
