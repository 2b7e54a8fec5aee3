use crate::common::{client_for, fixture};
use esg_dashboard::{
    BiodiversityBuilder, EsgError,
    biodiversity::TrendDirection,
};
use httpmock::{Method::GET, MockServer};

#[tokio::test]
async fn biodiversity_landuse_is_reshaped_and_summarized() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/esg-dashboard/biodiversity-landuse/C001")
            .query_param("year", "2023");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("biodiversity_landuse_C001"));
    });

    let client = client_for(&server);
    let bio = BiodiversityBuilder::new(&client, "C001")
        .year(2023)
        .fetch()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(bio.company.name, "PT Sawit Lestari");
    assert_eq!(bio.company.country, "N/A");
    assert_eq!(bio.available_years, vec![2023, 2022, 2021]);

    assert!((bio.land_use.hve_area_ha - 100.0).abs() < 1e-9);
    assert_eq!(bio.biodiversity.species_monitored, 48);
    assert_eq!(bio.biodiversity.habitats_restored, 0);
    assert_eq!(bio.compliance.certifications, vec!["RSPO", "ISPO"]);
    assert_eq!(bio.compliance.last_audit_date, "N/A");

    assert_eq!(bio.sites.len(), 3);
    assert_eq!(bio.sites[1].coordinates(), Some((-1.2, 102.1)));
    assert_eq!(bio.sites[1].classification, "N/A");
    assert_eq!(bio.sites[2].coordinates(), None);

    let years: Vec<i32> = bio.trend.iter().map(|p| p.year).collect();
    assert_eq!(years, vec![2021, 2022, 2023]);
    assert!((bio.trend[1].protected_area_ha - 230.0).abs() < 1e-9);
    assert_eq!(bio.trend[1].deforested_area_ha, 0.0);

    let s = &bio.summary;
    assert!((s.protected_percent - 25.0).abs() < 1e-9);
    assert!((s.restored_percent - 5.0).abs() < 1e-9);
    assert!((s.hve_percent - 10.0).abs() < 1e-9);
    assert!((s.conservation_percent - 15.0).abs() < 1e-9);
    assert!((s.net_land_change_ha - 30.0).abs() < 1e-9);
    assert_eq!(s.site_count, 3);
    assert_eq!(s.mapped_site_count, 2);
    assert!((s.total_site_area_ha - 1000.0).abs() < 1e-9);
    assert_eq!(s.protected_area_trend, TrendDirection::Increasing);
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/esg-dashboard/biodiversity-landuse/C001");
        then.status(500).body("internal");
    });

    let client = client_for(&server);
    let err = BiodiversityBuilder::new(&client, "C001")
        .year(2023)
        .fetch()
        .await
        .unwrap_err();
    mock.assert();

    match err {
        EsgError::Status { status, message, .. } => {
            assert_eq!(status, 500);
            assert_eq!(message, None);
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_document_yields_zeroed_view() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/esg-dashboard/biodiversity-landuse/C002");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data": {}}"#);
    });

    let client = client_for(&server);
    let bio = BiodiversityBuilder::new(&client, "C002").fetch().await.unwrap();
    mock.assert();
    assert_eq!(bio.company.id, "C002");
    assert_eq!(bio.year, None);
    assert!(bio.sites.is_empty());
    assert_eq!(bio.summary.protected_percent, 0.0);
    assert_eq!(bio.summary.protected_area_trend, TrendDirection::Unknown);
}
