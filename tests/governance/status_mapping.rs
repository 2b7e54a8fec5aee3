use crate::common::{api_base, client_for};
use esg_dashboard::{Backoff, EsgClient, EsgError, GovernanceBuilder, RetryConfig, status_message};
use httpmock::{Method::GET, MockServer};
use std::time::Duration;

#[tokio::test]
async fn non_2xx_maps_to_status_error_with_server_message() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/esg-dashboard/governance-board/C001");
        then.status(404)
            .header("content-type", "application/json")
            .body(r#"{"message": "No governance data for 2019"}"#);
    });

    let client = client_for(&server);
    let err = GovernanceBuilder::new(&client, "C001")
        .year(2019)
        .fetch()
        .await
        .unwrap_err();
    mock.assert();

    match &err {
        EsgError::Status { status, url, message } => {
            assert_eq!(*status, 404);
            assert!(url.contains("/esg-dashboard/governance-board/C001"));
            assert_eq!(message.as_deref(), Some("No governance data for 2019"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.user_message(), "The requested data was not found.");
}

#[test]
fn known_statuses_have_fixed_messages() {
    for code in [400u16, 401, 403, 404, 422, 500, 503] {
        assert_ne!(status_message(code), status_message(0), "status {code}");
    }
    assert_eq!(status_message(418), status_message(502));
    assert_eq!(
        status_message(401),
        "Your session has expired. Please sign in again."
    );
}

#[tokio::test]
async fn failures_are_not_retried_by_default() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/esg-dashboard/governance-board/C001");
        then.status(503).body("");
    });

    let client = client_for(&server);
    let err = GovernanceBuilder::new(&client, "C001").fetch().await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    mock.assert_calls(1);
}

#[tokio::test]
async fn opt_in_retry_replays_get_on_retryable_status() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/esg-dashboard/governance-board/C001");
        then.status(503).body("");
    });

    let client = EsgClient::builder()
        .base_api(api_base(&server))
        .retry_config(RetryConfig {
            enabled: true,
            max_retries: 2,
            backoff: Backoff::Fixed(Duration::from_millis(1)),
            ..RetryConfig::default()
        })
        .build()
        .unwrap();
    let err = GovernanceBuilder::new(&client, "C001").fetch().await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    mock.assert_calls(3);
}

#[test]
fn exponential_backoff_is_capped() {
    let backoff = Backoff::Exponential {
        base: Duration::from_millis(100),
        factor: 2.0,
        max: Duration::from_millis(300),
    };
    assert_eq!(backoff.delay(0), Duration::from_millis(100));
    assert_eq!(backoff.delay(1), Duration::from_millis(200));
    assert_eq!(backoff.delay(2), Duration::from_millis(300));
    assert_eq!(backoff.delay(30), Duration::from_millis(300));
}

#[test]
fn shrinking_backoff_factor_falls_back_to_cap() {
    let backoff = Backoff::Exponential {
        base: Duration::from_millis(100),
        factor: -2.0,
        max: Duration::from_millis(300),
    };
    assert_eq!(backoff.delay(0), Duration::from_millis(100));
    assert_eq!(backoff.delay(1), Duration::from_millis(300));
    assert_eq!(backoff.delay(3), Duration::from_millis(300));
}
