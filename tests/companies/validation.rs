use crate::common::client_for;
use esg_dashboard::{CompanyBuilder, CompanyDraft, EsgError, ImageUpload};
use httpmock::MockServer;

fn validation_message(err: EsgError) -> String {
    match err {
        EsgError::Validation(msg) => msg,
        other => panic!("expected Validation error, got {other:?}"),
    }
}

#[test]
fn required_fields_are_checked() {
    let err = CompanyDraft::new("   ", "Forestry").validate().unwrap_err();
    assert_eq!(validation_message(err), "Company name is required.");

    let err = CompanyDraft::new("Nordic Timber", "").validate().unwrap_err();
    assert_eq!(validation_message(err), "Industry is required.");

    assert!(CompanyDraft::new("Nordic Timber", "Forestry").validate().is_ok());
}

#[test]
fn year_fields_are_checked() {
    let draft = CompanyDraft {
        latest_report_year: Some(2023),
        ..CompanyDraft::new("A", "B")
    };
    assert!(draft.validate().is_ok());

    let draft = CompanyDraft {
        latest_report_year: Some(223),
        ..CompanyDraft::new("A", "B")
    };
    assert!(matches!(draft.validate(), Err(EsgError::Validation(_))));

    let draft = CompanyDraft {
        year_range: Some("2023-2020".into()),
        ..CompanyDraft::new("A", "B")
    };
    assert_eq!(
        validation_message(draft.validate().unwrap_err()),
        "Year range must look like 2020-2023."
    );

    for range in ["1-5000000", "2020-20233", "1899-1901"] {
        let draft = CompanyDraft {
            year_range: Some(range.into()),
            ..CompanyDraft::new("A", "B")
        };
        assert!(
            matches!(draft.validate(), Err(EsgError::Validation(_))),
            "range {range} should be rejected"
        );
    }

    let draft = CompanyDraft {
        year_range: Some("  ".into()),
        ..CompanyDraft::new("A", "B")
    };
    assert!(draft.validate().is_ok());
}

#[tokio::test]
async fn invalid_draft_sends_nothing() {
    let server = MockServer::start();
    let any = server.mock(|_when, then| {
        then.status(200).body("{}");
    });

    let client = client_for(&server);
    let logo = ImageUpload::new("logo.png", "image/png", vec![1]);
    let err = CompanyBuilder::new(&client)
        .create(&CompanyDraft::new("", "Agriculture"), Some(logo))
        .await
        .unwrap_err();

    assert!(matches!(err, EsgError::Validation(_)));
    assert_eq!(any.calls(), 0);
}

#[tokio::test]
async fn non_image_logo_sends_nothing() {
    let server = MockServer::start();
    let any = server.mock(|_when, then| {
        then.status(200).body("{}");
    });

    let client = client_for(&server);
    let logo = ImageUpload::new("report.pdf", "application/pdf", vec![1]);
    let err = CompanyBuilder::new(&client)
        .update("C002", &CompanyDraft::new("Nordic Timber", "Forestry"), Some(logo))
        .await
        .unwrap_err();

    assert_eq!(
        validation_message(err),
        "Only image files can be uploaded (got application/pdf)."
    );
    assert_eq!(any.calls(), 0);
}
