use crate::common::{EXAMPLE_BODY, create_test_session, sample_request};
use cuenca_client::prelude::*;

#[tokio::test]
async fn create_then_retrieve_round_trip() {
    let mut server = mockito::Server::new_async().await;

    let create_mock = server
        .mock("POST", "/curp_validations")
        .with_status(201)
        .with_header("Content-Type", "application/json")
        .with_body(EXAMPLE_BODY)
        .create_async()
        .await;
    let retrieve_mock = server
        .mock("GET", "/curp_validations/CV-123")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(EXAMPLE_BODY)
        .create_async()
        .await;

    let session = create_test_session(&server.url());

    let created = CurpValidation::create(&session, &sample_request())
        .await
        .expect("Create should succeed");
    let fetched = CurpValidation::retrieve(&session, &created.id)
        .await
        .expect("Retrieve should succeed");

    assert_eq!(created, fetched);
    assert_eq!(fetched.id, "CV-123");
    // Server contract: a full match requires the curp to match
    assert!(fetched.renapo_curp_match || !fetched.renapo_full_match);

    create_mock.assert_async().await;
    retrieve_mock.assert_async().await;
}

#[tokio::test]
async fn validation_failure_never_reaches_the_network() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/curp_validations")
        .expect(0)
        .create_async()
        .await;

    // A malformed manual curp fails at parse time, so no request can
    // even be assembled for it.
    let err = Curp::parse("GOCG650418HVZ").expect_err("Should be rejected");
    assert!(err.is_validation());

    let bad_gender = "robot".parse::<Gender>().expect_err("Should be rejected");
    assert!(bad_gender.is_validation());

    mock.assert_async().await;
    drop(server);
}

#[tokio::test]
async fn shared_session_serves_multiple_calls() {
    let mut server = mockito::Server::new_async().await;

    let retrieve_mock = server
        .mock("GET", "/curp_validations/CV-123")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(EXAMPLE_BODY)
        .expect(2)
        .create_async()
        .await;

    let session = create_test_session(&server.url());
    let clone = session.clone();

    let first = CurpValidation::retrieve(&session, "CV-123")
        .await
        .expect("Retrieve should succeed");
    let second = CurpValidation::retrieve(&clone, "CV-123")
        .await
        .expect("Retrieve should succeed");

    assert_eq!(first, second);
    retrieve_mock.assert_async().await;
}
