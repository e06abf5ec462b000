use http_json_ext::execution::http::read_response_text;
use http_json_ext::prelude::*;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod support;

#[tokio::test]
async fn delete_cancelled_mid_flight_reports_cancellation() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/items/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"object": "item"}))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let client = support::client();
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let url = format!("{}/items/1", server.uri());
    let result = tokio::time::timeout(
        Duration::from_secs(3),
        client.delete_and_read_as::<BaseResponse>(&url, None, &cancel),
    )
    .await
    .expect("cancellation should end the call promptly");

    let err = result.unwrap_err();
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn pre_cancelled_token_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = support::client()
        .post_and_read_as::<BaseResponse, _>(
            &format!("{}/items", server.uri()),
            Some(&json!({"name": "x"})),
            Some("abc"),
            &cancel,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Cancelled));
}

#[tokio::test]
async fn cancellation_while_decoding_body_is_reported() {
    let base = support::stalled_body_server("application/json").await;
    let client = support::client();
    let cancel = CancellationToken::new();

    // Headers arrive in full, so dispatch completes before the token fires.
    let response = client
        .request_raw(&format!("{base}/items"), None, Some("abc"), &cancel)
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let result = tokio::time::timeout(
        Duration::from_secs(3),
        read_response_as::<BaseResponse>(response, client.json_options(), &cancel),
    )
    .await
    .expect("cancellation should end the body read promptly");

    assert!(result.unwrap_err().is_cancelled());
}

#[tokio::test]
async fn cancellation_while_reading_text_is_reported() {
    let base = support::stalled_body_server("text/plain").await;
    let client = support::client();
    let cancel = CancellationToken::new();

    let response = client
        .request_raw(
            &format!("{base}/upload"),
            Some(RawBody::text("payload").into()),
            None,
            &cancel,
        )
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let result = tokio::time::timeout(Duration::from_secs(3), read_response_text(response, &cancel))
        .await
        .expect("cancellation should end the body read promptly");

    assert!(matches!(result, Err(ClientError::Cancelled)));
}
