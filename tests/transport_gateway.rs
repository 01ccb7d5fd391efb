mod common;

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xenbridge::domain::upstream::{ApiRequest, ApiTransport, TransportError};
use xenbridge::infrastructure::reporting::NullReporter;
use xenbridge::infrastructure::upstream::HttpTransport;

fn transport(server: &MockServer) -> HttpTransport {
    HttpTransport::new(
        common::test_settings(&server.uri()),
        Arc::new(NullReporter::new()),
    )
    .unwrap()
}

#[tokio::test]
async fn test_post_sends_api_key_and_form_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .and(header("XF-Api-Key", common::API_KEY))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("login=alice&password=hunter2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": {"user_id": 42}})))
        .expect(1)
        .mount(&server)
        .await;

    let request = ApiRequest::post("auth")
        .param("login", "alice")
        .param("password", "hunter2");

    let response = transport(&server).invoke(request).await.unwrap();

    assert_eq!(response.body["user"]["user_id"], 42);
    assert!(!response.has_errors());
}

#[tokio::test]
async fn test_get_sends_query_and_acting_user_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alerts"))
        .and(query_param("unread", "true"))
        .and(header("XF-Api-Key", common::API_KEY))
        .and(header("XF-Api-User", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"alerts": []})))
        .expect(1)
        .mount(&server)
        .await;

    let request = ApiRequest::get("alerts").param("unread", "true").acting_as(42);

    let response = transport(&server).invoke(request).await.unwrap();

    assert!(response.body["alerts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_acting_user_header_absent_without_acting_user() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/from-session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": {"user_id": 0}})))
        .expect(1)
        .mount(&server)
        .await;

    let request = ApiRequest::post("auth/from-session").param("session_id", "tok");

    transport(&server).invoke(request).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("XF-Api-User"));
}

#[tokio::test]
async fn test_check_environment_adds_basic_auth() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .and(header("Authorization", "Basic Z3Vlc3Q6c2VjcmV0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let mut settings = common::test_settings(&server.uri());
    settings.check_environment = true;
    settings.check_credentials = Some("guest:secret".to_string());

    let transport = HttpTransport::new(settings, Arc::new(NullReporter::new())).unwrap();

    transport
        .invoke(ApiRequest::post("auth").param("login", "alice"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_error_list_is_parsed_and_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [
                {"code": "incorrect_password", "message": "Incorrect password"},
            ]
        })))
        .mount(&server)
        .await;

    let (reporter, mut rx) = common::RecordingReporter::new();
    let transport =
        HttpTransport::new(common::test_settings(&server.uri()), reporter).unwrap();

    let response = transport
        .invoke(ApiRequest::post("auth").param("login", "alice"))
        .await
        .unwrap();

    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].code, "incorrect_password");

    let report = common::expect_report(&mut rx).await;
    assert_eq!(report.environment, "Live");
    assert_eq!(report.host, "www.example.com");
    assert!(report.body().contains("Code: incorrect_password"));

    // Exactly one report for the one failing call.
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_report_delivery_failure_does_not_affect_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [{"code": "incorrect_password", "message": "Incorrect password"}]
        })))
        .mount(&server)
        .await;

    let (reporter, mut rx) = common::RecordingReporter::failing();
    let transport =
        HttpTransport::new(common::test_settings(&server.uri()), reporter).unwrap();

    let response = transport
        .invoke(ApiRequest::post("auth").param("login", "alice"))
        .await
        .unwrap();

    // The delivery failure is swallowed; the parsed errors are intact.
    assert_eq!(response.errors.len(), 1);
    common::expect_report(&mut rx).await;
}

#[tokio::test]
async fn test_success_response_makes_no_report() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": {"user_id": 42}})))
        .mount(&server)
        .await;

    let (reporter, mut rx) = common::RecordingReporter::new();
    let transport =
        HttpTransport::new(common::test_settings(&server.uri()), reporter).unwrap();

    transport
        .invoke(ApiRequest::post("auth").param("login", "alice"))
        .await
        .unwrap();

    tokio::task::yield_now().await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_non_json_body_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = transport(&server)
        .invoke(ApiRequest::post("auth").param("login", "alice"))
        .await;

    assert!(matches!(result, Err(TransportError::InvalidBody(_))));
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let mut settings = common::test_settings(&server.uri());
    settings.timeout = Duration::from_secs(1);

    let transport = HttpTransport::new(settings, Arc::new(NullReporter::new())).unwrap();

    let result = transport
        .invoke(ApiRequest::post("auth").param("login", "alice"))
        .await;

    assert!(matches!(result, Err(TransportError::Timeout(_))));
}
