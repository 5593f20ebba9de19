//! OCR service integration tests against a stubbed HTTP server.

use docroute::extract::{ExtractorRegistry, image::NO_TEXT_SENTINEL};
use docroute::{DocrouteError, DocumentHandle, PipelineConfig};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod helpers;

fn ocr_config(server: &MockServer) -> PipelineConfig {
    let mut config = PipelineConfig::default();
    config.ocr.endpoint = format!("{}/parse/image", server.uri());
    config.ocr.api_key = Some("K-test".to_string());
    config
}

fn png_handle() -> DocumentHandle {
    DocumentHandle::new("scan.png", "image/png", vec![0x89, 0x50, 0x4E, 0x47])
}

#[tokio::test]
async fn test_ocr_returns_first_parsed_text() {
    helpers::init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/parse/image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ParsedResults": [
                {"ParsedText": "Meter reading 4711"},
                {"ParsedText": "second result is ignored"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let registry = ExtractorRegistry::new(&ocr_config(&server)).unwrap();
    let text = registry.extract(&png_handle()).await.unwrap();
    assert_eq!(text, "Meter reading 4711");
}

#[tokio::test]
async fn test_ocr_unexpected_envelope_falls_back_to_sentinel() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/parse/image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totally": "different"})))
        .mount(&server)
        .await;

    let registry = ExtractorRegistry::new(&ocr_config(&server)).unwrap();
    let text = registry.extract(&png_handle()).await.unwrap();
    assert_eq!(text, NO_TEXT_SENTINEL);
}

#[tokio::test]
async fn test_ocr_empty_results_array_falls_back_to_sentinel() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/parse/image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ParsedResults": []})))
        .mount(&server)
        .await;

    let registry = ExtractorRegistry::new(&ocr_config(&server)).unwrap();
    let text = registry.extract(&png_handle()).await.unwrap();
    assert_eq!(text, NO_TEXT_SENTINEL);
}

#[tokio::test]
async fn test_ocr_non_json_body_falls_back_to_sentinel() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/parse/image"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let registry = ExtractorRegistry::new(&ocr_config(&server)).unwrap();
    let text = registry.extract(&png_handle()).await.unwrap();
    assert_eq!(text, NO_TEXT_SENTINEL);
}

#[tokio::test]
async fn test_ocr_http_failure_is_service_error_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/parse/image"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let registry = ExtractorRegistry::new(&ocr_config(&server)).unwrap();
    let err = registry.extract(&png_handle()).await.unwrap_err();
    assert!(matches!(err, DocrouteError::Service { .. }));
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_ocr_request_carries_multipart_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/parse/image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ParsedResults": [{"ParsedText": "ok"}]
        })))
        .mount(&server)
        .await;

    let registry = ExtractorRegistry::new(&ocr_config(&server)).unwrap();
    registry.extract(&png_handle()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let content_type = requests[0]
        .headers
        .get("content-type")
        .expect("multipart content type")
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"apikey\""));
    assert!(body.contains("K-test"));
    assert!(body.contains("name=\"language\""));
    assert!(body.contains("eng"));
    assert!(body.contains("name=\"file\""));
}

#[tokio::test]
async fn test_ocr_missing_credential_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = ocr_config(&server);
    config.ocr.api_key = None;

    let registry = ExtractorRegistry::new(&config).unwrap();
    let err = registry.extract(&png_handle()).await.unwrap_err();
    assert!(matches!(err, DocrouteError::MissingCredential(_)));
}
