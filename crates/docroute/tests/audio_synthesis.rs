//! Audio renderer integration tests against a stubbed synthesis service.

use docroute::{SpeechServiceConfig, SpeechSynthesizer};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod helpers;

fn synthesizer(server: &MockServer) -> SpeechSynthesizer {
    let config = SpeechServiceConfig {
        endpoint: format!("{}/translate_tts", server.uri()),
        ..SpeechServiceConfig::default()
    };
    SpeechSynthesizer::new(config).unwrap()
}

#[tokio::test]
async fn test_synthesis_returns_encoded_payload() {
    helpers::init_tracing();
    let server = MockServer::start().await;
    let mp3_bytes = vec![0x49, 0x44, 0x33, 0x04, 0x00];
    Mock::given(method("GET"))
        .and(path("/translate_tts"))
        .and(query_param("q", "Pump failure reported."))
        .and(query_param("tl", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(mp3_bytes.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let artifact = synthesizer(&server).synthesize("Pump failure reported.", "en").await;
    assert!(!artifact.is_empty());
    assert_eq!(artifact.bytes(), mp3_bytes.as_slice());
    assert_eq!(artifact.mime_type(), "audio/mpeg");
    assert_eq!(artifact.language(), "en");
    assert_eq!(artifact.to_base64(), "SUQzBAA=");
}

#[tokio::test]
async fn test_blank_text_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let synthesizer = synthesizer(&server);
    assert!(synthesizer.synthesize("", "en").await.is_empty());
    assert!(synthesizer.synthesize("   ", "en").await.is_empty());
}

#[tokio::test]
async fn test_service_failure_degrades_to_empty_artifact() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let artifact = synthesizer(&server).synthesize("summary", "en").await;
    assert!(artifact.is_empty());
}

#[tokio::test]
async fn test_empty_body_degrades_to_empty_artifact() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let artifact = synthesizer(&server).synthesize("summary", "en").await;
    assert!(artifact.is_empty());
}
