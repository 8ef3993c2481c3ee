//! Wire-level behavior: validation happens before dispatch, bodies encode
//! the selected fields, and every outgoing request carries the credentials.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use http::{Response as HttpResponse, StatusCode};
use skein::api::extract::ExtractParams;
use skein::api::sentiment::{AbsaParams, SentimentParams};
use skein::{Auth, Client, Error, HttpClient};
use url::Url;

/// What a request looked like on the wire.
struct Sent {
    method: http::Method,
    uri: String,
    headers: http::HeaderMap,
    body: Vec<u8>,
}

#[derive(Clone, Default)]
struct MockClient {
    queue: Arc<Mutex<VecDeque<http::Response<Vec<u8>>>>>,
    log: Arc<Mutex<Vec<Sent>>>,
}

impl MockClient {
    fn push(&self, resp: http::Response<Vec<u8>>) {
        self.queue.lock().unwrap().push_back(resp);
    }

    fn sent(&self) -> usize {
        self.log.lock().unwrap().len()
    }

    fn last(&self) -> Sent {
        self.log.lock().unwrap().pop().expect("nothing was sent")
    }
}

impl HttpClient for MockClient {
    type Error = std::convert::Infallible;

    async fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> Result<http::Response<Vec<u8>>, Self::Error> {
        let (parts, body) = request.into_parts();
        self.log.lock().unwrap().push(Sent {
            method: parts.method,
            uri: parts.uri.to_string(),
            headers: parts.headers,
            body,
        });
        Ok(self
            .queue
            .lock()
            .unwrap()
            .pop_front()
            .expect("no queued response"))
    }
}

fn client() -> (Client<MockClient>, MockClient) {
    let mock = MockClient::default();
    let client = Client::with_http_client(Auth::new("app-id", "app-key"), mock.clone())
        .expect("credentials are non-empty");
    (client, mock)
}

fn ok(json: serde_json::Value) -> http::Response<Vec<u8>> {
    HttpResponse::builder()
        .status(StatusCode::OK)
        .body(serde_json::to_vec(&json).unwrap())
        .unwrap()
}

fn form_pairs(body: &[u8]) -> Vec<(String, String)> {
    serde_html_form::from_str(std::str::from_utf8(body).unwrap()).unwrap()
}

#[tokio::test]
async fn validation_failures_send_nothing() {
    let (client, mock) = client();

    let err = client.send(&SentimentParams::default()).await.unwrap_err();
    assert!(matches!(err, Error::MissingSource { .. }));

    let err = client
        .send(&SentimentParams::builder().text("").url("").build())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingSource { .. }));

    let err = client
        .send(&AbsaParams {
            text: Some("Great product!".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingRequiredField("domain")));

    assert_eq!(mock.sent(), 0);
}

#[tokio::test]
async fn sentiment_dispatch_encodes_the_documented_body() {
    let (client, mock) = client();
    mock.push(ok(serde_json::json!({
        "text": "I love this",
        "polarity": "positive",
        "polarity_confidence": 0.93,
        "subjectivity": "subjective",
        "subjectivity_confidence": 0.88
    })));

    let out = client
        .send(
            &SentimentParams::builder()
                .text("I love this")
                .mode("tweet")
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(out.polarity, "positive");

    let sent = mock.last();
    assert_eq!(sent.method, http::Method::POST);
    assert_eq!(sent.uri, "https://api.skein.dev/v1/sentiment");
    assert_eq!(
        form_pairs(&sent.body),
        vec![
            ("text".to_owned(), "I love this".to_owned()),
            ("mode".to_owned(), "tweet".to_owned()),
        ]
    );
}

#[tokio::test]
async fn every_request_carries_credentials_and_identification() {
    let (client, mock) = client();
    mock.push(ok(serde_json::json!({})));

    client
        .send(&SentimentParams::builder().text("ok").build())
        .await
        .unwrap();

    let sent = mock.last();
    let header = |name: &str| sent.headers.get(name).and_then(|v| v.to_str().ok());
    assert_eq!(header("x-skein-application-id"), Some("app-id"));
    assert_eq!(header("x-skein-application-key"), Some("app-key"));
    assert_eq!(
        header("content-type"),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(header("accept"), Some("application/json"));
    assert!(header("user-agent").unwrap().starts_with("skein/"));
}

#[tokio::test]
async fn text_precedence_holds_on_the_wire() {
    let (client, mock) = client();
    mock.push(ok(serde_json::json!({})));

    client
        .send(
            &SentimentParams::builder()
                .text("inline wins")
                .url("https://example.com")
                .build(),
        )
        .await
        .unwrap();

    let pairs = form_pairs(&mock.last().body);
    assert!(pairs.iter().any(|(k, _)| k == "text"));
    assert!(!pairs.iter().any(|(k, _)| k == "url"));
}

#[tokio::test]
async fn best_image_is_explicit_in_every_extract_body() {
    let (client, mock) = client();

    mock.push(ok(serde_json::json!({})));
    client
        .send(&ExtractParams::builder().url("https://example.com/story").build())
        .await
        .unwrap();
    let pairs = form_pairs(&mock.last().body);
    assert!(pairs.contains(&("best_image".to_owned(), "false".to_owned())));

    mock.push(ok(serde_json::json!({})));
    client
        .send(
            &ExtractParams::builder()
                .url("https://example.com/story")
                .best_image(true)
                .build(),
        )
        .await
        .unwrap();
    let pairs = form_pairs(&mock.last().body);
    assert!(pairs.contains(&("best_image".to_owned(), "true".to_owned())));
}

#[tokio::test]
async fn absa_dispatches_to_the_domain_path() {
    let (client, mock) = client();
    mock.push(ok(serde_json::json!({})));

    client
        .send(
            &AbsaParams::builder()
                .text("Clean rooms, surly staff.")
                .domain("hotels")
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(mock.last().uri, "https://api.skein.dev/v1/absa/hotels");
}

#[tokio::test]
async fn base_url_override_keeps_a_single_slash() {
    let (client, mock) = client();
    let client = client.with_base_url(Url::parse("http://localhost:8080/api/").unwrap());
    mock.push(ok(serde_json::json!({})));

    client
        .send(&SentimentParams::builder().text("ok").build())
        .await
        .unwrap();

    let uri = mock.last().uri;
    assert_eq!(uri, "http://localhost:8080/api/sentiment");
    assert!(!uri.contains("//sentiment"));
}

#[tokio::test]
async fn service_errors_pass_through_with_their_message() {
    let (client, mock) = client();
    mock.push(
        HttpResponse::builder()
            .status(StatusCode::FORBIDDEN)
            .body(serde_json::to_vec(&serde_json::json!({"error": "requires a valid application id"})).unwrap())
            .unwrap(),
    );

    let err = client
        .send(&SentimentParams::builder().text("ok").build())
        .await
        .unwrap_err();
    match err {
        Error::Service { status, message } => {
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(message, "requires a valid application id");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn rate_limit_headers_surface_on_the_response() {
    let (client, mock) = client();
    mock.push(
        HttpResponse::builder()
            .status(StatusCode::OK)
            .header("X-RateLimit-Limit", "1000")
            .header("X-RateLimit-Remaining", "998")
            .header("X-RateLimit-Reset", "1420000000")
            .body(b"{}".to_vec())
            .unwrap(),
    );

    let resp = client
        .call(&SentimentParams::builder().text("ok").build())
        .await
        .unwrap();
    let limits = resp.rate_limits().expect("headers were present");
    assert_eq!(limits.remaining, 998);
    resp.into_output().unwrap();
}
