use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use shiftcare::catalog::ListingCatalog;
use shiftcare::landing::landing_router;
use shiftcare::signup::{
    HttpRelayClient, Phase, RelayClient, RelayError, Role, SignupController, SignupForm,
};
use tower::ServiceExt;
use url::Url;

#[derive(Debug, Clone)]
struct CapturedRequest {
    accept: Option<String>,
    content_type: Option<String>,
    body: String,
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<CapturedRequest>>>);

impl Captured {
    fn record(&self, headers: &HeaderMap, body: &Bytes) {
        let text = |name: header::HeaderName| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };
        self.0.lock().expect("capture mutex").push(CapturedRequest {
            accept: text(header::ACCEPT),
            content_type: text(header::CONTENT_TYPE),
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }

    fn requests(&self) -> Vec<CapturedRequest> {
        self.0.lock().expect("capture mutex").clone()
    }
}

/// Formatted log output collected in memory.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log mutex")).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log mutex").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Stand-in relay bound to an ephemeral port.
async fn spawn_relay(reply: fn() -> Response) -> (Url, Captured) {
    let captured = Captured::default();
    let sink = captured.clone();
    let app = Router::new().route(
        "/f/test",
        post(move |headers: HeaderMap, body: Bytes| {
            let sink = sink.clone();
            async move {
                sink.record(&headers, &body);
                reply()
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind relay");
    let addr = listener.local_addr().expect("relay addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("relay serves");
    });

    (endpoint(addr), captured)
}

fn endpoint(addr: SocketAddr) -> Url {
    Url::parse(&format!("http://{addr}/f/test")).expect("relay url")
}

fn accepted() -> Response {
    (StatusCode::OK, Json(json!({ "ok": true }))).into_response()
}

fn invalid_email() -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": "invalid email" })),
    )
        .into_response()
}

fn bare_bad_request() -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({}))).into_response()
}

fn html_error_page() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>").into_response()
}

fn jane() -> SignupForm {
    SignupForm::new("Jane Doe", "jane@example.com", Role::Professional)
}

#[tokio::test]
async fn posts_multipart_fields_with_json_accept_header() {
    let (url, captured) = spawn_relay(accepted).await;
    let client = HttpRelayClient::new(url);
    let fields = jane().validate().expect("valid form");

    let ack = client.deliver(&fields).await.expect("relay accepts");
    assert_eq!(ack.status, 200);

    let requests = captured.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.accept.as_deref(), Some("application/json"));
    assert!(request
        .content_type
        .as_deref()
        .is_some_and(|value| value.starts_with("multipart/form-data")));
    for (name, value) in [
        ("name", "Jane Doe"),
        ("email", "jane@example.com"),
        ("role", "professional"),
    ] {
        assert!(request.body.contains(&format!("name=\"{name}\"")));
        assert!(request.body.contains(value));
    }
}

#[tokio::test]
async fn non_success_status_carries_relay_reason() {
    let (url, _) = spawn_relay(invalid_email).await;
    let client = HttpRelayClient::new(url);
    let fields = jane().validate().expect("valid form");

    let err = client.deliver(&fields).await.expect_err("relay rejects");
    match err {
        RelayError::Rejected { status, reason } => {
            assert_eq!(status, 422);
            assert_eq!(reason.as_deref(), Some("invalid email"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn missing_error_field_falls_back_to_status_text() {
    let (url, _) = spawn_relay(bare_bad_request).await;
    let client = HttpRelayClient::new(url);
    let fields = jane().validate().expect("valid form");

    let err = client.deliver(&fields).await.expect_err("relay rejects");
    assert!(matches!(
        err,
        RelayError::Rejected { status: 400, reason: Some(ref text) } if text == "Bad Request"
    ));
}

#[tokio::test]
async fn non_json_failure_body_is_malformed() {
    let (url, _) = spawn_relay(html_error_page).await;
    let client = HttpRelayClient::new(url);
    let fields = jane().validate().expect("valid form");

    let err = client.deliver(&fields).await.expect_err("relay fails");
    assert!(matches!(err, RelayError::MalformedBody { status: 500, .. }));
}

#[tokio::test]
async fn closed_port_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = HttpRelayClient::new(endpoint(addr));
    let fields = jane().validate().expect("valid form");

    let err = client.deliver(&fields).await.expect_err("nothing listening");
    assert!(matches!(err, RelayError::Transport(_)));
}

#[tokio::test]
async fn controller_over_http_reaches_each_terminal_phase() {
    let (ok_url, _) = spawn_relay(accepted).await;
    let controller = SignupController::new(Arc::new(HttpRelayClient::new(ok_url)));
    let mut form = jane();
    assert_eq!(controller.submit(&mut form).await, Ok(Phase::Succeeded));
    assert!(form.is_empty());

    let (bad_url, _) = spawn_relay(invalid_email).await;
    let controller = SignupController::new(Arc::new(HttpRelayClient::new(bad_url)));
    let mut form = jane();
    assert_eq!(controller.submit(&mut form).await, Ok(Phase::Failed));
    assert_eq!(form, jane());
    assert!(!controller.submit_disabled());
}

#[tokio::test]
async fn relay_rejection_is_logged_but_not_rendered() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let (url, captured) = spawn_relay(invalid_email).await;
    let router = landing_router(
        Arc::new(ListingCatalog::standard()),
        Arc::new(HttpRelayClient::new(url)),
    );
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/signup")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "name=Jane+Doe&email=jane%40example.com&role=professional",
                ))
                .expect("request builds"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(captured.requests().len(), 1);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let html = String::from_utf8(bytes.to_vec()).expect("utf8 body");
    assert!(html.contains("Something went wrong. Please try again later."));
    assert!(!html.contains("invalid email"));

    let output = logs.contents();
    let line = output
        .lines()
        .find(|line| line.contains("sign-up submission failed"))
        .unwrap_or_else(|| panic!("no failure record in {output:?}"));
    assert!(line.contains("WARN"));
    assert!(line.contains("invalid email"));
    assert!(line.contains("status 422"));
}
