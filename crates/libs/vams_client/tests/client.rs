use app_state::VamsSettings;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use vams_client::{VamsClient, VamsError};

/// Bind a stub of the upstream album API on an ephemeral port.
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve upstream");
    });
    format!("http://{addr}")
}

fn client_for(base_url: String, api_key: Option<&str>) -> VamsClient {
    VamsClient::new(VamsSettings {
        base_url,
        api_key: api_key.map(str::to_string),
    })
    .expect("client construction")
}

#[tokio::test]
async fn fetch_api_unwraps_nested_envelopes() {
    // ARRANGE
    let router = Router::new()
        .route(
            "/albums/1",
            get(|| async { Json(json!({"data": {"data": {"id": "1"}}})) }),
        )
        .route(
            "/albums/2",
            get(|| async { Json(json!({"data": {"id": "2"}})) }),
        )
        .route("/albums/3", get(|| async { Json(json!({"id": "3"})) }));
    let base_url = spawn_upstream(router).await;
    let client = client_for(base_url, None);

    // ACT / ASSERT
    let doubly: Value = client.fetch_api("/albums/1").await.expect("doubly nested");
    assert_eq!(doubly, json!({"id": "1"}));
    let singly: Value = client.fetch_api("/albums/2").await.expect("singly nested");
    assert_eq!(singly, json!({"id": "2"}));
    let bare: Value = client.fetch_api("albums/3").await.expect("bare payload");
    assert_eq!(bare, json!({"id": "3"}));
}

#[tokio::test]
async fn upstream_status_maps_to_fixed_message() {
    let router = Router::new().route(
        "/albums/missing",
        get(|| async { (StatusCode::NOT_FOUND, "gone") }),
    );
    let base_url = spawn_upstream(router).await;
    let client = client_for(base_url, None);

    let err = client
        .fetch_api::<Value>("/albums/missing")
        .await
        .expect_err("404 should fail");
    match err {
        VamsError::Status { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Resource not found");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn api_key_is_sent_when_configured() {
    let router = Router::new().route(
        "/albums",
        get(|headers: HeaderMap| async move {
            if headers.get("X-API-Key").and_then(|v| v.to_str().ok()) == Some("secret") {
                Json(json!([])).into_response()
            } else {
                StatusCode::UNAUTHORIZED.into_response()
            }
        }),
    );
    let base_url = spawn_upstream(router).await;

    let authed = client_for(base_url.clone(), Some("secret"));
    authed
        .fetch_api::<Value>("/albums")
        .await
        .expect("key accepted");

    let anonymous = client_for(base_url, None);
    let err = anonymous
        .fetch_api::<Value>("/albums")
        .await
        .expect_err("missing key rejected");
    assert_eq!(err.upstream_status(), Some(401));
}

#[derive(Clone, Default)]
struct HitCounter {
    primary: Arc<AtomicUsize>,
    fallback: Arc<AtomicUsize>,
}

fn flaky_router(counter: HitCounter, fallback_status: StatusCode) -> Router {
    Router::new()
        .route(
            "/public/albums",
            get(|State(counter): State<HitCounter>| async move {
                counter.primary.fetch_add(1, Ordering::SeqCst);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }),
        )
        .route(
            "/albums",
            get(move |State(counter): State<HitCounter>| async move {
                counter.fallback.fetch_add(1, Ordering::SeqCst);
                if fallback_status.is_success() {
                    Json(json!({"data": [{"id": "1", "title": "Portraits"}]})).into_response()
                } else {
                    fallback_status.into_response()
                }
            }),
        )
        .with_state(counter)
}

#[tokio::test]
async fn fallback_is_tried_exactly_once_on_primary_failure() {
    let counter = HitCounter::default();
    let base_url = spawn_upstream(flaky_router(counter.clone(), StatusCode::OK)).await;
    let client = client_for(base_url, None);

    let albums: Value = client
        .fetch_with_fallback("/public/albums", "/albums")
        .await
        .expect("fallback succeeds");

    assert_eq!(albums[0]["title"], "Portraits");
    assert_eq!(counter.primary.load(Ordering::SeqCst), 1);
    assert_eq!(counter.fallback.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn fallback_failure_propagates() {
    let counter = HitCounter::default();
    let base_url = spawn_upstream(flaky_router(counter.clone(), StatusCode::NOT_FOUND)).await;
    let client = client_for(base_url, None);

    let err = client
        .fetch_with_fallback::<Value>("/public/albums", "/albums")
        .await
        .expect_err("both endpoints fail");

    // The propagated error is the fallback's, not the primary's.
    assert_eq!(err.upstream_status(), Some(404));
    assert_eq!(counter.fallback.load(Ordering::SeqCst), 1);
}
