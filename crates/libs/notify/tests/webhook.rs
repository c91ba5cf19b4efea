use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use notify::{ContactMessage, Notifier, NotifyError, WebhookNotifier};
use serde_json::Value;
use std::sync::{Arc, Mutex};

async fn spawn_webhook(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve webhook");
    });
    format!("http://{addr}/hook")
}

fn submission() -> ContactMessage {
    ContactMessage {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message: "I would like a print.".to_string(),
        subject: None,
    }
}

#[tokio::test]
async fn webhook_receives_stamped_payload() {
    // ARRANGE
    let received: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new()
        .route(
            "/hook",
            post(
                |State(received): State<Arc<Mutex<Vec<Value>>>>, Json(body): Json<Value>| async move {
                    received.lock().expect("lock").push(body);
                    StatusCode::OK
                },
            ),
        )
        .with_state(received.clone());
    let webhook_url = spawn_webhook(router).await;
    let notifier = WebhookNotifier::new(
        reqwest::Client::new(),
        webhook_url,
        "example.com".to_string(),
    );

    // ACT
    notifier.send(&submission()).await.expect("delivery");

    // ASSERT
    let received = received.lock().expect("lock");
    assert_eq!(received.len(), 1);
    let payload = &received[0];
    assert_eq!(payload["name"], "Ada");
    assert_eq!(payload["email"], "ada@example.com");
    assert_eq!(payload["source"], "example.com");
    assert_eq!(
        payload["subject"],
        "New Contact Form Submission from example.com"
    );
    assert!(payload["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn non_2xx_webhook_response_is_a_delivery_error() {
    let router = Router::new().route(
        "/hook",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream broke") }),
    );
    let webhook_url = spawn_webhook(router).await;
    let notifier = WebhookNotifier::new(
        reqwest::Client::new(),
        webhook_url,
        "example.com".to_string(),
    );

    let err = notifier
        .send(&submission())
        .await
        .expect_err("delivery fails");
    match err {
        NotifyError::Delivery { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, "upstream broke");
        }
        other => panic!("expected delivery error, got {other:?}"),
    }
}
