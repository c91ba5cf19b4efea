#![allow(dead_code)]

use api::api_state::ApiContext;
use api::create_router;
use app_state::{
    ApiSettings, AppSettings, ContactProvider, ContactSettings, LoggingSettings, VamsSettings,
};
use async_trait::async_trait;
use axum::Router;
use notify::{ContactMessage, Notifier, NotifyError};
use std::sync::{Arc, Mutex};
use vams_client::VamsClient;

/// Notifier test double: records messages, optionally fails every delivery.
#[derive(Default)]
pub struct MockNotifier {
    pub sent: Mutex<Vec<ContactMessage>>,
    pub fail: bool,
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send(&self, message: &ContactMessage) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError::Delivery {
                status: 502,
                body: "provider down".to_string(),
            });
        }
        self.sent.lock().expect("lock").push(message.clone());
        Ok(())
    }
}

pub fn test_settings(vams_base_url: &str) -> AppSettings {
    AppSettings {
        api: ApiSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
            allowed_origins: vec![],
            public_url: "http://localhost".to_string(),
        },
        vams: VamsSettings {
            base_url: vams_base_url.to_string(),
            api_key: None,
        },
        contact: ContactSettings {
            provider: ContactProvider::Webhook,
            webhook_url: Some("http://127.0.0.1:9/hook".to_string()),
            sendgrid: None,
            site_name: "example.com".to_string(),
        },
        logging: LoggingSettings {
            level: "info".to_string(),
        },
    }
}

/// Bind any router on an ephemeral port and return its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

/// Spin up the full application router against the given upstream and
/// notifier double.
pub async fn spawn_app(vams_base_url: &str, notifier: Arc<MockNotifier>) -> String {
    let settings = test_settings(vams_base_url);
    let context = ApiContext {
        vams: VamsClient::new(settings.vams.clone()).expect("vams client"),
        notifier,
        settings,
    };
    spawn(create_router(context)).await
}
