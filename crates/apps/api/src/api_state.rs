use app_state::AppSettings;
use axum::extract::FromRef;
use notify::Notifier;
use std::sync::Arc;
use vams_client::VamsClient;

#[derive(Clone)]
pub struct ApiContext {
    pub vams: VamsClient,
    pub notifier: Arc<dyn Notifier>,
    pub settings: AppSettings,
}

// These impls let extractors that only need one part of the state pull it
// out of the ApiContext.
impl FromRef<ApiContext> for VamsClient {
    fn from_ref(state: &ApiContext) -> Self {
        state.vams.clone()
    }
}

impl FromRef<ApiContext> for Arc<dyn Notifier> {
    fn from_ref(state: &ApiContext) -> Self {
        state.notifier.clone()
    }
}

impl FromRef<ApiContext> for AppSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.clone()
    }
}
