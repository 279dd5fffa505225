use std::sync::Arc;

use crate::auth::AuthConfig;
use crate::store::HrStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<HrStore>,
    pub auth: Arc<AuthConfig>,
}

impl AppState {
    pub fn new(store: Arc<HrStore>, auth: Arc<AuthConfig>) -> Self {
        Self { store, auth }
    }
}
