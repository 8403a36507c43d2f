//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::LinkService;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Public base URL that aliases are appended to in API responses.
    pub base_url: String,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, base_url: impl Into<String>) -> Self {
        Self {
            link_service,
            base_url: base_url.into(),
        }
    }
}
