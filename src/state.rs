//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! greeting is process-wide and last-write-wins; the access counter counts
//! every `/greet` request.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::services::google::TokenVerifier;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub greeting: Arc<RwLock<String>>,
    pub access_counter: Arc<AtomicU64>,
    /// Bearer-token verifier. `None` if no Google client id is configured.
    pub verifier: Option<Arc<dyn TokenVerifier>>,
    /// Client id handed to the web UI through its `google-signin-client_id` meta tag.
    pub google_client_id: Option<Arc<str>>,
}

impl AppState {
    #[must_use]
    pub fn new(greeting: impl Into<String>, verifier: Option<Arc<dyn TokenVerifier>>) -> Self {
        Self {
            greeting: Arc::new(RwLock::new(greeting.into())),
            access_counter: Arc::new(AtomicU64::new(0)),
            verifier,
            google_client_id: None,
        }
    }

    #[must_use]
    pub fn with_client_id(mut self, client_id: Option<&str>) -> Self {
        self.google_client_id = client_id.map(Arc::from);
        self
    }

    pub async fn greeting(&self) -> String {
        self.greeting.read().await.clone()
    }

    pub async fn set_greeting(&self, greeting: impl Into<String>) -> String {
        let mut guard = self.greeting.write().await;
        *guard = greeting.into();
        guard.clone()
    }

    pub fn record_access(&self) -> u64 {
        self.access_counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    #[must_use]
    pub fn access_count(&self) -> u64 {
        self.access_counter.load(Ordering::Relaxed)
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
