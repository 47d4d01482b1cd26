//! API module
//!
//! HTTP surface: routes, middleware and shared state.

pub mod middleware;
pub mod routes;

pub use routes::create_router;

use std::sync::Arc;

use crate::gateway::GeminiGateway;
use crate::session::SessionStore;
use crate::store::EventStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EventStore>,
    pub sessions: Arc<SessionStore>,
    pub gateway: Arc<GeminiGateway>,
}

impl AppState {
    pub fn new(store: EventStore, sessions: SessionStore, gateway: GeminiGateway) -> Self {
        Self {
            store: Arc::new(store),
            sessions: Arc::new(sessions),
            gateway: Arc::new(gateway),
        }
    }
}
