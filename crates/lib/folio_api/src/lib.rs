//! # folio_api
//!
//! HTTP API library for Folio.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use folio_core::responder::{FallbackResponder, Responder};
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{chat, contact, health};

pub const ROUTE_CHAT: &str = "/api/chat";
pub const ROUTE_CONTACT: &str = "/contact";
pub const ROUTE_HEALTH: &str = "/api/health";

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Produces the reply for every chat message.
    pub responder: Arc<dyn Responder>,
}

impl AppState {
    /// State answering chat from the backend reply table, variants picked at
    /// random.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_responder(config, Arc::new(FallbackResponder::new()))
    }

    pub fn with_responder(config: ApiConfig, responder: Arc<dyn Responder>) -> Self {
        Self { config, responder }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(ROUTE_CHAT, post(chat::chat_handler))
        .route(ROUTE_CONTACT, post(contact::contact_handler))
        .route(ROUTE_HEALTH, get(health::health_handler))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(cors)
        .with_state(state)
}
