//! Request handlers.

pub mod chat;
pub mod contact;
pub mod health;

use axum::http::Uri;

use crate::error::AppError;

/// Fallback for unknown routes — JSON 404 instead of an empty body.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("API endpoint not found: {}", uri.path()))
}

/// Known route, wrong method — JSON 405.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
