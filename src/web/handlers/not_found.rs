//! Fallback handler for unknown routes.

use axum::http::Uri;

use crate::error::AppError;

/// Renders the 404 page for any unmatched path.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found(format!("Nothing lives at {}", uri.path()))
}
