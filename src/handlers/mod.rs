// src/handlers/mod.rs

pub mod question;

use crate::error::AppError;

/// Fallback for any path no router claims.
pub async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
