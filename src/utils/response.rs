// src/utils/response.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Success envelope shared by every handler.
///
/// Serialized as `{ statusCode, data, message, success }`, where `success`
/// is derived from the status code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub data: T,
    pub message: String,
    pub success: bool,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            data,
            message: message.into(),
            success: status.as_u16() < 400,
        }
    }

    /// 200 OK with the given payload.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, data, message)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_uses_camel_case_keys() {
        let envelope = ApiResponse::ok(vec!["a", "b"], "Fetched");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "statusCode": 200,
                "data": ["a", "b"],
                "message": "Fetched",
                "success": true,
            })
        );
    }

    #[test]
    fn success_flag_tracks_status() {
        let envelope = ApiResponse::new(StatusCode::BAD_REQUEST, (), "nope");
        assert!(!envelope.success);
        assert_eq!(envelope.status_code, 400);
    }
}
