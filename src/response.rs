/// Standard API response envelope
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Envelope wrapped around every API payload
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: DateTime<Utc>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(code: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            success: true,
            code: code.as_u16(),
            message: message.into(),
            data,
            timestamp: Utc::now(),
        }
    }

    /// 200 OK with a payload
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::success(StatusCode::OK, message, Some(data))
    }

    /// 201 Created with a payload
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::success(StatusCode::CREATED, message, Some(data))
    }

    pub fn error(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code: code.as_u16(),
            message: message.into(),
            data: None,
            timestamp: Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    /// 200 OK without a payload
    pub fn message(message: impl Into<String>) -> Self {
        Self::success(StatusCode::OK, message, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}
