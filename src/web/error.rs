use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::Error;

/// API error rendered as `{"error": "<message>"}`
#[derive(Debug)]
pub struct ApiErr {
    status: StatusCode,
    message: String,
}

impl ApiErr {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: msg.into() }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self { status: StatusCode::NOT_FOUND, message: msg.into() }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: msg.into() }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Error> for ApiErr {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound { .. } => {
                tracing::debug!("{err}");
                Self::not_found("not found")
            }
            Error::InvalidIdentifier(_) => Self::bad_request(err.to_string()),
            Error::Io { .. } | Error::Archive { .. } => {
                tracing::error!("{err}");
                Self::internal("internal server error")
            }
        }
    }
}

impl IntoResponse for ApiErr {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.message}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_status_mapping() {
        let not_found = ApiErr::from(Error::NotFound { path: PathBuf::from("/home/me/x") });
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert!(!not_found.message().contains("/home/me"));

        let invalid = ApiErr::from(Error::InvalidIdentifier("..".into()));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let io = ApiErr::from(Error::Io {
            path: PathBuf::from("/x"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        });
        assert_eq!(io.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(io.message(), "internal server error");

        let archive = ApiErr::from(Error::Archive {
            path: PathBuf::from("/home/me/archive.json"),
            source: serde_json::from_str::<()>("{").unwrap_err(),
        });
        assert_eq!(archive.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!archive.message().contains("/home/me"));
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = ApiErr::bad_request("nope").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
