use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use burrow_core::StorageError;
use burrow_redirector::RedirectorError;
use burrow_session::{SessionError, Unauthorized};
use burrow_shortener::ShortenerError;
use thiserror::Error;
use tracing::error;

use crate::handlers::{ADMIN_PATH, LOGIN_FAILED_PATH};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("not found")]
    NotFound,

    #[error("unauthorized")]
    Unauthorized,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ShortenerError> for AppError {
    fn from(err: ShortenerError) -> Self {
        match err {
            ShortenerError::InvalidUrl(msg) | ShortenerError::InvalidPage(msg) => {
                AppError::InvalidRequest(msg)
            }
            ShortenerError::Storage(e) => AppError::Storage(e),
        }
    }
}

impl From<RedirectorError> for AppError {
    fn from(err: RedirectorError) -> Self {
        match err {
            RedirectorError::NotFound => AppError::NotFound,
            RedirectorError::Storage(e) => AppError::Storage(e),
        }
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::InvalidCredentials => AppError::InvalidCredentials,
            SessionError::RandomSource(msg) => AppError::Internal(msg),
        }
    }
}

impl From<Unauthorized> for AppError {
    fn from(_: Unauthorized) -> Self {
        AppError::Unauthorized
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found").into_response(),
            AppError::Unauthorized => Redirect::to(ADMIN_PATH).into_response(),
            AppError::InvalidCredentials => Redirect::to(LOGIN_FAILED_PATH).into_response(),
            AppError::Storage(e) => {
                error!(error = %e, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
            AppError::Internal(msg) => {
                error!(error = %msg, "internal failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;

    fn location(response: &Response) -> &str {
        response.headers()[LOCATION].to_str().unwrap()
    }

    #[test]
    fn status_mapping() {
        let cases = [
            (AppError::InvalidRequest("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound, StatusCode::NOT_FOUND),
            (
                AppError::Storage(StorageError::Unavailable("down".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (AppError::Internal("rng".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn session_failures_redirect_to_admin() {
        let response = AppError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/admin");

        let response = AppError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/admin?error=1");
    }

    #[test]
    fn converts_service_errors() {
        assert!(matches!(
            AppError::from(ShortenerError::InvalidUrl("empty".into())),
            AppError::InvalidRequest(_)
        ));
        assert!(matches!(
            AppError::from(RedirectorError::NotFound),
            AppError::NotFound
        ));
        assert!(matches!(
            AppError::from(SessionError::RandomSource("no entropy".into())),
            AppError::Internal(_)
        ));
    }
}
