use crate::cookies::{cleared_session_cookie, session_cookie, session_token};
use crate::error::{AppError, Result};
use crate::handlers::ADMIN_PATH;
use crate::model::LoginRequest;
use crate::state::AppState;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect};
use axum::Form;
use tracing::{info, warn};

pub async fn login_page() -> Redirect {
    Redirect::to(ADMIN_PATH)
}

pub async fn login_handler(
    State(state): State<AppState>,
    Form(request): Form<LoginRequest>,
) -> Result<impl IntoResponse> {
    let session = state
        .authenticator()
        .login(&request.username, &request.password)
        .map_err(AppError::from)
        .inspect_err(|e| {
            if matches!(e, AppError::InvalidCredentials) {
                warn!(username = %request.username, "rejected admin login");
            }
        })?;

    info!(expires_at = %session.expires_at, "admin logged in");
    let cookie = session_cookie(&session.token, state.settings().session_ttl);
    Ok(([(SET_COOKIE, cookie.to_string())], Redirect::to(ADMIN_PATH)))
}

pub async fn logout_handler(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = session_token(&headers) {
        state.authenticator().logout(&token);
        info!("admin logged out");
    }

    (
        [(SET_COOKIE, cleared_session_cookie().to_string())],
        Redirect::to(ADMIN_PATH),
    )
}
