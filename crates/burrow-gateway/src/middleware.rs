use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use crate::cookies::session_token;
use crate::error::Result;
use crate::state::AppState;

/// Lets the request through only with a live session, renewing it.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let token = session_token(request.headers());
    let path = request.uri().path().to_owned();

    let outcome: Result<Response> = state
        .gate()
        .run(token.as_deref(), || async move { Ok(next.run(request).await) })
        .await;

    if outcome.is_err() {
        debug!(%path, "rejected request without a live session");
    }
    outcome
}
