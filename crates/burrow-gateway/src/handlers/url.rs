use crate::error::Result;
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::header::{LOCATION, USER_AGENT};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use tracing::info;

pub async fn shorten_handler(
    State(state): State<AppState>,
    Form(request): Form<ShortenRequest>,
) -> Result<Json<ShortenResponse>> {
    let short_code = state.shortener().shorten(&request.url).await?;
    let short_url = short_code.to_url(&state.settings().base_url);

    info!(code = %short_code, "created short link");
    Ok(Json(ShortenResponse {
        short_code: short_code.as_str().to_owned(),
        short_url,
    }))
}

pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response> {
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let original_url = state.redirector().resolve(&short_code, user_agent).await?;
    Ok((StatusCode::FOUND, [(LOCATION, original_url)]).into_response())
}
