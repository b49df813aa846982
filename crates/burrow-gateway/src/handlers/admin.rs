use crate::cookies::session_token;
use crate::error::{AppError, Result};
use crate::handlers::assets::{ADMIN_DASHBOARD_HTML, ADMIN_LOGIN_HTML};
use crate::model::{
    AdminQuery, CountResponse, MappingView, MappingsQuery, MappingsResponse, MockDataQuery,
    MockDataResponse,
};
use crate::settings::DEFAULT_MOCK_ITEMS;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Html;
use axum::Json;
use tracing::{info, warn};

const LOGIN_ERROR_SLOT: &str = "<!-- login-error -->";
const LOGIN_ERROR_MESSAGE: &str = r#"<p class="error">Invalid username or password.</p>"#;

/// Renders the dashboard for a live session, the login form otherwise.
///
/// Viewing the page does not renew the session; the dashboard's API calls do.
pub async fn admin_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AdminQuery>,
) -> Html<String> {
    let authenticated = session_token(&headers)
        .is_some_and(|token| state.authenticator().registry().is_active(&token));

    if authenticated {
        return Html(ADMIN_DASHBOARD_HTML.to_owned());
    }

    let error = if query.error.as_deref() == Some("1") {
        LOGIN_ERROR_MESSAGE
    } else {
        ""
    };
    Html(ADMIN_LOGIN_HTML.replace(LOGIN_ERROR_SLOT, error))
}

pub async fn count_handler(State(state): State<AppState>) -> Result<Json<CountResponse>> {
    let count = state.shortener().count().await?;
    Ok(Json(CountResponse { count }))
}

pub async fn mappings_handler(
    State(state): State<AppState>,
    Query(query): Query<MappingsQuery>,
) -> Result<Json<MappingsResponse>> {
    let settings = state.settings();
    let page = query.page.unwrap_or(1).max(1);
    let page_size = query
        .page_size
        .unwrap_or(settings.default_page_size)
        .clamp(1, settings.max_page_size);
    let offset = (page - 1).saturating_mul(page_size);

    let listed = state.shortener().list(offset, page_size).await?;
    let total_count = listed.total_count;
    let mappings = listed
        .entries
        .into_iter()
        .map(|entry| MappingView::from_entry(entry, &settings.base_url))
        .collect();

    Ok(Json(MappingsResponse {
        mappings,
        total_count,
        page,
        page_size,
        total_pages: total_count.div_ceil(page_size),
    }))
}

pub async fn mock_data_handler(
    State(state): State<AppState>,
    Query(query): Query<MockDataQuery>,
) -> Result<Json<MockDataResponse>> {
    let max = state.settings().max_mock_items;
    let amount = query.count.unwrap_or(DEFAULT_MOCK_ITEMS);
    if amount == 0 || amount > max {
        return Err(AppError::InvalidRequest(format!(
            "count must be between 1 and {max}"
        )));
    }

    let mut created = Vec::with_capacity(amount);
    let mut failed = 0;
    for outcome in state.shortener().seed(amount).await {
        match outcome {
            Ok(code) => created.push(code.as_str().to_owned()),
            Err(e) => {
                warn!(error = %e, "failed to write mock mapping");
                failed += 1;
            }
        }
    }

    info!(created = created.len(), failed, "injected mock data");
    Ok(Json(MockDataResponse { created, failed }))
}
