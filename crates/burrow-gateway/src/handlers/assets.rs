use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse};

const INDEX_HTML: &str = include_str!("../../static/index.html");
const INDEX_JS: &str = include_str!("../../static/js/index.js");
const ADMIN_MAPPINGS_JS: &str = include_str!("../../static/js/admin_mappings.js");

pub(crate) const ADMIN_LOGIN_HTML: &str = include_str!("../../static/admin_login.html");
pub(crate) const ADMIN_DASHBOARD_HTML: &str = include_str!("../../static/admin_dashboard.html");

const JAVASCRIPT: &str = "text/javascript; charset=utf-8";

pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn index_js() -> impl IntoResponse {
    ([(CONTENT_TYPE, JAVASCRIPT)], INDEX_JS)
}

pub async fn admin_mappings_js() -> impl IntoResponse {
    ([(CONTENT_TYPE, JAVASCRIPT)], ADMIN_MAPPINGS_JS)
}
