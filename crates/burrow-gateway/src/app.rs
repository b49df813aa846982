use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    admin_mappings_js, admin_page, count_handler, health_handler, index_js, index_page,
    login_handler, login_page, logout_handler, mappings_handler, mock_data_handler,
    redirect_handler, shorten_handler,
};
use crate::middleware::require_session;
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        let admin_api = Router::new()
            .route("/count", get(count_handler))
            .route("/mappings-api", get(mappings_handler))
            .route("/mock-data", post(mock_data_handler))
            .route_layer(from_fn_with_state(state.clone(), require_session));

        Router::new()
            .route("/", get(index_page))
            .route("/static/js/index.js", get(index_js))
            .route("/static/js/admin_mappings.js", get(admin_mappings_js))
            .route("/health", get(health_handler))
            .route("/shorten", post(shorten_handler))
            .route("/s/{short_code}", get(redirect_handler))
            .route("/admin", get(admin_page))
            .route("/login", get(login_page).post(login_handler))
            .route("/logout", get(logout_handler).post(logout_handler))
            .merge(admin_api)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
