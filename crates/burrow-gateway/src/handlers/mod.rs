mod admin;
mod assets;
mod auth;
mod health;
mod url;

pub use admin::{admin_page, count_handler, mappings_handler, mock_data_handler};
pub use assets::{admin_mappings_js, index_js, index_page};
pub use auth::{login_handler, login_page, logout_handler};
pub use health::health_handler;
pub use url::{redirect_handler, shorten_handler};

pub const ADMIN_PATH: &str = "/admin";
pub const LOGIN_FAILED_PATH: &str = "/admin?error=1";
