//! HTTP surface for the Burrow URL shortener.
//!
//! Public routes create and resolve short links. Everything under the admin
//! surface sits behind an [`AccessGate`](burrow_session::AccessGate) applied
//! as route middleware.

pub mod app;
pub mod cli;
pub mod cookies;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod settings;
pub mod state;

pub use app::App;
pub use error::{AppError, Result};
pub use settings::GatewaySettings;
pub use state::AppState;
