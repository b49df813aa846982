//! URL shortener service implementation.
//!
//! This crate provides the write and administrative side of the mapping
//! store: creating mappings, listing them page by page, counting them and
//! seeding synthetic data. Core types are re-exported from `burrow_core`.

pub mod error;
pub mod mock;
pub mod service;
pub mod shortener;

pub use error::ShortenerError;
pub use service::ShortenerService;
pub use shortener::Shortener;
