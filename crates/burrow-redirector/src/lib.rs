//! Redirector service library.
//!
//! This crate provides a [`RedirectorService`] that resolves short codes
//! to their original URLs and records a visit for every successful
//! resolution, including the operating system and browser parsed from the
//! visitor's user agent.
//!
//! # Example
//!
//! ```rust
//! use burrow_redirector::{Redirector, RedirectorService};
//! use burrow_storage::InMemoryRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = RedirectorService::new(InMemoryRepository::new());
//!
//! match service.resolve("abc12345", "curl/8.5.0").await {
//!     Ok(url) => println!("Redirect to: {}", url),
//!     Err(e) => println!("Cannot redirect: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod redirector;
pub mod service;
pub mod user_agent;

pub use error::RedirectorError;
pub use redirector::Redirector;
pub use service::RedirectorService;
pub use user_agent::parse_user_agent;
