//! Core types and traits for the Burrow URL shortener.
//!
//! This crate provides the shared vocabulary used by the shortener,
//! redirector, storage and session crates: short codes, mapping records,
//! the repository contract and an injectable clock.

pub mod clock;
pub mod error;
pub mod record;
pub mod repository;
pub mod shortcode;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CoreError, StorageError};
pub use record::{ClientMetadata, MappingRecord};
pub use repository::{MappingEntry, MappingPage, ReadRepository, Repository};
pub use shortcode::ShortCode;
