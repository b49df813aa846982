//! Mapping repository backends.
//!
//! [`RedbRepository`] is the durable backend used in production;
//! [`InMemoryRepository`] keeps everything in process memory and is meant
//! for tests and throwaway instances.

pub mod memory;
pub mod redb;

pub use self::memory::InMemoryRepository;
pub use self::redb::RedbRepository;
pub use burrow_core::error::Result;
pub use burrow_core::{ReadRepository, Repository, StorageError};
