pub mod hash;

pub use hash::ContentHashGenerator;

use burrow_core::ShortCode;

/// Trait for deriving short codes.
///
/// Implementations are pure functions of their input and don't interact
/// with storage, so the same content always maps to the same code.
pub trait Generator: Send + Sync + 'static {
    /// Derives the short code for the given content.
    fn generate(&self, content: &str) -> ShortCode;
}
