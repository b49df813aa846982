use crate::Generator;
use burrow_core::shortcode::LENGTH;
use burrow_core::ShortCode;
use xxhash_rust::xxh3::xxh3_128;

/// Derives short codes from the XXH3-128 digest of the content.
///
/// The code is the first eight hex digits of the big-endian digest, which
/// leaves a 32-bit key space. Two different inputs can share a code; no
/// collision check is performed and the later write replaces the earlier one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentHashGenerator;

impl ContentHashGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Renders the full 128-bit digest of `content` as lowercase hex.
    pub fn digest_hex(content: &str) -> String {
        format!("{:032x}", xxh3_128(content.as_bytes()))
    }
}

impl Generator for ContentHashGenerator {
    fn generate(&self, content: &str) -> ShortCode {
        let mut hex = Self::digest_hex(content);
        hex.truncate(LENGTH);
        ShortCode::new_unchecked(hex)
    }
}
