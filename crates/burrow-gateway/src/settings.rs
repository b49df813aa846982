use jiff::SignedDuration;
use typed_builder::TypedBuilder;

pub const DEFAULT_SESSION_TTL: SignedDuration = SignedDuration::from_secs(600);
pub const DEFAULT_PAGE_SIZE: usize = 100;
pub const MAX_PAGE_SIZE: usize = 1000;
pub const DEFAULT_MOCK_ITEMS: usize = 100;
pub const MAX_MOCK_ITEMS: usize = 10_000;

/// Runtime knobs handed to the router.
#[derive(Debug, Clone, TypedBuilder)]
pub struct GatewaySettings {
    /// Public origin used to render short URLs, e.g. `https://burrow.example`.
    #[builder(setter(into))]
    pub base_url: String,
    #[builder(default = DEFAULT_SESSION_TTL)]
    pub session_ttl: SignedDuration,
    #[builder(default = DEFAULT_PAGE_SIZE)]
    pub default_page_size: usize,
    #[builder(default = MAX_PAGE_SIZE)]
    pub max_page_size: usize,
    #[builder(default = MAX_MOCK_ITEMS)]
    pub max_mock_items: usize,
}
