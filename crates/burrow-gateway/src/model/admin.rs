use burrow_core::MappingEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MappingsQuery {
    pub page: Option<usize>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MockDataQuery {
    pub count: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MappingView {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub count: u64,
    pub device: Option<String>,
    pub os: Option<String>,
}

impl MappingView {
    pub fn from_entry(entry: MappingEntry, base_url: &str) -> Self {
        Self {
            short_url: entry.code.to_url(base_url),
            short_code: entry.code.as_str().to_owned(),
            original_url: entry.record.original_url,
            count: entry.record.count,
            device: entry.record.device,
            os: entry.record.os,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MappingsResponse {
    pub mappings: Vec<MappingView>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MockDataResponse {
    pub created: Vec<String>,
    pub failed: usize,
}
