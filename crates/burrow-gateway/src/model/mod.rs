mod admin;
mod url;

pub use admin::*;
pub use url::*;
