pub mod http;
pub mod username;

pub use http::{HttpClient, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
pub use username::normalize_username;
