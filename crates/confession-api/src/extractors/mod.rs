//! Axum extractors for request handling
//!
//! Client identity, forgiving JSON bodies and the listing query string.

mod client_ip;
mod lenient_json;
mod list_query;

pub use client_ip::{resolve_client_ip, ClientIp};
pub use lenient_json::LenientJson;
pub use list_query::ListQuery;
