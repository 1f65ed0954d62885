//! Client identity extractor
//!
//! Resolves the caller's address and hashes it immediately; handlers and
//! services only ever see the digest.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::{
    async_trait,
    extract::{ConnectInfo, FromRequestParts},
    http::{request::Parts, HeaderMap},
};
use confession_common::{hash_identifier, UNKNOWN_CLIENT};

const FORWARDED_FOR: &str = "x-forwarded-for";
const REAL_IP: &str = "x-real-ip";

/// Hashed client identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp {
    hash: String,
}

impl ClientIp {
    pub fn from_address(address: &str) -> Self {
        Self {
            hash: hash_identifier(address),
        }
    }

    /// SHA-256 hex digest of the resolved address
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

/// Resolve the client address.
///
/// Order: first `x-forwarded-for` entry, `x-real-ip`, socket peer, then
/// the shared `unknown` bucket. Blank header values are skipped.
pub fn resolve_client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    };

    if let Some(first) = header(FORWARDED_FOR)
        .and_then(|list| list.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
    {
        return first.to_string();
    }

    if let Some(real_ip) = header(REAL_IP) {
        return real_ip.to_string();
    }

    peer.map_or_else(|| UNKNOWN_CLIENT.to_string(), |addr| addr.ip().to_string())
}

#[async_trait]
impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(Self::from_address(&resolve_client_ip(&parts.headers, peer)))
    }
}
