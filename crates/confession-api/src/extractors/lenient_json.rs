//! Forgiving JSON body extractor
//!
//! A body that is missing, empty or not valid JSON for `T` yields
//! `T::default()`. The services then report the missing fields in their
//! normal order, which keeps rate limiting ahead of input validation.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::debug;

/// JSON body that never rejects
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

impl<T> LenientJson<T>
where
    T: DeserializeOwned + Default,
{
    pub fn parse(bytes: &[u8]) -> Self {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Self(T::default());
        }

        match serde_json::from_slice(bytes) {
            Ok(value) => Self(value),
            Err(e) => {
                debug!(error = %e, "Unreadable JSON body, treating as empty");
                Self(T::default())
            }
        }
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for LenientJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = std::convert::Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Bytes::from_request(req, state).await {
            Ok(bytes) => Ok(Self::parse(&bytes)),
            Err(e) => {
                debug!(error = %e, "Failed to read request body");
                Ok(Self(T::default()))
            }
        }
    }
}
