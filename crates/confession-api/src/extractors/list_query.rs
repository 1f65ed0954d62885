//! Listing query extractor
//!
//! `page` and `limit` arrive as text so a non-numeric value reports the
//! same message as an out-of-range one.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use confession_service::ListConfessionsQuery;
use serde::Deserialize;

use crate::response::ApiError;

/// Raw query string parameters
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

/// Parsed listing query, range checks still pending in the service
#[derive(Debug, Clone)]
pub struct ListQuery(pub ListConfessionsQuery);

fn parse_number(raw: Option<String>, name: &str) -> Result<Option<i64>, ApiError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ApiError::invalid_query(format!("{name} must be a positive integer"))),
    }
}

impl TryFrom<ListParams> for ListQuery {
    type Error = ApiError;

    fn try_from(params: ListParams) -> Result<Self, Self::Error> {
        Ok(Self(ListConfessionsQuery {
            sort: params.sort,
            page: parse_number(params.page, "page")?,
            limit: parse_number(params.limit, "limit")?,
        }))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ListParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        ListQuery::try_from(params)
    }
}
