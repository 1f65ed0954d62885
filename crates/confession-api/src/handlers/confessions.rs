//! Confession handlers
//!
//! Endpoints for reading the feed and posting confessions.

use axum::{extract::State, Json};
use confession_service::{
    ConfessionResponse, ConfessionService, CreateConfessionRequest, ListConfessionsResponse,
};

use crate::extractors::{ClientIp, LenientJson, ListQuery};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List confessions
///
/// GET /confessions?sort={new|trending|random}&page=N&limit=N
pub async fn list_confessions(
    State(state): State<AppState>,
    ListQuery(query): ListQuery,
) -> ApiResult<Json<ListConfessionsResponse>> {
    let service = ConfessionService::new(state.service_context());
    let page = service.list(query).await?;
    Ok(Json(page))
}

/// Post a confession
///
/// POST /confessions
pub async fn create_confession(
    State(state): State<AppState>,
    client: ClientIp,
    LenientJson(request): LenientJson<CreateConfessionRequest>,
) -> ApiResult<Created<Json<ConfessionResponse>>> {
    let service = ConfessionService::new(state.service_context());
    let confession = service.create(request, client.hash()).await?;
    Ok(Created(Json(confession)))
}
