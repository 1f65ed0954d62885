//! Reaction handlers

use axum::{extract::State, Json};
use confession_service::{ConfessionResponse, ReactRequest, ReactionService};

use crate::extractors::{ClientIp, LenientJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Add a reaction to a confession
///
/// POST /reactions
pub async fn add_reaction(
    State(state): State<AppState>,
    client: ClientIp,
    LenientJson(request): LenientJson<ReactRequest>,
) -> ApiResult<Json<ConfessionResponse>> {
    let service = ReactionService::new(state.service_context());
    let confession = service.react(request, client.hash()).await?;
    Ok(Json(confession))
}
