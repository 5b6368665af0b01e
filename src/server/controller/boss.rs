use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        boss::{Boss, BossCatalog},
    },
    server::error::{boss::BossError, Error},
};

pub static BOSS_TAG: &str = "boss";

#[derive(Deserialize, IntoParams)]
pub struct RecommendedParams {
    /// Character level to filter bosses by
    pub level: u32,
}

/// Lists every boss in the catalog
#[utoipa::path(
    get,
    path = "/api/bosses",
    tag = BOSS_TAG,
    responses(
        (status = 200, description = "Full boss catalog in display order", body = Vec<Boss>),
    ),
)]
pub async fn list_bosses() -> impl IntoResponse {
    (StatusCode::OK, Json(BossCatalog::builtin().all().to_vec()))
}

/// Lists bosses with at least one difficulty a character of the given level can enter
#[utoipa::path(
    get,
    path = "/api/bosses/recommended",
    tag = BOSS_TAG,
    params(RecommendedParams),
    responses(
        (status = 200, description = "Bosses available at the given level", body = Vec<Boss>),
        (status = 400, description = "Missing or malformed level"),
    ),
)]
pub async fn list_recommended_bosses(
    Query(params): Query<RecommendedParams>,
) -> impl IntoResponse {
    let bosses: Vec<Boss> = BossCatalog::builtin()
        .recommended(params.level)
        .into_iter()
        .cloned()
        .collect();

    (StatusCode::OK, Json(bosses))
}

#[utoipa::path(
    get,
    path = "/api/bosses/{boss_id}",
    tag = BOSS_TAG,
    params(("boss_id" = String, Path, description = "Catalog identifier of the boss")),
    responses(
        (status = 200, description = "The requested boss", body = Boss),
        (status = 404, description = "Boss not found", body = ErrorDto),
    ),
)]
pub async fn get_boss(Path(boss_id): Path<String>) -> Result<impl IntoResponse, Error> {
    let boss = BossCatalog::builtin()
        .get(&boss_id)
        .cloned()
        .ok_or(BossError::BossNotFound(boss_id))?;

    Ok((StatusCode::OK, Json(boss)))
}
