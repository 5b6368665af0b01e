//! Tests for the boss catalog endpoints.

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
};
use meyoil::{
    model::boss::{Boss, BossCatalog},
    server::controller::boss::{get_boss, list_bosses, list_recommended_bosses, RecommendedParams},
};

use super::*;

#[tokio::test]
/// Expect the whole built in catalog in display order
async fn lists_whole_catalog() -> Result<(), TestError> {
    let resp = list_bosses().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let bosses: Vec<Boss> = json_body(resp).await;
    assert_eq!(bosses, BossCatalog::builtin().all().to_vec());

    Ok(())
}

#[tokio::test]
/// Expect only bosses with a tier open at the requested level
async fn recommended_bosses_respect_level() -> Result<(), TestError> {
    let level = 200;

    let resp = list_recommended_bosses(Query(RecommendedParams { level }))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let bosses: Vec<Boss> = json_body(resp).await;
    assert!(bosses.iter().all(|boss| boss.is_available_at(level)));
    assert!(bosses.len() < BossCatalog::builtin().len());

    Ok(())
}

#[tokio::test]
/// Expect 404 with an error body for an unknown boss
async fn not_found_for_unknown_boss() -> Result<(), TestError> {
    let result = get_boss(Path("not-a-boss".to_string())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
