use crate::{client::util::api::get, model::boss::Boss};

pub async fn list_bosses() -> Result<Vec<Boss>, String> {
    get("/api/bosses").await
}

/// Bosses with at least one tier open to a character of `level`
pub async fn list_recommended_bosses(level: u32) -> Result<Vec<Boss>, String> {
    get(&format!("/api/bosses/recommended?level={}", level)).await
}
