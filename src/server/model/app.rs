use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub nexon_client: nexon_api::Client,
}

impl From<(DatabaseConnection, nexon_api::Client)> for AppState {
    fn from((db, nexon_client): (DatabaseConnection, nexon_api::Client)) -> Self {
        Self { db, nexon_client }
    }
}
