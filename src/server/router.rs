//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its utoipa specification. Swagger UI
//! serves the collected document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/characters` - List boss-eligible characters for a Nexon API key
/// - `POST /api/auth/register` - Register a new account
/// - `POST /api/auth/login` - Log in with main character name and password
/// - `GET /api/auth/logout` - Logout current user
/// - `POST /api/auth/refresh` - Renew the session ID
/// - `GET /api/auth/user` - Get current user information
/// - `POST /api/auth/reset-password` - Issue a temporary password
/// - `GET /api/user/characters` - Get characters owned by current user
/// - `POST /api/user/characters/{ocid}/refresh` - Refresh one owned character
/// - `PUT /api/user/main-character` - Change main character
/// - `PUT /api/user/password` - Change password
/// - `GET /api/user/settings` - Get account settings
/// - `PUT /api/user/settings/privacy` - Update data collection consent
/// - `PUT /api/user/settings/weekly-reset` - Update weekly reset preference
/// - `GET /api/bosses` - Full boss catalog
/// - `GET /api/bosses/recommended` - Bosses available at a level
/// - `GET /api/bosses/{boss_id}` - One boss
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, nexon_client };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Meyoil", description = "Meyoil API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::user::USER_TAG, description = "Account and character roster API routes"),
        (name = controller::boss::BOSS_TAG, description = "Boss catalog API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::list_characters))
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::refresh))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::auth::reset_password))
        .routes(routes!(controller::user::get_user_characters))
        .routes(routes!(controller::user::refresh_character))
        .routes(routes!(controller::user::change_main_character))
        .routes(routes!(controller::user::change_password))
        .routes(routes!(controller::user::get_settings))
        .routes(routes!(controller::user::update_privacy_settings))
        .routes(routes!(controller::user::update_weekly_reset_settings))
        .routes(routes!(controller::boss::list_bosses))
        .routes(routes!(controller::boss::list_recommended_bosses))
        .routes(routes!(controller::boss::get_boss))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use meyoil_test_utils::prelude::*;
    use tower::ServiceExt;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    use super::routes;
    use crate::server::model::app::AppState;

    fn app(test: &TestContext) -> Router {
        routes()
            .with_state(test.to_app_state::<AppState>())
            .layer(SessionManagerLayer::new(MemoryStore::default()))
    }

    async fn status(app: &Router, uri: &str) -> StatusCode {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

        app.clone().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    /// Expect the catalog routes and the OpenAPI document to be reachable
    async fn serves_public_routes() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let app = app(&test);

        assert_eq!(status(&app, "/api/bosses").await, StatusCode::OK);
        assert_eq!(
            status(&app, "/api/bosses/recommended?level=250").await,
            StatusCode::OK
        );
        assert_eq!(status(&app, "/api/docs/openapi.json").await, StatusCode::OK);

        Ok(())
    }

    #[tokio::test]
    /// Expect account routes to answer 404 without a logged in user
    async fn account_routes_require_login() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let app = app(&test);

        assert_eq!(status(&app, "/api/auth/user").await, StatusCode::NOT_FOUND);
        assert_eq!(
            status(&app, "/api/user/characters").await,
            StatusCode::NOT_FOUND
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 when the recommended bosses level is missing
    async fn recommended_bosses_need_level() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let app = app(&test);

        assert_eq!(
            status(&app, "/api/bosses/recommended").await,
            StatusCode::BAD_REQUEST
        );

        Ok(())
    }
}
