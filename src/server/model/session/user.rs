use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_ID_KEY: &str = "meyoil:user:id";

/// ID of the logged in user, stored as a string to survive store serialization formats.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub String);

impl SessionUserId {
    /// Insert user ID into session, replacing any previous login
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        // New session ID on login so a pre-login session ID can't be reused
        session.cycle_id().await?;
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id.to_string()))
            .await?;

        Ok(())
    }

    /// Get user ID from session
    ///
    /// Returns `Ok(None)` for anonymous sessions.
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session user id: {}", e))
                })
            })
            .transpose()
    }

    /// Clears the session if a user is logged in.
    ///
    /// Returns the ID of the user that was logged out. Anonymous sessions are left untouched,
    /// clearing a session that was never persisted fails in the store.
    pub async fn clear(session: &Session) -> Result<Option<i32>, Error> {
        let user_id = Self::get(session).await?;

        if user_id.is_some() {
            session.clear().await;
        }

        Ok(user_id)
    }
}
