use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use tracing::warn;
use uuid::Uuid;

use crate::auth::repo::User;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves the session cookie to a user id. Rejects with 401 before the
/// handler body runs, so an invalid session never reaches meal data.
#[derive(Debug)]
pub struct AuthUser(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(&state.config.session.cookie_name)
            .map(|c| c.value().to_string())
            .ok_or(AppError::Unauthenticated("missing session cookie"))?;

        let user = User::find_by_session_token(&state.db, &token)
            .await?
            .ok_or_else(|| {
                warn!("presented session token matches no user");
                AppError::Unauthenticated("unauthenticated")
            })?;

        Ok(AuthUser(user.id))
    }
}
