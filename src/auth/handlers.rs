use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use time::Duration;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, RegisterRequest, UsersResponse},
        repo::User,
        services::{is_valid_email, new_session_token, verify_password},
    },
    error::AppError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

pub fn users_routes() -> Router<AppState> {
    Router::new().route("/users", get(list_users))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<StatusCode, AppError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(AppError::BadRequest("invalid email".into()));
    }

    // Ensure email is not taken
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(AppError::Conflict("email already registered"));
    }

    let user = User::create(&state.db, &payload.name, &payload.email, &payload.password).await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state, jar, payload))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(mut payload): Json<LoginRequest>,
) -> Result<(StatusCode, CookieJar, Json<LoginResponse>), AppError> {
    payload.email = payload.email.trim().to_lowercase();

    let user = User::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login unknown email");
            AppError::Unauthenticated("email not found")
        })?;

    if !verify_password(&payload.password, &user.password) {
        warn!(user_id = %user.id, "login invalid password");
        return Err(AppError::Unauthenticated("incorrect password"));
    }

    let token = new_session_token();
    User::set_session_token(&state.db, user.id, &token).await?;

    let session = &state.config.session;
    let cookie = Cookie::build((session.cookie_name.clone(), token.clone()))
        .path("/")
        .max_age(Duration::seconds(session.ttl_seconds))
        .build();

    info!(user_id = %user.id, "user logged in");
    Ok((
        StatusCode::CREATED,
        jar.add(cookie),
        Json(LoginResponse {
            user,
            session_token: token,
        }),
    ))
}

/// Unscoped listing, no session required.
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<UsersResponse>, AppError> {
    let users = User::list_all(&state.db).await?;
    Ok(Json(UsersResponse { users }))
}
