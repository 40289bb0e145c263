use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    error::AppError,
    state::AppState,
};

use super::dto::{MealBody, MealListResponse, MealResponse, SummaryResponse};
use super::{repo, services};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals))
        .route("/meals/summary", get(summary))
        .route("/meals/:id", get(get_meal))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", post(create_meal))
        .route("/meals/:id", put(update_meal).delete(delete_meal))
}

#[instrument(skip(state, body))]
pub async fn create_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<MealBody>,
) -> Result<StatusCode, AppError> {
    let meal_id = repo::insert(
        &state.db,
        user_id,
        &body.name,
        &body.description,
        body.meal_time,
        body.is_diet,
    )
    .await?;

    info!(%user_id, %meal_id, "meal created");
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state, body))]
pub async fn update_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<MealBody>,
) -> Result<StatusCode, AppError> {
    let updated = repo::update(
        &state.db,
        user_id,
        id,
        &body.name,
        &body.description,
        body.meal_time,
        body.is_diet,
    )
    .await?;

    if !updated {
        warn!(%user_id, %id, "update matched no meal");
        return Err(AppError::BadRequest("meal not found".into()));
    }
    Ok(StatusCode::OK)
}

#[instrument(skip(state))]
pub async fn delete_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = repo::remove(&state.db, user_id, id).await?;

    if !deleted {
        warn!(%user_id, %id, "delete matched no meal");
        return Err(AppError::BadRequest("meal not found".into()));
    }
    Ok(StatusCode::OK)
}

#[instrument(skip(state))]
pub async fn get_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MealResponse>, AppError> {
    let meal = repo::get(&state.db, user_id, id)
        .await?
        .ok_or(AppError::NotFound("Meal not found"))?;
    Ok(Json(MealResponse { meal }))
}

#[instrument(skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<MealListResponse>, AppError> {
    let meals = repo::list_by_user(&state.db, user_id).await?;
    Ok(Json(MealListResponse { meals }))
}

#[instrument(skip(state))]
pub async fn summary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<SummaryResponse>, AppError> {
    let meals = repo::list_by_user(&state.db, user_id).await?;
    let summary = services::summarize(&meals);
    Ok(Json(SummaryResponse::from(summary)))
}
