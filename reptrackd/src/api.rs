//! HTTP API for the reptrack daemon.
//!
//! Provides REST endpoints for exercise records:
//! - Create (POST /exercises)
//! - List, optionally filtered by reps (GET /exercises)
//! - Get one (GET /exercises/:id)
//! - Full replace (PUT /exercises/:id)
//! - Delete (DELETE /exercises/:id)
//!
//! This layer is a stateless request transformer: it validates the
//! request shape, makes exactly one store call, and translates the
//! outcome. Validation always runs before any store access.

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use reptrack_domain::{
    Exercise, ExerciseFields, ExerciseFilter, ExerciseName, Reps, Weight, WeightUnit, WorkoutDate,
};
use reptrack_store::ExerciseRepository;

use crate::error::ApiError;

// =============================================================================
// API State
// =============================================================================

/// Shared state for API handlers.
pub struct ApiState {
    /// The data-access layer; the only store handle in the process
    pub store: Arc<dyn ExerciseRepository>,
}

// =============================================================================
// Request Types
// =============================================================================

/// Raw request body for create and full replace.
///
/// Every field is optional at the deserialization stage so that a
/// missing field becomes a validation outcome (`Invalid request`), not
/// an extractor rejection with a foreign body shape.
#[derive(Debug, Deserialize)]
pub struct ExercisePayload {
    /// Exercise name
    pub name: Option<String>,
    /// Repetition count, as JSON integer or digit string
    pub reps: Option<NumberOrText>,
    /// Weight, as JSON integer or digit string
    pub weight: Option<NumberOrText>,
    /// Weight unit
    pub unit: Option<String>,
    /// Workout date
    pub date: Option<String>,
}

/// A numeric field sent either as a JSON number or as a string.
///
/// The front-end submits form inputs as strings, so `"10"` and `10`
/// must be interchangeable.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    /// JSON integer
    Number(i64),
    /// String form
    Text(String),
}

impl NumberOrText {
    /// Strict integer reading: the string form must be exactly an
    /// integer after trimming. No prefix coercion, no fractions.
    fn to_i32(&self) -> Option<i32> {
        let value = match self {
            NumberOrText::Number(n) => *n,
            NumberOrText::Text(s) => s.trim().parse::<i64>().ok()?,
        };
        i32::try_from(value).ok()
    }
}

/// Query parameters for listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Exact rep count to filter by
    pub reps: Option<String>,
}

// =============================================================================
// Validation
// =============================================================================

/// Apply the uniform validation contract shared by create and replace.
///
/// All five fields must be present and pass their value object's
/// constructor; any failure is `Invalid request` and nothing reaches
/// the store.
fn validate_payload(payload: ExercisePayload) -> Result<ExerciseFields, ApiError> {
    let name = ExerciseName::new(payload.name.ok_or(ApiError::InvalidRequest)?)?;

    let reps = Reps::new(
        payload
            .reps
            .and_then(|raw| raw.to_i32())
            .ok_or(ApiError::InvalidRequest)?,
    )?;

    let weight = Weight::new(
        payload
            .weight
            .and_then(|raw| raw.to_i32())
            .ok_or(ApiError::InvalidRequest)?,
    )?;

    let unit = payload
        .unit
        .ok_or(ApiError::InvalidRequest)?
        .parse::<WeightUnit>()?;

    let date = WorkoutDate::new(payload.date.ok_or(ApiError::InvalidRequest)?)?;

    Ok(ExerciseFields::new(name, reps, weight, unit, date))
}

// =============================================================================
// Router
// =============================================================================

/// Create the API router.
pub fn create_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/exercises", post(create_exercise))
        .route("/exercises", get(list_exercises))
        .route("/exercises/:id", get(get_exercise))
        .route("/exercises/:id", put(update_exercise))
        .route("/exercises/:id", delete(delete_exercise))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

/// Create a new exercise from the fields provided in the body.
async fn create_exercise(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<ExercisePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Exercise>), ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::InvalidRequest)?;
    let fields = validate_payload(payload)?;

    let created = state.store.create(&fields).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Retrieve the exercise with the id provided in the path.
async fn get_exercise(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<Exercise>, ApiError> {
    let exercise = state
        .store
        .find_by_id(&id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(exercise))
}

/// Retrieve exercises, filtered to an exact rep count when the query
/// carries one.
///
/// No page size is enforced: an unlimited result set is valid.
async fn list_exercises(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Exercise>>, ApiError> {
    let filter = match params.reps.as_deref() {
        Some(raw) => {
            let reps = raw
                .trim()
                .parse::<i32>()
                .map_err(|_| ApiError::InvalidRequest)?;
            ExerciseFilter::by_reps(reps)
        },
        None => ExerciseFilter::all(),
    };

    let exercises = state.store.find(&filter, 0).await?;

    Ok(Json(exercises))
}

/// Replace all fields of the exercise with the id provided in the path.
///
/// The validation contract is identical to create: a previously set
/// field that is not resent fails validation rather than being
/// preserved.
async fn update_exercise(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    payload: Result<Json<ExercisePayload>, JsonRejection>,
) -> Result<Json<Exercise>, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::InvalidRequest)?;
    let fields = validate_payload(payload)?;

    // Exactly one record modified is the only success case; any other
    // count reports as not found.
    if state.store.replace(&id, &fields).await? != 1 {
        return Err(ApiError::NotFound);
    }

    // A modified count of 1 implies the path id parsed in the store.
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound)?;
    Ok(Json(Exercise::from_fields(id, fields)))
}

/// Delete the exercise with the id provided in the path.
async fn delete_exercise(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete_by_id(&id).await? != 1 {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Tests
// =============================================================================
