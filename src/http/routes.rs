//! Phonebook HTTP Routes
//!
//! One handler per route, each a thin wrapper around a single persistence
//! gateway call. Handlers never map failures to status codes themselves;
//! they surface an [`ApiError`] and let it normalize the response.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use chrono::Local;
use serde::Deserialize;

use crate::person::Person;
use crate::store::PersonStore;

use super::error::{ApiError, ApiResult, ErrorBody};

// ==================
// Shared State
// ==================

/// State shared across handlers: the injected persistence gateway.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PersonStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }
}

// ==================
// Request Types
// ==================

/// Body for person creation.
///
/// Keys are optional so presence can be checked per field: an absent key
/// short-circuits with a field-specific message, while a present empty
/// string still reaches schema validation downstream.
#[derive(Debug, Deserialize)]
pub struct CreatePersonRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

/// Body for person replacement.
///
/// Unlike creation, both fields must be present AND non-empty.
#[derive(Debug, Deserialize)]
pub struct UpdatePersonRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

// ==================
// Router
// ==================

/// Build the phonebook router around the given state.
pub fn person_routes(state: AppState) -> Router {
    Router::new()
        .route("/info", get(info_handler))
        .route("/api/persons", get(list_persons_handler))
        .route("/api/persons", post(create_person_handler))
        .route("/api/persons/{id}", get(get_person_handler))
        .route("/api/persons/{id}", put(update_person_handler))
        .route("/api/persons/{id}", delete(delete_person_handler))
        .fallback(unknown_endpoint)
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// Info page handler
async fn info_handler(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let count = state.store.list_all().await?.len();
    let now = Local::now().to_rfc2822();

    Ok(Html(format!(
        "<div><h1>Phonebook has info for {count} people</h1><h2>{now}</h2></div>"
    )))
}

/// List all persons handler
async fn list_persons_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<Person>>> {
    let persons = state
        .store
        .list_all()
        .await?
        .iter()
        .map(Person::from)
        .collect();
    Ok(Json(persons))
}

/// Get single person handler
async fn get_person_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Person>> {
    let document = state
        .store
        .find_by_id(&id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(Person::from(&document)))
}

/// Create person handler
async fn create_person_handler(
    State(state): State<AppState>,
    Json(body): Json<CreatePersonRequest>,
) -> ApiResult<Json<Person>> {
    let name = body.name.ok_or(ApiError::MissingField("name"))?;
    let number = body.number.ok_or(ApiError::MissingField("number"))?;

    let document = state.store.create(&name, &number).await?;
    Ok(Json(Person::from(&document)))
}

/// Replace person handler
async fn update_person_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdatePersonRequest>,
) -> ApiResult<Json<Option<Person>>> {
    let (name, number) = match (body.name.as_deref(), body.number.as_deref()) {
        (Some(name), Some(number)) if !name.is_empty() && !number.is_empty() => (name, number),
        _ => return Err(ApiError::MissingBody),
    };

    let updated = state.store.update_by_id(&id, name, number).await?;

    // A replace addressing no record answers 200 with a null body.
    Ok(Json(updated.as_ref().map(Person::from)))
}

/// Delete person handler
async fn delete_person_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.store.delete_by_id(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for requests matching no route
async fn unknown_endpoint() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new("unknown endpoint")),
    )
}
