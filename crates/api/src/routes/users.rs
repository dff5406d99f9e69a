//! User create and list endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use user_store::{NewUser, User, UserStore};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: UserStore> {
    pub store: S,
}

impl<S: UserStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

/// POST /api/users — persist a user and return it with its assigned id.
#[tracing::instrument(skip(state, user))]
pub async fn create<S: UserStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(user): Json<NewUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let stored = state.store.save(user).await?;

    metrics::counter!("users_created_total").increment(1);
    tracing::info!(id = %stored.id, "user created");

    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /api/users — list every stored user.
#[tracing::instrument(skip(state))]
pub async fn list<S: UserStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store.find_all().await?;

    metrics::counter!("users_listed_total").increment(1);
    tracing::debug!(count = users.len(), "users listed");

    Ok(Json(users))
}
