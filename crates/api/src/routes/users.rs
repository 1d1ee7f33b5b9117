//! User CRUD endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;

use common::UserId;
use domain::UserDirectory;
use sale_store::SaleStore;
use users::{NewUser, User, UserUpdate};

use crate::error::ApiError;
use crate::routes::sales::AppState;

/// Wire representation of a user record.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub address: String,
    pub nick_name: String,
    pub created_at: String,
    pub updated_at: String,
    pub version: i64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            address: user.address,
            nick_name: user.nick_name,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
            version: user.version.as_i64(),
        }
    }
}

/// Creates a new user.
pub async fn create<S, D>(
    State(state): State<Arc<AppState<S, D>>>,
    Json(request): Json<NewUser>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError>
where
    S: SaleStore,
    D: UserDirectory,
{
    let user = state.users.create(request).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Retrieves a user by ID.
pub async fn get<S, D>(
    State(state): State<Arc<AppState<S, D>>>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError>
where
    S: SaleStore,
    D: UserDirectory,
{
    let user = state.users.get(&UserId::new(id)).await?;
    Ok(Json(user.into()))
}

/// Applies a partial update to a user.
pub async fn update<S, D>(
    State(state): State<Arc<AppState<S, D>>>,
    Path(id): Path<String>,
    Json(request): Json<UserUpdate>,
) -> Result<Json<UserResponse>, ApiError>
where
    S: SaleStore,
    D: UserDirectory,
{
    let user = state.users.update(&UserId::new(id), request).await?;
    Ok(Json(user.into()))
}

/// Deletes a user by ID.
pub async fn remove<S, D>(
    State(state): State<Arc<AppState<S, D>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    S: SaleStore,
    D: UserDirectory,
{
    state.users.delete(&UserId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
