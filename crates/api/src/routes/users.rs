//! User endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use vendora_core::{Email, UserId, UserRole};

use super::ListQuery;
use crate::error::AppError;
use crate::models::{NewUser, User};
use crate::services::PagedResult;
use crate::state::AppState;

/// Build the users router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route("/users/{id}", get(get_user))
}

/// Request body for creating a user.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Display name, at least 3 characters.
    pub name: String,
    /// Email address, unique across all users.
    pub email: String,
    /// Role, fixed for the lifetime of the user.
    #[schema(value_type = String, example = "PARTNER")]
    pub role: UserRole,
}

/// A user as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[schema(value_type = String, example = "PARTNER")]
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.as_i32(),
            name: user.name,
            email: user.email.into_inner(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// One page of users.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserListResponse {
    pub data: Vec<UserResponse>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl From<PagedResult<User>> for UserListResponse {
    fn from(paged: PagedResult<User>) -> Self {
        Self {
            data: paged.data.into_iter().map(Into::into).collect(),
            total: paged.total,
            page: paged.page,
            limit: paged.limit,
            total_pages: paged.total_pages,
        }
    }
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid name, email or role"),
        (status = 409, description = "Email already registered"),
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let email = Email::parse(&body.email)
        .map_err(|e| AppError::Validation(format!("invalid email: {e}")))?;
    let user = NewUser::new(body.name, email, body.role)?;

    let created = state.users().create(user).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// List users, newest first.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(ListQuery),
    responses((status = 200, description = "One page of users", body = UserListResponse)),
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<UserListResponse>, AppError> {
    let (page, limit) = query.page_and_limit();
    let paged = state.users().find_all(page, limit).await?;
    Ok(Json(paged.into()))
}

/// Fetch a user by ID.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 404, description = "No user with that ID"),
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.users().find_by_id(UserId::new(id)).await?;
    Ok(Json(user.into()))
}
