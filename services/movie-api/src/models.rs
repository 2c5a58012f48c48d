//! API models for users and request/response payloads

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub mod movie;

/// Registered user
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub email: String,
    pub birthday: Option<NaiveDate>,
    /// Movie references in insertion order, duplicates allowed
    pub favorite_movies: Vec<String>,
}

/// User insertion payload, password already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub birthday: Option<NaiveDate>,
}

/// Field-level replacement applied by an update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub email: Option<String>,
    pub birthday: Option<NaiveDate>,
}

/// Request for user registration
///
/// Missing string fields default to empty so that the validator reports
/// them alongside every other violation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub email: String,
    pub birthday: Option<NaiveDate>,
}

/// Request for a partial user update
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub birthday: Option<NaiveDate>,
}

/// Request for user login
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response for user login
#[derive(Serialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}
