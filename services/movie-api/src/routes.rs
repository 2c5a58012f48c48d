//! Movie API routes

use std::any::Any;

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tower_http::{catch_panic::CatchPanicLayer, services::ServeFile, trace::TraceLayer};
use tracing::{error, info};

use crate::{
    AppState,
    error::{ApiError, ApiResult, GENERIC_FAILURE},
    middleware::{AuthUser, auth_middleware},
    models::{
        CreateUserRequest, LoginRequest, LoginResponse, NewUser, UpdateUserRequest, UserChanges,
    },
    password::{hash_password, verify_password},
    validation::{validate_registration, validate_update},
};

/// Create the router for the movie API
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/users", get(get_users))
        .route(
            "/users/:username",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route(
            "/users/:username/movies/:movie_id",
            post(add_favorite).delete(remove_favorite),
        )
        .route("/movies", get(get_movies))
        .route("/movies/:title", get(get_movie))
        .route("/movies/Genre/:name", get(get_genre))
        .route("/movies/Director/:name", get(get_director))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let documentation = ServeFile::new(state.static_dir.join("documentation.html"));

    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .route("/login", post(login))
        .route("/users", post(create_user))
        .route_service("/documentation", documentation)
        .merge(protected_routes)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Turn a handler panic into the generic failure response
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Handler panicked: {}", detail);

    ApiError::InternalServerError.into_response()
}

/// Landing endpoint
pub async fn welcome() -> &'static str {
    "Welcome to my Movies App!"
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "movie-api"
    }))
}

/// Exchange username and password for a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    info!("Login attempt for user: {}", payload.username);

    let user = state
        .user_repository
        .find_by_username(&payload.username)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    let verified = verify_password(&payload.password, &user.password_hash).map_err(|e| {
        error!("Failed to verify password: {}", e);
        ApiError::InternalServerError
    })?;
    if !verified {
        return Err(ApiError::Unauthorized);
    }

    let token = state.jwt_service.generate_token(&user).map_err(|e| {
        error!("Failed to generate token: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(LoginResponse { user, token }))
}

/// Register a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<impl IntoResponse> {
    validate_registration(&payload).map_err(ApiError::Validation)?;

    let password_hash = hash_password(&payload.password).map_err(|e| {
        error!("Failed to hash password: {}", e);
        ApiError::InternalServerError
    })?;

    let user = state
        .user_repository
        .create(NewUser {
            username: payload.username,
            password_hash,
            email: payload.email,
            birthday: payload.birthday,
        })
        .await?;

    info!("Registered user {}", user.username);
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get all users
pub async fn get_users(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.user_repository.list().await?))
}

/// Get a user by username
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let user = state
        .user_repository
        .find_by_username(&username)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("{} was not found", username)))?;

    Ok(Json(user))
}

/// Update the authenticated user's own record
pub async fn update_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(username): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> ApiResult<impl IntoResponse> {
    if auth.username != username {
        return Err(ApiError::PermissionDenied);
    }

    validate_update(&payload).map_err(ApiError::Validation)?;

    let password_hash = payload
        .password
        .as_deref()
        .map(hash_password)
        .transpose()
        .map_err(|e| {
            error!("Failed to hash password: {}", e);
            ApiError::InternalServerError
        })?;

    let changes = UserChanges {
        username: payload.username,
        password_hash,
        email: payload.email,
        birthday: payload.birthday,
    };

    let user = state
        .user_repository
        .update(&username, changes)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("{} was not found", username)))?;

    Ok(Json(user))
}

/// Append a movie to a user's favorites
pub async fn add_favorite(
    State(state): State<AppState>,
    Path((username, movie_id)): Path<(String, String)>,
) -> ApiResult<impl IntoResponse> {
    let user = state
        .user_repository
        .add_favorite(&username, &movie_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("{} was not found", username)))?;

    Ok(Json(user))
}

/// Remove a movie from a user's favorites
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((username, movie_id)): Path<(String, String)>,
) -> ApiResult<impl IntoResponse> {
    let user = state
        .user_repository
        .remove_favorite(&username, &movie_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("{} was not found", username)))?;

    Ok(Json(user))
}

/// Deregister a user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<impl IntoResponse> {
    if state.user_repository.delete(&username).await? {
        info!("Deleted user {}", username);
        Ok(format!("{} was deleted.", username))
    } else {
        Err(ApiError::NotFound(format!("{} was not found", username)))
    }
}

/// Get all movies
pub async fn get_movies(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.movie_repository.list().await?))
}

/// Get a movie by title
pub async fn get_movie(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let movie = state
        .movie_repository
        .find_by_title(&title)
        .await?
        .ok_or_else(|| ApiError::NotFound("no such movie".to_string()))?;

    Ok(Json(movie))
}

/// Get a genre by name
pub async fn get_genre(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let genre = state
        .movie_repository
        .find_genre(&name)
        .await?
        .ok_or_else(|| ApiError::NotFound("no such genre".to_string()))?;

    Ok(Json(genre))
}

/// Get a director by name
pub async fn get_director(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let director = state
        .movie_repository
        .find_director(&name)
        .await?
        .ok_or_else(|| ApiError::NotFound("no such director".to_string()))?;

    Ok(Json(director))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_panic_returns_generic_failure() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(String::from("boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_generic_failure_text() {
        assert_eq!(GENERIC_FAILURE, "Something broke!");
    }
}
