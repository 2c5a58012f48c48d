//! Repositories for catalog storage
//!
//! Handlers talk to storage only through [`UserRepository`] and
//! [`MovieRepository`]. Two backends implement them: an in-process store
//! ([`memory`]) and PostgreSQL ([`postgres`]).

use async_trait::async_trait;
use common::error::DatabaseResult;
use tracing::info;
use uuid::Uuid;

use crate::models::{
    NewUser, User, UserChanges,
    movie::{Director, Genre, Movie, NewMovie},
};

pub mod memory;
pub mod postgres;

/// User storage operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; fails with `Conflict` when the username is taken
    async fn create(&self, new_user: NewUser) -> DatabaseResult<User>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<User>>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> DatabaseResult<Option<User>>;

    /// Get all users
    async fn list(&self) -> DatabaseResult<Vec<User>>;

    /// Replace the fields present in `changes` and return the updated user
    async fn update(&self, username: &str, changes: UserChanges) -> DatabaseResult<Option<User>>;

    /// Append a movie reference to the user's favorites
    async fn add_favorite(&self, username: &str, movie_id: &str) -> DatabaseResult<Option<User>>;

    /// Remove every occurrence of a movie reference from the user's favorites
    async fn remove_favorite(&self, username: &str, movie_id: &str)
    -> DatabaseResult<Option<User>>;

    /// Delete a user, reporting whether one existed
    async fn delete(&self, username: &str) -> DatabaseResult<bool>;
}

/// Movie storage operations
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Insert a movie
    async fn create(&self, new_movie: NewMovie) -> DatabaseResult<Movie>;

    /// Get all movies
    async fn list(&self) -> DatabaseResult<Vec<Movie>>;

    /// First movie with the given title
    async fn find_by_title(&self, title: &str) -> DatabaseResult<Option<Movie>>;

    /// Genre of the first movie whose genre carries the given name
    async fn find_genre(&self, name: &str) -> DatabaseResult<Option<Genre>>;

    /// Director of the first movie whose director carries the given name
    async fn find_director(&self, name: &str) -> DatabaseResult<Option<Director>>;
}

/// Insert `movies` when the repository holds none, returning how many were added
pub async fn seed_if_empty(
    repository: &dyn MovieRepository,
    movies: Vec<NewMovie>,
) -> DatabaseResult<usize> {
    if !repository.list().await?.is_empty() {
        return Ok(0);
    }

    let count = movies.len();
    for movie in movies {
        repository.create(movie).await?;
    }

    info!("Seeded movie catalog with {} movies", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::starter_movies, repositories::memory::MemoryMovieRepository};

    #[tokio::test]
    async fn test_seed_if_empty_runs_once() {
        let repository = MemoryMovieRepository::default();

        assert_eq!(seed_if_empty(&repository, starter_movies()).await.unwrap(), 6);
        assert_eq!(seed_if_empty(&repository, starter_movies()).await.unwrap(), 0);
        assert_eq!(repository.list().await.unwrap().len(), 6);
    }
}
