//! In-process repositories
//!
//! Each collection is a `Vec` behind a `tokio::sync::RwLock`; the lock is
//! held for exactly one operation. Insertion order is preserved, so
//! "first match" lookups behave like the PostgreSQL backend's.

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{MovieRepository, UserRepository};
use crate::models::{
    NewUser, User, UserChanges,
    movie::{Director, Genre, Movie, NewMovie},
};

/// In-memory user repository
#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl MemoryUserRepository {
    /// Run `apply` on the named user and return a copy of the result
    async fn modify<F>(&self, username: &str, apply: F) -> DatabaseResult<Option<User>>
    where
        F: FnOnce(&mut User) + Send,
    {
        let mut users = self.users.write().await;
        Ok(users
            .iter_mut()
            .find(|user| user.username == username)
            .map(|user| {
                apply(user);
                user.clone()
            }))
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> DatabaseResult<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|user| user.username == new_user.username) {
            return Err(DatabaseError::Conflict(new_user.username));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username,
            password_hash: new_user.password_hash,
            email: new_user.email,
            birthday: new_user.birthday,
            favorite_movies: Vec::new(),
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> DatabaseResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.username == username).cloned())
    }

    async fn list(&self) -> DatabaseResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn update(&self, username: &str, changes: UserChanges) -> DatabaseResult<Option<User>> {
        let mut users = self.users.write().await;

        if let Some(new_username) = &changes.username {
            let taken = users
                .iter()
                .any(|user| user.username == *new_username && user.username != username);
            if taken {
                return Err(DatabaseError::Conflict(new_username.clone()));
            }
        }

        let Some(user) = users.iter_mut().find(|user| user.username == username) else {
            return Ok(None);
        };

        if let Some(new_username) = changes.username {
            user.username = new_username;
        }
        if let Some(password_hash) = changes.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(birthday) = changes.birthday {
            user.birthday = Some(birthday);
        }

        Ok(Some(user.clone()))
    }

    async fn add_favorite(&self, username: &str, movie_id: &str) -> DatabaseResult<Option<User>> {
        self.modify(username, |user| user.favorite_movies.push(movie_id.to_string()))
            .await
    }

    async fn remove_favorite(
        &self,
        username: &str,
        movie_id: &str,
    ) -> DatabaseResult<Option<User>> {
        self.modify(username, |user| {
            user.favorite_movies.retain(|favorite| favorite != movie_id)
        })
        .await
    }

    async fn delete(&self, username: &str) -> DatabaseResult<bool> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|user| user.username != username);
        Ok(users.len() != before)
    }
}

/// In-memory movie repository
#[derive(Default)]
pub struct MemoryMovieRepository {
    movies: RwLock<Vec<Movie>>,
}

#[async_trait]
impl MovieRepository for MemoryMovieRepository {
    async fn create(&self, new_movie: NewMovie) -> DatabaseResult<Movie> {
        let movie = Movie {
            id: Uuid::new_v4(),
            title: new_movie.title,
            description: new_movie.description,
            genre: new_movie.genre,
            director: new_movie.director,
            image_path: new_movie.image_path,
            featured: new_movie.featured,
        };
        self.movies.write().await.push(movie.clone());
        Ok(movie)
    }

    async fn list(&self) -> DatabaseResult<Vec<Movie>> {
        Ok(self.movies.read().await.clone())
    }

    async fn find_by_title(&self, title: &str) -> DatabaseResult<Option<Movie>> {
        let movies = self.movies.read().await;
        Ok(movies.iter().find(|movie| movie.title == title).cloned())
    }

    async fn find_genre(&self, name: &str) -> DatabaseResult<Option<Genre>> {
        let movies = self.movies.read().await;
        Ok(movies
            .iter()
            .map(|movie| &movie.genre)
            .find(|genre| genre.name() == name)
            .cloned())
    }

    async fn find_director(&self, name: &str) -> DatabaseResult<Option<Director>> {
        let movies = self.movies.read().await;
        Ok(movies
            .iter()
            .map(|movie| &movie.director)
            .find(|director| director.name() == name)
            .cloned())
    }
}
