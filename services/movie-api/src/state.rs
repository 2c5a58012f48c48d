//! Application state shared across handlers

use std::{path::PathBuf, sync::Arc};

use common::error::DatabaseResult;
use sqlx::PgPool;

use crate::{
    catalog::starter_movies,
    jwt::JwtService,
    repositories::{
        MovieRepository, UserRepository,
        memory::{MemoryMovieRepository, MemoryUserRepository},
        postgres::{PgMovieRepository, PgUserRepository},
        seed_if_empty,
    },
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_repository: Arc<dyn UserRepository>,
    pub movie_repository: Arc<dyn MovieRepository>,
    pub jwt_service: JwtService,
    /// Directory holding the static documentation page
    pub static_dir: PathBuf,
}

impl AppState {
    /// State backed by in-process collections, seeded with the starter catalog
    pub async fn in_memory(jwt_service: JwtService, static_dir: PathBuf) -> DatabaseResult<Self> {
        let movie_repository = MemoryMovieRepository::default();
        seed_if_empty(&movie_repository, starter_movies()).await?;

        Ok(Self {
            user_repository: Arc::new(MemoryUserRepository::default()),
            movie_repository: Arc::new(movie_repository),
            jwt_service,
            static_dir,
        })
    }

    /// State backed by PostgreSQL
    pub async fn postgres(
        pool: PgPool,
        seed_catalog: bool,
        jwt_service: JwtService,
        static_dir: PathBuf,
    ) -> DatabaseResult<Self> {
        let movie_repository = PgMovieRepository::new(pool.clone());
        if seed_catalog {
            seed_if_empty(&movie_repository, starter_movies()).await?;
        }

        Ok(Self {
            user_repository: Arc::new(PgUserRepository::new(pool)),
            movie_repository: Arc::new(movie_repository),
            jwt_service,
            static_dir,
        })
    }
}
