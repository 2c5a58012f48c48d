//! Movie catalog REST API
//!
//! Users register, log in for a bearer token, manage their favorite
//! movies, and browse movies, genres and directors. Storage is either
//! in-process or PostgreSQL, chosen at startup.

pub mod catalog;
pub mod config;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod validation;

pub use state::AppState;
