//! Movie models for the API service

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Movie genre, stored either as a bare name or as a full description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Genre {
    #[serde(rename_all = "PascalCase")]
    Detailed { name: String, description: String },
    Simple(String),
}

impl Genre {
    /// Name used for genre lookups
    pub fn name(&self) -> &str {
        match self {
            Genre::Detailed { name, .. } => name,
            Genre::Simple(name) => name,
        }
    }
}

/// Movie director, stored either as a bare name or with biography details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Director {
    #[serde(rename_all = "PascalCase")]
    Detailed {
        name: String,
        bio: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        birth: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        death: Option<String>,
    },
    Simple(String),
}

impl Director {
    /// Name used for director lookups
    pub fn name(&self) -> &str {
        match self {
            Director::Detailed { name, .. } => name,
            Director::Simple(name) => name,
        }
    }
}

/// Catalog movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Lookup key; uniqueness is not enforced
    pub title: String,
    pub description: String,
    #[sqlx(json)]
    pub genre: Genre,
    #[sqlx(json)]
    pub director: Director,
    pub image_path: String,
    #[serde(default)]
    pub featured: bool,
}

/// Movie insertion payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub genre: Genre,
    pub director: Director,
    pub image_path: String,
    #[serde(default)]
    pub featured: bool,
}
