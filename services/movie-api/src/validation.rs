//! Input validation for user payloads
//!
//! Every rule runs; violations are collected and reported together.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::models::{CreateUserRequest, UpdateUserRequest};

/// Minimum username length
pub const USERNAME_MIN_LENGTH: usize = 5;

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub param: &'static str,
    pub msg: String,
}

impl FieldError {
    fn new(param: &'static str, msg: impl Into<String>) -> Self {
        Self {
            param,
            msg: msg.into(),
        }
    }
}

/// Validate a registration payload
pub fn validate_registration(request: &CreateUserRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    check_username(&request.username, &mut errors);
    check_password(&request.password, &mut errors);
    check_email(&request.email, &mut errors);

    finish(errors)
}

/// Validate the fields present in an update payload
pub fn validate_update(request: &UpdateUserRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if let Some(username) = &request.username {
        check_username(username, &mut errors);
    }
    if let Some(password) = &request.password {
        check_password(password, &mut errors);
    }
    if let Some(email) = &request.email {
        check_email(email, &mut errors);
    }

    finish(errors)
}

fn finish(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_username(username: &str, errors: &mut Vec<FieldError>) {
    if username.chars().count() < USERNAME_MIN_LENGTH {
        errors.push(FieldError::new(
            "Username",
            format!("Username must be at least {} characters long", USERNAME_MIN_LENGTH),
        ));
    }

    if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        errors.push(FieldError::new(
            "Username",
            "Username contains non alphanumeric characters - not allowed.",
        ));
    }
}

fn check_password(password: &str, errors: &mut Vec<FieldError>) {
    if password.is_empty() {
        errors.push(FieldError::new("Password", "Password is required"));
    }
}

fn check_email(email: &str, errors: &mut Vec<FieldError>) {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        errors.push(FieldError::new("Email", "Email does not appear to be valid"));
    }
}
