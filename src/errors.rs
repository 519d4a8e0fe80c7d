//! Unified application error type.
//! All modules (db, api, location, core, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::api::ApiError;
use crate::location::LocationError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Storage error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Multipart --data must be a JSON object, got: {0}")]
    InvalidMultipartData(String),

    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("Invalid header '{0}' (expected NAME:VALUE)")]
    InvalidHeader(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    // ---------------------------
    // Remote / device errors
    // ---------------------------
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error("Not logged in: run `rhrms login` first")]
    NotLoggedIn,

    #[error("Login response did not contain an access token")]
    MissingToken,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
