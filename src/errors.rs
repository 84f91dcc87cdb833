//! Unified application error type.
//! Every module (config, core, cli, utils) returns AppError so that `main`
//! has a single place where failures are logged and turned into an exit code.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Entry store
    // ---------------------------
    #[error("Load Config: {0}")]
    LoadConfig(#[source] StoreError),

    #[error("Create Config: {0}")]
    CreateConfig(#[source] io::Error),

    #[error("Write Config: {0}")]
    WriteConfig(#[source] StoreError),

    // ---------------------------
    // Input
    // ---------------------------
    #[error("Date should be in format Jan-02: {0}")]
    InvalidDate(String),

    #[error("No task description provided")]
    NoDescription,

    #[error("Cannot resolve home directory for '{0}'")]
    HomeDir(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Low-level cause wrapped by the store variants above.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn load<E: Into<StoreError>>(e: E) -> Self {
        AppError::LoadConfig(e.into())
    }

    pub fn write<E: Into<StoreError>>(e: E) -> Self {
        AppError::WriteConfig(e.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
