//! Error types.
//!
//! `AppError` is the top-level error returned by services and the binary. Roster
//! allocation has its own `RosterError`, which the roster orchestrator folds into a
//! `RosterResult` rather than propagating.

pub mod config;
pub mod roster;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),
}
