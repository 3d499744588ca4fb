//! Roster assignment errors.

use thiserror::Error;

use crate::model::role::Role;

/// Failure raised while allocating a roster.
///
/// Every variant aborts the roster transaction. The orchestrator converts these into
/// `RosterResult` values at its boundary.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Aircraft type id has no quota table or seat layout.
    #[error("Unsupported aircraft type {0}")]
    InvalidAircraftType(i32),

    /// Not enough eligible, available people for a role.
    #[error("Insufficient {0} candidates")]
    InsufficientCandidates(Role),

    /// The flight already has a roster claim or seat assignments.
    #[error("Roster already exists for flight {0}")]
    RosterAlreadyExists(i32),

    #[error("Flight {0} not found")]
    FlightNotFound(i32),

    /// Seat inventory of the aircraft type does not match what the roster needs.
    ///
    /// # Fields
    /// - Description of the mismatch
    #[error("Invalid seat map: {0}")]
    InvalidSeatMap(String),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
