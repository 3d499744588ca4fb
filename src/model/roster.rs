//! Roster outcomes and committed seat assignments.

use entity::sea_orm_active_enums::SeatType;

use crate::{error::roster::RosterError, model::role::Role};

/// One person placed on one seat of a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatAssignment {
    pub seat_map_id: i32,
    pub role: Role,
    pub seater_id: i32,
}

/// Outcome of a committed roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSummary {
    pub flight_id: i32,
    pub assignments: Vec<SeatAssignment>,
    /// Chef dishes appended to the flight menu, in order.
    pub added_dishes: Vec<String>,
}

impl RosterSummary {
    /// Number of people seated in a role.
    pub fn count(&self, role: Role) -> usize {
        self.assignments.iter().filter(|a| a.role == role).count()
    }

    /// Ids seated in a role, in seating order.
    pub fn seater_ids(&self, role: Role) -> Vec<i32> {
        self.assignments
            .iter()
            .filter(|a| a.role == role)
            .map(|a| a.seater_id)
            .collect()
    }
}

/// Result of automatic roster assignment for one flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterResult {
    Success(RosterSummary),
    InsufficientCandidates(Role),
    InvalidAircraftType(i32),
    /// Persistence failure; details are logged, not surfaced.
    DatabaseError,
    RosterAlreadyExists,
    FlightNotFound(i32),
    InvalidSeatMap,
}

impl RosterResult {
    pub fn is_success(&self) -> bool {
        matches!(self, RosterResult::Success(_))
    }

    /// Human-readable outcome for callers and logs.
    pub fn message(&self) -> String {
        match self {
            RosterResult::Success(summary) => format!(
                "Roster created for flight {} with {} seat assignments",
                summary.flight_id,
                summary.assignments.len()
            ),
            RosterResult::InsufficientCandidates(role) => {
                format!("Not enough available candidates for role: {role}")
            }
            RosterResult::InvalidAircraftType(id) => {
                format!("Aircraft type {id} is not supported for automatic rostering")
            }
            RosterResult::DatabaseError => {
                "A database error occurred while creating the roster".to_string()
            }
            RosterResult::RosterAlreadyExists => {
                "A roster already exists for this flight".to_string()
            }
            RosterResult::FlightNotFound(id) => format!("Flight {id} not found"),
            RosterResult::InvalidSeatMap => {
                "The aircraft seat map does not match the roster layout".to_string()
            }
        }
    }
}

impl From<RosterError> for RosterResult {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::InvalidAircraftType(id) => RosterResult::InvalidAircraftType(id),
            RosterError::InsufficientCandidates(role) => RosterResult::InsufficientCandidates(role),
            RosterError::RosterAlreadyExists(_) => RosterResult::RosterAlreadyExists,
            RosterError::FlightNotFound(id) => RosterResult::FlightNotFound(id),
            RosterError::InvalidSeatMap(_) => RosterResult::InvalidSeatMap,
            RosterError::Database(_) => RosterResult::DatabaseError,
        }
    }
}

/// A committed seat assignment joined with its seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub seat_map_id: i32,
    pub seat_row: String,
    pub seat_number: String,
    pub seat_type: SeatType,
    pub role: Role,
    pub seater_id: i32,
}

impl RosterEntry {
    /// Converts an assignment row and its seat to a roster entry.
    ///
    /// # Arguments
    /// - `assignment` - The seat assignment entity model
    /// - `seat` - The seat map entity model the assignment points at
    ///
    /// # Returns
    /// - `RosterEntry` - The joined entry
    pub fn from_entity(
        assignment: entity::flight_seat_assignment::Model,
        seat: entity::seat_map::Model,
    ) -> Self {
        Self {
            seat_map_id: assignment.seat_map_id,
            seat_row: seat.seat_row,
            seat_number: seat.seat_number,
            seat_type: seat.seat_type,
            role: Role::from_seater_type(assignment.seater_type),
            seater_id: assignment.seater_id,
        }
    }
}
