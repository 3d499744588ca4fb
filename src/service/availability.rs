//! Schedule conflict checks.

use entity::sea_orm_active_enums::PersonKind;
use sea_orm::{ConnectionTrait, DbErr};

use crate::{data::schedule::ScheduleRepository, model::flight::FlightWindow};

/// Whether a candidate window is free of every scheduled window.
///
/// Windows are half-open, so a flight landing exactly when the candidate departs does
/// not conflict.
///
/// # Arguments
/// - `scheduled` - Windows of flights the person is already committed to
/// - `candidate` - Window of the flight being rostered
///
/// # Returns
/// - `true` - No scheduled window overlaps the candidate
/// - `false` - At least one overlap
pub fn is_available(scheduled: &[FlightWindow], candidate: &FlightWindow) -> bool {
    !scheduled.iter().any(|existing| existing.overlaps(candidate))
}

/// Reads a person's schedule and checks it against a candidate flight window.
pub struct AvailabilityChecker<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvailabilityChecker<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether a person is free for the whole candidate window.
    ///
    /// # Arguments
    /// - `person_kind` - Table the person ID refers to
    /// - `person_id` - ID of the person
    /// - `candidate` - Window of the flight being rostered
    ///
    /// # Returns
    /// - `Ok(true)` - Person has no overlapping flight
    /// - `Ok(false)` - Person is committed to an overlapping flight
    /// - `Err(DbErr)` - Database error reading the schedule
    pub async fn is_available(
        &self,
        person_kind: PersonKind,
        person_id: i32,
        candidate: &FlightWindow,
    ) -> Result<bool, DbErr> {
        let scheduled: Vec<FlightWindow> = ScheduleRepository::new(self.db)
            .flights_for(person_kind, person_id)
            .await?
            .iter()
            .map(FlightWindow::of)
            .collect();

        Ok(is_available(&scheduled, candidate))
    }
}
