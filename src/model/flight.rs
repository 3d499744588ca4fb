//! Domain models for flights.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled flight.
///
/// Duration and distance are derived when the flight is created and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: i32,
    /// Two-letter airline designator.
    pub airline_code: String,
    pub departure_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub distance_km: f64,
    pub aircraft_type_id: i32,
    pub source_airport_id: Option<i32>,
    pub destination_airport_id: Option<i32>,
}

impl Flight {
    /// Converts an entity model to a flight domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Flight` - The converted flight domain model
    pub fn from_entity(entity: entity::flight::Model) -> Self {
        Self {
            id: entity.id,
            airline_code: entity.airline_code,
            departure_time: entity.departure_time,
            duration_minutes: entity.duration_minutes,
            distance_km: entity.distance_km,
            aircraft_type_id: entity.aircraft_type_id,
            source_airport_id: entity.source_airport_id,
            destination_airport_id: entity.destination_airport_id,
        }
    }

    pub fn window(&self) -> FlightWindow {
        FlightWindow::new(self.departure_time, self.duration_minutes)
    }
}

/// Half-open time interval `[start, end)` a flight occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl FlightWindow {
    pub fn new(start: DateTime<Utc>, duration_minutes: i32) -> Self {
        Self {
            start,
            end: start + Duration::minutes(i64::from(duration_minutes)),
        }
    }

    pub fn of(flight: &entity::flight::Model) -> Self {
        Self::new(flight.departure_time, flight.duration_minutes)
    }

    /// Whether two windows share any instant. Touching endpoints do not overlap.
    pub fn overlaps(&self, other: &FlightWindow) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// Parameters for creating a new flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFlightParams {
    pub airline_code: String,
    pub departure_time: DateTime<Utc>,
    pub aircraft_type_id: i32,
    pub source_airport_id: i32,
    pub destination_airport_id: i32,
    /// Run automatic roster assignment right after the flight is stored.
    pub create_roster: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, minute, 0).unwrap()
    }

    #[test]
    fn window_end_adds_duration() {
        let window = FlightWindow::new(at(10, 0), 90);
        assert_eq!(window.end, at(11, 30));
    }

    #[test]
    fn touching_windows_do_not_overlap() {
        let first = FlightWindow::new(at(10, 0), 60);
        let second = FlightWindow::new(at(11, 0), 60);
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn partial_and_contained_windows_overlap() {
        let long = FlightWindow::new(at(10, 0), 240);
        let inside = FlightWindow::new(at(11, 0), 30);
        let straddling = FlightWindow::new(at(13, 30), 60);
        assert!(long.overlaps(&inside));
        assert!(inside.overlaps(&long));
        assert!(long.overlaps(&straddling));
    }
}
