//! Flight factory for creating test flights.
//!
//! Flights are inserted directly, bypassing the flight service, so tests can
//! control departure time, duration and distance exactly.

use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flights with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::flight::FlightFactory;
///
/// let flight = FlightFactory::new(&db, 1)
///     .distance_km(1500.0)
///     .menu(vec!["A".into(), "B".into()])
///     .build()
///     .await?;
/// ```
pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    aircraft_type_id: i32,
    airline_code: String,
    departure_time: DateTime<Utc>,
    duration_minutes: i32,
    distance_km: f64,
    source_airport_id: Option<i32>,
    destination_airport_id: Option<i32>,
    menu: Vec<String>,
}

impl<'a> FlightFactory<'a> {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - airline_code: `"TK"`
    /// - departure_time: 2024-01-01 10:00 UTC
    /// - duration_minutes: `120`
    /// - distance_km: `1000.0`
    /// - menu: empty
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `aircraft_type_id` - Aircraft type operating the flight
    ///
    /// # Returns
    /// - `FlightFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, aircraft_type_id: i32) -> Self {
        Self {
            db,
            aircraft_type_id,
            airline_code: "TK".to_string(),
            departure_time: default_departure(),
            duration_minutes: 120,
            distance_km: 1000.0,
            source_airport_id: None,
            destination_airport_id: None,
            menu: Vec::new(),
        }
    }

    pub fn airline_code(mut self, airline_code: impl Into<String>) -> Self {
        self.airline_code = airline_code.into();
        self
    }

    /// Sets the departure time.
    ///
    /// # Arguments
    /// - `departure_time` - Departure in UTC
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn departure_time(mut self, departure_time: DateTime<Utc>) -> Self {
        self.departure_time = departure_time;
        self
    }

    pub fn duration_minutes(mut self, duration_minutes: i32) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    pub fn distance_km(mut self, distance_km: f64) -> Self {
        self.distance_km = distance_km;
        self
    }

    /// Sets the source and destination airports.
    pub fn route(mut self, source_airport_id: i32, destination_airport_id: i32) -> Self {
        self.source_airport_id = Some(source_airport_id);
        self.destination_airport_id = Some(destination_airport_id);
        self
    }

    /// Sets the initial flight menu.
    ///
    /// # Arguments
    /// - `dishes` - Dishes in menu order
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn menu(mut self, dishes: Vec<String>) -> Self {
        self.menu = dishes;
        self
    }

    /// Builds and inserts the flight and its menu into the database.
    ///
    /// # Returns
    /// - `Ok(entity::flight::Model)` - Created flight entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::flight::Model, DbErr> {
        let flight = entity::flight::ActiveModel {
            id: ActiveValue::NotSet,
            airline_code: ActiveValue::Set(self.airline_code),
            departure_time: ActiveValue::Set(self.departure_time),
            duration_minutes: ActiveValue::Set(self.duration_minutes),
            distance_km: ActiveValue::Set(self.distance_km),
            aircraft_type_id: ActiveValue::Set(self.aircraft_type_id),
            source_airport_id: ActiveValue::Set(self.source_airport_id),
            destination_airport_id: ActiveValue::Set(self.destination_airport_id),
        }
        .insert(self.db)
        .await?;

        for (position, dish) in self.menu.into_iter().enumerate() {
            entity::flight_menu_item::ActiveModel {
                id: ActiveValue::NotSet,
                flight_id: ActiveValue::Set(flight.id),
                position: ActiveValue::Set(position as i32),
                dish: ActiveValue::Set(dish),
            }
            .insert(self.db)
            .await?;
        }

        Ok(flight)
    }
}

/// Departure time used by flights created without an explicit one.
pub fn default_departure() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Creates a flight with default values for the given aircraft type.
///
/// # Arguments
/// - `db` - Database connection
/// - `aircraft_type_id` - Aircraft type operating the flight
///
/// # Returns
/// - `Ok(entity::flight::Model)` - Created flight entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_flight(
    db: &DatabaseConnection,
    aircraft_type_id: i32,
) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(db, aircraft_type_id).build().await
}
