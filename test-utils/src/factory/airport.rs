//! Airport factory for creating test airports.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test airports with customizable fields.
pub struct AirportFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    name: String,
    city: String,
    country: String,
    latitude: f64,
    longitude: f64,
}

impl<'a> AirportFactory<'a> {
    /// Creates a new AirportFactory with default values.
    ///
    /// Defaults:
    /// - code: `"A{id}"` where id is auto-incremented
    /// - coordinates: `(0.0, 0.0)`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("A{}", id),
            name: format!("Airport {}", id),
            city: "Test City".to_string(),
            country: "Test Country".to_string(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the airport coordinates in decimal degrees.
    ///
    /// # Arguments
    /// - `latitude` - Latitude in degrees
    /// - `longitude` - Longitude in degrees
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Builds and inserts the airport entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::airport::Model)` - Created airport entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::airport::Model, DbErr> {
        entity::airport::ActiveModel {
            id: ActiveValue::NotSet,
            code: ActiveValue::Set(self.code),
            name: ActiveValue::Set(self.name),
            city: ActiveValue::Set(self.city),
            country: ActiveValue::Set(self.country),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an airport at the given coordinates with a default code.
pub async fn create_airport(
    db: &DatabaseConnection,
    latitude: f64,
    longitude: f64,
) -> Result<entity::airport::Model, DbErr> {
    AirportFactory::new(db)
        .coordinates(latitude, longitude)
        .build()
        .await
}
