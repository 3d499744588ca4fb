//! Pilot factory for creating test pilots.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::SeniorityLevel;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pilots with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::pilot::PilotFactory;
///
/// let pilot = PilotFactory::new(&db, 1)
///     .seniority(SeniorityLevel::Senior)
///     .allowed_range(2000)
///     .build()
///     .await?;
/// ```
pub struct PilotFactory<'a> {
    db: &'a DatabaseConnection,
    vehicle_type_id: i32,
    name: String,
    age: i32,
    nationality: String,
    seniority_level: SeniorityLevel,
    allowed_range: i32,
}

impl<'a> PilotFactory<'a> {
    /// Creates a new PilotFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Pilot {id}"` where id is auto-incremented
    /// - seniority_level: `Senior`
    /// - allowed_range: `10000`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `vehicle_type_id` - Aircraft type the pilot is rated for
    ///
    /// # Returns
    /// - `PilotFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, vehicle_type_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            vehicle_type_id,
            name: format!("Pilot {}", id),
            age: 40,
            nationality: "Turkey".to_string(),
            seniority_level: SeniorityLevel::Senior,
            allowed_range: 10_000,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the pilot seniority level.
    pub fn seniority(mut self, seniority_level: SeniorityLevel) -> Self {
        self.seniority_level = seniority_level;
        self
    }

    /// Sets the maximum flight distance in kilometres.
    ///
    /// # Arguments
    /// - `allowed_range` - Maximum distance the pilot may fly
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn allowed_range(mut self, allowed_range: i32) -> Self {
        self.allowed_range = allowed_range;
        self
    }

    /// Builds and inserts the pilot entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pilot::Model)` - Created pilot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pilot::Model, DbErr> {
        entity::pilot::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            age: ActiveValue::Set(self.age),
            nationality: ActiveValue::Set(self.nationality),
            seniority_level: ActiveValue::Set(self.seniority_level),
            vehicle_type_id: ActiveValue::Set(self.vehicle_type_id),
            allowed_range: ActiveValue::Set(self.allowed_range),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pilot with the given seniority and default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `vehicle_type_id` - Aircraft type the pilot is rated for
/// - `seniority_level` - Pilot seniority
///
/// # Returns
/// - `Ok(entity::pilot::Model)` - Created pilot entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_pilot(
    db: &DatabaseConnection,
    vehicle_type_id: i32,
    seniority_level: SeniorityLevel,
) -> Result<entity::pilot::Model, DbErr> {
    PilotFactory::new(db, vehicle_type_id)
        .seniority(seniority_level)
        .build()
        .await
}
