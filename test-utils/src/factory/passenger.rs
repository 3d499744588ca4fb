//! Passenger factory for creating test passengers.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test passengers with customizable fields.
pub struct PassengerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    age: i32,
    nationality: String,
    parent_id: Option<i32>,
}

impl<'a> PassengerFactory<'a> {
    /// Creates a new PassengerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Passenger {id}"` where id is auto-incremented
    /// - age: `35`
    /// - parent_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Passenger {}", id),
            age: 35,
            nationality: "Turkey".to_string(),
            parent_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Marks the passenger as an infant travelling with the given parent.
    pub fn parent(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Builds and inserts the passenger entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::passenger::Model)` - Created passenger entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::passenger::Model, DbErr> {
        entity::passenger::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            age: ActiveValue::Set(self.age),
            nationality: ActiveValue::Set(self.nationality),
            parent_id: ActiveValue::Set(self.parent_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a passenger with default values.
pub async fn create_passenger(db: &DatabaseConnection) -> Result<entity::passenger::Model, DbErr> {
    PassengerFactory::new(db).build().await
}

/// Links passengers who want to sit together, in both directions.
///
/// # Arguments
/// - `db` - Database connection
/// - `passenger_ids` - Passengers forming one party
///
/// # Returns
/// - `Ok(())` - Every ordered pair of distinct passengers was linked
/// - `Err(DbErr)` - Database error during insert
pub async fn affiliate(db: &DatabaseConnection, passenger_ids: &[i32]) -> Result<(), DbErr> {
    for &passenger_id in passenger_ids {
        for &affiliated_passenger_id in passenger_ids {
            if passenger_id == affiliated_passenger_id {
                continue;
            }
            entity::passenger_affiliation::ActiveModel {
                passenger_id: ActiveValue::Set(passenger_id),
                affiliated_passenger_id: ActiveValue::Set(affiliated_passenger_id),
            }
            .insert(db)
            .await?;
        }
    }
    Ok(())
}
