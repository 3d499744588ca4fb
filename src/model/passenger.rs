//! Domain model for passengers.

use serde::{Deserialize, Serialize};

/// Passenger with the ids of people they want to sit with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub id: i32,
    pub name: String,
    pub age: i32,
    /// Set for infants travelling on a parent's lap.
    pub parent_id: Option<i32>,
    pub affiliated_passenger_ids: Vec<i32>,
}

impl Passenger {
    /// Converts an entity model and its affiliation rows to a passenger domain model.
    ///
    /// # Arguments
    /// - `entity` - The passenger entity model
    /// - `affiliated_passenger_ids` - Ids linked through `passenger_affiliation`
    ///
    /// # Returns
    /// - `Passenger` - The converted passenger domain model
    pub fn from_entity(entity: entity::passenger::Model, affiliated_passenger_ids: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age: entity.age,
            parent_id: entity.parent_id,
            affiliated_passenger_ids,
        }
    }
}
