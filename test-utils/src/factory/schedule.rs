//! Scheduled flight helpers for committing people to flights.

use entity::sea_orm_active_enums::PersonKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Commits a person to a flight, making them unavailable for overlapping flights.
///
/// # Arguments
/// - `db` - Database connection
/// - `person_kind` - Whether the id refers to a pilot, cabin crew member or passenger
/// - `person_id` - Id of the person
/// - `flight_id` - Flight the person is scheduled on
///
/// # Returns
/// - `Ok(entity::scheduled_flight::Model)` - Created schedule entry
/// - `Err(DbErr)` - Database error during insert
pub async fn schedule(
    db: &DatabaseConnection,
    person_kind: PersonKind,
    person_id: i32,
    flight_id: i32,
) -> Result<entity::scheduled_flight::Model, DbErr> {
    entity::scheduled_flight::ActiveModel {
        id: ActiveValue::NotSet,
        person_kind: ActiveValue::Set(person_kind),
        person_id: ActiveValue::Set(person_id),
        flight_id: ActiveValue::Set(flight_id),
    }
    .insert(db)
    .await
}
