use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Repository for the one-per-flight roster claim row.
///
/// The claim's flight ID column is unique, so a second insert for the same flight fails
/// with a unique constraint violation.
pub struct RosterClaimRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RosterClaimRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Claims a flight for roster creation
    ///
    /// # Returns
    /// - `Ok(Model)`: The claim
    /// - `Err(DbErr)`: Database error; a unique violation means the flight is already claimed
    pub async fn claim(&self, flight_id: i32) -> Result<entity::flight_roster::Model, DbErr> {
        entity::flight_roster::ActiveModel {
            flight_id: ActiveValue::Set(flight_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn exists(&self, flight_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::FlightRoster::find()
            .filter(entity::flight_roster::Column::FlightId.eq(flight_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
