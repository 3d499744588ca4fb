use entity::sea_orm_active_enums::SeniorityLevel;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

pub struct PilotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PilotRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets pilots of a seniority level rated for an aircraft type
    ///
    /// Range and availability are not filtered here; the candidate selector checks them
    /// per pilot.
    ///
    /// # Arguments
    /// - `seniority`: Seniority level to match
    /// - `aircraft_type_id`: Aircraft type the pilot must be rated for
    ///
    /// # Returns
    /// - `Ok(Vec<(i32, i32)>)`: `(id, allowed_range)` of matching pilots ordered by ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_candidates(
        &self,
        seniority: SeniorityLevel,
        aircraft_type_id: i32,
    ) -> Result<Vec<(i32, i32)>, DbErr> {
        entity::prelude::Pilot::find()
            .select_only()
            .column(entity::pilot::Column::Id)
            .column(entity::pilot::Column::AllowedRange)
            .filter(entity::pilot::Column::SeniorityLevel.eq(seniority))
            .filter(entity::pilot::Column::VehicleTypeId.eq(aircraft_type_id))
            .order_by_asc(entity::pilot::Column::Id)
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Pilot::find().count(self.db).await
    }
}
