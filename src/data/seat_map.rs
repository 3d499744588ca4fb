use entity::sea_orm_active_enums::SeatType;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct SeatMapRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeatMapRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the seats of an aircraft type with any of the given seat types
    ///
    /// # Arguments
    /// - `aircraft_type_id`: ID of the aircraft type
    /// - `seat_types`: Seat types to include
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Seats ordered by seat map ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_seat_types(
        &self,
        aircraft_type_id: i32,
        seat_types: &[SeatType],
    ) -> Result<Vec<entity::seat_map::Model>, DbErr> {
        entity::prelude::SeatMap::find()
            .filter(entity::seat_map::Column::AircraftTypeId.eq(aircraft_type_id))
            .filter(entity::seat_map::Column::SeatType.is_in(seat_types.iter().copied()))
            .order_by_asc(entity::seat_map::Column::Id)
            .all(self.db)
            .await
    }
}
