use entity::sea_orm_active_enums::SeaterType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct SeatAssignmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeatAssignmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Assigns a seat on a flight to a person
    ///
    /// # Arguments
    /// - `flight_id`: ID of the flight
    /// - `seat_map_id`: ID of the seat
    /// - `seater_type`: Role of the person in the seat
    /// - `seater_id`: Pilot, cabin crew or passenger ID matching `seater_type`
    ///
    /// # Returns
    /// - `Ok(Model)`: The created assignment
    /// - `Err(DbErr)`: Database error, including a seat or person already assigned on the flight
    pub async fn insert(
        &self,
        flight_id: i32,
        seat_map_id: i32,
        seater_type: SeaterType,
        seater_id: i32,
    ) -> Result<entity::flight_seat_assignment::Model, DbErr> {
        entity::flight_seat_assignment::ActiveModel {
            flight_id: ActiveValue::Set(flight_id),
            seat_map_id: ActiveValue::Set(seat_map_id),
            seater_type: ActiveValue::Set(seater_type),
            seater_id: ActiveValue::Set(seater_id),
        }
        .insert(self.db)
        .await
    }

    /// Checks whether a flight has any seat assignment
    ///
    /// # Returns
    /// - `Ok(true)`: At least one assignment exists
    /// - `Ok(false)`: No assignments
    /// - `Err(DbErr)`: Database error
    pub async fn exists_for_flight(&self, flight_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::FlightSeatAssignment::find()
            .filter(entity::flight_seat_assignment::Column::FlightId.eq(flight_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the assignments of a flight with their seats
    ///
    /// # Returns
    /// - `Ok(Vec<(assignment, seat)>)`: Assignments ordered by seat map ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_flight(
        &self,
        flight_id: i32,
    ) -> Result<
        Vec<(
            entity::flight_seat_assignment::Model,
            Option<entity::seat_map::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::FlightSeatAssignment::find()
            .filter(entity::flight_seat_assignment::Column::FlightId.eq(flight_id))
            .find_also_related(entity::prelude::SeatMap)
            .order_by_asc(entity::flight_seat_assignment::Column::SeatMapId)
            .all(self.db)
            .await
    }
}
