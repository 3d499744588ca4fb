use crate::data::seat_assignment::SeatAssignmentRepository;
use entity::sea_orm_active_enums::{AttendantType, SeatType, SeaterType};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod exists_for_flight;
mod get_by_flight;
mod insert;

/// Creates a narrow-body, a flight on it and returns the flight ID with the type's seats.
async fn flight_with_seats(
    db: &sea_orm::DatabaseConnection,
) -> Result<(i32, Vec<entity::seat_map::Model>), DbErr> {
    let aircraft = factory::create_narrow_body(db).await?;
    let flight = factory::create_flight(db, aircraft.id).await?;
    let seats = crate::data::seat_map::SeatMapRepository::new(db)
        .get_by_seat_types(
            aircraft.id,
            &[
                SeatType::Pilot,
                SeatType::Crew,
                SeatType::Business,
                SeatType::Economy,
            ],
        )
        .await?;
    Ok((flight.id, seats))
}
