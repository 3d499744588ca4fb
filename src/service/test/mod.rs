use crate::{
    config::{OptionalRolePolicy, RosterConfig},
    model::{flight::Flight, role::Role, roster::RosterResult},
};
use chrono::Duration;
use entity::sea_orm_active_enums::{AttendantType, PersonKind, SeatType, SeniorityLevel};
use rand::{rngs::StdRng, SeedableRng};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        cabin_crew::CabinCrewFactory,
        flight::FlightFactory,
        helpers::{create_pool, PoolSize},
        pilot::PilotFactory,
    },
};

mod passenger_seating;
mod selector;

/// Number of seat assignment rows for a flight.
async fn assignment_count(db: &DatabaseConnection, flight_id: i32) -> Result<u64, DbErr> {
    entity::prelude::FlightSeatAssignment::find()
        .filter(entity::flight_seat_assignment::Column::FlightId.eq(flight_id))
        .count(db)
        .await
}

/// Number of schedule entries pointing at a flight.
async fn schedule_count(db: &DatabaseConnection, flight_id: i32) -> Result<u64, DbErr> {
    entity::prelude::ScheduledFlight::find()
        .filter(entity::scheduled_flight::Column::FlightId.eq(flight_id))
        .count(db)
        .await
}

/// Schedule entries pointing at a flight, in insertion order.
async fn schedule_entries(
    db: &DatabaseConnection,
    flight_id: i32,
) -> Result<Vec<entity::scheduled_flight::Model>, DbErr> {
    entity::prelude::ScheduledFlight::find()
        .filter(entity::scheduled_flight::Column::FlightId.eq(flight_id))
        .order_by_asc(entity::scheduled_flight::Column::Id)
        .all(db)
        .await
}

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
