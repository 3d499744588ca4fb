use super::*;
use crate::{data::seat_map::SeatMapRepository, service::passenger_seating::PassengerSeating};
use std::collections::{HashMap, HashSet};

/// Tests seating a flight's passengers with an affiliated family on board.
///
/// Expected: Ok with every passenger seated once in a cabin seat, the family in one
/// seat group, and the flight on every passenger's schedule
#[tokio::test]
async fn seats_passengers_and_keeps_family_together() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_narrow_body(db).await?;
    let flight = factory::create_flight(db, aircraft.id).await?;

    let mut ids = Vec::new();
    for _ in 0..12 {
        ids.push(factory::create_passenger(db).await?.id);
    }
    let family = [ids[3], ids[7], ids[9]];
    factory::passenger::affiliate(db, &family).await?;

    let assignments = PassengerSeating::new(db)
        .assign_passenger_seats(&ids, &Flight::from_entity(flight.clone()), &mut seeded(8))
        .await
        .unwrap();

    assert_eq!(assignments.len(), 12);
    assert!(assignments.iter().all(|a| a.role == Role::Passenger));
    let seated: HashSet<i32> = assignments.iter().map(|a| a.seater_id).collect();
    assert_eq!(seated, ids.iter().copied().collect());

    let cabin: HashMap<i32, Option<i32>> = SeatMapRepository::new(db)
        .get_by_seat_types(aircraft.id, &[SeatType::Business, SeatType::Economy])
        .await?
        .into_iter()
        .map(|seat| (seat.id, seat.seat_group))
        .collect();
    let family_groups: HashSet<Option<i32>> = assignments
        .iter()
        .filter(|a| family.contains(&a.seater_id))
        .map(|a| cabin[&a.seat_map_id])
        .collect();
    assert_eq!(family_groups.len(), 1);

    assert_eq!(assignment_count(db, flight.id).await?, 12);
    assert_eq!(schedule_count(db, flight.id).await?, 12);

    Ok(())
}
