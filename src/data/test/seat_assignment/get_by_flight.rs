use super::*;

/// Tests loading assignments with their seats.
///
/// Expected: Ok with assignments ordered by seat map ID, each joined with its seat
#[tokio::test]
async fn joins_seats_in_seat_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (flight_id, seats) = flight_with_seats(db).await?;
    let first = factory::create_passenger(db).await?;
    let second = factory::create_passenger(db).await?;

    let repo = SeatAssignmentRepository::new(db);
    repo.insert(flight_id, seats[30].id, SeaterType::Passenger, first.id)
        .await?;
    repo.insert(flight_id, seats[20].id, SeaterType::Passenger, second.id)
        .await?;

    let rows = repo.get_by_flight(flight_id).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0.seat_map_id, seats[20].id);
    assert_eq!(rows[0].1.as_ref(), Some(&seats[20]));
    assert_eq!(rows[1].0.seater_id, first.id);

    Ok(())
}
