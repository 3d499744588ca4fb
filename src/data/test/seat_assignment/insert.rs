use super::*;

/// Tests assigning a seat.
///
/// Expected: Ok with the assignment stored
#[tokio::test]
async fn inserts_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (flight_id, seats) = flight_with_seats(db).await?;
    let passenger = factory::create_passenger(db).await?;
    let seat = seats.last().unwrap();

    let assignment = SeatAssignmentRepository::new(db)
        .insert(flight_id, seat.id, SeaterType::Passenger, passenger.id)
        .await?;

    assert_eq!(assignment.flight_id, flight_id);
    assert_eq!(assignment.seat_map_id, seat.id);
    assert_eq!(assignment.seater_type, SeaterType::Passenger);
    assert_eq!(assignment.seater_id, passenger.id);

    Ok(())
}

/// Tests that a seat can only be taken once per flight.
///
/// Expected: Err(DbErr) on the second insert for the same seat
#[tokio::test]
async fn rejects_double_booked_seat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (flight_id, seats) = flight_with_seats(db).await?;
    let chief = factory::create_cabin_crew(db, AttendantType::Chief, 1).await?;
    let regular = factory::create_cabin_crew(db, AttendantType::Regular, 1).await?;
    let seat = &seats[4];

    let repo = SeatAssignmentRepository::new(db);
    repo.insert(flight_id, seat.id, SeaterType::ChiefCabinCrew, chief.id)
        .await?;
    let second = repo
        .insert(flight_id, seat.id, SeaterType::RegularCabinCrew, regular.id)
        .await;

    assert!(second.is_err());

    Ok(())
}
