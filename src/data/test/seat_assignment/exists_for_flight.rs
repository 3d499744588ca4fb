use super::*;

/// Tests the existence check before and after an assignment.
///
/// Expected: false before, true after
#[tokio::test]
async fn reflects_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (flight_id, seats) = flight_with_seats(db).await?;
    let passenger = factory::create_passenger(db).await?;

    let repo = SeatAssignmentRepository::new(db);
    assert!(!repo.exists_for_flight(flight_id).await?);

    repo.insert(flight_id, seats[20].id, SeaterType::Passenger, passenger.id)
        .await?;

    assert!(repo.exists_for_flight(flight_id).await?);

    Ok(())
}
