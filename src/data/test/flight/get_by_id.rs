use super::*;

/// Tests fetching an existing flight.
///
/// Expected: Ok(Some) with the stored flight
#[tokio::test]
async fn returns_existing_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_narrow_body(db).await?;
    let created = factory::create_flight(db, aircraft.id).await?;

    let found = FlightRepository::new(db).get_by_id(created.id).await?;

    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests fetching a flight that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = FlightRepository::new(db).get_by_id(42).await?;

    assert!(found.is_none());

    Ok(())
}
