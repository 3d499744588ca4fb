use super::*;

/// Tests creating a flight with a route.
///
/// Expected: Ok with all fields stored
#[tokio::test]
async fn creates_flight_with_route() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_narrow_body(db).await?;
    let from = factory::create_airport(db, 41.0, 29.0).await?;
    let to = factory::create_airport(db, 51.5, -0.5).await?;
    let departure = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();

    let repo = FlightRepository::new(db);
    let flight = repo
        .create(NewFlight {
            airline_code: "TK".to_string(),
            departure_time: departure,
            duration_minutes: 166,
            distance_km: 2488.0,
            aircraft_type_id: aircraft.id,
            source_airport_id: Some(from.id),
            destination_airport_id: Some(to.id),
        })
        .await?;

    assert_eq!(flight.airline_code, "TK");
    assert_eq!(flight.departure_time, departure);
    assert_eq!(flight.duration_minutes, 166);
    assert_eq!(flight.aircraft_type_id, aircraft.id);
    assert_eq!(flight.source_airport_id, Some(from.id));
    assert_eq!(flight.destination_airport_id, Some(to.id));

    Ok(())
}

/// Tests foreign key constraint on aircraft_type_id.
///
/// Expected: Err(DbErr) for an aircraft type that doesn't exist
#[tokio::test]
async fn fails_for_nonexistent_aircraft_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FlightRepository::new(db)
        .create(NewFlight {
            airline_code: "TK".to_string(),
            departure_time: Utc::now() + Duration::days(1),
            duration_minutes: 60,
            distance_km: 900.0,
            aircraft_type_id: 999,
            source_airport_id: None,
            destination_airport_id: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
