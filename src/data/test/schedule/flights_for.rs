use super::*;

/// Tests that schedules are keyed by person kind and ID.
///
/// A pilot and a passenger share the numeric ID 1; each sees only their own flight.
///
/// Expected: Ok with one flight per person
#[tokio::test]
async fn separates_person_kinds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_narrow_body(db).await?;
    let morning = factory::create_flight(db, aircraft.id).await?;
    let evening = factory::flight::FlightFactory::new(db, aircraft.id)
        .departure_time(morning.departure_time + Duration::hours(8))
        .build()
        .await?;

    factory::schedule::schedule(db, PersonKind::Pilot, 1, morning.id).await?;
    factory::schedule::schedule(db, PersonKind::Passenger, 1, evening.id).await?;

    let repo = ScheduleRepository::new(db);
    let pilot_flights = repo.flights_for(PersonKind::Pilot, 1).await?;
    let passenger_flights = repo.flights_for(PersonKind::Passenger, 1).await?;

    assert_eq!(pilot_flights, vec![morning]);
    assert_eq!(passenger_flights, vec![evening]);

    Ok(())
}

/// Tests that scheduled flights come back ordered by departure.
///
/// Expected: Ok with earliest departure first
#[tokio::test]
async fn orders_by_departure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_narrow_body(db).await?;
    let later = factory::flight::FlightFactory::new(db, aircraft.id)
        .departure_time(factory::flight::default_departure() + Duration::days(1))
        .build()
        .await?;
    let earlier = factory::create_flight(db, aircraft.id).await?;

    factory::schedule::schedule(db, PersonKind::CabinCrew, 3, later.id).await?;
    factory::schedule::schedule(db, PersonKind::CabinCrew, 3, earlier.id).await?;

    let ids: Vec<i32> = ScheduleRepository::new(db)
        .flights_for(PersonKind::CabinCrew, 3)
        .await?
        .into_iter()
        .map(|f| f.id)
        .collect();

    assert_eq!(ids, vec![earlier.id, later.id]);

    Ok(())
}
