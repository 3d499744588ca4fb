use super::*;

/// Tests appending a flight to a schedule.
///
/// Expected: Ok with the flight in the person's schedule
#[tokio::test]
async fn appends_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_narrow_body(db).await?;
    let flight = factory::create_flight(db, aircraft.id).await?;

    let repo = ScheduleRepository::new(db);
    let entry = repo.append(PersonKind::Pilot, 7, flight.id).await?;

    assert_eq!(entry.person_kind, PersonKind::Pilot);
    assert_eq!(entry.person_id, 7);
    let flights: Vec<i32> = repo
        .flights_for(PersonKind::Pilot, 7)
        .await?
        .iter()
        .map(|f| f.id)
        .collect();
    assert_eq!(flights, vec![flight.id]);

    Ok(())
}
