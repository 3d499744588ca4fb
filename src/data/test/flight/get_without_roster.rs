use super::*;

/// Tests that claimed flights are left out and the rest are ordered by departure.
///
/// Expected: Ok with unclaimed flights, earliest first
#[tokio::test]
async fn returns_unclaimed_flights_by_departure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_narrow_body(db).await?;
    let base = factory::flight::default_departure();
    let late = factory::flight::FlightFactory::new(db, aircraft.id)
        .departure_time(base + Duration::hours(5))
        .build()
        .await?;
    let claimed = factory::create_flight(db, aircraft.id).await?;
    let early = factory::flight::FlightFactory::new(db, aircraft.id)
        .departure_time(base - Duration::hours(5))
        .build()
        .await?;

    crate::data::roster_claim::RosterClaimRepository::new(db)
        .claim(claimed.id)
        .await?;

    let pending: Vec<i32> = FlightRepository::new(db)
        .get_without_roster()
        .await?
        .into_iter()
        .map(|f| f.id)
        .collect();

    assert_eq!(pending, vec![early.id, late.id]);

    Ok(())
}
