use super::*;

/// Tests that the crew area comes back pilots first, in seat map ID order.
///
/// Expected: Ok with 4 pilot seats followed by 12 crew seats
#[tokio::test]
async fn returns_crew_area_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_aircraft_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_narrow_body(db).await?;

    let seats = SeatMapRepository::new(db)
        .get_by_seat_types(aircraft.id, &[SeatType::Pilot, SeatType::Crew])
        .await?;

    assert_eq!(
        seats.len(),
        layout::NARROW_BODY_PILOT_SEATS + layout::NARROW_BODY_CREW_SEATS
    );
    assert!(seats.windows(2).all(|w| w[0].id < w[1].id));
    assert!(seats[..layout::NARROW_BODY_PILOT_SEATS]
        .iter()
        .all(|s| s.seat_type == SeatType::Pilot));
    assert!(seats[layout::NARROW_BODY_PILOT_SEATS..]
        .iter()
        .all(|s| s.seat_type == SeatType::Crew));

    Ok(())
}

/// Tests that cabin seats of one type don't include another type's seats.
///
/// Expected: Ok with only the wide-body's business and economy seats
#[tokio::test]
async fn scopes_to_aircraft_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_aircraft_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_narrow_body(db).await?;
    let wide = factory::create_wide_body(db).await?;

    let seats = SeatMapRepository::new(db)
        .get_by_seat_types(wide.id, &[SeatType::Business, SeatType::Economy])
        .await?;

    assert_eq!(seats.len(), layout::WIDE_BODY_PASSENGER_SEATS);
    assert!(seats.iter().all(|s| s.aircraft_type_id == wide.id));
    assert!(seats.iter().all(|s| s.seat_group.is_some()));

    Ok(())
}
