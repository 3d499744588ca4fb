use super::*;

/// Tests appending a dish after existing menu items.
///
/// Expected: Ok with the dish at the next position
#[tokio::test]
async fn appends_after_existing_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_narrow_body(db).await?;
    let flight = factory::flight::FlightFactory::new(db, aircraft.id)
        .menu(vec!["A".into(), "B".into()])
        .build()
        .await?;

    let repo = FlightRepository::new(db);
    let item = repo.append_menu_item(flight.id, "C".to_string()).await?;

    assert_eq!(item.position, 2);
    assert_eq!(repo.menu(flight.id).await?, vec!["A", "B", "C"]);

    Ok(())
}

/// Tests that menus of different flights are independent.
///
/// Expected: Ok with each flight's dish at position 0
#[tokio::test]
async fn positions_are_per_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_narrow_body(db).await?;
    let first = factory::create_flight(db, aircraft.id).await?;
    let second = factory::create_flight(db, aircraft.id).await?;

    let repo = FlightRepository::new(db);
    let a = repo.append_menu_item(first.id, "A".to_string()).await?;
    let b = repo.append_menu_item(second.id, "B".to_string()).await?;

    assert_eq!(a.position, 0);
    assert_eq!(b.position, 0);

    Ok(())
}
