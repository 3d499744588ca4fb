use super::*;

/// Tests that menu items come back in position order.
///
/// Expected: Ok with dishes in the order they were added
#[tokio::test]
async fn returns_dishes_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_narrow_body(db).await?;
    let flight = factory::flight::FlightFactory::new(db, aircraft.id)
        .menu(vec!["Soup".into(), "Kebab".into(), "Baklava".into()])
        .build()
        .await?;

    let menu = FlightRepository::new(db).menu(flight.id).await?;

    assert_eq!(menu, vec!["Soup", "Kebab", "Baklava"]);

    Ok(())
}

/// Tests that a flight without menu items has an empty menu.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_menu() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_narrow_body(db).await?;
    let flight = factory::create_flight(db, aircraft.id).await?;

    let menu = FlightRepository::new(db).menu(flight.id).await?;

    assert!(menu.is_empty());

    Ok(())
}
