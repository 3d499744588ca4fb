use super::*;

/// Tests loading passengers with their affiliations in request order.
///
/// Expected: Ok with passengers in the order of the requested IDs and affiliations attached
#[tokio::test]
async fn loads_affiliations_in_request_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = factory::create_passenger(db).await?;
    let infant = PassengerFactory::new(db)
        .age(1)
        .parent(parent.id)
        .build()
        .await?;
    let loner = factory::create_passenger(db).await?;
    factory::passenger::affiliate(db, &[parent.id, infant.id]).await?;

    let passengers = PassengerRepository::new(db)
        .get_by_ids(&[loner.id, infant.id, parent.id])
        .await?;

    let ids: Vec<i32> = passengers.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![loner.id, infant.id, parent.id]);
    assert!(passengers[0].affiliated_passenger_ids.is_empty());
    assert_eq!(passengers[1].affiliated_passenger_ids, vec![parent.id]);
    assert_eq!(passengers[1].parent_id, Some(parent.id));
    assert_eq!(passengers[2].affiliated_passenger_ids, vec![infant.id]);

    Ok(())
}

/// Tests that unknown IDs are skipped.
///
/// Expected: Ok with only existing passengers
#[tokio::test]
async fn skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let passenger = factory::create_passenger(db).await?;

    let passengers = PassengerRepository::new(db)
        .get_by_ids(&[9999, passenger.id])
        .await?;

    assert_eq!(passengers.len(), 1);
    assert_eq!(passengers[0].id, passenger.id);

    Ok(())
}
