use super::*;

/// Tests that every passenger is returned as a candidate.
///
/// Expected: Ok with all passenger IDs ordered by ID
#[tokio::test]
async fn returns_every_passenger_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_passenger(db).await?;
    let b = factory::create_passenger(db).await?;
    let c = factory::create_passenger(db).await?;

    let ids = PassengerRepository::new(db).find_candidates().await?;

    assert_eq!(ids, vec![a.id, b.id, c.id]);

    Ok(())
}
