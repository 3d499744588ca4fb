use super::*;

/// Tests claiming a flight.
///
/// Expected: Ok with the claim visible through `exists`
#[tokio::test]
async fn claims_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_narrow_body(db).await?;
    let flight = factory::create_flight(db, aircraft.id).await?;

    let repo = RosterClaimRepository::new(db);
    assert!(!repo.exists(flight.id).await?);

    let claim = repo.claim(flight.id).await?;

    assert_eq!(claim.flight_id, flight.id);
    assert!(repo.exists(flight.id).await?);

    Ok(())
}

/// Tests that a second claim for the same flight is a unique violation.
///
/// Expected: Err(DbErr) classified as a unique constraint violation
#[tokio::test]
async fn second_claim_is_unique_violation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_narrow_body(db).await?;
    let flight = factory::create_flight(db, aircraft.id).await?;

    let repo = RosterClaimRepository::new(db);
    repo.claim(flight.id).await?;
    let err = repo.claim(flight.id).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
