use super::*;

/// Tests filtering by seniority and type rating.
///
/// Creates pilots of several seniorities on two aircraft types and verifies only
/// pilots with the requested seniority rated for the requested type are returned.
///
/// Expected: Ok with matching pilots ordered by ID
#[tokio::test]
async fn filters_by_seniority_and_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let narrow = factory::create_narrow_body(db).await?;
    let wide = factory::create_wide_body(db).await?;

    let senior_a = factory::create_pilot(db, narrow.id, SeniorityLevel::Senior).await?;
    let senior_b = factory::create_pilot(db, narrow.id, SeniorityLevel::Senior).await?;
    factory::create_pilot(db, narrow.id, SeniorityLevel::Junior).await?;
    factory::create_pilot(db, wide.id, SeniorityLevel::Senior).await?;

    let candidates = PilotRepository::new(db)
        .find_candidates(SeniorityLevel::Senior, narrow.id)
        .await?;

    let ids: Vec<i32> = candidates.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![senior_a.id, senior_b.id]);

    Ok(())
}

/// Tests that range is not filtered in the query.
///
/// Range is a hard constraint checked by the selector, not a query filter.
///
/// Expected: Ok including short-range pilots
#[tokio::test]
async fn includes_pilots_of_any_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let narrow = factory::create_narrow_body(db).await?;
    let pilot = PilotFactory::new(db, narrow.id)
        .allowed_range(100)
        .build()
        .await?;

    let candidates = PilotRepository::new(db)
        .find_candidates(SeniorityLevel::Senior, narrow.id)
        .await?;

    assert_eq!(candidates, vec![(pilot.id, 100)]);

    Ok(())
}
