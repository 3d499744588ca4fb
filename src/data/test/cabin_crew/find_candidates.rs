use super::*;

/// Tests filtering by attendant type and type rating.
///
/// Expected: Ok with crew of the requested type rated for the aircraft
#[tokio::test]
async fn filters_by_attendant_type_and_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let narrow = factory::create_narrow_body(db).await?;
    let wide = factory::create_wide_body(db).await?;

    let chief = factory::create_cabin_crew(db, AttendantType::Chief, narrow.id).await?;
    factory::create_cabin_crew(db, AttendantType::Regular, narrow.id).await?;
    factory::create_cabin_crew(db, AttendantType::Chief, wide.id).await?;
    // No type rating at all
    CabinCrewFactory::new(db, AttendantType::Chief).build().await?;

    let candidates = CabinCrewRepository::new(db)
        .find_candidates(AttendantType::Chief, narrow.id)
        .await?;

    assert_eq!(candidates, vec![chief.id]);

    Ok(())
}

/// Tests that crew rated for several types match each of them once.
///
/// Expected: Ok with the crew member returned once for either type
#[tokio::test]
async fn multi_rated_crew_matches_each_type_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let narrow = factory::create_narrow_body(db).await?;
    let wide = factory::create_wide_body(db).await?;
    let crew = CabinCrewFactory::new(db, AttendantType::Regular)
        .type_rating(narrow.id)
        .type_rating(wide.id)
        .build()
        .await?;

    let repo = CabinCrewRepository::new(db);
    for aircraft_type_id in [narrow.id, wide.id] {
        let candidates = repo
            .find_candidates(AttendantType::Regular, aircraft_type_id)
            .await?;
        assert_eq!(candidates, vec![crew.id]);
    }

    Ok(())
}
