use super::*;

/// Tests fetching a chef's dish recipes.
///
/// Expected: Ok with dishes in insertion order
#[tokio::test]
async fn returns_chef_dishes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let narrow = factory::create_narrow_body(db).await?;
    let chef = CabinCrewFactory::new(db, AttendantType::Chef)
        .type_rating(narrow.id)
        .dish("Lamb Tagine")
        .dish("Rice Pudding")
        .build()
        .await?;

    let dishes = CabinCrewRepository::new(db).dishes(chef.id).await?;

    assert_eq!(dishes, vec!["Lamb Tagine", "Rice Pudding"]);

    Ok(())
}

/// Tests that non-chefs have no dishes.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_regular_crew() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let narrow = factory::create_narrow_body(db).await?;
    let crew = factory::create_cabin_crew(db, AttendantType::Regular, narrow.id).await?;

    let dishes = CabinCrewRepository::new(db).dishes(crew.id).await?;

    assert!(dishes.is_empty());

    Ok(())
}
