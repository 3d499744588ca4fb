use super::*;

/// Tests counting pilots.
///
/// Expected: Ok with the number of pilots created
#[tokio::test]
async fn counts_all_pilots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PilotRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    let narrow = factory::create_narrow_body(db).await?;
    factory::create_pilot(db, narrow.id, SeniorityLevel::Junior).await?;
    factory::create_pilot(db, narrow.id, SeniorityLevel::Trainee).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
