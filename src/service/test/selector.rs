use super::*;
use crate::{error::roster::RosterError, service::selector::CandidateSelector};

/// Tests the range filter with 5 senior pilots, 2 of whom can fly 900 km.
///
/// Expected: Ok with one of the two long-range pilots, for every seed
#[tokio::test]
async fn picks_only_pilots_in_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_narrow_body(db).await?;
    for _ in 0..3 {
        PilotFactory::new(db, aircraft.id)
            .allowed_range(800)
            .build()
            .await?;
    }
    let mut eligible = Vec::new();
    for _ in 0..2 {
        let pilot = PilotFactory::new(db, aircraft.id)
            .allowed_range(2000)
            .build()
            .await?;
        eligible.push(pilot.id);
    }
    let flight = Flight::from_entity(
        FlightFactory::new(db, aircraft.id)
            .distance_km(900.0)
            .build()
            .await?,
    );

    let selector = CandidateSelector::new(db, 10_000);
    for seed in 0..10 {
        let picked = selector
            .find_available(&flight, Role::SeniorPilot, 1, &mut seeded(seed))
            .await
            .unwrap();
        assert_eq!(picked.len(), 1);
        assert!(eligible.contains(&picked[0]), "seed {seed} picked {picked:?}");
    }

    Ok(())
}

/// Tests that a pilot whose range exactly equals the distance qualifies.
///
/// Expected: Ok with the pilot
#[tokio::test]
async fn range_equal_to_distance_qualifies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_narrow_body(db).await?;
    let pilot = PilotFactory::new(db, aircraft.id)
        .seniority(SeniorityLevel::Junior)
        .allowed_range(1000)
        .build()
        .await?;
    let flight = Flight::from_entity(
        FlightFactory::new(db, aircraft.id)
            .distance_km(1000.0)
            .build()
            .await?,
    );

    let picked = CandidateSelector::new(db, 10_000)
        .find_available(&flight, Role::JuniorPilot, 1, &mut seeded(1))
        .await
        .unwrap();

    assert_eq!(picked, vec![pilot.id]);

    Ok(())
}

/// Tests that too few candidates yields a role-named shortfall.
///
/// Expected: Err(InsufficientCandidates(RegularCabinCrew))
#[tokio::test]
async fn reports_shortfall_for_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_narrow_body(db).await?;
    for _ in 0..3 {
        factory::create_cabin_crew(db, AttendantType::Regular, aircraft.id).await?;
    }
    let flight = Flight::from_entity(factory::create_flight(db, aircraft.id).await?);

    let selector = CandidateSelector::new(db, 10_000);
    let result = selector
        .find_available(&flight, Role::RegularCabinCrew, 4, &mut seeded(2))
        .await;
    let partial = selector
        .collect(&flight, Role::RegularCabinCrew, 4, &mut seeded(2))
        .await
        .unwrap();

    assert!(matches!(
        result,
        Err(RosterError::InsufficientCandidates(Role::RegularCabinCrew))
    ));
    assert_eq!(partial.len(), 3);

    Ok(())
}

/// Tests that busy people are skipped and accepted IDs are distinct.
///
/// Expected: Ok with every free chief, never the busy one
#[tokio::test]
async fn skips_unavailable_people() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_narrow_body(db).await?;
    let flight = factory::create_flight(db, aircraft.id).await?;
    let clash = FlightFactory::new(db, aircraft.id)
        .departure_time(flight.departure_time + Duration::minutes(30))
        .build()
        .await?;

    let busy = factory::create_cabin_crew(db, AttendantType::Chief, aircraft.id).await?;
    factory::schedule::schedule(db, PersonKind::CabinCrew, busy.id, clash.id).await?;
    let mut free = Vec::new();
    for _ in 0..2 {
        free.push(
            factory::create_cabin_crew(db, AttendantType::Chief, aircraft.id)
                .await?
                .id,
        );
    }

    let flight = Flight::from_entity(flight);
    let mut picked = CandidateSelector::new(db, 10_000)
        .find_available(&flight, Role::ChiefCabinCrew, 2, &mut seeded(3))
        .await
        .unwrap();
    picked.sort();

    assert_eq!(picked, free);

    Ok(())
}

/// Tests that the attempt cap stops the search early.
///
/// Expected: Ok with as many people as attempts allowed
#[tokio::test]
async fn stops_at_attempt_cap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_passenger(db).await?;
    }
    let aircraft = factory::create_narrow_body(db).await?;
    let flight = Flight::from_entity(factory::create_flight(db, aircraft.id).await?);

    let selector = CandidateSelector::new(db, 2);
    let partial = selector
        .collect(&flight, Role::Passenger, 3, &mut seeded(4))
        .await
        .unwrap();
    let result = selector
        .find_available(&flight, Role::Passenger, 3, &mut seeded(4))
        .await;

    assert_eq!(partial.len(), 2);
    assert!(matches!(
        result,
        Err(RosterError::InsufficientCandidates(Role::Passenger))
    ));

    Ok(())
}

/// Tests that asking for zero people never touches the pool.
///
/// Expected: Ok with empty vector even when no candidates exist
#[tokio::test]
async fn zero_quota_is_trivially_met() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_narrow_body(db).await?;
    let flight = Flight::from_entity(factory::create_flight(db, aircraft.id).await?);

    let picked = CandidateSelector::new(db, 10_000)
        .find_available(&flight, Role::ChefCabinCrew, 0, &mut seeded(5))
        .await
        .unwrap();

    assert!(picked.is_empty());

    Ok(())
}

/// Tests that every candidate is checked at most once.
///
/// Twenty short-range pilots and one long-range pilot with an attempt cap equal to the
/// pool size: walking the shuffled pool once always reaches the eligible pilot.
///
/// Expected: Ok with the long-range pilot, for every seed
#[tokio::test]
async fn checks_each_candidate_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_narrow_body(db).await?;
    for _ in 0..20 {
        PilotFactory::new(db, aircraft.id)
            .allowed_range(500)
            .build()
            .await?;
    }
    let long_range = PilotFactory::new(db, aircraft.id)
        .allowed_range(5000)
        .build()
        .await?;
    let flight = Flight::from_entity(
        FlightFactory::new(db, aircraft.id)
            .distance_km(900.0)
            .build()
            .await?,
    );

    let selector = CandidateSelector::new(db, 21);
    for seed in 0..10 {
        let picked = selector
            .collect(&flight, Role::SeniorPilot, 2, &mut seeded(seed))
            .await
            .unwrap();
        assert_eq!(picked, vec![long_range.id], "seed {seed}");
    }

    Ok(())
}
