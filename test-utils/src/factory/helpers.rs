//! Shared helper utilities for factory methods.

use entity::sea_orm_active_enums::{AttendantType, SeniorityLevel};
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{cabin_crew::CabinCrewFactory, passenger::PassengerFactory, pilot::PilotFactory};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Sizes of a crew and passenger pool created by `create_pool`.
#[derive(Debug, Clone, Copy)]
pub struct PoolSize {
    pub senior_pilots: usize,
    pub junior_pilots: usize,
    pub trainee_pilots: usize,
    pub chief_cabin_crew: usize,
    pub regular_cabin_crew: usize,
    pub chefs: usize,
    pub passengers: usize,
}

impl PoolSize {
    /// A pool large enough to satisfy the largest possible quota of any aircraft.
    pub fn ample() -> Self {
        Self {
            senior_pilots: 3,
            junior_pilots: 3,
            trainee_pilots: 3,
            chief_cabin_crew: 5,
            regular_cabin_crew: 12,
            chefs: 3,
            passengers: 170,
        }
    }
}

/// Creates pilots, cabin crew and passengers rated for one aircraft type.
///
/// Pilots get an allowed range of 20 000 km so every flight distance is eligible.
/// Chefs get two dish recipes each.
///
/// # Arguments
/// - `db` - Database connection
/// - `aircraft_type_id` - Aircraft type every crew member is rated for
/// - `size` - Number of people per role
///
/// # Returns
/// - `Ok(())` - Pool created
/// - `Err(DbErr)` - Database error during creation
pub async fn create_pool(
    db: &DatabaseConnection,
    aircraft_type_id: i32,
    size: PoolSize,
) -> Result<(), DbErr> {
    let pilots = [
        (SeniorityLevel::Senior, size.senior_pilots),
        (SeniorityLevel::Junior, size.junior_pilots),
        (SeniorityLevel::Trainee, size.trainee_pilots),
    ];
    for (seniority, count) in pilots {
        for _ in 0..count {
            PilotFactory::new(db, aircraft_type_id)
                .seniority(seniority)
                .allowed_range(20_000)
                .build()
                .await?;
        }
    }

    let crew = [
        (AttendantType::Chief, size.chief_cabin_crew),
        (AttendantType::Regular, size.regular_cabin_crew),
    ];
    for (attendant_type, count) in crew {
        for _ in 0..count {
            CabinCrewFactory::new(db, attendant_type)
                .type_rating(aircraft_type_id)
                .build()
                .await?;
        }
    }

    for _ in 0..size.chefs {
        let id = next_id();
        CabinCrewFactory::new(db, AttendantType::Chef)
            .type_rating(aircraft_type_id)
            .dish(format!("Signature Dish {}", id))
            .dish(format!("Dessert {}", id))
            .build()
            .await?;
    }

    for _ in 0..size.passengers {
        PassengerFactory::new(db).build().await?;
    }

    Ok(())
}
