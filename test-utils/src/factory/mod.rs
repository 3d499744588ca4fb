//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let aircraft = factory::aircraft_type::create_narrow_body(&db).await?;
//!     let flight = factory::flight::create_flight(&db, aircraft.id).await?;
//!
//!     let pilot = factory::pilot::PilotFactory::new(&db, aircraft.id)
//!         .seniority(SeniorityLevel::Senior)
//!         .allowed_range(2000)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `aircraft_type` - Aircraft types with seeded seat maps and standard menus
//! - `airport` - Airports with coordinates
//! - `flight` - Flights with menus
//! - `pilot` - Pilots with seniority, type rating and range
//! - `cabin_crew` - Cabin crew with type ratings and dish recipes
//! - `passenger` - Passengers with affiliations
//! - `schedule` - Scheduled flight entries for any person
//! - `helpers` - ID generation and bulk crew pools

pub mod aircraft_type;
pub mod airport;
pub mod cabin_crew;
pub mod flight;
pub mod helpers;
pub mod passenger;
pub mod pilot;
pub mod schedule;

// Re-export commonly used factory functions for concise usage
pub use aircraft_type::{create_narrow_body, create_wide_body};
pub use airport::create_airport;
pub use cabin_crew::create_cabin_crew;
pub use flight::create_flight;
pub use passenger::create_passenger;
pub use pilot::create_pilot;
