use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{AircraftType, Pilot};
///
/// let test = TestBuilder::new()
///     .with_table(AircraftType)
///     .with_table(Pilot)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the aircraft reference tables.
    ///
    /// - AircraftType
    /// - StandardMenuItem
    /// - SeatMap
    /// - Airport
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_aircraft_tables(self) -> Self {
        self.with_table(AircraftType)
            .with_table(StandardMenuItem)
            .with_table(SeatMap)
            .with_table(Airport)
    }

    /// Adds the flight tables on top of the aircraft reference tables.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_flight_tables(self) -> Self {
        self.with_aircraft_tables()
            .with_table(Flight)
            .with_table(FlightMenuItem)
            .with_table(ScheduledFlight)
    }

    /// Adds every table the roster engine reads or writes.
    ///
    /// This is the schema used by most service tests:
    /// - aircraft reference tables and flights
    /// - Pilot, CabinCrew (with type ratings and dishes), Passenger (with affiliations)
    /// - FlightSeatAssignment and FlightRoster
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_roster_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_roster_tables(self) -> Self {
        self.with_flight_tables()
            .with_table(Pilot)
            .with_table(CabinCrew)
            .with_table(CabinCrewTypeRating)
            .with_table(ChefDish)
            .with_table(Passenger)
            .with_table(PassengerAffiliation)
            .with_table(FlightSeatAssignment)
            .with_table(FlightRoster)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
