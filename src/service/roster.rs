//! Roster orchestrator.
//!
//! Sequences quota derivation, candidate selection, crew seating, chef menu injection
//! and passenger seating for one flight inside a single database transaction. Any
//! failure rolls the transaction back, leaving no seat assignments, schedule entries
//! or menu changes behind.

use entity::sea_orm_active_enums::SeatType;
use rand::{rngs::StdRng, SeedableRng};
use sea_orm::{DatabaseConnection, DatabaseTransaction, SqlErr, TransactionTrait};

use crate::{
    config::RosterConfig,
    data::{
        flight::FlightRepository, roster_claim::RosterClaimRepository,
        seat_assignment::SeatAssignmentRepository, seat_map::SeatMapRepository,
    },
    error::{roster::RosterError, AppError},
    model::{
        aircraft::AircraftClass,
        flight::Flight,
        quota::RosterQuota,
        role::Role,
        roster::{RosterEntry, RosterResult, RosterSummary},
    },
    service::{
        crew_assignment::CrewAssignor, passenger_seating::PassengerSeating,
        selector::CandidateSelector,
    },
};

pub struct RosterService<'a> {
    db: &'a DatabaseConnection,
    config: RosterConfig,
    rng: StdRng,
}

impl<'a> RosterService<'a> {
    /// Creates a roster service seeded from the operating system.
    pub fn new(db: &'a DatabaseConnection, config: RosterConfig) -> Self {
        Self::with_rng(db, config, StdRng::from_os_rng())
    }

    /// Creates a roster service drawing from the given random source.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `config` - Roster tunables
    /// - `rng` - Random source for quotas, candidate draws, dishes and seat shuffles
    ///
    /// # Returns
    /// - `RosterService` - New service instance
    pub fn with_rng(db: &'a DatabaseConnection, config: RosterConfig, rng: StdRng) -> Self {
        Self { db, config, rng }
    }

    /// Selects crew and passengers for a flight and seats them, all or nothing.
    ///
    /// The roster claim row is the only guard against two concurrent attempts on one
    /// flight. A claim lost to a unique-key conflict reports `RosterAlreadyExists`. On
    /// SQLite the losing writer usually fails earlier with a busy or locked error
    /// instead, which reports `DatabaseError`; either way nothing is written and the
    /// winning roster stands.
    ///
    /// # Arguments
    /// - `flight_id` - Flight to roster
    /// - `aircraft_type_id` - Aircraft type operating the flight
    ///
    /// # Returns
    /// - `RosterResult::Success` - Roster committed
    /// - Any other variant - Nothing was written
    pub async fn assign_roster_automatically(
        &mut self,
        flight_id: i32,
        aircraft_type_id: i32,
    ) -> RosterResult {
        tracing::info!(flight_id, aircraft_type_id, "Assigning roster");

        let class = match AircraftClass::from_type_id(aircraft_type_id) {
            Ok(class) => class,
            Err(err) => return Self::abort(flight_id, err),
        };

        let txn = match self.db.begin().await {
            Ok(txn) => txn,
            Err(err) => return Self::abort(flight_id, err.into()),
        };

        match self.allocate(&txn, flight_id, aircraft_type_id, class).await {
            Ok(summary) => match txn.commit().await {
                Ok(()) => {
                    tracing::info!(
                        flight_id,
                        assignments = summary.assignments.len(),
                        dishes = summary.added_dishes.len(),
                        "Roster committed"
                    );
                    RosterResult::Success(summary)
                }
                Err(err) => Self::abort(flight_id, err.into()),
            },
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!(flight_id, error = %rollback_err, "Roster rollback failed");
                }
                Self::abort(flight_id, err)
            }
        }
    }

    /// Gets the committed roster of a flight
    ///
    /// # Returns
    /// - `Ok(Vec<RosterEntry>)` - Assignments with their seats ordered by seat map ID,
    ///   empty when the flight has no roster
    /// - `Err(AppError::NotFound)` - Flight does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_roster(&self, flight_id: i32) -> Result<Vec<RosterEntry>, AppError> {
        FlightRepository::new(self.db)
            .get_by_id(flight_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Flight {flight_id} not found")))?;

        let rows = SeatAssignmentRepository::new(self.db)
            .get_by_flight(flight_id)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(assignment, seat)| {
                seat.map(|seat| RosterEntry::from_entity(assignment, seat))
            })
            .collect())
    }

    /// Assigns rosters to every flight that has none yet
    ///
    /// Flights are processed oldest departure first; a failure on one flight does not
    /// stop the others.
    ///
    /// # Returns
    /// - `Ok(Vec<(i32, RosterResult)>)` - Outcome per flight ID
    /// - `Err(AppError::DbErr)` - Database error listing flights
    pub async fn backfill(&mut self) -> Result<Vec<(i32, RosterResult)>, AppError> {
        let flights = FlightRepository::new(self.db).get_without_roster().await?;
        tracing::info!(flights = flights.len(), "Backfilling rosters");

        let mut outcomes = Vec::with_capacity(flights.len());
        for flight in flights {
            let result = self
                .assign_roster_automatically(flight.id, flight.aircraft_type_id)
                .await;
            outcomes.push((flight.id, result));
        }

        Ok(outcomes)
    }

    async fn allocate(
        &mut self,
        txn: &DatabaseTransaction,
        flight_id: i32,
        aircraft_type_id: i32,
        class: AircraftClass,
    ) -> Result<RosterSummary, RosterError> {
        let flight = FlightRepository::new(txn)
            .get_by_id(flight_id)
            .await?
            .map(Flight::from_entity)
            .ok_or(RosterError::FlightNotFound(flight_id))?;
        if flight.aircraft_type_id != aircraft_type_id {
            return Err(RosterError::InvalidAircraftType(aircraft_type_id));
        }

        let claims = RosterClaimRepository::new(txn);
        if claims.exists(flight_id).await?
            || SeatAssignmentRepository::new(txn)
                .exists_for_flight(flight_id)
                .await?
        {
            return Err(RosterError::RosterAlreadyExists(flight_id));
        }
        claims.claim(flight_id).await.map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                RosterError::RosterAlreadyExists(flight_id)
            }
            _ => RosterError::Database(err),
        })?;

        let layout = class.seat_layout();
        let crew_seats = SeatMapRepository::new(txn)
            .get_by_seat_types(aircraft_type_id, &[SeatType::Pilot, SeatType::Crew])
            .await?;
        layout.validate(crew_seats.len())?;

        let quota = RosterQuota::draw(class, &mut self.rng);
        tracing::debug!(flight_id, ?quota, "Drew roster quota");

        let selector = CandidateSelector::new(txn, self.config.max_candidate_attempts);
        let mut crew: Vec<(Role, Vec<i32>)> = Vec::with_capacity(Role::CREW.len());
        for role in Role::CREW {
            let wanted = quota.for_role(role);
            let ids = if self.config.degrades(role) {
                let ids = selector.collect(&flight, role, wanted, &mut self.rng).await?;
                if ids.len() < wanted {
                    tracing::info!(
                        flight_id,
                        %role,
                        wanted,
                        found = ids.len(),
                        "Optional role short of quota"
                    );
                }
                ids
            } else {
                selector
                    .find_available(&flight, role, wanted, &mut self.rng)
                    .await?
            };
            crew.push((role, ids));
        }

        let assignor = CrewAssignor::new(txn);
        let mut assignments = Vec::new();
        for (role, ids) in &crew {
            assignments.extend(
                assignor
                    .assign(flight.id, &layout, &crew_seats, *role, ids)
                    .await?,
            );
        }

        let chef_ids = crew
            .iter()
            .find(|(role, _)| *role == Role::ChefCabinCrew)
            .map(|(_, ids)| ids.as_slice())
            .unwrap_or_default();
        let added_dishes = assignor
            .inject_chef_dishes(flight.id, chef_ids, &mut self.rng)
            .await?;

        let passenger_ids = selector
            .find_available(&flight, Role::Passenger, quota.passengers, &mut self.rng)
            .await?;
        assignments.extend(
            PassengerSeating::new(txn)
                .assign_passenger_seats(&passenger_ids, &flight, &mut self.rng)
                .await?,
        );

        Ok(RosterSummary {
            flight_id,
            assignments,
            added_dishes,
        })
    }

    fn abort(flight_id: i32, err: RosterError) -> RosterResult {
        match &err {
            RosterError::Database(db_err) => {
                tracing::error!(flight_id, error = %db_err, "Roster aborted by database error");
            }
            other => tracing::warn!(flight_id, reason = %other, "Roster aborted"),
        }
        err.into()
    }
}
