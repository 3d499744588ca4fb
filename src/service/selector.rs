//! Randomized candidate search for one roster role.

use rand::{seq::SliceRandom, Rng};
use sea_orm::ConnectionTrait;

use crate::{
    data::{cabin_crew::CabinCrewRepository, passenger::PassengerRepository, pilot::PilotRepository},
    error::roster::RosterError,
    model::{flight::Flight, role::Role},
    service::availability::AvailabilityChecker,
};

/// A person matching a role's query filters, before hard constraints are checked.
struct Candidate {
    id: i32,
    /// Set for pilots only.
    allowed_range: Option<i32>,
}

/// Picks distinct, eligible, available people for a role.
///
/// The people matching a role's filters are loaded once and shuffled, then checked in
/// that order. A candidate failing a hard constraint is skipped for the rest of the
/// search, so the accepted set is a uniform sample without replacement of the eligible
/// people.
pub struct CandidateSelector<'a, C: ConnectionTrait> {
    db: &'a C,
    max_attempts: usize,
}

impl<'a, C: ConnectionTrait> CandidateSelector<'a, C> {
    pub fn new(db: &'a C, max_attempts: usize) -> Self {
        Self { db, max_attempts }
    }

    /// Selects exactly `count` people for a role.
    ///
    /// # Arguments
    /// - `flight` - Flight being rostered
    /// - `role` - Role to fill
    /// - `count` - Number of people required
    /// - `rng` - Random source for the candidate order
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - `count` distinct person IDs in acceptance order
    /// - `Err(RosterError::InsufficientCandidates)` - Fewer than `count` people qualify
    /// - `Err(RosterError::Database)` - Database error during the search
    pub async fn find_available<R: Rng + ?Sized>(
        &self,
        flight: &Flight,
        role: Role,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<i32>, RosterError> {
        let accepted = self.collect(flight, role, count, rng).await?;
        if accepted.len() < count {
            return Err(RosterError::InsufficientCandidates(role));
        }
        Ok(accepted)
    }

    /// Selects up to `count` people for a role, stopping early when the pool runs dry.
    ///
    /// Every candidate checked counts as one attempt against the attempt cap.
    ///
    /// # Arguments
    /// - `flight` - Flight being rostered
    /// - `role` - Role to fill
    /// - `count` - Number of people wanted
    /// - `rng` - Random source for the candidate order
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - At most `count` distinct person IDs in acceptance order
    /// - `Err(RosterError::Database)` - Database error during the search
    pub async fn collect<R: Rng + ?Sized>(
        &self,
        flight: &Flight,
        role: Role,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<i32>, RosterError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let mut candidates = self.load_candidates(flight, role).await?;
        candidates.shuffle(rng);

        let window = flight.window();
        let availability = AvailabilityChecker::new(self.db);

        let mut accepted: Vec<i32> = Vec::with_capacity(count);
        let mut rejected = 0;

        for (attempts, candidate) in candidates.into_iter().enumerate() {
            if accepted.len() == count {
                break;
            }
            if attempts >= self.max_attempts {
                tracing::warn!(
                    flight_id = flight.id,
                    %role,
                    attempts,
                    "Candidate search hit the attempt cap"
                );
                break;
            }

            let in_range = candidate
                .allowed_range
                .map_or(true, |range| f64::from(range) >= flight.distance_km);

            if in_range
                && availability
                    .is_available(role.person_kind(), candidate.id, &window)
                    .await?
            {
                accepted.push(candidate.id);
            } else {
                rejected += 1;
            }
        }

        tracing::debug!(
            flight_id = flight.id,
            %role,
            wanted = count,
            accepted = accepted.len(),
            rejected,
            "Candidate search finished"
        );

        Ok(accepted)
    }

    /// Loads every person matching the role's filters, in ID order.
    async fn load_candidates(
        &self,
        flight: &Flight,
        role: Role,
    ) -> Result<Vec<Candidate>, RosterError> {
        if let Some(seniority) = role.seniority() {
            let pilots = PilotRepository::new(self.db)
                .find_candidates(seniority, flight.aircraft_type_id)
                .await?;
            return Ok(pilots
                .into_iter()
                .map(|(id, allowed_range)| Candidate {
                    id,
                    allowed_range: Some(allowed_range),
                })
                .collect());
        }

        let ids = match role.attendant_type() {
            Some(attendant_type) => {
                CabinCrewRepository::new(self.db)
                    .find_candidates(attendant_type, flight.aircraft_type_id)
                    .await?
            }
            None => PassengerRepository::new(self.db).find_candidates().await?,
        };
        Ok(ids
            .into_iter()
            .map(|id| Candidate {
                id,
                allowed_range: None,
            })
            .collect())
    }
}
