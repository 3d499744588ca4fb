//! Per-role headcounts for a roster.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::model::{aircraft::AircraftClass, role::Role};

/// Number of people to roster for each role on one flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterQuota {
    pub senior_pilots: usize,
    pub junior_pilots: usize,
    pub trainee_pilots: usize,
    pub chief_cabin_crew: usize,
    pub regular_cabin_crew: usize,
    pub chefs: usize,
    pub passengers: usize,
}

/// Passenger load distribution and bounds for an aircraft class.
struct PassengerLoad {
    mean: f64,
    std_dev: f64,
    floor: usize,
    capacity: usize,
}

impl RosterQuota {
    /// Draws the quota for one flight.
    ///
    /// Mandatory crew counts are fixed or uniform within a range; passengers follow a
    /// rounded normal distribution clamped to a floor and the cabin capacity.
    ///
    /// # Arguments
    /// - `class` - Aircraft class of the flight
    /// - `rng` - Random source
    ///
    /// # Returns
    /// - `RosterQuota` - Headcount per role
    pub fn draw<R: Rng + ?Sized>(class: AircraftClass, rng: &mut R) -> Self {
        match class {
            AircraftClass::NarrowBody => Self {
                senior_pilots: 1,
                junior_pilots: 1,
                trainee_pilots: rng.random_range(0..=2),
                chief_cabin_crew: 2,
                regular_cabin_crew: rng.random_range(4..=8),
                chefs: rng.random_range(0..=2),
                passengers: PassengerLoad {
                    mean: 70.0,
                    std_dev: 20.0,
                    floor: 10,
                    capacity: 122,
                }
                .sample(rng),
            },
            AircraftClass::WideBody => Self {
                senior_pilots: rng.random_range(1..=2),
                junior_pilots: rng.random_range(1..=2),
                trainee_pilots: rng.random_range(1..=2),
                chief_cabin_crew: 4,
                regular_cabin_crew: rng.random_range(6..=10),
                chefs: rng.random_range(0..=2),
                passengers: PassengerLoad {
                    mean: 100.0,
                    std_dev: 30.0,
                    floor: 20,
                    capacity: 160,
                }
                .sample(rng),
            },
        }
    }

    pub fn for_role(&self, role: Role) -> usize {
        match role {
            Role::SeniorPilot => self.senior_pilots,
            Role::JuniorPilot => self.junior_pilots,
            Role::TraineePilot => self.trainee_pilots,
            Role::ChiefCabinCrew => self.chief_cabin_crew,
            Role::RegularCabinCrew => self.regular_cabin_crew,
            Role::ChefCabinCrew => self.chefs,
            Role::Passenger => self.passengers,
        }
    }
}

impl PassengerLoad {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let drawn = Normal::new(self.mean, self.std_dev)
            .map(|normal| normal.sample(rng))
            .unwrap_or(self.mean);
        let rounded = drawn.round().max(0.0) as usize;
        rounded.max(self.floor).min(self.capacity)
    }
}
