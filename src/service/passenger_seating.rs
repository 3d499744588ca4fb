//! Passenger seating bin-packer.

use entity::sea_orm_active_enums::{PersonKind, SeatType};
use rand::{seq::SliceRandom, Rng};
use sea_orm::ConnectionTrait;
use std::collections::{BTreeMap, HashSet};

use crate::{
    data::{
        passenger::PassengerRepository, schedule::ScheduleRepository,
        seat_assignment::SeatAssignmentRepository, seat_map::SeatMapRepository,
    },
    error::roster::RosterError,
    model::{flight::Flight, passenger::Passenger, role::Role, roster::SeatAssignment},
};

/// Groups cabin seats by seat group, ordered by group number.
///
/// Seats without a group each form a group of one.
///
/// # Arguments
/// - `seats` - Business and economy seats of an aircraft type
///
/// # Returns
/// - `Vec<Vec<i32>>` - Seat map IDs per group
pub fn seat_groups(seats: &[entity::seat_map::Model]) -> Vec<Vec<i32>> {
    let mut grouped: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
    let mut ungrouped = Vec::new();

    for seat in seats {
        match seat.seat_group {
            Some(group) => grouped.entry(group).or_default().push(seat.id),
            None => ungrouped.push(vec![seat.id]),
        }
    }

    grouped.into_values().chain(ungrouped).collect()
}

/// Packs passengers into seat groups, keeping affiliated parties together when possible.
///
/// Group order and the seats within each group are shuffled first. Passengers are
/// then seated in input order. A passenger whose on-flight affiliates are all still
/// unseated takes the first group with room for the whole party, followed by the
/// affiliates. Otherwise the passenger alone takes the next free seat of any group and
/// the affiliates are seated on their own turns, which can split a party.
///
/// # Arguments
/// - `groups` - Seat map IDs per seat group
/// - `passengers` - Passengers to seat with their affiliations
/// - `rng` - Random source for the shuffles
///
/// # Returns
/// - `Ok(Vec<(i32, i32)>)` - `(passenger_id, seat_map_id)` pairs in seating order
/// - `Err(RosterError::InvalidSeatMap)` - More passengers than cabin seats
pub fn pack<R: Rng + ?Sized>(
    mut groups: Vec<Vec<i32>>,
    passengers: &[Passenger],
    rng: &mut R,
) -> Result<Vec<(i32, i32)>, RosterError> {
    groups.shuffle(rng);
    for group in &mut groups {
        group.shuffle(rng);
    }

    let on_flight: HashSet<i32> = passengers.iter().map(|p| p.id).collect();
    let mut seated: HashSet<i32> = HashSet::new();
    let mut placements = Vec::with_capacity(passengers.len());

    for passenger in passengers {
        if seated.contains(&passenger.id) {
            continue;
        }

        let mut affiliates: Vec<i32> = passenger
            .affiliated_passenger_ids
            .iter()
            .copied()
            .filter(|id| *id != passenger.id && on_flight.contains(id))
            .collect();
        affiliates.sort_unstable();
        affiliates.dedup();

        let party_free = affiliates.iter().all(|id| !seated.contains(id));
        let party_size = 1 + affiliates.len();

        if party_free {
            if let Some(group) = groups.iter_mut().find(|g| g.len() >= party_size) {
                let seats = group.split_off(group.len() - party_size);
                let party = std::iter::once(passenger.id).chain(affiliates);
                for (passenger_id, seat_map_id) in party.zip(seats.into_iter().rev()) {
                    seated.insert(passenger_id);
                    placements.push((passenger_id, seat_map_id));
                }
                continue;
            }
        }

        let seat_map_id = groups
            .iter_mut()
            .find_map(|group| group.pop())
            .ok_or_else(|| {
                RosterError::InvalidSeatMap(format!(
                    "ran out of cabin seats seating {} passengers",
                    passengers.len()
                ))
            })?;
        seated.insert(passenger.id);
        placements.push((passenger.id, seat_map_id));
    }

    Ok(placements)
}

pub struct PassengerSeating<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PassengerSeating<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Seats the selected passengers of a flight and adds the flight to their schedules.
    ///
    /// # Arguments
    /// - `passenger_ids` - Selected passengers in selection order
    /// - `flight` - Flight being rostered
    /// - `rng` - Random source for the bin-packer
    ///
    /// # Returns
    /// - `Ok(Vec<SeatAssignment>)` - One assignment per passenger
    /// - `Err(RosterError::InvalidSeatMap)` - Not enough cabin seats
    /// - `Err(RosterError::Database)` - Database error; the caller rolls back
    pub async fn assign_passenger_seats<R: Rng + ?Sized>(
        &self,
        passenger_ids: &[i32],
        flight: &Flight,
        rng: &mut R,
    ) -> Result<Vec<SeatAssignment>, RosterError> {
        let cabin_seats = SeatMapRepository::new(self.db)
            .get_by_seat_types(
                flight.aircraft_type_id,
                &[SeatType::Business, SeatType::Economy],
            )
            .await?;
        let passengers = PassengerRepository::new(self.db)
            .get_by_ids(passenger_ids)
            .await?;

        let placements = pack(seat_groups(&cabin_seats), &passengers, rng)?;

        let seats = SeatAssignmentRepository::new(self.db);
        let schedule = ScheduleRepository::new(self.db);
        let mut assignments = Vec::with_capacity(placements.len());

        for (passenger_id, seat_map_id) in placements {
            seats
                .insert(
                    flight.id,
                    seat_map_id,
                    Role::Passenger.seater_type(),
                    passenger_id,
                )
                .await?;
            schedule
                .append(PersonKind::Passenger, passenger_id, flight.id)
                .await?;

            assignments.push(SeatAssignment {
                seat_map_id,
                role: Role::Passenger,
                seater_id: passenger_id,
            });
        }

        Ok(assignments)
    }
}
