//! Crew seating and chef menu injection.

use std::collections::HashSet;

use entity::sea_orm_active_enums::SeatType;
use rand::{seq::IndexedRandom, Rng};
use sea_orm::{ConnectionTrait, DbErr};

use crate::{
    data::{
        cabin_crew::CabinCrewRepository, flight::FlightRepository,
        schedule::ScheduleRepository, seat_assignment::SeatAssignmentRepository,
    },
    error::roster::RosterError,
    model::{aircraft::SeatLayout, role::Role, roster::SeatAssignment},
};

pub struct CrewAssignor<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CrewAssignor<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Seats accepted crew of one role and adds the flight to their schedules.
    ///
    /// The person at position `i` of `ids` gets the crew-area seat at the role's
    /// layout offset plus `i`.
    ///
    /// # Arguments
    /// - `flight_id` - Flight being rostered
    /// - `layout` - Crew seat layout of the aircraft class
    /// - `crew_seats` - Pilot and crew seats of the aircraft type in seat map ID order
    /// - `role` - Crew role of every ID in `ids`
    /// - `ids` - Accepted person IDs in acceptance order
    ///
    /// # Returns
    /// - `Ok(Vec<SeatAssignment>)` - One assignment per ID
    /// - `Err(RosterError::InvalidSeatMap)` - Role block missing, too small or on the wrong seat type
    /// - `Err(RosterError::Database)` - Database error writing assignments or schedules
    pub async fn assign(
        &self,
        flight_id: i32,
        layout: &SeatLayout,
        crew_seats: &[entity::seat_map::Model],
        role: Role,
        ids: &[i32],
    ) -> Result<Vec<SeatAssignment>, RosterError> {
        let slot = layout
            .slot(role)
            .ok_or_else(|| RosterError::InvalidSeatMap(format!("no crew seats for {role}")))?;
        if ids.len() > slot.capacity {
            return Err(RosterError::InvalidSeatMap(format!(
                "{} {role}s exceed the {} reserved seats",
                ids.len(),
                slot.capacity
            )));
        }

        let expected_seat_type = if role.seniority().is_some() {
            SeatType::Pilot
        } else {
            SeatType::Crew
        };

        let seats = SeatAssignmentRepository::new(self.db);
        let schedule = ScheduleRepository::new(self.db);
        let mut assignments = Vec::with_capacity(ids.len());

        for (position, &seater_id) in ids.iter().enumerate() {
            let index = slot.offset + position;
            let seat = crew_seats
                .get(index)
                .filter(|seat| seat.seat_type == expected_seat_type)
                .ok_or_else(|| {
                    RosterError::InvalidSeatMap(format!(
                        "crew seat {index} for {role} is missing or not a {expected_seat_type:?} seat"
                    ))
                })?;

            seats
                .insert(flight_id, seat.id, role.seater_type(), seater_id)
                .await?;
            schedule
                .append(role.person_kind(), seater_id, flight_id)
                .await?;

            assignments.push(SeatAssignment {
                seat_map_id: seat.id,
                role,
                seater_id,
            });
        }

        Ok(assignments)
    }

    /// Adds one new dish per chef to the flight menu.
    ///
    /// Chefs are processed in order against the menu as it stands after the previous
    /// chef. A chef whose dishes are all already on the menu adds nothing.
    ///
    /// # Arguments
    /// - `flight_id` - Flight being rostered
    /// - `chef_ids` - Accepted chef IDs in acceptance order
    /// - `rng` - Random source for picking among new dishes
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Dishes appended, in order
    /// - `Err(DbErr)` - Database error reading dishes or writing the menu
    pub async fn inject_chef_dishes<R: Rng + ?Sized>(
        &self,
        flight_id: i32,
        chef_ids: &[i32],
        rng: &mut R,
    ) -> Result<Vec<String>, DbErr> {
        let crew = CabinCrewRepository::new(self.db);
        let flights = FlightRepository::new(self.db);
        let mut added = Vec::new();

        for &chef_id in chef_ids {
            let menu = flights.menu(flight_id).await?;
            let new_dishes = unseen_dishes(&menu, crew.dishes(chef_id).await?);

            if let Some(dish) = new_dishes.choose(rng) {
                flights.append_menu_item(flight_id, dish.clone()).await?;
                added.push(dish.clone());
            }
        }

        Ok(added)
    }
}

/// Dishes not yet on the menu, each listed once in first-seen order.
fn unseen_dishes(menu: &[String], dishes: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<&str> = menu.iter().map(String::as_str).collect();
    let mut unseen = Vec::new();
    for dish in &dishes {
        if seen.insert(dish.as_str()) {
            unseen.push(dish.clone());
        }
    }
    unseen
}
