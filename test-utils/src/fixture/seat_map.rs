//! Seat map layouts for the seeded aircraft configurations.
//!
//! Seats are produced in seeding order: pilot seats, then crew seats, then business
//! and economy rows. Crew-area ordering is what the roster engine's role layout
//! indexes into, so the pilot and crew counts here must stay in step with it.

use entity::{sea_orm_active_enums::SeatType, seat_map};
use sea_orm::ActiveValue;

/// Pilot and crew seats of a narrow-body (Boeing 737 / Airbus A320) aircraft.
pub const NARROW_BODY_PILOT_SEATS: usize = 4;
pub const NARROW_BODY_CREW_SEATS: usize = 12;
/// Business plus economy seats of a narrow-body aircraft.
pub const NARROW_BODY_PASSENGER_SEATS: usize = 122;

/// Pilot and crew seats of a wide-body (Boeing 777) aircraft.
pub const WIDE_BODY_PILOT_SEATS: usize = 6;
pub const WIDE_BODY_CREW_SEATS: usize = 16;
/// Business plus economy seats of a wide-body aircraft.
pub const WIDE_BODY_PASSENGER_SEATS: usize = 160;

/// Builder state shared by the layout functions.
struct LayoutWriter {
    aircraft_type_id: i32,
    seats: Vec<seat_map::ActiveModel>,
    next_group: i32,
}

impl LayoutWriter {
    fn new(aircraft_type_id: i32) -> Self {
        Self {
            aircraft_type_id,
            seats: Vec::new(),
            next_group: 1,
        }
    }

    fn crew_area(&mut self, row: &str, count: usize, seat_type: SeatType) {
        for number in 1..=count {
            self.push(row, number, seat_type, None, None);
        }
    }

    /// Adds one seat group per `(first, last)` seat-number range for each row.
    fn cabin(&mut self, rows: &str, groups: &[(usize, usize)], seat_type: SeatType) {
        for row in rows.chars() {
            let row = row.to_string();
            for &(first, last) in groups {
                let group = self.next_group;
                let size = (last - first + 1) as i32;
                for number in first..=last {
                    self.push(&row, number, seat_type, Some(group), Some(size));
                }
                self.next_group += 1;
            }
        }
    }

    fn push(
        &mut self,
        row: &str,
        number: usize,
        seat_type: SeatType,
        seat_group: Option<i32>,
        seat_group_size: Option<i32>,
    ) {
        self.seats.push(seat_map::ActiveModel {
            id: ActiveValue::NotSet,
            aircraft_type_id: ActiveValue::Set(self.aircraft_type_id),
            seat_row: ActiveValue::Set(row.to_string()),
            seat_number: ActiveValue::Set(number.to_string()),
            seat_type: ActiveValue::Set(seat_type),
            seat_group: ActiveValue::Set(seat_group),
            seat_group_size: ActiveValue::Set(seat_group_size),
        });
    }
}

/// Narrow-body seat map: 4 pilot, 12 crew, 32 business (pairs) and 90 economy (triples).
///
/// # Arguments
/// - `aircraft_type_id` - Aircraft type the seats belong to
///
/// # Returns
/// - `Vec<seat_map::ActiveModel>` - 138 seats in seeding order, ids not set
pub fn narrow_body(aircraft_type_id: i32) -> Vec<seat_map::ActiveModel> {
    let mut layout = LayoutWriter::new(aircraft_type_id);
    layout.crew_area("PL", NARROW_BODY_PILOT_SEATS, SeatType::Pilot);
    layout.crew_area("CR", NARROW_BODY_CREW_SEATS, SeatType::Crew);
    layout.cabin("ABCDEFGH", &[(1, 2), (3, 4)], SeatType::Business);
    layout.cabin("ABCDEFGHIJKLMNO", &[(1, 3), (4, 6)], SeatType::Economy);
    layout.seats
}

/// Wide-body seat map: 6 pilot, 16 crew, 40 business (pairs) and 120 economy
/// (2-4-2 rows).
///
/// # Arguments
/// - `aircraft_type_id` - Aircraft type the seats belong to
///
/// # Returns
/// - `Vec<seat_map::ActiveModel>` - 182 seats in seeding order, ids not set
pub fn wide_body(aircraft_type_id: i32) -> Vec<seat_map::ActiveModel> {
    let mut layout = LayoutWriter::new(aircraft_type_id);
    layout.crew_area("PL", WIDE_BODY_PILOT_SEATS, SeatType::Pilot);
    layout.crew_area("CR", WIDE_BODY_CREW_SEATS, SeatType::Crew);
    layout.cabin("ABCDEFGHIJ", &[(1, 2), (3, 4)], SeatType::Business);
    layout.cabin("ABCDEFGHIJKLMNO", &[(1, 2), (3, 6), (7, 8)], SeatType::Economy);
    layout.seats
}
