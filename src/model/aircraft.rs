//! Aircraft classes and their crew seat layouts.

use crate::{error::roster::RosterError, model::role::Role};

/// Body class of an aircraft type; drives quotas and the crew seat layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AircraftClass {
    /// Boeing 737 (type 1) and Airbus A320 (type 2).
    NarrowBody,
    /// Boeing 777 (type 3).
    WideBody,
}

impl AircraftClass {
    /// Resolves the class of a supported aircraft type id.
    ///
    /// # Arguments
    /// - `aircraft_type_id` - Aircraft type id
    ///
    /// # Returns
    /// - `Ok(AircraftClass)` - Class of the type
    /// - `Err(RosterError::InvalidAircraftType)` - Type has no quota table or layout
    pub fn from_type_id(aircraft_type_id: i32) -> Result<Self, RosterError> {
        match aircraft_type_id {
            1 | 2 => Ok(Self::NarrowBody),
            3 => Ok(Self::WideBody),
            other => Err(RosterError::InvalidAircraftType(other)),
        }
    }

    pub fn seat_layout(self) -> SeatLayout {
        match self {
            Self::NarrowBody => SeatLayout::NARROW_BODY,
            Self::WideBody => SeatLayout::WIDE_BODY,
        }
    }
}

/// Block of consecutive crew-area seats reserved for one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSlot {
    /// Index of the first seat, counted from the first pilot seat of the type.
    pub offset: usize,
    pub capacity: usize,
}

/// Role to seat-block table for the pilot and crew seats of an aircraft class.
///
/// Crew-area seats are the pilot seats followed by the crew seats of a type, in seat
/// map id order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatLayout {
    slots: [(Role, RoleSlot); 6],
}

const fn slot(offset: usize, capacity: usize) -> RoleSlot {
    RoleSlot { offset, capacity }
}

impl SeatLayout {
    pub const NARROW_BODY: SeatLayout = SeatLayout {
        slots: [
            (Role::SeniorPilot, slot(0, 1)),
            (Role::JuniorPilot, slot(1, 1)),
            (Role::TraineePilot, slot(2, 2)),
            (Role::ChiefCabinCrew, slot(4, 2)),
            (Role::RegularCabinCrew, slot(6, 8)),
            (Role::ChefCabinCrew, slot(14, 2)),
        ],
    };

    pub const WIDE_BODY: SeatLayout = SeatLayout {
        slots: [
            (Role::SeniorPilot, slot(0, 2)),
            (Role::JuniorPilot, slot(2, 2)),
            (Role::TraineePilot, slot(4, 2)),
            (Role::ChiefCabinCrew, slot(6, 4)),
            (Role::RegularCabinCrew, slot(10, 10)),
            (Role::ChefCabinCrew, slot(20, 2)),
        ],
    };

    /// Seat block of a crew role; `None` for passengers.
    pub fn slot(&self, role: Role) -> Option<RoleSlot> {
        self.slots
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, slot)| *slot)
    }

    /// Number of crew-area seats the layout addresses.
    pub fn crew_seat_count(&self) -> usize {
        self.slots
            .iter()
            .map(|(_, slot)| slot.offset + slot.capacity)
            .max()
            .unwrap_or(0)
    }

    /// Checks the layout against the crew-area seat inventory of an aircraft type.
    ///
    /// # Arguments
    /// - `crew_seats` - Number of pilot plus crew seats on the type's seat map
    ///
    /// # Returns
    /// - `Ok(())` - Inventory matches the layout
    /// - `Err(RosterError::InvalidSeatMap)` - Inventory differs from the layout
    pub fn validate(&self, crew_seats: usize) -> Result<(), RosterError> {
        let expected = self.crew_seat_count();
        if crew_seats != expected {
            return Err(RosterError::InvalidSeatMap(format!(
                "expected {expected} pilot and crew seats, found {crew_seats}"
            )));
        }
        Ok(())
    }
}
