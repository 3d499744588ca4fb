//! Roster roles.

use std::fmt;

use serde::{Deserialize, Serialize};

use entity::sea_orm_active_enums::{AttendantType, PersonKind, SeaterType, SeniorityLevel};

/// A position on a flight roster.
///
/// Each role maps to exactly one seater type on the seat assignment record and to one
/// candidate filter: pilots by seniority, cabin crew by attendant type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    SeniorPilot,
    JuniorPilot,
    TraineePilot,
    ChiefCabinCrew,
    RegularCabinCrew,
    ChefCabinCrew,
    Passenger,
}

impl Role {
    /// Crew roles in the order they are selected and seated.
    pub const CREW: [Role; 6] = [
        Role::SeniorPilot,
        Role::JuniorPilot,
        Role::TraineePilot,
        Role::ChiefCabinCrew,
        Role::RegularCabinCrew,
        Role::ChefCabinCrew,
    ];

    /// Roles that may be filled with fewer people than their quota.
    pub fn is_optional(self) -> bool {
        matches!(self, Role::TraineePilot | Role::ChefCabinCrew)
    }

    pub fn seater_type(self) -> SeaterType {
        match self {
            Role::SeniorPilot => SeaterType::SeniorPilot,
            Role::JuniorPilot => SeaterType::JuniorPilot,
            Role::TraineePilot => SeaterType::TraineePilot,
            Role::ChiefCabinCrew => SeaterType::ChiefCabinCrew,
            Role::RegularCabinCrew => SeaterType::RegularCabinCrew,
            Role::ChefCabinCrew => SeaterType::ChefCabinCrew,
            Role::Passenger => SeaterType::Passenger,
        }
    }

    pub fn from_seater_type(seater_type: SeaterType) -> Self {
        match seater_type {
            SeaterType::SeniorPilot => Role::SeniorPilot,
            SeaterType::JuniorPilot => Role::JuniorPilot,
            SeaterType::TraineePilot => Role::TraineePilot,
            SeaterType::ChiefCabinCrew => Role::ChiefCabinCrew,
            SeaterType::RegularCabinCrew => Role::RegularCabinCrew,
            SeaterType::ChefCabinCrew => Role::ChefCabinCrew,
            SeaterType::Passenger => Role::Passenger,
        }
    }

    /// Which person table the role's ids refer to.
    pub fn person_kind(self) -> PersonKind {
        match self {
            Role::SeniorPilot | Role::JuniorPilot | Role::TraineePilot => PersonKind::Pilot,
            Role::ChiefCabinCrew | Role::RegularCabinCrew | Role::ChefCabinCrew => {
                PersonKind::CabinCrew
            }
            Role::Passenger => PersonKind::Passenger,
        }
    }

    pub fn seniority(self) -> Option<SeniorityLevel> {
        match self {
            Role::SeniorPilot => Some(SeniorityLevel::Senior),
            Role::JuniorPilot => Some(SeniorityLevel::Junior),
            Role::TraineePilot => Some(SeniorityLevel::Trainee),
            _ => None,
        }
    }

    pub fn attendant_type(self) -> Option<AttendantType> {
        match self {
            Role::ChiefCabinCrew => Some(AttendantType::Chief),
            Role::RegularCabinCrew => Some(AttendantType::Regular),
            Role::ChefCabinCrew => Some(AttendantType::Chef),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::SeniorPilot => "senior pilot",
            Role::JuniorPilot => "junior pilot",
            Role::TraineePilot => "trainee pilot",
            Role::ChiefCabinCrew => "chief cabin crew",
            Role::RegularCabinCrew => "regular cabin crew",
            Role::ChefCabinCrew => "chef cabin crew",
            Role::Passenger => "passenger",
        };
        f.write_str(name)
    }
}
