use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum SeniorityLevel {
    #[sea_orm(string_value = "senior")]
    Senior,
    #[sea_orm(string_value = "junior")]
    Junior,
    #[sea_orm(string_value = "trainee")]
    Trainee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum AttendantType {
    #[sea_orm(string_value = "chief")]
    Chief,
    #[sea_orm(string_value = "regular")]
    Regular,
    #[sea_orm(string_value = "chef")]
    Chef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum SeatType {
    #[sea_orm(string_value = "pilot")]
    Pilot,
    #[sea_orm(string_value = "crew")]
    Crew,
    #[sea_orm(string_value = "business")]
    Business,
    #[sea_orm(string_value = "economy")]
    Economy,
}

/// Role under which a person occupies a seat on a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum SeaterType {
    #[sea_orm(string_value = "SeniorPilot")]
    SeniorPilot,
    #[sea_orm(string_value = "JuniorPilot")]
    JuniorPilot,
    #[sea_orm(string_value = "TraineePilot")]
    TraineePilot,
    #[sea_orm(string_value = "ChiefCabinCrew")]
    ChiefCabinCrew,
    #[sea_orm(string_value = "RegularCabinCrew")]
    RegularCabinCrew,
    #[sea_orm(string_value = "ChefCabinCrew")]
    ChefCabinCrew,
    #[sea_orm(string_value = "Passenger")]
    Passenger,
}

/// Registry a scheduled flight entry's `person_id` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PersonKind {
    #[sea_orm(string_value = "pilot")]
    Pilot,
    #[sea_orm(string_value = "cabin_crew")]
    CabinCrew,
    #[sea_orm(string_value = "passenger")]
    Passenger,
}
