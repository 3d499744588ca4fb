//! SeaORM entity models for the flight roster database.
//!
//! One module per table. Enumerated string columns live in
//! `sea_orm_active_enums` and are shared between entities.

pub mod prelude;

pub mod aircraft_type;
pub mod airport;
pub mod cabin_crew;
pub mod cabin_crew_type_rating;
pub mod chef_dish;
pub mod flight;
pub mod flight_menu_item;
pub mod flight_roster;
pub mod flight_seat_assignment;
pub mod passenger;
pub mod passenger_affiliation;
pub mod pilot;
pub mod scheduled_flight;
pub mod sea_orm_active_enums;
pub mod seat_map;
pub mod standard_menu_item;
