pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_aircraft_type_table;
mod m20260105_000002_create_standard_menu_item_table;
mod m20260105_000003_create_airport_table;
mod m20260105_000004_create_seat_map_table;
mod m20260105_000005_create_flight_table;
mod m20260105_000006_create_flight_menu_item_table;
mod m20260105_000007_create_pilot_table;
mod m20260105_000008_create_cabin_crew_table;
mod m20260105_000009_create_cabin_crew_type_rating_table;
mod m20260105_000010_create_chef_dish_table;
mod m20260105_000011_create_passenger_table;
mod m20260105_000012_create_passenger_affiliation_table;
mod m20260105_000013_create_scheduled_flight_table;
mod m20260105_000014_create_flight_seat_assignment_table;
mod m20260105_000015_create_flight_roster_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_aircraft_type_table::Migration),
            Box::new(m20260105_000002_create_standard_menu_item_table::Migration),
            Box::new(m20260105_000003_create_airport_table::Migration),
            Box::new(m20260105_000004_create_seat_map_table::Migration),
            Box::new(m20260105_000005_create_flight_table::Migration),
            Box::new(m20260105_000006_create_flight_menu_item_table::Migration),
            Box::new(m20260105_000007_create_pilot_table::Migration),
            Box::new(m20260105_000008_create_cabin_crew_table::Migration),
            Box::new(m20260105_000009_create_cabin_crew_type_rating_table::Migration),
            Box::new(m20260105_000010_create_chef_dish_table::Migration),
            Box::new(m20260105_000011_create_passenger_table::Migration),
            Box::new(m20260105_000012_create_passenger_affiliation_table::Migration),
            Box::new(m20260105_000013_create_scheduled_flight_table::Migration),
            Box::new(m20260105_000014_create_flight_seat_assignment_table::Migration),
            Box::new(m20260105_000015_create_flight_roster_table::Migration),
        ]
    }
}
