use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "flight")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub airline_code: String,
    pub departure_time: DateTimeUtc,
    pub duration_minutes: i32,
    pub distance_km: f64,
    pub aircraft_type_id: i32,
    pub source_airport_id: Option<i32>,
    pub destination_airport_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::aircraft_type::Entity",
        from = "Column::AircraftTypeId",
        to = "super::aircraft_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    AircraftType,
    #[sea_orm(
        belongs_to = "super::airport::Entity",
        from = "Column::SourceAirportId",
        to = "super::airport::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    SourceAirport,
    #[sea_orm(
        belongs_to = "super::airport::Entity",
        from = "Column::DestinationAirportId",
        to = "super::airport::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    DestinationAirport,
    #[sea_orm(has_many = "super::flight_menu_item::Entity")]
    FlightMenuItem,
    #[sea_orm(has_many = "super::flight_seat_assignment::Entity")]
    FlightSeatAssignment,
}

impl Related<super::aircraft_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AircraftType.def()
    }
}

impl Related<super::flight_menu_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightMenuItem.def()
    }
}

impl Related<super::flight_seat_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightSeatAssignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
