use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::SeatType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "seat_map")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub aircraft_type_id: i32,
    pub seat_row: String,
    pub seat_number: String,
    pub seat_type: SeatType,
    pub seat_group: Option<i32>,
    pub seat_group_size: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::aircraft_type::Entity",
        from = "Column::AircraftTypeId",
        to = "super::aircraft_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AircraftType,
    #[sea_orm(has_many = "super::flight_seat_assignment::Entity")]
    FlightSeatAssignment,
}

impl Related<super::aircraft_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AircraftType.def()
    }
}

impl Related<super::flight_seat_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightSeatAssignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
