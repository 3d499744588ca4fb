use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::SeaterType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight_seat_assignment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub flight_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub seat_map_id: i32,
    pub seater_type: SeaterType,
    /// Pilot, cabin crew or passenger id depending on `seater_type`.
    pub seater_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flight::Entity",
        from = "Column::FlightId",
        to = "super::flight::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Flight,
    #[sea_orm(
        belongs_to = "super::seat_map::Entity",
        from = "Column::SeatMapId",
        to = "super::seat_map::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    SeatMap,
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl Related<super::seat_map::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatMap.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
