use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::SeniorityLevel;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pilot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub nationality: String,
    pub seniority_level: SeniorityLevel,
    /// The single aircraft type this pilot is rated for.
    pub vehicle_type_id: i32,
    /// Maximum flight distance in kilometres.
    pub allowed_range: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::aircraft_type::Entity",
        from = "Column::VehicleTypeId",
        to = "super::aircraft_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    AircraftType,
}

impl Related<super::aircraft_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AircraftType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
