use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cabin_crew_type_rating")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub cabin_crew_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub aircraft_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cabin_crew::Entity",
        from = "Column::CabinCrewId",
        to = "super::cabin_crew::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CabinCrew,
    #[sea_orm(
        belongs_to = "super::aircraft_type::Entity",
        from = "Column::AircraftTypeId",
        to = "super::aircraft_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AircraftType,
}

impl Related<super::cabin_crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CabinCrew.def()
    }
}

impl Related<super::aircraft_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AircraftType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
