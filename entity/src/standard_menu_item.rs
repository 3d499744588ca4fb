use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "standard_menu_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub aircraft_type_id: i32,
    pub position: i32,
    pub dish: String,
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
}

impl Related<super::aircraft_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AircraftType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
