use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight_menu_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub flight_id: i32,
    pub position: i32,
    pub dish: String,
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
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
