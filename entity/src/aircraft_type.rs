use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "aircraft_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub seat_count: i32,
    pub crew_limit: i32,
    pub passenger_limit: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::seat_map::Entity")]
    SeatMap,
    #[sea_orm(has_many = "super::standard_menu_item::Entity")]
    StandardMenuItem,
}

impl Related<super::seat_map::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatMap.def()
    }
}

impl Related<super::standard_menu_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StandardMenuItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
