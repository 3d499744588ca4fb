use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::AttendantType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cabin_crew")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub nationality: String,
    pub attendant_type: AttendantType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cabin_crew_type_rating::Entity")]
    TypeRating,
    #[sea_orm(has_many = "super::chef_dish::Entity")]
    ChefDish,
}

impl Related<super::cabin_crew_type_rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TypeRating.def()
    }
}

impl Related<super::chef_dish::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChefDish.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
