//! Seat-together links between passengers, stored in both directions.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "passenger_affiliation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub passenger_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub affiliated_passenger_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::passenger::Entity",
        from = "Column::PassengerId",
        to = "super::passenger::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Passenger,
    #[sea_orm(
        belongs_to = "super::passenger::Entity",
        from = "Column::AffiliatedPassengerId",
        to = "super::passenger::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AffiliatedPassenger,
}

impl ActiveModelBehavior for ActiveModel {}
