use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::PersonKind;

/// A flight a pilot, cabin crew member or passenger is committed to.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "scheduled_flight")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub person_kind: PersonKind,
    pub person_id: i32,
    pub flight_id: i32,
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
