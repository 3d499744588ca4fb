use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "chef_dish")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cabin_crew_id: i32,
    pub dish: String,
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
}

impl Related<super::cabin_crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CabinCrew.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
