use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000008_create_cabin_crew_table::CabinCrew;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChefDish::Table)
                    .if_not_exists()
                    .col(pk_auto(ChefDish::Id))
                    .col(integer(ChefDish::CabinCrewId))
                    .col(string(ChefDish::Dish))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chef_dish_cabin_crew_id")
                            .from(ChefDish::Table, ChefDish::CabinCrewId)
                            .to(CabinCrew::Table, CabinCrew::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChefDish::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChefDish {
    Table,
    Id,
    CabinCrewId,
    Dish,
}
