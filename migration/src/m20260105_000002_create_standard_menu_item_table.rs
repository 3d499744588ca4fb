use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_aircraft_type_table::AircraftType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StandardMenuItem::Table)
                    .if_not_exists()
                    .col(pk_auto(StandardMenuItem::Id))
                    .col(integer(StandardMenuItem::AircraftTypeId))
                    .col(integer(StandardMenuItem::Position))
                    .col(string(StandardMenuItem::Dish))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_standard_menu_item_aircraft_type_id")
                            .from(StandardMenuItem::Table, StandardMenuItem::AircraftTypeId)
                            .to(AircraftType::Table, AircraftType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StandardMenuItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StandardMenuItem {
    Table,
    Id,
    AircraftTypeId,
    Position,
    Dish,
}
