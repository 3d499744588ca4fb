use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000005_create_flight_table::Flight;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlightMenuItem::Table)
                    .if_not_exists()
                    .col(pk_auto(FlightMenuItem::Id))
                    .col(integer(FlightMenuItem::FlightId))
                    .col(integer(FlightMenuItem::Position))
                    .col(string(FlightMenuItem::Dish))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_menu_item_flight_id")
                            .from(FlightMenuItem::Table, FlightMenuItem::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_flight_menu_item_position_unique")
                            .col(FlightMenuItem::FlightId)
                            .col(FlightMenuItem::Position),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlightMenuItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FlightMenuItem {
    Table,
    Id,
    FlightId,
    Position,
    Dish,
}
