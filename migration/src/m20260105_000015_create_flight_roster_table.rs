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
                    .table(FlightRoster::Table)
                    .if_not_exists()
                    .col(pk_auto(FlightRoster::Id))
                    .col(integer_uniq(FlightRoster::FlightId))
                    .col(
                        timestamp_with_time_zone(FlightRoster::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_roster_flight_id")
                            .from(FlightRoster::Table, FlightRoster::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlightRoster::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FlightRoster {
    Table,
    Id,
    FlightId,
    CreatedAt,
}
