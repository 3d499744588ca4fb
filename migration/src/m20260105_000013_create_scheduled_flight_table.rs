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
                    .table(ScheduledFlight::Table)
                    .if_not_exists()
                    .col(pk_auto(ScheduledFlight::Id))
                    .col(string_len(ScheduledFlight::PersonKind, 16))
                    .col(integer(ScheduledFlight::PersonId))
                    .col(integer(ScheduledFlight::FlightId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scheduled_flight_flight_id")
                            .from(ScheduledFlight::Table, ScheduledFlight::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Availability checks look schedules up by person
        manager
            .create_index(
                Index::create()
                    .name("idx_scheduled_flight_person")
                    .table(ScheduledFlight::Table)
                    .col(ScheduledFlight::PersonKind)
                    .col(ScheduledFlight::PersonId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_scheduled_flight_person")
                    .table(ScheduledFlight::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ScheduledFlight::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ScheduledFlight {
    Table,
    Id,
    PersonKind,
    PersonId,
    FlightId,
}
