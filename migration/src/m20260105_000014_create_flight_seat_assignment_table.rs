use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000004_create_seat_map_table::SeatMap,
    m20260105_000005_create_flight_table::Flight,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlightSeatAssignment::Table)
                    .if_not_exists()
                    .col(integer(FlightSeatAssignment::FlightId))
                    .col(integer(FlightSeatAssignment::SeatMapId))
                    .col(string_len(FlightSeatAssignment::SeaterType, 32))
                    .col(integer(FlightSeatAssignment::SeaterId))
                    .primary_key(
                        Index::create()
                            .col(FlightSeatAssignment::FlightId)
                            .col(FlightSeatAssignment::SeatMapId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_seat_assignment_flight_id")
                            .from(FlightSeatAssignment::Table, FlightSeatAssignment::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_seat_assignment_seat_map_id")
                            .from(FlightSeatAssignment::Table, FlightSeatAssignment::SeatMapId)
                            .to(SeatMap::Table, SeatMap::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One seat per person per flight
        manager
            .create_index(
                Index::create()
                    .name("idx_flight_seat_assignment_seater_unique")
                    .table(FlightSeatAssignment::Table)
                    .col(FlightSeatAssignment::FlightId)
                    .col(FlightSeatAssignment::SeaterType)
                    .col(FlightSeatAssignment::SeaterId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_flight_seat_assignment_seater_unique")
                    .table(FlightSeatAssignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FlightSeatAssignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FlightSeatAssignment {
    Table,
    FlightId,
    SeatMapId,
    SeaterType,
    SeaterId,
}
