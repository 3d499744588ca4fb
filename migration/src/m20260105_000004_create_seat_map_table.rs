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
                    .table(SeatMap::Table)
                    .if_not_exists()
                    .col(pk_auto(SeatMap::Id))
                    .col(integer(SeatMap::AircraftTypeId))
                    .col(string_len(SeatMap::SeatRow, 2))
                    .col(string_len(SeatMap::SeatNumber, 3))
                    .col(string_len(SeatMap::SeatType, 16))
                    .col(integer_null(SeatMap::SeatGroup))
                    .col(integer_null(SeatMap::SeatGroupSize))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seat_map_aircraft_type_id")
                            .from(SeatMap::Table, SeatMap::AircraftTypeId)
                            .to(AircraftType::Table, AircraftType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_seat_map_aircraft_type_seat_type")
                    .table(SeatMap::Table)
                    .col(SeatMap::AircraftTypeId)
                    .col(SeatMap::SeatType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_seat_map_aircraft_type_seat_type")
                    .table(SeatMap::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SeatMap::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SeatMap {
    Table,
    Id,
    AircraftTypeId,
    SeatRow,
    SeatNumber,
    SeatType,
    SeatGroup,
    SeatGroupSize,
}
