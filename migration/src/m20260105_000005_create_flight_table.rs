use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_aircraft_type_table::AircraftType,
    m20260105_000003_create_airport_table::Airport,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(pk_auto(Flight::Id))
                    .col(string_len(Flight::AirlineCode, 2))
                    .col(timestamp_with_time_zone(Flight::DepartureTime))
                    .col(integer(Flight::DurationMinutes))
                    .col(double(Flight::DistanceKm))
                    .col(integer(Flight::AircraftTypeId))
                    .col(integer_null(Flight::SourceAirportId))
                    .col(integer_null(Flight::DestinationAirportId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_aircraft_type_id")
                            .from(Flight::Table, Flight::AircraftTypeId)
                            .to(AircraftType::Table, AircraftType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_source_airport_id")
                            .from(Flight::Table, Flight::SourceAirportId)
                            .to(Airport::Table, Airport::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_destination_airport_id")
                            .from(Flight::Table, Flight::DestinationAirportId)
                            .to(Airport::Table, Airport::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flight::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Flight {
    Table,
    Id,
    AirlineCode,
    DepartureTime,
    DurationMinutes,
    DistanceKm,
    AircraftTypeId,
    SourceAirportId,
    DestinationAirportId,
}
