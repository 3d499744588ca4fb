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
                    .table(Pilot::Table)
                    .if_not_exists()
                    .col(pk_auto(Pilot::Id))
                    .col(string(Pilot::Name))
                    .col(integer(Pilot::Age))
                    .col(string(Pilot::Nationality))
                    .col(string_len(Pilot::SeniorityLevel, 16))
                    .col(integer(Pilot::VehicleTypeId))
                    .col(integer(Pilot::AllowedRange))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pilot_vehicle_type_id")
                            .from(Pilot::Table, Pilot::VehicleTypeId)
                            .to(AircraftType::Table, AircraftType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pilot_seniority_vehicle_type")
                    .table(Pilot::Table)
                    .col(Pilot::SeniorityLevel)
                    .col(Pilot::VehicleTypeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_pilot_seniority_vehicle_type")
                    .table(Pilot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Pilot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pilot {
    Table,
    Id,
    Name,
    Age,
    Nationality,
    SeniorityLevel,
    VehicleTypeId,
    AllowedRange,
}
