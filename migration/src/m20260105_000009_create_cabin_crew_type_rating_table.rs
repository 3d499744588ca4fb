use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_aircraft_type_table::AircraftType,
    m20260105_000008_create_cabin_crew_table::CabinCrew,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CabinCrewTypeRating::Table)
                    .if_not_exists()
                    .col(integer(CabinCrewTypeRating::CabinCrewId))
                    .col(integer(CabinCrewTypeRating::AircraftTypeId))
                    .primary_key(
                        Index::create()
                            .col(CabinCrewTypeRating::CabinCrewId)
                            .col(CabinCrewTypeRating::AircraftTypeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cabin_crew_type_rating_cabin_crew_id")
                            .from(CabinCrewTypeRating::Table, CabinCrewTypeRating::CabinCrewId)
                            .to(CabinCrew::Table, CabinCrew::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cabin_crew_type_rating_aircraft_type_id")
                            .from(
                                CabinCrewTypeRating::Table,
                                CabinCrewTypeRating::AircraftTypeId,
                            )
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
            .drop_table(Table::drop().table(CabinCrewTypeRating::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CabinCrewTypeRating {
    Table,
    CabinCrewId,
    AircraftTypeId,
}
