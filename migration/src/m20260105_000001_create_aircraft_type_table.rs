use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AircraftType::Table)
                    .if_not_exists()
                    .col(pk_auto(AircraftType::Id))
                    .col(string(AircraftType::Name))
                    .col(integer(AircraftType::SeatCount))
                    .col(integer(AircraftType::CrewLimit))
                    .col(integer(AircraftType::PassengerLimit))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AircraftType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AircraftType {
    Table,
    Id,
    Name,
    SeatCount,
    CrewLimit,
    PassengerLimit,
}
