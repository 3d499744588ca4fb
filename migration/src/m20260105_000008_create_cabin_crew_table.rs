use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CabinCrew::Table)
                    .if_not_exists()
                    .col(pk_auto(CabinCrew::Id))
                    .col(string(CabinCrew::Name))
                    .col(integer(CabinCrew::Age))
                    .col(string(CabinCrew::Nationality))
                    .col(string_len(CabinCrew::AttendantType, 16))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CabinCrew::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CabinCrew {
    Table,
    Id,
    Name,
    Age,
    Nationality,
    AttendantType,
}
