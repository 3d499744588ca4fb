use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000011_create_passenger_table::Passenger;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PassengerAffiliation::Table)
                    .if_not_exists()
                    .col(integer(PassengerAffiliation::PassengerId))
                    .col(integer(PassengerAffiliation::AffiliatedPassengerId))
                    .primary_key(
                        Index::create()
                            .col(PassengerAffiliation::PassengerId)
                            .col(PassengerAffiliation::AffiliatedPassengerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_passenger_affiliation_passenger_id")
                            .from(PassengerAffiliation::Table, PassengerAffiliation::PassengerId)
                            .to(Passenger::Table, Passenger::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_passenger_affiliation_affiliated_passenger_id")
                            .from(
                                PassengerAffiliation::Table,
                                PassengerAffiliation::AffiliatedPassengerId,
                            )
                            .to(Passenger::Table, Passenger::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PassengerAffiliation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PassengerAffiliation {
    Table,
    PassengerId,
    AffiliatedPassengerId,
}
