use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Passenger::Table)
                    .if_not_exists()
                    .col(pk_auto(Passenger::Id))
                    .col(string(Passenger::Name))
                    .col(integer(Passenger::Age))
                    .col(string(Passenger::Nationality))
                    .col(integer_null(Passenger::ParentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_passenger_parent_id")
                            .from(Passenger::Table, Passenger::ParentId)
                            .to(Passenger::Table, Passenger::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Passenger::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Passenger {
    Table,
    Id,
    Name,
    Age,
    Nationality,
    ParentId,
}
