//! Migration to create the riders table

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Riders::Table)
                    .if_not_exists()
                    .col(pk_auto(Riders::Id))
                    .col(string(Riders::Name).not_null())
                    .col(string(Riders::Email).not_null())
                    .col(string(Riders::Phone).not_null())
                    .col(string_null(Riders::Region))
                    .col(string(Riders::Status).not_null())
                    .col(
                        timestamp_with_time_zone(Riders::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for the pending/active listings
        manager
            .create_index(
                Index::create()
                    .name("idx_riders_status")
                    .table(Riders::Table)
                    .col(Riders::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Riders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Riders {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Region,
    Status,
    CreatedAt,
}
