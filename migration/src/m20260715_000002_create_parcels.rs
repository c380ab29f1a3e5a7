//! Migration to create the parcels table

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Parcels::Table)
                    .if_not_exists()
                    .col(pk_auto(Parcels::Id))
                    .col(string(Parcels::Title).not_null())
                    .col(string(Parcels::ParcelType).not_null())
                    .col(string(Parcels::SenderName).not_null())
                    .col(string(Parcels::SenderAddress).not_null())
                    .col(string(Parcels::ReceiverName).not_null())
                    .col(string(Parcels::ReceiverAddress).not_null())
                    .col(string_null(Parcels::ReceiverContact))
                    .col(double_null(Parcels::WeightKg))
                    .col(big_integer(Parcels::Cost).not_null())
                    .col(string(Parcels::CreatedBy).not_null())
                    .col(timestamp_with_time_zone(Parcels::CreationDate).not_null())
                    .col(string(Parcels::PaymentStatus).not_null().default("unpaid"))
                    .to_owned(),
            )
            .await?;

        // Index for the my-parcels listing (filter by creator, newest first)
        manager
            .create_index(
                Index::create()
                    .name("idx_parcels_created_by")
                    .table(Parcels::Table)
                    .col(Parcels::CreatedBy)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Parcels::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Parcels {
    Table,
    Id,
    Title,
    ParcelType,
    SenderName,
    SenderAddress,
    ReceiverName,
    ReceiverAddress,
    ReceiverContact,
    WeightKg,
    Cost,
    CreatedBy,
    CreationDate,
    PaymentStatus,
}
