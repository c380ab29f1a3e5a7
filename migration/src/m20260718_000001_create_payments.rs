//! Migration to create the payments table
//!
//! Payment rows are insert-only; they are written in the same transaction
//! that flips the parcel's payment_status to paid.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(pk_auto(Payments::Id))
                    .col(integer(Payments::ParcelId).not_null())
                    .col(string(Payments::Email).not_null())
                    .col(big_integer(Payments::Amount).not_null())
                    .col(string(Payments::PaymentMethod).not_null())
                    .col(string(Payments::TransactionId).not_null())
                    .col(timestamp_with_time_zone(Payments::PaidAt).not_null())
                    .col(string(Payments::PaidAtString).not_null())
                    .to_owned(),
            )
            .await?;

        // Index for the per-user payment history (filter by email, newest first)
        manager
            .create_index(
                Index::create()
                    .name("idx_payments_email")
                    .table(Payments::Table)
                    .col(Payments::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_payments_parcel_id")
                    .table(Payments::Table)
                    .col(Payments::ParcelId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Payments {
    Table,
    Id,
    ParcelId,
    Email,
    Amount,
    PaymentMethod,
    TransactionId,
    PaidAt,
    PaidAtString,
}
