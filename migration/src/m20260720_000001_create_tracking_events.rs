//! Migration to create the tracking_events table (append-only status log)

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrackingEvents::Table)
                    .if_not_exists()
                    .col(pk_auto(TrackingEvents::Id))
                    .col(string(TrackingEvents::TrackingId).not_null())
                    .col(integer(TrackingEvents::ParcelId).not_null())
                    .col(string(TrackingEvents::Status).not_null())
                    .col(string(TrackingEvents::Message).not_null())
                    .col(timestamp_with_time_zone(TrackingEvents::Time).not_null())
                    .col(string_null(TrackingEvents::UpdatedBy))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tracking_events_parcel_id")
                    .table(TrackingEvents::Table)
                    .col(TrackingEvents::ParcelId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrackingEvents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TrackingEvents {
    Table,
    Id,
    TrackingId,
    ParcelId,
    Status,
    Message,
    Time,
    UpdatedBy,
}
