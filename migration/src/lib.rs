pub use sea_orm_migration::prelude::*;

mod m20260715_000001_create_users;
mod m20260715_000002_create_parcels;
mod m20260716_000001_create_riders;
mod m20260718_000001_create_payments;
mod m20260720_000001_create_tracking_events;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260715_000001_create_users::Migration),
            Box::new(m20260715_000002_create_parcels::Migration),
            Box::new(m20260716_000001_create_riders::Migration),
            Box::new(m20260718_000001_create_payments::Migration),
            Box::new(m20260720_000001_create_tracking_events::Migration),
        ]
    }
}
