//! SeaORM Entity for the parcels table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// payment_status values; unpaid flips to paid exactly once per parcel.
pub const PAYMENT_STATUS_UNPAID: &str = "unpaid";
pub const PAYMENT_STATUS_PAID: &str = "paid";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "parcels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub parcel_type: String,
    pub sender_name: String,
    pub sender_address: String,
    pub receiver_name: String,
    pub receiver_address: String,
    pub receiver_contact: Option<String>,
    pub weight_kg: Option<f64>,
    pub cost: i64,
    pub created_by: String,
    pub creation_date: DateTimeWithTimeZone,
    pub payment_status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
