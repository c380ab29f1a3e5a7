//! SeaORM Entity for the payments table
//!
//! Rows are immutable once written; amount is in the smallest currency unit.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub parcel_id: i32,
    pub email: String,
    pub amount: i64,
    pub payment_method: String,
    pub transaction_id: String,
    pub paid_at: DateTimeWithTimeZone,
    pub paid_at_string: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
