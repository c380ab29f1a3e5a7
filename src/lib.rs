// src/lib.rs

use sea_orm::DatabaseConnection;
use services::{firebase_auth::FirebaseAuthService, stripe::StripeService};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub stripe: StripeService,
    pub firebase: FirebaseAuthService,
}

pub mod entities {
    pub mod prelude;
    pub mod parcels;
    pub mod payments;
    pub mod riders;
    pub mod tracking_events;
    pub mod users;
}

pub mod services {
    pub mod firebase_auth;
    pub mod stripe;
}

pub mod auth;
pub mod handlers;
pub mod models;
pub mod routes;
