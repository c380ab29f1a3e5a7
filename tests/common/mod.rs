use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use parceltrack_backend::services::firebase_auth::FirebaseAuthService;
use parceltrack_backend::services::stripe::StripeService;
use parceltrack_backend::AppState;

/// Set up an in-memory database with the full schema applied.
/// Capped at one pooled connection so the database outlives every checkout.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// AppState whose external services point at an unroutable endpoint, so no
/// test ever reaches the real payment gateway or identity provider.
pub fn test_app_state(db: DatabaseConnection) -> AppState {
    AppState {
        db,
        stripe: StripeService::new(
            "sk_test_dummy".to_string(),
            "http://127.0.0.1:9".to_string(),
        ),
        firebase: FirebaseAuthService::new(
            "demo-parceltrack".to_string(),
            "http://127.0.0.1:9".to_string(),
        ),
    }
}
