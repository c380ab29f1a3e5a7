use std::env;

use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parceltrack_backend::routes::create_router;
use parceltrack_backend::services::firebase_auth::{FirebaseAuthService, GOOGLE_JWK_URL};
use parceltrack_backend::services::stripe::{StripeService, STRIPE_API_BASE_URL};
use parceltrack_backend::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,parceltrack_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Required credentials; refuse to start without them
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let stripe_secret_key = env::var("STRIPE_SECRET_KEY").expect("STRIPE_SECRET_KEY must be set");
    let firebase_project_id =
        env::var("FIREBASE_PROJECT_ID").expect("FIREBASE_PROJECT_ID must be set");
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());

    // Connect to database
    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    // Run migrations
    tracing::info!("Running migrations...");
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let state = AppState {
        db,
        stripe: StripeService::new(stripe_secret_key, STRIPE_API_BASE_URL.to_string()),
        firebase: FirebaseAuthService::new(firebase_project_id, GOOGLE_JWK_URL.to_string()),
    };

    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
