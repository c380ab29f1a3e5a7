//! Route table for the whole HTTP surface.
//!
//! Authorization is declared here in one place: the `protected` group goes
//! through the bearer-token gate, everything else is reachable without
//! credentials — including the mutating endpoints, matching the surface the
//! frontend was built against.

use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::{auth, handlers, AppState};

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/my-parcels", get(handlers::parcel::list_my_parcels))
        .route("/riders/pending", get(handlers::rider::list_pending))
        .route("/payments", get(handlers::payment::list_payments))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ));

    Router::new()
        .route("/", get(root))
        .route("/parcels", get(handlers::parcel::list_parcels))
        .route("/parcels/{id}", get(handlers::parcel::get_parcel))
        .route("/add-parcels", post(handlers::parcel::add_parcel))
        .route("/my-parcels/{id}", delete(handlers::parcel::delete_parcel))
        .route("/users", post(handlers::user::upsert_user))
        .route("/riders", post(handlers::rider::submit_application))
        .route("/riders/active", get(handlers::rider::list_active))
        .route("/riders/{id}/status", patch(handlers::rider::set_status))
        .route("/tracking", post(handlers::tracking::add_tracking_event))
        .route("/payments", post(handlers::payment::record_payment))
        .route(
            "/create-payment-intent",
            post(handlers::payment::create_payment_intent),
        )
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn root() -> &'static str {
    "Parcel delivery backend is running 🚚"
}
