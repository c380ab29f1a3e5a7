mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    routing::get,
    Extension, Router,
};
use chrono::{Duration, FixedOffset, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde_json::{json, Value};
use tower::ServiceExt;

use parceltrack_backend::auth::AuthUser;
use parceltrack_backend::entities::{parcels, payments, prelude::*};
use parceltrack_backend::handlers;
use parceltrack_backend::routes::create_router;

use crate::common::{setup_test_db, test_app_state};

async fn seed_parcel(db: &DatabaseConnection, created_by: &str) -> i32 {
    let now = Utc::now().with_timezone(&FixedOffset::east_opt(0).unwrap());

    let parcel = parcels::ActiveModel {
        title: Set("Box of books".to_string()),
        parcel_type: Set("non-document".to_string()),
        sender_name: Set("Sender".to_string()),
        sender_address: Set("12 Sender Road".to_string()),
        receiver_name: Set("Receiver".to_string()),
        receiver_address: Set("34 Receiver Lane".to_string()),
        receiver_contact: Set(None),
        weight_kg: Set(Some(2.5)),
        cost: Set(1500),
        created_by: Set(created_by.to_string()),
        creation_date: Set(now),
        payment_status: Set(parcels::PAYMENT_STATUS_UNPAID.to_string()),
        ..Default::default()
    };

    parcel.insert(db).await.unwrap().id
}

fn record_payment_request(parcel_id: i32, transaction_id: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/payments")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "parcelId": parcel_id,
                "email": "a@x.com",
                "amount": 500,
                "paymentMethod": "card",
                "transactionId": transaction_id,
            })
            .to_string(),
        ))
        .unwrap()
}

/// A first payment flips the parcel to paid and stores exactly one row.
#[tokio::test]
async fn record_payment_marks_parcel_paid_and_stores_one_row() {
    let db = setup_test_db().await;
    let parcel_id = seed_parcel(&db, "a@x.com").await;
    let app = create_router(test_app_state(db.clone()));

    let response = app
        .oneshot(record_payment_request(parcel_id, "tx1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json.get("insertedId").is_some());

    let parcel = Parcels::find_by_id(parcel_id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(parcel.payment_status, parcels::PAYMENT_STATUS_PAID);

    let rows = Payments::find()
        .filter(payments::Column::ParcelId.eq(parcel_id))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amount, 500);
    assert_eq!(rows[0].transaction_id, "tx1");
}

/// A duplicate payment is a conflict: status unchanged, no second row.
#[tokio::test]
async fn duplicate_payment_conflicts_and_stores_nothing() {
    let db = setup_test_db().await;
    let parcel_id = seed_parcel(&db, "a@x.com").await;
    let app = create_router(test_app_state(db.clone()));

    let first = app
        .clone()
        .oneshot(record_payment_request(parcel_id, "tx1"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(record_payment_request(parcel_id, "tx1"))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);

    let parcel = Parcels::find_by_id(parcel_id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(parcel.payment_status, parcels::PAYMENT_STATUS_PAID);

    let rows = Payments::find()
        .filter(payments::Column::ParcelId.eq(parcel_id))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}

/// Paying an unknown parcel reports not-found and writes nothing.
#[tokio::test]
async fn payment_for_unknown_parcel_is_not_found() {
    let db = setup_test_db().await;
    let app = create_router(test_app_state(db.clone()));

    let response = app
        .oneshot(record_payment_request(9999, "tx1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let rows = Payments::find().all(&db).await.unwrap();
    assert!(rows.is_empty());
}

/// The payment history is scoped to the caller's email and sorted newest
/// first; asking for someone else's history is rejected.
#[tokio::test]
async fn list_payments_is_scoped_and_sorted() {
    let db = setup_test_db().await;
    let base = Utc::now().with_timezone(&FixedOffset::east_opt(0).unwrap());

    for (i, tx) in ["tx-old", "tx-mid", "tx-new"].iter().enumerate() {
        let paid_at = base + Duration::minutes(i as i64);
        payments::ActiveModel {
            parcel_id: Set(1),
            email: Set("a@x.com".to_string()),
            amount: Set(100),
            payment_method: Set("card".to_string()),
            transaction_id: Set(tx.to_string()),
            paid_at: Set(paid_at),
            paid_at_string: Set(paid_at.to_rfc3339()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
    }

    // A row owned by someone else must never show up
    let paid_at = base + Duration::minutes(10);
    payments::ActiveModel {
        parcel_id: Set(2),
        email: Set("b@x.com".to_string()),
        amount: Set(900),
        payment_method: Set("card".to_string()),
        transaction_id: Set("tx-other".to_string()),
        paid_at: Set(paid_at),
        paid_at_string: Set(paid_at.to_rfc3339()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    // Stand-in for a request that already passed the bearer gate
    let app = Router::new()
        .route("/payments", get(handlers::payment::list_payments))
        .layer(Extension(AuthUser {
            email: "a@x.com".to_string(),
        }))
        .with_state(test_app_state(db.clone()));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/payments?email=a@x.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    let records = json.as_array().unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["transactionId"], "tx-new");
    assert_eq!(records[1]["transactionId"], "tx-mid");
    assert_eq!(records[2]["transactionId"], "tx-old");
    for record in records {
        assert_eq!(record["email"], "a@x.com");
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/payments?email=b@x.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Every gated route answers 401 when no token is presented.
#[tokio::test]
async fn protected_routes_require_a_token() {
    let db = setup_test_db().await;
    let app = create_router(test_app_state(db));

    for uri in ["/payments", "/my-parcels", "/riders/pending"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "uri: {}", uri);
    }
}

/// A token that is present but unverifiable is forbidden, not unauthorized.
#[tokio::test]
async fn malformed_bearer_token_is_forbidden() {
    let db = setup_test_db().await;
    let app = create_router(test_app_state(db));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/payments")
                .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Gateway failures surface as a 500 with the upstream message; nothing is
/// retried. The unroutable base URL stands in for a misconfigured key.
#[tokio::test]
async fn create_payment_intent_surfaces_gateway_failure() {
    let db = setup_test_db().await;
    let app = create_router(test_app_state(db));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/create-payment-intent")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "amountInCents": 1000 }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(!json["error"].as_str().unwrap().is_empty());
}
