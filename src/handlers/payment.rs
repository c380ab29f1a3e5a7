//! Payment recording and listing, plus payment-intent creation.
//!
//! Recording a payment flips the parcel to paid and writes the payment row
//! in one database transaction, so a parcel can never end up paid without a
//! matching payment record (or vice versa).

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{FixedOffset, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{error, info, warn};

use crate::auth::AuthUser;
use crate::entities::{parcels, payments, prelude::*};
use crate::models::parcel::ErrorResponse;
use crate::models::payment::{
    CreatePaymentIntentRequest, CreatePaymentIntentResponse, ListPaymentsQuery, PaymentRecord,
    RecordPaymentRequest, RecordPaymentResponse,
};
use crate::AppState;

pub async fn record_payment(
    State(state): State<AppState>,
    Json(payload): Json<RecordPaymentRequest>,
) -> Result<Json<RecordPaymentResponse>, (StatusCode, Json<ErrorResponse>)> {
    let correlation_id = uuid::Uuid::new_v4().to_string();
    info!(
        correlation_id = %correlation_id,
        parcel_id = payload.parcel_id,
        amount = payload.amount,
        "Payment recording request received"
    );

    let txn = state.db.begin().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Database error: {}", e),
            }),
        )
    })?;

    // Conditional flip: only an unpaid parcel matches, so a duplicate
    // request affects zero rows and never reaches the insert below.
    let update_result = Parcels::update_many()
        .col_expr(
            parcels::Column::PaymentStatus,
            Expr::value(parcels::PAYMENT_STATUS_PAID),
        )
        .filter(parcels::Column::Id.eq(payload.parcel_id))
        .filter(parcels::Column::PaymentStatus.eq(parcels::PAYMENT_STATUS_UNPAID))
        .exec(&txn)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to update parcel: {}", e),
                }),
            )
        })?;

    if update_result.rows_affected == 0 {
        // Dropping the transaction rolls it back
        warn!(
            correlation_id = %correlation_id,
            parcel_id = payload.parcel_id,
            "Parcel missing or already paid"
        );
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Parcel not found or already paid".to_string(),
            }),
        ));
    }

    let now = Utc::now().with_timezone(&FixedOffset::east_opt(0).unwrap());

    let new_payment = payments::ActiveModel {
        parcel_id: Set(payload.parcel_id),
        email: Set(payload.email.clone()),
        amount: Set(payload.amount),
        payment_method: Set(payload.payment_method.clone()),
        transaction_id: Set(payload.transaction_id.clone()),
        paid_at: Set(now),
        paid_at_string: Set(now.to_rfc3339()),
        ..Default::default()
    };

    let inserted = new_payment.insert(&txn).await.map_err(|e| {
        error!(
            correlation_id = %correlation_id,
            error = %e,
            "Failed to insert payment"
        );
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to insert payment: {}", e),
            }),
        )
    })?;

    txn.commit().await.map_err(|e| {
        error!(
            correlation_id = %correlation_id,
            error = %e,
            "Failed to commit payment transaction"
        );
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Database error: {}", e),
            }),
        )
    })?;

    info!(
        correlation_id = %correlation_id,
        payment_id = inserted.id,
        "Payment recorded"
    );

    Ok(Json(RecordPaymentResponse {
        message: "Payment recorded".to_string(),
        inserted_id: inserted.id,
    }))
}

pub async fn list_payments(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<ListPaymentsQuery>,
) -> Result<Json<Vec<PaymentRecord>>, (StatusCode, Json<ErrorResponse>)> {
    // A caller may only read their own history
    let email = params.email.unwrap_or_else(|| user.email.clone());
    if email != user.email {
        warn!(
            requested = %email,
            token_email = %user.email,
            "Payment history email does not match token"
        );
        return Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                error: "Forbidden access".to_string(),
            }),
        ));
    }

    let records = Payments::find()
        .filter(payments::Column::Email.eq(&email))
        .order_by_desc(payments::Column::PaidAt)
        .all(&state.db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Database error: {}", e),
                }),
            )
        })?;

    Ok(Json(records.into_iter().map(PaymentRecord::from).collect()))
}

pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(payload): Json<CreatePaymentIntentRequest>,
) -> Result<Json<CreatePaymentIntentResponse>, (StatusCode, Json<ErrorResponse>)> {
    let client_secret = state
        .stripe
        .create_payment_intent(payload.amount_in_cents)
        .await
        .map_err(|e| {
            error!("Failed to create payment intent: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("{}", e),
                }),
            )
        })?;

    Ok(Json(CreatePaymentIntentResponse { client_secret }))
}
