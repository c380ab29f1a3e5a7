use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{FixedOffset, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::entities::{prelude::*, riders};
use crate::models::parcel::ErrorResponse;
use crate::models::rider::{
    RiderApplicationRequest, RiderApplicationResponse, SetRiderStatusRequest,
    SetRiderStatusResponse,
};
use crate::AppState;

pub async fn submit_application(
    State(state): State<AppState>,
    Json(payload): Json<RiderApplicationRequest>,
) -> Result<(StatusCode, Json<RiderApplicationResponse>), (StatusCode, Json<ErrorResponse>)> {
    // Status is stored as supplied; approval happens via the admin endpoint
    let new_rider = riders::ActiveModel {
        name: Set(payload.name),
        email: Set(payload.email),
        phone: Set(payload.phone),
        region: Set(payload.region),
        status: Set(payload.status),
        created_at: Set(Utc::now().with_timezone(&FixedOffset::east_opt(0).unwrap())),
        ..Default::default()
    };

    let inserted = new_rider.insert(&state.db).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to insert rider: {}", e),
            }),
        )
    })?;

    Ok((
        StatusCode::CREATED,
        Json(RiderApplicationResponse {
            inserted_id: inserted.id,
        }),
    ))
}

pub async fn list_pending(
    State(state): State<AppState>,
) -> Result<Json<Vec<riders::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let records = Riders::find()
        .filter(riders::Column::Status.eq("pending"))
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

    Ok(Json(records))
}

pub async fn list_active(
    State(state): State<AppState>,
) -> Result<Json<Vec<riders::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let records = Riders::find()
        .filter(riders::Column::Status.eq("active"))
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

    Ok(Json(records))
}

pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SetRiderStatusRequest>,
) -> Result<Json<SetRiderStatusResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Unconditional overwrite; the status value itself is not validated
    let result = Riders::update_many()
        .col_expr(riders::Column::Status, Expr::value(payload.status))
        .filter(riders::Column::Id.eq(id))
        .exec(&state.db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to update rider status: {}", e),
                }),
            )
        })?;

    Ok(Json(SetRiderStatusResponse {
        modified_count: result.rows_affected,
    }))
}
