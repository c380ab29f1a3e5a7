use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{FixedOffset, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::entities::{parcels, prelude::*};
use crate::models::parcel::{
    CreateParcelRequest, CreateParcelResponse, DeleteParcelResponse, ErrorResponse, MyParcelsQuery,
};
use crate::AppState;

pub async fn list_parcels(
    State(state): State<AppState>,
) -> Result<Json<Vec<parcels::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let records = Parcels::find().all(&state.db).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Database error: {}", e),
            }),
        )
    })?;

    Ok(Json(records))
}

pub async fn list_my_parcels(
    State(state): State<AppState>,
    Query(params): Query<MyParcelsQuery>,
) -> Result<Json<Vec<parcels::Model>>, (StatusCode, Json<ErrorResponse>)> {
    // If an email is given, filter by creator; else return all
    let mut query = Parcels::find();
    if let Some(email) = &params.email {
        query = query.filter(parcels::Column::CreatedBy.eq(email));
    }

    let records = query
        .order_by_desc(parcels::Column::CreationDate)
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

pub async fn get_parcel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<parcels::Model>, (StatusCode, Json<ErrorResponse>)> {
    let parcel = Parcels::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Database error: {}", e),
                }),
            )
        })?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Parcel not found".to_string(),
                }),
            )
        })?;

    Ok(Json(parcel))
}

pub async fn add_parcel(
    State(state): State<AppState>,
    Json(payload): Json<CreateParcelRequest>,
) -> Result<(StatusCode, Json<CreateParcelResponse>), (StatusCode, Json<ErrorResponse>)> {
    // creation_date is server-assigned; new parcels always start unpaid
    let now = Utc::now().with_timezone(&FixedOffset::east_opt(0).unwrap());

    let new_parcel = parcels::ActiveModel {
        title: Set(payload.title),
        parcel_type: Set(payload.parcel_type),
        sender_name: Set(payload.sender_name),
        sender_address: Set(payload.sender_address),
        receiver_name: Set(payload.receiver_name),
        receiver_address: Set(payload.receiver_address),
        receiver_contact: Set(payload.receiver_contact),
        weight_kg: Set(payload.weight_kg),
        cost: Set(payload.cost),
        created_by: Set(payload.created_by),
        creation_date: Set(now),
        payment_status: Set(parcels::PAYMENT_STATUS_UNPAID.to_string()),
        ..Default::default()
    };

    let inserted = new_parcel.insert(&state.db).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to insert parcel: {}", e),
            }),
        )
    })?;

    Ok((
        StatusCode::CREATED,
        Json(CreateParcelResponse {
            inserted_id: inserted.id,
        }),
    ))
}

pub async fn delete_parcel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteParcelResponse>, (StatusCode, Json<ErrorResponse>)> {
    let result = Parcels::delete_by_id(id).exec(&state.db).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to delete parcel: {}", e),
            }),
        )
    })?;

    Ok(Json(DeleteParcelResponse {
        deleted_count: result.rows_affected,
    }))
}
