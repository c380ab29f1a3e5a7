use axum::{extract::State, http::StatusCode, Json};
use chrono::{FixedOffset, Utc};
use sea_orm::{ActiveModelTrait, Set};

use crate::entities::tracking_events;
use crate::models::parcel::ErrorResponse;
use crate::models::tracking::{AddTrackingEventRequest, AddTrackingEventResponse};
use crate::AppState;

pub async fn add_tracking_event(
    State(state): State<AppState>,
    Json(payload): Json<AddTrackingEventRequest>,
) -> Result<(StatusCode, Json<AddTrackingEventResponse>), (StatusCode, Json<ErrorResponse>)> {
    let new_event = tracking_events::ActiveModel {
        tracking_id: Set(payload.tracking_id),
        parcel_id: Set(payload.parcel_id),
        status: Set(payload.status),
        message: Set(payload.message),
        time: Set(Utc::now().with_timezone(&FixedOffset::east_opt(0).unwrap())),
        updated_by: Set(payload.updated_by),
        ..Default::default()
    };

    let inserted = new_event.insert(&state.db).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to insert tracking event: {}", e),
            }),
        )
    })?;

    Ok((
        StatusCode::CREATED,
        Json(AddTrackingEventResponse {
            success: true,
            inserted_id: inserted.id,
        }),
    ))
}
