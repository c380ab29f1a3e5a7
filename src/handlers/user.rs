use axum::{extract::State, http::StatusCode, Json};
use chrono::{FixedOffset, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, Set};

use crate::entities::{prelude::*, users};
use crate::models::parcel::ErrorResponse;
use crate::models::user::{UpsertUserRequest, UpsertUserResponse};
use crate::AppState;

pub async fn upsert_user(
    State(state): State<AppState>,
    Json(payload): Json<UpsertUserRequest>,
) -> Result<Json<UpsertUserResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Check if the email is already registered
    let existing = Users::find()
        .filter(users::Column::Email.eq(&payload.email))
        .one(&state.db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Database error: {}", e),
                }),
            )
        })?;

    let now = Utc::now().with_timezone(&FixedOffset::east_opt(0).unwrap());

    if let Some(existing_user) = existing {
        // Returning sign-in: only refresh last_log_in
        let mut active_model = existing_user.into_active_model();
        active_model.last_log_in = Set(now);

        active_model.update(&state.db).await.map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to update user: {}", e),
                }),
            )
        })?;

        Ok(Json(UpsertUserResponse {
            message: "User already exists".to_string(),
            inserted: false,
        }))
    } else {
        let new_user = users::ActiveModel {
            email: Set(payload.email.clone()),
            display_name: Set(payload.display_name.clone()),
            last_log_in: Set(now),
            created_at: Set(now),
            ..Default::default()
        };

        new_user.insert(&state.db).await.map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to insert user: {}", e),
                }),
            )
        })?;

        Ok(Json(UpsertUserResponse {
            message: "User created".to_string(),
            inserted: true,
        }))
    }
}
