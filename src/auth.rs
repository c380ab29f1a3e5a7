//! Bearer-token gate applied to the protected routes.
//!
//! Missing or malformed credentials are rejected before the handler runs;
//! a verified token attaches an [`AuthUser`] extension for the handler.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use tracing::warn;

use crate::models::parcel::ErrorResponse;
use crate::AppState;

/// Identity decoded from a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let token = extract_bearer_token(req.headers()).ok_or_else(|| {
        warn!("Missing or malformed Authorization header");
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "Unauthorized access".to_string(),
            }),
        )
    })?;

    let claims = state.firebase.verify_id_token(&token).await.map_err(|e| {
        warn!("Token verification failed: {}", e);
        forbidden()
    })?;

    let email = claims.email.ok_or_else(|| {
        warn!("Verified token carries no email claim");
        forbidden()
    })?;

    req.extensions_mut().insert(AuthUser { email });
    Ok(next.run(req).await)
}

fn forbidden() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::FORBIDDEN,
        Json(ErrorResponse {
            error: "Forbidden access".to_string(),
        }),
    )
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}
