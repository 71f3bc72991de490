use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::verify_user_email::VerifyUserEmailError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, IntoParams)]
pub struct VerifyEmailQuery {
    /// Token from the verification email
    #[serde(default)]
    pub token: String,
}

#[derive(Serialize, ToSchema)]
pub struct VerifyEmailResponse {
    #[schema(example = "Email verified successfully")]
    message: String,
}

/// Verify email address
#[utoipa::path(
    get,
    path = "/api/auth/verify-email",
    tag = "auth",
    params(VerifyEmailQuery),
    responses(
        (status = 200, description = "Email verified", body = inline(SuccessResponse<VerifyEmailResponse>)),
        (status = 400, description = "Unknown or already used token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/auth/verify-email")]
pub async fn verify_user_email_handler(
    query: web::Query<VerifyEmailQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let token = query.into_inner().token;
    if token.trim().is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Verification token is required");
    }

    match data.auth.verify_email.execute(token.trim()).await {
        Ok(user) => {
            info!(user_id = %user.id, email = %user.email, "Email verified");
            ApiResponse::success(VerifyEmailResponse {
                message: "Email verified successfully".to_string(),
            })
        }
        Err(VerifyUserEmailError::InvalidToken) => {
            warn!("Email verification with unknown token");
            ApiResponse::bad_request("VALIDATION_ERROR", "Invalid or expired verification token")
        }
        Err(VerifyUserEmailError::Internal(e)) => {
            error!(error = %e, "Email verification failed");
            ApiResponse::internal_error()
        }
    }
}
