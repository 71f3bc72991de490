use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::request_password_reset::PASSWORD_RESET_MESSAGE;
use crate::auth::application::use_cases::reset_password::ResetPasswordError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct ForgotPasswordRequest {
    #[schema(example = "casey@example.com")]
    #[serde(default)]
    pub email: String,
}

#[derive(Deserialize, ToSchema)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub token: String,

    /// At least 6 characters
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    message: String,
}

/// Request a password reset link
///
/// Always answers with the same message so callers cannot probe for accounts.
#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = "auth",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "Generic acknowledgement", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Email missing", body = ErrorResponse),
    )
)]
#[post("/api/auth/forgot-password")]
pub async fn forgot_password_handler(
    req: web::Json<ForgotPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let email = req.into_inner().email;
    if email.trim().is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Email is required");
    }

    if let Err(e) = data.auth.request_password_reset.execute(&email).await {
        // Same answer as the success path.
        error!(error = %e, "Password reset request failed");
    }

    ApiResponse::success(MessageResponse {
        message: PASSWORD_RESET_MESSAGE.to_string(),
    })
}

/// Set a new password with a reset token
#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = "auth",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password changed, all sessions ended", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Invalid token or password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/reset-password")]
pub async fn reset_password_handler(
    req: web::Json<ResetPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    if req.token.is_empty() || req.password.is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Token and password are required");
    }

    match data
        .auth
        .reset_password
        .execute(&req.token, &req.password)
        .await
    {
        Ok(()) => {
            info!("Password reset completed");
            ApiResponse::success(MessageResponse {
                message: "Password has been reset successfully".to_string(),
            })
        }
        Err(ResetPasswordError::InvalidToken) => {
            warn!("Password reset with invalid or expired token");
            ApiResponse::bad_request("VALIDATION_ERROR", "Invalid or expired reset token")
        }
        Err(ResetPasswordError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(ResetPasswordError::Internal(e)) => {
            error!(error = %e, "Password reset failed");
            ApiResponse::internal_error()
        }
    }
}
