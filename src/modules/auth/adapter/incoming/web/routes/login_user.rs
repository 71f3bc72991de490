use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::routes::current_user::SessionUserResponse;
use crate::auth::adapter::incoming::web::session_cookie::with_cookie;
use crate::auth::application::use_cases::login_user::{LoginAudience, LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "casey@example.com")]
    #[serde(default)]
    pub email: String,

    #[schema(example = "dice-roll-42")]
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    message: String,
    user: SessionUserResponse,
}

async fn login(dto: LoginRequestDto, data: &AppState, audience: LoginAudience) -> HttpResponse {
    info!(email = %dto.email, ?audience, "Login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };
    let email = request.email().to_string();

    match data.auth.login.execute(request, audience).await {
        Ok(output) => {
            info!(user_id = %output.user.id, %email, "User logged in");
            let cookie = data.session_cookie.issue(&output.token);
            with_cookie(
                ApiResponse::success(LoginResponse {
                    message: "Login successful".to_string(),
                    user: SessionUserResponse::from(&output.user),
                }),
                cookie,
            )
        }

        Err(LoginError::InvalidCredentials) => {
            warn!(%email, "Login failed: invalid credentials");
            ApiResponse::unauthorized("UNAUTHORIZED", "Invalid email or password")
        }

        Err(LoginError::EmailNotVerified) => {
            warn!(%email, "Login failed: email not verified");
            ApiResponse::forbidden(
                "EMAIL_NOT_VERIFIED",
                "Please verify your email before logging in",
            )
        }

        Err(LoginError::AccountInactive) => {
            warn!(%email, "Login failed: account inactive");
            ApiResponse::forbidden(
                "ACCOUNT_INACTIVE",
                "Your account has been deactivated. Please contact support.",
            )
        }

        Err(LoginError::AdminAccessRequired) => {
            warn!(%email, "Admin login refused for non-admin role");
            ApiResponse::forbidden("FORBIDDEN", "Access denied. Admin privileges required.")
        }

        Err(LoginError::Internal(ref e)) => {
            error!(%email, error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

/// User login
///
/// Verifies the credentials and sets the `sbr-session` cookie.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = inline(SuccessResponse<LoginResponse>)),
        (status = 400, description = "Malformed credentials", body = ErrorResponse),
        (status = 401, description = "Invalid email or password", body = ErrorResponse),
        (status = 403, description = "Email not verified or account inactive", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    login(req.into_inner(), &data, LoginAudience::Web).await
}

/// Admin panel login
///
/// Same as the public login, but only admin roles receive a session.
#[utoipa::path(
    post,
    path = "/api/admin/auth/login",
    tag = "admin-auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = inline(SuccessResponse<LoginResponse>)),
        (status = 401, description = "Invalid email or password", body = ErrorResponse),
        (status = 403, description = "Not an admin, email not verified or account inactive", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/auth/login")]
pub async fn admin_login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    login(req.into_inner(), &data, LoginAudience::Admin).await
}
