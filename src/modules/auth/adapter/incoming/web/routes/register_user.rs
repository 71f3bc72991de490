use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::create_user::{CreateUserError, CreateUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for self-service signup
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[schema(example = "Casey")]
    #[serde(default)]
    pub first_name: String,

    #[schema(example = "Meeple")]
    #[serde(default)]
    pub last_name: String,

    #[schema(example = "casey@example.com")]
    #[serde(default)]
    pub email: String,

    /// At least 6 characters
    #[schema(example = "dice-roll-42")]
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    #[schema(
        example = "User created successfully. Please check your email to verify your account."
    )]
    message: String,
    user: SignedUpUser,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignedUpUser {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,
    #[schema(example = "casey@example.com")]
    email: String,
    first_name: String,
    last_name: String,
    #[schema(example = "end_user")]
    role: String,
    #[schema(example = false)]
    email_verified: bool,
}

fn map_create_user_error(err: CreateUserError, email: &str) -> HttpResponse {
    match err {
        CreateUserError::Validation(msg) => {
            warn!(%email, error = %msg, "Invalid signup input");
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        CreateUserError::EmailTaken => {
            warn!(%email, "Signup with existing email");
            ApiResponse::conflict("CONFLICT", "User with this email already exists")
        }
        CreateUserError::Internal(msg) => {
            error!(%email, error = %msg, "Signup failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new account
///
/// Creates an unverified `end_user` and emails a verification link.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "auth",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<SignupResponse>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/signup")]
pub async fn signup_handler(
    req: web::Json<SignupRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let email = req.email.clone();

    let input = CreateUserInput {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        password: req.password,
    };

    match data.auth.register.register_user(input).await {
        Ok(output) => {
            info!(user_id = %output.user.id, email = %output.user.email, "User registered");
            ApiResponse::created(SignupResponse {
                message: output.message,
                user: SignedUpUser {
                    id: output.user.id.to_string(),
                    email: output.user.email,
                    first_name: output.user.first_name,
                    last_name: output.user.last_name,
                    role: output.user.role,
                    email_verified: output.user.email_verified,
                },
            })
        }
        Err(e) => map_create_user_error(e, &email),
    }
}
