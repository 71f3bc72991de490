use std::sync::Arc;

use crate::auth::application::orchestrator::UserRegistrationOrchestrator;
use crate::auth::application::use_cases::{
    login_user::ILoginUserUseCase, logout_user::ILogoutUseCase,
    request_password_reset::IRequestPasswordResetUseCase, reset_password::IResetPasswordUseCase,
    resolve_session::IResolveSessionUseCase, verify_user_email::IVerifyUserEmailUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<UserRegistrationOrchestrator>,
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub resolve_session: Arc<dyn IResolveSessionUseCase + Send + Sync>,
    pub logout: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub verify_email: Arc<dyn IVerifyUserEmailUseCase + Send + Sync>,
    pub request_password_reset: Arc<dyn IRequestPasswordResetUseCase + Send + Sync>,
    pub reset_password: Arc<dyn IResetPasswordUseCase + Send + Sync>,
}
