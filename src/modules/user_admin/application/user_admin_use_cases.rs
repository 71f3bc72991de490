use std::sync::Arc;

use crate::user_admin::application::use_cases::{
    bootstrap_admin::IBootstrapAdminUseCase, change_status::IChangeUserStatusUseCase,
    check_email::ICheckEmailUseCase, create_user::IAdminCreateUserUseCase,
    list_users::IListUsersUseCase, status_history::IUserStatusHistoryUseCase,
    user_actions::IUserActionsUseCase,
};

#[derive(Clone)]
pub struct UserAdminUseCases {
    pub list: Arc<dyn IListUsersUseCase + Send + Sync>,
    pub create: Arc<dyn IAdminCreateUserUseCase + Send + Sync>,
    pub check_email: Arc<dyn ICheckEmailUseCase + Send + Sync>,
    pub actions: Arc<dyn IUserActionsUseCase + Send + Sync>,
    pub change_status: Arc<dyn IChangeUserStatusUseCase + Send + Sync>,
    pub status_history: Arc<dyn IUserStatusHistoryUseCase + Send + Sync>,
    pub bootstrap_admin: Arc<dyn IBootstrapAdminUseCase + Send + Sync>,
}
