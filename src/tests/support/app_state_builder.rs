use crate::auth::adapter::incoming::web::session_cookie::SessionCookieConfig;
use crate::auth::adapter::outgoing::security::RandomTokenGenerator;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::orchestrator::UserRegistrationOrchestrator;
use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenGenerator};
use crate::auth::application::services::BasicPasswordPolicy;
use crate::auth::application::use_cases::{
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::LogoutUseCase,
    request_password_reset::RequestPasswordResetUseCase,
    reset_password::ResetPasswordUseCase,
    resolve_session::ResolveSessionUseCase,
    verify_user_email::VerifyUserEmailUseCase,
};
use crate::board_game::application::board_game_use_cases::BoardGameUseCases;
use crate::board_game::application::services::{
    GameSyncService, ListBoardGamesService, SearchBggService,
};
use crate::email::application::ports::outgoing::UserEmailNotifier;
use crate::event::application::event_use_cases::EventUseCases;
use crate::event::application::services::{
    EventRegistrationService, ListGameSessionsService, ListPublicEventsService,
};
use crate::organization::application::organization_use_cases::OrganizationUseCases;
use crate::organization::application::services::{
    FollowOrganizationService, GetOrganizationService, ListOrganizationsService,
    ManageOrganizationService,
};
use crate::stats::application::services::{AdminStatsService, DashboardStatsService};
use crate::stats::application::stats_use_cases::StatsUseCases;
use crate::tests::support::in_memory::{
    InMemorySessions, InMemoryStatusLogs, InMemoryUsers, PlainHasher, RecordingNotifier,
};
use crate::tests::support::in_memory_events::InMemoryEvents;
use crate::tests::support::in_memory_games::{FakeBgg, InMemoryGames};
use crate::tests::support::in_memory_organizations::InMemoryOrganizations;
use crate::tests::support::in_memory_stats::FixedStats;
use crate::user_admin::application::use_cases::{
    bootstrap_admin::BootstrapAdminUseCase,
    change_status::{ChangeUserStatusUseCase, IChangeUserStatusUseCase},
    check_email::CheckEmailUseCase,
    create_user::AdminCreateUserUseCase,
    list_users::ListUsersUseCase,
    status_history::UserStatusHistoryUseCase,
    user_actions::UserActionsUseCase,
};
use crate::user_admin::application::user_admin_use_cases::UserAdminUseCases;
use crate::AppState;
use actix_web::web;
use chrono::Duration;
use std::sync::Arc;

/// Wires the real use cases over in-memory ports. Every store is shared with
/// the caller through `Clone`, so tests can inspect what a request changed.
pub struct TestAppStateBuilder {
    users: InMemoryUsers,
    sessions: InMemorySessions,
    status_logs: InMemoryStatusLogs,
    notifier: RecordingNotifier,
    login: Option<Arc<dyn ILoginUserUseCase + Send + Sync>>,
    admin_email: String,
    admin_password: Option<String>,
    organizations: InMemoryOrganizations,
    events: InMemoryEvents,
    games: InMemoryGames,
    bgg: FakeBgg,
    stats: FixedStats,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            users: InMemoryUsers::default(),
            sessions: InMemorySessions::default(),
            status_logs: InMemoryStatusLogs::default(),
            notifier: RecordingNotifier::default(),
            login: None,
            admin_email: "admin@shakebattleroll.com".to_string(),
            admin_password: None,
            organizations: InMemoryOrganizations::default(),
            events: InMemoryEvents::default(),
            games: InMemoryGames::default(),
            bgg: FakeBgg::default(),
            stats: FixedStats::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_users(mut self, users: InMemoryUsers) -> Self {
        self.users = users;
        self
    }

    pub fn with_sessions(mut self, sessions: InMemorySessions) -> Self {
        self.sessions = sessions;
        self
    }

    pub fn with_status_logs(mut self, logs: InMemoryStatusLogs) -> Self {
        self.status_logs = logs;
        self
    }

    pub fn with_notifier(mut self, notifier: RecordingNotifier) -> Self {
        self.notifier = notifier;
        self
    }

    /// Replaces the login use case, e.g. with one that always fails.
    pub fn with_login(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login = Some(Arc::new(uc));
        self
    }

    pub fn with_admin_bootstrap(mut self, email: &str, password: Option<&str>) -> Self {
        self.admin_email = email.to_string();
        self.admin_password = password.map(str::to_string);
        self
    }

    pub fn with_organizations(mut self, store: InMemoryOrganizations) -> Self {
        self.organizations = store;
        self
    }

    pub fn with_events(mut self, store: InMemoryEvents) -> Self {
        self.events = store;
        self
    }

    pub fn with_games(mut self, store: InMemoryGames, bgg: FakeBgg) -> Self {
        self.games = store;
        self.bgg = bgg;
        self
    }

    pub fn with_stats(mut self, stats: FixedStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let users = self.users;
        let sessions = self.sessions;
        let hasher: Arc<dyn PasswordHasher> = Arc::new(PlainHasher);
        let policy: Arc<dyn PasswordPolicy> = Arc::new(BasicPasswordPolicy);
        let tokens: Arc<dyn TokenGenerator> = Arc::new(RandomTokenGenerator);
        let notifier: Arc<dyn UserEmailNotifier + Send + Sync> = Arc::new(self.notifier);

        let create_user: Arc<dyn ICreateUserUseCase + Send + Sync> =
            Arc::new(CreateUserUseCase::new(
                users.clone(),
                users.clone(),
                Arc::clone(&hasher),
                Arc::clone(&policy),
                Arc::clone(&tokens),
            ));
        let login: Arc<dyn ILoginUserUseCase + Send + Sync> = match self.login {
            Some(uc) => uc,
            None => Arc::new(LoginUserUseCase::new(
                users.clone(),
                users.clone(),
                sessions.clone(),
                Arc::clone(&hasher),
                Arc::clone(&tokens),
                Duration::days(7),
            )),
        };

        let auth = AuthUseCases {
            register: Arc::new(UserRegistrationOrchestrator::new(
                create_user,
                notifier.clone(),
            )),
            login,
            resolve_session: Arc::new(ResolveSessionUseCase::new(users.clone(), sessions.clone())),
            logout: Arc::new(LogoutUseCase::new(sessions.clone())),
            verify_email: Arc::new(VerifyUserEmailUseCase::new(
                users.clone(),
                users.clone(),
                notifier.clone(),
            )),
            request_password_reset: Arc::new(RequestPasswordResetUseCase::new(
                users.clone(),
                users.clone(),
                Arc::clone(&tokens),
                notifier.clone(),
            )),
            reset_password: Arc::new(ResetPasswordUseCase::new(
                users.clone(),
                users.clone(),
                sessions.clone(),
                Arc::clone(&hasher),
                Arc::clone(&policy),
            )),
        };

        let change_status: Arc<dyn IChangeUserStatusUseCase + Send + Sync> =
            Arc::new(ChangeUserStatusUseCase::new(
                users.clone(),
                users.clone(),
                self.status_logs.clone(),
                sessions.clone(),
            ));
        let user_admin = UserAdminUseCases {
            list: Arc::new(ListUsersUseCase::new(users.clone())),
            create: Arc::new(AdminCreateUserUseCase::new(
                users.clone(),
                users.clone(),
                Arc::clone(&hasher),
                Arc::clone(&policy),
            )),
            check_email: Arc::new(CheckEmailUseCase::new(users.clone())),
            actions: Arc::new(UserActionsUseCase::new(
                users.clone(),
                users.clone(),
                sessions.clone(),
                Arc::clone(&hasher),
                Arc::clone(&policy),
                change_status.clone(),
            )),
            change_status,
            status_history: Arc::new(UserStatusHistoryUseCase::new(
                users.clone(),
                self.status_logs,
            )),
            bootstrap_admin: Arc::new(BootstrapAdminUseCase::new(
                users.clone(),
                users,
                Arc::clone(&hasher),
                self.admin_email,
                self.admin_password,
            )),
        };

        let orgs = self.organizations;
        let organizations = OrganizationUseCases {
            list: Arc::new(ListOrganizationsService::new(orgs.clone())),
            get: Arc::new(GetOrganizationService::new(orgs.clone())),
            follow: Arc::new(FollowOrganizationService::new(orgs.clone(), orgs.clone())),
            manage: Arc::new(ManageOrganizationService::new(orgs)),
        };

        let events = EventUseCases {
            list_public: Arc::new(ListPublicEventsService::new(self.events.clone())),
            list_sessions: Arc::new(ListGameSessionsService::new(self.events.clone())),
            registration: Arc::new(EventRegistrationService::new(
                self.events.clone(),
                self.events,
            )),
        };

        let bgg = Arc::new(self.bgg);
        let games = Arc::new(self.games);
        let board_games = BoardGameUseCases {
            list: Arc::new(ListBoardGamesService::new(games.as_ref().clone())),
            search_bgg: Arc::new(SearchBggService::new(Arc::clone(&bgg))),
            sync: Arc::new(GameSyncService::new(bgg, Arc::clone(&games), games)),
        };

        let stats = StatsUseCases {
            admin: Arc::new(AdminStatsService::new(self.stats.clone())),
            dashboard: Arc::new(DashboardStatsService::new(self.stats)),
        };

        web::Data::new(AppState {
            auth,
            user_admin,
            organizations,
            events,
            board_games,
            stats,
            session_cookie: SessionCookieConfig::new(false, 7),
        })
    }
}
