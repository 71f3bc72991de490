pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, board_game, email, event, organization, stats, user_admin};

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::incoming::web::session_cookie::SessionCookieConfig;
use crate::auth::adapter::outgoing::security::{
    Argon2Hasher, LegacyAwareHasher, RandomTokenGenerator,
};
use crate::auth::adapter::outgoing::{
    SessionRepositoryPostgres, StatusLogRepositoryPostgres, UserQueryPostgres,
    UserRepositoryPostgres,
};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::orchestrator::UserRegistrationOrchestrator;
use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenGenerator};
use crate::auth::application::services::BasicPasswordPolicy;
use crate::auth::application::use_cases::{
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    login_user::LoginUserUseCase,
    logout_user::LogoutUseCase,
    request_password_reset::RequestPasswordResetUseCase,
    reset_password::ResetPasswordUseCase,
    resolve_session::ResolveSessionUseCase,
    verify_user_email::VerifyUserEmailUseCase,
};
use crate::board_game::adapter::outgoing::{
    BggHttpClient, BoardGameRepositoryPostgres, SyncRunRepositoryPostgres,
};
use crate::board_game::application::board_game_use_cases::BoardGameUseCases;
use crate::board_game::application::services::{
    GameSyncService, ListBoardGamesService, SearchBggService,
};
use crate::email::adapter::outgoing::{MockEmailSender, SmtpEmailSender};
use crate::email::application::ports::outgoing::{EmailSender, UserEmailNotifier};
use crate::email::application::services::UserEmailService;
use crate::event::adapter::outgoing::{AttendeeRepositoryPostgres, EventQueryPostgres};
use crate::event::application::event_use_cases::EventUseCases;
use crate::event::application::services::{
    EventRegistrationService, ListGameSessionsService, ListPublicEventsService,
};
use crate::organization::adapter::outgoing::{
    FollowerRepositoryPostgres, OrganizationQueryPostgres, OrganizationRepositoryPostgres,
};
use crate::organization::application::organization_use_cases::OrganizationUseCases;
use crate::organization::application::services::{
    FollowOrganizationService, GetOrganizationService, ListOrganizationsService,
    ManageOrganizationService,
};
use crate::shared::api::custom_json_config;
use crate::shared::config::{load_env_files, AppConfig};
use crate::stats::adapter::outgoing::StatsQueryPostgres;
use crate::stats::application::services::{AdminStatsService, DashboardStatsService};
use crate::stats::application::stats_use_cases::StatsUseCases;
use crate::user_admin::application::use_cases::{
    bootstrap_admin::{BootstrapAdminUseCase, IBootstrapAdminUseCase},
    change_status::{ChangeUserStatusUseCase, IChangeUserStatusUseCase},
    check_email::CheckEmailUseCase,
    create_user::AdminCreateUserUseCase,
    list_users::ListUsersUseCase,
    status_history::UserStatusHistoryUseCase,
    user_actions::UserActionsUseCase,
};
use crate::user_admin::application::user_admin_use_cases::UserAdminUseCases;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub user_admin: UserAdminUseCases,
    pub organizations: OrganizationUseCases,
    pub events: EventUseCases,
    pub board_games: BoardGameUseCases,
    pub stats: StatsUseCases,
    pub session_cookie: SessionCookieConfig,
}

fn email_sender(config: &AppConfig) -> anyhow::Result<Arc<dyn EmailSender + Send + Sync>> {
    match &config.email.smtp {
        Some(smtp) => {
            let sender = SmtpEmailSender::from_config(smtp, &config.email.from)
                .map_err(anyhow::Error::msg)
                .context("Failed to configure SMTP transport")?;
            Ok(Arc::new(sender))
        }
        None => {
            warn!("SMTP_HOST not set, emails will only be logged");
            Ok(Arc::new(MockEmailSender::new()))
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn build_state(db: Arc<DatabaseConnection>, config: &AppConfig) -> anyhow::Result<AppState> {
    let user_query = UserQueryPostgres::new(Arc::clone(&db));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db));
    let sessions = SessionRepositoryPostgres::new(Arc::clone(&db));
    let status_logs = StatusLogRepositoryPostgres::new(Arc::clone(&db));

    let hasher: Arc<dyn PasswordHasher> =
        Arc::new(LegacyAwareHasher::new(Arc::new(Argon2Hasher::from_env())));
    let policy: Arc<dyn PasswordPolicy> = Arc::new(BasicPasswordPolicy);
    let tokens: Arc<dyn TokenGenerator> = Arc::new(RandomTokenGenerator);
    let notifier: Arc<dyn UserEmailNotifier + Send + Sync> = Arc::new(UserEmailService::new(
        email_sender(config)?,
        &config.urls.web_url,
    ));

    // Auth
    let create_user: Arc<dyn ICreateUserUseCase + Send + Sync> = Arc::new(CreateUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&hasher),
        Arc::clone(&policy),
        Arc::clone(&tokens),
    ));
    let auth = AuthUseCases {
        register: Arc::new(UserRegistrationOrchestrator::new(
            create_user,
            notifier.clone(),
        )),
        login: Arc::new(LoginUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            sessions.clone(),
            Arc::clone(&hasher),
            Arc::clone(&tokens),
            chrono::Duration::days(config.session.duration_days),
        )),
        resolve_session: Arc::new(ResolveSessionUseCase::new(
            user_query.clone(),
            sessions.clone(),
        )),
        logout: Arc::new(LogoutUseCase::new(sessions.clone())),
        verify_email: Arc::new(VerifyUserEmailUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            notifier.clone(),
        )),
        request_password_reset: Arc::new(RequestPasswordResetUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&tokens),
            notifier.clone(),
        )),
        reset_password: Arc::new(ResetPasswordUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            sessions.clone(),
            Arc::clone(&hasher),
            Arc::clone(&policy),
        )),
    };

    // User administration
    let change_status: Arc<dyn IChangeUserStatusUseCase + Send + Sync> =
        Arc::new(ChangeUserStatusUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            status_logs.clone(),
            sessions.clone(),
        ));
    let user_admin = UserAdminUseCases {
        list: Arc::new(ListUsersUseCase::new(user_query.clone())),
        create: Arc::new(AdminCreateUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&hasher),
            Arc::clone(&policy),
        )),
        check_email: Arc::new(CheckEmailUseCase::new(user_query.clone())),
        actions: Arc::new(UserActionsUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            sessions.clone(),
            Arc::clone(&hasher),
            Arc::clone(&policy),
            change_status.clone(),
        )),
        change_status,
        status_history: Arc::new(UserStatusHistoryUseCase::new(
            user_query.clone(),
            status_logs,
        )),
        bootstrap_admin: Arc::new(BootstrapAdminUseCase::new(
            user_query,
            user_repo,
            Arc::clone(&hasher),
            config.admin.email.clone(),
            config.admin.password.clone(),
        )),
    };

    // Organizations
    let org_query = OrganizationQueryPostgres::new(Arc::clone(&db));
    let organizations = OrganizationUseCases {
        list: Arc::new(ListOrganizationsService::new(org_query.clone())),
        get: Arc::new(GetOrganizationService::new(org_query.clone())),
        follow: Arc::new(FollowOrganizationService::new(
            org_query,
            FollowerRepositoryPostgres::new(Arc::clone(&db)),
        )),
        manage: Arc::new(ManageOrganizationService::new(
            OrganizationRepositoryPostgres::new(Arc::clone(&db)),
        )),
    };

    // Events
    let event_query = EventQueryPostgres::new(Arc::clone(&db));
    let events = EventUseCases {
        list_public: Arc::new(ListPublicEventsService::new(event_query.clone())),
        list_sessions: Arc::new(ListGameSessionsService::new(event_query.clone())),
        registration: Arc::new(EventRegistrationService::new(
            event_query,
            AttendeeRepositoryPostgres::new(Arc::clone(&db)),
        )),
    };

    // Board games
    let bgg = Arc::new(
        BggHttpClient::new(&config.bgg).context("Failed to build BoardGameGeek client")?,
    );
    let games = BoardGameRepositoryPostgres::new(Arc::clone(&db));
    let board_games = BoardGameUseCases {
        list: Arc::new(ListBoardGamesService::new(games.clone())),
        search_bgg: Arc::new(SearchBggService::new(Arc::clone(&bgg))),
        sync: Arc::new(GameSyncService::new(
            bgg,
            Arc::new(games),
            Arc::new(SyncRunRepositoryPostgres::new(Arc::clone(&db))),
        )),
    };

    // Stats
    let stats_query = StatsQueryPostgres::new(Arc::clone(&db));
    let stats = StatsUseCases {
        admin: Arc::new(AdminStatsService::new(stats_query.clone())),
        dashboard: Arc::new(DashboardStatsService::new(stats_query)),
    };

    Ok(AppState {
        auth,
        user_admin,
        organizations,
        events,
        board_games,
        stats,
        session_cookie: SessionCookieConfig::new(
            config.is_production(),
            config.session.duration_days,
        ),
    })
}

/// Makes sure the configured super admin exists before serving traffic.
#[cfg(not(tarpaulin_include))]
async fn ensure_admin(bootstrap: &dyn IBootstrapAdminUseCase) {
    if let Err(e) = bootstrap.execute().await {
        warn!(error = %e, "Admin bootstrap skipped");
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    load_env_files();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    info!(environment = %config.environment, "Starting application...");

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db = Arc::new(
        Database::connect(opt)
            .await
            .context("Failed to connect to database")?,
    );

    let state = build_state(Arc::clone(&db), &config)?;
    ensure_admin(state.user_admin.bootstrap_admin.as_ref()).await;

    let bind_address = config.server.bind_address();
    let dev_routes = !config.is_production();
    info!(address = %bind_address, "Server listening");

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes);

        if dev_routes {
            app = app.service(crate::health::db_check);
        }

        app
    })
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Feature modules
    cfg.configure(crate::auth::adapter::incoming::web::routes::configure);
    cfg.configure(crate::user_admin::adapter::incoming::web::routes::configure);
    cfg.configure(crate::organization::adapter::incoming::web::routes::configure);
    cfg.configure(crate::event::adapter::incoming::web::routes::configure);
    cfg.configure(crate::board_game::adapter::incoming::web::routes::configure);
    cfg.configure(crate::stats::adapter::incoming::web::routes::configure);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
