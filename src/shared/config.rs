use std::env;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Loads `.env.{RUST_ENV}` first, then falls back to `.env`.
pub fn load_env_files() {
    let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", environment);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn or_default(key: &'static str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parsed<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub duration_days: i64,
}

#[derive(Debug, Clone)]
pub struct UrlConfig {
    pub web_url: String,
}

#[derive(Debug, Clone)]
pub struct BggConfig {
    pub api_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct AdminBootstrapConfig {
    pub email: String,
    pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub enum SmtpConfig {
    /// Plain SMTP without auth (Mailpit, MailHog)
    Local { host: String, port: u16 },
    Relay {
        host: String,
        port: u16,
        username: String,
        password: String,
    },
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub from: String,
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub urls: UrlConfig,
    pub bgg: BggConfig,
    pub admin: AdminBootstrapConfig,
    pub email: EmailConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = or_default("RUST_ENV", "development");

        let duration_days = parsed("SESSION_DURATION_DAYS", 7_i64)?;
        if duration_days <= 0 {
            return Err(ConfigError::Invalid {
                key: "SESSION_DURATION_DAYS",
                value: duration_days.to_string(),
            });
        }

        Ok(Self {
            server: ServerConfig {
                host: or_default("SERVER_HOST", "127.0.0.1"),
                port: parsed("SERVER_PORT", 8080)?,
            },
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                max_connections: parsed("DB_MAX_CONNECTIONS", 20)?,
                min_connections: parsed("DB_MIN_CONNECTIONS", 2)?,
            },
            session: SessionConfig { duration_days },
            urls: UrlConfig {
                web_url: or_default("WEB_URL", "http://localhost:3000"),
            },
            bgg: BggConfig {
                api_url: or_default("BGG_API_URL", "https://boardgamegeek.com/xmlapi2"),
                timeout_secs: parsed("BGG_TIMEOUT_SECS", 15)?,
            },
            admin: AdminBootstrapConfig {
                email: or_default("ADMIN_EMAIL", "admin@shakebattleroll.com")
                    .trim()
                    .to_lowercase(),
                password: env::var("ADMIN_PASSWORD").ok().filter(|p| !p.is_empty()),
            },
            email: EmailConfig::from_env(&environment)?,
            environment,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl EmailConfig {
    fn from_env(environment: &str) -> Result<Self, ConfigError> {
        let from = or_default("EMAIL_FROM", "SBR - Social Board Gaming <noreply@sbr.local>");

        let smtp = match env::var("SMTP_HOST") {
            Err(_) => None,
            Ok(host) if environment == "test" => Some(SmtpConfig::Local {
                host,
                port: parsed("SMTP_PORT", 1025)?,
            }),
            Ok(host) => Some(SmtpConfig::Relay {
                host,
                port: parsed("SMTP_PORT", 587)?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
            }),
        };

        Ok(Self { from, smtp })
    }
}
