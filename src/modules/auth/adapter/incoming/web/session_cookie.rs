use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse};
use tracing::error;

use crate::shared::api::ApiResponse;

pub const SESSION_COOKIE_NAME: &str = "sbr-session";

/// Attributes shared by every `sbr-session` cookie the server writes.
#[derive(Debug, Clone)]
pub struct SessionCookieConfig {
    pub secure: bool,
    pub max_age_days: i64,
}

impl SessionCookieConfig {
    pub fn new(secure: bool, max_age_days: i64) -> Self {
        Self {
            secure,
            max_age_days,
        }
    }

    pub fn issue(&self, token: &str) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE_NAME, token.to_string())
            .http_only(true)
            .same_site(SameSite::Lax)
            .path("/")
            .secure(self.secure)
            .max_age(Duration::days(self.max_age_days))
            .finish()
    }

    /// Same name and path with a zero max-age, so the browser drops it.
    pub fn clear(&self) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE_NAME, "")
            .http_only(true)
            .same_site(SameSite::Lax)
            .path("/")
            .secure(self.secure)
            .max_age(Duration::ZERO)
            .finish()
    }
}

pub fn session_token(req: &HttpRequest) -> Option<String> {
    req.cookie(SESSION_COOKIE_NAME)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

/// Attaches `cookie` to an already built response.
pub fn with_cookie(mut response: HttpResponse, cookie: Cookie<'static>) -> HttpResponse {
    if let Err(e) = response.add_cookie(&cookie) {
        error!(error = %e, "Failed to set session cookie");
        return ApiResponse::internal_error();
    }
    response
}
