use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Statement};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

use crate::auth::adapter::outgoing::sea_orm_entity::users::Entity as UserEntity;
use crate::shared::api::ApiResponse;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
}

#[derive(Serialize)]
struct DbCheckResponse {
    database: &'static str,
    users: u64,
}

/// LIVENESS PROBE
/// - No I/O
/// - No DB
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

async fn ping(db: &DatabaseConnection) -> bool {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "SELECT 1",
    ))
    .await
    .is_ok()
}

/// READINESS PROBE
/// - Checks the database
#[get("/ready")]
pub async fn readiness(db: web::Data<Arc<DatabaseConnection>>) -> impl Responder {
    if ping(&db).await {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database: "ok",
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            database: "unhealthy",
        })
    }
}

/// Development only. Not registered when running in production.
#[get("/api/dev/db-check")]
pub async fn db_check(db: web::Data<Arc<DatabaseConnection>>) -> impl Responder {
    match UserEntity::find().count(db.get_ref().as_ref()).await {
        Ok(users) => ApiResponse::success(DbCheckResponse {
            database: "connected",
            users,
        }),
        Err(e) => {
            error!(error = %e, "Database check failed");
            ApiResponse::internal_error()
        }
    }
}
