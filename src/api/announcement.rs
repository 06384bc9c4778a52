use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;
use utoipa::{IntoParams, ToSchema};

use crate::auth::auth::AuthUser;
use crate::model::announcement::Announcement;

#[derive(Deserialize, ToSchema)]
pub struct CreateAnnouncement {
    #[schema(example = "Office closed on Aug 21 (Ninoy Aquino Day)")]
    pub title: String,
    #[schema(example = "Regular holiday pay rules apply for scheduled shifts.")]
    pub body: String,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct AnnouncementQuery {
    #[schema(example = 1)]
    pub page: Option<u32>,
    #[schema(example = 10)]
    pub per_page: Option<u32>,
}

#[derive(Serialize, ToSchema)]
pub struct AnnouncementListResponse {
    pub data: Vec<Announcement>,
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
}

/// Post an announcement (HR/Admin)
#[utoipa::path(
    post,
    path = "/api/v1/announcements",
    request_body = CreateAnnouncement,
    responses(
        (status = 201, description = "Announcement posted"),
        (status = 400, description = "Empty title or body"),
        (status = 401),
        (status = 403)
    ),
    security(("bearer_auth" = [])),
    tag = "Announcement"
)]
pub async fn create_announcement(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateAnnouncement>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    if payload.title.trim().is_empty() || payload.body.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Title and body must not be empty"
        })));
    }

    sqlx::query("INSERT INTO announcements (title, body, posted_by) VALUES (?, ?, ?)")
        .bind(payload.title.trim())
        .bind(payload.body.trim())
        .bind(auth.user_id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to post announcement");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Announcement posted"
    })))
}

/// Announcement feed, newest first
#[utoipa::path(
    get,
    path = "/api/v1/announcements",
    params(AnnouncementQuery),
    responses(
        (status = 200, body = AnnouncementListResponse),
        (status = 401)
    ),
    security(("bearer_auth" = [])),
    tag = "Announcement"
)]
pub async fn list_announcements(
    _auth: AuthUser,
    pool: web::Data<MySqlPool>,
    query: web::Query<AnnouncementQuery>,
) -> actix_web::Result<impl Responder> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(10).clamp(1, 100);
    let offset = (page - 1) * per_page;

    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM announcements")
        .fetch_one(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to count announcements");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    let data = sqlx::query_as::<_, Announcement>(
        "SELECT * FROM announcements ORDER BY created_at DESC LIMIT ? OFFSET ?",
    )
    .bind(per_page as i64)
    .bind(offset as i64)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "Failed to fetch announcements");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok().json(AnnouncementListResponse {
        data,
        page,
        per_page,
        total,
    }))
}

/// Get one announcement
#[utoipa::path(
    get,
    path = "/api/v1/announcements/{announcement_id}",
    params(("announcement_id", description = "Announcement ID")),
    responses(
        (status = 200, body = Announcement),
        (status = 401),
        (status = 404)
    ),
    security(("bearer_auth" = [])),
    tag = "Announcement"
)]
pub async fn get_announcement(
    _auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let announcement_id = path.into_inner();

    let announcement =
        sqlx::query_as::<_, Announcement>("SELECT * FROM announcements WHERE id = ?")
            .bind(announcement_id)
            .fetch_optional(pool.get_ref())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, announcement_id, "Failed to fetch announcement");
                actix_web::error::ErrorInternalServerError("Internal Server Error")
            })?;

    match announcement {
        Some(a) => Ok(HttpResponse::Ok().json(a)),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": "Announcement not found"
        }))),
    }
}

/// Take down an announcement (Admin)
#[utoipa::path(
    delete,
    path = "/api/v1/announcements/{announcement_id}",
    params(("announcement_id", description = "Announcement ID")),
    responses(
        (status = 200, description = "Announcement deleted"),
        (status = 401),
        (status = 403),
        (status = 404)
    ),
    security(("bearer_auth" = [])),
    tag = "Announcement"
)]
pub async fn delete_announcement(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let announcement_id = path.into_inner();

    let result = sqlx::query("DELETE FROM announcements WHERE id = ?")
        .bind(announcement_id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, announcement_id, "Failed to delete announcement");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": "Announcement not found"
        })));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Announcement deleted"
    })))
}
