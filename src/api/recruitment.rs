use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;
use utoipa::{IntoParams, ToSchema};

use crate::auth::auth::AuthUser;
use crate::model::job_posting::{JobApplication, JobPosting};

#[derive(Deserialize, ToSchema)]
pub struct CreateJobPosting {
    #[schema(example = "Payroll Specialist")]
    pub title: String,
    #[schema(example = "Handles monthly payroll runs and statutory filings.")]
    pub description: String,
    #[schema(example = 10)]
    pub department_id: u64,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateApplication {
    #[schema(example = "Maria Santos")]
    pub candidate_name: String,
    #[schema(example = "maria.santos@mail.com", format = "email")]
    pub email: String,
    #[schema(example = "+639171234567", nullable = true)]
    pub phone: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct ApplicationStatusUpdate {
    #[schema(example = "shortlisted")]
    pub status: String,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct ApplicationFilter {
    #[schema(example = 1)]
    pub job_posting_id: Option<u64>,
    #[schema(example = "pending")]
    pub status: Option<String>,
    #[schema(example = 1)]
    pub page: Option<u32>,
    #[schema(example = 10)]
    pub per_page: Option<u32>,
}

#[derive(Serialize, ToSchema)]
pub struct ApplicationListResponse {
    pub data: Vec<JobApplication>,
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
}

// Typed SQLx binding for the dynamic list filters
enum FilterValue<'a> {
    U64(u64),
    Str(&'a str),
}

/// Candidate pipeline stages reachable from each current stage. `hired` and
/// `rejected` are terminal.
fn allowed_transition(current: &str, next: &str) -> bool {
    matches!(
        (current, next),
        ("pending", "shortlisted") | ("pending", "rejected") | ("shortlisted", "rejected")
            | ("shortlisted", "hired")
    )
}

/// Open a job posting (HR/Admin)
#[utoipa::path(
    post,
    path = "/api/v1/recruitment/jobs",
    request_body = CreateJobPosting,
    responses(
        (status = 201, description = "Job posting created"),
        (status = 401),
        (status = 403)
    ),
    security(("bearer_auth" = [])),
    tag = "Recruitment"
)]
pub async fn create_job_posting(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateJobPosting>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    sqlx::query(
        "INSERT INTO job_postings (title, description, department_id, status) VALUES (?, ?, ?, 'open')",
    )
    .bind(&payload.title)
    .bind(&payload.description)
    .bind(payload.department_id)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "Failed to create job posting");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Job posting created"
    })))
}

/// List job postings
#[utoipa::path(
    get,
    path = "/api/v1/recruitment/jobs",
    responses(
        (status = 200, body = [JobPosting]),
        (status = 401)
    ),
    security(("bearer_auth" = [])),
    tag = "Recruitment"
)]
pub async fn list_job_postings(
    _auth: AuthUser,
    pool: web::Data<MySqlPool>,
) -> actix_web::Result<impl Responder> {
    let postings =
        sqlx::query_as::<_, JobPosting>("SELECT * FROM job_postings ORDER BY posted_at DESC")
            .fetch_all(pool.get_ref())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to fetch job postings");
                actix_web::error::ErrorInternalServerError("Internal Server Error")
            })?;

    Ok(HttpResponse::Ok().json(postings))
}

/// Close an open posting (HR/Admin)
#[utoipa::path(
    put,
    path = "/api/v1/recruitment/jobs/{job_id}/close",
    params(("job_id", description = "Job posting ID")),
    responses(
        (status = 200, description = "Posting closed"),
        (status = 400, description = "Posting not found or already closed"),
        (status = 401),
        (status = 403)
    ),
    security(("bearer_auth" = [])),
    tag = "Recruitment"
)]
pub async fn close_job_posting(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let job_id = path.into_inner();

    let result =
        sqlx::query("UPDATE job_postings SET status = 'closed' WHERE id = ? AND status = 'open'")
            .bind(job_id)
            .execute(pool.get_ref())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, job_id, "Failed to close job posting");
                actix_web::error::ErrorInternalServerError("Internal Server Error")
            })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Posting not found or already closed"
        })));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Posting closed"
    })))
}

/// File an application against an open posting
#[utoipa::path(
    post,
    path = "/api/v1/recruitment/jobs/{job_id}/apply",
    request_body = CreateApplication,
    params(("job_id", description = "Job posting ID")),
    responses(
        (status = 201, description = "Application filed"),
        (status = 400, description = "Posting is not open"),
        (status = 401),
        (status = 404, description = "Posting not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Recruitment"
)]
pub async fn apply_to_job(
    _auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
    payload: web::Json<CreateApplication>,
) -> actix_web::Result<impl Responder> {
    let job_id = path.into_inner();

    let status = sqlx::query_scalar::<_, String>("SELECT status FROM job_postings WHERE id = ?")
        .bind(job_id)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, job_id, "Failed to fetch job posting");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    match status.as_deref() {
        None => {
            return Ok(HttpResponse::NotFound().json(serde_json::json!({
                "message": "Posting not found"
            })));
        }
        Some("open") => {}
        Some(_) => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "message": "Posting is not open"
            })));
        }
    }

    sqlx::query(
        r#"
        INSERT INTO job_applications
            (job_posting_id, candidate_name, email, phone)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(job_id)
    .bind(&payload.candidate_name)
    .bind(&payload.email)
    .bind(&payload.phone)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, job_id, "Failed to file application");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Application filed",
        "status": "pending"
    })))
}

/// Candidate list (HR/Admin)
#[utoipa::path(
    get,
    path = "/api/v1/recruitment/applications",
    params(ApplicationFilter),
    responses(
        (status = 200, body = ApplicationListResponse),
        (status = 401),
        (status = 403)
    ),
    security(("bearer_auth" = [])),
    tag = "Recruitment"
)]
pub async fn list_applications(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    query: web::Query<ApplicationFilter>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(10).clamp(1, 100);
    let offset = (page - 1) * per_page;

    let mut where_sql = String::from(" WHERE 1=1");
    let mut args: Vec<FilterValue> = Vec::new();

    if let Some(job_posting_id) = query.job_posting_id {
        where_sql.push_str(" AND job_posting_id = ?");
        args.push(FilterValue::U64(job_posting_id));
    }

    if let Some(status) = query.status.as_deref() {
        where_sql.push_str(" AND status = ?");
        args.push(FilterValue::Str(status));
    }

    let count_sql = format!("SELECT COUNT(*) FROM job_applications{}", where_sql);
    let mut count_q = sqlx::query_scalar::<_, i64>(&count_sql);
    for arg in &args {
        count_q = match arg {
            FilterValue::U64(v) => count_q.bind(*v),
            FilterValue::Str(s) => count_q.bind(*s),
        };
    }

    let total = count_q.fetch_one(pool.get_ref()).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to count applications");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    let data_sql = format!(
        "SELECT * FROM job_applications{} ORDER BY applied_at DESC LIMIT ? OFFSET ?",
        where_sql
    );
    let mut data_q = sqlx::query_as::<_, JobApplication>(&data_sql);
    for arg in args {
        data_q = match arg {
            FilterValue::U64(v) => data_q.bind(v),
            FilterValue::Str(s) => data_q.bind(s),
        };
    }

    let data = data_q
        .bind(per_page as i64)
        .bind(offset as i64)
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch applications");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    Ok(HttpResponse::Ok().json(ApplicationListResponse {
        data,
        page,
        per_page,
        total,
    }))
}

/// Move a candidate through the pipeline (HR/Admin)
#[utoipa::path(
    put,
    path = "/api/v1/recruitment/applications/{application_id}/status",
    request_body = ApplicationStatusUpdate,
    params(("application_id", description = "Application ID")),
    responses(
        (status = 200, description = "Application status updated"),
        (status = 400, description = "Unknown status or transition not allowed"),
        (status = 401),
        (status = 403),
        (status = 404)
    ),
    security(("bearer_auth" = [])),
    tag = "Recruitment"
)]
pub async fn update_application_status(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
    payload: web::Json<ApplicationStatusUpdate>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let application_id = path.into_inner();
    let next = payload.status.as_str();

    if !matches!(next, "shortlisted" | "rejected" | "hired") {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Unknown status. Allowed: shortlisted, rejected, hired"
        })));
    }

    let current =
        sqlx::query_scalar::<_, String>("SELECT status FROM job_applications WHERE id = ?")
            .bind(application_id)
            .fetch_optional(pool.get_ref())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, application_id, "Failed to fetch application");
                actix_web::error::ErrorInternalServerError("Internal Server Error")
            })?;

    let current = match current {
        Some(c) => c,
        None => {
            return Ok(HttpResponse::NotFound().json(serde_json::json!({
                "message": "Application not found"
            })));
        }
    };

    if !allowed_transition(&current, next) {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": format!("Cannot move application from '{current}' to '{next}'")
        })));
    }

    // Guard on the current status so two racing reviewers cannot both win.
    let result = sqlx::query("UPDATE job_applications SET status = ? WHERE id = ? AND status = ?")
        .bind(next)
        .bind(application_id)
        .bind(&current)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, application_id, "Application status update failed");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Application changed concurrently, retry"
        })));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Application status updated"
    })))
}

#[cfg(test)]
mod tests {
    use super::allowed_transition;

    #[test]
    fn pipeline_transitions() {
        assert!(allowed_transition("pending", "shortlisted"));
        assert!(allowed_transition("pending", "rejected"));
        assert!(allowed_transition("shortlisted", "hired"));
        assert!(allowed_transition("shortlisted", "rejected"));

        assert!(!allowed_transition("pending", "hired"));
        assert!(!allowed_transition("hired", "rejected"));
        assert!(!allowed_transition("rejected", "shortlisted"));
    }
}
