use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use sqlx::MySqlPool;
use utoipa::ToSchema;

use crate::auth::auth::AuthUser;
use crate::model::department::Department;
use crate::model::job_title::JobTitle;

#[derive(Deserialize, ToSchema)]
pub struct CreateDepartment {
    #[schema(example = "Finance")]
    pub name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateJobTitle {
    #[schema(example = "Payroll Specialist")]
    pub title: String,
}

/// Create a department (Admin)
#[utoipa::path(
    post,
    path = "/api/v1/departments",
    request_body = CreateDepartment,
    responses(
        (status = 201, description = "Department created"),
        (status = 401),
        (status = 403),
        (status = 409, description = "Name already exists")
    ),
    security(("bearer_auth" = [])),
    tag = "Organization"
)]
pub async fn create_department(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateDepartment>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let result = sqlx::query("INSERT INTO departments (name) VALUES (?)")
        .bind(&payload.name)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(_) => Ok(HttpResponse::Created().json(serde_json::json!({
            "message": "Department created"
        }))),
        Err(e) => {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.code().as_deref() == Some("23000") {
                    return Ok(HttpResponse::Conflict().json(serde_json::json!({
                        "message": "Department already exists"
                    })));
                }
            }

            tracing::error!(error = %e, "Failed to create department");
            Err(actix_web::error::ErrorInternalServerError(
                "Internal Server Error",
            ))
        }
    }
}

/// Department lookup for employee forms
#[utoipa::path(
    get,
    path = "/api/v1/departments",
    responses(
        (status = 200, body = [Department]),
        (status = 401)
    ),
    security(("bearer_auth" = [])),
    tag = "Organization"
)]
pub async fn list_departments(
    _auth: AuthUser,
    pool: web::Data<MySqlPool>,
) -> actix_web::Result<impl Responder> {
    let departments = sqlx::query_as::<_, Department>("SELECT * FROM departments ORDER BY name")
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch departments");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    Ok(HttpResponse::Ok().json(departments))
}

/// Create a job title (Admin)
#[utoipa::path(
    post,
    path = "/api/v1/job-titles",
    request_body = CreateJobTitle,
    responses(
        (status = 201, description = "Job title created"),
        (status = 401),
        (status = 403),
        (status = 409, description = "Title already exists")
    ),
    security(("bearer_auth" = [])),
    tag = "Organization"
)]
pub async fn create_job_title(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateJobTitle>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let result = sqlx::query("INSERT INTO job_titles (title) VALUES (?)")
        .bind(&payload.title)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(_) => Ok(HttpResponse::Created().json(serde_json::json!({
            "message": "Job title created"
        }))),
        Err(e) => {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.code().as_deref() == Some("23000") {
                    return Ok(HttpResponse::Conflict().json(serde_json::json!({
                        "message": "Job title already exists"
                    })));
                }
            }

            tracing::error!(error = %e, "Failed to create job title");
            Err(actix_web::error::ErrorInternalServerError(
                "Internal Server Error",
            ))
        }
    }
}

/// Job-title lookup for employee forms
#[utoipa::path(
    get,
    path = "/api/v1/job-titles",
    responses(
        (status = 200, body = [JobTitle]),
        (status = 401)
    ),
    security(("bearer_auth" = [])),
    tag = "Organization"
)]
pub async fn list_job_titles(
    _auth: AuthUser,
    pool: web::Data<MySqlPool>,
) -> actix_web::Result<impl Responder> {
    let titles = sqlx::query_as::<_, JobTitle>("SELECT * FROM job_titles ORDER BY title")
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch job titles");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    Ok(HttpResponse::Ok().json(titles))
}
