use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use sqlx::MySqlPool;
use utoipa::ToSchema;

use crate::auth::auth::AuthUser;
use crate::model::deduction_type::DeductionType;

#[derive(Deserialize, ToSchema)]
pub struct CreateDeductionType {
    #[schema(example = "Company loan")]
    pub name: String,
    #[schema(example = "Amortization of an approved company loan", nullable = true)]
    pub description: Option<String>,
}

/// Register a deduction classification (Admin)
#[utoipa::path(
    post,
    path = "/api/v1/deduction-types",
    request_body = CreateDeductionType,
    responses(
        (status = 201, description = "Deduction type created"),
        (status = 401),
        (status = 403),
        (status = 409, description = "Name already exists")
    ),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn create_deduction_type(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateDeductionType>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let result = sqlx::query("INSERT INTO deduction_types (name, description) VALUES (?, ?)")
        .bind(&payload.name)
        .bind(&payload.description)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(_) => Ok(HttpResponse::Created().json(serde_json::json!({
            "message": "Deduction type created"
        }))),
        Err(e) => {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.code().as_deref() == Some("23000") {
                    return Ok(HttpResponse::Conflict().json(serde_json::json!({
                        "message": "Deduction type already exists"
                    })));
                }
            }

            tracing::error!(error = %e, "Failed to create deduction type");
            Err(actix_web::error::ErrorInternalServerError(
                "Internal Server Error",
            ))
        }
    }
}

/// List deduction classifications
#[utoipa::path(
    get,
    path = "/api/v1/deduction-types",
    responses(
        (status = 200, body = [DeductionType]),
        (status = 401),
        (status = 403)
    ),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn list_deduction_types(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let types = sqlx::query_as::<_, DeductionType>("SELECT * FROM deduction_types ORDER BY name")
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch deduction types");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    Ok(HttpResponse::Ok().json(types))
}
