use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;
use utoipa::{IntoParams, ToSchema};

use crate::auth::auth::AuthUser;
use crate::config::Config;
use crate::model::payroll::{Payroll, PayrollItem, PayrollStatus};
use crate::payroll::tax;
use crate::payroll::{CustomDeduction, PayrollEngine, PayrollError, PayrollPeriod, ProcessOptions};

#[derive(Deserialize, ToSchema)]
pub struct CustomDeductionInput {
    #[schema(example = 2)]
    pub deduction_type_id: Option<u64>,

    #[schema(example = "Company loan amortization")]
    pub description: String,

    #[schema(example = "750.50", value_type = String)]
    pub amount: Decimal,
}

#[derive(Deserialize, ToSchema)]
pub struct ProcessPayrollRequest {
    #[schema(example = 1001)]
    pub employee_id: u64,

    #[schema(example = "2026-07")]
    pub payroll_period: String,

    #[schema(example = "1200.00", value_type = String, nullable = true)]
    pub holiday_pay: Option<Decimal>,

    #[schema(example = "3000.00", value_type = String, nullable = true)]
    pub bonus: Option<Decimal>,

    /// Defaults to the last day of the period's month.
    #[schema(example = "2026-07-30", value_type = String, format = "date", nullable = true)]
    pub pay_date: Option<NaiveDate>,

    pub custom_deductions: Option<Vec<CustomDeductionInput>>,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct DuplicateCheckQuery {
    #[schema(example = 1001)]
    pub employee_id: u64,

    #[schema(example = "2026-07")]
    pub payroll_period: String,
}

#[derive(Serialize, ToSchema)]
pub struct DuplicateCheckResponse {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payroll: Option<Payroll>,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct PayrollQuery {
    #[schema(example = 1)]
    pub page: Option<u32>,

    #[schema(example = 10)]
    pub per_page: Option<u32>,

    #[schema(example = 1001)]
    pub employee_id: Option<u64>,

    #[schema(example = "2026-07")]
    pub payroll_period: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct PaginatedPayrollResponse {
    pub data: Vec<Payroll>,
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
}

#[derive(Serialize, ToSchema)]
pub struct PayrollDetailResponse {
    pub payroll: Payroll,
    pub items: Vec<PayrollItem>,
}

#[derive(Deserialize, ToSchema)]
pub struct StatusUpdateRequest {
    #[schema(example = "approved")]
    pub status: String,
}

/// Payslip data contract for the downstream renderer: employee identity,
/// the full monetary breakdown, and every non-earning item as an extra
/// deduction line.
#[derive(Serialize, sqlx::FromRow, ToSchema)]
pub struct PayslipData {
    pub payroll_id: u64,
    #[schema(example = "EMP-001")]
    pub employee_code: String,
    #[schema(example = "Juan dela Cruz")]
    pub employee_name: String,
    #[schema(example = "Finance")]
    pub department: String,
    #[schema(example = "Payroll Specialist")]
    pub position: String,
    #[schema(example = "2026-07")]
    pub payroll_period: String,
    #[schema(example = "2026-07-31", value_type = String, format = "date")]
    pub pay_date: NaiveDate,
    #[schema(example = "30000.00", value_type = String)]
    pub base_salary: Decimal,
    #[schema(example = "2130.68", value_type = String)]
    pub overtime_pay: Decimal,
    #[schema(example = "0.00", value_type = String)]
    pub holiday_pay: Decimal,
    #[schema(example = "2000.00", value_type = String)]
    pub allowance: Decimal,
    #[schema(example = "0.00", value_type = String)]
    pub bonus: Decimal,
    #[schema(example = "341.31", value_type = String)]
    pub philhealth: Decimal,
    #[schema(example = "500.00", value_type = String)]
    pub sss: Decimal,
    #[schema(example = "600.00", value_type = String)]
    pub pagibig: Decimal,
    #[schema(example = "2699.34", value_type = String)]
    pub withholding_tax: Decimal,
    #[schema(example = "34130.68", value_type = String)]
    pub total_earnings: Decimal,
    #[schema(example = "4140.65", value_type = String)]
    pub total_deductions: Decimal,
    #[schema(example = "29990.03", value_type = String)]
    pub net_pay: Decimal,
}

#[derive(Serialize, ToSchema)]
pub struct PayslipResponse {
    pub payslip: PayslipData,
    pub extra_deductions: Vec<PayrollItem>,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct HolidayPayQuery {
    /// true for a regular holiday (200%), false for a special
    /// non-working day (130%)
    #[schema(example = true)]
    pub regular: bool,
}

#[derive(Serialize, ToSchema)]
pub struct HolidayPayQuote {
    pub employee_id: u64,
    pub regular_holiday: bool,
    #[schema(example = "2727.27", value_type = String)]
    pub holiday_pay: Decimal,
}

#[derive(Serialize, ToSchema)]
pub struct ThirteenthMonthQuote {
    pub employee_id: u64,
    #[schema(example = "30000.00", value_type = String)]
    pub thirteenth_month_pay: Decimal,
}

// Typed SQLx binding for the dynamic list filters
enum FilterValue<'a> {
    U64(u64),
    Str(&'a str),
}

async fn fetch_base_salary(
    pool: &MySqlPool,
    employee_id: u64,
) -> actix_web::Result<Result<Decimal, HttpResponse>> {
    let base_salary =
        sqlx::query_scalar::<_, Option<Decimal>>("SELECT base_salary FROM employees WHERE id = ?")
            .bind(employee_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, employee_id, "Failed to fetch base salary");
                actix_web::error::ErrorInternalServerError("Internal Server Error")
            })?;

    Ok(match base_salary {
        None => Err(HttpResponse::NotFound().json(serde_json::json!({
            "message": "Employee not found"
        }))),
        Some(None) => Err(HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "message": "Employee has no base salary on record"
        }))),
        Some(Some(salary)) => Ok(salary),
    })
}

/// Process one payroll run
#[utoipa::path(
    post,
    path = "/api/v1/payroll/process",
    request_body = ProcessPayrollRequest,
    responses(
        (status = 201, description = "Payroll processed and locked", body = Payroll),
        (status = 400, description = "Invalid payroll period"),
        (status = 401),
        (status = 403),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Payroll already exists for this employee and period"),
        (status = 422, description = "Employee has no base salary on record")
    ),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn process_payroll(
    auth: AuthUser,
    engine: web::Data<PayrollEngine>,
    payload: web::Json<ProcessPayrollRequest>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let payload = payload.into_inner();

    let period: PayrollPeriod = match payload.payroll_period.parse() {
        Ok(period) => period,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "message": e.to_string()
            })));
        }
    };

    let opts = ProcessOptions {
        holiday_pay: payload.holiday_pay.unwrap_or_default(),
        bonus: payload.bonus.unwrap_or_default(),
        pay_date: payload.pay_date,
        custom_deductions: payload
            .custom_deductions
            .unwrap_or_default()
            .into_iter()
            .map(|item| CustomDeduction {
                deduction_type_id: item.deduction_type_id,
                description: item.description,
                amount: item.amount,
            })
            .collect(),
    };

    match engine
        .process(payload.employee_id, &period, opts, Some(auth.user_id))
        .await
    {
        Ok(payroll) => Ok(HttpResponse::Created().json(payroll)),
        Err(e @ PayrollError::DuplicatePeriod { .. }) => {
            Ok(HttpResponse::Conflict().json(serde_json::json!({
                "message": e.to_string()
            })))
        }
        Err(e @ PayrollError::EmployeeNotFound(_)) => {
            Ok(HttpResponse::NotFound().json(serde_json::json!({
                "message": e.to_string()
            })))
        }
        Err(e @ PayrollError::MissingBaseSalary(_)) => {
            Ok(HttpResponse::UnprocessableEntity().json(serde_json::json!({
                "message": e.to_string()
            })))
        }
        Err(e @ PayrollError::InvalidPeriod(_)) => {
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "message": e.to_string()
            })))
        }
        Err(PayrollError::Database(e)) => {
            tracing::error!(error = %e, employee_id = payload.employee_id, "Payroll processing failed");
            Err(actix_web::error::ErrorInternalServerError(
                "Internal Server Error",
            ))
        }
    }
}

/// Duplicate pre-check before processing
#[utoipa::path(
    get,
    path = "/api/v1/payroll/check-duplicate",
    params(DuplicateCheckQuery),
    responses(
        (status = 200, body = DuplicateCheckResponse),
        (status = 400, description = "Invalid payroll period"),
        (status = 401),
        (status = 403)
    ),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn check_duplicate(
    auth: AuthUser,
    engine: web::Data<PayrollEngine>,
    query: web::Query<DuplicateCheckQuery>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let period: PayrollPeriod = match query.payroll_period.parse() {
        Ok(period) => period,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "message": e.to_string()
            })));
        }
    };

    let payroll = engine
        .find_existing(query.employee_id, &period)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, employee_id = query.employee_id, "Duplicate check failed");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    Ok(HttpResponse::Ok().json(DuplicateCheckResponse {
        exists: payroll.is_some(),
        payroll,
    }))
}

/// List payrolls
#[utoipa::path(
    get,
    path = "/api/v1/payroll",
    params(PayrollQuery),
    responses(
        (status = 200, body = PaginatedPayrollResponse),
        (status = 401),
        (status = 403)
    ),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn list_payrolls(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    query: web::Query<PayrollQuery>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(10).clamp(1, 100);
    let offset = (page - 1) * per_page;

    let mut where_sql = String::from(" WHERE 1=1");
    let mut args: Vec<FilterValue> = Vec::new();

    if let Some(employee_id) = query.employee_id {
        where_sql.push_str(" AND employee_id = ?");
        args.push(FilterValue::U64(employee_id));
    }

    if let Some(period) = query.payroll_period.as_deref() {
        where_sql.push_str(" AND payroll_period = ?");
        args.push(FilterValue::Str(period));
    }

    let count_sql = format!("SELECT COUNT(*) FROM payrolls{}", where_sql);
    let mut count_q = sqlx::query_scalar::<_, i64>(&count_sql);
    for arg in &args {
        count_q = match arg {
            FilterValue::U64(v) => count_q.bind(*v),
            FilterValue::Str(s) => count_q.bind(*s),
        };
    }

    let total = count_q.fetch_one(pool.get_ref()).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to count payrolls");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    let data_sql = format!(
        "SELECT * FROM payrolls{} ORDER BY payroll_period DESC, employee_id LIMIT ? OFFSET ?",
        where_sql
    );
    let mut data_q = sqlx::query_as::<_, Payroll>(&data_sql);
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
            tracing::error!(error = %e, "Failed to fetch payroll list");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    Ok(HttpResponse::Ok().json(PaginatedPayrollResponse {
        data,
        page,
        per_page,
        total,
    }))
}

/// Get one payroll with its items
#[utoipa::path(
    get,
    path = "/api/v1/payroll/{payroll_id}",
    params(("payroll_id", description = "Payroll ID")),
    responses(
        (status = 200, body = PayrollDetailResponse),
        (status = 401),
        (status = 403),
        (status = 404)
    ),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn get_payroll(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let payroll_id = path.into_inner();

    let payroll = sqlx::query_as::<_, Payroll>("SELECT * FROM payrolls WHERE id = ?")
        .bind(payroll_id)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, payroll_id, "Failed to fetch payroll");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    let payroll = match payroll {
        Some(p) => p,
        None => {
            return Ok(HttpResponse::NotFound().json(serde_json::json!({
                "message": "Payroll not found"
            })));
        }
    };

    let items = sqlx::query_as::<_, PayrollItem>(
        "SELECT * FROM payroll_items WHERE payroll_id = ? ORDER BY id",
    )
    .bind(payroll_id)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, payroll_id, "Failed to fetch payroll items");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok().json(PayrollDetailResponse { payroll, items }))
}

/// Payslip data for the downstream renderer
#[utoipa::path(
    get,
    path = "/api/v1/payroll/{payroll_id}/payslip",
    params(("payroll_id", description = "Payroll ID")),
    responses(
        (status = 200, body = PayslipResponse),
        (status = 401),
        (status = 403),
        (status = 404)
    ),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn get_payslip(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let payroll_id = path.into_inner();

    let payslip = sqlx::query_as::<_, PayslipData>(
        r#"
        SELECT
            p.id AS payroll_id,
            e.employee_code,
            CONCAT(e.first_name, ' ', e.last_name) AS employee_name,
            d.name AS department,
            j.title AS position,
            p.payroll_period,
            p.pay_date,
            p.base_salary,
            p.overtime_pay,
            p.holiday_pay,
            p.allowance,
            p.bonus,
            p.philhealth,
            p.sss,
            p.pagibig,
            p.withholding_tax,
            p.total_earnings,
            p.total_deductions,
            p.net_pay
        FROM payrolls p
        JOIN employees e ON e.id = p.employee_id
        JOIN departments d ON d.id = e.department_id
        JOIN job_titles j ON j.id = e.job_title_id
        WHERE p.id = ?
        "#,
    )
    .bind(payroll_id)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, payroll_id, "Failed to fetch payslip data");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    let payslip = match payslip {
        Some(p) => p,
        None => {
            return Ok(HttpResponse::NotFound().json(serde_json::json!({
                "message": "Payroll not found"
            })));
        }
    };

    let extra_deductions = sqlx::query_as::<_, PayrollItem>(
        "SELECT * FROM payroll_items WHERE payroll_id = ? AND item_type <> 'earning' ORDER BY id",
    )
    .bind(payroll_id)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, payroll_id, "Failed to fetch payslip deduction lines");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok().json(PayslipResponse {
        payslip,
        extra_deductions,
    }))
}

/// Workflow transition: processed → approved → paid
#[utoipa::path(
    put,
    path = "/api/v1/payroll/{payroll_id}/status",
    request_body = StatusUpdateRequest,
    params(("payroll_id", description = "Payroll ID")),
    responses(
        (status = 200, description = "Status updated"),
        (status = 400, description = "Invalid transition or payroll not in the required state"),
        (status = 401),
        (status = 403)
    ),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn update_status(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
    payload: web::Json<StatusUpdateRequest>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let payroll_id = path.into_inner();

    let new_status: PayrollStatus = match payload.status.parse() {
        Ok(status) => status,
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "message": "Unknown status. Allowed: approved, paid"
            })));
        }
    };

    // Each transition requires its exact predecessor so a paid record can
    // never slide backwards.
    let required_prev = match new_status {
        PayrollStatus::Approved => PayrollStatus::Processed,
        PayrollStatus::Paid => PayrollStatus::Approved,
        PayrollStatus::Draft | PayrollStatus::Processed => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "message": "Only approved and paid transitions are allowed"
            })));
        }
    };

    let result = sqlx::query("UPDATE payrolls SET status = ? WHERE id = ? AND status = ?")
        .bind(new_status.to_string())
        .bind(payroll_id)
        .bind(required_prev.to_string())
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, payroll_id, "Status update failed");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": format!("Payroll not found or not in '{required_prev}' state")
        })));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Status updated"
    })))
}

async fn set_locked(
    pool: &MySqlPool,
    payroll_id: u64,
    locked: bool,
) -> actix_web::Result<HttpResponse> {
    let result = sqlx::query("UPDATE payrolls SET is_locked = ? WHERE id = ?")
        .bind(locked)
        .bind(payroll_id)
        .execute(pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, payroll_id, locked, "Lock toggle failed");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": "Payroll not found"
        })));
    }

    let message = if locked {
        "Payroll locked"
    } else {
        "Payroll unlocked"
    };

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": message
    })))
}

/// Privileged unlock of a processed payroll
#[utoipa::path(
    put,
    path = "/api/v1/payroll/{payroll_id}/unlock",
    params(("payroll_id", description = "Payroll ID")),
    responses(
        (status = 200, description = "Payroll unlocked"),
        (status = 401),
        (status = 403),
        (status = 404)
    ),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn unlock_payroll(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;
    set_locked(pool.get_ref(), path.into_inner(), false).await
}

/// Re-lock a payroll after privileged edits
#[utoipa::path(
    put,
    path = "/api/v1/payroll/{payroll_id}/lock",
    params(("payroll_id", description = "Payroll ID")),
    responses(
        (status = 200, description = "Payroll locked"),
        (status = 401),
        (status = 403),
        (status = 404)
    ),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn lock_payroll(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;
    set_locked(pool.get_ref(), path.into_inner(), true).await
}

/// Delete a payroll (refused while locked)
#[utoipa::path(
    delete,
    path = "/api/v1/payroll/{payroll_id}",
    params(("payroll_id", description = "Payroll ID")),
    responses(
        (status = 200, description = "Payroll deleted"),
        (status = 401),
        (status = 403),
        (status = 404),
        (status = 409, description = "Payroll is locked")
    ),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn delete_payroll(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let payroll_id = path.into_inner();

    let is_locked =
        sqlx::query_scalar::<_, bool>("SELECT is_locked FROM payrolls WHERE id = ?")
            .bind(payroll_id)
            .fetch_optional(pool.get_ref())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, payroll_id, "Failed to fetch payroll lock state");
                actix_web::error::ErrorInternalServerError("Internal Server Error")
            })?;

    match is_locked {
        None => {
            return Ok(HttpResponse::NotFound().json(serde_json::json!({
                "message": "Payroll not found"
            })));
        }
        Some(true) => {
            return Ok(HttpResponse::Conflict().json(serde_json::json!({
                "message": "Payroll is locked; unlock it before deleting"
            })));
        }
        Some(false) => {}
    }

    let internal = |e: sqlx::Error| {
        tracing::error!(error = %e, payroll_id, "Failed to delete payroll");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    };

    let mut tx = pool.begin().await.map_err(internal)?;

    sqlx::query("DELETE FROM payroll_items WHERE payroll_id = ?")
        .bind(payroll_id)
        .execute(&mut *tx)
        .await
        .map_err(internal)?;

    sqlx::query("DELETE FROM payrolls WHERE id = ?")
        .bind(payroll_id)
        .execute(&mut *tx)
        .await
        .map_err(internal)?;

    tx.commit().await.map_err(internal)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Payroll deleted"
    })))
}

/// Holiday-pay quote, used to prefill a run's holiday_pay input
#[utoipa::path(
    get,
    path = "/api/v1/payroll/holiday-pay/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID"),
        HolidayPayQuery
    ),
    responses(
        (status = 200, body = HolidayPayQuote),
        (status = 401),
        (status = 403),
        (status = 404, description = "Employee not found"),
        (status = 422, description = "Employee has no base salary on record")
    ),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn holiday_pay_quote(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    config: web::Data<Config>,
    path: web::Path<u64>,
    query: web::Query<HolidayPayQuery>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let employee_id = path.into_inner();

    let base_salary = match fetch_base_salary(pool.get_ref(), employee_id).await? {
        Ok(salary) => salary,
        Err(response) => return Ok(response),
    };

    let holiday_pay = tax::holiday_pay(base_salary, query.regular, &config.payroll)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Ok(HttpResponse::Ok().json(HolidayPayQuote {
        employee_id,
        regular_holiday: query.regular,
        holiday_pay,
    }))
}

/// 13th-month pay figure for an employee
#[utoipa::path(
    get,
    path = "/api/v1/payroll/thirteenth-month/{employee_id}",
    params(("employee_id", Path, description = "Employee ID")),
    responses(
        (status = 200, body = ThirteenthMonthQuote),
        (status = 401),
        (status = 403),
        (status = 404, description = "Employee not found"),
        (status = 422, description = "Employee has no base salary on record")
    ),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn thirteenth_month_quote(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let employee_id = path.into_inner();

    let base_salary = match fetch_base_salary(pool.get_ref(), employee_id).await? {
        Ok(salary) => salary,
        Err(response) => return Ok(response),
    };

    let thirteenth_month_pay = tax::thirteenth_month_pay(base_salary)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Ok(HttpResponse::Ok().json(ThirteenthMonthQuote {
        employee_id,
        thirteenth_month_pay,
    }))
}
