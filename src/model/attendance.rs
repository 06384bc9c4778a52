use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Attendance {
    pub id: u64,
    pub employee_id: u64,
    #[schema(example = "2026-07-15", value_type = String, format = "date")]
    pub date: NaiveDate,
    #[schema(example = "08:58:00", value_type = String, nullable = true)]
    pub check_in: Option<NaiveTime>,
    #[schema(example = "19:10:00", value_type = String, nullable = true)]
    pub check_out: Option<NaiveTime>,
    /// Hours beyond the regular working day, recorded at check-out and
    /// summed per month by the payroll engine.
    #[schema(example = "2.00", value_type = String)]
    pub overtime_hours: Decimal,
}
