use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Lifecycle of a payroll record. Stored as lowercase strings; the engine
/// only ever writes `processed`, the later transitions belong to the
/// approval workflow.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PayrollStatus {
    Draft,
    Processed,
    Approved,
    Paid,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Earning,
    Deduction,
}

/// One processed payroll run for one employee and one period. Monetary
/// fields are immutable once `is_locked` is set (which the engine does at
/// creation); only the explicit unlock action lifts that.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Payroll {
    pub id: u64,
    pub employee_id: u64,

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

    #[schema(example = "processed")]
    pub status: String,

    pub is_locked: bool,

    #[schema(example = 1, nullable = true)]
    pub processed_by: Option<u64>,

    #[schema(example = "2026-07-31T10:00:00Z", value_type = String, format = "date-time", nullable = true)]
    pub processed_at: Option<DateTime<Utc>>,

    #[schema(example = "2026-07-31T10:00:00Z", value_type = String, format = "date-time", nullable = true)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Ad hoc earning/deduction line attached to a payroll run at processing
/// time. Never mutated afterwards.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct PayrollItem {
    pub id: u64,
    pub payroll_id: u64,

    #[schema(example = 2, nullable = true)]
    pub deduction_type_id: Option<u64>,

    #[schema(example = "deduction")]
    pub item_type: String,

    #[schema(example = "Company loan amortization")]
    pub description: String,

    #[schema(example = "750.50", value_type = String)]
    pub amount: Decimal,

    #[schema(example = "2026-07-31T10:00:00Z", value_type = String, format = "date-time", nullable = true)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings_match_storage_format() {
        assert_eq!(PayrollStatus::Processed.to_string(), "processed");
        assert_eq!(
            "approved".parse::<PayrollStatus>().unwrap(),
            PayrollStatus::Approved
        );
        assert!("finalized".parse::<PayrollStatus>().is_err());
    }

    #[test]
    fn item_type_strings() {
        assert_eq!(ItemType::Deduction.to_string(), "deduction");
        assert_eq!("earning".parse::<ItemType>().unwrap(), ItemType::Earning);
    }
}
