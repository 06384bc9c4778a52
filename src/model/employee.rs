use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Marital status as recorded on the employee profile. The payroll core
/// reads it as a "has dependents" proxy only.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
    Other,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_code": "EMP-001",
        "first_name": "Juan",
        "last_name": "dela Cruz",
        "email": "juan.delacruz@company.com",
        "phone": "+639171234567",
        "department_id": 10,
        "job_title_id": 3,
        "hire_date": "2024-01-01",
        "base_salary": "30000.00",
        "allowance": "2000.00",
        "marital_status": "single",
        "status": "active"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "EMP-001")]
    pub employee_code: String,

    #[schema(example = "Juan")]
    pub first_name: String,

    #[schema(example = "dela Cruz")]
    pub last_name: String,

    #[schema(example = "juan.delacruz@company.com")]
    pub email: String,

    #[schema(example = "+639171234567", nullable = true)]
    pub phone: Option<String>,

    #[schema(example = 10)]
    pub department_id: u64,

    #[schema(example = 3)]
    pub job_title_id: u64,

    #[schema(
        example = "2024-01-01",
        value_type = String,
        format = "date"
    )]
    pub hire_date: NaiveDate,

    /// Monthly base salary; NULL until HR fills it in, at which point the
    /// employee becomes payroll-eligible.
    #[schema(example = "30000.00", value_type = String, nullable = true)]
    pub base_salary: Option<Decimal>,

    #[schema(example = "2000.00", value_type = String)]
    pub allowance: Decimal,

    #[schema(example = "single")]
    pub marital_status: String,

    #[schema(example = "active")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marital_status_round_trips_through_strings() {
        assert_eq!(MaritalStatus::Single.to_string(), "single");
        assert_eq!(
            "married".parse::<MaritalStatus>().unwrap(),
            MaritalStatus::Married
        );
        assert_eq!(
            "WIDOWED".parse::<MaritalStatus>().unwrap(),
            MaritalStatus::Widowed
        );
        assert!("unknown".parse::<MaritalStatus>().is_err());
    }
}
