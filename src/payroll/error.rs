use thiserror::Error;

/// Failures a payroll run can surface to its caller.
///
/// The statutory calculators themselves are total functions and never fail;
/// only orchestration-level steps (employee lookup, duplicate detection,
/// persistence) produce errors.
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A payroll record already exists for this employee and period.
    #[error("payroll already exists for employee {employee_id} in period {period}")]
    DuplicatePeriod { employee_id: u64, period: String },

    #[error("employee {0} not found")]
    EmployeeNotFound(u64),

    /// The employee row exists but carries no base salary, so nothing can be
    /// computed. Fails before any write.
    #[error("employee {0} has no base salary on record")]
    MissingBaseSalary(u64),

    #[error("invalid payroll period '{0}', expected YYYY-MM")]
    InvalidPeriod(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_period_names_employee_and_period() {
        let err = PayrollError::DuplicatePeriod {
            employee_id: 42,
            period: "2026-07".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "payroll already exists for employee 42 in period 2026-07"
        );
    }

    #[test]
    fn invalid_period_shows_expected_format() {
        let err = PayrollError::InvalidPeriod("2026/07".to_string());
        assert_eq!(
            err.to_string(),
            "invalid payroll period '2026/07', expected YYYY-MM"
        );
    }

    #[test]
    fn errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }
}
