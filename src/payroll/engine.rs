//! One payroll run, end to end: gather inputs, compute, persist atomically.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use sqlx::MySqlPool;
use tracing::info;

use super::error::{PayrollError, PayrollResult};
use super::period::PayrollPeriod;
use super::{contributions, tax};
use crate::config::PayrollCalendar;
use crate::model::employee::MaritalStatus;
use crate::model::payroll::{ItemType, Payroll, PayrollStatus};

/// Time source injected into the engine so runs are reproducible in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time for production use.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// An ad hoc deduction line attached to a run.
#[derive(Debug, Clone)]
pub struct CustomDeduction {
    pub deduction_type_id: Option<u64>,
    pub description: String,
    pub amount: Decimal,
}

/// Caller-supplied extras for one run. Everything defaults to "none".
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    pub holiday_pay: Decimal,
    pub bonus: Decimal,
    /// Defaults to the last day of the period's month.
    pub pay_date: Option<NaiveDate>,
    pub custom_deductions: Vec<CustomDeduction>,
}

/// The fully computed monetary side of one run, every field already rounded
/// to the centavo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollBreakdown {
    pub base_salary: Decimal,
    pub allowance: Decimal,
    pub overtime_pay: Decimal,
    pub holiday_pay: Decimal,
    pub bonus: Decimal,
    pub total_earnings: Decimal,
    pub philhealth: Decimal,
    pub sss: Decimal,
    pub pagibig: Decimal,
    pub withholding_tax: Decimal,
    pub custom_deductions: Decimal,
    pub total_deductions: Decimal,
    pub net_pay: Decimal,
}

fn round_centavo(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Pure computation for one run.
///
/// PhilHealth and withholding tax are assessed on gross earnings, SSS and
/// Pag-IBIG on base salary only. The asymmetry is deliberate and must not
/// be "fixed".
pub fn compute_breakdown(
    base_salary: Decimal,
    allowance: Decimal,
    overtime_hours: Decimal,
    marital_status: MaritalStatus,
    opts: &ProcessOptions,
    calendar: &PayrollCalendar,
) -> PayrollBreakdown {
    let hourly_rate = base_salary / (calendar.hours_per_day * calendar.working_days_per_month);
    let overtime_rate = hourly_rate * calendar.overtime_multiplier;
    let overtime_pay = round_centavo(overtime_hours * overtime_rate);

    let base_salary = round_centavo(base_salary);
    let allowance = round_centavo(allowance);
    let holiday_pay = round_centavo(opts.holiday_pay);
    let bonus = round_centavo(opts.bonus);
    let total_earnings = base_salary + allowance + overtime_pay + holiday_pay + bonus;

    let philhealth = round_centavo(contributions::philhealth(total_earnings));
    let sss = round_centavo(contributions::sss(base_salary));
    let pagibig = round_centavo(contributions::pagibig(base_salary));
    let withholding_tax = round_centavo(tax::monthly_withholding_tax(
        total_earnings,
        marital_status,
    ));

    let custom_deductions = round_centavo(
        opts.custom_deductions
            .iter()
            .map(|item| item.amount)
            .sum::<Decimal>(),
    );
    let total_deductions = philhealth + sss + pagibig + withholding_tax + custom_deductions;
    let net_pay = total_earnings - total_deductions;

    PayrollBreakdown {
        base_salary,
        allowance,
        overtime_pay,
        holiday_pay,
        bonus,
        total_earnings,
        philhealth,
        sss,
        pagibig,
        withholding_tax,
        custom_deductions,
        total_deductions,
        net_pay,
    }
}

#[derive(sqlx::FromRow)]
struct EmployeePayrollRow {
    base_salary: Option<Decimal>,
    allowance: Decimal,
    marital_status: String,
}

/// Runs one payroll for one employee and one period.
///
/// Dependencies are explicit: the pool, the working calendar and the clock
/// come in through the constructor, the acting user comes in per call.
pub struct PayrollEngine {
    pool: MySqlPool,
    calendar: PayrollCalendar,
    clock: Arc<dyn Clock>,
}

impl PayrollEngine {
    pub fn new(pool: MySqlPool, calendar: PayrollCalendar, clock: Arc<dyn Clock>) -> Self {
        Self {
            pool,
            calendar,
            clock,
        }
    }

    /// Read-only duplicate pre-check exposed to callers before processing.
    pub async fn find_existing(
        &self,
        employee_id: u64,
        period: &PayrollPeriod,
    ) -> PayrollResult<Option<Payroll>> {
        let payroll = sqlx::query_as::<_, Payroll>(
            "SELECT * FROM payrolls WHERE employee_id = ? AND payroll_period = ?",
        )
        .bind(employee_id)
        .bind(period.to_string())
        .fetch_optional(&self.pool)
        .await?;

        Ok(payroll)
    }

    /// Executes one run to completion or fails with nothing persisted.
    ///
    /// The Payroll row and all custom-deduction items are written in a
    /// single transaction; the unique key on (employee_id, payroll_period)
    /// is the authoritative duplicate guard, the pre-check above it just
    /// gives a friendlier fast path.
    pub async fn process(
        &self,
        employee_id: u64,
        period: &PayrollPeriod,
        opts: ProcessOptions,
        processed_by: Option<u64>,
    ) -> PayrollResult<Payroll> {
        // 1. Inputs: the employee must exist and carry a base salary.
        let employee = sqlx::query_as::<_, EmployeePayrollRow>(
            "SELECT base_salary, allowance, marital_status FROM employees WHERE id = ?",
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(PayrollError::EmployeeNotFound(employee_id))?;

        let base_salary = employee
            .base_salary
            .ok_or(PayrollError::MissingBaseSalary(employee_id))?;

        // 2. Duplicate fast path.
        if self.find_existing(employee_id, period).await?.is_some() {
            return Err(PayrollError::DuplicatePeriod {
                employee_id,
                period: period.to_string(),
            });
        }

        // 3. Overtime hours over the period's calendar month, inclusive.
        let overtime_hours = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(SUM(overtime_hours), 0)
            FROM attendance
            WHERE employee_id = ? AND date BETWEEN ? AND ?
            "#,
        )
        .bind(employee_id)
        .bind(period.first_day())
        .bind(period.last_day())
        .fetch_one(&self.pool)
        .await?;

        let marital_status = employee
            .marital_status
            .parse::<MaritalStatus>()
            .unwrap_or(MaritalStatus::Other);

        let breakdown = compute_breakdown(
            base_salary,
            employee.allowance,
            overtime_hours,
            marital_status,
            &opts,
            &self.calendar,
        );
        let pay_date = opts.pay_date.unwrap_or_else(|| period.last_day());
        let processed_at = self.clock.now();

        // 4. Persist the record and its items atomically.
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO payrolls
                (employee_id, payroll_period, pay_date,
                 base_salary, overtime_pay, holiday_pay, allowance, bonus,
                 philhealth, sss, pagibig, withholding_tax,
                 total_earnings, total_deductions, net_pay,
                 status, is_locked, processed_by, processed_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(employee_id)
        .bind(period.to_string())
        .bind(pay_date)
        .bind(breakdown.base_salary)
        .bind(breakdown.overtime_pay)
        .bind(breakdown.holiday_pay)
        .bind(breakdown.allowance)
        .bind(breakdown.bonus)
        .bind(breakdown.philhealth)
        .bind(breakdown.sss)
        .bind(breakdown.pagibig)
        .bind(breakdown.withholding_tax)
        .bind(breakdown.total_earnings)
        .bind(breakdown.total_deductions)
        .bind(breakdown.net_pay)
        .bind(PayrollStatus::Processed.to_string())
        .bind(true)
        .bind(processed_by)
        .bind(processed_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_duplicate_key(e, employee_id, period))?;

        let payroll_id = inserted.last_insert_id();

        for item in &opts.custom_deductions {
            sqlx::query(
                r#"
                INSERT INTO payroll_items
                    (payroll_id, deduction_type_id, item_type, description, amount)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(payroll_id)
            .bind(item.deduction_type_id)
            .bind(ItemType::Deduction.to_string())
            .bind(&item.description)
            .bind(round_centavo(item.amount))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        info!(
            employee_id,
            period = %period,
            payroll_id,
            net_pay = %breakdown.net_pay,
            "Payroll processed"
        );

        self.find_existing(employee_id, period)
            .await?
            .ok_or(PayrollError::Database(sqlx::Error::RowNotFound))
    }
}

/// A losing insert race on the (employee_id, payroll_period) unique key
/// surfaces as MySQL error 23000; report it as the same duplicate error the
/// pre-check produces.
fn map_duplicate_key(e: sqlx::Error, employee_id: u64, period: &PayrollPeriod) -> PayrollError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code().as_deref() == Some("23000") {
            return PayrollError::DuplicatePeriod {
                employee_id,
                period: period.to_string(),
            };
        }
    }
    PayrollError::Database(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn options() -> ProcessOptions {
        ProcessOptions::default()
    }

    #[test]
    fn overtime_pay_from_hourly_rate_times_125_percent() {
        // 30,000 / 176 = 170.4545… hourly; ×1.25 = 213.068…; ×10h = 2,130.68
        let breakdown = compute_breakdown(
            dec!(30000),
            Decimal::ZERO,
            dec!(10),
            MaritalStatus::Single,
            &options(),
            &PayrollCalendar::default(),
        );
        assert_eq!(breakdown.overtime_pay, dec!(2130.68));
    }

    #[test]
    fn totals_balance_exactly() {
        let opts = ProcessOptions {
            holiday_pay: dec!(1200),
            bonus: dec!(3000),
            pay_date: None,
            custom_deductions: vec![
                CustomDeduction {
                    deduction_type_id: Some(1),
                    description: "Company loan".to_string(),
                    amount: dec!(750.50),
                },
                CustomDeduction {
                    deduction_type_id: None,
                    description: "Uniform".to_string(),
                    amount: dec!(199.25),
                },
            ],
        };
        let breakdown = compute_breakdown(
            dec!(30000),
            dec!(2000),
            dec!(6.5),
            MaritalStatus::Married,
            &opts,
            &PayrollCalendar::default(),
        );

        assert_eq!(
            breakdown.total_earnings,
            breakdown.base_salary
                + breakdown.allowance
                + breakdown.overtime_pay
                + breakdown.holiday_pay
                + breakdown.bonus
        );
        assert_eq!(
            breakdown.total_deductions,
            breakdown.philhealth
                + breakdown.sss
                + breakdown.pagibig
                + breakdown.withholding_tax
                + breakdown.custom_deductions
        );
        assert_eq!(
            breakdown.net_pay,
            breakdown.total_earnings - breakdown.total_deductions
        );
        assert_eq!(breakdown.custom_deductions, dec!(949.75));
    }

    #[test]
    fn statutory_bases_are_asymmetric() {
        // Bonus lifts gross but must only move the income-assessed
        // deductions, not SSS or Pag-IBIG.
        let plain = compute_breakdown(
            dec!(18000),
            Decimal::ZERO,
            Decimal::ZERO,
            MaritalStatus::Single,
            &options(),
            &PayrollCalendar::default(),
        );
        let with_bonus = compute_breakdown(
            dec!(18000),
            Decimal::ZERO,
            Decimal::ZERO,
            MaritalStatus::Single,
            &ProcessOptions {
                bonus: dec!(10000),
                ..options()
            },
            &PayrollCalendar::default(),
        );

        assert_eq!(plain.sss, with_bonus.sss);
        assert_eq!(plain.pagibig, with_bonus.pagibig);
        assert!(with_bonus.philhealth > plain.philhealth);
        assert!(with_bonus.withholding_tax > plain.withholding_tax);
    }

    #[test]
    fn every_persisted_field_is_centavo_rounded() {
        let breakdown = compute_breakdown(
            dec!(31234.56),
            dec!(1000.333),
            dec!(7.25),
            MaritalStatus::Single,
            &options(),
            &PayrollCalendar::default(),
        );
        for amount in [
            breakdown.base_salary,
            breakdown.allowance,
            breakdown.overtime_pay,
            breakdown.holiday_pay,
            breakdown.bonus,
            breakdown.total_earnings,
            breakdown.philhealth,
            breakdown.sss,
            breakdown.pagibig,
            breakdown.withholding_tax,
            breakdown.custom_deductions,
            breakdown.total_deductions,
            breakdown.net_pay,
        ] {
            assert!(amount.scale() <= 2, "expected 2dp, got {amount}");
        }
    }

    #[test]
    fn zero_salary_produces_floor_contributions() {
        let breakdown = compute_breakdown(
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            MaritalStatus::Single,
            &options(),
            &PayrollCalendar::default(),
        );
        assert_eq!(breakdown.sss, dec!(170));
        assert_eq!(breakdown.philhealth, Decimal::ZERO);
        assert_eq!(breakdown.withholding_tax, Decimal::ZERO);
        assert_eq!(breakdown.net_pay, dec!(-170));
    }
}
