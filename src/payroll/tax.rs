//! BIR withholding tax (TRAIN-law graduated table) plus the 13th-month and
//! holiday-pay helpers. Pure functions, no I/O.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::brackets::{Bracket, lookup};
use crate::config::PayrollCalendar;
use crate::model::employee::MaritalStatus;

pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// One band of the graduated annual table: a fixed base tax plus a rate on
/// the excess over the band floor.
#[derive(Debug, Clone, Copy)]
pub struct TaxBand {
    pub base_tax: Decimal,
    pub rate: Decimal,
    pub excess_over: Decimal,
}

fn band(base_tax: Decimal, rate: Decimal, excess_over: Decimal) -> TaxBand {
    TaxBand {
        base_tax,
        rate,
        excess_over,
    }
}

/// Annual income tax bands under the TRAIN law.
static ANNUAL_TAX_TABLE: Lazy<Vec<Bracket<TaxBand>>> = Lazy::new(|| {
    vec![
        Bracket {
            min: dec!(0),
            max: Some(dec!(250000)),
            value: band(dec!(0), dec!(0), dec!(0)),
        },
        Bracket {
            min: dec!(250000.01),
            max: Some(dec!(400000)),
            value: band(dec!(0), dec!(0.20), dec!(250000)),
        },
        Bracket {
            min: dec!(400000.01),
            max: Some(dec!(800000)),
            value: band(dec!(30000), dec!(0.25), dec!(400000)),
        },
        Bracket {
            min: dec!(800000.01),
            max: Some(dec!(2000000)),
            value: band(dec!(130000), dec!(0.30), dec!(800000)),
        },
        Bracket {
            min: dec!(2000000.01),
            max: Some(dec!(8000000)),
            value: band(dec!(490000), dec!(0.32), dec!(2000000)),
        },
        Bracket {
            min: dec!(8000000.01),
            max: None,
            value: band(dec!(2410000), dec!(0.35), dec!(8000000)),
        },
    ]
});

/// Monthly withholding: annualize the income (×12), read the band, and
/// bring the annual tax back down to a monthly figure.
///
/// `marital_status` is part of the accepted contract but does not change
/// the amount; every status withholds the same.
pub fn monthly_withholding_tax(monthly_income: Decimal, _marital_status: MaritalStatus) -> Decimal {
    let annual_income = monthly_income.max(Decimal::ZERO) * MONTHS_PER_YEAR;
    let annual_tax = match lookup(&ANNUAL_TAX_TABLE, annual_income) {
        Some(bracket) => {
            let band = bracket.value;
            band.base_tax + (annual_income - band.excess_over) * band.rate
        }
        None => Decimal::ZERO,
    };
    annual_tax / MONTHS_PER_YEAR
}

/// 13th-month pay: one month of base salary, no proration.
pub fn thirteenth_month_pay(base_salary: Decimal) -> Decimal {
    base_salary
}

/// Holiday pay from the daily rate: 200% on regular holidays, 130% on
/// special non-working days.
pub fn holiday_pay(
    base_salary: Decimal,
    regular_holiday: bool,
    calendar: &PayrollCalendar,
) -> Decimal {
    let daily_rate = base_salary / calendar.working_days_per_month;
    let multiplier = if regular_holiday {
        calendar.regular_holiday_multiplier
    } else {
        calendar.special_holiday_multiplier
    };
    daily_rate * multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payroll::brackets::assert_contiguous;

    #[test]
    fn monthly_50000_withholds_6666_67() {
        // 50,000 × 12 = 600,000 → 30,000 + (600,000 − 400,000) × 0.25 = 80,000/yr
        let tax = monthly_withholding_tax(dec!(50000), MaritalStatus::Single);
        assert_eq!(tax.round_dp(2), dec!(6666.67));
    }

    #[test]
    fn income_below_annual_250k_is_exempt() {
        assert_eq!(
            monthly_withholding_tax(dec!(20833.33), MaritalStatus::Single),
            Decimal::ZERO
        );
        assert_eq!(
            monthly_withholding_tax(Decimal::ZERO, MaritalStatus::Married),
            Decimal::ZERO
        );
    }

    #[test]
    fn second_band_taxes_excess_over_250k() {
        // 25,000 × 12 = 300,000 → (300,000 − 250,000) × 0.20 = 10,000/yr
        let tax = monthly_withholding_tax(dec!(25000), MaritalStatus::Single);
        assert_eq!(tax.round_dp(2), dec!(833.33));
    }

    #[test]
    fn top_band_applies_35_percent_on_excess() {
        // 1,000,000 × 12 = 12,000,000 → 2,410,000 + 4,000,000 × 0.35 = 3,810,000/yr
        let tax = monthly_withholding_tax(dec!(1000000), MaritalStatus::Single);
        assert_eq!(tax, dec!(317500));
    }

    #[test]
    fn marital_status_does_not_change_the_amount() {
        let statuses = [
            MaritalStatus::Single,
            MaritalStatus::Married,
            MaritalStatus::Divorced,
            MaritalStatus::Widowed,
            MaritalStatus::Other,
        ];
        let baseline = monthly_withholding_tax(dec!(50000), MaritalStatus::Single);
        for status in statuses {
            assert_eq!(monthly_withholding_tax(dec!(50000), status), baseline);
        }
    }

    #[test]
    fn tax_table_is_contiguous() {
        assert_contiguous(&ANNUAL_TAX_TABLE);
    }

    #[test]
    fn thirteenth_month_is_a_pass_through() {
        assert_eq!(thirteenth_month_pay(dec!(30000)), dec!(30000));
    }

    #[test]
    fn holiday_pay_multipliers() {
        let calendar = PayrollCalendar::default();
        // 22,000 / 22 = 1,000 daily
        assert_eq!(holiday_pay(dec!(22000), true, &calendar), dec!(2000.0));
        assert_eq!(holiday_pay(dec!(22000), false, &calendar), dec!(1300.0));
    }
}
