//! Statutory contribution calculators: PhilHealth, SSS and Pag-IBIG.
//!
//! All three are total functions over non-negative pesos. Out-of-range
//! input clamps to the nearest defined bracket; the calculators never fail.
//! Results are raw (unrounded); the engine applies centavo rounding when
//! it assembles the payroll record.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::brackets::{Bracket, lookup};

/// A bracket either applies a percentage to the assessed amount or charges
/// a fixed peso premium.
#[derive(Debug, Clone, Copy)]
pub enum Contribution {
    Rate(Decimal),
    Fixed(Decimal),
}

impl Contribution {
    fn apply(self, amount: Decimal) -> Decimal {
        match self {
            Contribution::Rate(rate) => amount * rate,
            Contribution::Fixed(peso) => peso,
        }
    }
}

/// PhilHealth premium table, total contribution before the 50/50
/// employee/employer split.
static PHILHEALTH_TABLE: Lazy<Vec<Bracket<Contribution>>> = Lazy::new(|| {
    vec![
        Bracket {
            min: dec!(0),
            max: Some(dec!(10000)),
            value: Contribution::Rate(dec!(0.01)),
        },
        Bracket {
            min: dec!(10000.01),
            max: Some(dec!(80000)),
            value: Contribution::Rate(dec!(0.02)),
        },
        Bracket {
            min: dec!(80000.01),
            max: None,
            value: Contribution::Fixed(dec!(1600)),
        },
    ]
});

/// Employee share for any salary above the last SSS bracket. Deliberately a
/// fallback default rather than an open-ended table row.
const SSS_CEILING_SHARE: Decimal = dec!(500);

fn sss_row(min: Decimal, max: Decimal, share: Decimal) -> Bracket<Decimal> {
    Bracket {
        min,
        max: Some(max),
        value: share,
    }
}

/// SSS employee-share table, ₱500 salary steps from ₱4,250 upward.
static SSS_TABLE: Lazy<Vec<Bracket<Decimal>>> = Lazy::new(|| {
    vec![
        sss_row(dec!(0), dec!(4249.99), dec!(170)),
        sss_row(dec!(4250), dec!(4749.99), dec!(180)),
        sss_row(dec!(4750), dec!(5249.99), dec!(190)),
        sss_row(dec!(5250), dec!(5749.99), dec!(200)),
        sss_row(dec!(5750), dec!(6249.99), dec!(210)),
        sss_row(dec!(6250), dec!(6749.99), dec!(220)),
        sss_row(dec!(6750), dec!(7249.99), dec!(230)),
        sss_row(dec!(7250), dec!(7749.99), dec!(240)),
        sss_row(dec!(7750), dec!(8249.99), dec!(250)),
        sss_row(dec!(8250), dec!(8749.99), dec!(260)),
        sss_row(dec!(8750), dec!(9249.99), dec!(270)),
        sss_row(dec!(9250), dec!(9749.99), dec!(280)),
        sss_row(dec!(9750), dec!(10249.99), dec!(290)),
        sss_row(dec!(10250), dec!(10749.99), dec!(300)),
        sss_row(dec!(10750), dec!(11249.99), dec!(310)),
        sss_row(dec!(11250), dec!(11749.99), dec!(320)),
        sss_row(dec!(11750), dec!(12249.99), dec!(330)),
        sss_row(dec!(12250), dec!(12749.99), dec!(340)),
        sss_row(dec!(12750), dec!(13249.99), dec!(350)),
        sss_row(dec!(13250), dec!(13749.99), dec!(360)),
        sss_row(dec!(13750), dec!(14249.99), dec!(370)),
        sss_row(dec!(14250), dec!(14749.99), dec!(380)),
        sss_row(dec!(14750), dec!(15249.99), dec!(390)),
        sss_row(dec!(15250), dec!(15749.99), dec!(400)),
        sss_row(dec!(15750), dec!(16249.99), dec!(410)),
        sss_row(dec!(16250), dec!(16749.99), dec!(420)),
        sss_row(dec!(16750), dec!(17249.99), dec!(430)),
        sss_row(dec!(17250), dec!(17749.99), dec!(440)),
        sss_row(dec!(17750), dec!(18249.99), dec!(450)),
        sss_row(dec!(18250), dec!(18749.99), dec!(460)),
        sss_row(dec!(18750), dec!(19249.99), dec!(470)),
        sss_row(dec!(19250), dec!(19749.99), dec!(480)),
        sss_row(dec!(19750), dec!(20249.99), dec!(490)),
        sss_row(dec!(20250), dec!(20749.99), dec!(500)),
    ]
});

/// Pag-IBIG two-tier employee rate. No ceiling on the 2% tier: the real
/// fund caps the share near ₱100/month, this engine does not.
static PAGIBIG_TABLE: Lazy<Vec<Bracket<Decimal>>> = Lazy::new(|| {
    vec![
        Bracket {
            min: dec!(0),
            max: Some(dec!(1500)),
            value: dec!(0.01),
        },
        Bracket {
            min: dec!(1500.01),
            max: None,
            value: dec!(0.02),
        },
    ]
});

/// PhilHealth employee share: half the bracketed premium on monthly income.
pub fn philhealth(monthly_income: Decimal) -> Decimal {
    let income = monthly_income.max(Decimal::ZERO);
    match lookup(&PHILHEALTH_TABLE, income) {
        Some(bracket) => bracket.value.apply(income) / dec!(2),
        None => Decimal::ZERO,
    }
}

/// SSS employee share for a monthly salary, ₱500 above the table's top bound.
pub fn sss(monthly_salary: Decimal) -> Decimal {
    let salary = monthly_salary.max(Decimal::ZERO);
    lookup(&SSS_TABLE, salary)
        .map(|bracket| bracket.value)
        .unwrap_or(SSS_CEILING_SHARE)
}

/// Pag-IBIG employee share: 1% of salary up to ₱1,500, 2% beyond.
pub fn pagibig(monthly_salary: Decimal) -> Decimal {
    let salary = monthly_salary.max(Decimal::ZERO);
    match lookup(&PAGIBIG_TABLE, salary) {
        Some(bracket) => salary * bracket.value,
        None => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payroll::brackets::assert_contiguous;

    #[test]
    fn philhealth_first_bracket_is_half_of_one_percent() {
        for income in [dec!(0), dec!(5000), dec!(9999.99), dec!(10000)] {
            assert_eq!(philhealth(income), income * dec!(0.005));
        }
    }

    #[test]
    fn philhealth_second_bracket_is_half_of_two_percent() {
        for income in [dec!(10000.01), dec!(45000), dec!(80000)] {
            assert_eq!(philhealth(income), income * dec!(0.01));
        }
    }

    #[test]
    fn philhealth_top_bracket_is_fixed_800() {
        assert_eq!(philhealth(dec!(80000.01)), dec!(800));
        assert_eq!(philhealth(dec!(250000)), dec!(800));
    }

    #[test]
    fn philhealth_negative_clamps_to_zero() {
        assert_eq!(philhealth(dec!(-100)), Decimal::ZERO);
    }

    #[test]
    fn sss_bracket_edge_4250_belongs_to_second_bracket() {
        // 4249.99 is the top of the first bracket, 4250 starts the second.
        assert_eq!(sss(dec!(4249.99)), dec!(170));
        assert_eq!(sss(dec!(4250)), dec!(180.00));
    }

    #[test]
    fn sss_floor_and_ceiling() {
        assert_eq!(sss(dec!(0)), dec!(170));
        assert_eq!(sss(dec!(20749.99)), dec!(500));
        // Above the top bound the fallback default applies.
        assert_eq!(sss(dec!(20750)), dec!(500.00));
        assert_eq!(sss(dec!(25000)), dec!(500.00));
    }

    #[test]
    fn sss_table_has_34_contiguous_monotone_brackets() {
        assert_eq!(SSS_TABLE.len(), 34);
        assert_contiguous(&SSS_TABLE);
        for pair in SSS_TABLE.windows(2) {
            assert!(pair[0].value < pair[1].value, "shares must increase");
        }
        assert_eq!(SSS_TABLE.first().unwrap().value, dec!(170));
        assert_eq!(SSS_TABLE.last().unwrap().value, dec!(500));
    }

    #[test]
    fn pagibig_boundary_at_1500() {
        assert_eq!(pagibig(dec!(1500)), dec!(15.00));
        assert_eq!(pagibig(dec!(1500.01)), dec!(30.0002));
    }

    #[test]
    fn pagibig_two_percent_is_uncapped() {
        assert_eq!(pagibig(dec!(30000)), dec!(600));
        assert_eq!(pagibig(dec!(1000000)), dec!(20000));
    }

    #[test]
    fn tables_are_contiguous() {
        assert_contiguous(&PHILHEALTH_TABLE);
        assert_contiguous(&PAGIBIG_TABLE);
    }
}
