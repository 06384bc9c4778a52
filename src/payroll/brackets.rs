//! Bracket-table machinery shared by the contribution and tax calculators.
//!
//! Every statutory table in this module's siblings is an ordered list of
//! inclusive `[min, max]` ranges with `.01` boundaries; the top range of an
//! open-ended table has no max. One lookup serves all of them so the
//! boundary semantics stay consistent.

use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy)]
pub struct Bracket<T> {
    pub min: Decimal,
    /// `None` marks the open-ended top bracket.
    pub max: Option<Decimal>,
    pub value: T,
}

impl<T> Bracket<T> {
    pub fn contains(&self, amount: Decimal) -> bool {
        amount >= self.min && self.max.is_none_or(|max| amount <= max)
    }
}

/// First bracket whose inclusive range contains `amount`.
///
/// Tables are small (the largest has 34 rows), so a linear scan is fine.
pub fn lookup<T>(table: &[Bracket<T>], amount: Decimal) -> Option<&Bracket<T>> {
    table.iter().find(|bracket| bracket.contains(amount))
}

/// Test support: asserts a table starts at zero, has no gaps or overlaps
/// (each min is the previous max plus one centavo) and at most one
/// open-ended bracket, at the end.
#[cfg(test)]
pub fn assert_contiguous<T>(table: &[Bracket<T>]) {
    use rust_decimal_macros::dec;

    assert!(!table.is_empty());
    assert_eq!(table[0].min, Decimal::ZERO, "table must start at zero");

    for pair in table.windows(2) {
        let upper = pair[0]
            .max
            .expect("only the last bracket may be open-ended");
        assert_eq!(
            pair[1].min,
            upper + dec!(0.01),
            "brackets must be contiguous at .01 boundaries"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn table() -> Vec<Bracket<u32>> {
        vec![
            Bracket {
                min: dec!(0),
                max: Some(dec!(100)),
                value: 1,
            },
            Bracket {
                min: dec!(100.01),
                max: Some(dec!(200)),
                value: 2,
            },
            Bracket {
                min: dec!(200.01),
                max: None,
                value: 3,
            },
        ]
    }

    #[test]
    fn boundaries_are_inclusive() {
        let table = table();
        assert_eq!(lookup(&table, dec!(100)).unwrap().value, 1);
        assert_eq!(lookup(&table, dec!(100.01)).unwrap().value, 2);
        assert_eq!(lookup(&table, dec!(200)).unwrap().value, 2);
    }

    #[test]
    fn open_ended_bracket_catches_everything_above() {
        let table = table();
        assert_eq!(lookup(&table, dec!(200.01)).unwrap().value, 3);
        assert_eq!(lookup(&table, dec!(9999999)).unwrap().value, 3);
    }

    #[test]
    fn below_table_returns_none() {
        let table = table();
        assert!(lookup(&table, dec!(-0.01)).is_none());
    }

    #[test]
    fn contiguity_helper_accepts_valid_table() {
        assert_contiguous(&table());
    }

    #[test]
    #[should_panic(expected = "contiguous")]
    fn contiguity_helper_rejects_gaps() {
        let gapped = vec![
            Bracket {
                min: dec!(0),
                max: Some(dec!(100)),
                value: (),
            },
            Bracket {
                min: dec!(100.02),
                max: None,
                value: (),
            },
        ];
        assert_contiguous(&gapped);
    }
}
