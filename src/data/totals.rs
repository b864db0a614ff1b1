//! Totals Module
//! Summary figures over a set of records.

use super::Record;

/// Aggregate sales, expenses and profit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub sales: i64,
    pub expenses: i64,
    pub profit: i64,
}

impl Totals {
    /// Expenses exceeded sales.
    pub fn is_loss(&self) -> bool {
        self.profit < 0
    }
}

/// Calculate total sales and expenses; profit is their difference.
pub fn calculate_totals(records: &[Record]) -> Totals {
    let sales: i64 = records.iter().map(|r| r.sales).sum();
    let expenses: i64 = records.iter().map(|r| r.expenses).sum();

    Totals {
        sales,
        expenses,
        profit: sales - expenses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals_of(rows: &[(&str, i64, i64)]) -> Totals {
        let records: Vec<Record> = rows
            .iter()
            .map(|&(m, s, e)| Record::new(m, s, e))
            .collect();
        calculate_totals(&records)
    }

    #[test]
    fn test_basic() {
        let t = totals_of(&[("January", 1000, 500), ("February", 2000, 800)]);
        assert_eq!(
            t,
            Totals {
                sales: 3000,
                expenses: 1300,
                profit: 1700
            }
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(calculate_totals(&[]), Totals::default());
        assert_eq!(
            calculate_totals(&[]),
            Totals {
                sales: 0,
                expenses: 0,
                profit: 0
            }
        );
    }

    #[test]
    fn test_single_item() {
        let t = totals_of(&[("January", 5000, 3000)]);
        assert_eq!(t.sales, 5000);
        assert_eq!(t.expenses, 3000);
        assert_eq!(t.profit, 2000);
    }

    #[test]
    fn test_large_numbers() {
        let t = totals_of(&[("January", 100000, 50000), ("February", 200000, 75000)]);
        assert_eq!(t.sales, 300000);
        assert_eq!(t.expenses, 125000);
        assert_eq!(t.profit, 175000);
    }

    #[test]
    fn test_loss() {
        let t = totals_of(&[("January", 1000, 2000)]);
        assert_eq!(t.sales, 1000);
        assert_eq!(t.expenses, 2000);
        assert_eq!(t.profit, -1000);
        assert!(t.is_loss());
    }

    #[test]
    fn test_zero_values() {
        let t = totals_of(&[("January", 0, 0)]);
        assert_eq!(t, Totals::default());
        assert!(!t.is_loss());
    }

    #[test]
    fn test_profit_identity_and_order_independence() {
        let mut records = vec![
            Record::new("Jan", 1200, 900),
            Record::new("Feb", 50, 4000),
            Record::new("Mar", 7777, 1),
            Record::new("Apr", 0, 321),
        ];
        let forward = calculate_totals(&records);
        assert_eq!(forward.profit, forward.sales - forward.expenses);

        records.reverse();
        assert_eq!(calculate_totals(&records), forward);

        records.rotate_left(1);
        assert_eq!(calculate_totals(&records), forward);
    }
}
