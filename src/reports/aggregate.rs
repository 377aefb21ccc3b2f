//! Aggregations over expense records
//!
//! Pure functions over a slice of expenses; callers pass `store.list()` or a
//! filtered subset of it.

use std::collections::BTreeMap;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, Money, YearMonth};

/// One row of a category breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub amount: Money,
    /// Share of the total, 0-100
    pub percentage: f64,
}

/// Expenses dated within `month`, in their original order
pub fn filter_by_month(records: &[Expense], month: YearMonth) -> Vec<Expense> {
    records
        .iter()
        .filter(|e| month.contains(e.date))
        .cloned()
        .collect()
}

/// Sum of all amounts; zero for no records
pub fn total_amount(records: &[Expense]) -> Money {
    records.iter().map(|e| e.amount).sum()
}

/// Sum of amounts per category
///
/// Categories with no records are left out rather than reported as zero.
pub fn category_totals(records: &[Expense]) -> BTreeMap<Category, Money> {
    totals_in_first_seen_order(records).into_iter().collect()
}

/// Per-category amounts and percentages, largest amount first
///
/// Categories with equal amounts keep the order in which they first appear in
/// `records`. No records gives an empty breakdown; records that total zero
/// give [`ExpenseError::DivisionUndefined`].
pub fn category_breakdown(records: &[Expense]) -> ExpenseResult<Vec<CategoryShare>> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let total = total_amount(records);
    if total.is_zero() {
        return Err(ExpenseError::DivisionUndefined);
    }

    let mut shares: Vec<CategoryShare> = totals_in_first_seen_order(records)
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            category,
            amount,
            percentage: amount.cents() as f64 / total.cents() as f64 * 100.0,
        })
        .collect();

    // sort_by is stable, which keeps first-seen order on ties
    shares.sort_by(|a, b| b.amount.cmp(&a.amount));

    Ok(shares)
}

fn totals_in_first_seen_order(records: &[Expense]) -> Vec<(Category, Money)> {
    let mut totals: Vec<(Category, Money)> = Vec::new();

    for expense in records {
        match totals.iter_mut().find(|(c, _)| *c == expense.category) {
            Some((_, amount)) => *amount += expense.amount,
            None => totals.push((expense.category, expense.amount)),
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(date: (i32, u32, u32), cents: i64, category: Category) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            Money::from_cents(cents),
            "",
            category,
        )
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense((2024, 1, 15), 2000, Category::Food),
            expense((2024, 2, 1), 1000, Category::Transportation),
            expense((2024, 1, 20), 3000, Category::Food),
            expense((2024, 1, 22), 1500, Category::Shopping),
            expense((2024, 1, 31), 4500, Category::Housing),
        ]
    }

    #[test]
    fn test_totals_at_amount_ceiling() {
        let max = Expense::MAX_AMOUNT.cents();
        let records = vec![
            expense((2024, 1, 1), max, Category::Housing),
            expense((2024, 1, 2), max, Category::Housing),
            expense((2024, 1, 3), max, Category::Food),
        ];

        assert_eq!(total_amount(&records), Money::from_cents(max * 3));
        assert_eq!(category_totals(&records)[&Category::Housing], Money::from_cents(max * 2));

        let breakdown = category_breakdown(&records).unwrap();
        assert_eq!(breakdown[0].category, Category::Housing);
        assert!((breakdown[0].percentage - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_filter_by_month() {
        let records = vec![
            expense((2024, 1, 15), 2000, Category::Food),
            expense((2024, 2, 1), 1000, Category::Transportation),
        ];

        let jan = filter_by_month(&records, YearMonth::new(2024, 1).unwrap());
        assert_eq!(jan, vec![records[0].clone()]);
    }

    #[test]
    fn test_filter_by_month_preserves_order() {
        let records = sample();
        let jan = filter_by_month(&records, YearMonth::new(2024, 1).unwrap());

        let days: Vec<_> = jan.iter().map(|e| e.date.format("%d").to_string()).collect();
        assert_eq!(days, vec!["15", "20", "22", "31"]);
        assert!(filter_by_month(&records, YearMonth::new(2023, 1).unwrap()).is_empty());
    }

    #[test]
    fn test_total_amount() {
        assert_eq!(total_amount(&[]), Money::zero());
        assert_eq!(total_amount(&sample()), Money::from_cents(12000));
    }

    #[test]
    fn test_category_totals() {
        let totals = category_totals(&sample());

        assert_eq!(totals.len(), 4);
        assert_eq!(totals[&Category::Food], Money::from_cents(5000));
        assert_eq!(totals[&Category::Housing], Money::from_cents(4500));
        assert!(!totals.contains_key(&Category::Health));
    }

    #[test]
    fn test_category_totals_sum_to_total() {
        let records = sample();
        let sum: Money = category_totals(&records).values().sum();
        assert_eq!(sum, total_amount(&records));
    }

    #[test]
    fn test_breakdown_sorted_descending() {
        let breakdown = category_breakdown(&sample()).unwrap();

        let order: Vec<_> = breakdown.iter().map(|s| s.category).collect();
        assert_eq!(
            order,
            vec![
                Category::Food,
                Category::Housing,
                Category::Shopping,
                Category::Transportation
            ]
        );

        let food = &breakdown[0];
        assert_eq!(food.amount, Money::from_cents(5000));
        assert!((food.percentage - 5000.0 / 12000.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_percentages_sum_to_100() {
        let breakdown = category_breakdown(&sample()).unwrap();
        let sum: f64 = breakdown.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_ties_keep_first_seen_order() {
        let records = vec![
            expense((2024, 1, 1), 500, Category::Other),
            expense((2024, 1, 2), 500, Category::Food),
            expense((2024, 1, 3), 500, Category::Health),
        ];

        let order: Vec<_> = category_breakdown(&records)
            .unwrap()
            .into_iter()
            .map(|s| s.category)
            .collect();
        assert_eq!(order, vec![Category::Other, Category::Food, Category::Health]);
    }

    #[test]
    fn test_breakdown_empty_input() {
        assert!(category_breakdown(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_breakdown_zero_total() {
        let records = vec![
            expense((2024, 1, 1), 0, Category::Food),
            expense((2024, 1, 2), 0, Category::Other),
        ];

        assert!(matches!(
            category_breakdown(&records),
            Err(ExpenseError::DivisionUndefined)
        ));
    }
}
