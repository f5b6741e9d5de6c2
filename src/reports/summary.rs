//! Category Summary
//!
//! Groups expenses by category and sums their amounts. Rebuilt from the full
//! record set on every request; nothing is cached.

use std::collections::BTreeMap;

use crate::models::Expense;

/// Total spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name exactly as stored
    pub category: String,
    /// Sum of amounts in this category
    pub amount: f64,
    /// Number of expenses in this category
    pub count: usize,
}

/// Per-category totals plus the grand total
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    /// Category totals ordered by category name
    categories: Vec<CategoryTotal>,
    /// Sum of all amounts
    total: f64,
}

impl CategorySummary {
    /// Summarize a set of expenses.
    ///
    /// Returns `None` when there is nothing to summarize. Grouping uses the
    /// exact category string: "Food" and "food" are separate groups.
    pub fn summarize(expenses: &[Expense]) -> Option<Self> {
        if expenses.is_empty() {
            return None;
        }

        let mut grouped: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        let mut total = 0.0;

        for expense in expenses {
            let entry = grouped.entry(expense.category.as_str()).or_insert((0.0, 0));
            entry.0 += expense.amount;
            entry.1 += 1;
            total += expense.amount;
        }

        let categories = grouped
            .into_iter()
            .map(|(category, (amount, count))| CategoryTotal {
                category: category.to_string(),
                amount,
                count,
            })
            .collect();

        Some(Self { categories, total })
    }

    /// Category totals ordered by category name
    pub fn categories(&self) -> &[CategoryTotal] {
        &self.categories
    }

    /// Grand total across all categories
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Total for a single category, if present
    pub fn get(&self, category: &str) -> Option<f64> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.amount)
    }

    /// Number of distinct categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Number of expenses behind the totals
    pub fn record_count(&self) -> usize {
        self.categories.iter().map(|c| c.count).sum()
    }

    /// Whether no categories are present
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// First category whose total left the finite range, if any.
    ///
    /// Every stored amount is finite, so this only happens when a sum
    /// overflows.
    pub fn overflowed(&self) -> Option<&CategoryTotal> {
        self.categories.iter().find(|c| !c.amount.is_finite())
    }

    /// Largest category total, used to scale charts
    pub fn max_amount(&self) -> f64 {
        self.categories
            .iter()
            .map(|c| c.amount)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::from("Expense Summary:\n");

        for category in &self.categories {
            output.push_str(&format!(
                "{}: {}{:.2}\n",
                category.category, currency, category.amount
            ));
        }

        output.push_str(&format!("Total: {}{:.2}", currency, self.total));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new("2024-01-01", "Food", 10.0),
            Expense::new("2024-01-02", "Food", 5.0),
            Expense::new("2024-01-03", "Transportation", 20.0),
        ]
    }

    #[test]
    fn test_summarize_groups_and_totals() {
        let summary = CategorySummary::summarize(&sample()).unwrap();

        assert_eq!(summary.len(), 2);
        assert_eq!(summary.get("Food"), Some(15.0));
        assert_eq!(summary.get("Transportation"), Some(20.0));
        assert_eq!(summary.total(), 35.0);
        assert_eq!(summary.categories()[0].count, 2);
        assert_eq!(summary.record_count(), 3);
        assert!(!summary.is_empty());
    }

    #[test]
    fn test_summarize_empty_is_none() {
        assert!(CategorySummary::summarize(&[]).is_none());
    }

    #[test]
    fn test_zero_amounts_still_summarize() {
        let expenses = vec![Expense::new("2024-01-01", "Food", 0.0)];
        let summary = CategorySummary::summarize(&expenses).unwrap();

        assert_eq!(summary.total(), 0.0);
        assert_eq!(summary.get("Food"), Some(0.0));
    }

    #[test]
    fn test_grouping_is_case_sensitive() {
        let expenses = vec![
            Expense::new("2024-01-01", "Food", 1.0),
            Expense::new("2024-01-02", "food", 2.0),
            Expense::new("2024-01-03", "Food ", 4.0),
        ];
        let summary = CategorySummary::summarize(&expenses).unwrap();

        assert_eq!(summary.len(), 3);
        assert_eq!(summary.get("Food"), Some(1.0));
        assert_eq!(summary.get("food"), Some(2.0));
        assert_eq!(summary.get("Food "), Some(4.0));
        assert_eq!(summary.total(), 7.0);
    }

    #[test]
    fn test_only_present_categories_appear() {
        let summary = CategorySummary::summarize(&sample()).unwrap();
        assert_eq!(summary.get("Utilities"), None);
    }

    #[test]
    fn test_categories_sorted_by_name() {
        let expenses = vec![
            Expense::new("", "Utilities", 1.0),
            Expense::new("", "Food", 1.0),
            Expense::new("", "food", 1.0),
            Expense::new("", "Entertainment", 1.0),
        ];
        let summary = CategorySummary::summarize(&expenses).unwrap();
        let names: Vec<_> = summary
            .categories()
            .iter()
            .map(|c| c.category.as_str())
            .collect();

        assert_eq!(names, vec!["Entertainment", "Food", "Utilities", "food"]);
    }

    #[test]
    fn test_overflowed_category() {
        assert!(CategorySummary::summarize(&sample())
            .unwrap()
            .overflowed()
            .is_none());

        let expenses = vec![
            Expense::new("2024-01-01", "Food", 1.0),
            Expense::new("2024-01-02", "Rent", 1e308),
            Expense::new("2024-01-03", "Rent", 1e308),
        ];
        let summary = CategorySummary::summarize(&expenses).unwrap();
        assert_eq!(summary.overflowed().map(|c| c.category.as_str()), Some("Rent"));
    }

    #[test]
    fn test_max_amount() {
        let summary = CategorySummary::summarize(&sample()).unwrap();
        assert_eq!(summary.max_amount(), 20.0);
    }

    #[test]
    fn test_format_terminal() {
        let summary = CategorySummary::summarize(&sample()).unwrap();

        assert_eq!(
            summary.format_terminal("$"),
            "Expense Summary:\nFood: $15.00\nTransportation: $20.00\nTotal: $35.00"
        );
    }
}
