//! Category breakdown report
//!
//! Groups the ledger's records by category and computes each category's
//! share of the grand total. The external chart export consumes this to
//! draw a proportional chart; the slice order is stable so repeated
//! generations over the same ledger render identically.

use crate::ledger::ExpenseLedger;
use crate::models::{Category, Money};

/// One category's share of total spending
#[derive(Debug, Clone)]
pub struct CategorySlice {
    /// The category
    pub category: Category,
    /// Total spending in this category
    pub total: Money,
    /// Number of records in this category
    pub expense_count: usize,
    /// Percentage of total spending (0-100)
    pub percentage: f64,
}

/// Spending breakdown by category
#[derive(Debug, Clone)]
pub struct CategoryBreakdown {
    /// Slices sorted by descending total, ties in canonical category order
    pub slices: Vec<CategorySlice>,
    /// Total spending across all categories
    pub total: Money,
    /// Total record count
    pub expense_count: usize,
}

impl CategoryBreakdown {
    /// Generate a breakdown for the current ledger state
    ///
    /// An empty ledger yields an empty breakdown rather than an error; the
    /// presentation layer decides whether to show a "no data to chart"
    /// message instead of a chart.
    pub fn generate(ledger: &ExpenseLedger) -> Self {
        let total = ledger.total();

        let mut counts: std::collections::BTreeMap<Category, usize> =
            std::collections::BTreeMap::new();
        for expense in ledger.iter() {
            *counts.entry(expense.category).or_insert(0) += 1;
        }

        let mut slices: Vec<CategorySlice> = ledger
            .by_category()
            .into_iter()
            .map(|(category, category_total)| {
                let percentage = if total.is_zero() {
                    0.0
                } else {
                    (category_total.cents() as f64 / total.cents() as f64) * 100.0
                };

                CategorySlice {
                    category,
                    total: category_total,
                    expense_count: counts.get(&category).copied().unwrap_or(0),
                    percentage,
                }
            })
            .collect();

        // Largest slice first; equal totals keep canonical category order
        slices.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));

        Self {
            expense_count: ledger.len(),
            slices,
            total,
        }
    }

    /// Check if there is nothing to chart
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Get the top spending categories
    pub fn top_categories(&self, limit: usize) -> &[CategorySlice] {
        &self.slices[..limit.min(self.slices.len())]
    }
}
