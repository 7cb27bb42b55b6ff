//! The expense ledger
//!
//! An in-memory, append-only (until reset) sequence of expense records with
//! aggregate queries over them. One ledger belongs to one session; it is
//! created empty, mutated only by `add`/`insert`/`reset`, and discarded with
//! the session. Every operation is synchronous and infallible: validation of
//! category and amount happens at the input boundary before records are
//! built, and empty-ledger queries return zero/empty values rather than
//! errors.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Category, CategoryFilter, Expense, ExpenseId, Money};

/// In-memory ledger of expense records, insertion order preserved
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new expense record and return its id
    ///
    /// Duplicate dates and descriptions are allowed; descriptions may be
    /// empty. The amount is expected to be non-negative (the boundary's
    /// responsibility).
    pub fn add(
        &mut self,
        date: NaiveDate,
        category: Category,
        description: impl Into<String>,
        amount: Money,
    ) -> ExpenseId {
        let expense = Expense::new(date, category, description, amount);
        let id = expense.id;
        self.expenses.push(expense);
        id
    }

    /// Append a pre-built expense record
    pub fn insert(&mut self, expense: Expense) -> ExpenseId {
        let id = expense.id;
        self.expenses.push(expense);
        id
    }

    /// Sum of all amounts; zero when the ledger is empty
    pub fn total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Records passing the filter, in insertion order
    ///
    /// `CategoryFilter::All` returns every record; otherwise only records
    /// of the given category. An empty result is not an error.
    pub fn filter(&self, filter: CategoryFilter) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| filter.matches(e.category))
            .collect()
    }

    /// Sum of amounts over `filter(...)`; zero if nothing matches
    pub fn total_for(&self, filter: CategoryFilter) -> Money {
        self.expenses
            .iter()
            .filter(|e| filter.matches(e.category))
            .map(|e| e.amount)
            .sum()
    }

    /// Total amount per category, keyed only by categories with at least
    /// one record
    ///
    /// The map iterates in canonical category order, so downstream
    /// rendering is reproducible.
    pub fn by_category(&self) -> BTreeMap<Category, Money> {
        let mut totals = BTreeMap::new();
        for expense in &self.expenses {
            *totals.entry(expense.category).or_insert_with(Money::zero) += expense.amount;
        }
        totals
    }

    /// Distinct categories currently in the ledger
    ///
    /// Feeds the external filter UI's options.
    pub fn categories_present(&self) -> BTreeSet<Category> {
        self.expenses.iter().map(|e| e.category).collect()
    }

    /// Clear all records
    pub fn reset(&mut self) {
        self.expenses.clear();
    }

    /// Look up a record by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// All records in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Iterate over records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check if the ledger has no records
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Ledger with the records: Food 10.00, Transport 2.50, Food 15.00
    fn sample_ledger() -> ExpenseLedger {
        let mut ledger = ExpenseLedger::new();
        ledger.add(
            date(2024, 1, 1),
            Category::Food,
            "lunch",
            Money::from_cents(1000),
        );
        ledger.add(
            date(2024, 1, 2),
            Category::Transport,
            "bus",
            Money::from_cents(250),
        );
        ledger.add(
            date(2024, 1, 3),
            Category::Food,
            "dinner",
            Money::from_cents(1500),
        );
        ledger
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = ExpenseLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert_eq!(ledger.total(), Money::zero());
        assert!(ledger.by_category().is_empty());
        assert!(ledger.categories_present().is_empty());
        assert!(ledger.filter(CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_total() {
        let ledger = sample_ledger();
        assert_eq!(ledger.total(), Money::from_cents(2750));
    }

    #[test]
    fn test_filter_all_preserves_insertion_order() {
        let ledger = sample_ledger();
        let all = ledger.filter(CategoryFilter::All);

        assert_eq!(all.len(), 3);
        assert_eq!(all[0].description, "lunch");
        assert_eq!(all[1].description, "bus");
        assert_eq!(all[2].description, "dinner");
    }

    #[test]
    fn test_filter_by_category() {
        let ledger = sample_ledger();
        let food = ledger.filter(Category::Food.into());

        assert_eq!(food.len(), 2);
        assert_eq!(food[0].description, "lunch");
        assert_eq!(food[1].description, "dinner");
    }

    #[test]
    fn test_filter_no_matches_is_empty_not_error() {
        let ledger = sample_ledger();
        assert!(ledger.filter(Category::Health.into()).is_empty());
        assert_eq!(ledger.total_for(Category::Health.into()), Money::zero());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let ledger = sample_ledger();
        let first: Vec<ExpenseId> = ledger
            .filter(Category::Food.into())
            .iter()
            .map(|e| e.id)
            .collect();
        let second: Vec<ExpenseId> = ledger
            .filter(Category::Food.into())
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_total_for() {
        let ledger = sample_ledger();
        assert_eq!(ledger.total_for(Category::Food.into()), Money::from_cents(2500));
        assert_eq!(
            ledger.total_for(Category::Transport.into()),
            Money::from_cents(250)
        );
        assert_eq!(ledger.total_for(CategoryFilter::All), ledger.total());
    }

    #[test]
    fn test_by_category() {
        let ledger = sample_ledger();
        let totals = ledger.by_category();

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&Category::Food], Money::from_cents(2500));
        assert_eq!(totals[&Category::Transport], Money::from_cents(250));
        // No zero-valued entries for absent categories
        assert!(!totals.contains_key(&Category::Health));
    }

    #[test]
    fn test_by_category_sums_to_total() {
        let ledger = sample_ledger();
        let sum: Money = ledger.by_category().values().copied().sum();
        assert_eq!(sum, ledger.total());
    }

    #[test]
    fn test_by_category_iterates_in_canonical_order() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(date(2024, 2, 1), Category::Other, "misc", Money::from_cents(100));
        ledger.add(date(2024, 2, 2), Category::Food, "snack", Money::from_cents(200));
        ledger.add(date(2024, 2, 3), Category::Health, "meds", Money::from_cents(300));

        let keys: Vec<Category> = ledger.by_category().keys().copied().collect();
        assert_eq!(keys, vec![Category::Food, Category::Health, Category::Other]);
    }

    #[test]
    fn test_categories_present() {
        let ledger = sample_ledger();
        let present = ledger.categories_present();

        assert_eq!(present.len(), 2);
        assert!(present.contains(&Category::Food));
        assert!(present.contains(&Category::Transport));
    }

    #[test]
    fn test_reset() {
        let mut ledger = sample_ledger();
        ledger.reset();

        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), Money::zero());
        assert!(ledger.by_category().is_empty());
        assert!(ledger.categories_present().is_empty());
    }

    #[test]
    fn test_duplicate_records_allowed() {
        let mut ledger = ExpenseLedger::new();
        let id1 = ledger.add(date(2024, 1, 1), Category::Food, "coffee", Money::from_cents(300));
        let id2 = ledger.add(date(2024, 1, 1), Category::Food, "coffee", Money::from_cents(300));

        assert_ne!(id1, id2);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.total(), Money::from_cents(600));
    }

    #[test]
    fn test_get_by_id() {
        let mut ledger = ExpenseLedger::new();
        let id = ledger.add(date(2024, 3, 5), Category::Utilities, "power", Money::from_cents(4200));

        let found = ledger.get(id).unwrap();
        assert_eq!(found.description, "power");
        assert!(ledger.get(ExpenseId::new()).is_none());
    }

    #[test]
    fn test_insert_prebuilt_record() {
        let mut ledger = ExpenseLedger::new();
        let expense = Expense::new(
            date(2024, 4, 1),
            Category::Entertainment,
            "cinema",
            Money::from_cents(1200),
        );
        let id = ledger.insert(expense);

        assert_eq!(ledger.get(id).unwrap().category, Category::Entertainment);
    }

    // The walkthrough scenario: three records, every aggregate, then reset.
    #[test]
    fn test_tracking_scenario() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(date(2024, 1, 1), Category::Food, "lunch", Money::from_cents(1000));
        ledger.add(date(2024, 1, 2), Category::Transport, "bus", Money::from_cents(250));
        ledger.add(date(2024, 1, 3), Category::Food, "dinner", Money::from_cents(1500));

        assert_eq!(ledger.total(), Money::from_cents(2750));

        let totals = ledger.by_category();
        assert_eq!(totals[&Category::Food], Money::from_cents(2500));
        assert_eq!(totals[&Category::Transport], Money::from_cents(250));

        let food = ledger.filter(Category::Food.into());
        assert_eq!(food.len(), 2);
        assert_eq!(food[0].description, "lunch");
        assert_eq!(food[1].description, "dinner");

        assert_eq!(
            ledger.total_for(Category::Transport.into()),
            Money::from_cents(250)
        );

        ledger.reset();
        assert_eq!(ledger.total(), Money::zero());
    }

    #[test]
    fn test_serialization() {
        let ledger = sample_ledger();
        let json = serde_json::to_string(&ledger).unwrap();
        let deserialized: ExpenseLedger = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 3);
        assert_eq!(deserialized.total(), ledger.total());
    }
}
