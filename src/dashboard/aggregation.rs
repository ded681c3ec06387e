//! Summary totals and the category breakdown derived from the transaction list.
//!
//! Everything here is a pure function of the transactions and "today". The
//! values are recomputed for every render, no results are cached.

use rust_decimal::Decimal;
use serde::{Serialize, ser::SerializeStruct};
use time::Date;

use crate::{
    category::Category,
    transaction::{Transaction, TransactionType},
};

/// The headline figures shown in the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// The sum of all income.
    pub total_income: Decimal,
    /// The sum of all expenses.
    pub total_expenses: Decimal,
    /// Income minus expenses.
    pub balance: Decimal,
    /// Expenses dated today.
    pub today_expenses: Decimal,
}

/// The total spent in a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryExpense {
    pub category: Category,
    pub value: Decimal,
}

impl CategoryExpense {
    pub fn label(&self) -> &'static str {
        self.category.name()
    }

    pub fn color(&self) -> &'static str {
        self.category.color()
    }

    pub fn icon(&self) -> &'static str {
        self.category.icon()
    }
}

// Carries the category's display metadata so that clients can draw the
// breakdown without their own copy of the category table.
impl Serialize for CategoryExpense {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CategoryExpense", 4)?;
        state.serialize_field("category", &self.category)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("color", self.color())?;
        state.serialize_field("icon", self.icon())?;
        state.end()
    }
}

/// Sums the amounts of `transactions`, stopping at [Decimal::MAX] instead of overflowing.
fn sum_amounts<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> Decimal {
    transactions.fold(Decimal::ZERO, |total, transaction| {
        total.saturating_add(transaction.amount.value())
    })
}

/// The sum of all transactions of `transaction_type`.
pub fn total_of(transactions: &[Transaction], transaction_type: TransactionType) -> Decimal {
    sum_amounts(
        transactions
            .iter()
            .filter(|transaction| transaction.transaction_type == transaction_type),
    )
}

fn expenses_on(transactions: &[Transaction], date: Date) -> Decimal {
    sum_amounts(
        transactions
            .iter()
            .filter(|transaction| transaction.is_expense() && transaction.date == date),
    )
}

/// Calculates the summary figures for `transactions`, using `today` for today's expenses.
pub fn calculate_summary(transactions: &[Transaction], today: Date) -> Summary {
    let total_income = total_of(transactions, TransactionType::Income);
    let total_expenses = total_of(transactions, TransactionType::Expense);

    Summary {
        total_income,
        total_expenses,
        balance: total_income.saturating_sub(total_expenses),
        today_expenses: expenses_on(transactions, today),
    }
}

/// Sums expenses per category.
///
/// The result follows the order of [Category::ALL] and leaves out categories
/// whose total is zero.
pub fn expenses_by_category(transactions: &[Transaction]) -> Vec<CategoryExpense> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryExpense {
            category,
            value: sum_amounts(transactions.iter().filter(|transaction| {
                transaction.is_expense() && transaction.category == category
            })),
        })
        .filter(|expense| !expense.value.is_zero())
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use time::{Date, macros::date};

    use crate::{
        category::Category,
        dashboard::aggregation::{CategoryExpense, calculate_summary, expenses_by_category},
        transaction::{Amount, Description, Transaction, TransactionStore, TransactionType},
    };

    fn add(
        store: &mut TransactionStore,
        amount: Decimal,
        category: Category,
        transaction_type: TransactionType,
        date: Date,
    ) -> i64 {
        store
            .add(
                Transaction::build(
                    Amount::new(amount).unwrap(),
                    date,
                    Description::new("test").unwrap(),
                )
                .category(category)
                .transaction_type(transaction_type),
            )
            .id
    }

    fn add_expense(store: &mut TransactionStore, amount: i64, category: Category, date: Date) {
        add(
            store,
            Decimal::from(amount),
            category,
            TransactionType::Expense,
            date,
        );
    }

    fn add_income(store: &mut TransactionStore, amount: i64, date: Date) {
        add(
            store,
            Decimal::from(amount),
            Category::Other,
            TransactionType::Income,
            date,
        );
    }

    #[test]
    fn summary_of_expense_and_income() {
        let mut store = TransactionStore::new();
        let day = date!(2025 - 01 - 15);
        add_expense(&mut store, 500, Category::Food, day);
        add_income(&mut store, 1000, day);

        let summary = calculate_summary(store.all(), date!(2025 - 02 - 01));

        assert_eq!(summary.total_expenses, Decimal::from(500));
        assert_eq!(summary.total_income, Decimal::from(1000));
        assert_eq!(summary.balance, Decimal::from(500));
        assert_eq!(summary.today_expenses, Decimal::ZERO);
    }

    #[test]
    fn summary_of_empty_store_is_zero() {
        let summary = calculate_summary(&[], date!(2025 - 01 - 15));

        assert_eq!(summary.total_income, Decimal::ZERO);
        assert_eq!(summary.total_expenses, Decimal::ZERO);
        assert_eq!(summary.balance, Decimal::ZERO);
        assert_eq!(summary.today_expenses, Decimal::ZERO);
    }

    #[test]
    fn balance_can_be_negative() {
        let mut store = TransactionStore::new();
        let day = date!(2025 - 01 - 15);
        add_expense(&mut store, 200, Category::Bills, day);
        add_income(&mut store, 50, day);

        let summary = calculate_summary(store.all(), day);

        assert_eq!(summary.balance, Decimal::from(-150));
    }

    #[test]
    fn today_expenses_only_counts_expenses_dated_today() {
        let mut store = TransactionStore::new();
        let today = date!(2025 - 03 - 10);
        add_expense(&mut store, 300, Category::Travel, today);
        add_expense(&mut store, 40, Category::Food, date!(2025 - 03 - 09));
        add_income(&mut store, 900, today);

        let summary = calculate_summary(store.all(), today);

        assert_eq!(summary.today_expenses, Decimal::from(300));
    }

    #[test]
    fn totals_stop_at_the_largest_decimal() {
        let mut store = TransactionStore::new();
        let day = date!(2025 - 03 - 10);
        for _ in 0..2 {
            add(
                &mut store,
                Decimal::MAX,
                Category::Bills,
                TransactionType::Expense,
                day,
            );
        }

        let summary = calculate_summary(store.all(), day);
        let breakdown = expenses_by_category(store.all());

        assert_eq!(summary.total_expenses, Decimal::MAX);
        assert_eq!(summary.today_expenses, Decimal::MAX);
        assert_eq!(summary.balance, Decimal::MIN);
        assert_eq!(breakdown[0].value, Decimal::MAX);
    }

    #[test]
    fn single_travel_expense_is_the_only_category() {
        let mut store = TransactionStore::new();
        add_expense(&mut store, 300, Category::Travel, date!(2025 - 03 - 10));

        let breakdown = expenses_by_category(store.all());

        assert_eq!(
            breakdown,
            vec![CategoryExpense {
                category: Category::Travel,
                value: Decimal::from(300)
            }]
        );
    }

    #[test]
    fn breakdown_follows_category_order_not_amount() {
        let mut store = TransactionStore::new();
        let day = date!(2025 - 01 - 15);
        add_expense(&mut store, 10, Category::Other, day);
        add_expense(&mut store, 5_000, Category::Bills, day);
        add_expense(&mut store, 20, Category::Food, day);
        add_expense(&mut store, 7, Category::Food, day);

        let breakdown = expenses_by_category(store.all());

        let categories: Vec<_> = breakdown.iter().map(|expense| expense.category).collect();
        assert_eq!(
            categories,
            vec![Category::Food, Category::Bills, Category::Other]
        );
        assert_eq!(breakdown[0].value, Decimal::from(27));
    }

    #[test]
    fn income_is_not_part_of_breakdown() {
        let mut store = TransactionStore::new();
        add_income(&mut store, 1000, date!(2025 - 01 - 15));

        assert!(expenses_by_category(store.all()).is_empty());
    }

    #[test]
    fn breakdown_sums_to_total_expenses() {
        let mut store = TransactionStore::new();
        let day = date!(2025 - 01 - 15);
        let amounts = [
            (Decimal::new(1999, 2), Category::Food),
            (Decimal::new(1, 1), Category::Travel),
            (Decimal::new(2, 1), Category::Travel),
            (Decimal::new(33333, 3), Category::Entertainment),
            (Decimal::from(120), Category::Shopping),
        ];
        for (amount, category) in amounts {
            add(&mut store, amount, category, TransactionType::Expense, day);
        }
        add_income(&mut store, 999, day);

        let breakdown_total: Decimal = expenses_by_category(store.all())
            .iter()
            .map(|expense| expense.value)
            .sum();
        let summary = calculate_summary(store.all(), day);

        assert_eq!(breakdown_total, summary.total_expenses);
        assert_eq!(
            summary.balance,
            summary.total_income - summary.total_expenses
        );
    }

    #[test]
    fn add_then_remove_restores_aggregates() {
        let mut store = TransactionStore::with_sample_data();
        let today = date!(2025 - 01 - 15);
        let summary_before = calculate_summary(store.all(), today);
        let breakdown_before = expenses_by_category(store.all());

        let id = add(
            &mut store,
            Decimal::new(4250, 2),
            Category::Bills,
            TransactionType::Expense,
            today,
        );
        assert_ne!(calculate_summary(store.all(), today), summary_before);
        store.remove(id);

        assert_eq!(calculate_summary(store.all(), today), summary_before);
        assert_eq!(expenses_by_category(store.all()), breakdown_before);
    }

    #[test]
    fn sample_data_totals() {
        let store = TransactionStore::with_sample_data();

        let summary = calculate_summary(store.all(), date!(2025 - 01 - 15));

        assert_eq!(summary.total_income, Decimal::from(75_000));
        assert_eq!(summary.total_expenses, Decimal::from(4_550));
        assert_eq!(summary.balance, Decimal::from(70_450));
        assert_eq!(summary.today_expenses, Decimal::from(850));
    }
}
