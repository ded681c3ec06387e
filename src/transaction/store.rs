//! An in-memory, most-recent-first collection of transactions.

use rust_decimal::Decimal;
use time::macros::date;

use crate::{
    category::Category,
    transaction::core::{
        Amount, Description, Transaction, TransactionBuilder, TransactionId, TransactionType,
    },
};

/// Holds the transactions shown on the dashboard.
///
/// New transactions are inserted at the front, so [TransactionStore::all]
/// yields the most recent first. IDs are assigned by the store from a counter
/// that only increases, so an ID is never handed out twice even after the
/// transaction it belonged to was removed.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store holding a few example transactions from January 2025.
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();

        // Added oldest first so that the newest ends up at the front.
        let samples = [
            (
                75_000_i64,
                Category::Other,
                "Salary Credit",
                date!(2025 - 01 - 12),
                TransactionType::Income,
            ),
            (
                1_200,
                Category::Shopping,
                "Bangalore Mall Purchase",
                date!(2025 - 01 - 13),
                TransactionType::Expense,
            ),
            (
                2_500,
                Category::Travel,
                "Delhi Metro Card Recharge",
                date!(2025 - 01 - 14),
                TransactionType::Expense,
            ),
            (
                850,
                Category::Food,
                "Dinner at Mumbai Restaurant",
                date!(2025 - 01 - 15),
                TransactionType::Expense,
            ),
        ];

        for (amount, category, description, date, transaction_type) in samples {
            let (Ok(amount), Ok(description)) =
                (Amount::new(Decimal::from(amount)), Description::new(description))
            else {
                continue;
            };

            store.add(
                Transaction::build(amount, date, description)
                    .category(category)
                    .transaction_type(transaction_type),
            );
        }

        store
    }

    /// Assign an ID to `builder` and insert the transaction at the front.
    pub fn add(&mut self, builder: TransactionBuilder) -> &Transaction {
        let id = self.next_id;
        self.next_id += 1;

        self.transactions.insert(0, builder.finalize(id));
        tracing::debug!("added transaction {id}");

        &self.transactions[0]
    }

    /// Remove the transaction with `id`.
    ///
    /// Returns `None` and leaves the store untouched if there is no such transaction.
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)?;

        Some(self.transactions.remove(index))
    }

    /// All transactions, most recent first.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The first `limit` transactions, most recent first.
    pub fn recent(&self, limit: usize) -> &[Transaction] {
        &self.transactions[..limit.min(self.transactions.len())]
    }

}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use time::macros::date;

    use crate::{
        category::Category,
        transaction::{
            Transaction, TransactionStore, TransactionType,
            core::{Amount, Description, TransactionBuilder},
        },
    };

    fn expense(amount: i64, description: &str) -> TransactionBuilder {
        Transaction::build(
            Amount::new(Decimal::from(amount)).unwrap(),
            date!(2025 - 01 - 15),
            Description::new(description).unwrap(),
        )
    }

    #[test]
    fn add_prepends() {
        let mut store = TransactionStore::new();

        store.add(expense(1, "first"));
        store.add(expense(2, "second"));

        let descriptions: Vec<_> = store
            .all()
            .iter()
            .map(|transaction| transaction.description.as_ref())
            .collect();
        assert_eq!(descriptions, vec!["second", "first"]);
    }

    #[test]
    fn add_assigns_unique_ids() {
        let mut store = TransactionStore::new();

        let first = store.add(expense(1, "first")).id;
        let second = store.add(expense(2, "second")).id;

        assert_ne!(first, second);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut store = TransactionStore::new();
        let id = store.add(expense(1, "first")).id;
        store.remove(id);

        let new_id = store.add(expense(2, "second")).id;

        assert_ne!(id, new_id);
    }

    #[test]
    fn remove_deletes_matching_transaction() {
        let mut store = TransactionStore::new();
        let keep = store.add(expense(1, "keep")).id;
        let remove = store.add(expense(2, "remove")).id;

        let removed = store.remove(remove);

        assert_eq!(removed.map(|transaction| transaction.id), Some(remove));
        let ids: Vec<_> = store.all().iter().map(|transaction| transaction.id).collect();
        assert_eq!(ids, vec![keep]);
    }

    #[test]
    fn remove_missing_id_is_a_no_op() {
        let mut store = TransactionStore::new();
        store.add(expense(1, "a"));
        store.add(expense(2, "b"));
        store.add(expense(3, "c"));
        let before = store.all().to_vec();

        let removed = store.remove(9_999);

        assert_eq!(removed, None);
        assert_eq!(store.all().len(), 3);
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn recent_caps_length() {
        let mut store = TransactionStore::new();
        for i in 1..=12 {
            store.add(expense(i, "coffee"));
        }

        assert_eq!(store.recent(10).len(), 10);
        assert_eq!(store.recent(10)[0].amount.value(), Decimal::from(12));
        assert_eq!(store.recent(50).len(), 12);
    }

    #[test]
    fn sample_data_is_newest_first() {
        let store = TransactionStore::with_sample_data();

        assert_eq!(store.all().len(), 4);
        let first = &store.all()[0];
        assert_eq!(first.description.as_ref(), "Dinner at Mumbai Restaurant");
        assert_eq!(first.category, Category::Food);
        let last = &store.all()[3];
        assert_eq!(last.transaction_type, TransactionType::Income);
        assert_eq!(last.amount.value(), Decimal::from(75_000));
    }
}
