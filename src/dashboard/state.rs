//! The mutable state behind the dashboard and the intents that change it.
//!
//! A [Dashboard] owns the transaction store, the add-transaction form and the
//! balance visibility flag. Each intent method runs to completion and leaves
//! the dashboard in a consistent state, derived values are computed on demand.

use serde::Deserialize;
use time::Date;

use crate::{
    Error,
    category::Category,
    dashboard::aggregation::{
        CategoryExpense, Summary, calculate_summary, expenses_by_category, total_of,
    },
    transaction::{
        Amount, Description, Transaction, TransactionId, TransactionStore, TransactionType,
    },
};

/// The in-progress, not yet committed, new transaction.
///
/// Fields hold the raw form input, they are only validated on submit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Draft {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub transaction_type: TransactionType,
}

/// Whether the add-transaction form is shown, and its draft if it is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Closed,
    Open(Draft),
}

/// The dashboard for a single view: transactions plus transient UI state.
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: TransactionStore,
    form: FormState,
    balance_visible: bool,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(TransactionStore::new())
    }
}

impl Dashboard {
    /// Create a dashboard over `store` with the form closed and the balance visible.
    pub fn new(store: TransactionStore) -> Self {
        Self {
            store,
            form: FormState::Closed,
            balance_visible: true,
        }
    }

    /// All transactions, most recent first.
    pub fn transactions(&self) -> &[Transaction] {
        self.store.all()
    }

    /// The most recent transactions, at most `limit` of them.
    pub fn recent_transactions(&self, limit: usize) -> &[Transaction] {
        self.store.recent(limit)
    }

    /// The summary figures, counting expenses dated `today` as today's expenses.
    pub fn summary(&self, today: Date) -> Summary {
        calculate_summary(self.store.all(), today)
    }

    /// Non-zero expense totals per category, in category order.
    pub fn expenses_by_category(&self) -> Vec<CategoryExpense> {
        expenses_by_category(self.store.all())
    }

    /// Whether the add-transaction form is open, and its draft.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Whether the balance is shown, it is masked otherwise.
    pub fn is_balance_visible(&self) -> bool {
        self.balance_visible
    }

    /// Show the add-transaction form with a default draft.
    ///
    /// Does nothing if the form is already open, so an edited draft is kept.
    pub fn open_form(&mut self) {
        if self.form == FormState::Closed {
            self.form = FormState::Open(Draft::default());
        }
    }

    /// Hide the add-transaction form and discard the draft.
    pub fn cancel_form(&mut self) {
        self.form = FormState::Closed;
    }

    /// Replace the draft's fields. Ignored while the form is closed.
    pub fn update_draft(&mut self, draft: Draft) {
        match &mut self.form {
            FormState::Open(current) => *current = draft,
            FormState::Closed => tracing::debug!("ignoring draft update while the form is closed"),
        }
    }

    /// Commit the draft as a new transaction dated `today`.
    ///
    /// On success the transaction is added to the front of the list, the form
    /// is closed and the next draft will start from the defaults.
    ///
    /// # Errors
    /// The dashboard is left unchanged, with the form still open and the draft kept, if:
    /// - the form is closed: [Error::FormClosed],
    /// - the amount is empty, not a number or not positive: [Error::InvalidAmount],
    /// - the amount would push the total income or expenses past
    ///   [Decimal::MAX](rust_decimal::Decimal::MAX):
    ///   [Error::InvalidAmount],
    /// - the description is empty: [Error::EmptyDescription].
    pub fn submit(&mut self, today: Date) -> Result<Transaction, Error> {
        let FormState::Open(draft) = &self.form else {
            return Err(Error::FormClosed);
        };

        let amount: Amount = draft.amount.parse()?;
        total_of(self.store.all(), draft.transaction_type)
            .checked_add(amount.value())
            .ok_or_else(|| Error::InvalidAmount(draft.amount.clone()))?;
        let description = Description::new(&draft.description)?;
        let builder = Transaction::build(amount, today, description)
            .category(draft.category)
            .transaction_type(draft.transaction_type);

        self.form = FormState::Closed;

        Ok(self.store.add(builder).clone())
    }

    /// Remove the transaction with `id`. Unknown IDs are ignored.
    pub fn delete(&mut self, id: TransactionId) -> Option<Transaction> {
        self.store.remove(id)
    }

    /// Switch between showing and masking the balance.
    pub fn toggle_balance_visibility(&mut self) {
        self.balance_visible = !self.balance_visible;
    }
}
