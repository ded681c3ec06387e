//! Dashboard module
//!
//! Provides the single page of the app: summary cards, a category breakdown
//! chart, the add-transaction form and the list of recent transactions.
//! The [Dashboard] struct owns the transactions and the transient UI state.

mod aggregation;
mod cards;
mod charts;
mod form;
mod handlers;
mod list;
mod state;

pub use handlers::{
    cancel_form, delete_transaction, get_dashboard_page, get_summary, open_form,
    submit_transaction, toggle_balance, update_draft,
};
pub use state::Dashboard;
