//! Transactions and the in-memory store that holds them.
//!
//! This module contains:
//! - The `Transaction` model and `TransactionBuilder` for describing new transactions
//! - Validated `Amount` and `Description` field types
//! - The `TransactionStore`, which assigns IDs and keeps transactions most-recent-first

mod core;
mod store;

pub use core::{Amount, Description, Transaction, TransactionId, TransactionType};
pub use store::TransactionStore;
