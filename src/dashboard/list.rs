//! The list of recent transactions with per-row delete buttons.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{BUTTON_DELETE_STYLE, format_currency_rounded, format_date},
    transaction::Transaction,
};

/// Renders up to `transactions.len()` rows, most recent first.
///
/// Expenses are prefixed with "-" and income with "+".
pub(super) fn recent_transactions_view(transactions: &[Transaction]) -> Markup {
    html! {
        section id="recent-transactions" class="mb-8"
        {
            h2 class="mb-4 text-xl font-semibold text-white" { "Recent Transactions" }

            @if transactions.is_empty() {
                p class="py-8 text-center text-gray-400"
                {
                    "No transactions yet. Add one to get started."
                }
            } @else {
                ul class="space-y-2 max-h-[480px] overflow-y-auto custom-scrollbar"
                {
                    @for transaction in transactions {
                        (transaction_row(transaction))
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let (sign, amount_color) = if transaction.is_income() {
        ("+", "text-green-400")
    } else {
        ("-", "text-red-400")
    };
    let delete_url = format_endpoint(endpoints::TRANSACTION, transaction.id);

    html! {
        li
            data-transaction-id=(transaction.id)
            class="flex items-center justify-between p-3 rounded-lg bg-gray-800/40"
        {
            div class="flex items-center gap-3"
            {
                span
                    class="flex items-center justify-center w-10 h-10 rounded-full"
                    style={ "background-color: " (transaction.category.color()) "33" }
                    title=(transaction.category)
                {
                    (transaction.category.icon())
                }

                div
                {
                    p class="font-medium text-white" { (transaction.description) }
                    p class="text-xs text-gray-400"
                    {
                        (transaction.category) " • " (format_date(transaction.date))
                    }
                }
            }

            div class="flex items-center gap-3"
            {
                span class={ "font-semibold " (amount_color) }
                {
                    (sign) (format_currency_rounded(transaction.amount.value()))
                }

                button
                    type="button"
                    hx-delete=(delete_url)
                    hx-target="#dashboard-content"
                    hx-target-error="#alert-container"
                    hx-swap="outerHTML"
                    aria-label="Delete transaction"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "✕"
                }
            }
        }
    }
}
