//! Summary cards for the headline figures.
//!
//! Provides four cards:
//! - Balance, which can be masked and has a show/hide toggle and a status line
//! - Total income
//! - Total expenses
//! - Expenses recorded today

use maud::{Markup, html};
use rust_decimal::Decimal;

use crate::{
    dashboard::aggregation::Summary,
    endpoints,
    html::{CARD_STYLE, format_currency_rounded},
};

/// Shown in place of the balance while it is hidden.
pub(super) const MASKED_BALANCE: &str = "₹ ••••••";

/// Renders the row of summary cards.
///
/// # Arguments
/// * `summary` - The figures to display
/// * `balance_visible` - Whether to show the balance or [MASKED_BALANCE]
pub(super) fn summary_cards_view(summary: &Summary, balance_visible: bool) -> Markup {
    let balance = if balance_visible {
        format_currency_rounded(summary.balance)
    } else {
        MASKED_BALANCE.to_owned()
    };
    let is_overdrawn = summary.balance < Decimal::ZERO;
    let balance_color = if balance_visible && is_overdrawn {
        "text-red-400"
    } else {
        "text-white"
    };
    // The status reflects the balance even while the figure itself is masked.
    let (status_icon, status, status_color) = if is_overdrawn {
        ("📉", "Alert", "text-red-400")
    } else {
        ("📈", "Secured", "text-green-400")
    };
    let toggle_label = if balance_visible {
        "Hide balance"
    } else {
        "Show balance"
    };

    html! {
        section
            id="summary-cards"
            class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 mb-8"
        {
            div id="balance-card" class=(CARD_STYLE)
            {
                div class="flex justify-between items-center mb-2"
                {
                    h3 class="text-sm font-medium text-gray-400" { "Balance" }

                    button
                        type="button"
                        hx-post=(endpoints::TOGGLE_BALANCE)
                        hx-target="#dashboard-content"
                        hx-target-error="#alert-container"
                        hx-swap="outerHTML"
                        aria-label=(toggle_label)
                        title=(toggle_label)
                        class="text-gray-400 hover:text-white transition-colors"
                    {
                        @if balance_visible { "🙈" } @else { "👁️" }
                    }
                }

                p
                    data-testid="balance"
                    class={ "text-2xl font-bold " (balance_color) }
                {
                    (balance)
                }

                p
                    data-testid="balance-status"
                    class={ "flex items-center gap-1 mt-2 text-sm " (status_color) }
                {
                    span aria-hidden="true" { (status_icon) }
                    (status)
                }
            }

            (figure_card("Total Income", "income", summary.total_income, "text-green-400"))
            (figure_card("Total Expenses", "expenses", summary.total_expenses, "text-red-400"))
            (figure_card("Today's Expenses", "today", summary.today_expenses, "text-orange-400"))
        }
    }
}

fn figure_card(title: &str, test_id: &str, amount: Decimal, text_color: &str) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            h3 class="mb-2 text-sm font-medium text-gray-400" { (title) }
            p data-testid=(test_id) class={ "text-2xl font-bold " (text_color) }
            {
                (format_currency_rounded(amount))
            }
        }
    }
}
