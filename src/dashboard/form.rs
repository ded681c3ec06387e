//! The add-transaction form and the button that opens it.

use maud::{Markup, html};

use crate::{
    category::Category,
    dashboard::state::{Draft, FormState},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE,
    },
    transaction::TransactionType,
};

/// Renders the form when it is open, otherwise the button that opens it.
pub(super) fn add_transaction_view(form: &FormState) -> Markup {
    match form {
        FormState::Closed => open_form_button(),
        FormState::Open(draft) => add_transaction_form(draft),
    }
}

fn open_form_button() -> Markup {
    html! {
        div id="add-transaction" class="mb-8"
        {
            button
                type="button"
                hx-post=(endpoints::OPEN_FORM)
                hx-target="#dashboard-content"
                hx-target-error="#alert-container"
                hx-swap="outerHTML"
                class=(BUTTON_PRIMARY_STYLE)
            {
                "+ Add Transaction"
            }
        }
    }
}

// Edits are sent to the draft endpoint without swapping, so the inputs keep
// focus while the user types. Submitting sends the same fields again.
fn add_transaction_form(draft: &Draft) -> Markup {
    html! {
        div id="add-transaction" class={ "mb-8 " (CARD_STYLE) }
        {
            h2 class="mb-4 text-xl font-semibold text-white" { "Add Transaction" }

            form
                hx-post=(endpoints::TRANSACTIONS_API)
                hx-target="#dashboard-content"
                hx-target-error="#alert-container"
                hx-swap="outerHTML"
                class="grid grid-cols-1 md:grid-cols-2 gap-4"
            {
                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount (₹)" }
                    input
                        id="amount"
                        name="amount"
                        type="number"
                        inputmode="decimal"
                        step="0.01"
                        min="0.01"
                        placeholder="0"
                        value=(draft.amount)
                        required
                        hx-post=(endpoints::DRAFT)
                        hx-trigger="change"
                        hx-include="closest form"
                        hx-swap="none"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="description" class=(FORM_LABEL_STYLE) { "Description" }
                    input
                        id="description"
                        name="description"
                        type="text"
                        placeholder="What was it for?"
                        value=(draft.description)
                        required
                        hx-post=(endpoints::DRAFT)
                        hx-trigger="change"
                        hx-include="closest form"
                        hx-swap="none"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                    select
                        id="category"
                        name="category"
                        hx-post=(endpoints::DRAFT)
                        hx-trigger="change"
                        hx-include="closest form"
                        hx-swap="none"
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for category in Category::ALL {
                            option value=(category) selected[category == draft.category]
                            {
                                (category.icon()) " " (category)
                            }
                        }
                    }
                }

                fieldset
                {
                    legend class=(FORM_LABEL_STYLE) { "Type" }
                    div class="flex gap-4 py-2"
                    {
                        @for transaction_type in [TransactionType::Expense, TransactionType::Income] {
                            label class="flex items-center gap-2 text-gray-200"
                            {
                                input
                                    type="radio"
                                    name="type"
                                    value=(transaction_type)
                                    checked[transaction_type == draft.transaction_type]
                                    hx-post=(endpoints::DRAFT)
                                    hx-trigger="change"
                                    hx-include="closest form"
                                    hx-swap="none";
                                @match transaction_type {
                                    TransactionType::Expense => { "Expense" }
                                    TransactionType::Income => { "Income" }
                                }
                            }
                        }
                    }
                }

                div class="flex gap-2 md:col-span-2"
                {
                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add" }
                    button
                        type="button"
                        hx-post=(endpoints::CANCEL_FORM)
                        hx-target="#dashboard-content"
                        hx-target-error="#alert-container"
                        hx-swap="outerHTML"
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Cancel"
                    }
                }
            }
        }
    }
}
