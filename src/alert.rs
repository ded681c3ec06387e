//! Alert system for displaying error messages to users.
//!
//! Alerts are HTML fragments swapped into the `#alert-container` element of
//! the base page by HTMX, usually via `hx-target-error`.

use axum::response::Html;
use maud::html;

/// An error message with details on how to fix it.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub details: String,
}

impl Alert {
    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Html<String> {
        let markup = html! {
            div
                class="p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
                    dark:bg-gray-800 dark:text-red-400"
                role="alert"
                onclick="this.parentElement.classList.add('hidden')"
            {
                span class="font-medium" { (self.message) }
                p { (self.details) }
            }

            script { "document.getElementById('alert-container').classList.remove('hidden');" }
        };

        Html(markup.into_string())
    }
}
