//! Shared page layout, style constants and display formatting.

use maud::{DOCTYPE, Markup, PreEscaped, html};
use rust_decimal::{Decimal, RoundingStrategy};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "px-4 py-2 bg-red-600 \
    hover:bg-red-700 text-white rounded-lg transition-colors";

pub const BUTTON_SECONDARY_STYLE: &str = "px-4 py-2 bg-gray-600 \
    hover:bg-gray-700 text-white rounded-lg transition-colors";

pub const BUTTON_DELETE_STYLE: &str = "text-gray-400 hover:text-red-400 \
    bg-transparent border-none cursor-pointer transition-colors";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-1 text-sm font-medium text-gray-300";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full px-3 py-2 rounded-lg text-sm \
    text-white bg-gray-700 border border-gray-600 placeholder-gray-400 \
    focus:ring-2 focus:ring-red-500 focus:border-transparent";

// Cards
pub const CARD_STYLE: &str = "bg-gray-800/50 backdrop-blur-sm rounded-xl p-6 \
    border border-red-900/30";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col px-4 py-8 mx-auto max-w-screen-xl text-white";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Rupee Board" }

                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js" {}
                script src="https://unpkg.com/htmx-ext-response-targets@2.0.4/response-targets.js" {}

                style
                {
                    (PreEscaped(r#"
                    .custom-scrollbar::-webkit-scrollbar {
                        width: 6px;
                    }

                    .custom-scrollbar::-webkit-scrollbar-thumb {
                        background: #ef4444;
                        border-radius: 3px;
                    }
                    "#))
                }

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-gradient-to-br from-gray-900 via-red-900/20 to-black"
            {
                (content)

                // Alert container for out-of-band swaps
                div
                    id="alert-container"
                    class="hidden w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-red-500"
                    {
                        (header)
                    }

                    p class="mb-4 text-3xl md:text-4xl tracking-tight font-bold text-white"
                    {
                        (description)
                    }

                    p class="mb-4 text-1xl md:text-2xl tracking-tight text-gray-300"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-red-600 hover:bg-red-800
                            font-medium rounded-lg text-sm px-5 py-2.5 text-center my-4"
                    {
                        "Back to Dashboard"
                    }
                }
            }
        }
    );

    base(title, &[], &content)
}

/// Format `amount` as rupees rounded to the nearest whole number, e.g. "₹75,000".
///
/// Halves round away from zero. Digits are grouped the Indian way, the last
/// three together and then in pairs, so one lakh is "₹1,00,000". Every digit
/// is kept however large the amount.
pub fn format_currency_rounded(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    if rounded.is_zero() {
        return "₹0".to_owned();
    }

    let digits = group_digits(&rounded.abs().trunc().to_string());

    if rounded.is_sign_negative() {
        format!("-₹{digits}")
    } else {
        format!("₹{digits}")
    }
}

fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut pairs = Vec::new();
    let mut end = head.len();

    while end > 2 {
        pairs.push(&head[end - 2..end]);
        end -= 2;
    }
    pairs.push(&head[..end]);
    pairs.reverse();

    format!("{},{last_three}", pairs.join(","))
}

const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day padding:none]/[month padding:none]/[year]");

/// Format `date` day first without zero padding, e.g. "15/1/2025".
pub fn format_date(date: Date) -> String {
    date.format(DISPLAY_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}
