//! The route URIs served by the app.
//!
//! For routes that take a parameter, e.g., '/api/transactions/{transaction_id}', use [format_endpoint].

/// The root route, redirects to the dashboard.
pub const ROOT: &str = "/";
/// The dashboard page.
pub const DASHBOARD_VIEW: &str = "/dashboard";

/// Shows the add-transaction form.
pub const OPEN_FORM: &str = "/api/form/open";
/// Hides the add-transaction form and discards the draft.
pub const CANCEL_FORM: &str = "/api/form/cancel";
/// Updates the draft while the user edits the add-transaction form.
pub const DRAFT: &str = "/api/draft";
/// Submits the draft as a new transaction.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// Deletes a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";
/// Shows or masks the balance.
pub const TOGGLE_BALANCE: &str = "/api/balance/toggle";
/// The summary figures and category breakdown as JSON.
pub const SUMMARY_API: &str = "/api/summary";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter starts with '{' and ends with the next '}', e.g. '{transaction_id}'
/// in '/api/transactions/{transaction_id}'. Only the first parameter is replaced.
///
/// Returns `endpoint_path` unchanged if it has no parameter.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
