//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The page handler that renders the whole dashboard
//! - One handler per user intent, each returning the re-rendered dashboard content
//! - The JSON summary handler
//!
//! Every handler holds the dashboard lock for the whole request, so intents
//! are applied one at a time and each render sees a consistent dashboard.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::{HxReswap, SwapOption};
use maud::{Markup, html};
use serde::Serialize;
use time::Date;

use crate::{
    AppState, Error,
    dashboard::{
        aggregation::{CategoryExpense, Summary},
        cards::summary_cards_view,
        charts::category_breakdown_view,
        form::add_transaction_view,
        list::recent_transactions_view,
        state::{Dashboard, Draft},
    },
    html::{HeadElement, PAGE_CONTAINER_STYLE, base},
    timezone::local_today,
    transaction::{Transaction, TransactionId},
};

const ECHARTS_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@5.5.1/dist/echarts.min.js";

/// The state needed for displaying and updating the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The dashboard shared by all requests.
    pub dashboard: Arc<Mutex<Dashboard>>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
    /// The maximum number of transactions in the recent transactions list.
    pub display_limit: usize,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            dashboard: state.dashboard.clone(),
            local_timezone: state.local_timezone.clone(),
            display_limit: state.display_limit,
        }
    }
}

/// The derived dashboard values served by the summary endpoint.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// The totals for the summary cards.
    #[serde(flatten)]
    pub summary: Summary,
    /// Expenses per category, in category order.
    pub expenses_by_category: Vec<CategoryExpense>,
    /// The most recent transactions, most recent first.
    pub recent_transactions: Vec<Transaction>,
    /// Whether the balance is shown or masked.
    pub balance_visible: bool,
}

fn lock_dashboard(state: &DashboardState) -> Result<MutexGuard<'_, Dashboard>, Error> {
    state
        .dashboard
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire dashboard lock: {error}"))
        .map_err(|_| Error::StateLockError)
}

/// Display the dashboard page.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;
    let dashboard = lock_dashboard(&state)?;

    let content = dashboard_content(&dashboard, today, state.display_limit);
    let scripts = [HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned())];

    Ok(base("Dashboard", &scripts, &content).into_response())
}

/// Get the summary figures, category breakdown and recent transactions as JSON.
pub async fn get_summary(
    State(state): State<DashboardState>,
) -> Result<Json<SummaryResponse>, Error> {
    let today = local_today(&state.local_timezone)?;
    let dashboard = lock_dashboard(&state)?;

    Ok(Json(SummaryResponse {
        summary: dashboard.summary(today),
        expenses_by_category: dashboard.expenses_by_category(),
        recent_transactions: dashboard.recent_transactions(state.display_limit).to_vec(),
        balance_visible: dashboard.is_balance_visible(),
    }))
}

/// Show the add-transaction form.
pub async fn open_form(State(state): State<DashboardState>) -> Response {
    apply_intent(&state, |dashboard, _| dashboard.open_form())
}

/// Hide the add-transaction form and discard the draft.
pub async fn cancel_form(State(state): State<DashboardState>) -> Response {
    apply_intent(&state, |dashboard, _| dashboard.cancel_form())
}

/// Store the user's edits to the draft.
pub async fn update_draft(
    State(state): State<DashboardState>,
    Form(draft): Form<Draft>,
) -> Response {
    apply_intent(&state, |dashboard, _| dashboard.update_draft(draft))
}

/// Add the submitted draft as a new transaction dated today.
///
/// Invalid drafts are not added and the form stays open with the user's
/// input, the response is the re-rendered dashboard either way.
pub async fn submit_transaction(
    State(state): State<DashboardState>,
    Form(draft): Form<Draft>,
) -> Response {
    apply_intent(&state, |dashboard, today| {
        dashboard.update_draft(draft);

        match dashboard.submit(today) {
            Ok(transaction) => tracing::info!(
                "added {} transaction {} for {}",
                transaction.transaction_type,
                transaction.id,
                transaction.amount.value()
            ),
            Err(error) => tracing::debug!("rejected draft: {error}"),
        }
    })
}

/// Delete a transaction.
///
/// IDs that do not match a transaction, including ones that are not numbers,
/// leave the dashboard unchanged.
pub async fn delete_transaction(
    State(state): State<DashboardState>,
    Path(transaction_id): Path<String>,
) -> Response {
    apply_intent(&state, |dashboard, _| {
        let deleted = transaction_id
            .parse::<TransactionId>()
            .ok()
            .and_then(|id| dashboard.delete(id));

        match deleted {
            Some(transaction) => tracing::info!("deleted transaction {}", transaction.id),
            None => tracing::debug!("no transaction with ID {transaction_id} to delete"),
        }
    })
}

/// Show or mask the balance.
pub async fn toggle_balance(State(state): State<DashboardState>) -> Response {
    apply_intent(&state, |dashboard, _| dashboard.toggle_balance_visibility())
}

/// Run `intent` against the dashboard and render the updated dashboard content.
///
/// Errors are rendered as alerts for HTMX to swap into the alert container.
fn apply_intent(state: &DashboardState, intent: impl FnOnce(&mut Dashboard, Date)) -> Response {
    let today = match local_today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return alert_response(error),
    };

    let mut dashboard = match lock_dashboard(state) {
        Ok(dashboard) => dashboard,
        Err(error) => return alert_response(error),
    };

    intent(&mut dashboard, today);

    dashboard_content(&dashboard, today, state.display_limit).into_response()
}

// The intents swap the dashboard content with `outerHTML`, which would replace
// the alert container itself, so alerts override the swap style.
fn alert_response(error: Error) -> Response {
    (HxReswap(SwapOption::InnerHtml), error.into_alert_response()).into_response()
}

/// Renders the dashboard content: the summary cards, the form, the chart and the recent list.
///
/// This is the element that the intents swap out.
fn dashboard_content(dashboard: &Dashboard, today: Date, display_limit: usize) -> Markup {
    let summary = dashboard.summary(today);
    let breakdown = dashboard.expenses_by_category();

    html!(
        div id="dashboard-content" class=(PAGE_CONTAINER_STYLE)
        {
            header class="mb-8"
            {
                h1 class="text-3xl font-bold text-white" { "Rupee Board" }
                p class="text-gray-400" { "Track where your money goes" }
            }

            (summary_cards_view(&summary, dashboard.is_balance_visible()))
            (add_transaction_view(dashboard.form()))

            div class="grid grid-cols-1 lg:grid-cols-2 gap-8"
            {
                (category_breakdown_view(&breakdown))
                (recent_transactions_view(dashboard.recent_transactions(display_limit)))
            }
        }
    )
}
