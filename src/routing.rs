//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post},
};

use crate::{
    AppState,
    dashboard::{
        cancel_form, delete_transaction, get_dashboard_page, get_summary, open_form,
        submit_transaction, toggle_balance, update_draft,
    },
    endpoints,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page));

    // These routes are called by HTMX and respond with the updated dashboard content.
    let intent_routes = Router::new()
        .route(endpoints::OPEN_FORM, post(open_form))
        .route(endpoints::CANCEL_FORM, post(cancel_form))
        .route(endpoints::DRAFT, post(update_draft))
        .route(endpoints::TRANSACTIONS_API, post(submit_transaction))
        .route(endpoints::TRANSACTION, delete(delete_transaction))
        .route(endpoints::TOGGLE_BALANCE, post(toggle_balance));

    page_routes
        .merge(intent_routes)
        .route(endpoints::SUMMARY_API, get(get_summary))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}
