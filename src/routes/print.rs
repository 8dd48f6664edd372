//! Handler that renders shipping labels from query parameters.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::order::{parse_label_count, Order};
use crate::state::AppState;

/// Raw `/print` query parameters. `shippingAddress` and `lineItems` carry JSON.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintParams {
    pub order_id: Option<String>,
    pub order_name: Option<String>,
    pub label_count: Option<String>,
    pub shipping_address: Option<String>,
    pub line_items: Option<String>,
}

/// Renders the label document for an order.
///
/// Bad input never fails the request. An undecodable query string or invalid
/// JSON falls back to empty values with a logged warning, and an unusable
/// label count becomes 1.
#[instrument(name = "print::label", skip_all)]
pub async fn label(
    State(state): State<AppState>,
    params: Result<Query<PrintParams>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let params = match params {
        Ok(Query(params)) => params,
        Err(e) => {
            tracing::warn!(error = %e, "Could not decode query string, printing with defaults");
            PrintParams::default()
        }
    };

    let copies = parse_label_count(params.label_count.as_deref(), state.config.label.max_copies);
    let order = Order::from_query(
        params.order_id.as_deref(),
        params.order_name.as_deref(),
        params.shipping_address.as_deref(),
        params.line_items.as_deref(),
    );

    tracing::debug!(
        variant = %state.renderer.variant(),
        order = %order.name,
        copies,
        line_items = order.line_items.len(),
        "Rendering label"
    );

    let html = state.renderer.render(&state.tera, &order, copies)?;
    Ok(Html(html))
}
