//! Order fetch, table, and selection handlers.

use axum::{Json, extract::State, http::StatusCode};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, warn};

use orderdesk_core::{OrderTable, normalize};

use crate::error::AppError;
use crate::session::SelectOutcome;
use crate::state::AppState;

/// Body of `POST /api/orders/fetch`.
#[derive(Debug, Deserialize)]
pub struct FetchRequest {
    /// Inclusive start of the calendar-day range.
    pub start_date: NaiveDate,
    /// Inclusive end of the calendar-day range.
    pub end_date: NaiveDate,
}

/// Body of `POST /api/orders/select`.
#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub order_id: u64,
    pub selected: bool,
}

/// Body of `POST /api/orders/select-all`.
#[derive(Debug, Deserialize)]
pub struct SelectAllRequest {
    pub selected: bool,
}

/// Fetch orders for a date range, normalize them, and replace the session
/// table. Responds with the new table. On any fetch or normalization error
/// the previous table is left untouched.
pub async fn fetch(
    State(state): State<AppState>,
    Json(req): Json<FetchRequest>,
) -> Result<Json<OrderTable>, AppError> {
    if req.end_date < req.start_date {
        return Err(AppError::BadRequest(
            "end_date must not be before start_date".to_string(),
        ));
    }

    let raw = state.woo().fetch_orders(req.start_date, req.end_date).await?;
    let rows = normalize(raw)?;

    // Negative totals (refund-shaped data) are accepted but not treated as
    // silently valid revenue.
    for row in &rows {
        if row.order_value < Decimal::ZERO {
            warn!(
                order_id = row.order_id,
                order_value = %row.order_value,
                "order has negative total"
            );
        }
    }

    info!(
        start = %req.start_date,
        end = %req.end_date,
        orders = rows.len(),
        "order table replaced"
    );

    let table = OrderTable::new(req.start_date, req.end_date, rows);
    state.session().replace(table.clone()).await;
    Ok(Json(table))
}

/// Return the current session table.
pub async fn table(State(state): State<AppState>) -> Result<Json<OrderTable>, AppError> {
    state
        .session()
        .table()
        .await
        .map(Json)
        .ok_or_else(no_table_yet)
}

/// Flip one row's selection flag.
pub async fn select(
    State(state): State<AppState>,
    Json(req): Json<SelectRequest>,
) -> Result<StatusCode, AppError> {
    match state.session().set_selected(req.order_id, req.selected).await {
        SelectOutcome::Updated => Ok(StatusCode::NO_CONTENT),
        SelectOutcome::NoTable => Err(no_table_yet()),
        SelectOutcome::UnknownOrder => Err(AppError::NotFound(format!(
            "order {} is not in the current table",
            req.order_id
        ))),
    }
}

/// Set every row's selection flag.
pub async fn select_all(
    State(state): State<AppState>,
    Json(req): Json<SelectAllRequest>,
) -> Result<StatusCode, AppError> {
    if state.session().set_all_selected(req.selected).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(no_table_yet())
    }
}

fn no_table_yet() -> AppError {
    AppError::NotFound("no orders fetched yet".to_string())
}
