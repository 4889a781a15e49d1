//! # Table Commands
//!
//! The floor board: seating, reservations, checkout, cleaning.
//!
//! Every state-changing command returns the full updated board snapshot
//! so the frontend can re-render the grid and the summary tiles in one
//! pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::FloorState;
use lumi_core::table::{FloorPlan, FloorSummary, Occupancy, Table, TableStatus};
use lumi_core::{CoreError, Money};

// =============================================================================
// DTOs
// =============================================================================

/// One table card as the frontend sees it.
///
/// Occupant fields are present only for the statuses that carry them;
/// `elapsed_label` is the pre-rendered "32m ago" / "in 15m" string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDto {
    pub id: String,
    pub number: u32,
    pub capacity: u32,
    pub status: TableStatus,
    pub customer_name: Option<String>,
    pub server: Option<String>,
    pub order_total_cents: Option<i64>,
    pub time_seated: Option<DateTime<Utc>>,
    pub elapsed_label: Option<String>,
}

impl TableDto {
    fn from_table(table: &Table, now: DateTime<Utc>) -> Self {
        let (customer_name, server, order_total_cents) = match &table.occupancy {
            Occupancy::Occupied {
                customer_name,
                server,
                order_total_cents,
                ..
            } => (customer_name.clone(), server.clone(), *order_total_cents),
            Occupancy::Reserved { customer_name, .. } => {
                (Some(customer_name.clone()), None, None)
            }
            _ => (None, None, None),
        };

        TableDto {
            id: table.id.clone(),
            number: table.number,
            capacity: table.capacity,
            status: table.status(),
            customer_name,
            server,
            order_total_cents,
            time_seated: table.occupancy_time(),
            elapsed_label: table.elapsed_label(now),
        }
    }
}

/// The whole board: table cards plus the summary tiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorResponse {
    pub tables: Vec<TableDto>,
    pub summary: FloorSummary,
}

fn floor_snapshot(floor: &FloorPlan, now: DateTime<Utc>) -> FloorResponse {
    FloorResponse {
        tables: floor
            .tables()
            .iter()
            .map(|t| TableDto::from_table(t, now))
            .collect(),
        summary: floor.summary(),
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Gets the current board snapshot.
pub fn list_tables(floor: &FloorState) -> FloorResponse {
    debug!("list_tables command");
    let now = Utc::now();
    floor.with_floor(|f| floor_snapshot(f, now))
}

/// Adds a new table to the floor (starts `Available`).
pub fn add_table(
    floor: &FloorState,
    number: u32,
    capacity: u32,
) -> Result<FloorResponse, ApiError> {
    debug!(number = %number, capacity = %capacity, "add_table command");

    let id = Uuid::new_v4().to_string();
    let now = Utc::now();
    let response = floor.with_floor_mut(|f| {
        f.add_table(id.clone(), number, capacity)?;
        Ok::<FloorResponse, CoreError>(floor_snapshot(f, now))
    })?;

    info!(table_id = %id, number = %number, "table added");
    Ok(response)
}

/// Seats a party at an available or reserved table.
pub fn seat_table(
    floor: &FloorState,
    table_id: &str,
    customer_name: Option<String>,
    server: Option<String>,
) -> Result<FloorResponse, ApiError> {
    debug!(table_id = %table_id, "seat_table command");

    let now = Utc::now();
    let response = floor.with_floor_mut(|f| {
        f.seat(table_id, customer_name, server, now)?;
        Ok::<FloorResponse, CoreError>(floor_snapshot(f, now))
    })?;

    info!(table_id = %table_id, "party seated");
    Ok(response)
}

/// Signals the order-entry flow to begin taking an order for a table.
///
/// Returns the table id the order should be keyed on; the board itself
/// does not change.
pub fn start_table_order(floor: &FloorState, table_id: &str) -> Result<String, ApiError> {
    debug!(table_id = %table_id, "start_table_order command");

    let id = floor.with_floor(|f| f.start_order(table_id).map(str::to_string))?;

    info!(table_id = %id, "order entry started");
    Ok(id)
}

/// Records the running order total reported back by the order-entry flow.
pub fn record_table_order_total(
    floor: &FloorState,
    table_id: &str,
    total_cents: i64,
) -> Result<FloorResponse, ApiError> {
    debug!(table_id = %table_id, total_cents = %total_cents, "record_table_order_total command");

    let now = Utc::now();
    let response = floor.with_floor_mut(|f| {
        f.record_order_total(table_id, Money::from_cents(total_cents))?;
        Ok::<FloorResponse, CoreError>(floor_snapshot(f, now))
    })?;

    Ok(response)
}

/// Checks the party out and frees the table.
pub fn checkout_table(floor: &FloorState, table_id: &str) -> Result<FloorResponse, ApiError> {
    debug!(table_id = %table_id, "checkout_table command");

    let now = Utc::now();
    let response = floor.with_floor_mut(|f| {
        f.checkout(table_id)?;
        Ok::<FloorResponse, CoreError>(floor_snapshot(f, now))
    })?;

    info!(table_id = %table_id, "table checked out");
    Ok(response)
}

/// Sends a table to cleaning.
pub fn mark_table_cleaning(
    floor: &FloorState,
    table_id: &str,
) -> Result<FloorResponse, ApiError> {
    debug!(table_id = %table_id, "mark_table_cleaning command");

    let now = Utc::now();
    let response = floor.with_floor_mut(|f| {
        f.mark_cleaning(table_id)?;
        Ok::<FloorResponse, CoreError>(floor_snapshot(f, now))
    })?;

    info!(table_id = %table_id, "table sent to cleaning");
    Ok(response)
}

/// Returns a cleaned table to service.
pub fn mark_table_clean(floor: &FloorState, table_id: &str) -> Result<FloorResponse, ApiError> {
    debug!(table_id = %table_id, "mark_table_clean command");

    let now = Utc::now();
    let response = floor.with_floor_mut(|f| {
        f.mark_clean(table_id)?;
        Ok::<FloorResponse, CoreError>(floor_snapshot(f, now))
    })?;

    info!(table_id = %table_id, "table back in service");
    Ok(response)
}

/// Reserves an available table for a named party.
pub fn reserve_table(
    floor: &FloorState,
    table_id: &str,
    customer_name: &str,
    reserved_for: DateTime<Utc>,
) -> Result<FloorResponse, ApiError> {
    debug!(table_id = %table_id, reserved_for = %reserved_for, "reserve_table command");

    let now = Utc::now();
    let response = floor.with_floor_mut(|f| {
        f.reserve(table_id, customer_name, reserved_for)?;
        Ok::<FloorResponse, CoreError>(floor_snapshot(f, now))
    })?;

    info!(table_id = %table_id, customer = %customer_name, "table reserved");
    Ok(response)
}

// =============================================================================
// Unit Tests
// =============================================================================
