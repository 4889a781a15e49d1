//! # Table Module
//!
//! The seating lifecycle for a restaurant floor.
//!
//! ## Status State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Table Lifecycle                                 │
//! │                                                                     │
//! │                 reserve                seat                         │
//! │  ┌───────────┐ ────────► ┌──────────┐ ─────┐                        │
//! │  │ Available │           │ Reserved │      │                        │
//! │  └───────────┘           └──────────┘      ▼                        │
//! │    ▲   ▲   │ seat                     ┌──────────┐ start_order      │
//! │    │   │   └──────────────────────────► Occupied │ ◄──────────┐     │
//! │    │   │                              └──────────┘ ───────────┘     │
//! │    │   │ checkout                          │                        │
//! │    │   └───────────────────────────────────┤                        │
//! │    │ mark_clean                            │ mark_cleaning          │
//! │  ┌───────────┐                             │                        │
//! │  │ Cleaning  │ ◄───────────────────────────┘                        │
//! │  └───────────┘                                                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Occupant data (customer, server, running order total, seating time)
//! lives inside the `Occupied`/`Reserved` variants, so a table that is
//! `Available` or `Cleaning` structurally cannot carry stale occupant
//! fields. Every transition validates the source status before mutating;
//! a rejected command leaves the table untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation;

// =============================================================================
// Status
// =============================================================================

/// The seating lifecycle state of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    /// Ready to seat the next party.
    Available,
    /// A party is seated.
    Occupied,
    /// Held for a named party (possibly at a future time).
    Reserved,
    /// Being bussed and wiped down after checkout.
    Cleaning,
}

/// Occupant data, keyed by status.
///
/// The variant IS the status; [`Occupancy::status`] projects it down to
/// the flat [`TableStatus`] for counting and display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Occupancy {
    Available,
    Occupied {
        /// Party name, when one was given at seating.
        customer_name: Option<String>,
        /// Assigned staff member.
        server: Option<String>,
        /// Running order total reported by the order-entry flow.
        order_total_cents: Option<i64>,
        /// When the party sat down (always in the past).
        #[ts(as = "String")]
        seated_at: DateTime<Utc>,
    },
    Reserved {
        customer_name: String,
        /// Reservation time; may be in the future.
        #[ts(as = "String")]
        reserved_for: DateTime<Utc>,
    },
    Cleaning,
}

impl Occupancy {
    /// Projects the variant down to its flat status.
    pub fn status(&self) -> TableStatus {
        match self {
            Occupancy::Available => TableStatus::Available,
            Occupancy::Occupied { .. } => TableStatus::Occupied,
            Occupancy::Reserved { .. } => TableStatus::Reserved,
            Occupancy::Cleaning => TableStatus::Cleaning,
        }
    }
}

// =============================================================================
// Table
// =============================================================================

/// A seating table on the floor.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Table {
    /// Unique identifier (UUID v4). Stable, never reused.
    pub id: String,

    /// Display index, unique among tables on the floor.
    pub number: u32,

    /// Seat count (always > 0).
    pub capacity: u32,

    /// Current lifecycle state plus occupant data.
    pub occupancy: Occupancy,
}

impl Table {
    /// Returns the flat lifecycle status.
    #[inline]
    pub fn status(&self) -> TableStatus {
        self.occupancy.status()
    }

    /// The timestamp attached to the occupancy: seating time when
    /// occupied, reservation time when reserved.
    pub fn occupancy_time(&self) -> Option<DateTime<Utc>> {
        match &self.occupancy {
            Occupancy::Occupied { seated_at, .. } => Some(*seated_at),
            Occupancy::Reserved { reserved_for, .. } => Some(*reserved_for),
            _ => None,
        }
    }

    /// Human label for how long ago the party sat down, or how far out
    /// the reservation is: `"32m ago"` or `"in 15m"`, whole minutes
    /// rounded down. `None` for available/cleaning tables.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::{Duration, Utc};
    /// use lumi_core::table::FloorPlan;
    ///
    /// let mut floor = FloorPlan::new();
    /// floor.add_table("t-1", 3, 6).unwrap();
    /// let now = Utc::now();
    /// floor.reserve("t-1", "Sarah Johnson", now + Duration::minutes(15)).unwrap();
    ///
    /// let table = floor.get("t-1").unwrap();
    /// assert_eq!(table.elapsed_label(now).as_deref(), Some("in 15m"));
    /// ```
    pub fn elapsed_label(&self, now: DateTime<Utc>) -> Option<String> {
        let t = self.occupancy_time()?;
        let elapsed = now.signed_duration_since(t);
        if elapsed >= chrono::Duration::zero() {
            Some(format!("{}m ago", elapsed.num_minutes()))
        } else {
            Some(format!("in {}m", (-elapsed).num_minutes()))
        }
    }
}

// =============================================================================
// Floor Summary
// =============================================================================

/// Per-status table counts (the four tiles above the floor grid).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FloorSummary {
    pub available: usize,
    pub occupied: usize,
    pub reserved: usize,
    pub cleaning: usize,
}

// =============================================================================
// Floor Plan
// =============================================================================

/// The tables owned by one terminal, ordered by table number.
///
/// All lifecycle commands take a table identifier and fail with
/// [`CoreError::TableNotFound`] for an unknown id or
/// [`CoreError::InvalidTransition`] when the table's current status is not
/// in the command's valid-from set. Commands validate first and mutate
/// last; there is no partial failure mid-transition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FloorPlan {
    tables: Vec<Table>,
}

impl FloorPlan {
    /// Creates an empty floor.
    pub fn new() -> Self {
        FloorPlan { tables: Vec::new() }
    }

    /// Adds a new table, which starts `Available`.
    ///
    /// ## Errors
    /// - Non-positive capacity
    /// - Duplicate table number
    pub fn add_table(
        &mut self,
        id: impl Into<String>,
        number: u32,
        capacity: u32,
    ) -> CoreResult<&Table> {
        validation::validate_capacity(capacity)?;

        if self.tables.iter().any(|t| t.number == number) {
            return Err(ValidationError::Duplicate {
                field: "table number".to_string(),
                value: number.to_string(),
            }
            .into());
        }

        let table = Table {
            id: id.into(),
            number,
            capacity,
            occupancy: Occupancy::Available,
        };

        // Keep number order for display
        let pos = self
            .tables
            .iter()
            .position(|t| t.number > number)
            .unwrap_or(self.tables.len());
        self.tables.insert(pos, table);
        Ok(&self.tables[pos])
    }

    /// Returns the table with the given id.
    pub fn get(&self, table_id: &str) -> CoreResult<&Table> {
        self.tables
            .iter()
            .find(|t| t.id == table_id)
            .ok_or_else(|| CoreError::TableNotFound(table_id.to_string()))
    }

    /// All tables, in table-number order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Number of tables on the floor.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Checks if the floor has no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Counts tables per status.
    pub fn summary(&self) -> FloorSummary {
        let mut summary = FloorSummary::default();
        for table in &self.tables {
            match table.status() {
                TableStatus::Available => summary.available += 1,
                TableStatus::Occupied => summary.occupied += 1,
                TableStatus::Reserved => summary.reserved += 1,
                TableStatus::Cleaning => summary.cleaning += 1,
            }
        }
        summary
    }

    /// Seats a party.
    ///
    /// Valid from `Available` and `Reserved`. Sets the seating time to
    /// `now`. When seating a reservation without a new name, the
    /// reservation's customer name is kept; everything else from the
    /// reservation is dropped.
    pub fn seat(
        &mut self,
        table_id: &str,
        customer_name: Option<String>,
        server: Option<String>,
        now: DateTime<Utc>,
    ) -> CoreResult<&Table> {
        if let Some(name) = customer_name.as_deref() {
            validation::validate_customer_name(name)?;
        }

        let idx = self.index_of(table_id)?;
        let table = &mut self.tables[idx];

        let seated_name = match &table.occupancy {
            Occupancy::Available => customer_name,
            Occupancy::Reserved {
                customer_name: reserved_name,
                ..
            } => customer_name.or_else(|| Some(reserved_name.clone())),
            other => {
                return Err(CoreError::InvalidTransition {
                    table_id: table_id.to_string(),
                    command: "seat",
                    status: other.status(),
                })
            }
        };

        table.occupancy = Occupancy::Occupied {
            customer_name: seated_name,
            server,
            order_total_cents: None,
            seated_at: now,
        };
        Ok(&self.tables[idx])
    }

    /// Signals the order-entry flow to begin taking an order.
    ///
    /// Valid from `Occupied` only. No state change; returns the table id
    /// for the collaborator to key the order on.
    pub fn start_order(&self, table_id: &str) -> CoreResult<&str> {
        let table = self.get(table_id)?;
        match table.status() {
            TableStatus::Occupied => Ok(table.id.as_str()),
            status => Err(CoreError::InvalidTransition {
                table_id: table_id.to_string(),
                command: "start_order",
                status,
            }),
        }
    }

    /// Records the running order total reported by the order-entry flow.
    ///
    /// Valid from `Occupied` only; the total must be non-negative.
    pub fn record_order_total(&mut self, table_id: &str, total: Money) -> CoreResult<&Table> {
        if total.is_negative() {
            return Err(ValidationError::OutOfRange {
                field: "order total".to_string(),
                min: 0,
                max: i64::MAX,
            }
            .into());
        }

        let idx = self.index_of(table_id)?;
        match &mut self.tables[idx].occupancy {
            Occupancy::Occupied {
                order_total_cents, ..
            } => *order_total_cents = Some(total.cents()),
            other => {
                return Err(CoreError::InvalidTransition {
                    table_id: table_id.to_string(),
                    command: "record_order_total",
                    status: other.status(),
                })
            }
        }
        Ok(&self.tables[idx])
    }

    /// Checks the party out and frees the table.
    ///
    /// Valid from `Occupied` only. Occupant data is gone once the table
    /// is back to `Available`.
    pub fn checkout(&mut self, table_id: &str) -> CoreResult<&Table> {
        self.transition(table_id, "checkout", TableStatus::Occupied, Occupancy::Available)
    }

    /// Sends the table to cleaning after the party leaves.
    ///
    /// Valid from `Occupied` only. Occupant data is dropped at this step
    /// (the `Cleaning` variant cannot carry it).
    pub fn mark_cleaning(&mut self, table_id: &str) -> CoreResult<&Table> {
        self.transition(table_id, "mark_cleaning", TableStatus::Occupied, Occupancy::Cleaning)
    }

    /// Returns a cleaned table to service.
    ///
    /// Valid from `Cleaning` only.
    pub fn mark_clean(&mut self, table_id: &str) -> CoreResult<&Table> {
        self.transition(table_id, "mark_clean", TableStatus::Cleaning, Occupancy::Available)
    }

    /// Holds a table for a named party.
    ///
    /// Valid from `Available` only. The reservation time may be in the
    /// future; the customer name is required.
    pub fn reserve(
        &mut self,
        table_id: &str,
        customer_name: impl Into<String>,
        reserved_for: DateTime<Utc>,
    ) -> CoreResult<&Table> {
        let customer_name = customer_name.into();
        validation::validate_customer_name(&customer_name)?;

        let idx = self.index_of(table_id)?;
        let table = &mut self.tables[idx];
        match table.status() {
            TableStatus::Available => {
                table.occupancy = Occupancy::Reserved {
                    customer_name,
                    reserved_for,
                };
                Ok(&self.tables[idx])
            }
            status => Err(CoreError::InvalidTransition {
                table_id: table_id.to_string(),
                command: "reserve",
                status,
            }),
        }
    }

    fn index_of(&self, table_id: &str) -> CoreResult<usize> {
        self.tables
            .iter()
            .position(|t| t.id == table_id)
            .ok_or_else(|| CoreError::TableNotFound(table_id.to_string()))
    }

    /// Shared guard-then-swap for transitions with a fixed target variant.
    fn transition(
        &mut self,
        table_id: &str,
        command: &'static str,
        valid_from: TableStatus,
        target: Occupancy,
    ) -> CoreResult<&Table> {
        let idx = self.index_of(table_id)?;
        let table = &mut self.tables[idx];
        let status = table.status();
        if status != valid_from {
            return Err(CoreError::InvalidTransition {
                table_id: table_id.to_string(),
                command,
                status,
            });
        }
        table.occupancy = target;
        Ok(&self.tables[idx])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2024-03-01T18:00:00Z".parse().unwrap()
    }

    fn floor_with_table(id: &str) -> FloorPlan {
        let mut floor = FloorPlan::new();
        floor.add_table(id, 1, 4).unwrap();
        floor
    }

    #[test]
    fn test_new_table_is_available() {
        let floor = floor_with_table("t-1");
        let table = floor.get("t-1").unwrap();
        assert_eq!(table.status(), TableStatus::Available);
        assert_eq!(table.capacity, 4);
        assert!(table.occupancy_time().is_none());
    }

    #[test]
    fn test_add_table_rejects_zero_capacity() {
        let mut floor = FloorPlan::new();
        let err = floor.add_table("t-1", 1, 0).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(floor.is_empty());
    }

    #[test]
    fn test_add_table_rejects_duplicate_number() {
        let mut floor = floor_with_table("t-1");
        let err = floor.add_table("t-2", 1, 2).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::Duplicate { .. })));
        assert_eq!(floor.len(), 1);
    }

    #[test]
    fn test_tables_ordered_by_number() {
        let mut floor = FloorPlan::new();
        floor.add_table("t-5", 5, 4).unwrap();
        floor.add_table("t-2", 2, 2).unwrap();
        floor.add_table("t-8", 8, 6).unwrap();

        let numbers: Vec<u32> = floor.tables().iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![2, 5, 8]);
    }

    #[test]
    fn test_seat_walk_in() {
        let mut floor = floor_with_table("t-1");
        floor
            .seat("t-1", Some("John Smith".into()), Some("Alice".into()), now())
            .unwrap();

        let table = floor.get("t-1").unwrap();
        assert_eq!(table.status(), TableStatus::Occupied);
        match &table.occupancy {
            Occupancy::Occupied {
                customer_name,
                server,
                order_total_cents,
                seated_at,
            } => {
                assert_eq!(customer_name.as_deref(), Some("John Smith"));
                assert_eq!(server.as_deref(), Some("Alice"));
                assert!(order_total_cents.is_none());
                assert_eq!(*seated_at, now());
            }
            other => panic!("expected occupied, got {:?}", other),
        }
    }

    #[test]
    fn test_seat_occupied_table_fails() {
        let mut floor = floor_with_table("t-1");
        floor.seat("t-1", None, None, now()).unwrap();

        let err = floor.seat("t-1", None, None, now()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidTransition {
                command: "seat",
                status: TableStatus::Occupied,
                ..
            }
        ));
    }

    #[test]
    fn test_seat_unknown_table_fails() {
        let mut floor = floor_with_table("t-1");
        let err = floor.seat("ghost", None, None, now()).unwrap_err();
        assert!(matches!(err, CoreError::TableNotFound(_)));
    }

    #[test]
    fn test_seat_reservation_keeps_customer_name() {
        let mut floor = floor_with_table("t-1");
        floor
            .reserve("t-1", "Sarah Johnson", now() + Duration::minutes(30))
            .unwrap();

        floor.seat("t-1", None, Some("Bob".into()), now()).unwrap();

        match &floor.get("t-1").unwrap().occupancy {
            Occupancy::Occupied {
                customer_name,
                server,
                seated_at,
                ..
            } => {
                assert_eq!(customer_name.as_deref(), Some("Sarah Johnson"));
                assert_eq!(server.as_deref(), Some("Bob"));
                // Seating time is now, not the reservation time
                assert_eq!(*seated_at, now());
            }
            other => panic!("expected occupied, got {:?}", other),
        }
    }

    #[test]
    fn test_seat_reservation_with_new_name_overrides() {
        let mut floor = floor_with_table("t-1");
        floor
            .reserve("t-1", "Sarah Johnson", now() + Duration::minutes(30))
            .unwrap();

        floor
            .seat("t-1", Some("Mike Davis".into()), None, now())
            .unwrap();

        match &floor.get("t-1").unwrap().occupancy {
            Occupancy::Occupied { customer_name, .. } => {
                assert_eq!(customer_name.as_deref(), Some("Mike Davis"));
            }
            other => panic!("expected occupied, got {:?}", other),
        }
    }

    #[test]
    fn test_seat_then_checkout_round_trip() {
        let mut floor = floor_with_table("t-1");
        floor
            .seat("t-1", Some("Lisa Brown".into()), Some("Alice".into()), now())
            .unwrap();
        floor
            .record_order_total("t-1", Money::from_cents(3275))
            .unwrap();

        floor.checkout("t-1").unwrap();

        let table = floor.get("t-1").unwrap();
        assert_eq!(table.status(), TableStatus::Available);
        // Occupant fields are structurally gone
        assert_eq!(table.occupancy, Occupancy::Available);
        assert!(table.occupancy_time().is_none());
    }

    #[test]
    fn test_cleaning_cycle() {
        let mut floor = floor_with_table("t-1");
        floor.seat("t-1", Some("John Smith".into()), None, now()).unwrap();

        floor.mark_cleaning("t-1").unwrap();
        let table = floor.get("t-1").unwrap();
        assert_eq!(table.status(), TableStatus::Cleaning);
        assert_eq!(table.occupancy, Occupancy::Cleaning);

        floor.mark_clean("t-1").unwrap();
        assert_eq!(floor.get("t-1").unwrap().status(), TableStatus::Available);
    }

    #[test]
    fn test_mark_clean_requires_cleaning_status() {
        let mut floor = floor_with_table("t-1");
        let err = floor.mark_clean("t-1").unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidTransition {
                command: "mark_clean",
                status: TableStatus::Available,
                ..
            }
        ));
    }

    #[test]
    fn test_start_order_only_when_occupied() {
        let mut floor = floor_with_table("t-1");

        let err = floor.start_order("t-1").unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition { .. }));

        floor.seat("t-1", None, None, now()).unwrap();
        assert_eq!(floor.start_order("t-1").unwrap(), "t-1");
        // No state change
        assert_eq!(floor.get("t-1").unwrap().status(), TableStatus::Occupied);
    }

    #[test]
    fn test_record_order_total() {
        let mut floor = floor_with_table("t-1");
        floor.seat("t-1", None, None, now()).unwrap();

        floor
            .record_order_total("t-1", Money::from_cents(4550))
            .unwrap();

        match &floor.get("t-1").unwrap().occupancy {
            Occupancy::Occupied {
                order_total_cents, ..
            } => assert_eq!(*order_total_cents, Some(4550)),
            other => panic!("expected occupied, got {:?}", other),
        }

        let err = floor
            .record_order_total("t-1", Money::from_cents(-1))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_reserve_requires_available() {
        let mut floor = floor_with_table("t-1");
        floor.seat("t-1", None, None, now()).unwrap();

        let err = floor
            .reserve("t-1", "Sarah Johnson", now() + Duration::hours(1))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidTransition {
                command: "reserve",
                status: TableStatus::Occupied,
                ..
            }
        ));
    }

    #[test]
    fn test_reserve_requires_customer_name() {
        let mut floor = floor_with_table("t-1");
        let err = floor
            .reserve("t-1", "  ", now() + Duration::hours(1))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::Required { .. })));
        // Rejected before any mutation
        assert_eq!(floor.get("t-1").unwrap().status(), TableStatus::Available);
    }

    #[test]
    fn test_elapsed_label_past_and_future() {
        let mut floor = floor_with_table("t-1");
        floor.add_table("t-2", 2, 2).unwrap();

        // Seated 30 minutes ago
        floor
            .seat("t-1", None, None, now() - Duration::minutes(30))
            .unwrap();
        assert_eq!(
            floor.get("t-1").unwrap().elapsed_label(now()).as_deref(),
            Some("30m ago")
        );

        // Reserved 15 minutes out
        floor
            .reserve("t-2", "Sarah Johnson", now() + Duration::minutes(15))
            .unwrap();
        assert_eq!(
            floor.get("t-2").unwrap().elapsed_label(now()).as_deref(),
            Some("in 15m")
        );
    }

    #[test]
    fn test_elapsed_label_rounds_down_and_handles_boundaries() {
        let mut floor = floor_with_table("t-1");
        floor
            .seat("t-1", None, None, now() - Duration::seconds(90))
            .unwrap();
        // 1.5 minutes → whole minutes rounded down
        assert_eq!(
            floor.get("t-1").unwrap().elapsed_label(now()).as_deref(),
            Some("1m ago")
        );

        floor.checkout("t-1").unwrap();
        assert!(floor.get("t-1").unwrap().elapsed_label(now()).is_none());

        floor.seat("t-1", None, None, now()).unwrap();
        // Exactly now counts as the past
        assert_eq!(
            floor.get("t-1").unwrap().elapsed_label(now()).as_deref(),
            Some("0m ago")
        );
    }

    #[test]
    fn test_summary_counts() {
        let mut floor = FloorPlan::new();
        for (i, capacity) in [2u32, 4, 6, 2, 4, 8, 2, 4].iter().enumerate() {
            floor
                .add_table(format!("t-{}", i + 1), (i + 1) as u32, *capacity)
                .unwrap();
        }

        floor.seat("t-1", Some("John Smith".into()), None, now()).unwrap();
        floor.seat("t-5", Some("Mike Davis".into()), None, now()).unwrap();
        floor
            .reserve("t-3", "Sarah Johnson", now() + Duration::minutes(30))
            .unwrap();
        floor.seat("t-4", None, None, now()).unwrap();
        floor.mark_cleaning("t-4").unwrap();

        let summary = floor.summary();
        assert_eq!(
            summary,
            FloorSummary {
                available: 4,
                occupied: 2,
                reserved: 1,
                cleaning: 1,
            }
        );
    }

    #[test]
    fn test_failed_transition_leaves_table_untouched() {
        let mut floor = floor_with_table("t-1");
        floor
            .seat("t-1", Some("John Smith".into()), Some("Alice".into()), now())
            .unwrap();
        let before = floor.get("t-1").unwrap().clone();

        assert!(floor.reserve("t-1", "Someone Else", now()).is_err());
        assert!(floor.mark_clean("t-1").is_err());
        assert!(floor.seat("t-1", None, None, now()).is_err());

        assert_eq!(floor.get("t-1").unwrap().occupancy, before.occupancy);
    }
}
