//! # Floor State
//!
//! The table board, shared across command invocations.
//!
//! Same locking story as the cart: one terminal, short exclusive
//! sections. A multi-terminal deployment would need a transactional
//! boundary per table id instead; that is a deployment concern, not
//! part of this layer.

use std::sync::{Arc, Mutex};

use lumi_core::table::FloorPlan;

/// Session-owned floor plan state.
#[derive(Debug)]
pub struct FloorState {
    floor: Arc<Mutex<FloorPlan>>,
}

impl FloorState {
    /// Creates state around an empty floor.
    pub fn new() -> Self {
        Self::from_floor(FloorPlan::new())
    }

    /// Creates state around a pre-built floor plan (e.g. seeded demo data).
    pub fn from_floor(floor: FloorPlan) -> Self {
        FloorState {
            floor: Arc::new(Mutex::new(floor)),
        }
    }

    /// Executes a function with read access to the floor.
    pub fn with_floor<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&FloorPlan) -> R,
    {
        let floor = self.floor.lock().expect("Floor mutex poisoned");
        f(&floor)
    }

    /// Executes a function with write access to the floor.
    pub fn with_floor_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut FloorPlan) -> R,
    {
        let mut floor = self.floor.lock().expect("Floor mutex poisoned");
        f(&mut floor)
    }
}

impl Default for FloorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_state_round_trip() {
        let state = FloorState::new();
        assert!(state.with_floor(|f| f.is_empty()));

        state
            .with_floor_mut(|f| f.add_table("t-1", 1, 4).map(|_| ()))
            .unwrap();
        assert_eq!(state.with_floor(|f| f.len()), 1);
    }
}
