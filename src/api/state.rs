//! Application state for the Incentive Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use crate::calculation::IncentiveTable;

/// Shared application state.
///
/// Holds the incentive table evaluations are resolved against. The table is
/// immutable, so the state is cheap to clone into every handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    table: IncentiveTable,
}

impl AppState {
    /// Creates application state using the given incentive table.
    pub fn new(table: IncentiveTable) -> Self {
        Self { table }
    }

    /// Returns the incentive table.
    pub fn table(&self) -> &IncentiveTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Designation, Slab};

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_default_state_uses_standard_table() {
        let state = AppState::default();
        assert_eq!(
            state
                .table()
                .amount(Designation::ChiefManager, Slab::HundredPlus)
                .unwrap(),
            75_000
        );
    }
}
