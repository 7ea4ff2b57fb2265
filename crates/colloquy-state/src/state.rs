use serde::{Deserialize, Serialize};

/// An opaque structured filter expression produced by the dashboard UI
///
/// The backend never inspects the expression; it is stored and broadcast
/// verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FilterGroup(pub serde_json::Value);

/// The one process-wide piece of dashboard UI state
///
/// Created with empty defaults at process start, mutated through partial
/// merges, never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalFilterState {
    pub global_filters: Vec<FilterGroup>,
    pub selected_dashboards: Vec<String>,
}

/// Partial update merged into the current state by `set_state`
///
/// A `Some` field replaces the stored field wholesale; `None` leaves it
/// untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStateUpdate {
    pub global_filters: Option<Vec<FilterGroup>>,
    pub selected_dashboards: Option<Vec<String>>,
}
