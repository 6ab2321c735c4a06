//! Actions: user intents and async lookup results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherReport;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Focus the search bar
    SearchFocus,

    /// Leave the search bar without submitting
    SearchBlur,

    /// Search bar text changed
    SearchInputChange(String),

    /// Submit a place name (triggers the lookup pipeline)
    SearchSubmit(String),

    // ===== Weather category =====
    /// Re-run the lookup for the last submitted place
    WeatherRefresh,

    /// Result: lookup finished with a full report
    WeatherDidLoad { generation: u64, report: WeatherReport },

    /// Result: lookup failed at some stage
    WeatherDidError { generation: u64, reason: String },

    // ===== UI category =====
    /// Toggle between Celsius and Fahrenheit
    UiToggleUnits,

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}
