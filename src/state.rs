//! Application state - single source of truth

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::conditions::{Condition, WindDirection};

/// Resolved position of a place
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// First match of a place-name lookup
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeocodedPlace {
    pub name: String,
    pub country: Option<String>,
    pub coordinates: Coordinates,
}

/// Instantaneous conditions at the searched place
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_kph: f64,
    pub wind_direction: WindDirection,
    pub condition: Condition,
    /// The place name as the user entered it
    pub location_name: String,
    pub country_name: String,
}

impl CurrentConditions {
    pub fn display_location(&self) -> String {
        if self.country_name.is_empty() {
            self.location_name.clone()
        } else {
            format!("{}, {}", self.location_name, self.country_name)
        }
    }
}

/// One calendar day of the forecast
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    pub condition: Condition,
}

/// Current conditions and forecast, produced together or not at all
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
}

/// Lookup lifecycle: Empty (idle) → Loading → Loaded/Failed
pub type RequestState = DataResource<WeatherReport>;

/// Temperature unit preference
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn toggle(&self) -> Self {
        match self {
            TempUnit::Celsius => TempUnit::Fahrenheit,
            TempUnit::Fahrenheit => TempUnit::Celsius,
        }
    }

    pub fn convert(&self, celsius: f64) -> f64 {
        match self {
            TempUnit::Celsius => celsius,
            TempUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }

    pub fn format(&self, celsius: f64) -> String {
        match self {
            TempUnit::Celsius => format!("{:.1}°C", celsius),
            TempUnit::Fahrenheit => format!("{:.1}°F", self.convert(celsius)),
        }
    }

    /// Rounded value with a bare degree sign, for compact forecast cells
    pub fn format_short(&self, celsius: f64) -> String {
        format!("{:.0}°", self.convert(celsius))
    }
}

/// Spinner frame period while a lookup is in flight.
pub const LOADING_ANIM_TICK_MS: u64 = 80;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Lookup lifecycle for the most recent submission
    #[debug(section = "Weather", label = "Request", debug_fmt)]
    pub request: RequestState,

    /// Last submitted place name (trimmed)
    #[debug(section = "Weather", label = "Query", debug_fmt)]
    pub last_query: Option<String>,

    /// Bumped on every submission; results from older generations are dropped
    #[debug(section = "Weather", label = "Generation")]
    pub generation: u64,

    /// Temperature unit preference
    #[debug(section = "Weather", label = "Unit", debug_fmt)]
    pub unit: TempUnit,

    // --- Search input ---
    /// Whether the search bar has keyboard focus
    #[debug(section = "Search", label = "Focused")]
    pub search_focused: bool,

    /// Text currently in the search bar
    #[debug(section = "Search", label = "Input")]
    pub search_input: String,

    /// Spinner frame counter
    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            request: DataResource::Empty,
            last_query: None,
            generation: 0,
            unit: TempUnit::default(),
            search_focused: false,
            search_input: String::new(),
            tick_count: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.request.is_loading()
    }

    pub fn report(&self) -> Option<&WeatherReport> {
        self.request.data()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
