//! Weather code classification, wind bearings and forecast reshaping

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::ForecastDay;

/// Number of daily records requested from, and required of, the forecast API
pub const FORECAST_DAYS: usize = 5;

const ICON_BASE_URL: &str = "https://cdn.weatherapi.com/weather/64x64/day";

/// Icon used for codes outside the table
pub const DEFAULT_ICON: &str = "113";

/// Human-readable condition paired with its icon id
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Condition {
    pub text: String,
    pub icon: String,
}

impl Condition {
    pub fn icon_url(&self) -> String {
        format!("{}/{}.png", ICON_BASE_URL, self.icon)
    }

    /// Terminal glyph standing in for the icon image
    pub fn emoji(&self) -> &'static str {
        match self.icon.as_str() {
            "113" => "\u{2600}\u{fe0f}",
            "116" => "\u{26c5}",
            "119" => "\u{2601}\u{fe0f}",
            "248" => "\u{1f32b}\u{fe0f}",
            "176" => "\u{1f327}\u{fe0f}",
            "179" => "\u{1f328}\u{fe0f}",
            "200" => "\u{26c8}\u{fe0f}",
            _ => "\u{1f321}\u{fe0f}",
        }
    }
}

impl Default for Condition {
    fn default() -> Self {
        classify(-1)
    }
}

/// Map a WMO weather code to its display text and icon id.
///
/// The table is closed: anything not listed, negative or out of the WMO
/// range included, is `"Unknown"` with the default icon.
pub fn classify(code: i64) -> Condition {
    let (text, icon) = match code {
        0 => ("Clear sky", "113"),
        1 => ("Mainly clear", "116"),
        2 => ("Partly cloudy", "116"),
        3 => ("Overcast", "119"),
        45 => ("Fog", "248"),
        48 => ("Depositing rime fog", "248"),
        51 => ("Light drizzle", "176"),
        56 => ("Freezing drizzle", "179"),
        61 => ("Light rain", "176"),
        66 => ("Freezing rain", "179"),
        80 => ("Rain showers", "176"),
        85 => ("Snow showers", "179"),
        95 => ("Thunderstorm", "200"),
        _ => ("Unknown", DEFAULT_ICON),
    };
    Condition {
        text: text.to_string(),
        icon: icon.to_string(),
    }
}

/// Eight-point compass bearing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum WindDirection {
    #[default]
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl WindDirection {
    const COMPASS: [WindDirection; 8] = [
        WindDirection::N,
        WindDirection::NE,
        WindDirection::E,
        WindDirection::SE,
        WindDirection::S,
        WindDirection::SW,
        WindDirection::W,
        WindDirection::NW,
    ];

    /// Nearest compass point for a bearing in degrees. Wraps, so 359° is N.
    pub fn from_degrees(degrees: f64) -> Self {
        let sector = (degrees / 45.0).round() as i64;
        Self::COMPASS[sector.rem_euclid(8) as usize]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WindDirection::N => "N",
            WindDirection::NE => "NE",
            WindDirection::E => "E",
            WindDirection::SE => "SE",
            WindDirection::S => "S",
            WindDirection::SW => "SW",
            WindDirection::W => "W",
            WindDirection::NW => "NW",
        }
    }
}

impl std::fmt::Display for WindDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily series that cannot be turned into a forecast
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForecastShapeError {
    #[error("daily series length mismatch: {dates} dates, {max} max, {min} min, {codes} codes")]
    Misaligned {
        dates: usize,
        max: usize,
        min: usize,
        codes: usize,
    },

    #[error("expected {} forecast days, got {0}", FORECAST_DAYS)]
    WrongLength(usize),
}

/// Zip parallel daily arrays into forecast days, keeping input order.
///
/// Exactly [`FORECAST_DAYS`] aligned entries are required.
pub fn normalize_forecast(
    dates: &[NaiveDate],
    max_temps: &[f64],
    min_temps: &[f64],
    codes: &[i64],
) -> Result<Vec<ForecastDay>, ForecastShapeError> {
    let len = dates.len();
    if max_temps.len() != len || min_temps.len() != len || codes.len() != len {
        return Err(ForecastShapeError::Misaligned {
            dates: len,
            max: max_temps.len(),
            min: min_temps.len(),
            codes: codes.len(),
        });
    }
    if len != FORECAST_DAYS {
        return Err(ForecastShapeError::WrongLength(len));
    }

    Ok(dates
        .iter()
        .zip(max_temps)
        .zip(min_temps)
        .zip(codes)
        .map(|(((date, max), min), code)| ForecastDay {
            date: *date,
            max_temp_c: *max,
            min_temp_c: *min,
            condition: classify(*code),
        })
        .collect())
}
