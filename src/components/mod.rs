pub mod current_conditions;
pub mod forecast_view;
pub mod location_header;
pub mod search_bar;
pub mod weather_body;
pub mod weather_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use current_conditions::{CurrentConditionsProps, CurrentConditionsView};
pub use forecast_view::{ForecastView, ForecastViewProps};
pub use location_header::{LocationHeader, LocationHeaderProps};
pub use search_bar::{SEARCH_BAR_HEIGHT, SearchBar, SearchBarProps};
pub use weather_body::{WeatherBody, WeatherBodyProps};
pub use weather_display::{ERROR_ICON, WeatherDisplay, WeatherDisplayProps};
