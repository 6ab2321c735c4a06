//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchFocus => {
            if state.search_focused {
                return DispatchResult::unchanged();
            }
            state.search_focused = true;
            DispatchResult::changed()
        }

        Action::SearchBlur => {
            state.search_focused = false;
            state.search_input.clear();
            DispatchResult::changed()
        }

        Action::SearchInputChange(input) => {
            state.search_input = input;
            DispatchResult::changed()
        }

        Action::SearchSubmit(place) => {
            let place = place.trim();
            if place.is_empty() {
                return DispatchResult::unchanged();
            }
            let place = place.to_string();
            state.search_input.clear();
            state.search_focused = false;
            start_lookup(state, place)
        }

        // ===== Weather actions =====
        Action::WeatherRefresh => match state.last_query.clone() {
            Some(place) => start_lookup(state, place),
            None => DispatchResult::unchanged(),
        },

        Action::WeatherDidLoad { generation, report } => {
            if generation != state.generation {
                return DispatchResult::unchanged();
            }
            state.request = DataResource::Loaded(report);
            DispatchResult::changed()
        }

        Action::WeatherDidError { generation, reason } => {
            if generation != state.generation {
                return DispatchResult::unchanged();
            }
            state.request = DataResource::Failed(reason);
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiToggleUnits => {
            state.unit = state.unit.toggle();
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.is_loading() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Drop whatever was shown and start a fresh lookup generation.
fn start_lookup(state: &mut AppState, place: String) -> DispatchResult<Effect> {
    state.generation = state.generation.wrapping_add(1);
    state.request = DataResource::Loading;
    state.last_query = Some(place.clone());
    state.tick_count = 0;
    DispatchResult::changed_with(Effect::LookupWeather {
        place,
        generation: state.generation,
    })
}
