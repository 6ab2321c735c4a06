//! Action and state tests using TestHarness

use citycast::{
    action::Action,
    components::{Component, SearchBar, SearchBarProps, WeatherDisplay, WeatherDisplayProps},
    effect::Effect,
    reducer::reducer,
    state::{AppState, TempUnit, WeatherReport},
};
use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, NumericComponentId, assert_emitted, assert_not_emitted};

#[test]
fn test_reducer_search_submit() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    assert!(store.state().request.is_empty());

    let result = store.dispatch(Action::SearchSubmit("Cairo".into()));
    assert!(result.changed, "State should change");
    assert!(store.state().request.is_loading());
    assert_eq!(result.effects.len(), 1);
    assert!(matches!(
        &result.effects[0],
        Effect::LookupWeather { place, generation: 1 } if place == "Cairo"
    ));
}

#[test]
fn test_reducer_weather_load() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let report = WeatherReport::default();

    store.dispatch(Action::SearchSubmit("Cairo".into()));
    store.dispatch(Action::WeatherDidLoad {
        generation: 1,
        report: report.clone(),
    });

    assert!(store.state().request.is_loaded());
    assert_eq!(store.state().report(), Some(&report));
}

#[test]
fn test_reducer_toggle_units() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    assert_eq!(store.state().unit, TempUnit::Celsius);
    store.dispatch(Action::UiToggleUnits);
    assert_eq!(store.state().unit, TempUnit::Fahrenheit);
    store.dispatch(Action::UiToggleUnits);
    assert_eq!(store.state().unit, TempUnit::Celsius);
}

#[test]
fn test_component_keyboard_events() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = WeatherDisplay;

    let actions = harness.send_keys::<NumericComponentId, _, _>("/ r", |state, event| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_count(2);
    actions.assert_first(Action::SearchFocus);
    assert_emitted!(actions, Action::WeatherRefresh);
}

#[test]
fn test_component_ignores_when_unfocused() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = WeatherDisplay;

    let actions = harness.send_keys::<NumericComponentId, _, _>("r q u /", |state, event| {
        let props = WeatherDisplayProps {
            state,
            is_focused: false,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_empty();
}

#[test]
fn test_search_bar_typing_emits_changes() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut bar = SearchBar::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("l i m a", |state, event| {
        let props = SearchBarProps {
            query: &state.search_input,
            is_focused: true,
            is_loading: false,
            on_change: Action::SearchInputChange,
            on_submit: Action::SearchSubmit,
        };
        bar.handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    assert_emitted!(actions, Action::SearchInputChange(_));
    assert_not_emitted!(actions, Action::SearchSubmit(_));
}

#[test]
fn test_action_categories() {
    let did_load = Action::WeatherDidLoad {
        generation: 1,
        report: WeatherReport::default(),
    };
    let submit = Action::SearchSubmit("Cairo".into());
    let toggle = Action::UiToggleUnits;
    let tick = Action::Tick;

    assert_eq!(did_load.category(), Some("weather_did"));
    assert_eq!(submit.category(), Some("search"));
    assert_eq!(toggle.category(), Some("ui"));
    assert_eq!(tick.category(), None);

    assert!(did_load.is_weather_did());
    assert!(submit.is_search());
    assert!(toggle.is_ui());
}

#[test]
fn test_harness_emit_and_drain() {
    let mut harness = TestHarness::<(), Action>::new(());

    harness.emit(Action::SearchSubmit("Cairo".into()));
    harness.emit(Action::UiToggleUnits);
    harness.emit(Action::WeatherDidError {
        generation: 1,
        reason: "Location not found".into(),
    });

    let actions = harness.drain_emitted();
    actions.assert_count(3);
}

#[test]
fn test_assert_emitted_macro() {
    let actions = vec![
        Action::SearchSubmit("Cairo".into()),
        Action::WeatherDidLoad {
            generation: 1,
            report: WeatherReport::default(),
        },
    ];

    assert_emitted!(actions, Action::SearchSubmit(_));
    assert_emitted!(actions, Action::WeatherDidLoad { .. });
    assert_not_emitted!(actions, Action::Quit);
    assert_not_emitted!(actions, Action::WeatherDidError { .. });
}

#[test]
fn test_temp_unit_formatting() {
    assert_eq!(TempUnit::Celsius.format(0.0), "0.0°C");
    assert_eq!(TempUnit::Fahrenheit.format(0.0), "32.0°F");

    assert_eq!(TempUnit::Celsius.format(28.5), "28.5°C");
    assert_eq!(TempUnit::Fahrenheit.format(100.0), "212.0°F");
}
