use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;

pub const PLACEHOLDER: &str = "Enter city name...";
pub const SEARCHING: &str = "Searching...";

/// Rows the search bar occupies (input plus vertical padding)
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Free-text place input. Emits the query on Enter; no network logic.
#[derive(Default)]
pub struct SearchBar {
    input: TextInput,
    was_focused: bool,
}

pub struct SearchBarProps<'a> {
    pub query: &'a str,
    pub is_focused: bool,
    /// A lookup is in flight; the input is read-only meanwhile
    pub is_loading: bool,
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset cursor state whenever the bar regains focus
    pub fn set_focused(&mut self, is_focused: bool) {
        if is_focused && !self.was_focused {
            self.input = TextInput::new();
        }
        self.was_focused = is_focused;
    }

    fn input_props<'a>(props: &SearchBarProps<'a>, bg: Option<Color>) -> TextInputProps<'a, Action> {
        TextInputProps {
            value: props.query,
            placeholder: if props.is_loading {
                SEARCHING
            } else {
                PLACEHOLDER
            },
            is_focused: props.is_focused,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::all(1),
                    bg,
                    fg: None,
                },
                placeholder_style: Some(Style::default().fg(Color::DarkGray)),
                cursor_style: None,
            },
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        }
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => return vec![Action::SearchBlur],
            _ if props.is_loading => return Vec::new(),
            KeyCode::Enter => {
                if props.query.trim().is_empty() {
                    return Vec::new();
                }
                return vec![(props.on_submit)(props.query.to_string())];
            }
            _ => {}
        }

        let input_props = Self::input_props(&props, None);
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let bg = if props.is_focused {
            Color::Rgb(50, 50, 60)
        } else {
            Color::Rgb(35, 35, 45)
        };
        let input_props = Self::input_props(&props, Some(bg));
        self.input.render(frame, area, input_props);
    }
}
