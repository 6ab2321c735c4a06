use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use tui_dispatch::DataResource;

use super::forecast_view::FORECAST_HEIGHT;
use super::{
    Component, CurrentConditionsProps, CurrentConditionsView, ERROR_ICON, ForecastView,
    ForecastViewProps,
};
use crate::action::Action;
use crate::state::{AppState, WeatherReport};

pub const LOADING_TEXT: &str = "Loading weather data...";
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Everything below the search bar: report, spinner, error or idle hint
pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match WeatherView::from_state(props.state) {
            WeatherView::Ready(report) => render_ready(frame, area, props.state, report),
            WeatherView::Loading => render_loading(frame, area, props.state.tick_count),
            WeatherView::Error(error) => render_error(frame, area, error),
            WeatherView::Empty => render_idle_hint(frame, area),
        }
    }
}

fn render_ready(frame: &mut Frame, area: Rect, state: &AppState, report: &WeatherReport) {
    let chunks = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(FORECAST_HEIGHT),
    ])
    .split(area);

    let mut current = CurrentConditionsView;
    current.render(
        frame,
        chunks[0],
        CurrentConditionsProps {
            current: &report.current,
            unit: state.unit,
        },
    );

    let mut forecast = ForecastView;
    forecast.render(
        frame,
        chunks[2],
        ForecastViewProps {
            days: &report.forecast,
            unit: state.unit,
        },
    );
}

fn render_loading(frame: &mut Frame, area: Rect, tick_count: u32) {
    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);

    let frame_glyph = SPINNER[tick_count as usize % SPINNER.len()];
    let line = Line::from(vec![
        Span::styled(format!("{frame_glyph} "), Style::default().fg(Color::Cyan)),
        Span::styled(LOADING_TEXT, Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(line), row);
}

fn render_idle_hint(frame: &mut Frame, area: Rect) {
    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);

    let hint = Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("/", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" to search for a city", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), row);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // icon
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(ERROR_ICON).centered()),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red).bold()),
                Span::styled(
                    format!("{error}. Please try another location."),
                    Style::default().fg(Color::Rgb(200, 100, 100)),
                ),
            ])
            .centered(),
        ),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("r", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[3],
    );
}

// ============================================================================
// Helpers
// ============================================================================

enum WeatherView<'a> {
    Error(&'a str),
    Ready(&'a WeatherReport),
    Loading,
    Empty,
}

impl<'a> WeatherView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        match &state.request {
            DataResource::Failed(error) => WeatherView::Error(error),
            DataResource::Loaded(report) => WeatherView::Ready(report),
            DataResource::Loading => WeatherView::Loading,
            DataResource::Empty => WeatherView::Empty,
        }
    }
}
