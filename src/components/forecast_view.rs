use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::{ForecastDay, TempUnit};

pub const FORECAST_TITLE: &str = "5-Day Forecast";

/// Rows needed: title, blank, weekday, glyph, temps, condition
pub const FORECAST_HEIGHT: u16 = 6;

/// One column per forecast day, in the order given
pub struct ForecastView;

pub struct ForecastViewProps<'a> {
    pub days: &'a [ForecastDay],
    pub unit: TempUnit,
}

impl Component<Action> for ForecastView {
    type Props<'a> = ForecastViewProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // title
            Constraint::Length(1), // blank
            Constraint::Min(0),    // days
        ])
        .split(area);

        let title = Line::from(Span::styled(
            FORECAST_TITLE,
            Style::default().fg(Color::Cyan).bold(),
        ))
        .centered();
        frame.render_widget(Paragraph::new(title), chunks[0]);

        if props.days.is_empty() {
            return;
        }

        let columns = Layout::horizontal(
            props
                .days
                .iter()
                .map(|_| Constraint::Ratio(1, props.days.len() as u32)),
        )
        .split(chunks[2]);

        for (day, column) in props.days.iter().zip(columns.iter()) {
            frame.render_widget(Paragraph::new(day_lines(day, props.unit)).centered(), *column);
        }
    }
}

/// Short weekday name, e.g. "Mon"
pub fn weekday_label(day: &ForecastDay) -> String {
    day.date.format("%a").to_string()
}

fn day_lines(day: &ForecastDay, unit: TempUnit) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            weekday_label(day),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(day.condition.emoji()),
        Line::from(vec![
            Span::styled(
                unit.format_short(day.max_temp_c),
                Style::default().fg(Color::Rgb(255, 180, 80)),
            ),
            Span::raw(" "),
            Span::styled(
                unit.format_short(day.min_temp_c),
                Style::default().fg(Color::Rgb(100, 180, 255)),
            ),
        ]),
        Line::from(Span::styled(
            day.condition.text.clone(),
            Style::default().fg(Color::Gray),
        )),
    ]
}
