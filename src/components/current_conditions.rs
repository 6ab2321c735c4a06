use artbox::{Alignment as ArtAlignment, Renderer, integrations::ratatui::ArtBox};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::location_header::{HEADER_OVERHEAD, font_stack, temperature_gradient};
use super::{Component, LocationHeader, LocationHeaderProps};
use crate::action::Action;
use crate::state::{CurrentConditions, TempUnit};

/// Current conditions block: header, big temperature, condition and details
pub struct CurrentConditionsView;

pub struct CurrentConditionsProps<'a> {
    pub current: &'a CurrentConditions,
    pub unit: TempUnit,
}

/// terminus is 6 rows tall; the header adds its own overhead on top.
const HEADER_CAP: u16 = 6 + HEADER_OVERHEAD;
const TEMP_CAP: u16 = 6;

impl Component<Action> for CurrentConditionsView {
    type Props<'a> = CurrentConditionsProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let current = props.current;
        let chunks = Layout::vertical([
            Constraint::Max(HEADER_CAP),
            Constraint::Length(1), // blank
            Constraint::Max(TEMP_CAP),
            Constraint::Length(1), // condition
            Constraint::Length(1), // details
        ])
        .flex(Flex::Center)
        .split(area);

        let mut header = LocationHeader;
        header.render(
            frame,
            chunks[0],
            LocationHeaderProps {
                city: &current.location_name,
                full_name: &current.display_location(),
                temperature_c: Some(current.temperature_c),
            },
        );

        let temp_text = props.unit.format(current.temperature_c);
        let renderer = Renderer::new(font_stack())
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(temperature_gradient(Some(current.temperature_c)));
        frame.render_widget(ArtBox::new(&renderer, &temp_text), chunks[2]);

        let condition = Line::from(vec![
            Span::raw(format!("{} ", current.condition.emoji())),
            Span::styled(
                current.condition.text.clone(),
                Style::default().fg(Color::White).bold(),
            ),
        ])
        .centered();
        frame.render_widget(Paragraph::new(condition), chunks[3]);

        frame.render_widget(Paragraph::new(details_line(current, props.unit)), chunks[4]);
    }
}

fn details_line(current: &CurrentConditions, unit: TempUnit) -> Line<'static> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::Gray);
    Line::from(vec![
        Span::styled("Humidity: ", label),
        Span::styled(format!("{}%", current.humidity_pct), value),
        Span::raw("   "),
        Span::styled("Wind: ", label),
        Span::styled(
            format!("{} km/h {}", current.wind_kph, current.wind_direction),
            value,
        ),
        Span::raw("   "),
        Span::styled("Feels like: ", label),
        Span::styled(unit.format(current.feels_like_c), value),
    ])
    .centered()
}
