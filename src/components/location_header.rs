use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;

/// City name in FIGlet art with the full "name, country" line underneath
pub struct LocationHeader;

pub struct LocationHeaderProps<'a> {
    pub city: &'a str,
    pub full_name: &'a str,
    pub temperature_c: Option<f64>,
}

/// Overhead inside the header area: 1 spacer + 1 full-name line.
/// The FIGlet city name gets `area.height - HEADER_OVERHEAD`.
pub const HEADER_OVERHEAD: u16 = 2;

/// Gradient endpoints keyed by temperature band
pub fn temperature_colors(temp: Option<f64>) -> (ArtColor, ArtColor) {
    match temp {
        Some(t) if t < 0.0 => (
            ArtColor::rgb(150, 200, 255), // Ice blue
            ArtColor::rgb(200, 230, 255), // Light ice
        ),
        Some(t) if t < 15.0 => (
            ArtColor::rgb(100, 180, 255), // Cool blue
            ArtColor::rgb(150, 220, 200), // Teal
        ),
        Some(t) if t < 25.0 => (
            ArtColor::rgb(100, 200, 150), // Green
            ArtColor::rgb(255, 220, 100), // Yellow
        ),
        Some(t) if t < 35.0 => (
            ArtColor::rgb(255, 180, 80), // Orange
            ArtColor::rgb(255, 120, 80), // Deep orange
        ),
        Some(_) => (
            ArtColor::rgb(255, 100, 80), // Red-orange
            ArtColor::rgb(255, 60, 60),  // Hot red
        ),
        None => (
            ArtColor::rgb(180, 180, 180), // Gray (no data)
            ArtColor::rgb(220, 220, 220),
        ),
    }
}

pub fn temperature_gradient(temp: Option<f64>) -> Fill {
    let (start, end) = temperature_colors(temp);
    Fill::Linear(LinearGradient::horizontal(start, end))
}

pub fn font_stack() -> Vec<artbox::Font> {
    fonts::stack(&["terminus", "miniwi"])
}

impl Component<Action> for LocationHeader {
    type Props<'a> = LocationHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // FIGlet city name, artbox picks the font
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // "City, Country"
        ])
        .split(area);

        let renderer = Renderer::new(font_stack())
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(temperature_gradient(props.temperature_c));
        frame.render_widget(ArtBox::new(&renderer, props.city), chunks[0]);

        let name_line = Line::from(vec![Span::styled(
            props.full_name.to_string(),
            Style::default().fg(Color::Gray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(name_line), chunks[2]);
    }
}
