//! Stat Card Widget
//!
//! A bordered card showing one figure with a label, used for the live
//! total and the last confirmed total.

#![allow(dead_code)]

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::super::theme::theme;

/// A stat card displaying a label above a single prominent value.
pub struct StatCard<'a> {
    /// Card label
    title: &'a str,
    /// The figure to display
    value: &'a str,
    /// Color for the value text
    value_color: Color,
    /// Whether the card border is highlighted
    highlighted: bool,
    /// Optional line under the value (e.g. the calculation breakdown)
    subtitle: Option<&'a str>,
}

impl<'a> StatCard<'a> {
    /// Create a new stat card with label and value.
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            value_color: theme().text_primary,
            highlighted: false,
            subtitle: None,
        }
    }

    /// Set the value color.
    pub fn value_color(mut self, color: Color) -> Self {
        self.value_color = color;
        self
    }

    /// Highlight the card border.
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// Set an optional subtitle under the value.
    pub fn subtitle(mut self, subtitle: &'a str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    /// Render the stat card to the frame.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let t = theme();

        let border_style = if self.highlighted {
            t.border_active()
        } else {
            t.border_inactive()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(t.bg());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Label
                Constraint::Length(1), // Value
                Constraint::Min(0),    // Subtitle, if it fits
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(self.title)
                .style(t.subtitle())
                .alignment(Alignment::Center),
            rows[0],
        );

        frame.render_widget(
            Paragraph::new(self.value)
                .style(
                    Style::default()
                        .fg(self.value_color)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center),
            rows[1],
        );

        if let Some(subtitle) = self.subtitle
            && rows[2].height > 0
        {
            frame.render_widget(
                Paragraph::new(subtitle)
                    .style(Style::default().fg(t.text_muted))
                    .alignment(Alignment::Center),
                rows[2],
            );
        }
    }
}

/// A compact inline label/value pair for header and status lines.
pub struct InlineStat<'a> {
    label: &'a str,
    value: &'a str,
    label_color: Color,
    value_color: Color,
}

impl<'a> InlineStat<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        let t = theme();
        Self {
            label,
            value,
            label_color: t.text_muted,
            value_color: t.text_primary,
        }
    }

    pub fn label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    pub fn value_color(mut self, color: Color) -> Self {
        self.value_color = color;
        self
    }

    pub fn to_line(&self) -> Line<'a> {
        Line::from(vec![
            Span::styled(self.label, Style::default().fg(self.label_color)),
            Span::raw(" "),
            Span::styled(
                self.value,
                Style::default()
                    .fg(self.value_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }
}
