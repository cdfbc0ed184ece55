//! UI rendering for the tip form.
//!
//! One screen: a form panel with the four inputs, two stat cards for the
//! live and confirmed totals, a status bar, and a help overlay.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};
use rust_decimal::Decimal;

use tipp::prelude::*;

use crate::tui::app::{App, Control, MessageType, Screen};
use crate::tui::components::{InlineStat, StatCard};
use crate::tui::theme::{icons, theme, Theme};

/// Width of the label column in the form panel.
const LABEL_WIDTH: usize = 18;

/// Cells in the slider track: one per 5% step.
const SLIDER_CELLS: usize = (PERCENTAGE_MAX / PERCENTAGE_STEP) as usize;

// ═══════════════════════════════════════════════════════════════════════════
// MAIN UI ENTRY POINT
// ═══════════════════════════════════════════════════════════════════════════

/// Main UI rendering function - entry point for all screen rendering.
pub fn ui(frame: &mut Frame, app: &App) {
    let t = theme();

    // Clear the frame first to prevent artifacts from the help overlay
    frame.render_widget(Clear, frame.area());
    frame.render_widget(Block::default().style(t.bg()), frame.area());

    // Root Layout: Header | Main Content | Status Bar
    let root_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main Content
            Constraint::Length(1), // Status Bar
        ])
        .split(frame.area());

    render_header(frame, root_layout[0], app);
    render_content(frame, root_layout[1], app);
    render_status_bar(frame, root_layout[2], app);

    // Overlay rendered last so it appears on top
    if app.screen == Screen::Help {
        render_help(frame, frame.area());
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// HEADER
// ═══════════════════════════════════════════════════════════════════════════

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();

    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(t.ink_light))
        .style(t.bg());

    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    // Left: Brand
    let brand = Line::from(vec![
        Span::raw(" "),
        Span::styled(icons::RECEIPT, Style::default().fg(t.brass)),
        Span::raw(" "),
        Span::styled("TIPP", t.title()),
        Span::styled(
            "ME",
            Style::default()
                .fg(t.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(brand).alignment(Alignment::Left), layout[0]);

    // Right: Selected currency
    let currency = app.form.currency();
    let currency_value = format!("{} ({}) ", currency.code(), currency.symbol());
    let currency_line = InlineStat::new("Currency:", &currency_value)
        .value_color(t.brass)
        .to_line();
    frame.render_widget(
        Paragraph::new(currency_line).alignment(Alignment::Right),
        layout[1],
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// MAIN CONTENT
// ═══════════════════════════════════════════════════════════════════════════

fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    // Center a fixed-width column so the form keeps its shape on wide
    // terminals.
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(68),
            Constraint::Min(1),
        ])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(13), // Form panel
            Constraint::Length(6),  // Totals
            Constraint::Min(0),
        ])
        .split(columns[1]);

    render_form_panel(frame, rows[0], app);
    render_totals(frame, rows[1], app);
}

fn render_form_panel(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();

    let block = Block::default()
        .title(" New Calculation ")
        .title_alignment(Alignment::Center)
        .title_style(t.title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(t.border_inactive())
        .style(t.bg())
        .padding(Padding::new(2, 2, 1, 0));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Currency
            Constraint::Length(2), // Bill
            Constraint::Length(2), // Percentage slider
            Constraint::Length(2), // Custom tip
            Constraint::Length(1), // Confirm
            Constraint::Min(0),
        ])
        .split(inner);

    render_currency_row(frame, chunks[0], app, t);
    render_text_row(frame, chunks[1], app, t, Control::Bill);
    render_percentage_row(frame, chunks[2], app, t);
    render_text_row(frame, chunks[3], app, t, Control::CustomTip);
    render_confirm_row(frame, chunks[4], app, t);
}

fn row_prefix(app: &App, control: Control, t: &Theme) -> Vec<Span<'static>> {
    let is_active = app.focus == control;
    let indicator = if is_active { icons::ARROW_RIGHT } else { " " };
    let indicator_style = if is_active {
        Style::default().fg(t.brass)
    } else {
        Style::default()
    };
    let label = match control {
        Control::Currency => "Currency",
        Control::Bill => "Bill amount",
        Control::Percentage => "Tip percentage",
        Control::CustomTip => "Custom tip",
        Control::Confirm => "",
    };
    let label_style = if is_active {
        Style::default().fg(t.brass).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(t.text_muted)
    };
    let label_text = if label.is_empty() {
        String::new()
    } else {
        format!("{}:", label)
    };
    vec![
        Span::styled(format!("{} ", indicator), indicator_style),
        Span::styled(
            format!("{:<width$}", label_text, width = LABEL_WIDTH),
            label_style,
        ),
    ]
}

fn render_currency_row(frame: &mut Frame, area: Rect, app: &App, t: &Theme) {
    let is_active = app.focus == Control::Currency;
    let currency = app.form.currency();

    let arrow_style = if is_active {
        t.accent_style()
    } else {
        Style::default().fg(t.ink_light)
    };

    let mut spans = row_prefix(app, Control::Currency, t);
    spans.extend([
        Span::styled(icons::PICK_LEFT, arrow_style),
        Span::styled(
            format!(" {} ", currency.code()),
            Style::default()
                .fg(t.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(icons::PICK_RIGHT, arrow_style),
        Span::styled(
            format!("  {}", currency.symbol()),
            Style::default().fg(t.brass),
        ),
    ]);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_text_row(frame: &mut Frame, area: Rect, app: &App, t: &Theme, control: Control) {
    let is_active = app.focus == control;
    let (stored, enabled) = match control {
        Control::Bill => (app.form.bill_input(), true),
        Control::CustomTip => (app.form.custom_tip_input(), app.form.custom_tip_enabled()),
        _ => ("", true),
    };

    let mut spans = row_prefix(app, control, t);

    if !enabled {
        spans.push(Span::styled(
            format!("{} locked while the slider is set", icons::LOCK),
            t.disabled(),
        ));
    } else if is_active {
        // Live editing buffer with a cursor mark
        spans.push(Span::styled(
            format!("{}▏", app.input.value()),
            Style::default().fg(t.brass).add_modifier(Modifier::BOLD),
        ));
    } else if stored.is_empty() {
        spans.push(Span::styled("(empty)", t.disabled()));
    } else {
        spans.push(Span::styled(
            stored.to_string(),
            Style::default().fg(t.text_primary),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if is_active && enabled {
        let cursor_x = area.x + 2 + LABEL_WIDTH as u16 + app.input.visual_cursor() as u16;
        frame.set_cursor_position((cursor_x, area.y));
    }
}

fn render_percentage_row(frame: &mut Frame, area: Rect, app: &App, t: &Theme) {
    let pct = app.form.percentage();
    let enabled = app.form.percentage_enabled();

    let mut spans = row_prefix(app, Control::Percentage, t);

    if !enabled {
        spans.push(Span::styled(
            format!("{} locked while a custom tip is set", icons::LOCK),
            t.disabled(),
        ));
    } else {
        let filled = (pct / PERCENTAGE_STEP) as usize;
        let track = format!(
            "{}{}",
            icons::SLIDER_FULL.repeat(filled),
            icons::SLIDER_EMPTY.repeat(SLIDER_CELLS - filled)
        );
        let track_style = if app.focus == Control::Percentage {
            Style::default().fg(t.brass)
        } else {
            Style::default().fg(t.text_muted)
        };
        spans.extend([
            Span::styled(track, track_style),
            Span::styled(
                format!(" {:>3}%", pct),
                Style::default()
                    .fg(t.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_confirm_row(frame: &mut Frame, area: Rect, app: &App, t: &Theme) {
    let is_active = app.focus == Control::Confirm;
    let enabled = app.form.can_confirm();

    let button_style = if enabled && is_active {
        Style::default()
            .fg(t.ink)
            .bg(t.teal)
            .add_modifier(Modifier::BOLD)
    } else if enabled {
        Style::default().fg(t.teal).add_modifier(Modifier::BOLD)
    } else {
        t.disabled()
    };

    let label = if enabled {
        format!(" {} Confirm Total ", icons::CHECK)
    } else {
        format!(" {} Confirm Total (enter a bill amount) ", icons::CROSS)
    };

    let mut spans = row_prefix(app, Control::Confirm, t);
    spans.push(Span::styled(label, button_style));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ═══════════════════════════════════════════════════════════════════════════
// TOTALS
// ═══════════════════════════════════════════════════════════════════════════

fn render_totals(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let tally = app.form.tally();
    let source = match tally.mode {
        TipMode::Percentage(pct) => format!("{}% of the bill", pct),
        TipMode::CustomAmount(_) => "custom tip amount".to_string(),
    };

    StatCard::new("TOTAL WITH TIP", &tally.format_total())
        .value_color(t.teal)
        .subtitle(&source)
        .highlighted(true)
        .render(frame, cards[0]);

    let confirmed = app.form.confirmed_total();
    let confirmed_color = if confirmed > Decimal::ZERO {
        t.text_primary
    } else {
        t.text_muted
    };
    StatCard::new(
        "LAST CONFIRMED",
        &app.form.currency().format_amount(confirmed),
    )
    .value_color(confirmed_color)
    .subtitle("snapshot taken at confirm")
    .render(frame, cards[1]);
}

// ═══════════════════════════════════════════════════════════════════════════
// STATUS BAR
// ═══════════════════════════════════════════════════════════════════════════

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();

    let mode = match app.screen {
        Screen::Form => "TIP FORM",
        Screen::Help => "HELP",
    };

    // Status badge
    let status = if let Some((msg, kind)) = &app.message {
        let color = match kind {
            MessageType::Error => t.error,
            MessageType::Success => t.success,
            MessageType::Warning => t.warning,
            MessageType::Info => t.accent,
        };
        Span::styled(format!(" {} ", msg), Style::default().bg(color).fg(t.ink))
    } else {
        Span::styled(
            format!(" {} ", mode),
            Style::default().bg(t.ink_light).fg(t.text_muted),
        )
    };

    // Keys hint
    let keys = Span::styled(
        " [Tab/↑↓] Move  [←→] Adjust  [Enter] Next/Confirm  [C] Currency  [?] Help  [Q] Quit ",
        Style::default().fg(t.text_muted),
    );

    let bar = Line::from(vec![status, Span::raw(" "), keys]);

    frame.render_widget(Paragraph::new(bar).style(t.bg()), area);
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP OVERLAY
// ═══════════════════════════════════════════════════════════════════════════

fn render_help(frame: &mut Frame, area: Rect) {
    let t = theme();

    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .title_style(t.title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(t.border_active())
        .style(t.bg());

    let section = |label: &'static str| {
        Line::from(Span::styled(
            label,
            Style::default()
                .fg(t.brass)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ))
    };
    let entry = |key: &'static str, text: &'static str| {
        Line::from(vec![Span::styled(key, t.accent_style()), Span::raw(text)])
    };

    let help_text = vec![
        Line::from(""),
        section("NAVIGATION"),
        Line::from(""),
        entry("  Tab / ↓ / j ", "Next control"),
        entry("  S-Tab / ↑ / k ", "Previous control"),
        entry("  Enter      ", "Next control, or confirm on the button"),
        Line::from(""),
        section("CONTROLS"),
        Line::from(""),
        entry("  ← / →      ", "Cycle currency or move the slider (5% steps)"),
        entry("  0-9 and .  ", "Type into the bill or custom tip field"),
        entry("  c          ", "Quick-cycle the currency"),
        Line::from(""),
        section("RULES"),
        Line::from(""),
        entry("  ", "A custom tip overrides the slider; each locks the"),
        entry("  ", "other until cleared. Anything unparsable counts as 0."),
        entry("  ", "Confirm snapshots the total and resets the form;"),
        entry("  ", "the currency selection is kept."),
        Line::from(""),
        entry("  q / Ctrl-C ", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press [Esc] to close",
            Style::default()
                .fg(t.text_muted)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}

// ═══════════════════════════════════════════════════════════════════════════
// UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Helper to center a rect within a parent.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
#[path = "ui_tests.rs"]
mod ui_tests;
