use ratatui::{backend::TestBackend, Terminal};

use crate::tui::app::{App, Control, Screen};
use crate::tui::ui::ui;
use tipp::prelude::*;

/// Flattens the rendered buffer into a string for substring checks.
fn render_to_text(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_render_fresh_form() {
    let app = App::new(Currency::Usd);
    let text = render_to_text(&app, 100, 30);

    assert!(text.contains("TIPPME"), "header should carry the brand");
    assert!(text.contains("New Calculation"));
    // Empty form: total and confirmed snapshot both read zero dollars.
    assert!(text.contains("$0.00"));
    assert!(text.contains("TOTAL WITH TIP"));
    assert!(text.contains("LAST CONFIRMED"));
}

#[test]
fn test_render_percentage_total() {
    let mut app = App::new(Currency::Usd);
    app.form.set_bill_input("50");
    app.form.set_percentage(20);

    let text = render_to_text(&app, 100, 30);
    assert!(text.contains("$60.00"), "live total should be rendered");
    assert!(text.contains("20% of the bill"));
}

#[test]
fn test_render_custom_tip_total_in_eur() {
    let mut app = App::new(Currency::Eur);
    app.form.set_bill_input("50");
    app.form.set_percentage(20);
    app.form.set_custom_tip_input("15");

    let text = render_to_text(&app, 100, 30);
    assert!(text.contains("€65.00"), "custom tip should win");
    assert!(text.contains("custom tip amount"));
    // The slider is locked out while the custom tip is set.
    assert!(text.contains("locked while a custom tip is set"));
}

#[test]
fn test_render_disabled_confirm_hint() {
    let app = App::new(Currency::Usd);
    let text = render_to_text(&app, 100, 30);
    assert!(text.contains("enter a bill amount"));
}

#[test]
fn test_render_custom_tip_locked_by_slider() {
    let mut app = App::new(Currency::Usd);
    app.form.set_percentage(10);
    app.focus = Control::CustomTip;

    let text = render_to_text(&app, 100, 30);
    assert!(text.contains("locked while the slider is set"));
}

#[test]
fn test_render_help_overlay() {
    let mut app = App::new(Currency::Usd);
    app.screen = Screen::Help;

    let text = render_to_text(&app, 100, 30);
    assert!(text.contains("NAVIGATION"));
    assert!(text.contains("RULES"));
}

#[test]
fn test_render_survives_tiny_terminal() {
    let mut app = App::new(Currency::Try);
    app.form.set_bill_input("80");
    // Should not panic even when the layout has no room to breathe.
    let _ = render_to_text(&app, 20, 6);
}
