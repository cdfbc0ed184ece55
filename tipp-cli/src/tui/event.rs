//! Event handling for keyboard input using crossterm.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;
use tui_input::backend::crossterm::EventHandler;

use crate::tui::app::{App, Control, Screen};

/// Poll for events and handle them.
/// Returns Ok(true) if the app should quit.
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // Poll with a small timeout so the UI stays responsive
    if event::poll(Duration::from_millis(100))?
        && let Event::Key(key) = event::read()?
    {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        handle_key(app, key);

        if !app.running {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Route a single key press. Split from the poll loop so tests can drive
/// the app without a terminal.
pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return;
    }

    // Any key press clears a lingering status message
    if key.code != KeyCode::Enter {
        app.message = None;
    }

    match app.screen {
        Screen::Help => handle_help(app, key.code),
        Screen::Form => handle_form(app, key),
    }
}

/// Handle the help overlay
fn handle_help(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.screen = Screen::Form;
        }
        _ => {}
    }
}

/// Handle the form screen
fn handle_form(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        // Inside a text field, left/right move the cursor; elsewhere they
        // drive the focused picker or slider.
        KeyCode::Left | KeyCode::Right if app.editing_text() => {
            app.input.handle_event(&Event::Key(key));
        }
        KeyCode::Left => app.adjust(false),
        KeyCode::Right => app.adjust(true),
        KeyCode::Enter => {
            if app.focus == Control::Confirm {
                app.confirm();
            } else {
                app.focus_next();
            }
        }
        KeyCode::Char('?') => app.screen = Screen::Help,
        KeyCode::Esc => {}
        _ => {
            if app.editing_text() {
                // Feed the keystroke to the input widget, then sanitise and
                // store the result. Non-numeric characters vanish here.
                app.input.handle_event(&Event::Key(key));
                app.apply_input();
            } else if let KeyCode::Char(ch) = key.code {
                match ch {
                    'q' => app.running = false,
                    'c' => app.cycle_currency(),
                    'j' => app.focus_next(),
                    'k' => app.focus_prev(),
                    _ => {
                        if app.focus == Control::CustomTip {
                            app.warn_custom_tip_locked();
                        }
                    }
                }
            }
        }
    }
}
