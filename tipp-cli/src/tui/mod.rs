//! # TUI Module
//!
//! Full-screen terminal user interface for the tip calculator.
//!
//! One form screen with four inputs (currency, bill, percentage slider,
//! custom tip) and two outputs (live total, last confirmed total), plus a
//! help overlay. Built with ratatui.

pub mod app;
pub mod components;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use event::handle_events;
pub use ui::ui;
