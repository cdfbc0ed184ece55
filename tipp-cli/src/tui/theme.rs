//! Theme for the Tipp terminal UI.
//!
//! A centralized theme with a brass/teal palette on a dark ink background,
//! shared by every widget so the form reads as one surface.

use ratatui::style::{Color, Modifier, Style};

/// The main theme struct containing all colors and pre-computed styles.
#[derive(Debug, Clone)]
pub struct Theme {
    // Primary brand colors
    /// Brass - primary accent, the "tip jar" color
    pub brass: Color,
    /// Teal - confirmed totals and positive feedback
    pub teal: Color,
    /// Dark ink - main background
    pub ink: Color,
    /// Lighter ink - panel/card backgrounds
    pub ink_light: Color,

    // Semantic colors
    /// Primary text color (near-white)
    pub text_primary: Color,
    /// Muted/secondary text color
    pub text_muted: Color,
    /// Error color (red)
    pub error: Color,
    /// Warning color (brass)
    pub warning: Color,
    /// Success color (teal)
    pub success: Color,
    /// Accent color (cyan)
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            brass: Color::Rgb(217, 164, 65),
            teal: Color::Rgb(45, 212, 191),
            ink: Color::Rgb(17, 24, 39),
            ink_light: Color::Rgb(31, 41, 55),
            text_primary: Color::Rgb(249, 250, 251),
            text_muted: Color::Rgb(156, 163, 175),
            error: Color::Rgb(239, 68, 68),
            warning: Color::Rgb(217, 164, 65),
            success: Color::Rgb(45, 212, 191),
            accent: Color::Cyan,
        }
    }
}

#[allow(dead_code)]
impl Theme {
    /// Creates a new theme with default colors.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────
    // Pre-computed Styles
    // ─────────────────────────────────────────────────────────────

    /// Title style - bold brass text
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.brass)
            .add_modifier(Modifier::BOLD)
    }

    /// Subtitle/label style - muted text
    pub fn subtitle(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Primary text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Highlighted/selected item style
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.ink)
            .bg(self.brass)
            .add_modifier(Modifier::BOLD)
    }

    /// Active border style
    pub fn border_active(&self) -> Style {
        Style::default().fg(self.brass)
    }

    /// Inactive border style
    pub fn border_inactive(&self) -> Style {
        Style::default().fg(self.ink_light)
    }

    /// Style for a control locked out by the exclusivity rule
    pub fn disabled(&self) -> Style {
        Style::default()
            .fg(self.text_muted)
            .add_modifier(Modifier::DIM | Modifier::ITALIC)
    }

    /// Success style - teal text
    pub fn success_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Error style - red text
    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.error)
            .add_modifier(Modifier::BOLD)
    }

    /// Warning style - brass text
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Accent style - cyan text
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Background style for main area
    pub fn bg(&self) -> Style {
        Style::default().bg(self.ink)
    }

    /// Background style for panels/cards
    pub fn bg_panel(&self) -> Style {
        Style::default().bg(self.ink_light)
    }

    /// Value display style - bold primary text
    pub fn value(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Positive value style - bold teal
    pub fn value_positive(&self) -> Style {
        Style::default()
            .fg(self.teal)
            .add_modifier(Modifier::BOLD)
    }
}

/// Global theme instance for convenience.
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Convenience function to get the default theme.
pub fn theme() -> &'static Theme {
    &THEME
}

// ─────────────────────────────────────────────────────────────────────
// Unicode Icons
// ─────────────────────────────────────────────────────────────────────

/// Icons used throughout the TUI
#[allow(dead_code)]
pub mod icons {
    pub const RECEIPT: &str = "🧾";
    pub const CASH: &str = "💵";
    pub const HELP: &str = "❓";
    pub const CHECK: &str = "✓";
    pub const CROSS: &str = "✗";
    pub const LOCK: &str = "🔒";
    pub const BULLET: &str = "•";
    pub const ARROW_RIGHT: &str = "➜";
    pub const SEPARATOR: &str = "│";

    // Currency picker arrows
    pub const PICK_LEFT: &str = "◀";
    pub const PICK_RIGHT: &str = "▶";

    // Slider track characters
    pub const SLIDER_FULL: &str = "█";
    pub const SLIDER_EMPTY: &str = "░";
}
