//! Application state and focus management for the form screen.

use tipp::prelude::*;
use tui_input::Input;

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The one calculator form
    Form,
    /// Help overlay
    Help,
}

/// Form control currently holding focus, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    Currency,
    #[default]
    Bill,
    Percentage,
    CustomTip,
    Confirm,
}

impl Control {
    const ORDER: [Control; 5] = [
        Control::Currency,
        Control::Bill,
        Control::Percentage,
        Control::CustomTip,
        Control::Confirm,
    ];

    /// Next control in tab order, wrapping around.
    pub fn next(self) -> Self {
        let pos = Self::ORDER.iter().position(|c| *c == self).unwrap_or(0);
        Self::ORDER[(pos + 1) % Self::ORDER.len()]
    }

    /// Previous control in tab order, wrapping around.
    pub fn prev(self) -> Self {
        let pos = Self::ORDER.iter().position(|c| *c == self).unwrap_or(0);
        Self::ORDER[(pos + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Type of status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Warning,
    Error,
}

/// Main application state
pub struct App {
    /// Whether the app should keep running
    pub running: bool,
    /// Current screen being displayed
    pub screen: Screen,
    /// The calculator form itself
    pub form: TipForm,
    /// Control holding keyboard focus
    pub focus: Control,
    /// Text input widget state, shared by the two text fields
    pub input: Input,
    /// Status message to display
    pub message: Option<(String, MessageType)>,
}

impl App {
    /// Create a new App with an empty form pre-set to `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            running: true,
            screen: Screen::Form,
            form: TipForm::new().with_currency(currency),
            focus: Control::default(),
            input: Input::default(),
            message: None,
        }
    }

    /// Move focus to the next control.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.sync_input();
    }

    /// Move focus to the previous control.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.sync_input();
    }

    /// Pre-fill the shared text buffer with the focused field's stored
    /// text, so editing resumes where the field left off.
    pub fn sync_input(&mut self) {
        let value = match self.focus {
            Control::Bill => self.form.bill_input().to_string(),
            Control::CustomTip => self.form.custom_tip_input().to_string(),
            _ => String::new(),
        };
        self.input = Input::default().with_value(value);
    }

    /// Whether keystrokes currently flow into a text field.
    ///
    /// The custom tip field stops accepting text while the slider is in
    /// use; the enablement rule lives in the form, not here.
    pub fn editing_text(&self) -> bool {
        match self.focus {
            Control::Bill => true,
            Control::CustomTip => self.form.custom_tip_enabled(),
            _ => false,
        }
    }

    /// Store the (sanitised) text buffer into the focused field.
    ///
    /// Runs after every keystroke. The buffer itself is rewritten with the
    /// sanitised text so rejected characters never linger under the cursor.
    pub fn apply_input(&mut self) {
        let sanitized = sanitize_numeric_input(self.input.value(), true);
        if sanitized != self.input.value() {
            self.input = Input::new(sanitized.clone());
        }
        match self.focus {
            Control::Bill => self.form.set_bill_input(&sanitized),
            Control::CustomTip => self.form.set_custom_tip_input(&sanitized),
            _ => {}
        }
    }

    /// Adjust the focused control one step left (`false`) or right
    /// (`true`): cycles the currency picker or moves the slider.
    pub fn adjust(&mut self, up: bool) {
        match self.focus {
            Control::Currency => {
                let currency = if up {
                    self.form.currency().next()
                } else {
                    self.form.currency().prev()
                };
                self.form.set_currency(currency);
            }
            Control::Percentage => {
                if !self.form.percentage_enabled() {
                    self.message = Some((
                        "Slider locked: clear the custom tip to use it".to_string(),
                        MessageType::Warning,
                    ));
                } else if up {
                    self.form.step_percentage_up();
                } else {
                    self.form.step_percentage_down();
                }
            }
            _ => {}
        }
    }

    /// Quick action: cycle to the next currency from anywhere.
    pub fn cycle_currency(&mut self) {
        self.form.set_currency(self.form.currency().next());
    }

    /// Note that a keystroke hit the custom tip field while the slider
    /// holds it locked.
    pub fn warn_custom_tip_locked(&mut self) {
        self.message = Some((
            "Custom tip locked: set the slider back to 0% to use it".to_string(),
            MessageType::Warning,
        ));
    }

    /// Confirm the current total, if the bill field has content.
    pub fn confirm(&mut self) {
        if !self.form.can_confirm() {
            self.message = Some((
                "Enter a bill amount first".to_string(),
                MessageType::Warning,
            ));
            return;
        }
        if let Some(total) = self.form.confirm() {
            let formatted = self.form.currency().format_amount(total);
            tracing::debug!(total = %formatted, "total confirmed");
            self.message = Some((
                format!("✓ Total confirmed: {}", formatted),
                MessageType::Success,
            ));
            // The form reset emptied both text fields.
            self.sync_input();
        }
    }
}
