//! The tip form: all state the single calculator screen owns, and every
//! state transition the screen can trigger.
//!
//! The form stores the two amount fields as sanitised text, the way the
//! user typed them; numbers are derived on demand. The percentage slider
//! and the custom tip amount are mutually exclusive ways of producing the
//! tip, resolved through [`TipMode`] in exactly one place.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::input::{parse_amount, sanitize_numeric_input};
use crate::types::TipTally;

/// Upper bound of the percentage slider.
pub const PERCENTAGE_MAX: u8 = 100;

/// Step the percentage slider moves in.
pub const PERCENTAGE_STEP: u8 = 5;

/// How the tip portion of the total is being determined.
///
/// A positive custom amount always wins over the slider; a form can never
/// be in both modes at once, so the exclusivity the screen enforces with
/// disabled controls is also structural in the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipMode {
    /// Percentage of the bill, selected on the 0-100 slider.
    Percentage(u8),
    /// Flat tip amount entered directly, overriding the slider.
    CustomAmount(Decimal),
}

/// State of the calculator form. Created with defaults when the screen
/// opens; mutated in place by input events; reset (except for the selected
/// currency) when a total is confirmed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TipForm {
    bill_text: String,
    percentage: u8,
    custom_tip_text: String,
    currency: Currency,
    confirmed_total: Decimal,
}

impl TipForm {
    /// A fresh form: empty fields, 0% tip, USD, no confirmed total.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the starting currency, for pre-selecting it at launch.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    // ─────────────────────────────────────────────────────────────
    // Input events
    // ─────────────────────────────────────────────────────────────

    /// Replaces the bill field with the sanitised form of `raw`.
    ///
    /// Called on every change event; the stored text therefore only ever
    /// contains digits and at most one decimal point.
    pub fn set_bill_input(&mut self, raw: &str) {
        self.bill_text = sanitize_numeric_input(raw, true);
    }

    /// Replaces the custom tip field with the sanitised form of `raw`.
    pub fn set_custom_tip_input(&mut self, raw: &str) {
        self.custom_tip_text = sanitize_numeric_input(raw, true);
    }

    /// Sets the slider position, clamped to the 0-100 range.
    pub fn set_percentage(&mut self, percentage: u8) {
        self.percentage = percentage.min(PERCENTAGE_MAX);
    }

    /// Moves the slider one step up, saturating at 100.
    pub fn step_percentage_up(&mut self) {
        self.set_percentage(self.percentage.saturating_add(PERCENTAGE_STEP));
    }

    /// Moves the slider one step down, saturating at 0.
    pub fn step_percentage_down(&mut self) {
        self.set_percentage(self.percentage.saturating_sub(PERCENTAGE_STEP));
    }

    /// Changes the display currency. Amounts are not converted.
    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    // ─────────────────────────────────────────────────────────────
    // Raw state accessors
    // ─────────────────────────────────────────────────────────────

    pub fn bill_input(&self) -> &str {
        &self.bill_text
    }

    pub fn custom_tip_input(&self) -> &str {
        &self.custom_tip_text
    }

    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The total snapshotted at the last confirm; zero before the first.
    pub fn confirmed_total(&self) -> Decimal {
        self.confirmed_total
    }

    // ─────────────────────────────────────────────────────────────
    // Derived values
    // ─────────────────────────────────────────────────────────────

    /// The bill amount; empty or unparsable text counts as zero.
    pub fn bill(&self) -> Decimal {
        parse_amount(&self.bill_text)
    }

    /// The custom tip amount; empty or unparsable text counts as zero.
    pub fn custom_tip(&self) -> Decimal {
        parse_amount(&self.custom_tip_text)
    }

    /// Resolves which tip input is in effect.
    ///
    /// This is the single derivation point for the exclusivity rule: a
    /// custom tip parsing to a positive amount takes precedence over the
    /// slider, whatever the slider reads.
    pub fn tip_mode(&self) -> TipMode {
        let custom = self.custom_tip();
        if custom > Decimal::ZERO {
            TipMode::CustomAmount(custom)
        } else {
            TipMode::Percentage(self.percentage)
        }
    }

    /// The tip portion of the total.
    pub fn tip(&self) -> Decimal {
        match self.tip_mode() {
            TipMode::CustomAmount(amount) => amount,
            TipMode::Percentage(pct) => self.bill() * Decimal::from(pct) / dec!(100),
        }
    }

    /// The live total: `bill + tip`. Pure derivation, recomputed on every
    /// call rather than cached.
    pub fn total(&self) -> Decimal {
        self.bill() + self.tip()
    }

    /// A display snapshot of the current calculation.
    pub fn tally(&self) -> TipTally {
        TipTally {
            bill: self.bill(),
            tip: self.tip(),
            total: self.total(),
            mode: self.tip_mode(),
            currency: self.currency,
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Enablement policy
    // ─────────────────────────────────────────────────────────────

    /// The slider is usable only while the custom tip field is empty.
    pub fn percentage_enabled(&self) -> bool {
        self.custom_tip_text.is_empty()
    }

    /// The custom tip field is usable only while the slider reads 0.
    pub fn custom_tip_enabled(&self) -> bool {
        self.percentage == 0
    }

    /// Confirm is available once the bill field is non-empty.
    pub fn can_confirm(&self) -> bool {
        !self.bill_text.is_empty()
    }

    // ─────────────────────────────────────────────────────────────
    // Confirm
    // ─────────────────────────────────────────────────────────────

    /// Snapshots the current total and resets the form for the next
    /// calculation. The selected currency survives the reset.
    ///
    /// Returns `None` without touching the state when the bill field is
    /// empty; the screen keeps the control disabled in that case, so this
    /// is a guard, not an error.
    pub fn confirm(&mut self) -> Option<Decimal> {
        if !self.can_confirm() {
            return None;
        }
        let total = self.total();
        self.confirmed_total = total;
        self.bill_text.clear();
        self.percentage = 0;
        self.custom_tip_text.clear();
        Some(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = TipForm::new();
        assert_eq!(form.bill_input(), "");
        assert_eq!(form.percentage(), 0);
        assert_eq!(form.custom_tip_input(), "");
        assert_eq!(form.currency(), Currency::Usd);
        assert_eq!(form.confirmed_total(), Decimal::ZERO);
    }

    #[test]
    fn test_percentage_total() {
        let mut form = TipForm::new();
        form.set_bill_input("50");
        form.set_percentage(20);
        assert_eq!(form.tip(), dec!(10));
        assert_eq!(form.total(), dec!(60));
        assert_eq!(form.tip_mode(), TipMode::Percentage(20));
    }

    #[test]
    fn test_zero_percentage_total_is_bill() {
        let mut form = TipForm::new();
        form.set_bill_input("42.50");
        assert_eq!(form.total(), dec!(42.50));
    }

    #[test]
    fn test_custom_tip_takes_precedence() {
        let mut form = TipForm::new();
        form.set_bill_input("50");
        form.set_percentage(20);
        form.set_custom_tip_input("15");
        assert_eq!(form.tip_mode(), TipMode::CustomAmount(dec!(15)));
        assert_eq!(form.total(), dec!(65));
    }

    #[test]
    fn test_empty_bill_counts_as_zero() {
        let mut form = TipForm::new();
        form.set_percentage(25);
        assert_eq!(form.total(), Decimal::ZERO);
        form.set_custom_tip_input("5");
        assert_eq!(form.total(), dec!(5));
    }

    #[test]
    fn test_inputs_are_sanitized_eagerly() {
        let mut form = TipForm::new();
        form.set_bill_input("12.3.4");
        assert_eq!(form.bill_input(), "12.34");
        form.set_custom_tip_input("a5.b5");
        assert_eq!(form.custom_tip_input(), "5.5");
    }

    #[test]
    fn test_percentage_clamped_and_stepped() {
        let mut form = TipForm::new();
        form.set_percentage(250);
        assert_eq!(form.percentage(), 100);
        form.step_percentage_up();
        assert_eq!(form.percentage(), 100);
        form.set_percentage(0);
        form.step_percentage_down();
        assert_eq!(form.percentage(), 0);
        form.step_percentage_up();
        assert_eq!(form.percentage(), 5);
    }

    #[test]
    fn test_enablement_mirrors_tip_mode() {
        let mut form = TipForm::new();
        // Fresh form: both controls available, slider mode in effect.
        assert!(form.percentage_enabled());
        assert!(form.custom_tip_enabled());

        form.set_percentage(10);
        assert!(!form.custom_tip_enabled());
        assert!(matches!(form.tip_mode(), TipMode::Percentage(10)));

        form.set_percentage(0);
        form.set_custom_tip_input("3");
        assert!(!form.percentage_enabled());
        assert!(matches!(form.tip_mode(), TipMode::CustomAmount(_)));
    }

    #[test]
    fn test_confirm_requires_bill() {
        let mut form = TipForm::new();
        assert!(!form.can_confirm());
        assert_eq!(form.confirm(), None);
        assert_eq!(form.confirmed_total(), Decimal::ZERO);
    }

    #[test]
    fn test_confirm_snapshots_and_resets() {
        let mut form = TipForm::new().with_currency(Currency::Eur);
        form.set_bill_input("100");
        form.set_percentage(10);

        assert_eq!(form.confirm(), Some(dec!(110)));
        assert_eq!(form.confirmed_total(), dec!(110));
        assert_eq!(form.bill_input(), "");
        assert_eq!(form.percentage(), 0);
        assert_eq!(form.custom_tip_input(), "");
        // Currency survives the reset.
        assert_eq!(form.currency(), Currency::Eur);
        // The form is immediately reusable.
        form.set_bill_input("20");
        assert_eq!(form.confirm(), Some(dec!(20)));
    }

    #[test]
    fn test_tally_snapshot() {
        let mut form = TipForm::new().with_currency(Currency::Try);
        form.set_bill_input("80");
        form.set_percentage(15);
        let tally = form.tally();
        assert_eq!(tally.bill, dec!(80));
        assert_eq!(tally.tip, dec!(12));
        assert_eq!(tally.total, dec!(92));
        assert_eq!(tally.format_total(), "₺92.00");
    }
}
