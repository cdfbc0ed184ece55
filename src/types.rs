use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::form::TipMode;

/// A snapshot of one tip calculation, ready for display.
///
/// Derived from the live form state on demand; holds the parsed figures so
/// the presentation layer never re-parses text. `total` is always
/// `bill + tip`, with `tip` already resolved through the active
/// [`TipMode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipTally {
    /// The pre-tip charge, parsed from the bill field (zero when empty).
    pub bill: Decimal,
    /// The tip portion, after resolving percentage vs. custom amount.
    pub tip: Decimal,
    /// Grand total: `bill + tip`.
    pub total: Decimal,
    /// Which input produced `tip`.
    pub mode: TipMode,
    /// Currency the amounts are displayed in.
    pub currency: Currency,
}

impl TipTally {
    /// The total formatted as `<symbol><value to 2 decimals>`.
    pub fn format_total(&self) -> String {
        self.currency.format_amount(self.total)
    }

    /// The bill formatted with the selected currency symbol.
    pub fn format_bill(&self) -> String {
        self.currency.format_amount(self.bill)
    }

    /// The tip portion formatted with the selected currency symbol.
    pub fn format_tip(&self) -> String {
        self.currency.format_amount(self.tip)
    }

    /// One-line breakdown of how the total was reached.
    ///
    /// Format: `Bill {bill} + tip {tip} ({source}) = {total}`
    pub fn summary(&self) -> String {
        let source = match self.mode {
            TipMode::Percentage(pct) => format!("{}%", pct),
            TipMode::CustomAmount(_) => "custom".to_string(),
        };
        format!(
            "Bill {} + tip {} ({}) = {}",
            self.format_bill(),
            self.format_tip(),
            source,
            self.format_total()
        )
    }
}

impl std::fmt::Display for TipTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())
    }
}

/// The only failure this library can report.
///
/// Amount parsing never errors (empty or unparsable text falls back to
/// zero), so the error surface is limited to the currency boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TipError {
    /// A currency code outside {USD, EUR, TRY} was supplied.
    #[error("unsupported currency code: {0}")]
    UnknownCurrency(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_summary_percentage_mode() {
        let tally = TipTally {
            bill: dec!(50),
            tip: dec!(10),
            total: dec!(60),
            mode: TipMode::Percentage(20),
            currency: Currency::Usd,
        };
        assert_eq!(tally.format_total(), "$60.00");
        assert_eq!(tally.summary(), "Bill $50.00 + tip $10.00 (20%) = $60.00");
    }

    #[test]
    fn test_summary_custom_mode() {
        let tally = TipTally {
            bill: dec!(50),
            tip: dec!(15),
            total: dec!(65),
            mode: TipMode::CustomAmount(dec!(15)),
            currency: Currency::Eur,
        };
        assert_eq!(tally.format_total(), "€65.00");
        assert_eq!(tally.summary(), "Bill €50.00 + tip €15.00 (custom) = €65.00");
    }

    #[test]
    fn test_error_display() {
        let err = TipError::UnknownCurrency("GBP".to_string());
        assert_eq!(err.to_string(), "unsupported currency code: GBP");
    }
}
