use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};

use crate::types::TipError;

/// Currencies the calculator can display totals in.
///
/// Only the symbol changes with the selection; amounts are never converted
/// between currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Try,
}

impl Currency {
    /// ISO 4217 code, as shown in the picker.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Try => "TRY",
        }
    }

    /// Symbol prefixed to formatted amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Try => "₺",
            Currency::Usd => "$",
        }
    }

    /// Formats an amount as `<symbol><value to 2 decimals>`.
    pub fn format_amount(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{}{:.2}", self.symbol(), rounded)
    }

    /// The next currency in picker order, wrapping around.
    pub fn next(self) -> Self {
        let all: Vec<Currency> = Currency::iter().collect();
        let pos = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(pos + 1) % all.len()]
    }

    /// The previous currency in picker order, wrapping around.
    pub fn prev(self) -> Self {
        let all: Vec<Currency> = Currency::iter().collect();
        let pos = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(pos + all.len() - 1) % all.len()]
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = TipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "TRY" => Ok(Currency::Try),
            _ => Err(TipError::UnknownCurrency(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_symbols() {
        assert_eq!(Currency::Eur.symbol(), "€");
        assert_eq!(Currency::Try.symbol(), "₺");
        assert_eq!(Currency::Usd.symbol(), "$");
        // The dollar is the fallback: it is what a fresh form displays.
        assert_eq!(Currency::default().symbol(), "$");
    }

    #[test]
    fn test_format_amount_two_decimals() {
        assert_eq!(Currency::Usd.format_amount(dec!(60)), "$60.00");
        assert_eq!(Currency::Eur.format_amount(dec!(65)), "€65.00");
        assert_eq!(Currency::Try.format_amount(dec!(12.5)), "₺12.50");
        // Midpoint rounds away from zero.
        assert_eq!(Currency::Usd.format_amount(dec!(10.005)), "$10.01");
    }

    #[test]
    fn test_from_str_codes() {
        assert_eq!("USD".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::Eur);
        assert_eq!("Try".parse::<Currency>().unwrap(), Currency::Try);

        let err = "GBP".parse::<Currency>().unwrap_err();
        assert_eq!(err, TipError::UnknownCurrency("GBP".to_string()));
    }

    #[test]
    fn test_picker_cycling_wraps() {
        assert_eq!(Currency::Usd.next(), Currency::Eur);
        assert_eq!(Currency::Eur.next(), Currency::Try);
        assert_eq!(Currency::Try.next(), Currency::Usd);
        assert_eq!(Currency::Usd.prev(), Currency::Try);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Currency::Try).unwrap();
        assert_eq!(json, "\"TRY\"");
        let back: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Currency::Try);
    }
}
