use rust_decimal_macros::dec;
use tipp::prelude::*;

#[test]
fn test_percentage_scenario_usd() {
    let mut form = TipForm::new();
    form.set_bill_input("50");
    form.set_percentage(20);

    assert_eq!(form.total(), dec!(60));
    assert_eq!(form.tally().format_total(), "$60.00");
}

#[test]
fn test_custom_tip_overrides_percentage_eur() {
    let mut form = TipForm::new().with_currency(Currency::Eur);
    form.set_bill_input("50");
    form.set_percentage(20);
    form.set_custom_tip_input("15");

    // The flat tip wins regardless of where the slider sits.
    assert_eq!(form.total(), dec!(65));
    assert_eq!(form.tally().format_total(), "€65.00");
    assert_eq!(form.tip_mode(), TipMode::CustomAmount(dec!(15)));
}

#[test]
fn test_empty_bill_disables_confirm_and_computes_as_zero() {
    let mut form = TipForm::new();
    form.set_percentage(20);
    form.set_custom_tip_input("");

    assert!(!form.can_confirm());
    assert_eq!(form.total(), dec!(0));
    assert_eq!(form.confirm(), None);
}

#[test]
fn test_confirm_then_reuse() {
    let mut form = TipForm::new();
    form.set_bill_input("100");
    form.set_percentage(10);

    let confirmed = form.confirm();
    assert_eq!(confirmed, Some(dec!(110)));
    assert_eq!(form.confirmed_total(), dec!(110));

    // The form resets to defaults, currency aside, and is reusable at once.
    assert_eq!(form.bill_input(), "");
    assert_eq!(form.percentage(), 0);
    assert_eq!(form.custom_tip_input(), "");
    assert_eq!(form.currency(), Currency::Usd);

    form.set_bill_input("30");
    form.set_custom_tip_input("4.50");
    assert_eq!(form.confirm(), Some(dec!(34.50)));
}

#[test]
fn test_currency_switch_only_swaps_symbol() {
    let mut form = TipForm::new();
    form.set_bill_input("80");
    form.set_percentage(25);
    assert_eq!(form.tally().format_total(), "$100.00");

    form.set_currency(Currency::Try);
    // Same figures, different symbol; no exchange rate is applied.
    assert_eq!(form.total(), dec!(100));
    assert_eq!(form.tally().format_total(), "₺100.00");
}

#[test]
fn test_enablement_and_computation_stay_consistent() {
    let mut form = TipForm::new();
    form.set_bill_input("10");

    // While the slider is in use the custom field is locked out, and the
    // computation indeed runs in percentage mode.
    form.set_percentage(15);
    assert!(!form.custom_tip_enabled());
    assert!(matches!(form.tip_mode(), TipMode::Percentage(15)));

    // And the other way around.
    form.set_percentage(0);
    form.set_custom_tip_input("2");
    assert!(!form.percentage_enabled());
    assert!(matches!(form.tip_mode(), TipMode::CustomAmount(_)));

    // A stale slider value can never leak into a custom-mode total.
    assert_eq!(form.total(), dec!(12));
}

#[test]
fn test_keystroke_stream_sanitization() {
    // Simulates typing "12.3.4" one keystroke at a time, the way the
    // screen feeds the field: each event re-sanitises the whole text.
    let mut form = TipForm::new();
    for ch in "12.3.4".chars() {
        let typed = format!("{}{}", form.bill_input(), ch);
        form.set_bill_input(&typed);
    }
    assert_eq!(form.bill_input(), "12.34");
    assert_eq!(form.bill(), dec!(12.34));
}
