//! Component widgets for the TUI.
//!
//! Reusable pieces for the calculator screen: the stat cards that show the
//! live and confirmed totals.

pub mod stat_card;

#[allow(unused_imports)]
pub use stat_card::{InlineStat, StatCard};
