pub mod currency;
pub mod form;
pub mod input;
pub mod prelude;
pub mod types;

pub use currency::Currency;
pub use form::{TipForm, TipMode, PERCENTAGE_MAX, PERCENTAGE_STEP};
pub use input::{parse_amount, sanitize_numeric_input};
pub use types::{TipError, TipTally};
