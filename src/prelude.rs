//! Prelude module for Tipp
//!
//! Re-exports the commonly used types and helpers so callers can pull the
//! whole calculator surface in with one import.
//!
//! # Usage
//!
//! ```rust
//! use tipp::prelude::*;
//! ```

pub use crate::currency::Currency;
pub use crate::form::{TipForm, TipMode, PERCENTAGE_MAX, PERCENTAGE_STEP};
pub use crate::input::{parse_amount, sanitize_numeric_input};
pub use crate::types::{TipError, TipTally};
