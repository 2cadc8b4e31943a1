#![warn(missing_docs)]
//! Sets of sudoku field values
//!
//! ## Overview
//!
//! A sudoku solver constantly asks the same questions about cells and units:
//! which digits are still possible here, which digits are already used there,
//! is there exactly one candidate left. This crate answers them with
//! [`ValueSet`], a bitmask with one bit per [`FieldValue`].
//!
//! ## Example
//!
//! ```
//! use fieldvalues::{FieldValue, ValueSet};
//!
//! // digits already placed in some row
//! let mut used = ValueSet::new();
//! for &value in &[FieldValue::Three, FieldValue::Seven, FieldValue::Four] {
//!     used.set(value, true).unwrap();
//! }
//!
//! assert_eq!(used.first(), Ok(FieldValue::Three));
//! assert_eq!(used.to_string(), "[3, 4, 7]");
//! assert!(!used.has_exactly_one());
//!
//! // the placeholder for empty cells has no slot in the set
//! assert!(used.set(FieldValue::Unset, true).is_err());
//!
//! used.reset();
//! assert!(used.has_none());
//! assert!(used.first().is_err());
//! ```
pub mod bitset;
pub mod board;
pub mod errors;

pub use crate::bitset::ValueSet;
pub use crate::board::FieldValue;
pub use crate::errors::{EmptySetError, UnsetValueError};
