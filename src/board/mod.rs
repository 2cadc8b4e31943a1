//! The values a sudoku cell can hold
mod field_value;

pub use self::field_value::FieldValue;
