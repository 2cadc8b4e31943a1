//! Fixed-size bitset over field values
//!
//! Cells track the digits they may still take and units (rows, columns, blocks) track
//! the digits already placed in them. Both are small enough that a single integer with
//! one bit per [`FieldValue`] suffices: bit `i` stands for the value with index `i`.
//! Bit 0 belongs to [`FieldValue::Unset`] and is never written.

use crate::board::FieldValue;
use crate::errors::{EmptySetError, UnsetValueError};
use rand::Rng;
use std::fmt;

/// Mask with the bits of the nine digits set, bit 0 clear.
pub const ALL_DIGITS_MASK: u16 = 0b11_1111_1110;

/// Set of field values, stored as one bit per value.
///
/// Plain `Copy` type. Search branches that need independent state take their own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValueSet(u16);

/// Iterator over the values contained in a [`ValueSet`], in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iter(u16);

impl ValueSet {
    /// Constructs an empty set.
    pub const fn new() -> Self {
        ValueSet(0)
    }

    /// Return the raw integer backing the set.
    pub fn bits(self) -> u16 {
        self.0
    }

    #[inline(always)]
    fn bit(value: FieldValue) -> u16 {
        1 << value.index()
    }

    /// Checks whether `value` is present. Always `false` for [`FieldValue::Unset`].
    #[inline]
    pub fn get(&self, value: FieldValue) -> bool {
        self.0 & Self::bit(value) != 0
    }

    /// Same as [`ValueSet::get`].
    #[inline]
    pub fn contains(&self, value: FieldValue) -> bool {
        self.get(value)
    }

    /// Adds `value` if `present` is true, removes it otherwise.
    ///
    /// [`FieldValue::Unset`] is rejected and the set stays untouched.
    pub fn set(&mut self, value: FieldValue, present: bool) -> Result<(), UnsetValueError> {
        if value.is_unset() {
            log::trace!("rejected write of the unset placeholder (present = {})", present);
            return Err(UnsetValueError);
        }
        if present {
            self.0 |= Self::bit(value);
        } else {
            self.0 &= !Self::bit(value);
        }
        Ok(())
    }

    /// Checks whether all nine digits are present.
    #[inline]
    pub fn has_all(&self) -> bool {
        self.0 & ALL_DIGITS_MASK == ALL_DIGITS_MASK
    }

    /// Checks whether exactly one bit is set.
    ///
    /// Looks at the whole mask, bit 0 included. Since bit 0 can't be written,
    /// this is the same as "exactly one digit is present".
    #[inline]
    pub fn has_exactly_one(&self) -> bool {
        self.0 != 0 && self.0 & (self.0 - 1) == 0
    }

    /// Checks whether no digit is present.
    #[inline]
    pub fn has_none(&self) -> bool {
        self.0 & ALL_DIGITS_MASK == 0
    }

    /// Returns the smallest digit present.
    /// If no digit is present, it returns `Err(EmptySetError)`.
    pub fn first(&self) -> Result<FieldValue, EmptySetError> {
        match self.iter().next() {
            Some(value) => Ok(value),
            None => {
                log::trace!("first() called on an empty value set");
                Err(EmptySetError)
            }
        }
    }

    /// Removes all values.
    pub fn reset(&mut self) {
        self.0 = 0;
    }

    /// Returns the number of digits present.
    pub fn len(&self) -> u8 {
        (self.0 & ALL_DIGITS_MASK).count_ones() as u8
    }

    /// Same as [`ValueSet::has_none`].
    pub fn is_empty(&self) -> bool {
        self.has_none()
    }

    /// Returns an iterator over the present digits, smallest first.
    pub fn iter(&self) -> Iter {
        Iter(self.0 & ALL_DIGITS_MASK)
    }

    /// Returns one of the present digits, chosen uniformly at random.
    /// Returns `None` if the set is empty.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<FieldValue> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let choice = rng.gen_range(0..len);
        self.iter().nth(choice as usize)
    }
}

impl IntoIterator for ValueSet {
    type Item = FieldValue;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a ValueSet {
    type Item = FieldValue;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Iterator for Iter {
    type Item = FieldValue;

    fn next(&mut self) -> Option<Self::Item> {
        debug_assert!(self.0 & !ALL_DIGITS_MASK == 0, "{:b}", self.0);
        if self.0 == 0 {
            return None;
        }
        let lowest_bit = self.0 & (!self.0 + 1);
        let bit_pos = lowest_bit.trailing_zeros() as u8;
        self.0 ^= lowest_bit;
        FieldValue::from_index(bit_pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

///////////////////////////////////////////////////////////////////////////////////////////////

// "[3, 4, 7]", empty set is "[]"
impl fmt::Display for ValueSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (n, value) in self.iter().enumerate() {
            if n != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value.number())?;
        }
        f.write_str("]")
    }
}

impl fmt::Binary for ValueSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:b}", self.0)
    }
}
