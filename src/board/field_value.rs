use std::fmt;

/// A value a sudoku cell can hold, including the placeholder for an empty cell.
///
/// The discriminant is the index of the value. [`FieldValue::Unset`] sits at index 0,
/// the digits `1..=9` at the index equal to their number.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum FieldValue {
    /// Placeholder for a cell without a digit. Never a member of a [`ValueSet`](crate::ValueSet).
    Unset = 0,
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
}

impl FieldValue {
    /// All values in index order, starting with [`FieldValue::Unset`].
    pub const ALL: [FieldValue; 10] = [
        FieldValue::Unset,
        FieldValue::One,
        FieldValue::Two,
        FieldValue::Three,
        FieldValue::Four,
        FieldValue::Five,
        FieldValue::Six,
        FieldValue::Seven,
        FieldValue::Eight,
        FieldValue::Nine,
    ];

    /// The nine digits in ascending order.
    pub const DIGITS: [FieldValue; 9] = [
        FieldValue::One,
        FieldValue::Two,
        FieldValue::Three,
        FieldValue::Four,
        FieldValue::Five,
        FieldValue::Six,
        FieldValue::Seven,
        FieldValue::Eight,
        FieldValue::Nine,
    ];

    /// Constructs the value with the given index. Returns `None` for indices above 9.
    #[inline]
    pub fn from_index(idx: u8) -> Option<Self> {
        Self::ALL.get(idx as usize).copied()
    }

    /// Constructs the digit with the given number. Returns `None`, if `num` is not in `1..=9`.
    #[inline]
    pub fn from_number(num: u8) -> Option<Self> {
        match num {
            1..=9 => Self::from_index(num),
            _ => None,
        }
    }

    /// Returns an iterator over the digits `One..=Nine`.
    pub fn digits() -> impl Iterator<Item = Self> {
        (1..10).filter_map(Self::from_index)
    }

    /// Returns the index of this value. `Unset` is 0, digits are `1..=9`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the number displayed for this value. Equal to the index, so `Unset` yields 0.
    #[inline]
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Returns the value with the next higher index, or `None` for [`FieldValue::Nine`].
    #[inline]
    pub fn next(self) -> Option<Self> {
        Self::from_index(self as u8 + 1)
    }

    /// Checks whether this is the placeholder for an empty cell.
    #[inline]
    pub fn is_unset(self) -> bool {
        self == FieldValue::Unset
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FieldValue::Unset => f.write_str("_"),
            value => write!(f, "{}", value.number()),
        }
    }
}
