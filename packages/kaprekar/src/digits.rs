use std::fmt;

use crate::bigint::BigInt;
use crate::error::{Error, Result};

/// Map a digit value to its display character: 0-9 -> '0'-'9', 10-35 -> 'A'-'Z'.
///
/// Returns None for values above 35.
///
/// # Example
///
/// ```
/// use kaprekar::digits::digit_to_char;
///
/// assert_eq!(digit_to_char(7), Some('7'));
/// assert_eq!(digit_to_char(10), Some('A'));
/// assert_eq!(digit_to_char(35), Some('Z'));
/// assert_eq!(digit_to_char(36), None);
/// ```
pub fn digit_to_char(digit: u8) -> Option<char> {
    char::from_digit(digit as u32, 36).map(|c| c.to_ascii_uppercase())
}

/// Inverse of `digit_to_char`, case-insensitive. Returns None if `c` is not a
/// digit of `base`.
pub fn char_to_digit(c: char, base: u32) -> Option<u8> {
    if !(2..=36).contains(&base) {
        return None;
    }
    c.to_digit(base).map(|d| d as u8)
}

/// A fixed-length sequence of digits, most significant first.
///
/// The base is not stored: callers thread it through explicitly. Leading zeros
/// are significant, so `[0, 9, 9]` and `[9, 9]` are different sequences.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitSequence(Vec<u8>);

impl DigitSequence {
    pub fn new(digits: Vec<u8>) -> Self {
        DigitSequence(digits)
    }

    /// Parse a textual sequence such as `"3214"` or `"1a0"` in the given base.
    ///
    /// Every character counts as one digit, including leading zeros.
    pub fn parse(text: &str, base: u32) -> Result<Self> {
        text.chars()
            .map(|c| char_to_digit(c, base).ok_or(Error::InvalidDigit { digit: c, base }))
            .collect::<Result<Vec<u8>>>()
            .map(DigitSequence)
    }

    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if every digit is below `base`.
    pub fn is_well_formed(&self, base: u32) -> bool {
        self.0.iter().all(|&d| (d as u32) < base)
    }

    /// True if this sequence may start a routine: no leading zero when it has
    /// more than one digit, and at least two distinct digit values.
    ///
    /// # Example
    ///
    /// ```
    /// use kaprekar::DigitSequence;
    ///
    /// assert!(DigitSequence::new(vec![3, 2, 1, 4]).is_candidate());
    /// assert!(!DigitSequence::new(vec![0, 9, 9]).is_candidate());
    /// assert!(!DigitSequence::new(vec![5, 5, 5]).is_candidate());
    /// ```
    pub fn is_candidate(&self) -> bool {
        match self.0.split_first() {
            None => false,
            Some((&first, rest)) => {
                if !rest.is_empty() && first == 0 {
                    return false;
                }
                rest.iter().any(|&d| d != first)
            }
        }
    }

    /// The digits rearranged in non-increasing order.
    pub fn descending(&self) -> DigitSequence {
        let mut digits = self.0.clone();
        digits.sort_unstable_by(|a, b| b.cmp(a));
        DigitSequence(digits)
    }

    /// The digits rearranged in non-decreasing order.
    pub fn ascending(&self) -> DigitSequence {
        let mut digits = self.0.clone();
        digits.sort_unstable();
        DigitSequence(digits)
    }

    /// The positional value of the sequence in `base`.
    pub fn value(&self, base: u32) -> BigInt {
        BigInt::from_digits(&self.0, base)
    }
}

impl From<Vec<u8>> for DigitSequence {
    fn from(digits: Vec<u8>) -> Self {
        DigitSequence(digits)
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.0 {
            write!(f, "{}", digit_to_char(d).unwrap_or('?'))?;
        }
        Ok(())
    }
}
