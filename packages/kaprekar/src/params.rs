use crate::error::{ParameterError, Result};

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// Validated run parameters: the digit count `n` and the numeral base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Params {
    digits: usize,
    base: u32,
}

impl Params {
    /// Validate `digits >= 1` and `base` in `[2, 36]`.
    ///
    /// # Example
    ///
    /// ```
    /// use kaprekar::Params;
    ///
    /// assert!(Params::new(4, 10).is_ok());
    /// assert!(Params::new(4, 37).is_err());
    /// assert!(Params::new(0, 10).is_err());
    /// ```
    pub fn new(digits: usize, base: u32) -> Result<Self> {
        if !(MIN_BASE..=MAX_BASE).contains(&base) {
            return Err(ParameterError::Base(base).into());
        }
        if digits < 1 {
            return Err(ParameterError::DigitCount(digits).into());
        }
        Ok(Params { digits, base })
    }

    pub fn digits(&self) -> usize {
        self.digits
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    /// Number of distinct length-n sequences, `base^n`. None if it overflows u128.
    pub fn state_space(&self) -> Option<u128> {
        let exp = u32::try_from(self.digits).ok()?;
        (self.base as u128).checked_pow(exp)
    }

    /// Number of candidates the generator yields.
    ///
    /// Sequences without a leading zero number `(b-1)*b^(n-1)`; of those, the
    /// `b-1` repdigits are excluded. With a single digit nothing qualifies.
    pub fn candidate_count(&self) -> Option<u128> {
        if self.digits == 1 {
            return Some(0);
        }
        let b = self.base as u128;
        let exp = u32::try_from(self.digits - 1).ok()?;
        let leading = (b - 1).checked_mul(b.checked_pow(exp)?)?;
        Some(leading - (b - 1))
    }
}
