use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A non-negative big integer stored as limbs in a fixed radix (least significant first).
///
/// Digit sequences of any length convert into it without loss, so the routine's
/// subtraction never overflows however large `base^n` gets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigInt {
    digits: Vec<u8>,
    radix: u32,
}

impl BigInt {
    /// Create a BigInt representing zero.
    pub fn zero(radix: u32) -> Self {
        assert_radix(radix);
        BigInt { digits: vec![0], radix }
    }

    /// Create a BigInt from a u32.
    pub fn from_u32(mut n: u32, radix: u32) -> Self {
        assert_radix(radix);
        if n == 0 {
            return BigInt::zero(radix);
        }
        let mut digits = Vec::new();
        while n > 0 {
            digits.push((n % radix) as u8);
            n /= radix;
        }
        BigInt { digits, radix }
    }

    /// Create a BigInt from positional digits, most significant first.
    ///
    /// # Example
    ///
    /// ```
    /// use kaprekar::BigInt;
    ///
    /// let n = BigInt::from_digits(&[1, 10, 0], 16);
    /// assert_eq!(n.to_string(), "416"); // 0x1A0
    /// ```
    pub fn from_digits(msb_first: &[u8], radix: u32) -> Self {
        assert_radix(radix);
        debug_assert!(msb_first.iter().all(|&d| (d as u32) < radix));
        let mut n = BigInt {
            digits: msb_first.iter().rev().copied().collect(),
            radix,
        };
        n.normalize();
        n
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Digits most significant first, left-padded with zeros to exactly `width`.
    ///
    /// Returns None if the value needs more than `width` digits.
    pub fn to_padded_digits(&self, width: usize) -> Option<Vec<u8>> {
        let significant = if self.is_zero() { 0 } else { self.digits.len() };
        if significant > width {
            return None;
        }
        let mut result = vec![0; width];
        for (i, &d) in self.digits[..significant].iter().enumerate() {
            result[width - 1 - i] = d;
        }
        Some(result)
    }

    /// The same value expressed in another radix.
    pub fn to_radix(&self, radix: u32) -> BigInt {
        if radix == self.radix {
            return self.clone();
        }
        let mut result = BigInt::zero(radix);
        for &d in self.digits.iter().rev() {
            result = &(&result * self.radix) + &BigInt::from_u32(d as u32, radix);
        }
        result
    }

    /// Subtraction that returns None instead of going negative.
    pub fn checked_sub(&self, other: &BigInt) -> Option<BigInt> {
        assert_eq!(self.radix, other.radix, "radix mismatch");
        let radix = self.radix as i16;
        let mut result = Vec::with_capacity(self.digits.len());
        let mut borrow = 0i16;

        for i in 0..self.digits.len().max(other.digits.len()) {
            let a = self.digits.get(i).copied().unwrap_or(0) as i16;
            let b = other.digits.get(i).copied().unwrap_or(0) as i16;
            let mut diff = a - b - borrow;
            if diff < 0 {
                diff += radix;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(diff as u8);
        }

        if borrow > 0 {
            return None;
        }

        let mut n = BigInt {
            digits: result,
            radix: self.radix,
        };
        n.normalize();
        Some(n)
    }

    fn normalize(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.digits.push(0);
        }
    }
}

fn assert_radix(radix: u32) {
    assert!((2..=36).contains(&radix), "radix {} outside [2, 36]", radix);
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, other: BigInt) -> BigInt {
        &self + &other
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        assert_eq!(self.radix, other.radix, "radix mismatch");
        let radix = self.radix as u8;
        let mut result = Vec::new();
        let mut carry = 0u8;
        let max_len = self.digits.len().max(other.digits.len());

        for i in 0..max_len {
            let a = self.digits.get(i).copied().unwrap_or(0);
            let b = other.digits.get(i).copied().unwrap_or(0);
            let sum = a + b + carry;
            result.push(sum % radix);
            carry = sum / radix;
        }

        if carry > 0 {
            result.push(carry);
        }

        let mut n = BigInt {
            digits: result,
            radix: self.radix,
        };
        n.normalize();
        n
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, other: BigInt) -> BigInt {
        &self - &other
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    /// Panics if `other` is larger than `self`, like unsigned primitive subtraction.
    fn sub(self, other: &BigInt) -> BigInt {
        match self.checked_sub(other) {
            Some(n) => n,
            None => panic!("attempt to subtract with overflow"),
        }
    }
}

impl Mul<u32> for BigInt {
    type Output = BigInt;

    fn mul(self, other: u32) -> BigInt {
        &self * other
    }
}

impl Mul<u32> for &BigInt {
    type Output = BigInt;

    fn mul(self, other: u32) -> BigInt {
        let radix = self.radix as u64;
        let mut result = Vec::new();
        let mut carry = 0u64;

        for &d in &self.digits {
            let product = (d as u64) * (other as u64) + carry;
            result.push((product % radix) as u8);
            carry = product / radix;
        }

        while carry > 0 {
            result.push((carry % radix) as u8);
            carry /= radix;
        }

        let mut n = BigInt {
            digits: result,
            radix: self.radix,
        };
        n.normalize();
        n
    }
}

/// Formats the value in decimal, whatever the storage radix.
impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimal = self.to_radix(10);
        for &d in decimal.digits.iter().rev() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}
