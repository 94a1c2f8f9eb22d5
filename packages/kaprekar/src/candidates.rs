use crate::digits::DigitSequence;
use crate::error::Result;
use crate::params::Params;

/// Iterator over every candidate starting sequence for a digit count and base,
/// in lexicographic order.
///
/// Walks the digit positions like an odometer (the iterative form of a
/// depth-first build): the first position runs over `1..base` when there is
/// more than one digit, every other position over `0..base`. Repdigits are
/// dropped only once a full sequence is built. Clone it to restart.
///
/// # Example
///
/// ```
/// use kaprekar::{Candidates, Params};
///
/// let params = Params::new(2, 3).unwrap();
/// let all: Vec<String> = Candidates::new(params).map(|s| s.to_string()).collect();
/// assert_eq!(all, vec!["10", "12", "20", "21"]);
/// ```
#[derive(Clone, Debug)]
pub struct Candidates {
    base: u8,
    next: Option<Vec<u8>>,
}

impl Candidates {
    pub fn new(params: Params) -> Self {
        let n = params.digits();
        let mut first = vec![0u8; n];
        if n > 1 {
            first[0] = 1;
        }
        Candidates {
            base: params.base() as u8,
            next: Some(first),
        }
    }

    /// Advance the odometer past `digits`, or None once it wraps. The leading
    /// position only ever counts up, so it never returns to zero.
    fn successor(&self, digits: &[u8]) -> Option<Vec<u8>> {
        let mut digits = digits.to_vec();
        for position in (0..digits.len()).rev() {
            if digits[position] + 1 < self.base {
                digits[position] += 1;
                return Some(digits);
            }
            digits[position] = 0;
        }
        None
    }
}

impl Iterator for Candidates {
    type Item = DigitSequence;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.next.take()?;
            self.next = self.successor(&current);
            let seq = DigitSequence::new(current);
            if seq.is_candidate() {
                return Some(seq);
            }
        }
    }
}

/// Generate every candidate of `n` digits in `base`.
///
/// Fails with `InvalidParameter` before producing anything if `base` is outside
/// `[2, 36]` or `n < 1`.
pub fn generate_candidates(n: usize, base: u32) -> Result<Candidates> {
    Params::new(n, base).map(Candidates::new)
}
