use crate::digits::DigitSequence;

/// One application of the Kaprekar routine in `base`.
///
/// Sorts the digits descending and ascending, subtracts the two values and
/// re-pads the difference with leading zeros to the input length. Total over all
/// well-formed sequences, repdigits and leading zeros included.
///
/// # Example
///
/// ```
/// use kaprekar::{DigitSequence, step};
///
/// let next = step(&DigitSequence::new(vec![3, 2, 1, 4]), 10);
/// assert_eq!(next.digits(), &[3, 0, 8, 7]); // 4321 - 1234
/// ```
pub fn step(x: &DigitSequence, base: u32) -> DigitSequence {
    debug_assert!(x.is_well_formed(base), "{:?} is not a base-{} sequence", x, base);

    let desc = x.descending().value(base);
    let asc = x.ascending().value(base);
    let difference = &desc - &asc;

    // D - A < base^n, so the difference always fits back into n digits
    match difference.to_padded_digits(x.len()) {
        Some(digits) => DigitSequence::new(digits),
        None => unreachable!("difference of two {}-digit values is wider than its operands", x.len()),
    }
}
