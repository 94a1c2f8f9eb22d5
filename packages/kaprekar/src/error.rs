use thiserror::Error;

/// Errors raised by the Kaprekar engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),

    #[error("invalid digit '{digit}' for base {base}")]
    InvalidDigit { digit: char, base: u32 },
}

/// The scalar run parameter that failed validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    #[error("base must be between 2 and 36, got {0}")]
    Base(u32),

    #[error("digit count must be at least 1, got {0}")]
    DigitCount(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
