pub mod aggregate;
pub mod analyzer;
pub mod bigint;
pub mod candidates;
pub mod digits;
pub mod error;
pub mod params;
pub mod routine;
pub mod sequence;

pub use aggregate::{
    AggregateReport, CycleClass, CycleKey, FinalValueStats, aggregate, explore, explore_parallel,
};
pub use analyzer::{Analyzer, Outcome, analyze, trajectory};
pub use bigint::BigInt;
pub use candidates::{Candidates, generate_candidates};
pub use digits::{DigitSequence, char_to_digit, digit_to_char};
pub use error::{Error, ParameterError, Result};
pub use params::{MAX_BASE, MIN_BASE, Params};
pub use routine::step;
pub use sequence::{Orbit, trace_orbit};
