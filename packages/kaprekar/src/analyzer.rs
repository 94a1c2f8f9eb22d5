//! Classifies where the routine takes a starting sequence.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::trace;

use crate::digits::DigitSequence;
use crate::routine::step;
use crate::sequence::{Orbit, trace_orbit};

/// Where the routine ends up from one starting sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// `value` maps to itself; reached after `iterations` steps (0 if the start is fixed).
    FixedPoint {
        value: DigitSequence,
        iterations: usize,
    },
    /// A repeating orbit of two or more values, listed in traversal order from
    /// the first one reached. `entry_iterations` steps precede it.
    Cycle {
        elements: Vec<DigitSequence>,
        entry_iterations: usize,
    },
}

impl Outcome {
    /// Steps taken before the fixed point or the cycle was reached.
    pub fn iterations(&self) -> usize {
        match self {
            Outcome::FixedPoint { iterations, .. } => *iterations,
            Outcome::Cycle {
                entry_iterations, ..
            } => *entry_iterations,
        }
    }

    pub fn is_fixed_point(&self) -> bool {
        matches!(self, Outcome::FixedPoint { .. })
    }
}

impl From<Orbit<DigitSequence>> for Outcome {
    fn from(orbit: Orbit<DigitSequence>) -> Self {
        let steps = orbit.entry_steps();
        let mut cycle = orbit.cycle;
        if cycle.len() == 1 {
            Outcome::FixedPoint {
                value: cycle.remove(0),
                iterations: steps,
            }
        } else {
            Outcome::Cycle {
                elements: cycle,
                entry_iterations: steps,
            }
        }
    }
}

/// Every sequence visited from `start`, split into tail and cycle.
pub fn trajectory(start: &DigitSequence, base: u32) -> Orbit<DigitSequence> {
    trace_orbit(start.clone(), |x| step(x, base))
}

/// Run the routine from `start` until it reaches a fixed point or a cycle.
///
/// # Example
///
/// ```
/// use kaprekar::{DigitSequence, Outcome, analyze};
///
/// let outcome = analyze(&DigitSequence::new(vec![3, 2, 1, 4]), 10);
/// assert_eq!(
///     outcome,
///     Outcome::FixedPoint { value: DigitSequence::new(vec![6, 1, 7, 4]), iterations: 3 }
/// );
/// ```
pub fn analyze(start: &DigitSequence, base: u32) -> Outcome {
    trajectory(start, base).into()
}

/// Which cycle a visited sequence falls into, and how far away it is.
#[derive(Clone, Debug)]
struct Landing {
    cycle: Arc<[DigitSequence]>,
    /// Index of the first cycle member reached.
    offset: usize,
    distance: usize,
}

impl Landing {
    fn outcome(&self) -> Outcome {
        if self.cycle.len() == 1 {
            return Outcome::FixedPoint {
                value: self.cycle[0].clone(),
                iterations: self.distance,
            };
        }
        let elements = self.cycle[self.offset..]
            .iter()
            .chain(&self.cycle[..self.offset])
            .cloned()
            .collect();
        Outcome::Cycle {
            elements,
            entry_iterations: self.distance,
        }
    }
}

/// Analyzer that remembers every sequence it has visited.
///
/// Whole-space runs revisit the same intermediates constantly (every
/// permutation of a digit multiset steps to the same value), so a start whose
/// path hits a known sequence stops there and reuses the stored result.
/// Outcomes are identical to [`analyze`].
#[derive(Debug)]
pub struct Analyzer {
    base: u32,
    landings: HashMap<DigitSequence, Landing>,
}

impl Analyzer {
    pub fn new(base: u32) -> Self {
        Analyzer {
            base,
            landings: HashMap::new(),
        }
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    /// Number of sequences whose outcome is cached.
    pub fn cached(&self) -> usize {
        self.landings.len()
    }

    pub fn analyze(&mut self, start: &DigitSequence) -> Outcome {
        let mut path: Vec<DigitSequence> = Vec::new();
        let mut current = start.clone();

        loop {
            if let Some(known) = self.landings.get(&current).cloned() {
                let len = path.len();
                for (i, seq) in path.into_iter().enumerate() {
                    let landing = Landing {
                        distance: len - i + known.distance,
                        ..known.clone()
                    };
                    self.landings.insert(seq, landing);
                }
                return Landing {
                    distance: len + known.distance,
                    ..known
                }
                .outcome();
            }

            if let Some(cycle_start) = path.iter().position(|x| x == &current) {
                let cycle: Arc<[DigitSequence]> = path.split_off(cycle_start).into();
                trace!(length = cycle.len(), entry = %cycle[0], "discovered cycle");

                for (offset, seq) in cycle.iter().enumerate() {
                    let landing = Landing {
                        cycle: Arc::clone(&cycle),
                        offset,
                        distance: 0,
                    };
                    self.landings.insert(seq.clone(), landing);
                }
                let len = path.len();
                for (i, seq) in path.into_iter().enumerate() {
                    let landing = Landing {
                        cycle: Arc::clone(&cycle),
                        offset: 0,
                        distance: len - i,
                    };
                    self.landings.insert(seq, landing);
                }
                return Landing {
                    cycle,
                    offset: 0,
                    distance: len,
                }
                .outcome();
            }

            let next = step(&current, self.base);
            path.push(current);
            current = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::generate_candidates;

    fn seq(digits: &[u8]) -> DigitSequence {
        DigitSequence::new(digits.to_vec())
    }

    #[test]
    fn test_reaches_6174() {
        let outcome = analyze(&seq(&[3, 2, 1, 4]), 10);
        assert_eq!(
            outcome,
            Outcome::FixedPoint {
                value: seq(&[6, 1, 7, 4]),
                iterations: 3
            }
        );
        assert!(outcome.iterations() <= 7);
    }

    #[test]
    fn test_reaches_495() {
        // 554 → 099 → 891 → 792 → 693 → 594 → 495
        assert_eq!(
            analyze(&seq(&[5, 5, 4]), 10),
            Outcome::FixedPoint {
                value: seq(&[4, 9, 5]),
                iterations: 6
            }
        );
    }

    #[test]
    fn test_fixed_start_takes_zero_iterations() {
        assert_eq!(
            analyze(&seq(&[6, 1, 7, 4]), 10),
            Outcome::FixedPoint {
                value: seq(&[6, 1, 7, 4]),
                iterations: 0
            }
        );
    }

    #[test]
    fn test_repdigit_collapses_to_zero() {
        assert_eq!(
            analyze(&seq(&[7, 7, 7]), 10),
            Outcome::FixedPoint {
                value: seq(&[0, 0, 0]),
                iterations: 1
            }
        );
    }

    #[test]
    fn test_two_digit_cycle() {
        // 10 → 09 → 81 → 63 → 27 → 45 → 09
        let outcome = analyze(&seq(&[1, 0]), 10);
        assert_eq!(
            outcome,
            Outcome::Cycle {
                elements: vec![
                    seq(&[0, 9]),
                    seq(&[8, 1]),
                    seq(&[6, 3]),
                    seq(&[2, 7]),
                    seq(&[4, 5]),
                ],
                entry_iterations: 1,
            }
        );
        assert!(!outcome.is_fixed_point());
    }

    #[test]
    fn test_cycle_listing_starts_where_it_was_entered() {
        // 72 → 45, already on the cycle
        match analyze(&seq(&[7, 2]), 10) {
            Outcome::Cycle {
                elements,
                entry_iterations,
            } => {
                assert_eq!(entry_iterations, 1);
                assert_eq!(elements[0], seq(&[4, 5]));
            }
            other => panic!("expected a cycle, got {:?}", other),
        }
    }

    #[test]
    fn test_trajectory() {
        let orbit = trajectory(&seq(&[3, 2, 1, 4]), 10);
        assert_eq!(
            orbit.tail,
            vec![seq(&[3, 2, 1, 4]), seq(&[3, 0, 8, 7]), seq(&[8, 3, 5, 2])]
        );
        assert_eq!(orbit.cycle, vec![seq(&[6, 1, 7, 4])]);
    }

    #[test]
    fn test_cached_matches_uncached() {
        for (n, base) in [(2, 10), (3, 10), (4, 10), (3, 16), (4, 5)] {
            let mut analyzer = Analyzer::new(base);
            for start in generate_candidates(n, base).unwrap() {
                assert_eq!(
                    analyzer.analyze(&start),
                    analyze(&start, base),
                    "n={} base={} start={}",
                    n,
                    base,
                    start
                );
            }
            assert!(analyzer.cached() > 0);
        }
    }

    #[test]
    fn test_cached_order_independent() {
        let mut analyzer = Analyzer::new(10);
        // Warm the cache from inside the cycle first
        analyzer.analyze(&seq(&[6, 3]));
        assert_eq!(analyzer.analyze(&seq(&[1, 0])), analyze(&seq(&[1, 0]), 10));
        assert_eq!(analyzer.analyze(&seq(&[8, 1])), analyze(&seq(&[8, 1]), 10));
        assert_eq!(analyzer.analyze(&seq(&[5, 4])), analyze(&seq(&[5, 4]), 10));
    }
}
