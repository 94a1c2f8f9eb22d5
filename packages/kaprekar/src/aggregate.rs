//! Grouping per-candidate outcomes into convergence statistics.

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;
use tracing::debug;

use crate::analyzer::{Analyzer, Outcome};
use crate::candidates::Candidates;
use crate::digits::DigitSequence;
use crate::params::Params;

/// Identity of a cycle: the set of its members, ignoring order and rotation.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CycleKey(BTreeSet<DigitSequence>);

impl CycleKey {
    pub fn from_elements(elements: &[DigitSequence]) -> Self {
        CycleKey(elements.iter().cloned().collect())
    }

    pub fn members(&self) -> &BTreeSet<DigitSequence> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// How often a fixed point was reached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FinalValueStats {
    pub count: u64,
    pub max_iterations: usize,
}

/// One distinct cycle and how often it was entered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleClass {
    pub count: u64,
    /// The cycle in traversal order, rotated to start at its smallest member.
    pub representative: Vec<DigitSequence>,
    pub max_entry_iterations: usize,
}

/// Rotate a cycle so its smallest member comes first.
///
/// A routine cycle's member set fixes its traversal order, so this listing is
/// the same whichever member the cycle was entered from.
pub fn canonical_rotation(elements: &[DigitSequence]) -> Vec<DigitSequence> {
    let start = elements
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map_or(0, |(i, _)| i);
    elements[start..]
        .iter()
        .chain(&elements[..start])
        .cloned()
        .collect()
}

/// Convergence statistics over a set of starting candidates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AggregateReport {
    pub final_values: BTreeMap<DigitSequence, FinalValueStats>,
    pub cycle_classes: BTreeMap<CycleKey, CycleClass>,
    pub total_cycle_count: u64,
    pub total_candidates: u64,
}

impl AggregateReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one candidate's outcome into the report.
    pub fn record(&mut self, outcome: Outcome) {
        self.total_candidates += 1;
        match outcome {
            Outcome::FixedPoint { value, iterations } => {
                let stats = self.final_values.entry(value).or_default();
                stats.count += 1;
                stats.max_iterations = stats.max_iterations.max(iterations);
            }
            Outcome::Cycle {
                elements,
                entry_iterations,
            } => {
                self.total_cycle_count += 1;
                let class = self
                    .cycle_classes
                    .entry(CycleKey::from_elements(&elements))
                    .or_insert_with(|| CycleClass {
                        count: 0,
                        representative: canonical_rotation(&elements),
                        max_entry_iterations: 0,
                    });
                class.count += 1;
                class.max_entry_iterations = class.max_entry_iterations.max(entry_iterations);
            }
        }
    }

    /// Combine two partial reports. Commutative and associative, so candidate
    /// partitions can be aggregated independently and merged in any order.
    pub fn merge(mut self, other: AggregateReport) -> AggregateReport {
        self.total_candidates += other.total_candidates;
        self.total_cycle_count += other.total_cycle_count;

        for (value, theirs) in other.final_values {
            let ours = self.final_values.entry(value).or_default();
            ours.count += theirs.count;
            ours.max_iterations = ours.max_iterations.max(theirs.max_iterations);
        }

        for (key, theirs) in other.cycle_classes {
            match self.cycle_classes.get_mut(&key) {
                Some(ours) => {
                    ours.count += theirs.count;
                    ours.max_entry_iterations =
                        ours.max_entry_iterations.max(theirs.max_entry_iterations);
                }
                None => {
                    self.cycle_classes.insert(key, theirs);
                }
            }
        }

        self
    }

    /// Candidates that ended on any fixed point.
    pub fn fixed_point_count(&self) -> u64 {
        self.final_values.values().map(|s| s.count).sum()
    }

    /// The fixed point every candidate reaches, if there is exactly one and no
    /// candidate ends in a cycle.
    pub fn single_fixed_point(&self) -> Option<&DigitSequence> {
        if self.final_values.len() == 1 && self.cycle_classes.is_empty() {
            self.final_values.keys().next()
        } else {
            None
        }
    }

    /// Most steps any candidate needed to reach its fixed point.
    pub fn max_iterations_to_fixed_point(&self) -> Option<usize> {
        self.final_values.values().map(|s| s.max_iterations).max()
    }

    pub fn is_empty(&self) -> bool {
        self.total_candidates == 0
    }
}

/// Aggregate a stream of outcomes into a report.
///
/// # Example
///
/// ```
/// use kaprekar::{DigitSequence, aggregate, analyze, generate_candidates};
///
/// let report = aggregate(generate_candidates(3, 10).unwrap().map(|s| analyze(&s, 10)));
/// assert_eq!(report.single_fixed_point(), Some(&DigitSequence::new(vec![4, 9, 5])));
/// assert_eq!(report.total_candidates, 891);
/// ```
pub fn aggregate<I>(outcomes: I) -> AggregateReport
where
    I: IntoIterator<Item = Outcome>,
{
    let mut report = AggregateReport::new();
    for outcome in outcomes {
        report.record(outcome);
    }
    report
}

/// Analyze every candidate for `params` on the current thread.
pub fn explore(params: Params) -> AggregateReport {
    debug!(
        digits = params.digits(),
        base = params.base(),
        "exploring candidate space"
    );
    let mut analyzer = Analyzer::new(params.base());
    let report = aggregate(Candidates::new(params).map(|start| analyzer.analyze(&start)));
    log_summary(&report);
    report
}

/// Analyze every candidate for `params` across the rayon thread pool.
///
/// Each worker keeps its own analyzer cache and partial report; the partials
/// are merged once all candidates are consumed.
pub fn explore_parallel(params: Params) -> AggregateReport {
    debug!(
        digits = params.digits(),
        base = params.base(),
        threads = rayon::current_num_threads(),
        "exploring candidate space in parallel"
    );
    let base = params.base();
    let report = Candidates::new(params)
        .par_bridge()
        .fold(
            || (Analyzer::new(base), AggregateReport::new()),
            |(mut analyzer, mut report), start| {
                report.record(analyzer.analyze(&start));
                (analyzer, report)
            },
        )
        .map(|(_, report)| report)
        .reduce(AggregateReport::new, AggregateReport::merge);
    log_summary(&report);
    report
}

fn log_summary(report: &AggregateReport) {
    debug!(
        candidates = report.total_candidates,
        fixed_points = report.final_values.len(),
        cycles = report.cycle_classes.len(),
        in_cycles = report.total_cycle_count,
        "exploration finished"
    );
}
