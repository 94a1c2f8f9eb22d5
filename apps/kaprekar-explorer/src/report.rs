//! Text rendering of analysis results.

use std::fmt;

use kaprekar::{AggregateReport, DigitSequence, Outcome, Params, trajectory};

/// Share of `count` in `total`, as a percentage.
pub fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// A sequence as digits, followed by its decimal value outside base 10.
struct Value<'a> {
    seq: &'a DigitSequence,
    base: u32,
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.base == 10 {
            write!(f, "{}", self.seq)
        } else {
            write!(f, "{} (decimal {})", self.seq, self.seq.value(self.base))
        }
    }
}

fn write_cycle(f: &mut fmt::Formatter<'_>, elements: &[DigitSequence]) -> fmt::Result {
    for (i, seq) in elements.iter().enumerate() {
        if i > 0 {
            write!(f, " -> ")?;
        }
        write!(f, "{}", seq)?;
    }
    Ok(())
}

/// One line per analyzed candidate, as printed in verbose mode.
pub struct OutcomeLine<'a> {
    pub start: &'a DigitSequence,
    pub outcome: &'a Outcome,
}

impl fmt::Display for OutcomeLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Initial: {}, ", self.start)?;
        match self.outcome {
            Outcome::FixedPoint { value, iterations } => {
                write!(f, "Type: FINAL, Iterations: {}, FinalNum: {}", iterations, value)
            }
            Outcome::Cycle {
                elements,
                entry_iterations,
            } => {
                write!(f, "Type: CYCLE, Iterations: {}, Cycle: [", entry_iterations)?;
                write_cycle(f, elements)?;
                write!(f, "]")
            }
        }
    }
}

/// The aggregated statistics for a whole candidate space.
pub struct Summary<'a> {
    pub params: Params,
    pub report: &'a AggregateReport,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.params.digits();
        let base = self.params.base();
        let report = self.report;
        let total = report.total_candidates;

        writeln!(f, "--- Aggregated Analysis Results for N={} in Base {} ---", n, base)?;

        if report.is_empty() {
            return writeln!(f, "No valid numbers generated for N={} in Base {}.", n, base);
        }

        if let Some(value) = report.single_fixed_point() {
            writeln!(
                f,
                "ALL numbers of {} digits in Base {} converge to the single final number: {}",
                n,
                base,
                Value { seq: value, base }
            )?;
            writeln!(
                f,
                "The most number of iterations it took to arrive at that number was: {}",
                report.max_iterations_to_fixed_point().unwrap_or(0)
            )?;
            return Ok(());
        }

        writeln!(
            f,
            "NOT all numbers of {} digits in Base {} converge to the same final number, or some entered cycles.",
            n, base
        )?;

        writeln!(f)?;
        writeln!(f, "--- Unique Final Numbers Found ---")?;
        if report.final_values.is_empty() {
            writeln!(
                f,
                "No numbers converged to a final fixed point for N={} in Base {}.",
                n, base
            )?;
        } else {
            for (value, stats) in &report.final_values {
                writeln!(
                    f,
                    "Final Number: {} (Reached by {:.2}% of checked numbers)",
                    Value { seq: value, base },
                    percent(stats.count, total)
                )?;
            }
            writeln!(
                f,
                "Maximum iterations to reach any unique final number: {}",
                report.max_iterations_to_fixed_point().unwrap_or(0)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "--- Unique Cycles Found ---")?;
        if report.cycle_classes.is_empty() {
            writeln!(f, "No numbers converged to a cycle for N={} in Base {}.", n, base)?;
        } else {
            for (i, class) in report.cycle_classes.values().enumerate() {
                write!(f, "Unique Cycle {}: ", i + 1)?;
                write_cycle(f, &class.representative)?;
                writeln!(
                    f,
                    " (Reached by {:.2}% of checked numbers)",
                    percent(class.count, total)
                )?;
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Percentage of ALL checked numbers that converged to ANY cycle: {:.2}%",
            percent(report.total_cycle_count, total)
        )
    }
}

/// Every step of the routine from one starting sequence.
pub struct Trace<'a> {
    pub start: &'a DigitSequence,
    pub base: u32,
}

impl fmt::Display for Trace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = self.base;
        let orbit = trajectory(self.start, base);

        writeln!(f, "Tracing {} in Base {}", Value { seq: self.start, base }, base)?;
        for (i, seq) in orbit.tail.iter().chain(&orbit.cycle).enumerate() {
            writeln!(f, "{:>4}: {} - {}", i, seq.descending(), seq.ascending())?;
        }

        let steps = orbit.entry_steps();
        if orbit.is_fixed_point() {
            write!(f, "Fixed point {} after {} iteration", Value { seq: &orbit.cycle[0], base }, steps)?;
            writeln!(f, "{}", if steps == 1 { "" } else { "s" })
        } else {
            write!(f, "Cycle of length {} entered after {} iteration", orbit.cycle.len(), steps)?;
            write!(f, "{}: ", if steps == 1 { "" } else { "s" })?;
            write_cycle(f, &orbit.cycle)?;
            writeln!(f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaprekar::{analyze, explore};

    fn summary(n: usize, base: u32) -> String {
        let params = Params::new(n, base).unwrap();
        let report = explore(params);
        Summary { params, report: &report }.to_string()
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(1, 4), 25.0);
        assert_eq!(percent(0, 0), 0.0);
    }

    #[test]
    fn test_single_fixed_point_summary() {
        let text = summary(4, 10);
        assert!(text.contains(
            "ALL numbers of 4 digits in Base 10 converge to the single final number: 6174"
        ));
        assert!(text.contains("arrive at that number was: 7"));
    }

    #[test]
    fn test_other_base_shows_decimal() {
        let text = summary(3, 16);
        assert!(text.contains("single final number: 7F8 (decimal 2040)"));
    }

    #[test]
    fn test_cycle_summary() {
        let text = summary(2, 10);
        assert!(text.contains("NOT all numbers of 2 digits in Base 10"));
        assert!(text.contains("No numbers converged to a final fixed point for N=2 in Base 10."));
        assert!(text.contains(
            "Unique Cycle 1: 09 -> 81 -> 63 -> 27 -> 45 (Reached by 100.00% of checked numbers)"
        ));
        assert!(text.contains("converged to ANY cycle: 100.00%"));
    }

    #[test]
    fn test_several_fixed_points() {
        let text = summary(4, 2);
        assert!(text.contains("Final Number: 0111 (decimal 7) (Reached by 57.14% of checked numbers)"));
        assert!(text.contains("Final Number: 1001 (decimal 9) (Reached by 42.86% of checked numbers)"));
        assert!(text.contains("No numbers converged to a cycle for N=4 in Base 2."));
        assert!(text.contains("converged to ANY cycle: 0.00%"));
    }

    #[test]
    fn test_empty_summary() {
        let text = summary(1, 10);
        assert!(text.contains("No valid numbers generated for N=1 in Base 10."));
    }

    #[test]
    fn test_outcome_lines() {
        let start = DigitSequence::new(vec![3, 2, 1, 4]);
        let outcome = analyze(&start, 10);
        assert_eq!(
            OutcomeLine { start: &start, outcome: &outcome }.to_string(),
            "Initial: 3214, Type: FINAL, Iterations: 3, FinalNum: 6174"
        );

        let start = DigitSequence::new(vec![1, 0]);
        let outcome = analyze(&start, 10);
        assert_eq!(
            OutcomeLine { start: &start, outcome: &outcome }.to_string(),
            "Initial: 10, Type: CYCLE, Iterations: 1, Cycle: [09 -> 81 -> 63 -> 27 -> 45]"
        );
    }

    #[test]
    fn test_trace() {
        let start = DigitSequence::new(vec![3, 2, 1, 4]);
        let text = Trace { start: &start, base: 10 }.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Tracing 3214 in Base 10");
        assert_eq!(lines[1], "   0: 4321 - 1234");
        assert_eq!(lines[4], "   3: 7641 - 1467");
        assert_eq!(lines[5], "Fixed point 6174 after 3 iterations");
    }

    #[test]
    fn test_trace_cycle() {
        let start = DigitSequence::new(vec![1, 0]);
        let text = Trace { start: &start, base: 10 }.to_string();
        assert!(text.ends_with("Cycle of length 5 entered after 1 iteration: 09 -> 81 -> 63 -> 27 -> 45\n"));
    }
}
