pub mod report;

use kaprekar::{AggregateReport, Analyzer, Candidates, Params, explore, explore_parallel};
use tracing::info;

pub use report::{OutcomeLine, Summary, Trace, percent};

/// Analyze the whole candidate space for `params` and return the text to print.
///
/// If verbose is true, every candidate's outcome is listed before the summary;
/// that listing is produced sequentially even when `parallel` is set.
pub fn run(params: Params, parallel: bool, verbose: bool) -> String {
    let n = params.digits();
    let base = params.base();
    let total = match params.candidate_count() {
        Some(count) => count.to_string(),
        None => format!("more than {}", u128::MAX),
    };

    let mut out = format!(
        "Starting Kaprekar's Routine Analysis for {}-digit numbers in Base {}.\n\
         Total valid numbers to analyze: {}\n{}\n",
        n,
        base,
        total,
        "-".repeat(50)
    );

    let report = if verbose {
        info!(digits = n, base, "listing every candidate");
        let mut analyzer = Analyzer::new(base);
        let mut report = AggregateReport::new();
        for start in Candidates::new(params) {
            let outcome = analyzer.analyze(&start);
            out.push_str(&format!("{}\n", OutcomeLine { start: &start, outcome: &outcome }));
            report.record(outcome);
        }
        report
    } else if parallel {
        explore_parallel(params)
    } else {
        explore(params)
    };

    out.push_str(&format!(
        "\n{}\n--- Analysis Complete ---\n",
        Summary { params, report: &report }
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run() {
        let params = Params::new(3, 10).unwrap();
        let text = run(params, false, false);
        assert!(text.starts_with("Starting Kaprekar's Routine Analysis for 3-digit numbers in Base 10."));
        assert!(text.contains("Total valid numbers to analyze: 891"));
        assert!(text.contains("converge to the single final number: 495"));
        assert!(text.ends_with("--- Analysis Complete ---\n"));
        assert_eq!(run(params, true, false), text);
    }

    #[test]
    fn test_run_verbose() {
        let params = Params::new(2, 2).unwrap();
        let text = run(params, false, true);
        assert!(text.contains("Initial: 10, Type: FINAL, Iterations: 1, FinalNum: 01"));
        assert!(text.contains("converge to the single final number: 01 (decimal 1)"));
    }
}
