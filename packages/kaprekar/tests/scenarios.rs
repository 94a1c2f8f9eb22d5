use kaprekar::{DigitSequence, Outcome, Params, analyze, explore, explore_parallel, step};

fn seq(text: &str, base: u32) -> DigitSequence {
    DigitSequence::parse(text, base).unwrap()
}

#[test]
fn test_3214_reaches_6174_within_seven_steps() {
    let mut current = seq("3214", 10);
    let target = seq("6174", 10);
    let mut steps = 0;
    while current != target {
        current = step(&current, 10);
        steps += 1;
        assert!(steps <= 7, "6174 not reached after 7 steps");
    }
}

#[test]
fn test_554_reports_fixed_point_495() {
    match analyze(&seq("554", 10), 10) {
        Outcome::FixedPoint { value, iterations } => {
            assert_eq!(value, seq("495", 10));
            assert_eq!(iterations, 6);
        }
        other => panic!("expected a fixed point, got {:?}", other),
    }
}

#[test]
fn test_five_digit_base_ten_only_cycles() {
    let report = explore(Params::new(5, 10).unwrap());
    assert_eq!(report.total_candidates, 89_991);
    assert!(report.final_values.is_empty());
    assert_eq!(report.total_cycle_count, 89_991);

    let mut counts: Vec<(usize, u64)> = report
        .cycle_classes
        .iter()
        .map(|(key, class)| (key.len(), class.count))
        .collect();
    counts.sort();
    assert_eq!(counts, vec![(2, 3_002), (4, 43_219), (4, 43_770)]);

    let class_total: u64 = report.cycle_classes.values().map(|c| c.count).sum();
    assert_eq!(report.total_cycle_count, class_total);
    assert_eq!(
        report.total_cycle_count + report.fixed_point_count(),
        report.total_candidates
    );

    let short = report
        .cycle_classes
        .values()
        .find(|c| c.representative.len() == 2)
        .unwrap();
    assert_eq!(short.representative, vec![seq("53955", 10), seq("59994", 10)]);
}

#[test]
fn test_four_digit_binary_has_two_fixed_points() {
    let report = explore_parallel(Params::new(4, 2).unwrap());
    assert_eq!(report.total_candidates, 7);
    assert_eq!(report.final_values.len(), 2);
    assert_eq!(report.final_values[&seq("0111", 2)].count, 4);
    assert_eq!(report.final_values[&seq("1001", 2)].count, 3);
    assert_eq!(report.single_fixed_point(), None);
}

#[test]
fn test_three_digit_hex_converges_to_7f8() {
    let report = explore(Params::new(3, 16).unwrap());
    assert_eq!(report.total_candidates, 3_825);
    assert_eq!(report.single_fixed_point(), Some(&seq("7F8", 16)));
}

#[test]
fn test_invalid_parameters_produce_nothing() {
    assert!(kaprekar::generate_candidates(4, 37).is_err());
    assert!(kaprekar::generate_candidates(0, 10).is_err());
    assert_eq!(kaprekar::generate_candidates(1, 10).unwrap().count(), 0);
}
