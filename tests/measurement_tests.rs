//! End-to-end tests: reading measurements, combining them, and deciding on
//! the results.

use approximate_rs::{
    ApproxError, ApproximateNumber, Comparison, Function, ParseError, add, apply, div, mul,
    overlap, sub,
};

fn parsed(text: &str) -> ApproximateNumber {
    text.parse().unwrap()
}

#[test]
fn test_operator_table() {
    let a = ApproximateNumber::new(1.0, 2.0);
    let b = ApproximateNumber::new(3.0, 4.0);

    assert_eq!(add(a, b), ApproximateNumber::new(4.0, 6.0));
    assert_eq!(sub(a, b), ApproximateNumber::new(-2.0, 6.0));

    assert_eq!(mul(a, b), ApproximateNumber::new(3.0, 10.0));
    assert_eq!(div(a, b), parsed("0.3333333333333333±1.111111111111111"));
}

#[test]
fn test_parsed_measurements_propagate() {
    let width = parsed("50 ± 0.5");
    let length = parsed("100 ± 0.5");

    let perimeter = add(add(width, length), add(width, length));
    assert_eq!(perimeter, parsed("300±2"));
    assert_eq!(perimeter.to_string(), "300±2");
}

#[test]
fn test_parse_errors_surface_through_crate_error() {
    fn read_pair(a: &str, b: &str) -> approximate_rs::error::Result<ApproximateNumber> {
        let a = ApproximateNumber::parse(a)?;
        let b = ApproximateNumber::parse(b)?;
        ApproximateNumber::from_min_max(a.value(), b.value())
    }

    assert_eq!(read_pair("1", "3").unwrap(), ApproximateNumber::new(2.0, 1.0));
    assert!(matches!(
        read_pair("1", "4.2±--0.3"),
        Err(ApproxError::Parse(ParseError::Delta { .. }))
    ));
    assert!(matches!(
        read_pair("3", "1"),
        Err(ApproxError::InvalidRange { .. })
    ));
}

#[test]
fn test_sign_of_parsed_delta_is_ignored() {
    assert_eq!(parsed("4.2±0.3"), ApproximateNumber::new(4.2, 0.3));
    assert_eq!(parsed("4.2±-0.3"), ApproximateNumber::new(4.2, 0.3));
}

#[test]
fn test_ordering_of_disjoint_readings() {
    let f = ApproximateNumber::new(0.0, 1.0);
    let t = ApproximateNumber::new(3.0, 1.0);

    assert!(f.less_than(t));
    assert!(f.less_or_equal(t));
    assert!(!f.greater_than(t));
    assert!(!f.greater_or_equal(t));
    assert!(!overlap(f, t));
    assert_eq!(f.relative_delta(), f64::INFINITY);
}

#[test]
fn test_overlapping_readings_claim_no_order() {
    let f = ApproximateNumber::new(1.0, 1.0);
    let t = ApproximateNumber::new(2.0, 1.0);

    assert!(!f.less_than(t));
    assert!(!f.less_or_equal(t));
    assert!(!f.greater_than(t));
    assert!(!f.greater_or_equal(t));
    assert!(overlap(f, t));
    assert_eq!(f.relative_delta(), 1.0);
}

#[test]
fn test_apply_table() {
    let square = |x: f64| x * x;
    let cases: [(&str, ApproximateNumber, Function<'_>, f64, f64); 3] = [
        ("ln", ApproximateNumber::new(1.0, 0.1), Function::Ln, 0.0, 0.1),
        (
            "exp",
            ApproximateNumber::new(1.0, 0.1),
            Function::Exp,
            2.718_281_828_459_045,
            0.271_828_182_845_904_54,
        ),
        (
            "x^2",
            ApproximateNumber::new(10.0, 0.1),
            Function::Generic(&square),
            100.0,
            2.0,
        ),
    ];

    for (name, input, function, value, delta) in cases {
        let actual = apply(function, input, 1e-3);
        assert!(
            (actual.value() - value).abs() < 1e-12,
            "{name}: value {}",
            actual.value()
        );
        assert!(
            (actual.delta() - delta).abs() < 1e-9,
            "{name}: delta {}",
            actual.delta()
        );
    }
}

#[test]
fn test_chained_computation_keeps_bound() {
    // Ohm's law with a 1 % resistor: I = V / R, P = V * I
    let voltage = ApproximateNumber::new(12.0, 0.1);
    let resistance = ApproximateNumber::from_relative(220.0, 0.01);

    let current = voltage / resistance;
    let power = voltage * current;

    let expected_relative = 2.0 * voltage.relative_delta() + resistance.relative_delta();
    assert!((power.relative_delta() - expected_relative).abs() < 1e-12);
    assert!(power.contains(12.0 * 12.0 / 220.0));
}

#[test]
fn test_threshold_decisions() {
    let readings = [
        ("ok", parsed("71.0±0.5"), false),
        ("hot", parsed("76.0±0.5"), true),
        ("unclear", parsed("75.2±0.5"), false),
    ];
    let limit = 75.0;

    for (name, reading, alarm) in readings {
        assert_eq!(reading.greater_or_equal(limit), alarm, "{name}");
    }
    assert!(readings[2].1.overlaps(limit));
}

#[test]
fn test_concurrent_use() {
    let base = ApproximateNumber::new(2.0, 0.01);
    let handles: Vec<_> = (1..=4)
        .map(|k| std::thread::spawn(move || base.scale(f64::from(k)).sqrt()))
        .collect();

    for (k, handle) in (1..=4).zip(handles) {
        let root = handle.join().unwrap();
        assert!((root.value() - (2.0 * f64::from(k)).sqrt()).abs() < 1e-12);
    }
}
