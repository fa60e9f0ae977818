use pair_color_code::harness::{self, Check, Outcome};
use pair_color_code::manual::format_reference_manual;
use pair_color_code::{color_from_pair_number, pair_number_from_colors, pairs,
                      ColorPair, Error, PairNumber, Role};

#[test]
fn first_and_last_pairs() {
    assert_eq!(color_from_pair_number(1).unwrap().names(), ("White", "Blue"));
    assert_eq!(color_from_pair_number(25).unwrap().names(), ("Violet", "Slate"));
    assert_eq!(PairNumber::MIN.colors().names(), ("White", "Blue"));
    assert_eq!(PairNumber::MAX.colors().names(), ("Violet", "Slate"));
}

#[test]
fn rejected_inputs() {
    assert_eq!(color_from_pair_number(0), Err(Error::OutOfRange(0)));
    assert_eq!(color_from_pair_number(26), Err(Error::OutOfRange(26)));
    assert_eq!(PairNumber::try_from(26i64), Err(Error::OutOfRange(26)));
    assert_eq!(pair_number_from_colors("Pink", "Blue"),
               Err(Error::UnknownColor { color: "Pink".into(), role: Role::Major }));
    assert_eq!(ColorPair::new("White", "white"),
               Err(Error::UnknownColor { color: "white".into(), role: Role::Minor }));
}

#[test]
fn manual_lists_pairs_in_order() {
    let manual = format_reference_manual();
    let rows: Vec<_> = manual.lines().skip(4).collect();
    assert_eq!(rows.len(), 25);
    for (row, (n, pair)) in rows.iter().zip(pairs()) {
        let cols: Vec<_> = row.split(" | ").map(str::trim).collect();
        assert_eq!(cols, [n.to_string().as_str(), pair.major().name(),
                          pair.minor().name()]);
    }
}

#[test]
fn harness_passes() {
    let report = harness::run_all_tests();
    assert!(report.is_success(), "{report}");
    assert_eq!(report.failures().count(), 0);
}

#[test]
fn harness_reports_every_failure() {
    let report = harness::run_checks([
        Check::NumberToPair { number: 1, major: "Red", minor: "Blue" },
        Check::PairToNumber { major: "Red", minor: "Blue", number: 1 },
        Check::UnknownColor { major: "White", minor: "Blue", role: Role::Major },
    ]);
    assert_eq!(report.failed(), 3);
    assert!(!report.is_success());
    assert_eq!(report.results()[0].outcome,
               Outcome::Mismatch { found: "White Blue".into() });
    assert_eq!(report.results()[2].outcome,
               Outcome::Mismatch { found: "1".into() });
}

#[test]
fn single_case_helpers() {
    assert_eq!(harness::test_number_to_pair(4, "White", "Brown"), Outcome::Pass);
    assert_eq!(harness::test_pair_to_number("Black", "Orange", 12), Outcome::Pass);
    assert_eq!(harness::test_pair_to_number("Black", "Pink", 12),
               Outcome::Failed(Error::UnknownColor { color: "Pink".into(),
                                                     role: Role::Minor }));
}
