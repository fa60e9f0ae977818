//! Runtime check of the conversions over the whole code.
//!
//! Every case is run and recorded in a [`Report`]; a failing case
//! does not stop the others.

use std::fmt;
use log::{debug, info, warn};
use crate::palettes::{MAJOR, MINOR};
use crate::{color_from_pair_number, pair_number_from_colors, Error, Role,
            PAIR_COUNT};

/// One case of the harness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Check {
    /// `number` must convert to (`major`, `minor`).
    NumberToPair { number: i64, major: &'static str, minor: &'static str },
    /// (`major`, `minor`) must convert to `number`.
    PairToNumber { major: &'static str, minor: &'static str, number: i64 },
    /// `number` must be rejected with [`Error::OutOfRange`].
    OutOfRange { number: i64 },
    /// The pair must be rejected with [`Error::UnknownColor`] for `role`.
    UnknownColor { major: &'static str, minor: &'static str, role: Role },
}

impl Check {
    /// Run the case.
    pub fn run(&self) -> Outcome {
        match *self {
            Check::NumberToPair { number, major, minor } =>
                test_number_to_pair(number, major, minor),
            Check::PairToNumber { major, minor, number } =>
                test_pair_to_number(major, minor, number),
            Check::OutOfRange { number } => {
                match color_from_pair_number(number) {
                    Err(Error::OutOfRange(n)) if n == number => Outcome::Pass,
                    Err(e) => Outcome::Mismatch { found: e.to_string() },
                    Ok(pair) => Outcome::Mismatch { found: pair.to_string() },
                }
            }
            Check::UnknownColor { major, minor, role } => {
                match pair_number_from_colors(major, minor) {
                    Err(Error::UnknownColor { role: r, .. }) if r == role =>
                        Outcome::Pass,
                    Err(e) => Outcome::Mismatch { found: e.to_string() },
                    Ok(n) => Outcome::Mismatch { found: n.to_string() },
                }
            }
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::NumberToPair { number, major, minor } =>
                write!(f, "number_to_pair({number}) = {major} {minor}"),
            Check::PairToNumber { major, minor, number } =>
                write!(f, "pair_to_number({major}, {minor}) = {number}"),
            Check::OutOfRange { number } =>
                write!(f, "number_to_pair({number}) is out of range"),
            Check::UnknownColor { major, minor, role } =>
                write!(f, "pair_to_number({major}, {minor}) has an unknown \
                           {role} color"),
        }
    }
}

/// Result of running one [`Check`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    /// The conversion succeeded with another value.
    Mismatch { found: String },
    /// The conversion failed unexpectedly.
    Failed(Error),
}

impl Outcome {
    pub fn is_pass(&self) -> bool { matches!(self, Outcome::Pass) }
}

/// Check that `number` converts to (`major`, `minor`).
pub fn test_number_to_pair(number: i64, major: &str, minor: &str) -> Outcome {
    match color_from_pair_number(number) {
        Ok(pair) if pair.names() == (major, minor) => Outcome::Pass,
        Ok(pair) => Outcome::Mismatch { found: pair.to_string() },
        Err(e) => Outcome::Failed(e),
    }
}

/// Check that (`major`, `minor`) converts to `number`.
pub fn test_pair_to_number(major: &str, minor: &str, number: i64) -> Outcome {
    match pair_number_from_colors(major, minor) {
        Ok(n) if i64::from(n.get()) == number => Outcome::Pass,
        Ok(n) => Outcome::Mismatch { found: n.to_string() },
        Err(e) => Outcome::Failed(e),
    }
}

/// Expected names of pair `number` ∈ 1..=25, read off the palettes
/// with the index formula.
fn expected_names(number: usize) -> (&'static str, &'static str) {
    let zero_based = number - 1;
    (MAJOR.colors[zero_based / MINOR.colors.len()].name,
     MINOR.colors[zero_based % MINOR.colors.len()].name)
}

/// All pair numbers, followed by the boundaries and a few known pairs.
pub fn number_to_pair_cases() -> Vec<Check> {
    let mut cases: Vec<_> = (1 ..= PAIR_COUNT).map(|n| {
        let (major, minor) = expected_names(n);
        Check::NumberToPair { number: n as i64, major, minor }
    }).collect();
    for (number, major, minor) in [(1, "White", "Blue"),
                                   (4, "White", "Brown"),
                                   (5, "White", "Slate"),
                                   (25, "Violet", "Slate")] {
        cases.push(Check::NumberToPair { number, major, minor });
    }
    cases
}

/// The 5 × 5 cross product of the palettes, followed by a few known
/// pairs.
pub fn pair_to_number_cases() -> Vec<Check> {
    let mut cases = Vec::with_capacity(PAIR_COUNT + 3);
    for (i, major) in MAJOR.colors.iter().enumerate() {
        for (j, minor) in MINOR.colors.iter().enumerate() {
            let number = (i * MINOR.colors.len() + j + 1) as i64;
            cases.push(Check::PairToNumber { major: major.name,
                                             minor: minor.name, number });
        }
    }
    for (major, minor, number) in [("Black", "Orange", 12),
                                   ("Violet", "Slate", 25),
                                   ("Red", "Orange", 7)] {
        cases.push(Check::PairToNumber { major, minor, number });
    }
    cases
}

/// Inputs that must be rejected.
pub fn error_cases() -> Vec<Check> {
    vec![Check::OutOfRange { number: 0 },
         Check::OutOfRange { number: PAIR_COUNT as i64 + 1 },
         Check::UnknownColor { major: "Pink", minor: "Blue", role: Role::Major },
         Check::UnknownColor { major: "White", minor: "Pink", role: Role::Minor }]
}

/// A [`Check`] together with its [`Outcome`].
#[derive(Clone, Debug)]
pub struct CaseResult {
    pub check: Check,
    pub outcome: Outcome,
}

/// Results of a harness run.
#[derive(Clone, Debug, Default)]
pub struct Report {
    results: Vec<CaseResult>,
}

impl Report {
    pub fn results(&self) -> &[CaseResult] { &self.results }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_pass()).count()
    }

    pub fn failed(&self) -> usize { self.results.len() - self.passed() }

    pub fn is_success(&self) -> bool { self.failed() == 0 }

    /// Iterate over the cases that did not pass.
    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results.iter().filter(|r| !r.outcome.is_pass())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in &self.results {
            match &r.outcome {
                Outcome::Pass => writeln!(f, "test {} ... ok", r.check)?,
                Outcome::Mismatch { found } =>
                    writeln!(f, "test {} ... FAILED (found {found})", r.check)?,
                Outcome::Failed(e) =>
                    writeln!(f, "test {} ... FAILED ({e})", r.check)?,
            }
        }
        let status = if self.is_success() { "ok" } else { "FAILED" };
        writeln!(f, "\ntest result: {status}. {} passed; {} failed",
                 self.passed(), self.failed())
    }
}

/// Run `checks` in order, collecting every outcome.
pub fn run_checks(checks: impl IntoIterator<Item = Check>) -> Report {
    let results: Vec<_> = checks.into_iter().map(|check| {
        let outcome = check.run();
        if outcome.is_pass() {
            debug!("{check}: ok");
        } else {
            warn!("{check}: {outcome:?}");
        }
        CaseResult { check, outcome }
    }).collect();
    let report = Report { results };
    info!("{} passed; {} failed", report.passed(), report.failed());
    report
}

/// Run the number → pair, pair → number and rejection cases.
pub fn run_all_tests() -> Report {
    run_checks(number_to_pair_cases().into_iter()
               .chain(pair_to_number_cases())
               .chain(error_cases()))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_cases_pass() {
        let report = run_all_tests();
        assert!(report.is_success(), "{report}");
        assert_eq!(report.results().len(), 29 + 28 + 4);
        assert_eq!(report.passed(), report.results().len());
    }

    #[test]
    fn covers_domain() {
        let numbers: Vec<i64> = number_to_pair_cases().iter()
            .take(PAIR_COUNT)
            .map(|c| match c { Check::NumberToPair { number, .. } => *number,
                               _ => 0 })
            .collect();
        assert_eq!(numbers, (1 ..= 25).collect::<Vec<i64>>());
        assert_eq!(expected_names(12), ("Black", "Orange"));
    }

    #[test]
    fn failures_are_collected() {
        let report = run_checks([
            Check::NumberToPair { number: 2, major: "White", minor: "Blue" },
            Check::NumberToPair { number: 30, major: "White", minor: "Blue" },
            Check::PairToNumber { major: "Red", minor: "Blue", number: 6 },
            Check::OutOfRange { number: 3 },
        ]);
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 3);
        let outcomes: Vec<_> = report.failures().map(|r| &r.outcome).collect();
        assert_eq!(outcomes[0], &Outcome::Mismatch { found: "White Orange".into() });
        assert_eq!(outcomes[1], &Outcome::Failed(Error::OutOfRange(30)));
        assert_eq!(outcomes[2], &Outcome::Mismatch { found: "White Green".into() });
    }

    #[test]
    fn report_display() {
        let report = run_checks([
            Check::PairToNumber { major: "Black", minor: "Orange", number: 12 },
            Check::PairToNumber { major: "Pink", minor: "Blue", number: 1 },
        ]);
        let text = report.to_string();
        assert!(text.contains("test pair_to_number(Black, Orange) = 12 ... ok\n"));
        assert!(text.contains("... FAILED (unknown major color “Pink”)"));
        assert!(text.ends_with("test result: FAILED. 1 passed; 1 failed\n"));
    }
}
