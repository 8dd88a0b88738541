//! Shot timestamp parsing.
//!
//! Two grammars are accepted, tried in order:
//! - bracketed minute:second, `[00:00-00:02]` (brackets optional, digits unpadded)
//! - plain seconds, `0.0s-2.0s` (fractions allowed)
//!
//! This is the only timestamp parser in the crate; the editor and the sequence
//! checker both go through [`parse_timestamp`].

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Which textual grammar a timestamp was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampForm {
    /// `[MM:SS-MM:SS]`
    BracketedMinSec,
    /// `X.Ys-Y.Ys`
    PlainSeconds,
}

/// Half-open interval `[start, end)` in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// `end - start`; negative when the range is inverted.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Formats as `[MM:SS-MM:SS]`. Fractional seconds are truncated.
    pub fn to_bracketed(&self) -> String {
        fn min_sec(total: f64) -> String {
            let whole = total.max(0.0) as u64;
            format!("{:02}:{:02}", whole / 60, whole % 60)
        }
        format!("[{}-{}]", min_sec(self.start), min_sec(self.end))
    }

    /// Formats as `X.Ys-Y.Ys`.
    pub fn to_seconds(&self) -> String {
        format!("{:.1}s-{:.1}s", self.start, self.end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bracketed())
    }
}

fn bracketed_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\[?([0-9]+):([0-9]+)-([0-9]+):([0-9]+)\]?$")
            .expect("bracketed timestamp regex should compile")
    })
}

fn seconds_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([0-9]+(?:\.[0-9]+)?)s-([0-9]+(?:\.[0-9]+)?)s$")
            .expect("seconds timestamp regex should compile")
    })
}

/// Parses a shot timestamp into its grammar and interval.
///
/// Returns `None` when neither grammar matches. No trimming is applied, and an
/// inverted range (`start >= end`) still parses; that is for the caller to judge.
pub fn parse_timestamp(timestamp: &str) -> Option<(TimestampForm, TimeRange)> {
    if let Some(caps) = bracketed_regex().captures(timestamp) {
        let field = |i: usize| caps[i].parse::<f64>().ok();
        let start = field(1)? * 60.0 + field(2)?;
        let end = field(3)? * 60.0 + field(4)?;
        return Some((TimestampForm::BracketedMinSec, TimeRange::new(start, end)));
    }

    if let Some(caps) = seconds_regex().captures(timestamp) {
        let start = caps[1].parse::<f64>().ok()?;
        let end = caps[2].parse::<f64>().ok()?;
        return Some((TimestampForm::PlainSeconds, TimeRange::new(start, end)));
    }

    None
}

/// Parses a shot timestamp, discarding which grammar matched.
pub fn parse_range(timestamp: &str) -> Option<TimeRange> {
    parse_timestamp(timestamp).map(|(_, range)| range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_grammars_agree() {
        let (form, range) = parse_timestamp("[00:02-00:05]").unwrap();
        assert_eq!(form, TimestampForm::BracketedMinSec);
        assert_eq!(range, TimeRange::new(2.0, 5.0));

        let (form, range) = parse_timestamp("2.0s-5.0s").unwrap();
        assert_eq!(form, TimestampForm::PlainSeconds);
        assert_eq!(range, TimeRange::new(2.0, 5.0));
    }

    #[test]
    fn test_bracket_variants() {
        assert_eq!(parse_range("00:00-00:02"), Some(TimeRange::new(0.0, 2.0)));
        assert_eq!(parse_range("[1:05-1:10]"), Some(TimeRange::new(65.0, 70.0)));
        // Each bracket is independently optional.
        assert_eq!(parse_range("[00:00-00:02"), Some(TimeRange::new(0.0, 2.0)));
    }

    #[test]
    fn test_fractional_seconds() {
        assert_eq!(parse_range("0.25s-1.5s"), Some(TimeRange::new(0.25, 1.5)));
        assert_eq!(parse_range("3s-4s"), Some(TimeRange::new(3.0, 4.0)));
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in [
            "bad",
            "",
            " [00:00-00:02]",
            "00:00.5-00:02",
            "0.0-2.0",
            "0.0s - 2.0s",
            ".5s-1s",
            "-1s-2s",
            "[00:00-00:02]]",
        ] {
            assert_eq!(parse_timestamp(bad), None, "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_inverted_range_still_parses() {
        let range = parse_range("[00:05-00:03]").unwrap();
        assert_eq!(range.duration(), -2.0);
    }

    #[test]
    fn test_formatting() {
        let range = TimeRange::new(65.0, 70.5);
        assert_eq!(range.to_bracketed(), "[01:05-01:10]");
        assert_eq!(range.to_seconds(), "65.0s-70.5s");
        assert_eq!(parse_range(&range.to_seconds()), Some(range));
    }
}
