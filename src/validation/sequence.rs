//! Sequence checker: per-shot timestamps and descriptions, then timeline
//! continuity across shots.
//!
//! Shots are declared in the user's intended order, which need not be
//! chronological. Continuity is therefore checked on the parsed intervals
//! sorted by start time (stable, so shots sharing a start keep declaration
//! order), comparing each interval with its successor:
//! - `end > next.start` is an overlap (warning)
//! - `end < next.start` by more than [`MAX_SILENT_GAP_SECONDS`] is a gap (info)
//! - `end == next.start` is the expected contiguous case

use super::rules::{MAX_SILENT_GAP_SECONDS, MIN_SHOT_DESCRIPTION_CHARS, MIN_SHOT_SECONDS};
use super::timestamp::{parse_range, TimeRange};
use super::{caps_lock_words, one_decimal, ValidationFinding};
use crate::prompt::model::{is_blank, PromptContent, ShotSegment};

/// A shot whose timestamp parsed, keyed by its declaration index.
#[derive(Debug, Clone, Copy)]
struct ParsedShot {
    index: usize,
    range: TimeRange,
}

fn check_timestamp(
    shot: &ShotSegment,
    index: usize,
    video_length: Option<f64>,
) -> Vec<ValidationFinding> {
    let field = format!("prompt.sequence[{index}].timestamp");
    let n = index + 1;

    let timestamp = match shot.timestamp.as_deref() {
        Some(ts) if !ts.trim().is_empty() => ts,
        _ => {
            return vec![ValidationFinding::error(
                field,
                format!("Shot {n}: Timestamp is required"),
            )]
        }
    };

    let Some(range) = parse_range(timestamp) else {
        return vec![ValidationFinding::error(
            field,
            format!("Shot {n}: Invalid timestamp format. Use [00:00-00:02] or 0.0s-2.0s"),
        )];
    };

    let mut findings = Vec::new();

    if range.start >= range.end {
        findings.push(ValidationFinding::error(
            field.clone(),
            format!("Shot {n}: Start time must be before end time"),
        ));
    }

    if let Some(length) = video_length {
        if range.end > length {
            findings.push(ValidationFinding::warning(
                field.clone(),
                format!(
                    "Shot {n}: End time ({}s) exceeds video length ({length}s)",
                    range.end
                ),
            ));
        }
    }

    let duration = range.duration();
    if duration < MIN_SHOT_SECONDS {
        findings.push(ValidationFinding::warning(
            field,
            format!(
                "Shot {n}: Shot duration ({}s) is very short - may not render well",
                one_decimal(duration)
            ),
        ));
    }

    findings
}

fn check_description(shot: &ShotSegment, index: usize) -> Vec<ValidationFinding> {
    let field = format!("prompt.sequence[{index}].shot_description");
    let n = index + 1;

    let description = match shot.shot_description.as_deref() {
        Some(desc) if !is_blank(Some(desc)) => desc,
        _ => {
            return vec![ValidationFinding::error(
                field,
                format!("Shot {n}: Shot description is required"),
            )]
        }
    };

    let mut findings = Vec::new();

    if description.chars().count() < MIN_SHOT_DESCRIPTION_CHARS {
        findings.push(ValidationFinding::warning(
            field.clone(),
            format!("Shot {n}: Description is too short. Be more detailed and specific."),
        ));
    }

    let caps = caps_lock_words(description);
    if !caps.is_empty() {
        findings.push(ValidationFinding::info(
            field,
            format!("Shot {n}: Avoid caps lock words ({})", caps.join(", ")),
        ));
    }

    findings
}

fn check_continuity(mut shots: Vec<ParsedShot>) -> Vec<ValidationFinding> {
    shots.sort_by(|a, b| a.range.start.total_cmp(&b.range.start));

    let mut findings = Vec::new();
    for pair in shots.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let field = format!(
            "prompt.sequence[{}] and sequence[{}]",
            current.index, next.index
        );

        if current.range.end > next.range.start {
            findings.push(ValidationFinding::warning(
                field,
                format!(
                    "Timeline overlap: Shot {} (ends {}s) overlaps with Shot {} (starts {}s)",
                    current.index + 1,
                    current.range.end,
                    next.index + 1,
                    next.range.start
                ),
            ));
        } else if current.range.end < next.range.start {
            let gap = next.range.start - current.range.end;
            if gap > MAX_SILENT_GAP_SECONDS {
                findings.push(ValidationFinding::info(
                    field,
                    format!(
                        "Timeline gap: {}s gap between Shot {} and Shot {}",
                        one_decimal(gap),
                        current.index + 1,
                        next.index + 1
                    ),
                ));
            }
        }
    }

    findings
}

/// Checks the shot sequence against the document's raw video length.
pub fn check(content: &PromptContent, video_length: Option<f64>) -> Vec<ValidationFinding> {
    if content.sequence.is_empty() {
        return vec![ValidationFinding::error(
            "prompt.sequence",
            "At least one sequence shot is required",
        )];
    }

    let mut findings = Vec::new();
    for (index, shot) in content.sequence.iter().enumerate() {
        findings.extend(check_timestamp(shot, index, video_length));
        findings.extend(check_description(shot, index));
    }

    let parsed: Vec<ParsedShot> = content
        .sequence
        .iter()
        .enumerate()
        .filter_map(|(index, shot)| {
            let range = parse_range(shot.timestamp.as_deref()?)?;
            Some(ParsedShot { index, range })
        })
        .collect();

    findings.extend(check_continuity(parsed));
    findings
}
