//! Thresholds and fixed vocabularies used by the checkers.

/// Clip lengths accepted by the generation API, in seconds.
pub const SUPPORTED_VIDEO_LENGTHS: [f64; 3] = [4.0, 6.0, 8.0];

/// Accepted resolution strings.
pub const SUPPORTED_RESOLUTIONS: [&str; 2] = ["720p", "1080p"];

/// Accepted aspect ratio strings.
pub const SUPPORTED_ASPECT_RATIOS: [&str; 2] = ["16:9", "9:16"];

/// Speaking rate used to estimate dialogue duration.
pub const WORDS_PER_SECOND: f64 = 2.5;

/// Shots shorter than this (seconds) may not render.
pub const MIN_SHOT_SECONDS: f64 = 0.5;

/// Gaps between consecutive shots above this (seconds) are reported.
pub const MAX_SILENT_GAP_SECONDS: f64 = 0.5;

/// Shot descriptions shorter than this (characters) are flagged.
pub const MIN_SHOT_DESCRIPTION_CHARS: usize = 30;

/// More "no X" phrases than this in a negative prompt triggers a hint.
pub const MAX_NO_PHRASES: usize = 3;

/// Top-level keys a candidate document must carry to be recognized.
pub const REQUIRED_TOP_LEVEL_KEYS: [&str; 3] = ["video_length", "aspect_ratio", "prompt"];
