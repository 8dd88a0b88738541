//! Video settings checker: length, resolution, aspect ratio.

use super::rules::{SUPPORTED_ASPECT_RATIOS, SUPPORTED_RESOLUTIONS, SUPPORTED_VIDEO_LENGTHS};
use super::ValidationFinding;
use crate::prompt::model::PromptDocument;

pub fn check(document: &PromptDocument) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();

    let length_ok = document
        .video_length
        .is_some_and(|len| SUPPORTED_VIDEO_LENGTHS.contains(&len));
    if !length_ok {
        findings.push(ValidationFinding::error(
            "video_length",
            "Video length must be 4, 6, or 8 seconds (Veo 3.1 supported lengths)",
        ));
    }

    let resolution_ok = document
        .resolution
        .as_deref()
        .is_some_and(|r| SUPPORTED_RESOLUTIONS.contains(&r));
    if !resolution_ok {
        findings.push(ValidationFinding::error(
            "resolution",
            "Resolution must be 720p or 1080p",
        ));
    }

    let aspect_ok = document
        .aspect_ratio
        .as_deref()
        .is_some_and(|r| SUPPORTED_ASPECT_RATIOS.contains(&r));
    if !aspect_ok {
        findings.push(ValidationFinding::error(
            "aspect_ratio",
            "Aspect ratio must be 16:9 or 9:16",
        ));
    }

    findings
}
