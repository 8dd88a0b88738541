//! Cinematography checker. The block is optional; once present it should say something.

use super::ValidationFinding;
use crate::prompt::model::PromptContent;

pub fn check(content: &PromptContent) -> Vec<ValidationFinding> {
    match &content.cinematography {
        Some(cinematography) if !cinematography.has_any() => vec![ValidationFinding::warning(
            "prompt.cinematography",
            "At least one cinematography element recommended (camera movement, composition, or lens & focus)",
        )],
        _ => Vec::new(),
    }
}
