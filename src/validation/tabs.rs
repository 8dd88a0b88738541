//! Per-section status for the builder's tab bar.
//!
//! A section is `Invalid` when any error or warning sits under one of its field
//! prefixes, otherwise `Valid` if it is meaningfully filled in, otherwise
//! `Incomplete`. This is a projection of an existing finding list and never
//! overrides it: a section holding an error can only ever be `Invalid`.

use serde::{Deserialize, Serialize};

use super::ValidationFinding;
use crate::prompt::model::{is_blank, PromptContent, PromptDocument};

/// Builder UI sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Settings,
    Cinematography,
    Core,
    Sequence,
    Audio,
    Advanced,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Settings,
        Section::Cinematography,
        Section::Core,
        Section::Sequence,
        Section::Audio,
        Section::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Settings => "settings",
            Section::Cinematography => "cinematography",
            Section::Core => "core",
            Section::Sequence => "sequence",
            Section::Audio => "audio",
            Section::Advanced => "advanced",
        }
    }

    /// Field path prefixes owned by this section.
    pub fn prefixes(self) -> &'static [&'static str] {
        match self {
            Section::Settings => &["video_length", "resolution", "aspect_ratio"],
            Section::Cinematography => &["prompt.cinematography"],
            Section::Core => &[
                "prompt.subject",
                "prompt.action",
                "prompt.context",
                "prompt.style_and_ambiance",
            ],
            Section::Sequence => &["prompt.sequence"],
            Section::Audio => &["prompt.audio"],
            Section::Advanced => &["prompt.creative_controls", "prompt.negative_prompt"],
        }
    }

    /// True if `field` falls under one of this section's prefixes.
    pub fn owns(self, field: &str) -> bool {
        self.prefixes().iter().any(|prefix| field.starts_with(prefix))
    }

    /// The section a finding's field belongs to; `None` for `general` and `prompt`.
    pub fn for_field(field: &str) -> Option<Section> {
        Self::ALL.into_iter().find(|section| section.owns(field))
    }
}

/// Status badge for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabStatus {
    Valid,
    Invalid,
    Incomplete,
}

/// Status of every section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStatuses {
    pub settings: TabStatus,
    pub cinematography: TabStatus,
    pub core: TabStatus,
    pub sequence: TabStatus,
    pub audio: TabStatus,
    pub advanced: TabStatus,
}

impl TabStatuses {
    pub fn get(&self, section: Section) -> TabStatus {
        match section {
            Section::Settings => self.settings,
            Section::Cinematography => self.cinematography,
            Section::Core => self.core,
            Section::Sequence => self.sequence,
            Section::Audio => self.audio,
            Section::Advanced => self.advanced,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, TabStatus)> + '_ {
        Section::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

fn is_filled(section: Section, document: &PromptDocument, content: &PromptContent) -> bool {
    match section {
        Section::Settings => {
            document.video_length.is_some_and(|len| len > 0.0)
                && document.resolution.as_deref().is_some_and(|r| !r.is_empty())
                && document.aspect_ratio.as_deref().is_some_and(|r| !r.is_empty())
        }
        Section::Cinematography => content
            .cinematography
            .as_ref()
            .is_some_and(|c| c.has_any()),
        Section::Core => content.core_fields().iter().all(|(_, v)| !is_blank(*v)),
        Section::Sequence => {
            content.sequence.is_empty()
                || content
                    .sequence
                    .iter()
                    .any(|shot| !is_blank(shot.shot_description.as_deref()))
        }
        Section::Audio => content.audio.as_ref().map_or(true, |audio| {
            !is_blank(audio.ambient_noise.as_deref())
                || !audio.dialogue.is_empty()
                || !audio.sound_effects.is_empty()
        }),
        Section::Advanced => true,
    }
}

/// Projects `findings` onto the builder's sections.
///
/// A signal on the bare `prompt` field (missing prompt content) covers every
/// section except settings. Otherwise a document without prompt content is
/// judged as if the content were empty.
pub fn tab_status(document: &PromptDocument, findings: &[ValidationFinding]) -> TabStatuses {
    let empty = PromptContent::default();
    let content = document.prompt.as_ref().unwrap_or(&empty);

    let owned_by = |section: Section, field: &str| {
        section.owns(field) || (field == "prompt" && section != Section::Settings)
    };

    let status = |section: Section| {
        let flagged = findings
            .iter()
            .any(|f| f.severity.is_signal() && owned_by(section, &f.field));
        if flagged {
            TabStatus::Invalid
        } else if is_filled(section, document, content) {
            TabStatus::Valid
        } else {
            TabStatus::Incomplete
        }
    };

    TabStatuses {
        settings: status(Section::Settings),
        cinematography: status(Section::Cinematography),
        core: status(Section::Core),
        sequence: status(Section::Sequence),
        audio: status(Section::Audio),
        advanced: status(Section::Advanced),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::model::{Audio, Cinematography, DialogueLine, ShotSegment};
    use crate::validation::{validate, Severity};

    fn filled() -> PromptDocument {
        let content = PromptContent::new()
            .with_cinematography(Cinematography::new().with_camera_movement("Slow pan"))
            .with_subject("A fox")
            .with_action("leaps over a frozen stream")
            .with_context("snowy birch forest")
            .with_style_and_ambiance("hushed, blue hour")
            .with_shot(ShotSegment::new(
                "[00:00-00:04]",
                "Slow pan across the birch trunks until the fox appears mid-leap.",
            ));
        PromptDocument::empty_template().with_prompt(content)
    }

    #[test]
    fn test_section_prefixes() {
        assert_eq!(
            Section::for_field("prompt.sequence[0] and sequence[1]"),
            Some(Section::Sequence)
        );
        assert_eq!(
            Section::for_field("prompt.audio.dialogue[0].speech"),
            Some(Section::Audio)
        );
        assert_eq!(Section::for_field("aspect_ratio"), Some(Section::Settings));
        assert_eq!(Section::for_field("general"), None);
        assert_eq!(Section::for_field("prompt"), None);
    }

    #[test]
    fn test_filled_document_all_valid() {
        let doc = filled();
        let result = validate(&doc);
        let tabs = tab_status(&doc, &result.findings);
        assert!(tabs.iter().all(|(_, status)| status == TabStatus::Valid), "{tabs:?}");
    }

    #[test]
    fn test_template_statuses() {
        let doc = PromptDocument::empty_template();
        let result = validate(&doc);
        let tabs = tab_status(&doc, &result.findings);

        assert_eq!(tabs.settings, TabStatus::Valid);
        assert_eq!(tabs.cinematography, TabStatus::Invalid);
        assert_eq!(tabs.core, TabStatus::Invalid);
        assert_eq!(tabs.sequence, TabStatus::Invalid);
        // Empty audio block: nothing flagged, nothing filled.
        assert_eq!(tabs.audio, TabStatus::Incomplete);
        assert_eq!(tabs.advanced, TabStatus::Valid);
    }

    #[test]
    fn test_info_does_not_invalidate() {
        let mut doc = filled();
        doc.prompt.as_mut().unwrap().negative_prompt =
            Some("no cars, no people, no signs, no wires".into());
        let result = validate(&doc);
        assert!(result
            .findings
            .iter()
            .any(|f| f.field == "prompt.negative_prompt" && f.severity == Severity::Info));
        assert_eq!(tab_status(&doc, &result.findings).advanced, TabStatus::Valid);
    }

    #[test]
    fn test_errors_never_project_as_valid() {
        let mut doc = filled();
        doc.prompt.as_mut().unwrap().audio = Some(
            Audio::new()
                .with_ambient_noise("wind")
                .with_dialogue(DialogueLine::new("", "hello there")),
        );
        let result = validate(&doc);
        let tabs = tab_status(&doc, &result.findings);
        for finding in result.findings.iter().filter(|f| f.severity == Severity::Error) {
            if let Some(section) = finding.section() {
                assert_eq!(tabs.get(section), TabStatus::Invalid);
            }
        }
        assert_eq!(tabs.audio, TabStatus::Invalid);
    }

    #[test]
    fn test_missing_prompt_content() {
        let mut doc = PromptDocument::empty_template();
        doc.prompt = None;
        let result = validate(&doc);
        let tabs = tab_status(&doc, &result.findings);
        assert_eq!(tabs.settings, TabStatus::Valid);
        for (section, status) in tabs.iter().filter(|(s, _)| *s != Section::Settings) {
            assert_eq!(status, TabStatus::Invalid, "{section:?}");
        }
    }

    #[test]
    fn test_missing_prompt_keeps_settings_findings() {
        let mut doc = PromptDocument::empty_template().with_resolution("4k");
        doc.prompt = None;
        let result = validate(&doc);
        let tabs = tab_status(&doc, &result.findings);
        assert_eq!(tabs.settings, TabStatus::Invalid);
        assert_eq!(tabs.sequence, TabStatus::Invalid);
        assert_eq!(tabs.advanced, TabStatus::Invalid);
    }
}
