//! In-memory prompt editor.
//!
//! `PromptEditor` owns a [`PromptDocument`] and exposes the edits the builder UI
//! performs (add/update/delete/reorder shots, dialogue lines and sound effects,
//! cinematography toggles, settings) plus the derived views it renders
//! (completion badges, timeline end, validation and tab status).
//!
//! # Caching Strategy
//!
//! The last [`ValidationResult`] is cached and dropped on any mutation, so a UI
//! can call `validate()` on every render without re-running the checkers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::model::{
    is_blank, Audio, Cinematography, CreativeControls, CreativeMode, DialogueLine,
    PromptContent, PromptDocument, ShotSegment,
};
use super::settings::{AspectRatio, Resolution, VideoLength};
use super::templates;
use crate::error::{PromptError, PromptResult};
use crate::validation::{self, parse_range, TabStatuses, TimeRange, ValidationResult};

/// Seconds covered by a shot appended with [`PromptEditor::add_next_shot`].
const NEXT_SHOT_SECONDS: f64 = 2.0;

// =============================================================================
// FIELD SELECTORS
// =============================================================================

macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $key:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// JSON key of the field.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = PromptError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok($name::$variant),)+
                    other => Err(PromptError::field_not_found(other)),
                }
            }
        }
    };
}

field_enum! {
    /// Editable text fields of a shot.
    ShotField {
        Timestamp => "timestamp",
        ShotDescription => "shot_description",
        Emotion => "emotion",
        Sfx => "sfx",
    }
}

field_enum! {
    /// Editable text fields of a dialogue line.
    DialogueField {
        Character => "character",
        Speech => "speech",
        VoiceDescription => "voice_description",
    }
}

field_enum! {
    /// Cinematography fields; each may hold a comma-joined list.
    CinematographyField {
        CameraMovement => "camera_movement",
        Composition => "composition",
        LensAndFocus => "lens_and_focus",
    }
}

field_enum! {
    /// The four core formula fields.
    CoreField {
        Subject => "subject",
        Action => "action",
        Context => "context",
        StyleAndAmbiance => "style_and_ambiance",
    }
}

impl ShotField {
    fn slot(self, shot: &mut ShotSegment) -> &mut Option<String> {
        match self {
            ShotField::Timestamp => &mut shot.timestamp,
            ShotField::ShotDescription => &mut shot.shot_description,
            ShotField::Emotion => &mut shot.emotion,
            ShotField::Sfx => &mut shot.sfx,
        }
    }
}

impl DialogueField {
    fn slot(self, line: &mut DialogueLine) -> &mut Option<String> {
        match self {
            DialogueField::Character => &mut line.character,
            DialogueField::Speech => &mut line.speech,
            DialogueField::VoiceDescription => &mut line.voice_description,
        }
    }
}

impl CinematographyField {
    fn slot(self, cinematography: &mut Cinematography) -> &mut Option<String> {
        match self {
            CinematographyField::CameraMovement => &mut cinematography.camera_movement,
            CinematographyField::Composition => &mut cinematography.composition,
            CinematographyField::LensAndFocus => &mut cinematography.lens_and_focus,
        }
    }
}

impl CoreField {
    fn slot(self, content: &mut PromptContent) -> &mut Option<String> {
        match self {
            CoreField::Subject => &mut content.subject,
            CoreField::Action => &mut content.action,
            CoreField::Context => &mut content.context,
            CoreField::StyleAndAmbiance => &mut content.style_and_ambiance,
        }
    }
}

// =============================================================================
// DERIVED VIEWS
// =============================================================================

/// Completion badge for the sequence section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotCompletion {
    /// Every shot has a description (vacuously true for no shots).
    Complete,
    /// Some, but not all, shots have a description.
    Partial,
    /// No shot has a description.
    Empty,
}

/// Completion badge for the audio section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioCompletion {
    Complete,
    Empty,
}

/// Toggles `value` in a comma-separated list. Entries are trimmed and empty
/// entries dropped; the result is re-joined with `", "`.
pub fn toggle_list_value(current: &str, value: &str) -> String {
    let mut values: Vec<&str> = current
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect();

    if values.contains(&value) {
        values.retain(|v| *v != value);
    } else {
        values.push(value);
    }
    values.join(", ")
}

fn check_index(list: &'static str, index: usize, length: usize) -> PromptResult<()> {
    if index < length {
        Ok(())
    } else {
        Err(PromptError::index_out_of_bounds(list, index, length))
    }
}

// =============================================================================
// EDITOR
// =============================================================================

/// Owns one prompt document and applies builder edits to it.
#[derive(Debug, Clone)]
pub struct PromptEditor {
    document: PromptDocument,
    /// Last validation result, invalidated on any mutation.
    cached_result: Option<ValidationResult>,
}

impl PromptEditor {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Creates an editor holding [`PromptDocument::empty_template`].
    pub fn new() -> Self {
        Self::from_document(PromptDocument::empty_template())
    }

    pub fn from_document(document: PromptDocument) -> Self {
        Self {
            document,
            cached_result: None,
        }
    }

    /// Starts from the built-in template `id` (see [`templates::TEMPLATES`]).
    pub fn from_template(id: &str) -> PromptResult<Self> {
        let document = templates::template_document(id)?;
        debug!(template = id, "loaded built-in template");
        Ok(Self::from_document(document))
    }

    /// Loads a document from JSON text.
    pub fn from_json(json: &str) -> PromptResult<Self> {
        let document: PromptDocument = serde_json::from_str(json)?;
        debug!(
            shots = document.prompt.as_ref().map_or(0, |p| p.sequence.len()),
            "loaded prompt document"
        );
        Ok(Self::from_document(document))
    }

    /// Serializes the document to JSON text.
    pub fn to_json(&self) -> PromptResult<String> {
        Ok(serde_json::to_string(&self.document)?)
    }

    /// Serializes the document to indented JSON text.
    pub fn to_json_pretty(&self) -> PromptResult<String> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }

    pub fn document(&self) -> &PromptDocument {
        &self.document
    }

    pub fn into_document(self) -> PromptDocument {
        self.document
    }

    /// Applies an arbitrary mutation to the document.
    pub fn update_document<F>(&mut self, f: F)
    where
        F: FnOnce(&mut PromptDocument),
    {
        self.cached_result = None;
        f(&mut self.document);
    }

    fn content_mut(&mut self) -> &mut PromptContent {
        self.cached_result = None;
        self.document.prompt.get_or_insert_with(PromptContent::default)
    }

    fn audio_mut(&mut self) -> &mut Audio {
        self.content_mut().audio.get_or_insert_with(Audio::default)
    }

    fn content(&self) -> Option<&PromptContent> {
        self.document.prompt.as_ref()
    }

    fn shots(&self) -> &[ShotSegment] {
        self.content()
            .map(|c| c.sequence.as_slice())
            .unwrap_or_default()
    }

    // =========================================================================
    // SETTINGS
    // =========================================================================

    pub fn set_video_length(&mut self, length: VideoLength) {
        self.update_document(|doc| doc.video_length = Some(length.seconds() as f64));
    }

    pub fn set_resolution(&mut self, resolution: Resolution) {
        self.update_document(|doc| doc.resolution = Some(resolution.to_string()));
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: AspectRatio) {
        self.update_document(|doc| doc.aspect_ratio = Some(aspect_ratio.to_string()));
    }

    // =========================================================================
    // CORE FORMULA & ADVANCED
    // =========================================================================

    pub fn set_core_field(&mut self, field: CoreField, value: impl Into<String>) {
        *field.slot(self.content_mut()) = Some(value.into());
    }

    pub fn set_negative_prompt(&mut self, value: impl Into<String>) {
        self.content_mut().negative_prompt = Some(value.into());
    }

    pub fn set_notes(&mut self, value: impl Into<String>) {
        self.content_mut().notes = Some(value.into());
    }

    /// Sets the creative workflow, keeping any reference images and notes.
    pub fn set_creative_mode(&mut self, mode: CreativeMode) {
        let controls = self
            .content_mut()
            .creative_controls
            .get_or_insert_with(CreativeControls::default);
        controls.mode = Some(mode.as_str().to_string());
    }

    // =========================================================================
    // CINEMATOGRAPHY
    // =========================================================================

    /// Overwrites a cinematography field with free text.
    pub fn set_cinematography(&mut self, field: CinematographyField, value: impl Into<String>) {
        let cinematography = self
            .content_mut()
            .cinematography
            .get_or_insert_with(Cinematography::default);
        *field.slot(cinematography) = Some(value.into());
    }

    /// Adds `value` to the field's comma list, or removes it if already present.
    pub fn toggle_cinematography_value(&mut self, field: CinematographyField, value: &str) {
        let cinematography = self
            .content_mut()
            .cinematography
            .get_or_insert_with(Cinematography::default);
        let slot = field.slot(cinematography);
        let toggled = toggle_list_value(slot.as_deref().unwrap_or(""), value);
        *slot = Some(toggled);
    }

    // =========================================================================
    // SEQUENCE
    // =========================================================================

    /// Appends a shot.
    pub fn add_shot(&mut self, shot: ShotSegment) {
        self.content_mut().sequence.push(shot);
    }

    /// Appends an empty shot starting where the last declared shot ends and
    /// lasting two seconds, clamped to the video length. Returns its index.
    pub fn add_next_shot(&mut self) -> usize {
        let last_end = self
            .shots()
            .last()
            .and_then(|shot| parse_range(shot.timestamp.as_deref()?))
            .map_or(0.0, |range| range.end);
        let end = match self.document.video_length {
            Some(length) => (last_end + NEXT_SHOT_SECONDS).min(length),
            None => last_end + NEXT_SHOT_SECONDS,
        };

        let timestamp = TimeRange::new(last_end, end).to_bracketed();
        let sequence = &mut self.content_mut().sequence;
        sequence.push(ShotSegment::new(timestamp, ""));
        sequence.len() - 1
    }

    pub fn update_shot(
        &mut self,
        index: usize,
        field: ShotField,
        value: impl Into<String>,
    ) -> PromptResult<()> {
        check_index("sequence", index, self.shots().len())?;
        let shot = &mut self.content_mut().sequence[index];
        *field.slot(shot) = Some(value.into());
        Ok(())
    }

    pub fn delete_shot(&mut self, index: usize) -> PromptResult<()> {
        check_index("sequence", index, self.shots().len())?;
        self.content_mut().sequence.remove(index);
        Ok(())
    }

    /// Moves the shot at `from` so that it ends up at index `to`.
    pub fn reorder_shot(&mut self, from: usize, to: usize) -> PromptResult<()> {
        let len = self.shots().len();
        check_index("sequence", from, len)?;
        check_index("sequence", to, len)?;
        if from != to {
            let sequence = &mut self.content_mut().sequence;
            let shot = sequence.remove(from);
            sequence.insert(to, shot);
        }
        Ok(())
    }

    // =========================================================================
    // AUDIO
    // =========================================================================

    fn dialogue_len(&self) -> usize {
        self.content()
            .and_then(|c| c.audio.as_ref())
            .map_or(0, |a| a.dialogue.len())
    }

    fn sound_effects_len(&self) -> usize {
        self.content()
            .and_then(|c| c.audio.as_ref())
            .map_or(0, |a| a.sound_effects.len())
    }

    /// Appends a blank dialogue line. Returns its index.
    pub fn add_dialogue(&mut self) -> usize {
        let dialogue = &mut self.audio_mut().dialogue;
        dialogue.push(DialogueLine::blank());
        dialogue.len() - 1
    }

    pub fn update_dialogue(
        &mut self,
        index: usize,
        field: DialogueField,
        value: impl Into<String>,
    ) -> PromptResult<()> {
        check_index("dialogue", index, self.dialogue_len())?;
        let line = &mut self.audio_mut().dialogue[index];
        *field.slot(line) = Some(value.into());
        Ok(())
    }

    pub fn delete_dialogue(&mut self, index: usize) -> PromptResult<()> {
        check_index("dialogue", index, self.dialogue_len())?;
        self.audio_mut().dialogue.remove(index);
        Ok(())
    }

    /// Appends an empty sound effect. Returns its index.
    pub fn add_sound_effect(&mut self) -> usize {
        let effects = &mut self.audio_mut().sound_effects;
        effects.push(String::new());
        effects.len() - 1
    }

    pub fn update_sound_effect(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> PromptResult<()> {
        check_index("sound_effects", index, self.sound_effects_len())?;
        self.audio_mut().sound_effects[index] = value.into();
        Ok(())
    }

    pub fn delete_sound_effect(&mut self, index: usize) -> PromptResult<()> {
        check_index("sound_effects", index, self.sound_effects_len())?;
        self.audio_mut().sound_effects.remove(index);
        Ok(())
    }

    pub fn set_ambient_noise(&mut self, value: impl Into<String>) {
        self.audio_mut().ambient_noise = Some(value.into());
    }

    // =========================================================================
    // DERIVED VIEWS
    // =========================================================================

    pub fn shot_completion(&self) -> ShotCompletion {
        let shots = self.shots();
        let described = shots
            .iter()
            .filter(|shot| !is_blank(shot.shot_description.as_deref()))
            .count();

        if described == shots.len() {
            ShotCompletion::Complete
        } else if described > 0 {
            ShotCompletion::Partial
        } else {
            ShotCompletion::Empty
        }
    }

    pub fn audio_completion(&self) -> AudioCompletion {
        let has_audio = self
            .content()
            .and_then(|c| c.audio.as_ref())
            .is_some_and(|audio| {
                !audio.dialogue.is_empty()
                    || !audio.sound_effects.is_empty()
                    || !is_blank(audio.ambient_noise.as_deref())
            });

        if has_audio {
            AudioCompletion::Complete
        } else {
            AudioCompletion::Empty
        }
    }

    /// Largest parsed end time across all shots; `0` when none parses.
    pub fn timeline_end(&self) -> f64 {
        self.shots()
            .iter()
            .filter_map(|shot| parse_range(shot.timestamp.as_deref()?))
            .map(|range| range.end)
            .fold(0.0, f64::max)
    }

    /// Validates the document, reusing the cached result when nothing changed.
    pub fn validate(&mut self) -> ValidationResult {
        if let Some(ref cached) = self.cached_result {
            return cached.clone();
        }
        let result = validation::validate(&self.document);
        self.cached_result = Some(result.clone());
        result
    }

    pub fn tab_status(&mut self) -> TabStatuses {
        let result = self.validate();
        validation::tab_status(&self.document, &result.findings)
    }
}

impl Default for PromptEditor {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
