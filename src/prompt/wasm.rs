//! WASM bindings for the prompt module.
//!
//! This module provides JavaScript-friendly wrappers around `PromptEditor` and
//! the validation entry points for use in the browser builder.

use js_sys::Array;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use super::editor::{CinematographyField, CoreField, DialogueField, PromptEditor, ShotField};
use super::model::{CreativeMode, PromptDocument, ShotSegment};
use super::settings::{AspectRatio, Resolution, VideoLength};
use super::templates;
use crate::error::PromptError;
use crate::validation;

/// Serialize a value to JsValue with maps as plain JS objects (not Map).
fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&Serializer::new().serialize_maps_as_objects(true))
}

// =============================================================================
// ERROR CONVERSION
// =============================================================================

impl From<PromptError> for JsValue {
    fn from(err: PromptError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// Helper macro for Result conversion
macro_rules! js_result {
    ($expr:expr) => {
        $expr.map_err(|e: PromptError| JsValue::from(e))
    };
}

// =============================================================================
// FREE FUNCTIONS
// =============================================================================

/// Validates any JS value as a prompt document.
///
/// Returns `{ is_valid, findings: [{ field, message, severity }] }`. Objects of
/// an unrecognized shape yield a single `general` error rather than throwing.
///
/// # Example (JavaScript)
/// ```js
/// const result = validatePrompt(JSON.parse(text));
/// if (!result.is_valid) showErrors(result.findings);
/// ```
#[wasm_bindgen(js_name = validatePrompt)]
pub fn validate_prompt(candidate: JsValue) -> Result<JsValue, JsValue> {
    let value: serde_json::Value = from_value(candidate)?;
    let result = validation::validate_value(&value);
    Ok(to_js_value(&result)?)
}

/// Returns the per-section badge map for a prompt document.
///
/// Throws when the value cannot be read as a prompt document.
#[wasm_bindgen(js_name = tabStatus)]
pub fn tab_status(document: JsValue) -> Result<JsValue, JsValue> {
    let document: PromptDocument = from_value(document)?;
    let result = validation::validate(&document);
    let tabs = validation::tab_status(&document, &result.findings);
    Ok(to_js_value(&tabs)?)
}

/// Parses a shot timestamp. Returns `{ start, end }` in seconds, or null.
///
/// # Example (JavaScript)
/// ```js
/// parseTimestamp('[00:02-00:05]'); // { start: 2, end: 5 }
/// parseTimestamp('2-5');           // null
/// ```
#[wasm_bindgen(js_name = parseTimestamp)]
pub fn parse_timestamp(timestamp: &str) -> Result<JsValue, JsValue> {
    match validation::parse_range(timestamp) {
        Some(range) => Ok(to_js_value(&range)?),
        None => Ok(JsValue::NULL),
    }
}

/// Lists the built-in templates as `{ id, name, description, icon, category }`.
#[wasm_bindgen(js_name = listTemplates)]
pub fn list_templates() -> Result<JsValue, JsValue> {
    Ok(to_js_value(&templates::TEMPLATES)?)
}

/// Returns the document of a built-in template. Throws on an unknown id.
///
/// # Example (JavaScript)
/// ```js
/// const doc = loadTemplate('noir-detective');
/// ```
#[wasm_bindgen(js_name = loadTemplate)]
pub fn load_template(id: &str) -> Result<JsValue, JsValue> {
    let document = js_result!(templates::template_document(id))?;
    Ok(to_js_value(&document)?)
}

/// Suggestion chips for `camera_movement`, `composition` or `lens_and_focus`.
#[wasm_bindgen(js_name = cinematographySuggestions)]
pub fn cinematography_suggestions(field: &str) -> Result<Array, JsValue> {
    let field: CinematographyField = js_result!(field.parse())?;
    Ok(templates::suggestions(field)
        .iter()
        .map(|value| JsValue::from_str(value))
        .collect())
}

// =============================================================================
// MAIN WRAPPER TYPE
// =============================================================================

/// JavaScript-friendly wrapper around PromptEditor.
#[wasm_bindgen]
pub struct JsPromptEditor {
    inner: PromptEditor,
}

#[wasm_bindgen]
impl JsPromptEditor {
    /// Creates an editor holding the empty 8s template.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const editor = new JsPromptEditor();
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsPromptEditor {
        JsPromptEditor {
            inner: PromptEditor::new(),
        }
    }

    /// Starts from a built-in template.
    #[wasm_bindgen(js_name = fromTemplate)]
    pub fn from_template(id: &str) -> Result<JsPromptEditor, JsValue> {
        let inner = js_result!(PromptEditor::from_template(id))?;
        Ok(JsPromptEditor { inner })
    }

    /// Loads from JSON text.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<JsPromptEditor, JsValue> {
        let inner = js_result!(PromptEditor::from_json(json))?;
        Ok(JsPromptEditor { inner })
    }

    /// Loads from a plain JS object.
    #[wasm_bindgen(js_name = fromObject)]
    pub fn from_object(document: JsValue) -> Result<JsPromptEditor, JsValue> {
        let document: PromptDocument = from_value(document)?;
        Ok(JsPromptEditor {
            inner: PromptEditor::from_document(document),
        })
    }

    /// Serializes to JSON text.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        js_result!(self.inner.to_json())
    }

    /// Gets the full document as a JavaScript object.
    #[wasm_bindgen(js_name = getDocument)]
    pub fn get_document(&self) -> Result<JsValue, JsValue> {
        Ok(to_js_value(self.inner.document())?)
    }

    /// True if nothing has been typed into the content yet.
    #[wasm_bindgen(js_name = isPristine)]
    pub fn is_pristine(&self) -> bool {
        self.inner.document().is_pristine()
    }
}

// =============================================================================
// SETTINGS METHODS
// =============================================================================

#[wasm_bindgen]
impl JsPromptEditor {
    /// Sets the clip length (4, 6 or 8).
    ///
    /// # Example (JavaScript)
    /// ```js
    /// editor.setVideoLength(6);
    /// ```
    #[wasm_bindgen(js_name = setVideoLength)]
    pub fn set_video_length(&mut self, seconds: f64) -> Result<(), JsValue> {
        let length = VideoLength::from_seconds(seconds)
            .ok_or_else(|| PromptError::unsupported_setting("video length", seconds.to_string()))?;
        self.inner.set_video_length(length);
        Ok(())
    }

    /// Sets the resolution ("720p" or "1080p").
    #[wasm_bindgen(js_name = setResolution)]
    pub fn set_resolution(&mut self, resolution: &str) -> Result<(), JsValue> {
        let resolution: Resolution = js_result!(resolution.parse())?;
        self.inner.set_resolution(resolution);
        Ok(())
    }

    /// Sets the aspect ratio ("16:9" or "9:16").
    #[wasm_bindgen(js_name = setAspectRatio)]
    pub fn set_aspect_ratio(&mut self, aspect_ratio: &str) -> Result<(), JsValue> {
        let aspect_ratio: AspectRatio = js_result!(aspect_ratio.parse())?;
        self.inner.set_aspect_ratio(aspect_ratio);
        Ok(())
    }
}

// =============================================================================
// CONTENT METHODS
// =============================================================================

#[wasm_bindgen]
impl JsPromptEditor {
    /// Sets one of `subject`, `action`, `context`, `style_and_ambiance`.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// editor.setCoreField('subject', 'A lighthouse keeper');
    /// ```
    #[wasm_bindgen(js_name = setCoreField)]
    pub fn set_core_field(&mut self, field: &str, value: &str) -> Result<(), JsValue> {
        let field: CoreField = js_result!(field.parse())?;
        self.inner.set_core_field(field, value);
        Ok(())
    }

    #[wasm_bindgen(js_name = setNegativePrompt)]
    pub fn set_negative_prompt(&mut self, value: &str) {
        self.inner.set_negative_prompt(value);
    }

    #[wasm_bindgen(js_name = setNotes)]
    pub fn set_notes(&mut self, value: &str) {
        self.inner.set_notes(value);
    }

    /// Sets the creative workflow from its JSON name (e.g. "image-to-video").
    #[wasm_bindgen(js_name = setCreativeMode)]
    pub fn set_creative_mode(&mut self, mode: JsValue) -> Result<(), JsValue> {
        let mode: CreativeMode = from_value(mode)?;
        self.inner.set_creative_mode(mode);
        Ok(())
    }

    /// Overwrites a cinematography field.
    #[wasm_bindgen(js_name = setCinematography)]
    pub fn set_cinematography(&mut self, field: &str, value: &str) -> Result<(), JsValue> {
        let field: CinematographyField = js_result!(field.parse())?;
        self.inner.set_cinematography(field, value);
        Ok(())
    }

    /// Toggles a quick suggestion in a cinematography field's comma list.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// editor.toggleCinematographyValue('camera_movement', 'Dolly in');
    /// ```
    #[wasm_bindgen(js_name = toggleCinematographyValue)]
    pub fn toggle_cinematography_value(&mut self, field: &str, value: &str) -> Result<(), JsValue> {
        let field: CinematographyField = js_result!(field.parse())?;
        self.inner.toggle_cinematography_value(field, value);
        Ok(())
    }
}

// =============================================================================
// SEQUENCE METHODS
// =============================================================================

#[wasm_bindgen]
impl JsPromptEditor {
    /// Appends a shot given as `{ timestamp, shot_description, emotion, sfx }`.
    #[wasm_bindgen(js_name = addShot)]
    pub fn add_shot(&mut self, shot: JsValue) -> Result<(), JsValue> {
        let shot: ShotSegment = from_value(shot)?;
        self.inner.add_shot(shot);
        Ok(())
    }

    /// Appends an empty two-second shot after the last one. Returns its index.
    #[wasm_bindgen(js_name = addNextShot)]
    pub fn add_next_shot(&mut self) -> usize {
        self.inner.add_next_shot()
    }

    /// Updates one text field of a shot.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// editor.updateShot(0, 'shot_description', 'Slow push-in on the lantern');
    /// ```
    #[wasm_bindgen(js_name = updateShot)]
    pub fn update_shot(&mut self, index: usize, field: &str, value: &str) -> Result<(), JsValue> {
        let field: ShotField = js_result!(field.parse())?;
        js_result!(self.inner.update_shot(index, field, value))?;
        Ok(())
    }

    #[wasm_bindgen(js_name = deleteShot)]
    pub fn delete_shot(&mut self, index: usize) -> Result<(), JsValue> {
        js_result!(self.inner.delete_shot(index))?;
        Ok(())
    }

    /// Moves a shot from one position to another.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// editor.reorderShot(0, 2); // First shot becomes the third
    /// ```
    #[wasm_bindgen(js_name = reorderShot)]
    pub fn reorder_shot(&mut self, from: usize, to: usize) -> Result<(), JsValue> {
        js_result!(self.inner.reorder_shot(from, to))?;
        Ok(())
    }
}

// =============================================================================
// AUDIO METHODS
// =============================================================================

#[wasm_bindgen]
impl JsPromptEditor {
    #[wasm_bindgen(js_name = addDialogue)]
    pub fn add_dialogue(&mut self) -> usize {
        self.inner.add_dialogue()
    }

    /// Updates `character`, `speech` or `voice_description` of a line.
    #[wasm_bindgen(js_name = updateDialogue)]
    pub fn update_dialogue(
        &mut self,
        index: usize,
        field: &str,
        value: &str,
    ) -> Result<(), JsValue> {
        let field: DialogueField = js_result!(field.parse())?;
        js_result!(self.inner.update_dialogue(index, field, value))?;
        Ok(())
    }

    #[wasm_bindgen(js_name = deleteDialogue)]
    pub fn delete_dialogue(&mut self, index: usize) -> Result<(), JsValue> {
        js_result!(self.inner.delete_dialogue(index))?;
        Ok(())
    }

    #[wasm_bindgen(js_name = addSoundEffect)]
    pub fn add_sound_effect(&mut self) -> usize {
        self.inner.add_sound_effect()
    }

    #[wasm_bindgen(js_name = updateSoundEffect)]
    pub fn update_sound_effect(&mut self, index: usize, value: &str) -> Result<(), JsValue> {
        js_result!(self.inner.update_sound_effect(index, value))?;
        Ok(())
    }

    #[wasm_bindgen(js_name = deleteSoundEffect)]
    pub fn delete_sound_effect(&mut self, index: usize) -> Result<(), JsValue> {
        js_result!(self.inner.delete_sound_effect(index))?;
        Ok(())
    }

    #[wasm_bindgen(js_name = setAmbientNoise)]
    pub fn set_ambient_noise(&mut self, value: &str) {
        self.inner.set_ambient_noise(value);
    }
}

// =============================================================================
// DERIVED VIEWS
// =============================================================================

#[wasm_bindgen]
impl JsPromptEditor {
    /// Validates the document. Returns `{ is_valid, findings }`.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const { is_valid, findings } = editor.validate();
    /// ```
    #[wasm_bindgen]
    pub fn validate(&mut self) -> Result<JsValue, JsValue> {
        let result = self.inner.validate();
        Ok(to_js_value(&result)?)
    }

    /// Short badge text: "Ready", "2 errors, 1 warning", ...
    #[wasm_bindgen(js_name = summary)]
    pub fn summary(&mut self) -> String {
        self.inner.validate().summary()
    }

    /// Per-section badges: `{ settings: 'valid', core: 'invalid', ... }`.
    #[wasm_bindgen(js_name = tabStatus)]
    pub fn tab_status(&mut self) -> Result<JsValue, JsValue> {
        let tabs = self.inner.tab_status();
        Ok(to_js_value(&tabs)?)
    }

    /// "complete", "partial" or "empty".
    #[wasm_bindgen(js_name = shotCompletion)]
    pub fn shot_completion(&self) -> Result<JsValue, JsValue> {
        Ok(to_js_value(&self.inner.shot_completion())?)
    }

    /// "complete" or "empty".
    #[wasm_bindgen(js_name = audioCompletion)]
    pub fn audio_completion(&self) -> Result<JsValue, JsValue> {
        Ok(to_js_value(&self.inner.audio_completion())?)
    }

    /// Largest parsed shot end time in seconds.
    #[wasm_bindgen(js_name = timelineEnd)]
    pub fn timeline_end(&self) -> f64 {
        self.inner.timeline_end()
    }

    /// Sections that currently carry an error or warning.
    #[wasm_bindgen(js_name = flaggedSections)]
    pub fn flagged_sections(&mut self) -> Array {
        let array = Array::new();
        for (section, status) in self.inner.tab_status().iter() {
            if status == validation::TabStatus::Invalid {
                array.push(&JsValue::from_str(section.as_str()));
            }
        }
        array
    }
}

impl Default for JsPromptEditor {
    fn default() -> Self {
        Self::new()
    }
}
