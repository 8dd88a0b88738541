//! Data models for the video prompt document.
//!
//! Field names match the JSON shape produced by the prompt builder UI
//! (`video_length`, `prompt.style_and_ambiance`, `prompt.sequence[i].timestamp`, ...).
//! Every text field is optional: "blank" means absent, `null`, or whitespace only,
//! and [`is_blank`] is the single place that rule lives.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::settings::{AspectRatio, Resolution, VideoLength};

/// Returns true when an optional text field is absent or trims to nothing.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

// =============================================================================
// LENIENT READERS
// =============================================================================

/// Reads `null` as the type's default (an empty list for `Vec` fields).
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads a list of strings where the list or any entry may be `null`.
/// A `null` entry becomes an empty string so it is still reported as blank.
fn strings_null_as_blank<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Any number is kept; any other value reads as absent.
fn lenient_seconds<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

/// Strings are kept as-is and `null` reads as absent. Any other value keeps
/// its JSON text so it is still reported as unsupported.
fn lenient_setting<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

// =============================================================================
// DOCUMENT ROOT
// =============================================================================

/// Root video prompt document.
///
/// Settings are kept exactly as received so that unsupported values surface as
/// validation findings rather than load failures. A wrongly typed value also
/// loads: a non-numeric length reads as absent, a non-string resolution or
/// aspect ratio keeps its JSON text. Use the typed accessors
/// (`video_length()`, `resolution()`, `aspect_ratio()`) for supported values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PromptDocument {
    /// Clip length in seconds (4, 6 or 8 are supported).
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub video_length: Option<f64>,

    /// "720p" or "1080p".
    #[serde(default, deserialize_with = "lenient_setting")]
    pub resolution: Option<String>,

    /// "16:9" or "9:16".
    #[serde(default, deserialize_with = "lenient_setting")]
    pub aspect_ratio: Option<String>,

    /// Structured prompt content.
    #[serde(default)]
    pub prompt: Option<PromptContent>,
}

impl PromptDocument {
    /// Creates a document with supported settings and empty content.
    pub fn new(length: VideoLength, resolution: Resolution, aspect_ratio: AspectRatio) -> Self {
        Self {
            video_length: Some(length.seconds() as f64),
            resolution: Some(resolution.to_string()),
            aspect_ratio: Some(aspect_ratio.to_string()),
            prompt: Some(PromptContent::default()),
        }
    }

    /// The blank starting point offered by the builder UI: 8s, 1080p, 16:9 and
    /// three empty shots covering the whole clip.
    pub fn empty_template() -> Self {
        let content = PromptContent::new()
            .with_cinematography(Cinematography::new())
            .with_audio(Audio::new().with_ambient_noise(""))
            .with_negative_prompt("")
            .with_shot(ShotSegment::new("[00:00-00:02]", ""))
            .with_shot(ShotSegment::new("[00:02-00:05]", ""))
            .with_shot(ShotSegment::new("[00:05-00:08]", ""))
            .with_creative_controls(CreativeControls::new(CreativeMode::TextToVideo))
            .with_notes("");

        Self::new(VideoLength::Eight, Resolution::Hd1080, AspectRatio::Landscape)
            .with_prompt(content)
    }

    /// Builder: Set the raw video length.
    pub fn with_video_length(mut self, seconds: f64) -> Self {
        self.video_length = Some(seconds);
        self
    }

    /// Builder: Set the raw resolution string.
    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = Some(resolution.into());
        self
    }

    /// Builder: Set the raw aspect ratio string.
    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = Some(aspect_ratio.into());
        self
    }

    /// Builder: Set prompt content.
    pub fn with_prompt(mut self, prompt: PromptContent) -> Self {
        self.prompt = Some(prompt);
        self
    }

    /// Supported video length, if the raw value is one.
    pub fn video_length(&self) -> Option<VideoLength> {
        self.video_length.and_then(VideoLength::from_seconds)
    }

    /// Supported resolution, if the raw value is one.
    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution.as_deref().and_then(|r| r.parse().ok())
    }

    /// Supported aspect ratio, if the raw value is one.
    pub fn aspect_ratio(&self) -> Option<AspectRatio> {
        self.aspect_ratio.as_deref().and_then(|r| r.parse().ok())
    }

    /// Raw video length in seconds, `0` when absent.
    pub fn video_length_seconds(&self) -> f64 {
        self.video_length.unwrap_or(0.0)
    }

    /// Returns true if nothing has been typed into the content yet.
    ///
    /// Settings are ignored; a UI uses this to hold back findings on a fresh form.
    pub fn is_pristine(&self) -> bool {
        let Some(prompt) = &self.prompt else {
            return true;
        };

        let core_empty = prompt.core_fields().iter().all(|(_, v)| is_blank(*v));

        let cinematography_empty = prompt
            .cinematography
            .as_ref()
            .map_or(true, |c| !c.has_any());

        let audio_empty = prompt.audio.as_ref().map_or(true, |a| {
            a.dialogue.is_empty()
                && a.sound_effects.is_empty()
                && is_blank(a.ambient_noise.as_deref())
        });

        let sequence_empty = prompt.sequence.iter().all(|shot| {
            is_blank(shot.shot_description.as_deref())
                && is_blank(shot.emotion.as_deref())
                && is_blank(shot.sfx.as_deref())
        });

        core_empty
            && cinematography_empty
            && audio_empty
            && sequence_empty
            && is_blank(prompt.negative_prompt.as_deref())
    }
}

// =============================================================================
// PROMPT CONTENT
// =============================================================================

/// Structured prompt: cinematography + subject + action + context + style,
/// optional audio, and the timestamped shot sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PromptContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cinematography: Option<Cinematography>,

    /// Main character or focal point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// What the subject is doing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Environment and background.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Aesthetic, mood, lighting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_and_ambiance: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,

    /// Shots in the user's intended order (not necessarily chronological).
    #[serde(deserialize_with = "null_as_default")]
    pub sequence: Vec<ShotSegment>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creative_controls: Option<CreativeControls>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PromptContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four core narrative fields paired with their field paths.
    pub fn core_fields(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("prompt.subject", self.subject.as_deref()),
            ("prompt.action", self.action.as_deref()),
            ("prompt.context", self.context.as_deref()),
            ("prompt.style_and_ambiance", self.style_and_ambiance.as_deref()),
        ]
    }

    /// Builder: Set cinematography.
    pub fn with_cinematography(mut self, cinematography: Cinematography) -> Self {
        self.cinematography = Some(cinematography);
        self
    }

    /// Builder: Set subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Builder: Set action.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Builder: Set context.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Builder: Set style and ambiance.
    pub fn with_style_and_ambiance(mut self, style: impl Into<String>) -> Self {
        self.style_and_ambiance = Some(style.into());
        self
    }

    /// Builder: Set audio.
    pub fn with_audio(mut self, audio: Audio) -> Self {
        self.audio = Some(audio);
        self
    }

    /// Builder: Set negative prompt.
    pub fn with_negative_prompt(mut self, negative_prompt: impl Into<String>) -> Self {
        self.negative_prompt = Some(negative_prompt.into());
        self
    }

    /// Builder: Append a shot.
    pub fn with_shot(mut self, shot: ShotSegment) -> Self {
        self.sequence.push(shot);
        self
    }

    /// Builder: Set creative controls.
    pub fn with_creative_controls(mut self, controls: CreativeControls) -> Self {
        self.creative_controls = Some(controls);
        self
    }

    /// Builder: Set notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

// =============================================================================
// CINEMATOGRAPHY
// =============================================================================

/// Camera work. Each field is free text and may hold a comma-joined list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Cinematography {
    pub camera_movement: Option<String>,
    pub composition: Option<String>,
    pub lens_and_focus: Option<String>,
}

impl Cinematography {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if at least one of the three fields has text.
    pub fn has_any(&self) -> bool {
        !is_blank(self.camera_movement.as_deref())
            || !is_blank(self.composition.as_deref())
            || !is_blank(self.lens_and_focus.as_deref())
    }

    /// Builder: Set camera movement.
    pub fn with_camera_movement(mut self, value: impl Into<String>) -> Self {
        self.camera_movement = Some(value.into());
        self
    }

    /// Builder: Set composition.
    pub fn with_composition(mut self, value: impl Into<String>) -> Self {
        self.composition = Some(value.into());
        self
    }

    /// Builder: Set lens and focus.
    pub fn with_lens_and_focus(mut self, value: impl Into<String>) -> Self {
        self.lens_and_focus = Some(value.into());
        self
    }
}

// =============================================================================
// AUDIO
// =============================================================================

/// Audio block: dialogue, sound effects, ambient bed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Audio {
    #[serde(deserialize_with = "null_as_default")]
    pub dialogue: Vec<DialogueLine>,
    #[serde(deserialize_with = "strings_null_as_blank")]
    pub sound_effects: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambient_noise: Option<String>,
}

impl Audio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Append a dialogue line.
    pub fn with_dialogue(mut self, line: DialogueLine) -> Self {
        self.dialogue.push(line);
        self
    }

    /// Builder: Append a sound effect.
    pub fn with_sound_effect(mut self, sfx: impl Into<String>) -> Self {
        self.sound_effects.push(sfx.into());
        self
    }

    /// Builder: Set ambient noise.
    pub fn with_ambient_noise(mut self, ambient: impl Into<String>) -> Self {
        self.ambient_noise = Some(ambient.into());
        self
    }
}

/// One spoken line. Rendered downstream as: character says "speech" (voice).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DialogueLine {
    pub character: Option<String>,
    pub speech: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_description: Option<String>,
}

impl DialogueLine {
    pub fn new(character: impl Into<String>, speech: impl Into<String>) -> Self {
        Self {
            character: Some(character.into()),
            speech: Some(speech.into()),
            voice_description: None,
        }
    }

    /// A line with every field empty, as added by the "add line" button.
    pub fn blank() -> Self {
        Self {
            character: Some(String::new()),
            speech: Some(String::new()),
            voice_description: Some(String::new()),
        }
    }

    /// Builder: Set voice description.
    pub fn with_voice_description(mut self, voice: impl Into<String>) -> Self {
        self.voice_description = Some(voice.into());
        self
    }
}

// =============================================================================
// SEQUENCE
// =============================================================================

/// One shot of the timeline.
///
/// `timestamp` encodes a half-open interval, either `[00:00-00:02]` or `0.0s-2.0s`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShotSegment {
    pub timestamp: Option<String>,
    pub shot_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sfx: Option<String>,
}

impl ShotSegment {
    pub fn new(timestamp: impl Into<String>, shot_description: impl Into<String>) -> Self {
        Self {
            timestamp: Some(timestamp.into()),
            shot_description: Some(shot_description.into()),
            emotion: Some(String::new()),
            sfx: Some(String::new()),
        }
    }

    /// Builder: Set emotion.
    pub fn with_emotion(mut self, emotion: impl Into<String>) -> Self {
        self.emotion = Some(emotion.into());
        self
    }

    /// Builder: Set per-shot sound effect.
    pub fn with_sfx(mut self, sfx: impl Into<String>) -> Self {
        self.sfx = Some(sfx.into());
        self
    }
}

// =============================================================================
// CREATIVE CONTROLS
// =============================================================================

/// Generation workflow selected in the advanced tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CreativeMode {
    TextToVideo,
    ImageToVideo,
    IngredientsToVideo,
    FirstLastFrame,
}

impl CreativeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            CreativeMode::TextToVideo => "text-to-video",
            CreativeMode::ImageToVideo => "image-to-video",
            CreativeMode::IngredientsToVideo => "ingredients-to-video",
            CreativeMode::FirstLastFrame => "first-last-frame",
        }
    }
}

/// Advanced metadata. Passed through untouched by validation.
///
/// `mode` stays a raw string so an unknown workflow never blocks loading;
/// [`CreativeControls::mode`] gives the typed value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CreativeControls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(deserialize_with = "strings_null_as_blank")]
    pub reference_images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CreativeControls {
    pub fn new(mode: CreativeMode) -> Self {
        Self {
            mode: Some(mode.as_str().to_string()),
            reference_images: Vec::new(),
            notes: Some(String::new()),
        }
    }

    /// Typed workflow, if the raw value is a known one.
    pub fn mode(&self) -> Option<CreativeMode> {
        let raw = self.mode.as_deref()?;
        [
            CreativeMode::TextToVideo,
            CreativeMode::ImageToVideo,
            CreativeMode::IngredientsToVideo,
            CreativeMode::FirstLastFrame,
        ]
        .into_iter()
        .find(|mode| mode.as_str() == raw)
    }

    /// Builder: Append a reference image.
    pub fn with_reference_image(mut self, image: impl Into<String>) -> Self {
        self.reference_images.push(image.into());
        self
    }

    /// Builder: Set workflow notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

// =============================================================================
// TESTS
// =============================================================================
