//! Prompt document module.
//!
//! Provides the video prompt document model, its supported settings, the
//! built-in templates, and the in-memory editor used by the builder UI.

pub mod editor;
pub mod model;
pub mod settings;
pub mod templates;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use editor::{
    AudioCompletion, CinematographyField, CoreField, DialogueField, PromptEditor,
    ShotCompletion, ShotField,
};
pub use model::{
    Audio, Cinematography, CreativeControls, CreativeMode, DialogueLine, PromptContent,
    PromptDocument, ShotSegment,
};
pub use settings::{AspectRatio, Resolution, VideoLength};
pub use templates::{
    find_template, suggestions, template_document, TemplateCategory, TemplateDomain,
    CAMERA_MOVEMENTS, COMPOSITIONS, LENS_AND_FOCUS, TEMPLATES,
};

#[cfg(feature = "wasm")]
pub use wasm::JsPromptEditor;
