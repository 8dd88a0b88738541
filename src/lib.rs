//! VeoPrompt - Document model and validation engine for structured video prompts.
//!
//! A prompt document describes one generated clip: global settings (length,
//! resolution, aspect ratio), the core narrative formula, optional
//! cinematography and audio, and a timestamped sequence of shots. This crate
//! provides:
//!
//! - **Validation**: every field group checked into a flat list of findings
//!   (error / warning / info) with field paths, plus a per-section projection
//! - **Timeline checks**: two timestamp grammars, overlap and gap detection
//!   over shots declared in any order
//! - **Editing**: the builder's list and field operations over an owned document
//!
//! # Example
//!
//! ```rust
//! use veoprompt::{PromptEditor, ShotField, CoreField, Severity};
//!
//! let mut editor = PromptEditor::new();
//! editor.set_core_field(CoreField::Subject, "A lighthouse keeper");
//! editor
//!     .update_shot(0, ShotField::ShotDescription, "Low angle on iron stairs, lantern swinging.")
//!     .unwrap();
//!
//! let result = editor.validate();
//! assert!(!result.is_valid);
//! assert!(result
//!     .findings
//!     .iter()
//!     .any(|f| f.field == "prompt.action" && f.severity == Severity::Error));
//! ```

pub mod error;

// Prompt document module
pub mod prompt;

// Validation engine
pub mod validation;

// Re-exports for convenience
pub use error::{PromptError, PromptResult};
pub use prompt::{
    AspectRatio, Audio, AudioCompletion, Cinematography, CinematographyField, CoreField,
    CreativeControls, CreativeMode, DialogueField, DialogueLine, PromptContent, PromptDocument,
    PromptEditor, Resolution, ShotCompletion, ShotField, ShotSegment, TemplateCategory,
    TemplateDomain, VideoLength, TEMPLATES,
};
pub use validation::{
    parse_timestamp, tab_status, validate, validate_json_str, validate_value, Section, Severity,
    TabStatus, TabStatuses, TimeRange, TimestampForm, ValidationFinding, ValidationResult,
};

#[cfg(feature = "wasm")]
pub use prompt::JsPromptEditor;
