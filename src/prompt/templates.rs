//! Built-in starter documents and cinematography suggestions.
//!
//! The catalog holds complete, ready-to-generate prompts that the builder
//! offers as starting points. The suggestion lists are the chip values a UI
//! toggles into the comma-joined cinematography fields with
//! [`PromptEditor::toggle_cinematography_value`].
//!
//! [`PromptEditor::toggle_cinematography_value`]: super::PromptEditor::toggle_cinematography_value

use serde::Serialize;

use super::editor::CinematographyField;
use super::model::{
    Audio, Cinematography, CreativeControls, CreativeMode, DialogueLine, PromptContent,
    PromptDocument, ShotSegment,
};
use crate::error::{PromptError, PromptResult};

// =============================================================================
// SUGGESTIONS
// =============================================================================

pub const CAMERA_MOVEMENTS: &[&str] = &[
    "Dolly shot",
    "Tracking shot",
    "Crane shot",
    "Aerial view",
    "Slow pan",
    "POV shot",
    "Handheld",
    "Steadicam",
    "Zoom in",
    "Zoom out",
    "180-degree arc shot",
    "Reverse shot",
    "Static camera",
];

pub const COMPOSITIONS: &[&str] = &[
    "Wide shot",
    "Medium shot",
    "Close-up",
    "Extreme close-up",
    "Low angle",
    "High angle",
    "Two-shot",
    "Over-the-shoulder",
    "Dutch angle",
    "Bird's eye view",
    "Worm's eye view",
];

pub const LENS_AND_FOCUS: &[&str] = &[
    "Shallow depth of field",
    "Deep focus",
    "Wide-angle lens",
    "Telephoto lens",
    "Macro lens",
    "Soft focus",
    "Rack focus",
    "Tilt-shift",
    "Lens flare",
];

/// Suggestion chips for one cinematography field.
pub fn suggestions(field: CinematographyField) -> &'static [&'static str] {
    match field {
        CinematographyField::CameraMovement => CAMERA_MOVEMENTS,
        CinematographyField::Composition => COMPOSITIONS,
        CinematographyField::LensAndFocus => LENS_AND_FOCUS,
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// Grouping shown in the template picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Cinematic,
    Commercial,
    Abstract,
    Dialogue,
    Nature,
    Tech,
}

/// One catalog entry. Serializes as its metadata only; call
/// [`TemplateDomain::document`] for the prompt itself.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TemplateDomain {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: TemplateCategory,
    #[serde(skip)]
    build: fn() -> PromptDocument,
}

impl TemplateDomain {
    /// A fresh copy of the template's document.
    pub fn document(&self) -> PromptDocument {
        (self.build)()
    }
}

pub const TEMPLATES: &[TemplateDomain] = &[
    TemplateDomain {
        id: "jungle-explorer",
        name: "Jungle Explorer",
        description: "Multi-shot adventure sequence from official Veo 3.1 documentation",
        icon: "🗺️",
        category: TemplateCategory::Cinematic,
        build: jungle_explorer,
    },
    TemplateDomain {
        id: "noir-detective",
        name: "Film Noir Detective",
        description: "Dialogue scene with Ingredients-to-Video workflow from official docs",
        icon: "🕵️",
        category: TemplateCategory::Dialogue,
        build: noir_detective,
    },
    TemplateDomain {
        id: "pop-star-concert",
        name: "Pop Star Concert",
        description: "Dynamic 180-degree camera transition with First & Last Frame from official docs",
        icon: "🎤",
        category: TemplateCategory::Cinematic,
        build: pop_star_concert,
    },
];

/// Looks up a catalog entry by id.
pub fn find_template(id: &str) -> Option<&'static TemplateDomain> {
    TEMPLATES.iter().find(|template| template.id == id)
}

/// The document of the catalog entry `id`.
pub fn template_document(id: &str) -> PromptResult<PromptDocument> {
    find_template(id)
        .map(TemplateDomain::document)
        .ok_or_else(|| PromptError::template_not_found(id))
}

fn jungle_explorer() -> PromptDocument {
    let content = PromptContent::new()
        .with_cinematography(
            Cinematography::new()
                .with_camera_movement("Tracking shot, reverse shot, crane shot")
                .with_composition(
                    "Medium shot from behind, reverse shot, tracking shot, wide high-angle crane shot",
                )
                .with_lens_and_focus("Deep focus for environment"),
        )
        .with_subject("Young female explorer with leather satchel and messy brown hair in ponytail")
        .with_action(
            "Explorer pushes aside jungle vine, discovers hidden ancient ruins, examines carvings",
        )
        .with_context(
            "Dense jungle environment with moss-covered ancient ruins, dappled sunlight through canopy",
        )
        .with_style_and_ambiance(
            "Cinematic adventure, awe-inspiring, natural lighting with god rays",
        )
        .with_audio(
            Audio::new()
                .with_sound_effect("Rustling of dense leaves")
                .with_sound_effect("Distant exotic bird calls")
                .with_sound_effect("Stone scraping as she touches carvings")
                .with_ambient_noise(
                    "Rich jungle soundscape with layers of insects, birds, rustling vegetation, distant waterfalls",
                ),
        )
        .with_negative_prompt(
            "No modern elements, no safety equipment visible, no unnatural lighting, no crowds",
        )
        .with_shot(
            ShotSegment::new(
                "[00:00-00:02]",
                "Medium shot from behind a young female explorer with a leather satchel and messy brown hair in a ponytail, as she pushes aside a large jungle vine to reveal a hidden path.",
            )
            .with_emotion("Wonder and reverence")
            .with_sfx("The rustle of dense leaves, distant exotic bird calls"),
        )
        .with_shot(
            ShotSegment::new(
                "[00:02-00:04]",
                "Reverse shot of the explorer's freckled face, her expression filled with awe as she gazes upon ancient, moss-covered ruins in the background.",
            )
            .with_sfx("The rustle of dense leaves, distant exotic bird calls"),
        )
        .with_shot(
            ShotSegment::new(
                "[00:04-00:06]",
                "Tracking shot following the explorer as she steps into the clearing and runs her hand over the intricate carvings on a crumbling stone wall.",
            )
            .with_emotion("Wonder and reverence"),
        )
        .with_shot(
            ShotSegment::new(
                "[00:06-00:08]",
                "Wide, high-angle crane shot, revealing the lone explorer standing small in the center of the vast, forgotten temple complex, half-swallowed by the jungle.",
            )
            .with_emotion("Wonder and reverence")
            .with_sfx("A swelling, gentle orchestral score begins to play"),
        )
        .with_creative_controls(CreativeControls::new(CreativeMode::TextToVideo))
        .with_notes("Example from official Veo 3.1 documentation - Timestamp Prompting workflow");

    PromptDocument::empty_template().with_prompt(content)
}

fn noir_detective() -> PromptDocument {
    let content = PromptContent::new()
        .with_cinematography(
            Cinematography::new()
                .with_camera_movement("Shot-reverse-shot with subtle push-in")
                .with_composition("Medium shot, reverse shot focusing on each character")
                .with_lens_and_focus("Shallow depth of field, rack focus between characters"),
        )
        .with_subject("Tired detective and mysterious woman in 1940s noir office")
        .with_action("Detective and woman exchange dialogue, woman enters office")
        .with_context(
            "Cluttered 1940s detective office with desk, paperwork, harsh fluorescent lights, green monochrome monitor glow",
        )
        .with_style_and_ambiance(
            "Film noir, moody, dramatic lighting, retro 1980s aesthetic with color film grain",
        )
        .with_audio(
            Audio::new()
                .with_dialogue(
                    DialogueLine::new(
                        "Detective",
                        "Of all the offices in this town, you had to walk into mine.",
                    )
                    .with_voice_description("in a weary voice"),
                )
                .with_dialogue(
                    DialogueLine::new("Woman", "You were highly recommended.")
                        .with_voice_description("with a slight, mysterious smile"),
                )
                .with_sound_effect("Door creaking open")
                .with_sound_effect("Papers shuffling on desk")
                .with_sound_effect("Chair creaking")
                .with_ambient_noise(
                    "Quiet office ambience, distant city sounds through window, ceiling fan humming softly",
                ),
        )
        .with_negative_prompt(
            "No unnatural lip movements, no robotic expressions, no modern elements, no bright cheerful lighting",
        )
        .with_shot(
            ShotSegment::new(
                "[00:00-00:03]",
                "Medium shot of the detective behind his desk. He looks up at the woman. Natural light from window creates dramatic side lighting.",
            )
            .with_emotion("Resignation mixed with curiosity")
            .with_sfx("Door creaking open, papers shuffling"),
        )
        .with_shot(
            ShotSegment::new(
                "[00:03-00:05]",
                "Reverse shot focusing on the woman. Soft focus on detective in background. A slight, mysterious smile plays on her lips as she replies.",
            )
            .with_emotion("Confidence and mystery")
            .with_sfx("Her footsteps entering room"),
        )
        .with_shot(
            ShotSegment::new(
                "[00:05-00:08]",
                "Two-shot with rack focus. Detective leans back in chair, studying her. Camera slowly pushes in on both characters.",
            )
            .with_emotion("Tension and intrigue building")
            .with_sfx("Chair creaking"),
        )
        .with_creative_controls(
            CreativeControls::new(CreativeMode::IngredientsToVideo)
                .with_reference_image("Detective character reference")
                .with_reference_image("Woman character reference")
                .with_reference_image("Office setting reference")
                .with_notes(
                    "Use provided images for the detective, the woman, and the office setting to maintain consistent aesthetic across shots",
                ),
        )
        .with_notes(
            "Example from official Veo 3.1 documentation - Building a dialogue scene with Ingredients to Video. Maintain eye-line consistency and ensure lip-sync accuracy.",
        );

    PromptDocument::empty_template().with_prompt(content)
}

fn pop_star_concert() -> PromptDocument {
    let content = PromptContent::new()
        .with_cinematography(
            Cinematography::new()
                .with_camera_movement("Smooth 180-degree arc shot circling around singer")
                .with_composition("Starting medium shot front-facing, ending POV shot from behind")
                .with_lens_and_focus(
                    "Dramatic spotlight creating lens flare, wide-angle for crowd",
                ),
        )
        .with_subject("Female pop star singing passionately into vintage microphone on stage")
        .with_action(
            "Camera performs 180-degree arc around singer while she sings, revealing massive crowd",
        )
        .with_context(
            "Dark concert stage with single dramatic spotlight, massive cheering crowd visible from behind",
        )
        .with_style_and_ambiance(
            "Cinematic, dramatic, high-energy concert atmosphere, lens flare, emotional moment",
        )
        .with_audio(
            Audio::new()
                .with_dialogue(
                    DialogueLine::new(
                        "Singer",
                        "when you look me in the eyes, I can see a million stars",
                    )
                    .with_voice_description("singing passionately"),
                )
                .with_sound_effect("Roaring crowd cheers")
                .with_sound_effect("Stage lighting effects")
                .with_ambient_noise("Large concert venue ambience, crowd energy, spatial reverb"),
        )
        .with_negative_prompt(
            "No empty audience, no bad lighting, no amateur staging, no distorted faces",
        )
        .with_shot(
            ShotSegment::new(
                "[00:00-00:02]",
                "Medium shot of a female pop star singing passionately into a vintage microphone. She is on a dark stage, lit by a single, dramatic spotlight from the front. She has her eyes closed, capturing an emotional moment.",
            )
            .with_emotion("Passionate and emotional")
            .with_sfx("Crowd ambience building"),
        )
        .with_shot(
            ShotSegment::new(
                "[00:02-00:06]",
                "The camera performs a smooth 180-degree arc shot, starting with the front-facing view of the singer and circling around her to seamlessly end on the POV shot from behind her on stage. The singer continues performing.",
            )
            .with_emotion("Building energy and anticipation"),
        )
        .with_shot(
            ShotSegment::new(
                "[00:06-00:08]",
                "POV shot from behind the singer on stage, looking out at a large, cheering crowd. The stage lights are bright, creating lens flare. You can see the back of the singer's head and shoulders in the foreground. The audience is a sea of lights and silhouettes.",
            )
            .with_emotion("Triumphant and awe-inspiring")
            .with_sfx("Massive crowd roar"),
        )
        .with_creative_controls(
            CreativeControls::new(CreativeMode::FirstLastFrame)
                .with_reference_image("First frame: Front view of singer with spotlight")
                .with_reference_image("Last frame: POV from behind singer viewing crowd")
                .with_notes(
                    "Use First and Last Frame feature - provide front-facing shot of singer as first frame and POV behind singer as last frame. Veo will generate smooth 180-degree transition.",
                ),
        )
        .with_notes(
            "Example from official Veo 3.1 documentation - The dynamic transition with First and Last Frame workflow. Camera movement should be perfectly smooth arc.",
        );

    PromptDocument::empty_template().with_prompt(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{tab_status, validate, Severity, TabStatus};

    #[test]
    fn test_every_template_is_ready_to_generate() {
        for template in TEMPLATES {
            let doc = template.document();
            let result = validate(&doc);
            assert!(result.is_valid, "{}: {:?}", template.id, result.findings);
            assert_eq!(result.warning_count(), 0, "{}: {:?}", template.id, result.findings);

            let tabs = tab_status(&doc, &result.findings);
            assert!(
                tabs.iter().all(|(_, status)| status == TabStatus::Valid),
                "{}: {tabs:?}",
                template.id
            );
            assert!(!doc.is_pristine());
        }
    }

    #[test]
    fn test_template_hints_are_info_only() {
        let result = validate(&find_template("pop-star-concert").unwrap().document());
        assert!(result.findings.iter().all(|f| f.severity == Severity::Info));
        let fields: Vec<_> = result.findings.iter().map(|f| f.field.as_str()).collect();
        // "POV" in two descriptions, four "no X" phrases, then the ready note.
        assert_eq!(
            fields,
            [
                "prompt.sequence[1].shot_description",
                "prompt.sequence[2].shot_description",
                "prompt.negative_prompt",
                "general",
            ]
        );
    }

    #[test]
    fn test_lookup() {
        let noir = find_template("noir-detective").unwrap();
        assert_eq!(noir.category, TemplateCategory::Dialogue);

        let doc = noir.document();
        let controls = doc.prompt.as_ref().unwrap().creative_controls.as_ref().unwrap();
        assert_eq!(controls.mode(), Some(CreativeMode::IngredientsToVideo));
        assert_eq!(controls.reference_images.len(), 3);

        assert!(find_template("western-duel").is_none());
        assert!(matches!(
            template_document("western-duel"),
            Err(PromptError::TemplateNotFound(id)) if id == "western-duel"
        ));
    }

    #[test]
    fn test_metadata_serializes_without_document() {
        let json = serde_json::to_value(TEMPLATES[0]).unwrap();
        assert_eq!(json["id"], "jungle-explorer");
        assert_eq!(json["category"], "cinematic");
        assert!(json.get("build").is_none());
    }

    #[test]
    fn test_suggestions_per_field() {
        assert_eq!(suggestions(CinematographyField::CameraMovement).len(), 13);
        assert!(suggestions(CinematographyField::Composition).contains(&"Two-shot"));
        assert_eq!(suggestions(CinematographyField::LensAndFocus)[0], "Shallow depth of field");
    }
}
