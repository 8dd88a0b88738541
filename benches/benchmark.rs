//! Benchmarks for prompt validation and editing.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;
use veoprompt::{
    parse_timestamp, validate, validate_value, Audio, DialogueLine, PromptContent,
    PromptDocument, PromptEditor, ShotField, ShotSegment,
};

/// A filled document with `shots` contiguous half-second shots, declared in
/// reverse order so continuity has to sort.
fn document_with_shots(shots: usize) -> PromptDocument {
    let mut content = PromptContent::new()
        .with_subject("A street musician")
        .with_action("plays violin as the crowd gathers")
        .with_context("rain-slick plaza under neon signs")
        .with_style_and_ambiance("moody, cinematic, shallow depth of field")
        .with_negative_prompt("no cars, no umbrellas")
        .with_audio(
            Audio::new()
                .with_dialogue(DialogueLine::new("Musician", "this one is for you"))
                .with_sound_effect("rain on stone")
                .with_ambient_noise("city hum"),
        );

    for i in (0..shots).rev() {
        let start = i as f64 * 0.5;
        let timestamp = format!("{:.1}s-{:.1}s", start, start + 0.5);
        content = content.with_shot(ShotSegment::new(
            timestamp,
            "Close-up of the bow crossing the strings, droplets flying off the wood.",
        ));
    }

    PromptDocument::empty_template()
        .with_video_length(8.0)
        .with_prompt(content)
}

fn bench_validate_template(c: &mut Criterion) {
    let doc = PromptDocument::empty_template();
    c.bench_function("validate_template", |b| {
        b.iter(|| black_box(validate(black_box(&doc))))
    });
}

fn bench_validate_sequence_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_sequence");
    for shots in [3usize, 16, 100] {
        let doc = document_with_shots(shots);
        group.bench_with_input(BenchmarkId::from_parameter(shots), &doc, |b, doc| {
            b.iter(|| black_box(validate(doc)))
        });
    }
    group.finish();
}

fn bench_validate_value(c: &mut Criterion) {
    let value = json!({
        "video_length": 8,
        "resolution": "1080p",
        "aspect_ratio": "16:9",
        "prompt": {
            "subject": "A lone lighthouse keeper",
            "action": "climbs the spiral stairs",
            "context": "storm-battered coastal lighthouse at night",
            "style_and_ambiance": "moody, cinematic, lantern light",
            "sequence": [
                {
                    "timestamp": "[00:00-00:03]",
                    "shot_description": "Low angle shot of the keeper climbing worn iron stairs."
                },
                {
                    "timestamp": "[00:03-00:08]",
                    "shot_description": "The lamp room door opens onto howling wind and rain."
                }
            ]
        }
    });

    c.bench_function("validate_value", |b| {
        b.iter(|| black_box(validate_value(black_box(&value))))
    });

    let unrecognized = json!({ "prompt": "just text" });
    c.bench_function("validate_value_unrecognized", |b| {
        b.iter(|| black_box(validate_value(black_box(&unrecognized))))
    });
}

fn bench_parse_timestamp(c: &mut Criterion) {
    let inputs = ["[00:02-00:05]", "12.5s-14.0s", "0:00 - 0:02"];
    c.bench_function("parse_timestamp", |b| {
        b.iter(|| {
            for input in inputs {
                black_box(parse_timestamp(black_box(input)));
            }
        })
    });
}

fn bench_editor_validate_cached(c: &mut Criterion) {
    c.bench_function("editor_validate_cached", |b| {
        let mut editor = PromptEditor::from_document(document_with_shots(16));
        editor.validate();
        b.iter(|| black_box(editor.validate()))
    });
}

fn bench_editor_edit_then_validate(c: &mut Criterion) {
    c.bench_function("editor_edit_then_validate", |b| {
        let mut editor = PromptEditor::from_document(document_with_shots(16));
        let mut i = 0usize;
        b.iter(|| {
            editor
                .update_shot(i % 16, ShotField::Emotion, "tense")
                .unwrap();
            black_box(editor.validate());
            i += 1;
        })
    });
}

criterion_group!(
    benches,
    bench_validate_template,
    bench_validate_sequence_sizes,
    bench_validate_value,
    bench_parse_timestamp,
    bench_editor_validate_cached,
    bench_editor_edit_then_validate,
);

criterion_main!(benches);
