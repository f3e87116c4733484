#![cfg(feature = "lang-curl")]

//! Literal-output tests for the curl snippet templates.

use inference_snippets::api::{ModelDescriptor, SnippetOptions};
use inference_snippets::language::curl::{has_inference_snippet, inference_snippets};
use inference_snippets::messages::ChatMessage;

fn model(id: &str, tag: &str) -> ModelDescriptor {
    ModelDescriptor::new(id).with_pipeline_tag(tag)
}

#[test]
fn basic_request_posts_json_inputs() {
    let m = model("org/model", "text-classification");
    let snippets = inference_snippets(&m, "hf_token", &SnippetOptions::default());

    assert_eq!(snippets.len(), 1);
    assert_eq!(
        snippets[0].content,
        r#"curl https://api-inference.huggingface.co/models/org/model \
    -X POST \
    -d '{"inputs": "I like you. I love you"}' \
    -H 'Content-Type: application/json' \
    -H "Authorization: Bearer hf_token""#
    );
}

#[test]
fn object_inputs_are_collapsed_onto_one_line() {
    let m = model("org/model", "sentence-similarity");
    let snippets = inference_snippets(&m, "hf_token", &SnippetOptions::default());
    assert!(snippets[0].content.contains(
        r#"-d '{"inputs": { "source_sentence": "That is a happy person", "sentences": [ "That is a happy dog", "That is a very happy person", "Today is a sunny day" ] }}'"#
    ));
}

#[test]
fn file_request_uploads_binary_with_placeholder_token() {
    let m = model("google/vit-base-patch16-224", "image-classification");
    let snippets = inference_snippets(&m, "", &SnippetOptions::default());

    assert_eq!(
        snippets[0].content,
        r#"curl https://api-inference.huggingface.co/models/google/vit-base-patch16-224 \
    -X POST \
    --data-binary '@cats.jpg' \
    -H "Authorization: Bearer {API_TOKEN}""#
    );
}

#[test]
fn zero_shot_classification_adds_parameters() {
    let m = model("facebook/bart-large-mnli", "zero-shot-classification");
    let snippets = inference_snippets(&m, "hf_token", &SnippetOptions::default());
    assert!(snippets[0].content.contains(
        r#""parameters": {"candidate_labels": ["refund", "legal", "faq"]}}' \"#
    ));
}

#[test]
fn conversational_text_generation_calls_chat_completions() {
    let m = model("org/chat", "text-generation").with_tags(["conversational"]);
    let snippets = inference_snippets(&m, "hf_token", &SnippetOptions::default());

    assert_eq!(
        snippets[0].content,
        r#"curl 'https://api-inference.huggingface.co/models/org/chat/v1/chat/completions' \
    -H "Authorization: Bearer hf_token" \
    -H 'Content-Type: application/json' \
    --data '{
    "model": "org/chat",
    "messages": [
        {
            "role": "user",
            "content": "What is the capital of France?"
        }
    ],
    "max_tokens": 500,
    "stream": true
}'"#
    );
}

#[test]
fn chat_body_escapes_single_quotes_and_renders_settings() {
    let m = model("org/chat", "text-generation").with_tags(["conversational"]);
    let opts = SnippetOptions {
        streaming: Some(false),
        messages: Some(vec![ChatMessage::user("What's up?")]),
        temperature: Some(0.2),
        ..Default::default()
    };
    let content = &inference_snippets(&m, "hf_token", &opts)[0].content;

    assert!(content.contains(r#""content": "What'\''s up?""#));
    assert!(content.contains("\"temperature\": 0.2,\n    \"max_tokens\": 500,"));
    assert!(content.ends_with("\"stream\": false\n}'"));
}

#[test]
fn support_matrix() {
    for tag in ["text-to-image", "fill-mask", "audio-classification", "image-text-to-text"] {
        assert!(has_inference_snippet(&model("org/model", tag)), "{tag}");
    }
    for tag in [
        "tabular-classification",
        "zero-shot-image-classification",
        "document-question-answering",
        "image-to-3d",
    ] {
        assert!(!has_inference_snippet(&model("org/model", tag)), "{tag}");
        assert!(inference_snippets(&model("org/model", tag), "", &SnippetOptions::default())[0]
            .is_empty());
    }
}
