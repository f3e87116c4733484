#![cfg(feature = "lang-python")]

//! Literal-output tests for the Python snippet templates.

use inference_snippets::api::{InferenceSnippet, ModelDescriptor, SnippetClient, SnippetOptions};
use inference_snippets::language::python::{has_inference_snippet, inference_snippets};
use inference_snippets::messages::ChatMessage;

fn model(id: &str, tag: &str) -> ModelDescriptor {
    ModelDescriptor::new(id).with_pipeline_tag(tag)
}

#[test]
fn text_classification_uses_requests_with_bearer_token() {
    let m = model(
        "distilbert/distilbert-base-uncased-finetuned-sst-2-english",
        "text-classification",
    );
    let snippets = inference_snippets(&m, "hf_token", &SnippetOptions::default());

    assert_eq!(snippets.len(), 1);
    assert_eq!(snippets[0].client, None);
    assert_eq!(
        snippets[0].content,
        r#"import requests

API_URL = "https://api-inference.huggingface.co/models/distilbert/distilbert-base-uncased-finetuned-sst-2-english"
headers = {"Authorization": "Bearer hf_token"}

def query(payload):
    response = requests.post(API_URL, headers=headers, json=payload)
    return response.json()

output = query({
    "inputs": "I like you. I love you",
})"#
    );
}

#[test]
fn object_inputs_are_nested_inside_the_payload() {
    let m = model("deepset/roberta-base-squad2", "question-answering");
    let snippets = inference_snippets(&m, "hf_token", &SnippetOptions::default());

    assert!(snippets[0].content.ends_with(
        r#"output = query({
    "inputs": {
        "question": "What is my name?",
        "context": "My name is Clara and I live in Berkeley."
    },
})"#
    ));
}

#[test]
fn zero_shot_classification_sends_candidate_labels() {
    let m = model("facebook/bart-large-mnli", "zero-shot-classification");
    let snippets = inference_snippets(&m, "hf_token", &SnippetOptions::default());

    assert!(
        snippets[0]
            .content
            .contains(r#""parameters": {"candidate_labels": ["refund", "legal", "faq"]},"#)
    );
}

#[test]
fn file_tasks_upload_the_sample_file() {
    let m = model("openai/whisper-large-v3", "automatic-speech-recognition");
    let snippets = inference_snippets(&m, "hf_token", &SnippetOptions::default());

    assert!(snippets[0].content.ends_with(
        r#"def query(filename):
    with open(filename, "rb") as f:
        data = f.read()
    response = requests.post(API_URL, headers=headers, data=data)
    return response.json()

output = query("sample1.flac")"#
    ));
}

#[test]
fn text_to_image_offers_hub_and_requests_clients() {
    let m = model("black-forest-labs/FLUX.1-dev", "text-to-image");
    let snippets = inference_snippets(&m, "", &SnippetOptions::default());

    assert_eq!(
        snippets,
        vec![
            InferenceSnippet::with_client(
                SnippetClient::HuggingfaceHub,
                r#"from huggingface_hub import InferenceClient
client = InferenceClient("black-forest-labs/FLUX.1-dev", token="{API_TOKEN}")

# output is a PIL.Image object
image = client.text_to_image("Astronaut riding a horse")"#
            ),
            InferenceSnippet::with_client(
                SnippetClient::Requests,
                r#"import requests

API_URL = "https://api-inference.huggingface.co/models/black-forest-labs/FLUX.1-dev"
headers = {"Authorization": f"Bearer {API_TOKEN}"}

def query(payload):
    response = requests.post(API_URL, headers=headers, json=payload)
    return response.content

image_bytes = query({
    "inputs": "Astronaut riding a horse",
})

# You can access the image with PIL.Image for example
import io
from PIL import Image
image = Image.open(io.BytesIO(image_bytes))"#
            ),
        ]
    );
}

#[test]
fn text_to_speech_depends_on_library() {
    let transformers = model("suno/bark", "text-to-speech").with_library_name("transformers");
    let snippets = inference_snippets(&transformers, "hf_token", &SnippetOptions::default());
    assert!(snippets[0].content.contains("return response.content"));
    assert!(snippets[0].content.ends_with("Audio(audio_bytes)"));

    let other = model("espnet/kan-bayashi_ljspeech_vits", "text-to-speech")
        .with_library_name("espnet");
    let snippets = inference_snippets(&other, "hf_token", &SnippetOptions::default());
    assert!(snippets[0].content.contains("audio, sampling_rate = query({"));
    assert!(snippets[0].content.ends_with("Audio(audio, rate=sampling_rate)"));
}

#[test]
fn tabular_wraps_input_in_data_key() {
    let m = model("julien-c/wine-quality", "tabular-classification");
    let snippets = inference_snippets(&m, "hf_token", &SnippetOptions::default());
    assert!(snippets[0].content.contains(
        r#""inputs": {"data": '{"Height":[11.52,12.48],"Length1":[23.2,24.0],"Length2":[25.4,26.3],"Species": ["Bream","Bream"]}'},"#
    ));
}

#[test]
fn conversational_streaming_is_the_default() {
    let m = model("meta-llama/Llama-3.1-8B-Instruct", "text-generation")
        .with_tags(["transformers", "conversational"]);
    let snippets = inference_snippets(&m, "hf_token", &SnippetOptions::default());

    assert_eq!(snippets.len(), 2);
    assert_eq!(snippets[0].client, Some(SnippetClient::HuggingfaceHub));
    assert_eq!(
        snippets[0].content,
        r#"from huggingface_hub import InferenceClient

client = InferenceClient(api_key="hf_token")

messages = [
    {
        "role": "user",
        "content": "What is the capital of France?"
    }
]

stream = client.chat.completions.create(
    model="meta-llama/Llama-3.1-8B-Instruct",
    messages=messages,
    max_tokens=500,
    stream=True
)

for chunk in stream:
    print(chunk.choices[0].delta.content, end="")"#
    );

    assert_eq!(snippets[1].client, Some(SnippetClient::Openai));
    assert!(snippets[1].content.starts_with(
        r#"from openai import OpenAI

client = OpenAI(
    base_url="https://api-inference.huggingface.co/v1/",
    api_key="hf_token"
)
"#
    ));
    assert!(snippets[1].content.ends_with(r#"print(chunk.choices[0].delta.content, end="")"#));
}

#[test]
fn conversational_completion_uses_custom_messages_and_settings() {
    let m = model("meta-llama/Llama-3.1-8B-Instruct", "text-generation")
        .with_tags(["conversational"]);
    let opts = SnippetOptions {
        streaming: Some(false),
        messages: Some(vec![ChatMessage::user("Hello!")]),
        temperature: Some(0.5),
        max_tokens: Some(1024),
        top_p: Some(0.7),
    };
    let snippets = inference_snippets(&m, "", &opts);

    assert_eq!(
        snippets[0].content,
        r#"from huggingface_hub import InferenceClient

client = InferenceClient(api_key="{API_TOKEN}")

messages = [
    {
        "role": "user",
        "content": "Hello!"
    }
]

completion = client.chat.completions.create(
    model="meta-llama/Llama-3.1-8B-Instruct",
    messages=messages,
    temperature=0.5,
    max_tokens=1024,
    top_p=0.7
)

print(completion.choices[0].message)"#
    );
}

#[test]
fn image_text_to_text_embeds_an_image_message() {
    let m = model("meta-llama/Llama-3.2-11B-Vision-Instruct", "image-text-to-text");
    let snippets = inference_snippets(&m, "hf_token", &SnippetOptions::default());

    assert_eq!(snippets.len(), 2);
    assert!(snippets[0].content.contains(
        r#"messages = [
    {
        "role": "user",
        "content": [
            {
                "type": "text",
                "text": "Describe this image in one sentence."
            },
            {
                "type": "image_url",
                "image_url": {
                    "url": "https://cdn.britannica.com/61/93061-050-99147DCE/Statue-of-Liberty-Island-New-York-Bay.jpg"
                }
            }
        ]
    }
]"#
    ));
}

#[test]
fn conversational_tag_takes_precedence_over_pipeline() {
    let m = ModelDescriptor::new("org/chat").with_tags(["conversational"]);
    let snippets = inference_snippets(&m, "hf_token", &SnippetOptions::default());
    assert_eq!(snippets.len(), 2);
    // The predicate only looks at the pipeline tag.
    assert!(!has_inference_snippet(&m));
}

#[test]
fn unknown_or_missing_task_yields_empty_snippet() {
    let missing = ModelDescriptor::new("org/model");
    assert_eq!(
        inference_snippets(&missing, "hf_token", &SnippetOptions::default()),
        vec![InferenceSnippet::empty()]
    );

    let unknown = model("org/model", "image-to-3d");
    assert_eq!(
        inference_snippets(&unknown, "hf_token", &SnippetOptions::default()),
        vec![InferenceSnippet::empty()]
    );
    assert!(!has_inference_snippet(&unknown));
}

#[test]
fn has_inference_snippet_for_known_tasks() {
    for tag in ["translation", "fill-mask", "document-question-answering", "text-to-audio"] {
        assert!(has_inference_snippet(&model("org/model", tag)), "{tag}");
    }
}

#[test]
fn chat_messages_mentioning_requests_get_no_preamble() {
    let m = model("org/vlm", "image-text-to-text");
    let opts = SnippetOptions {
        streaming: Some(false),
        messages: Some(vec![ChatMessage::user("Summarise the open requests")]),
        ..Default::default()
    };
    let snippets = inference_snippets(&m, "hf_token", &opts);

    assert_eq!(snippets.len(), 2);
    assert_eq!(snippets[0].client, Some(SnippetClient::HuggingfaceHub));
    assert!(
        snippets[0]
            .content
            .starts_with("from huggingface_hub import InferenceClient")
    );
    assert_eq!(snippets[1].client, Some(SnippetClient::Openai));
    assert!(snippets[1].content.starts_with("from openai import OpenAI"));
    for snippet in &snippets {
        assert!(snippet.content.contains("Summarise the open requests"));
        assert!(!snippet.content.contains("API_URL"));
    }
}
