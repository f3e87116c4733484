//! Python snippets written against `huggingface_hub`, `openai`, or plain
//! `requests`.

use crate::api::{
    API_TOKEN_PLACEHOLDER, INFERENCE_API_BASE, InferenceSnippet, Language, ModelDescriptor,
    PipelineTask, SnippetClient, SnippetOptions,
};
use crate::inputs::{example_messages, model_input_snippet};
use crate::messages::{generation_config, stringify_generation_config, stringify_messages};
use crate::traits::SnippetGenerator;

/// Python [`SnippetGenerator`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonSnippets;

impl PythonSnippets {
    pub fn new() -> Self {
        Self
    }
}

impl SnippetGenerator for PythonSnippets {
    fn language(&self) -> Language {
        Language::Python
    }

    fn supports(&self, _task: PipelineTask) -> bool {
        // Every task has a Python template; see `template_for`.
        true
    }

    fn renders(&self, model: &ModelDescriptor) -> bool {
        model.is_conversational() || self.has_snippet(model)
    }

    fn generate(
        &self,
        model: &ModelDescriptor,
        access_token: &str,
        options: &SnippetOptions,
    ) -> Vec<InferenceSnippet> {
        inference_snippets(model, access_token, options)
    }
}

/// Render the Python snippets for `model`.
///
/// Models tagged `conversational` get chat-completion snippets regardless of
/// their pipeline tag. Everything else is dispatched on the task; a missing
/// or unknown task yields one empty snippet.
pub fn inference_snippets(
    model: &ModelDescriptor,
    access_token: &str,
    options: &SnippetOptions,
) -> Vec<InferenceSnippet> {
    if model.is_conversational() {
        return conversational(model, access_token, options);
    }
    let Some(task) = model.task() else {
        return vec![InferenceSnippet::empty()];
    };
    let snippets = template_for(task)(model, access_token, options);
    if task == PipelineTask::ImageTextToText {
        // Chat snippets embed caller-supplied messages and never use `requests`.
        return snippets;
    }
    snippets
        .into_iter()
        .map(|snippet| with_requests_preamble(model, access_token, snippet))
        .collect()
}

/// Whether the model's pipeline tag has a Python template.
pub fn has_inference_snippet(model: &ModelDescriptor) -> bool {
    PythonSnippets.has_snippet(model)
}

type Template = fn(&ModelDescriptor, &str, &SnippetOptions) -> Vec<InferenceSnippet>;

fn template_for(task: PipelineTask) -> Template {
    match task {
        PipelineTask::TextClassification
        | PipelineTask::TokenClassification
        | PipelineTask::TableQuestionAnswering
        | PipelineTask::QuestionAnswering
        | PipelineTask::Translation
        | PipelineTask::Summarization
        | PipelineTask::FeatureExtraction
        | PipelineTask::TextGeneration
        | PipelineTask::Text2TextGeneration
        | PipelineTask::FillMask
        | PipelineTask::SentenceSimilarity => basic,
        PipelineTask::ZeroShotClassification => zero_shot_classification,
        PipelineTask::ImageTextToText => conversational,
        PipelineTask::AutomaticSpeechRecognition
        | PipelineTask::AudioToAudio
        | PipelineTask::AudioClassification
        | PipelineTask::ImageClassification
        | PipelineTask::ObjectDetection
        | PipelineTask::ImageSegmentation
        | PipelineTask::ImageToText => file,
        PipelineTask::TextToImage => text_to_image,
        PipelineTask::TextToSpeech | PipelineTask::TextToAudio => text_to_audio,
        PipelineTask::TabularRegression | PipelineTask::TabularClassification => tabular,
        PipelineTask::DocumentQuestionAnswering => document_question_answering,
        PipelineTask::ZeroShotImageClassification => zero_shot_image_classification,
    }
}

fn token_or_placeholder(access_token: &str) -> &str {
    if access_token.is_empty() {
        API_TOKEN_PLACEHOLDER
    } else {
        access_token
    }
}

/// Example input, with continuation lines indented to sit inside a dict literal.
fn nested_input(model: &ModelDescriptor) -> String {
    model_input_snippet(model, false, false).replace('\n', "\n    ")
}

/// Prefix snippets that use `requests` with their imports, the endpoint URL,
/// and the authorization header.
fn with_requests_preamble(
    model: &ModelDescriptor,
    access_token: &str,
    mut snippet: InferenceSnippet,
) -> InferenceSnippet {
    if !snippet.content.contains("requests") {
        return snippet;
    }
    let imports = if snippet.content.contains("base64.") {
        "import base64\nimport requests"
    } else {
        "import requests"
    };
    let auth = if access_token.is_empty() {
        r#"f"Bearer {API_TOKEN}""#.to_string()
    } else {
        format!("\"Bearer {}\"", access_token)
    };
    let model_id = &model.id;
    snippet.content = format!(
        "{imports}\n\nAPI_URL = \"{INFERENCE_API_BASE}/models/{model_id}\"\nheaders = {{\"Authorization\": {auth}}}\n\n{}",
        snippet.content
    );
    snippet
}

fn conversational(
    model: &ModelDescriptor,
    access_token: &str,
    options: &SnippetOptions,
) -> Vec<InferenceSnippet> {
    let token = token_or_placeholder(access_token);
    let model_id = &model.id;
    let messages = options
        .messages
        .clone()
        .unwrap_or_else(|| example_messages(model));
    let messages = stringify_messages(&messages, "");
    let config = stringify_generation_config(&generation_config(options), "\n    ", "=", false);

    let request = if options.streaming() {
        format!(
            r#"stream = client.chat.completions.create(
    model="{model_id}",
    messages=messages,
    {config},
    stream=True
)

for chunk in stream:
    print(chunk.choices[0].delta.content, end="")"#
        )
    } else {
        format!(
            r#"completion = client.chat.completions.create(
    model="{model_id}",
    messages=messages,
    {config}
)

print(completion.choices[0].message)"#
        )
    };

    vec![
        InferenceSnippet::with_client(
            SnippetClient::HuggingfaceHub,
            format!(
                r#"from huggingface_hub import InferenceClient

client = InferenceClient(api_key="{token}")

messages = {messages}

{request}"#
            ),
        ),
        InferenceSnippet::with_client(
            SnippetClient::Openai,
            format!(
                r#"from openai import OpenAI

client = OpenAI(
    base_url="{INFERENCE_API_BASE}/v1/",
    api_key="{token}"
)

messages = {messages}

{request}"#
            ),
        ),
    ]
}

fn basic(model: &ModelDescriptor, _: &str, _: &SnippetOptions) -> Vec<InferenceSnippet> {
    let input = nested_input(model);
    vec![InferenceSnippet::new(format!(
        r#"def query(payload):
    response = requests.post(API_URL, headers=headers, json=payload)
    return response.json()

output = query({{
    "inputs": {input},
}})"#
    ))]
}

fn zero_shot_classification(
    model: &ModelDescriptor,
    _: &str,
    _: &SnippetOptions,
) -> Vec<InferenceSnippet> {
    let input = nested_input(model);
    vec![InferenceSnippet::new(format!(
        r#"def query(payload):
    response = requests.post(API_URL, headers=headers, json=payload)
    return response.json()

output = query({{
    "inputs": {input},
    "parameters": {{"candidate_labels": ["refund", "legal", "faq"]}},
}})"#
    ))]
}

fn zero_shot_image_classification(
    model: &ModelDescriptor,
    _: &str,
    _: &SnippetOptions,
) -> Vec<InferenceSnippet> {
    let input = nested_input(model);
    vec![InferenceSnippet::new(format!(
        r#"def query(data):
    with open(data["image_path"], "rb") as f:
        img = f.read()
    payload = {{
        "parameters": data["parameters"],
        "inputs": base64.b64encode(img).decode("utf-8")
    }}
    response = requests.post(API_URL, headers=headers, json=payload)
    return response.json()

output = query({{
    "image_path": {input},
    "parameters": {{"candidate_labels": ["cat", "dog", "llama"]}},
}})"#
    ))]
}

fn file(model: &ModelDescriptor, _: &str, _: &SnippetOptions) -> Vec<InferenceSnippet> {
    let input = model_input_snippet(model, false, false);
    vec![InferenceSnippet::new(format!(
        r#"def query(filename):
    with open(filename, "rb") as f:
        data = f.read()
    response = requests.post(API_URL, headers=headers, data=data)
    return response.json()

output = query({input})"#
    ))]
}

fn text_to_image(
    model: &ModelDescriptor,
    access_token: &str,
    _: &SnippetOptions,
) -> Vec<InferenceSnippet> {
    let token = token_or_placeholder(access_token);
    let model_id = &model.id;
    let input = nested_input(model);
    vec![
        InferenceSnippet::with_client(
            SnippetClient::HuggingfaceHub,
            format!(
                r#"from huggingface_hub import InferenceClient
client = InferenceClient("{model_id}", token="{token}")

# output is a PIL.Image object
image = client.text_to_image({input})"#
            ),
        ),
        InferenceSnippet::with_client(
            SnippetClient::Requests,
            format!(
                r#"def query(payload):
    response = requests.post(API_URL, headers=headers, json=payload)
    return response.content

image_bytes = query({{
    "inputs": {input},
}})

# You can access the image with PIL.Image for example
import io
from PIL import Image
image = Image.open(io.BytesIO(image_bytes))"#
            ),
        ),
    ]
}

fn tabular(model: &ModelDescriptor, _: &str, _: &SnippetOptions) -> Vec<InferenceSnippet> {
    let input = nested_input(model);
    vec![InferenceSnippet::new(format!(
        r#"def query(payload):
    response = requests.post(API_URL, headers=headers, json=payload)
    return response.content

response = query({{
    "inputs": {{"data": {input}}},
}})"#
    ))]
}

fn text_to_audio(model: &ModelDescriptor, _: &str, _: &SnippetOptions) -> Vec<InferenceSnippet> {
    let input = nested_input(model);
    // transformers pipelines return raw audio bytes; other libraries return
    // the waveform and its sampling rate as JSON.
    let content = if model.library_name.as_deref() == Some("transformers") {
        format!(
            r#"def query(payload):
    response = requests.post(API_URL, headers=headers, json=payload)
    return response.content

audio_bytes = query({{
    "inputs": {input},
}})
# You can access the audio with IPython.display for example
from IPython.display import Audio
Audio(audio_bytes)"#
        )
    } else {
        format!(
            r#"def query(payload):
    response = requests.post(API_URL, headers=headers, json=payload)
    return response.json()

audio, sampling_rate = query({{
    "inputs": {input},
}})
# You can access the audio with IPython.display for example
from IPython.display import Audio
Audio(audio, rate=sampling_rate)"#
        )
    };
    vec![InferenceSnippet::new(content)]
}

fn document_question_answering(
    model: &ModelDescriptor,
    _: &str,
    _: &SnippetOptions,
) -> Vec<InferenceSnippet> {
    let input = nested_input(model);
    vec![InferenceSnippet::new(format!(
        r#"def query(payload):
    with open(payload["image"], "rb") as f:
        img = f.read()
        payload["image"] = base64.b64encode(img).decode("utf-8")
    response = requests.post(API_URL, headers=headers, json=payload)
    return response.json()

output = query({{
    "inputs": {input},
}})"#
    ))]
}
