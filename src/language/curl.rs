//! Shell snippets built around `curl`.

use crate::api::{
    API_TOKEN_PLACEHOLDER, INFERENCE_API_BASE, InferenceSnippet, Language, ModelDescriptor,
    PipelineTask, SnippetOptions,
};
use crate::inputs::{example_messages, model_input_snippet};
use crate::messages::{generation_config, stringify_generation_config, stringify_messages};
use crate::traits::SnippetGenerator;

/// curl [`SnippetGenerator`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CurlSnippets;

impl CurlSnippets {
    pub fn new() -> Self {
        Self
    }
}

impl SnippetGenerator for CurlSnippets {
    fn language(&self) -> Language {
        Language::Curl
    }

    fn supports(&self, task: PipelineTask) -> bool {
        template_for(task).is_some()
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

/// Render the curl snippet for `model`. A missing or unsupported task yields
/// one empty snippet.
pub fn inference_snippets(
    model: &ModelDescriptor,
    access_token: &str,
    options: &SnippetOptions,
) -> Vec<InferenceSnippet> {
    match model.task().and_then(template_for) {
        Some(template) => vec![InferenceSnippet::new(template(model, access_token, options))],
        None => vec![InferenceSnippet::empty()],
    }
}

/// Whether the model's pipeline tag has a curl template.
pub fn has_inference_snippet(model: &ModelDescriptor) -> bool {
    CurlSnippets.has_snippet(model)
}

type Template = fn(&ModelDescriptor, &str, &SnippetOptions) -> String;

fn template_for(task: PipelineTask) -> Option<Template> {
    let template: Template = match task {
        PipelineTask::TextClassification
        | PipelineTask::TokenClassification
        | PipelineTask::TableQuestionAnswering
        | PipelineTask::QuestionAnswering
        | PipelineTask::Translation
        | PipelineTask::Summarization
        | PipelineTask::FeatureExtraction
        | PipelineTask::Text2TextGeneration
        | PipelineTask::FillMask
        | PipelineTask::SentenceSimilarity
        | PipelineTask::TextToImage
        | PipelineTask::TextToSpeech
        | PipelineTask::TextToAudio => basic,
        PipelineTask::TextGeneration | PipelineTask::ImageTextToText => text_generation,
        PipelineTask::ZeroShotClassification => zero_shot_classification,
        PipelineTask::AutomaticSpeechRecognition
        | PipelineTask::AudioToAudio
        | PipelineTask::AudioClassification
        | PipelineTask::ImageClassification
        | PipelineTask::ImageToText
        | PipelineTask::ObjectDetection
        | PipelineTask::ImageSegmentation => file,
        PipelineTask::TabularRegression
        | PipelineTask::TabularClassification
        | PipelineTask::DocumentQuestionAnswering
        | PipelineTask::ZeroShotImageClassification => return None,
    };
    Some(template)
}

fn token_or_placeholder(access_token: &str) -> &str {
    if access_token.is_empty() {
        API_TOKEN_PLACEHOLDER
    } else {
        access_token
    }
}

/// Make `s` safe inside a single-quoted shell argument.
fn escape_single_quotes(s: &str) -> String {
    s.replace('\'', r"'\''")
}

fn basic(model: &ModelDescriptor, access_token: &str, _: &SnippetOptions) -> String {
    let token = token_or_placeholder(access_token);
    let model_id = &model.id;
    let input = escape_single_quotes(&model_input_snippet(model, true, false));
    format!(
        r#"curl {INFERENCE_API_BASE}/models/{model_id} \
    -X POST \
    -d '{{"inputs": {input}}}' \
    -H 'Content-Type: application/json' \
    -H "Authorization: Bearer {token}""#
    )
}

fn zero_shot_classification(
    model: &ModelDescriptor,
    access_token: &str,
    _: &SnippetOptions,
) -> String {
    let token = token_or_placeholder(access_token);
    let model_id = &model.id;
    let input = escape_single_quotes(&model_input_snippet(model, true, false));
    format!(
        r#"curl {INFERENCE_API_BASE}/models/{model_id} \
    -X POST \
    -d '{{"inputs": {input}, "parameters": {{"candidate_labels": ["refund", "legal", "faq"]}}}}' \
    -H 'Content-Type: application/json' \
    -H "Authorization: Bearer {token}""#
    )
}

fn file(model: &ModelDescriptor, access_token: &str, _: &SnippetOptions) -> String {
    let token = token_or_placeholder(access_token);
    let model_id = &model.id;
    let input = escape_single_quotes(&model_input_snippet(model, true, true));
    format!(
        r#"curl {INFERENCE_API_BASE}/models/{model_id} \
    -X POST \
    --data-binary '@{input}' \
    -H "Authorization: Bearer {token}""#
    )
}

/// Chat-completions request for conversational and vision-language models,
/// plain text generation otherwise.
fn text_generation(
    model: &ModelDescriptor,
    access_token: &str,
    options: &SnippetOptions,
) -> String {
    if !model.is_conversational() && model.task() != Some(PipelineTask::ImageTextToText) {
        return basic(model, access_token, options);
    }
    let token = token_or_placeholder(access_token);
    let model_id = &model.id;
    let messages = options
        .messages
        .clone()
        .unwrap_or_else(|| example_messages(model));
    let messages = escape_single_quotes(&stringify_messages(&messages, "    "));
    let config = stringify_generation_config(&generation_config(options), "\n    ", ": ", true);
    let stream = options.streaming();
    format!(
        r#"curl '{INFERENCE_API_BASE}/models/{model_id}/v1/chat/completions' \
    -H "Authorization: Bearer {token}" \
    -H 'Content-Type: application/json' \
    --data '{{
    "model": "{model_id}",
    "messages": {messages},
    {config},
    "stream": {stream}
}}'"#
    )
}
