//! Public API types describing models, snippet options, and generated snippets.

use crate::error::{Result, SnippetError};
use crate::messages::ChatMessage;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Model tag marking a chat-capable model.
pub const CONVERSATIONAL_TAG: &str = "conversational";

/// Base URL of the hosted inference API.
pub const INFERENCE_API_BASE: &str = "https://api-inference.huggingface.co";

/// Rendered in place of the access token when none is supplied.
pub const API_TOKEN_PLACEHOLDER: &str = "{API_TOKEN}";

/// `max_tokens` used in chat snippets when [`SnippetOptions::max_tokens`] is unset.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// The inference tasks that have snippet templates.
///
/// Models carry their task as a free-form pipeline tag; [`ModelDescriptor::task`]
/// parses it into this enum and yields `None` for tags without a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PipelineTask {
    TextClassification,
    TokenClassification,
    TableQuestionAnswering,
    QuestionAnswering,
    ZeroShotClassification,
    Translation,
    Summarization,
    FeatureExtraction,
    TextGeneration,
    Text2TextGeneration,
    ImageTextToText,
    FillMask,
    SentenceSimilarity,
    AutomaticSpeechRecognition,
    TextToImage,
    TextToSpeech,
    TextToAudio,
    AudioToAudio,
    AudioClassification,
    ImageClassification,
    TabularRegression,
    TabularClassification,
    ObjectDetection,
    ImageSegmentation,
    DocumentQuestionAnswering,
    ImageToText,
    ZeroShotImageClassification,
}

impl PipelineTask {
    /// Every task, in declaration order.
    pub const ALL: [PipelineTask; 27] = [
        Self::TextClassification,
        Self::TokenClassification,
        Self::TableQuestionAnswering,
        Self::QuestionAnswering,
        Self::ZeroShotClassification,
        Self::Translation,
        Self::Summarization,
        Self::FeatureExtraction,
        Self::TextGeneration,
        Self::Text2TextGeneration,
        Self::ImageTextToText,
        Self::FillMask,
        Self::SentenceSimilarity,
        Self::AutomaticSpeechRecognition,
        Self::TextToImage,
        Self::TextToSpeech,
        Self::TextToAudio,
        Self::AudioToAudio,
        Self::AudioClassification,
        Self::ImageClassification,
        Self::TabularRegression,
        Self::TabularClassification,
        Self::ObjectDetection,
        Self::ImageSegmentation,
        Self::DocumentQuestionAnswering,
        Self::ImageToText,
        Self::ZeroShotImageClassification,
    ];

    /// The kebab-case pipeline tag for this task (e.g. `"text-to-image"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TextClassification => "text-classification",
            Self::TokenClassification => "token-classification",
            Self::TableQuestionAnswering => "table-question-answering",
            Self::QuestionAnswering => "question-answering",
            Self::ZeroShotClassification => "zero-shot-classification",
            Self::Translation => "translation",
            Self::Summarization => "summarization",
            Self::FeatureExtraction => "feature-extraction",
            Self::TextGeneration => "text-generation",
            Self::Text2TextGeneration => "text2text-generation",
            Self::ImageTextToText => "image-text-to-text",
            Self::FillMask => "fill-mask",
            Self::SentenceSimilarity => "sentence-similarity",
            Self::AutomaticSpeechRecognition => "automatic-speech-recognition",
            Self::TextToImage => "text-to-image",
            Self::TextToSpeech => "text-to-speech",
            Self::TextToAudio => "text-to-audio",
            Self::AudioToAudio => "audio-to-audio",
            Self::AudioClassification => "audio-classification",
            Self::ImageClassification => "image-classification",
            Self::TabularRegression => "tabular-regression",
            Self::TabularClassification => "tabular-classification",
            Self::ObjectDetection => "object-detection",
            Self::ImageSegmentation => "image-segmentation",
            Self::DocumentQuestionAnswering => "document-question-answering",
            Self::ImageToText => "image-to-text",
            Self::ZeroShotImageClassification => "zero-shot-image-classification",
        }
    }
}

impl std::fmt::Display for PipelineTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PipelineTask {
    type Err = SnippetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|task| task.as_str() == s)
            .ok_or_else(|| SnippetError::Config(format!("Unknown pipeline tag '{}'", s)))
    }
}

/// Target language of a generated snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Python, using `huggingface_hub`, `openai`, or `requests`.
    Python,
    /// A shell command line built around `curl`.
    Curl,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Python => write!(f, "python"),
            Self::Curl => write!(f, "curl"),
        }
    }
}

impl FromStr for Language {
    type Err = SnippetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "python" | "py" => Ok(Self::Python),
            "curl" | "sh" | "shell" => Ok(Self::Curl),
            other => Err(SnippetError::Config(format!("Unknown language '{}'", other))),
        }
    }
}

/// Metadata describing a model, as published by the model hub.
///
/// Unknown JSON fields are ignored, so a raw hub API response deserializes
/// directly.
///
/// # Example JSON
///
/// ```json
/// {
///   "id": "distilbert/distilbert-base-uncased-finetuned-sst-2-english",
///   "pipeline_tag": "text-classification",
///   "library_name": "transformers",
///   "tags": ["transformers", "pytorch"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Repository id of the model (e.g. `"openai-community/gpt2"`).
    pub id: String,
    /// Declared task, e.g. `"text-classification"`. Free-form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_tag: Option<String>,
    /// Library the model was built with (e.g. `"transformers"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Mask token used by fill-mask models. Defaults to `[MASK]` in examples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_token: Option<String>,
}

impl ModelDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_pipeline_tag(mut self, tag: impl Into<String>) -> Self {
        self.pipeline_tag = Some(tag.into());
        self
    }

    pub fn with_library_name(mut self, library: impl Into<String>) -> Self {
        self.library_name = Some(library.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_mask_token(mut self, token: impl Into<String>) -> Self {
        self.mask_token = Some(token.into());
        self
    }

    /// Parse the pipeline tag. `None` when absent or when no template exists
    /// for it.
    pub fn task(&self) -> Option<PipelineTask> {
        self.pipeline_tag.as_deref().and_then(|t| t.parse().ok())
    }

    /// Whether the model carries the `conversational` tag.
    pub fn is_conversational(&self) -> bool {
        self.tags.iter().any(|t| t == CONVERSATIONAL_TAG)
    }

    /// Validate invariants: the id must be non-empty and contain no whitespace.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(SnippetError::Config("Model id cannot be empty".to_string()));
        }
        if self.id.chars().any(char::is_whitespace) {
            return Err(SnippetError::Config(format!(
                "Model id '{}' must not contain whitespace",
                self.id
            )));
        }
        Ok(())
    }

    /// Parse a single descriptor from a JSON value.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let model: Self = serde_json::from_value(value)
            .map_err(|e| SnippetError::Config(format!("Invalid model JSON: {}", e)))?;
        model.validate()?;
        Ok(model)
    }

    /// Parse a single descriptor from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let model: Self = serde_json::from_str(s)
            .map_err(|e| SnippetError::Config(format!("Invalid model JSON: {}", e)))?;
        model.validate()?;
        Ok(model)
    }

    /// Read and parse a single descriptor from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&read_json_file(path.as_ref())?)
    }
}

/// Parse an array of model descriptors from a JSON string.
pub fn models_from_str(s: &str) -> Result<Vec<ModelDescriptor>> {
    let models: Vec<ModelDescriptor> = serde_json::from_str(s)
        .map_err(|e| SnippetError::Config(format!("Invalid model list JSON: {}", e)))?;
    for model in &models {
        model.validate()?;
    }
    Ok(models)
}

/// Read and parse an array of model descriptors from a JSON file.
pub fn models_from_file(path: impl AsRef<Path>) -> Result<Vec<ModelDescriptor>> {
    models_from_str(&read_json_file(path.as_ref())?)
}

fn read_json_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        SnippetError::Config(format!(
            "Failed to read model file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Generation settings applied to chat snippets.
///
/// All fields are optional; see the accessors for defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SnippetOptions {
    /// Render the streaming variant. Defaults to `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streaming: Option<bool>,
    /// Messages to embed in chat snippets instead of the task's example chat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<ChatMessage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Defaults to [`DEFAULT_MAX_TOKENS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

impl SnippetOptions {
    pub fn streaming(&self) -> bool {
        self.streaming.unwrap_or(true)
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }

    /// Reject settings no inference endpoint would accept.
    pub fn validate(&self) -> Result<()> {
        if let Some(t) = self.temperature
            && (!t.is_finite() || t < 0.0)
        {
            return Err(SnippetError::Config(format!(
                "Temperature must be a non-negative number, got {}",
                t
            )));
        }
        if let Some(p) = self.top_p
            && !(p > 0.0 && p <= 1.0)
        {
            return Err(SnippetError::Config(format!(
                "top_p must be in (0, 1], got {}",
                p
            )));
        }
        if self.max_tokens == Some(0) {
            return Err(SnippetError::Config(
                "max_tokens must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// The client library a snippet is written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnippetClient {
    HuggingfaceHub,
    Openai,
    Requests,
}

impl std::fmt::Display for SnippetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HuggingfaceHub => write!(f, "huggingface_hub"),
            Self::Openai => write!(f, "openai"),
            Self::Requests => write!(f, "requests"),
        }
    }
}

/// A generated block of example client code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InferenceSnippet {
    /// Client library label, when a task offers several alternatives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<SnippetClient>,
    pub content: String,
}

impl InferenceSnippet {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            client: None,
            content: content.into(),
        }
    }

    pub fn with_client(client: SnippetClient, content: impl Into<String>) -> Self {
        Self {
            client: Some(client),
            content: content.into(),
        }
    }

    /// The placeholder returned when no template matches the model's task.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
