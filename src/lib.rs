//! Ready-to-paste client code snippets for calling hosted ML inference endpoints.
//!
//! Given a model's hub metadata and an access token, the crate picks a
//! template by the model's declared task (text classification, text-to-image,
//! speech synthesis, ...) and renders one or more example programs that call
//! the matching inference endpoint. Chat-capable models get chat-completion
//! snippets, in streaming or single-shot form.
//!
//! # Key concepts
//!
//! - **[`ModelDescriptor`](api::ModelDescriptor)** — model id, pipeline tag,
//!   library name, and tags, usually parsed from a hub API response.
//! - **[`SnippetGenerator`](traits::SnippetGenerator)** — one implementation per
//!   target language, each a dispatch table from task to template.
//! - **[`SnippetRegistry`](registry::SnippetRegistry)** — owns the generators,
//!   validates requests, and emits logs and metrics.
//!
//! Rendering never fails on an unknown task: the result is a single empty
//! snippet.
//!
//! # Quick start
//!
//! ```rust
//! use inference_snippets::api::{Language, ModelDescriptor, SnippetOptions};
//! use inference_snippets::registry::SnippetRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let model = ModelDescriptor::new("openai-community/gpt2").with_pipeline_tag("text-generation");
//! let registry = SnippetRegistry::default();
//!
//! let snippets = registry.snippets(&model, Language::Python, "hf_xxx", &SnippetOptions::default())?;
//! assert!(snippets[0].content.contains("API_URL"));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod inputs;
pub mod language;
pub mod messages;
pub mod registry;
pub mod traits;
