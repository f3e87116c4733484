//! Error types for snippet generation.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SnippetError>;

/// Errors raised while preparing a snippet request.
///
/// Rendering a template never fails: a task without a template yields an
/// empty snippet instead. Errors only come from validating inputs and from
/// looking up a language in a [`SnippetRegistry`](crate::registry::SnippetRegistry).
#[derive(Debug, Error)]
pub enum SnippetError {
    /// Invalid model descriptor, generation options, or malformed JSON input.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No generator is registered for the requested language.
    #[error("Language not registered: {0}")]
    LanguageNotRegistered(String),
}
