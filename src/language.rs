//! Snippet generators, one per target language.
//!
//! Each sub-module is gated behind a Cargo feature flag. Only languages whose
//! features are enabled will be compiled.
//!
//! | Module | Feature | Clients |
//! |--------|---------|---------|
//! | `python` | `lang-python` | `huggingface_hub`, `openai`, `requests` |
//! | `curl` | `lang-curl` | `curl` |

#[cfg(feature = "lang-python")]
pub mod python;

#[cfg(feature = "lang-curl")]
pub mod curl;

#[cfg(feature = "lang-python")]
pub use python::PythonSnippets;

#[cfg(feature = "lang-curl")]
pub use curl::CurlSnippets;
