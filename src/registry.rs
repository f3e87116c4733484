//! The registry that owns one [`SnippetGenerator`] per language and serves
//! snippet requests.

use crate::api::{InferenceSnippet, Language, ModelDescriptor, SnippetOptions};
use crate::error::{Result, SnippetError};
use crate::traits::SnippetGenerator;
use std::collections::HashMap;

/// Lookup table from [`Language`] to its generator.
///
/// Build one with [`SnippetRegistry::builder()`], or use
/// [`SnippetRegistry::default()`] for every language compiled into the crate.
/// Requests are validated, dispatched, logged, and counted in the
/// `snippet_generation.total` metric.
pub struct SnippetRegistry {
    generators: HashMap<Language, Box<dyn SnippetGenerator>>,
}

impl SnippetRegistry {
    pub fn builder() -> SnippetRegistryBuilder {
        SnippetRegistryBuilder::default()
    }

    /// Registered languages, sorted.
    pub fn languages(&self) -> Vec<Language> {
        let mut languages: Vec<Language> = self.generators.keys().copied().collect();
        languages.sort();
        languages
    }

    pub fn contains_language(&self, language: Language) -> bool {
        self.generators.contains_key(&language)
    }

    /// Whether `language` is registered and has a template for the model's
    /// task.
    pub fn has_snippet(&self, model: &ModelDescriptor, language: Language) -> bool {
        self.generators
            .get(&language)
            .is_some_and(|generator| generator.has_snippet(model))
    }

    /// Whether `language` is registered and renders non-empty snippets for
    /// the model, including tag-routed chat snippets.
    pub fn renders(&self, model: &ModelDescriptor, language: Language) -> bool {
        self.generators
            .get(&language)
            .is_some_and(|generator| generator.renders(model))
    }

    /// Render the snippets for `model` in `language`.
    ///
    /// Fails only on an invalid descriptor or options, or an unregistered
    /// language. A task without a template still succeeds with one empty
    /// snippet.
    #[tracing::instrument(skip(self, model, access_token, options), fields(model = %model.id))]
    pub fn snippets(
        &self,
        model: &ModelDescriptor,
        language: Language,
        access_token: &str,
        options: &SnippetOptions,
    ) -> Result<Vec<InferenceSnippet>> {
        model.validate()?;
        options.validate()?;
        let generator = self
            .generators
            .get(&language)
            .ok_or_else(|| SnippetError::LanguageNotRegistered(language.to_string()))?;

        let snippets = generator.generate(model, access_token, options);

        let task = model.task().map(|t| t.as_str()).unwrap_or("unknown");
        let status = if snippets.iter().any(|s| !s.is_empty()) {
            tracing::debug!(task = %task, count = snippets.len(), "Rendered snippets");
            "generated"
        } else {
            tracing::debug!(task = %task, "No snippet template for task");
            "unsupported"
        };

        metrics::counter!(
            "snippet_generation.total",
            "language" => language.to_string(),
            "task" => task,
            "status" => status
        )
        .increment(1);

        Ok(snippets)
    }
}

impl Default for SnippetRegistry {
    fn default() -> Self {
        let generators = default_generators()
            .into_iter()
            .map(|generator| (generator.language(), generator))
            .collect();
        Self { generators }
    }
}

/// Generators for every language feature enabled at compile time.
fn default_generators() -> Vec<Box<dyn SnippetGenerator>> {
    #[allow(unused_mut)]
    let mut generators: Vec<Box<dyn SnippetGenerator>> = Vec::new();
    #[cfg(feature = "lang-python")]
    generators.push(Box::new(crate::language::PythonSnippets));
    #[cfg(feature = "lang-curl")]
    generators.push(Box::new(crate::language::CurlSnippets));
    generators
}

/// Builder for [`SnippetRegistry`].
#[derive(Default)]
pub struct SnippetRegistryBuilder {
    generators: Vec<Box<dyn SnippetGenerator>>,
}

impl SnippetRegistryBuilder {
    pub fn register(mut self, generator: impl SnippetGenerator + 'static) -> Self {
        self.generators.push(Box::new(generator));
        self
    }

    /// Register every language compiled into the crate.
    pub fn with_default_languages(mut self) -> Self {
        self.generators.extend(default_generators());
        self
    }

    /// Build the registry. Registering two generators for the same language
    /// is a configuration error.
    pub fn build(self) -> Result<SnippetRegistry> {
        let mut generators = HashMap::with_capacity(self.generators.len());
        for generator in self.generators {
            let language = generator.language();
            if generators.insert(language, generator).is_some() {
                return Err(SnippetError::Config(format!(
                    "Language '{}' registered more than once",
                    language
                )));
            }
        }
        tracing::debug!(languages = generators.len(), "Snippet registry built");
        Ok(SnippetRegistry { generators })
    }
}
