//! The seam every snippet language implements.

use crate::api::{InferenceSnippet, Language, ModelDescriptor, PipelineTask, SnippetOptions};

/// Renders snippets for one target [`Language`].
///
/// Generators are registered with
/// [`SnippetRegistryBuilder::register`](crate::registry::SnippetRegistryBuilder::register)
/// and looked up by [`language`](SnippetGenerator::language).
pub trait SnippetGenerator: Send + Sync {
    /// The language this generator writes.
    fn language(&self) -> Language;

    /// Whether a template exists for `task`.
    fn supports(&self, task: PipelineTask) -> bool;

    /// Whether the model's declared task has a template.
    fn has_snippet(&self, model: &ModelDescriptor) -> bool {
        model.task().is_some_and(|task| self.supports(task))
    }

    /// Whether [`generate`](SnippetGenerator::generate) produces non-empty
    /// snippets for the model. Defaults to [`has_snippet`](SnippetGenerator::has_snippet);
    /// generators that route on tags as well as tasks override it.
    fn renders(&self, model: &ModelDescriptor) -> bool {
        self.has_snippet(model)
    }

    /// Render the snippets for `model`.
    ///
    /// Never fails: a model whose task has no template yields a single
    /// [`InferenceSnippet::empty`]. An empty `access_token` renders a
    /// placeholder instead.
    fn generate(
        &self,
        model: &ModelDescriptor,
        access_token: &str,
        options: &SnippetOptions,
    ) -> Vec<InferenceSnippet>;
}
