//! Quick-start example: render Python and curl snippets for a chat model.
//!
//! Run with:
//! ```sh
//! cargo run --example quick_start
//! ```

use inference_snippets::api::{Language, ModelDescriptor, SnippetOptions};
use inference_snippets::registry::SnippetRegistry;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Describe the model (normally parsed from a hub API response)
    let model = ModelDescriptor::from_json_str(
        r#"{
            "id": "meta-llama/Llama-3.1-8B-Instruct",
            "pipeline_tag": "text-generation",
            "library_name": "transformers",
            "tags": ["transformers", "conversational"]
        }"#,
    )?;

    // 2. Pick generation settings for the chat snippet
    let options = SnippetOptions {
        streaming: Some(false),
        temperature: Some(0.7),
        ..Default::default()
    };

    // 3. Render every registered language
    let registry = SnippetRegistry::default();
    for language in registry.languages() {
        if !registry.renders(&model, language) {
            continue;
        }
        for snippet in registry.snippets(&model, language, "", &options)? {
            match snippet.client {
                Some(client) => println!("=== {language} ({client}) ==="),
                None => println!("=== {language} ==="),
            }
            println!("{}\n", snippet.content);
        }
    }

    Ok(())
}
