//! `snippets` — print inference snippets for a model described by a JSON file.
//!
//! Usage:
//!
//! ```text
//! snippets <model.json> [--lang <python|curl>] [--token <token>] [--no-stream]
//!          [--max-tokens <n>] [--temperature <t>] [--top-p <p>] [--json]
//! ```
//!
//! The model file holds a hub API response (or any JSON object with at least
//! an `id`). Without `--token` the `HF_TOKEN` environment variable is used, and
//! without either the snippets carry an `{API_TOKEN}` placeholder.

use inference_snippets::api::{Language, ModelDescriptor, SnippetOptions};
use inference_snippets::registry::SnippetRegistry;
use std::process;

const TOKEN_ENV: &str = "HF_TOKEN";

fn print_usage() {
    eprintln!("Usage: snippets <model.json> [OPTIONS]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <model.json>         Path to a model metadata JSON file");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --lang <lang>        Snippet language: python (default) or curl");
    eprintln!("  --token <token>      Access token (also settable via HF_TOKEN env var)");
    eprintln!("  --no-stream          Render the non-streaming chat variant");
    eprintln!("  --max-tokens <n>     max_tokens for chat snippets (default 500)");
    eprintln!("  --temperature <t>    Sampling temperature for chat snippets");
    eprintln!("  --top-p <p>          Nucleus sampling threshold for chat snippets");
    eprintln!("  --json               Print snippets as a JSON array");
    eprintln!("  --help               Show this message");
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // --- Argument parsing ---------------------------------------------------
    let mut args = std::env::args().skip(1);
    let mut model_path: Option<String> = None;
    let mut language = Language::Python;
    let mut token: Option<String> = None;
    let mut options = SnippetOptions::default();
    let mut as_json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--no-stream" => options.streaming = Some(false),
            "--json" => as_json = true,
            "--lang" => language = value_for(&mut args, "--lang")?.parse()?,
            "--token" => token = Some(value_for(&mut args, "--token")?),
            "--max-tokens" => {
                options.max_tokens = Some(value_for(&mut args, "--max-tokens")?.parse()?)
            }
            "--temperature" => {
                options.temperature = Some(value_for(&mut args, "--temperature")?.parse()?)
            }
            "--top-p" => options.top_p = Some(value_for(&mut args, "--top-p")?.parse()?),
            _ if arg.starts_with('-') => {
                anyhow::bail!("Unknown option: {arg}");
            }
            _ => {
                if model_path.is_some() {
                    anyhow::bail!("Unexpected argument: {arg}");
                }
                model_path = Some(arg);
            }
        }
    }

    let model_path = model_path.ok_or_else(|| {
        print_usage();
        anyhow::anyhow!("Missing required argument: <model.json>")
    })?;

    let token = token
        .or_else(|| std::env::var(TOKEN_ENV).ok())
        .unwrap_or_default();

    // --- Render -------------------------------------------------------------
    let model = ModelDescriptor::from_file(&model_path)
        .map_err(|e| anyhow::anyhow!("Failed to load model '{model_path}': {e}"))?;

    let registry = SnippetRegistry::default();
    if !registry.renders(&model, language) {
        eprintln!(
            "warning: no {language} template for task '{}'",
            model.pipeline_tag.as_deref().unwrap_or("none")
        );
    }
    let snippets = registry.snippets(&model, language, &token, &options)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&snippets)?);
        return Ok(());
    }

    for (i, snippet) in snippets.iter().enumerate() {
        if i > 0 {
            println!();
        }
        if let Some(client) = snippet.client {
            println!("# --- {client} ---");
        }
        println!("{}", snippet.content);
    }
    Ok(())
}

fn value_for(args: &mut impl Iterator<Item = String>, flag: &str) -> anyhow::Result<String> {
    args.next()
        .ok_or_else(|| anyhow::anyhow!("{flag} requires a value"))
}
