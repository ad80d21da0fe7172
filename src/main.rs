use anyhow::{Context, Result};
use clap::Parser;
use hoursmith::pipeline::run_pipeline;
use hoursmith::rewrite::ChatClient;
use reqwest::Client;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

/// Rewrite free-text `opening_hours` columns of a venue CSV into a
/// constrained schedule grammar via a chat-completions endpoint, and emit a
/// fully quoted CSV.
#[derive(Debug, Parser)]
#[command(name = "hoursmith")]
struct Args {
    /// Input CSV with a header row. Rows need `name` or `name_en`;
    /// `opening_hours` is optional and rows without it pass through.
    input: PathBuf,

    /// Where to write the quoted output CSV.
    #[arg(long, default_value = "my_file.csv")]
    out: PathBuf,

    /// Keyword replacements spliced into every rewrite request.
    #[arg(long, conflicts_with = "glossary_file")]
    glossary: Option<String>,

    /// Read the glossary text from a file instead.
    #[arg(long)]
    glossary_file: Option<PathBuf>,

    /// Chat-completions endpoint.
    #[arg(long, default_value = "https://api.openai.com/v1/chat/completions")]
    endpoint: Url,

    #[arg(long, default_value = "gpt-3.5-turbo")]
    model: String,

    #[arg(long, default_value_t = 0.7)]
    temperature: f32,

    /// Rewrite requests in flight at once. Result order is preserved
    /// regardless.
    #[arg(long, default_value_t = 1)]
    concurrency: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    let args = Args::parse();

    // ─── 2) gather config ────────────────────────────────────────────
    let api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY is not set")?;
    let glossary = load_glossary(args.glossary, args.glossary_file.as_deref())?;

    // ─── 3) run the pipeline ─────────────────────────────────────────
    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("reading input file {}", args.input.display()))?;

    let backend = ChatClient::new(
        Client::new(),
        args.endpoint,
        api_key,
        args.model,
        args.temperature,
    );

    let output = run_pipeline(&input, &glossary, &backend, args.concurrency).await?;

    // ─── 4) write the artifact ───────────────────────────────────────
    fs::write(&args.out, &output)
        .with_context(|| format!("writing output file {}", args.out.display()))?;
    info!(path = %args.out.display(), "wrote output");

    Ok(())
}

fn load_glossary(inline: Option<String>, file: Option<&Path>) -> Result<String> {
    match (inline, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("reading glossary file {}", path.display())),
        (None, None) => Ok(String::new()),
    }
}
