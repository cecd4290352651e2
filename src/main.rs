use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use orchat::config::Config;
use orchat::llm::OpenRouterProvider;
use orchat::repl;

/// Name of the environment variable holding the bearer token.
const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

#[derive(Parser)]
#[command(name = "orchat", version, about = "Chat with models through OpenRouter")]
struct Args {
    /// Path to the config file.
    #[arg(long, default_value = ".orchat/config.yaml")]
    config: PathBuf,

    /// Model identifier, overriding the config file.
    #[arg(long)]
    model: Option<String>,

    /// Sampling temperature, overriding the config file.
    #[arg(long)]
    temperature: Option<f32>,

    /// Maximum number of generated tokens, overriding the config file.
    #[arg(long)]
    max_output_tokens: Option<u32>,

    /// One-shot prompt; starts the interactive loop when absent.
    prompt: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = Config::load(&args.config)
        .await
        .with_context(|| format!("failed to load config from {}", args.config.display()))?;
    if let Some(model) = args.model {
        config.chat.model = model;
    }
    if let Some(temperature) = args.temperature {
        config.chat.temperature = temperature;
    }
    if let Some(max_output_tokens) = args.max_output_tokens {
        config.chat.max_output_tokens = max_output_tokens;
    }

    let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
    if api_key.is_empty() {
        bail!("{API_KEY_ENV} is not set; export an OpenRouter API key before chatting");
    }

    let provider = OpenRouterProvider::new(
        reqwest::Client::new(),
        api_key,
        config.api.base_url.clone(),
    )
    .with_attribution(config.api.referer.clone(), config.api.title.clone());
    info!(base_url = %config.api.base_url, model = %config.chat.model, "provider ready");

    if args.prompt.is_empty() {
        repl::run(&provider, &config.chat).await
    } else {
        let prompt = args.prompt.join(" ");
        let completion = repl::ask(&provider, &config.chat, &prompt).await?;
        println!("{}", completion.text);
        Ok(())
    }
}
