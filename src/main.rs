//! review-normalizer: clean raw review text for downstream models

use anyhow::Context;
use clap::Parser;
use log::{debug, error, info};
use review_normalizer::cli::{Cli, Commands, ConfigAction, StopwordArgs};
use review_normalizer::config::{Config, OutputFormat};
use review_normalizer::input::reader::InputSource;
use review_normalizer::output::formatter::ReportGenerator;
use review_normalizer::processing::markup::MarkupParser;
use review_normalizer::processing::normalizer::{text_from_bytes, TextNormalizer};
use review_normalizer::processing::stopwords::StopwordSet;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> review_normalizer::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(
    command: Commands,
    config: Config,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    match command {
        Commands::Normalize {
            file,
            text,
            stopwords,
            markup,
            output,
            detailed,
        } => {
            let config = apply_overrides(config, &stopwords, markup, output);
            let normalizer =
                TextNormalizer::from_config(&config).context("Failed to build normalizer")?;

            let source = InputSource::resolve(file, text);
            let raw = source.read().await.context("Failed to read review")?;
            let review = text_from_bytes(&raw)?;

            let result = normalizer.normalize_detailed(review);
            info!(
                "Normalized review: {} tokens, {} stopwords removed",
                result.tokens.len(),
                result.removed
            );

            let use_colors = std::io::stdout().is_terminal();
            let generator = ReportGenerator::with_options(use_colors, detailed, true);
            println!("{}", generator.generate(&result, config.output.format)?);
        }

        Commands::Stopwords { stopwords, check } => {
            let config = apply_overrides(config, &stopwords, None, None);
            let set = StopwordSet::load(config.stopwords.language, config.stopwords.source)
                .context("Failed to load stopwords")?;

            if check.is_empty() {
                println!(
                    "{} stopwords ({}, {})",
                    set.len(),
                    set.language(),
                    config.stopwords.source
                );
            } else {
                for word in &check {
                    let verdict = if set.is_stopword(&word.to_lowercase()) {
                        "stopword"
                    } else {
                        "kept"
                    };
                    println!("{}\t{}", word, verdict);
                }
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);

            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let rendered =
                        toml::to_string_pretty(&config).context("Failed to render config")?;
                    println!("{}", rendered);
                }
                ConfigAction::Reset => {
                    Config::default()
                        .save_to(&path)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Configuration reset: {}", path.display());
                }
                ConfigAction::Path => println!("{}", path.display()),
            }
        }
    }

    Ok(())
}

/// Command-line flags take precedence over the config file.
fn apply_overrides(
    mut config: Config,
    stopwords: &StopwordArgs,
    markup: Option<MarkupParser>,
    output: Option<OutputFormat>,
) -> Config {
    if let Some(language) = stopwords.language {
        config.stopwords.language = language;
    }
    if let Some(source) = stopwords.source {
        config.stopwords.source = source;
    }
    if let Some(parser) = markup {
        config.markup.parser = parser;
    }
    if let Some(format) = output {
        config.output.format = format;
    }

    debug!("Effective configuration: {:?}", config);
    config
}
