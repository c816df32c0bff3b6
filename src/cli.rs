//! CLI interface for the review normalizer

use crate::config::OutputFormat;
use crate::processing::markup::MarkupParser;
use crate::processing::stopwords::{Language, StopwordSource};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "review-normalizer")]
#[command(about = "Clean raw review text into lowercase words without stopwords")]
#[command(
    long_about = "Strip HTML markup, non-letters and stopwords from a review, producing space-joined lowercase tokens ready for a downstream model"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize one review (stdin when neither --file nor --text is given)
    Normalize {
        /// Read the review from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Review text given inline
        #[arg(short, long, conflicts_with = "file")]
        text: Option<String>,

        #[command(flatten)]
        stopwords: StopwordArgs,

        /// Markup parser: html, none
        #[arg(short, long, value_parser = parse_markup_parser)]
        markup: Option<MarkupParser>,

        /// Output format: console, json
        #[arg(short, long, value_parser = parse_output_format)]
        output: Option<OutputFormat>,

        /// Print token counts after the normalized text
        #[arg(short, long)]
        detailed: bool,
    },

    /// Inspect the active stopword list
    Stopwords {
        #[command(flatten)]
        stopwords: StopwordArgs,

        /// Words to look up; prints the list size when omitted
        #[arg(long = "check")]
        check: Vec<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct StopwordArgs {
    /// Stopword language (english, french, german, spanish, italian, portuguese, dutch)
    #[arg(short, long, value_parser = parse_language)]
    pub language: Option<Language>,

    /// Stopword source: nltk, iso
    #[arg(short, long, value_parser = parse_stopword_source)]
    pub source: Option<StopwordSource>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

pub fn parse_language(value: &str) -> Result<Language, String> {
    value.parse().map_err(|e: crate::error::NormalizerError| e.to_string())
}

pub fn parse_stopword_source(value: &str) -> Result<StopwordSource, String> {
    value.parse().map_err(|e: crate::error::NormalizerError| e.to_string())
}

pub fn parse_markup_parser(value: &str) -> Result<MarkupParser, String> {
    value.parse().map_err(|e: crate::error::NormalizerError| e.to_string())
}

pub fn parse_output_format(value: &str) -> Result<OutputFormat, String> {
    value.parse().map_err(|e: crate::error::NormalizerError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_args() {
        let cli = Cli::try_parse_from([
            "review-normalizer",
            "normalize",
            "--text",
            "<p>Great</p>",
            "--source",
            "iso",
            "--output",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Normalize {
                text,
                file,
                stopwords,
                output,
                markup,
                ..
            } => {
                assert_eq!(text.as_deref(), Some("<p>Great</p>"));
                assert!(file.is_none());
                assert_eq!(stopwords.source, Some(StopwordSource::Iso));
                assert_eq!(stopwords.language, None);
                assert_eq!(output, Some(OutputFormat::Json));
                assert_eq!(markup, None);
            }
            _ => panic!("expected normalize command"),
        }
    }

    #[test]
    fn test_file_and_text_conflict() {
        let result = Cli::try_parse_from([
            "review-normalizer",
            "normalize",
            "--file",
            "review.html",
            "--text",
            "inline",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_language_rejected() {
        let result = Cli::try_parse_from(["review-normalizer", "stopwords", "--language", "elvish"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_stopwords_check_words() {
        let cli = Cli::try_parse_from([
            "review-normalizer",
            "-v",
            "stopwords",
            "--check",
            "the",
            "--check",
            "movie",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Stopwords { check, .. } => assert_eq!(check, vec!["the", "movie"]),
            _ => panic!("expected stopwords command"),
        }
    }
}
