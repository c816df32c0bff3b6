//! The review normalization pipeline
//!
//! Four fixed stages, applied once per call:
//! markup stripping, character filtering, lowercasing, and
//! whitespace tokenization with stopword removal.

use crate::config::Config;
use crate::error::{NormalizerError, Result};
use crate::processing::markup::{HtmlStripper, MarkupStripper};
use crate::processing::stopwords::StopwordSet;
use log::debug;
use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

/// Everything produced along the way by one normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedText {
    pub original: String,
    pub plain_text: String,
    pub tokens: Vec<String>,
    pub kept: Vec<String>,
    pub removed: usize,
    pub output: String,
}

#[derive(Clone)]
pub struct TextNormalizer {
    stripper: Arc<dyn MarkupStripper>,
    stopwords: Arc<StopwordSet>,
}

impl TextNormalizer {
    pub fn new(stopwords: Arc<StopwordSet>, stripper: Arc<dyn MarkupStripper>) -> Self {
        Self {
            stripper,
            stopwords,
        }
    }

    /// NLTK English stopwords with the HTML stripper.
    pub fn english() -> Result<Self> {
        let stopwords = StopwordSet::english()?;
        Ok(Self::new(Arc::new(stopwords), Arc::new(HtmlStripper)))
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let stopwords = StopwordSet::load(config.stopwords.language, config.stopwords.source)?;
        debug!(
            "Built normalizer: {} stopwords ({}, {}), {} markup",
            stopwords.len(),
            config.stopwords.language,
            config.stopwords.source,
            config.markup.parser
        );
        Ok(Self::new(Arc::new(stopwords), config.markup.parser.stripper()))
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn normalize_text(&self, raw_text: &str) -> String {
        let plain = self.stripper.plain_text(raw_text);
        let letters = filter_characters(&plain);
        let lower = lowercase(&letters);
        remove_stopwords(&lower, &self.stopwords).join(" ")
    }

    pub fn normalize_detailed(&self, raw_text: &str) -> NormalizedText {
        let plain_text = self.stripper.plain_text(raw_text);
        let lower = lowercase(&filter_characters(&plain_text));

        let tokens: Vec<String> = lower.split_whitespace().map(str::to_string).collect();
        let kept: Vec<String> = tokens
            .iter()
            .filter(|token| !self.stopwords.is_stopword(token))
            .cloned()
            .collect();

        NormalizedText {
            original: raw_text.to_string(),
            plain_text,
            removed: tokens.len() - kept.len(),
            output: kept.join(" "),
            tokens,
            kept,
        }
    }

    /// Normalize raw bytes, rejecting anything that is not UTF-8 text.
    pub fn normalize_bytes(&self, raw: &[u8]) -> Result<String> {
        Ok(self.normalize_text(text_from_bytes(raw)?))
    }
}

/// View raw input as text. Only UTF-8 is accepted.
pub fn text_from_bytes(raw: &[u8]) -> Result<&str> {
    std::str::from_utf8(raw).map_err(|e| {
        NormalizerError::InvalidArgument(format!("Input is not valid UTF-8 text: {}", e))
    })
}

/// Normalize with a freshly built English normalizer.
///
/// Loads the stopword list on every call; hold a [`TextNormalizer`] when
/// normalizing more than one review.
pub fn normalize_text(raw_text: &str) -> Result<String> {
    Ok(TextNormalizer::english()?.normalize_text(raw_text))
}

fn non_letter_regex() -> &'static Regex {
    static NON_LETTER: OnceLock<Regex> = OnceLock::new();
    NON_LETTER.get_or_init(|| Regex::new(r"[^a-zA-Z]").expect("Invalid non-letter regex"))
}

/// Replace every character that is not an ASCII letter with one space.
pub fn filter_characters(text: &str) -> Cow<'_, str> {
    non_letter_regex().replace_all(text, " ")
}

pub fn lowercase(text: &str) -> String {
    text.to_ascii_lowercase()
}

/// Split on whitespace and drop stopwords, keeping input order.
pub fn remove_stopwords<'a>(text: &'a str, stopwords: &StopwordSet) -> Vec<&'a str> {
    text.split_whitespace()
        .filter(|token| !stopwords.is_stopword(token))
        .collect()
}
