//! Review normalizer library
//!
//! Turns raw, HTML-bearing review text into space-joined lowercase
//! alphabetic tokens with stopwords removed.
//!
//! ```ignore
//! let normalizer = review_normalizer::TextNormalizer::english()?;
//! assert_eq!(
//!     normalizer.normalize_text("<p>This Movie was GREAT!!! 10/10</p>"),
//!     "movie great"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{NormalizerError, Result};
pub use processing::markup::{HtmlStripper, MarkupParser, MarkupStripper, PlainText};
pub use processing::normalizer::{normalize_text, NormalizedText, TextNormalizer};
pub use processing::stopwords::{Language, StopwordSet, StopwordSource};
