//! Stopword lists and the immutable set the normalizer filters against

use crate::error::{NormalizerError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use stop_words::LANGUAGE;

/// The NLTK English corpus list, one word per line.
const NLTK_ENGLISH: &str = include_str!("../../assets/stopwords/nltk_english.txt");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    French,
    German,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::English,
        Language::French,
        Language::German,
        Language::Spanish,
        Language::Italian,
        Language::Portuguese,
        Language::Dutch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::French => "french",
            Language::German => "german",
            Language::Spanish => "spanish",
            Language::Italian => "italian",
            Language::Portuguese => "portuguese",
            Language::Dutch => "dutch",
        }
    }

    fn iso(&self) -> LANGUAGE {
        match self {
            Language::English => LANGUAGE::English,
            Language::French => LANGUAGE::French,
            Language::German => LANGUAGE::German,
            Language::Spanish => LANGUAGE::Spanish,
            Language::Italian => LANGUAGE::Italian,
            Language::Portuguese => LANGUAGE::Portuguese,
            Language::Dutch => LANGUAGE::Dutch,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = NormalizerError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|language| language.as_str() == wanted)
            .ok_or_else(|| {
                NormalizerError::InvalidArgument(format!(
                    "Unknown stopword language: {}. Supported: {}",
                    s,
                    Language::ALL.map(|l| l.as_str()).join(", ")
                ))
            })
    }
}

/// Where a stopword list is loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopwordSource {
    /// Bundled NLTK corpus lists (English only)
    #[default]
    Nltk,
    /// Stopwords-ISO lists shipped by the `stop-words` crate
    Iso,
}

impl fmt::Display for StopwordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopwordSource::Nltk => f.write_str("nltk"),
            StopwordSource::Iso => f.write_str("iso"),
        }
    }
}

impl FromStr for StopwordSource {
    type Err = NormalizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "nltk" => Ok(StopwordSource::Nltk),
            "iso" => Ok(StopwordSource::Iso),
            _ => Err(NormalizerError::InvalidArgument(format!(
                "Unknown stopword source: {}. Supported: nltk, iso",
                s
            ))),
        }
    }
}

/// Immutable set of stopwords for one language.
///
/// Words are stored trimmed and lowercased. Lookups are exact, so callers
/// are expected to pass tokens that are already lowercase.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    language: Language,
    words: HashSet<String>,
}

impl StopwordSet {
    /// Load the list for `language` from `source`.
    ///
    /// Fails with [`NormalizerError::ResourceUnavailable`] rather than
    /// handing back an empty set.
    pub fn load(language: Language, source: StopwordSource) -> Result<Self> {
        let set = match source {
            StopwordSource::Nltk => match language {
                Language::English => Self::from_words(language, NLTK_ENGLISH.lines()),
                other => {
                    return Err(NormalizerError::ResourceUnavailable(format!(
                        "No bundled nltk stopword list for {}; use the iso source",
                        other
                    )))
                }
            },
            StopwordSource::Iso => {
                let words = stop_words::get(language.iso());
                Self::from_words(language, words.iter().map(|w| w.to_string()))
            }
        };

        if set.is_empty() {
            return Err(NormalizerError::ResourceUnavailable(format!(
                "Stopword list for {} from {} is empty",
                language, source
            )));
        }

        debug!(
            "Loaded {} {} stopwords from {}",
            set.len(),
            language,
            source
        );
        Ok(set)
    }

    /// Bundled NLTK English list.
    pub fn english() -> Result<Self> {
        Self::load(Language::English, StopwordSource::Nltk)
    }

    pub fn from_words<I, S>(language: Language, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self { language, words }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nltk_english_list() {
        let set = StopwordSet::english().unwrap();

        assert_eq!(set.len(), 179);
        assert_eq!(set.language(), Language::English);
        for word in ["the", "and", "of", "this", "was", "is", "don't", "wouldn"] {
            assert!(set.is_stopword(word), "{} should be a stopword", word);
        }
        for word in ["movie", "great", "terrible", ""] {
            assert!(!set.is_stopword(word), "{} should not be a stopword", word);
        }
    }

    #[test]
    fn test_nltk_other_languages_unavailable() {
        let result = StopwordSet::load(Language::German, StopwordSource::Nltk);
        assert!(matches!(result, Err(NormalizerError::ResourceUnavailable(_))));
    }

    #[test]
    fn test_iso_lists_load_for_every_language() {
        for language in Language::ALL {
            let set = StopwordSet::load(language, StopwordSource::Iso).unwrap();
            assert!(!set.is_empty());
            assert_eq!(set.language(), language);
        }

        let english = StopwordSet::load(Language::English, StopwordSource::Iso).unwrap();
        assert!(english.is_stopword("the"));
    }

    #[test]
    fn test_from_words_normalizes_entries() {
        let set = StopwordSet::from_words(Language::English, ["  The ", "", "AND", "\t"]);

        assert_eq!(set.len(), 2);
        assert!(set.is_stopword("the"));
        assert!(set.is_stopword("and"));
        assert!(!set.is_stopword("The"));
    }

    #[test]
    fn test_parse_language_and_source() {
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert_eq!(" dutch ".parse::<Language>().unwrap(), Language::Dutch);
        assert!(matches!(
            "klingon".parse::<Language>(),
            Err(NormalizerError::InvalidArgument(_))
        ));

        assert_eq!("ISO".parse::<StopwordSource>().unwrap(), StopwordSource::Iso);
        assert!("wordnet".parse::<StopwordSource>().is_err());
    }
}
