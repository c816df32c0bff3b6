//! Markup stripping: recover the human-readable text of an HTML fragment

use crate::error::{NormalizerError, Result};
use scraper::{Html, Node};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Elements whose character data is not document text.
const NON_TEXT_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Which stripper the normalizer runs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupParser {
    #[default]
    Html,
    None,
}

impl MarkupParser {
    pub fn stripper(&self) -> Arc<dyn MarkupStripper> {
        match self {
            MarkupParser::Html => Arc::new(HtmlStripper),
            MarkupParser::None => Arc::new(PlainText),
        }
    }
}

impl fmt::Display for MarkupParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupParser::Html => f.write_str("html"),
            MarkupParser::None => f.write_str("none"),
        }
    }
}

impl FromStr for MarkupParser {
    type Err = NormalizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(MarkupParser::Html),
            "none" | "plain" => Ok(MarkupParser::None),
            _ => Err(NormalizerError::InvalidArgument(format!(
                "Unknown markup parser: {}. Supported: html, none",
                s
            ))),
        }
    }
}

/// Anything that can turn a possibly-marked-up string into plain text.
///
/// Implementations must never fail: malformed markup yields the best text
/// that can be recovered from it.
pub trait MarkupStripper: Send + Sync {
    fn plain_text(&self, input: &str) -> String;
}

/// HTML fragment stripper backed by the html5ever parser.
///
/// Text nodes are concatenated in document order without a separator, and
/// entities come out decoded.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlStripper;

impl MarkupStripper for HtmlStripper {
    fn plain_text(&self, input: &str) -> String {
        if !looks_like_markup(input) {
            return input.to_string();
        }

        let fragment = Html::parse_fragment(input);
        let mut text = String::with_capacity(input.len());

        // Explicit stack: nesting depth is input-controlled.
        let mut pending = vec![*fragment.root_element()];
        while let Some(node) = pending.pop() {
            match node.value() {
                Node::Text(chunk) => text.push_str(chunk),
                Node::Element(element) if NON_TEXT_ELEMENTS.contains(&element.name()) => {}
                _ => pending.extend(node.children().rev()),
            }
        }

        text
    }
}

/// Identity stripper for input that is known to carry no markup.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainText;

impl MarkupStripper for PlainText {
    fn plain_text(&self, input: &str) -> String {
        input.to_string()
    }
}

fn looks_like_markup(input: &str) -> bool {
    input.contains('<') || input.contains('&')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags() {
        let text = HtmlStripper.plain_text("<p>This Movie was <b>GREAT</b>!!!</p>");
        assert_eq!(text, "This Movie was GREAT!!!");
    }

    #[test]
    fn test_decodes_entities() {
        assert_eq!(HtmlStripper.plain_text("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(HtmlStripper.plain_text("&lt;tag&gt;"), "<tag>");
    }

    #[test]
    fn test_adjacent_text_nodes_are_concatenated() {
        assert_eq!(HtmlStripper.plain_text("<b>good</b>film"), "goodfilm");
        assert_eq!(HtmlStripper.plain_text("one<br /><br />two"), "onetwo");
    }

    #[test]
    fn test_drops_script_style_and_comments() {
        let html = "<style>p { color: red }</style>kept<script>var x = 1;</script><!-- note -->";
        assert_eq!(HtmlStripper.plain_text(html), "kept");
    }

    #[test]
    fn test_malformed_markup_degrades_gracefully() {
        assert_eq!(HtmlStripper.plain_text("<p>unclosed <b>bold"), "unclosed bold");
        assert_eq!(HtmlStripper.plain_text("a < b"), "a < b");
        assert_eq!(HtmlStripper.plain_text("</div></div>"), "");
    }

    #[test]
    fn test_deeply_nested_markup() {
        let depth = 4000;
        let html = "<div>word ".repeat(depth);

        let text = HtmlStripper.plain_text(&html);
        assert_eq!(text.split_whitespace().count(), depth);
        assert!(text.split_whitespace().all(|w| w == "word"));
    }

    #[test]
    fn test_nested_hidden_elements_are_skipped_whole() {
        let html = "<div>a<style><b>x</b></style><p>b<script>y</script>c</p></div>d";
        assert_eq!(HtmlStripper.plain_text(html), "abcd");
    }

    #[test]
    fn test_plain_input_passes_through() {
        let input = "  no markup here, 10/10  ";
        assert_eq!(HtmlStripper.plain_text(input), input);
        assert_eq!(HtmlStripper.plain_text(""), "");
    }

    #[test]
    fn test_plain_text_stripper_is_identity() {
        assert_eq!(PlainText.plain_text("<p>kept</p>"), "<p>kept</p>");
    }

    #[test]
    fn test_parser_selects_stripper() {
        assert_eq!("HTML".parse::<MarkupParser>().unwrap(), MarkupParser::Html);
        assert_eq!("plain".parse::<MarkupParser>().unwrap(), MarkupParser::None);
        assert!("xml".parse::<MarkupParser>().is_err());

        assert_eq!(MarkupParser::Html.stripper().plain_text("<b>x</b>"), "x");
        assert_eq!(MarkupParser::None.stripper().plain_text("<b>x</b>"), "<b>x</b>");
    }
}
