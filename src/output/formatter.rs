//! Output formatters for normalization results

use crate::config::OutputFormat;
use crate::error::Result;
use crate::processing::normalizer::NormalizedText;
use colored::{Color, Colorize};

pub trait OutputFormatter {
    fn format_result(&self, result: &NormalizedText) -> Result<String>;
}

/// Prints the normalized string, optionally followed by a token summary.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

/// Picks the formatter for the configured output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_result(&self, result: &NormalizedText) -> Result<String> {
        if !self.detailed {
            return Ok(result.output.clone());
        }

        let mut out = String::new();
        out.push_str(&result.output);
        out.push('\n');
        out.push_str(&self.colorize(
            &format!(
                "tokens: {}  kept: {}  stopwords removed: {}",
                result.tokens.len(),
                result.kept.len(),
                result.removed
            ),
            Color::BrightBlack,
        ));
        Ok(out)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &NormalizedText) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(result)?)
        } else {
            Ok(serde_json::to_string(result)?)
        }
    }
}

impl ReportGenerator {
    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
        }
    }

    pub fn generate(&self, result: &NormalizedText, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_result(result),
            OutputFormat::Json => self.json_formatter.format_result(result),
        }
    }
}
