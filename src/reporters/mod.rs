//! Output reporters for research reports
//!
//! Supports two output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON

mod json;
mod text;

use anyhow::{anyhow, Result};
use seo_analyzer::{Paper, ResearchReport};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a research report in the specified format
pub fn report(report: &ResearchReport, paper: &Paper, format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(report, paper, fmt)
}

/// Render a research report using an OutputFormat enum
pub fn report_with_format(
    report: &ResearchReport,
    paper: &Paper,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report, paper),
        OutputFormat::Json => json::render(report),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use seo_analyzer::{AnalyzerConfig, PaperAttributes, Researcher};

    /// A small paper and its report
    pub(crate) fn test_report() -> (ResearchReport, Paper) {
        let mut config = AnalyzerConfig::default();
        config.links.parent_domain = "example.com".to_string();
        let researcher = Researcher::new(&config).expect("researcher");

        let paper = Paper::new(
            r#"<p>The cat runs fast. The cats run fast.</p><p><a href="https://other.org">More</a> cats.</p>"#,
            PaperAttributes {
                keyword: "cat".to_string(),
                title: "Cats Running".to_string(),
                ..PaperAttributes::default()
            },
        );
        (ResearchReport::build(&paper, &researcher), paper)
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").ok(), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_str("JSON").ok(), Some(OutputFormat::Json));
        assert!(OutputFormat::from_str("sarif").is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_report_dispatch() {
        let (report, paper) = test_report();
        let json = super::report(&report, &paper, "json").expect("json");
        assert!(json.trim_start().starts_with('{'));
        let text = super::report(&report, &paper, "text").expect("text");
        assert!(text.contains("Cats Running"));
    }
}
