//! JSON reporter
//!
//! Outputs the full ResearchReport as pretty-printed JSON.

use anyhow::Result;
use seo_analyzer::ResearchReport;

/// Render report as JSON
pub fn render(report: &ResearchReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
