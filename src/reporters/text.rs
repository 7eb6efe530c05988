//! Text (terminal) reporter with colors and formatting

use anyhow::Result;
use seo_analyzer::{Paper, ResearchReport};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Color for a band score relative to the best possible score
fn score_color(score: f64, max: f64) -> &'static str {
    if max <= 0.0 {
        return RESET;
    }
    match score / max {
        r if r >= 0.8 => "\x1b[32m", // Green
        r if r >= 0.5 => "\x1b[33m", // Yellow
        _ => "\x1b[31m",             // Red
    }
}

/// Render report as formatted terminal output
pub fn render(report: &ResearchReport, paper: &Paper) -> Result<String> {
    let mut out = String::new();

    // Header
    out.push_str(&format!("\n{BOLD}Content Analysis{RESET}\n"));
    out.push_str(&format!("{DIM}──────────────────────────────────────{RESET}\n"));
    if paper.has_title() {
        out.push_str(&format!("Title: {}\n", paper.title()));
    }
    out.push_str(&format!(
        "Words: {}  Sentences: {}  Paragraphs: {}\n\n",
        report.word_count,
        report.sentence_count,
        report.paragraphs.len()
    ));

    // Readability
    out.push_str(&format!("{BOLD}READABILITY{RESET}\n"));
    match &report.readability {
        Some(r) => {
            let color = score_color(r.score, r.max_score);
            out.push_str(&format!(
                "  Flesch ease {:.2} is {color}{}{RESET} ({}/{})\n\n",
                r.ease, r.label, r.score, r.max_score
            ));
        }
        None => out.push_str(&format!("  {DIM}Add some content to calculate readability.{RESET}\n\n")),
    }

    // Links
    let links = &report.links;
    out.push_str(&format!("{BOLD}LINKS{RESET} ({} total)\n", links.total));
    if links.has_anchors() {
        out.push_str(&format!(
            "  Internal: {} ({} nofollow)  External: {} ({} nofollow)  Other: {}\n\n",
            links.internal_total,
            links.internal_nofollow,
            links.external_total,
            links.external_nofollow,
            links.other_total
        ));
    } else {
        out.push_str(&format!("  {DIM}No links found.{RESET}\n\n"));
    }

    // Keyword
    if let Some(keyword) = &report.keyword {
        out.push_str(&format!("{BOLD}KEYWORD{RESET} \"{}\"\n", keyword.keyword));
        out.push_str(&format!("  Permalink: {}\n", keyword.permalink));
        out.push_str(&format!("  Combinations: {}\n", keyword.combinations.join(", ")));
        match (&keyword.density, keyword.density_score) {
            (Some(density), Some(score)) => out.push_str(&format!(
                "  Density: {:.2}% ({} occurrences, score {})\n",
                density.density, density.count, score
            )),
            _ => out.push_str(&format!("  {DIM}Density unavailable.{RESET}\n")),
        }
    } else {
        out.push_str(&format!("{DIM}No keyword given; pass --keyword for combinations and density.{RESET}\n"));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_text_render_sections() {
        let (report, paper) = test_report();
        let out = render(&report, &paper).expect("render text");

        assert!(out.contains("Title: Cats Running"));
        assert!(out.contains("Words: 10"));
        assert!(out.contains("READABILITY"));
        assert!(out.contains("External: 1"));
        assert!(out.contains("Combinations: cat, cats"));
        assert!(out.contains("3 occurrences"));
    }

    #[test]
    fn test_text_render_without_keyword_or_links() {
        let (mut report, paper) = test_report();
        report.keyword = None;
        report.links = Default::default();
        let out = render(&report, &paper).expect("render text");
        assert!(out.contains("No keyword given"));
        assert!(out.contains("No links found."));
    }

    #[test]
    fn test_score_color() {
        assert_eq!(score_color(6.0, 6.0), "\x1b[32m");
        assert_eq!(score_color(3.0, 6.0), "\x1b[33m");
        assert_eq!(score_color(1.0, 6.0), "\x1b[31m");
        assert_eq!(score_color(1.0, 0.0), RESET);
    }
}
