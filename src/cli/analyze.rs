//! Analyze command - research report for one file

use crate::reporters;
use anyhow::{Context, Result};
use seo_analyzer::{load_analyzer_config, Paper, PaperAttributes, ResearchReport, Researcher};
use std::path::Path;
use tracing::{debug, info};

/// Paper metadata given on the command line
#[derive(Debug, Default)]
pub struct PaperArgs {
    pub keyword: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub permalink: Option<String>,
}

impl PaperArgs {
    fn into_attributes(self) -> PaperAttributes {
        PaperAttributes {
            keyword: self.keyword.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            permalink: self.permalink.unwrap_or_default(),
            ..PaperAttributes::default()
        }
    }
}

/// Run the analyze command
pub fn run(
    file: &Path,
    paper_args: PaperArgs,
    domain: Option<String>,
    config_dir: &Path,
    format: &str,
) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let mut config = load_analyzer_config(config_dir)
        .with_context(|| format!("Invalid config in {}", config_dir.display()))?;
    if let Some(domain) = domain {
        debug!("Overriding parent domain with {}", domain);
        config.links.parent_domain = domain;
    }

    let researcher = Researcher::new(&config).context("Invalid analyzer configuration")?;
    let paper = Paper::new(text, paper_args.into_attributes());

    info!("Analyzing {} ({} bytes)", file.display(), paper.text().len());
    let report = ResearchReport::build(&paper, &researcher);

    let output = reporters::report(&report, &paper, format)?;
    println!("{}", output);
    Ok(())
}
