//! CLI command definitions and handlers

mod analyze;
mod init;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// seo-analyzer - content analysis for written pages
#[derive(Parser, Debug)]
#[command(name = "seo-analyzer")]
#[command(
    version,
    about = "Content analysis: readability, keyword combinations and density, link statistics",
    after_help = "\
Examples:
  seo-analyzer analyze post.html --keyword \"running shoe\"   Research report for a keyword
  seo-analyzer analyze post.html --format json                JSON output for scripting
  seo-analyzer analyze post.html --domain example.com         Classify links against a domain
  seo-analyzer init                                           Write an example seo-analyzer.toml"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write an example seo-analyzer.toml config file
    Init {
        /// Directory to write the config into
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Print a research report for an HTML or text file
    #[command(after_help = "\
Examples:
  seo-analyzer analyze post.html                               Counts, readability and links
  seo-analyzer analyze post.html --keyword cat                 Add keyword combinations and density
  seo-analyzer analyze post.html --config ./site --format json Use ./site/seo-analyzer.toml")]
    Analyze {
        /// File to analyze
        file: PathBuf,

        /// Focus keyword
        #[arg(long, short = 'k')]
        keyword: Option<String>,

        /// SEO title
        #[arg(long)]
        title: Option<String>,

        /// Meta description
        #[arg(long)]
        description: Option<String>,

        /// Permalink slug
        #[arg(long)]
        permalink: Option<String>,

        /// Site domain for internal link detection (overrides config)
        #[arg(long, env = "SEO_ANALYZER_DOMAIN")]
        domain: Option<String>,

        /// Directory holding seo-analyzer.toml (default: current directory)
        #[arg(long, default_value = ".")]
        config: PathBuf,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path, force } => init::run(&path, force),

        Commands::Analyze {
            file,
            keyword,
            title,
            description,
            permalink,
            domain,
            config,
            format,
        } => analyze::run(
            &file,
            analyze::PaperArgs {
                keyword,
                title,
                description,
                permalink,
            },
            domain,
            &config,
            &format,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "seo-analyzer",
            "analyze",
            "post.html",
            "--keyword",
            "cat",
            "--format",
            "json",
        ])
        .expect("parses");
        match cli.command {
            Commands::Analyze {
                file,
                keyword,
                format,
                ..
            } => {
                assert_eq!(file, PathBuf::from("post.html"));
                assert_eq!(keyword.as_deref(), Some("cat"));
                assert_eq!(format, "json");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["seo-analyzer", "analyze", "a.html", "--format", "xml"]).is_err());
    }
}
