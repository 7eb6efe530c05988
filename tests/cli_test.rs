//! CLI contract tests
//!
//! Runs the built binary against temporary files and checks the
//! analyze and init commands in both output formats.

use std::path::Path;
use std::process::Command;

fn seo_analyzer_bin() -> String {
    env!("CARGO_BIN_EXE_seo-analyzer").to_string()
}

fn setup_post() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("post.html"),
        r#"<p>The cat runs fast. The cats run fast.</p>
<p>Read <a href="https://example.com/about">about us</a> or <a href="https://other.org" rel="nofollow">elsewhere</a>.</p>"#,
    )
    .unwrap();
    dir
}

fn run(dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(seo_analyzer_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("SEO_ANALYZER_DOMAIN")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run seo-analyzer");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

fn parse_json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("Invalid JSON")
}

#[test]
fn test_analyze_json_report() {
    let dir = setup_post();
    let (code, stdout, _) = run(
        dir.path(),
        &["analyze", "post.html", "--keyword", "cat", "--domain", "example.com", "--format", "json"],
    );
    assert_eq!(code, 0);

    let report = parse_json(&stdout);
    assert_eq!(report["paragraphs"].as_array().unwrap().len(), 2);
    assert_eq!(report["links"]["total"], 2);
    assert_eq!(report["links"]["internal_total"], 1);
    assert_eq!(report["links"]["external_nofollow"], 1);
    assert_eq!(report["keyword"]["keyword"], "cat");
    assert_eq!(report["keyword"]["density"]["count"], 2);

    let combinations: Vec<&str> = report["keyword"]["combinations"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|c| c.as_str())
        .collect();
    assert!(combinations.contains(&"cat"));
    assert!(combinations.contains(&"cats"));
}

#[test]
fn test_analyze_text_report() {
    let dir = setup_post();
    let (code, stdout, _) = run(dir.path(), &["analyze", "post.html", "--title", "Cats"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Title: Cats"));
    assert!(stdout.contains("READABILITY"));
    assert!(stdout.contains("LINKS"));
    assert!(stdout.contains("No keyword given"));
}

#[test]
fn test_domain_from_config_file() {
    let dir = setup_post();
    std::fs::write(
        dir.path().join("seo-analyzer.toml"),
        "[links]\nparent_domain = \"other.org\"\n",
    )
    .unwrap();

    let (code, stdout, _) = run(dir.path(), &["analyze", "post.html", "--format", "json"]);
    assert_eq!(code, 0);
    let report = parse_json(&stdout);
    // other.org is now internal and example.com external
    assert_eq!(report["links"]["internal_total"], 1);
    assert_eq!(report["links"]["internal_nofollow"], 1);
    assert_eq!(report["links"]["external_total"], 1);
}

#[test]
fn test_malformed_density_table_fails() {
    let dir = setup_post();
    std::fs::write(
        dir.path().join("seo-analyzer.toml"),
        "[links]\nparent_domain = \"example.com\"\n\n[keyword_density.boundaries]\nmin = 3.0\nfair = 1.0\ngood = 4.0\nmax = 5.0\n",
    )
    .unwrap();

    let (code, stdout, stderr) = run(dir.path(), &["analyze", "post.html", "--format", "json"]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("keyword density"));
}

#[test]
fn test_analyze_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run(dir.path(), &["analyze", "missing.html"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("missing.html"));
}

#[test]
fn test_analyze_rejects_unknown_format() {
    let dir = setup_post();
    let (code, _, _) = run(dir.path(), &["analyze", "post.html", "--format", "xml"]);
    assert_ne!(code, 0);
}

#[test]
fn test_init_then_analyze() {
    let dir = setup_post();
    let (code, stdout, _) = run(dir.path(), &["init"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("seo-analyzer.toml"));
    assert!(dir.path().join("seo-analyzer.toml").exists());

    // The example config uses example.com as the parent domain
    let (code, stdout, _) = run(dir.path(), &["analyze", "post.html", "--format", "json"]);
    assert_eq!(code, 0);
    let report = parse_json(&stdout);
    assert_eq!(report["links"]["internal_total"], 1);
    assert_eq!(report["links"]["external_total"], 1);
}
