//! Hyperlink classification
//!
//! Anchors are pulled out of raw HTML, typed as internal, external or other
//! relative to the site's own domain, and given a follow state from their
//! `rel` attribute or, failing that, from the nofollow policy.

use crate::error::{ConfigError, ConfigResult};
use crate::models::{FollowState, LinkStatistics, LinkType};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use url::Url;

static ANCHOR: OnceLock<Regex> = OnceLock::new();
static HREF: OnceLock<Regex> = OnceLock::new();
static REL: OnceLock<Regex> = OnceLock::new();

fn anchor_regex() -> &'static Regex {
    ANCHOR.get_or_init(|| Regex::new(r"(?i)<a(?:\s[^>]*)?>").expect("valid regex"))
}

fn href_regex() -> &'static Regex {
    HREF.get_or_init(|| {
        Regex::new(r#"(?i)\shref\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).expect("valid regex")
    })
}

fn rel_regex() -> &'static Regex {
    REL.get_or_init(|| {
        Regex::new(r#"(?i)\srel\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).expect("valid regex")
    })
}

/// Value of the first quoted or bare attribute match
fn attribute(regex: &Regex, anchor: &str) -> Option<String> {
    let caps = regex.captures(anchor)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|m| m.as_str().trim().to_string())
}

/// Every anchor start tag in the text
pub fn anchors(text: &str) -> Vec<String> {
    anchor_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// The `href` of an anchor tag, empty when absent
pub fn href(anchor: &str) -> String {
    attribute(href_regex(), anchor).unwrap_or_default()
}

/// The `rel` of an anchor tag, `None` when the attribute is absent
pub fn rel(anchor: &str) -> Option<String> {
    attribute(rel_regex(), anchor)
}

/// How a URL should be read before classification
enum ParsedHref {
    Fragment,
    Scheme { scheme: String, host: Option<String> },
    Relative,
}

fn parse_href(href: &str) -> ParsedHref {
    if href.starts_with('#') {
        return ParsedHref::Fragment;
    }

    // Protocol-relative URLs name a host but no scheme
    let candidate = if href.starts_with("//") {
        format!("http:{}", href)
    } else {
        href.to_string()
    };

    match Url::parse(&candidate) {
        Ok(url) => ParsedHref::Scheme {
            scheme: url.scheme().to_string(),
            host: url.host_str().map(str::to_lowercase),
        },
        Err(_) => ParsedHref::Relative,
    }
}

fn host_of(href: &str) -> Option<String> {
    match parse_href(href) {
        ParsedHref::Scheme { host, .. } => host,
        _ => None,
    }
}

fn host_matches(host: &str, domains: &[String]) -> bool {
    domains
        .iter()
        .any(|domain| host.contains(&domain.to_lowercase()))
}

/// Site domain and nofollow policy for link classification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkPolicy {
    /// Host substring identifying internal links (e.g. `example.com`)
    pub parent_domain: String,
    /// Treat unmarked non-internal links as nofollow candidates
    pub add_nofollow_to_externals: bool,
    /// Hosts forced to nofollow
    pub nofollow_deny_domains: Vec<String>,
    /// When set, only these hosts stay dofollow
    pub nofollow_allow_domains: Vec<String>,
}

fn validate_domain(field: &str, domain: &str) -> ConfigResult<()> {
    if domain.trim().is_empty() {
        return Err(ConfigError::MalformedLinkPolicy(format!(
            "{} contains an empty domain",
            field
        )));
    }
    if domain.chars().any(char::is_whitespace) {
        return Err(ConfigError::MalformedLinkPolicy(format!(
            "{} entry '{}' contains whitespace",
            field, domain
        )));
    }
    if domain.contains("://") {
        return Err(ConfigError::MalformedLinkPolicy(format!(
            "{} entry '{}' must be a bare domain, not a URL",
            field, domain
        )));
    }
    Ok(())
}

impl LinkPolicy {
    pub fn new(parent_domain: impl Into<String>) -> Self {
        Self {
            parent_domain: parent_domain.into(),
            ..Self::default()
        }
    }

    pub fn with_nofollow_externals(mut self, enabled: bool) -> Self {
        self.add_nofollow_to_externals = enabled;
        self
    }

    pub fn with_deny_domains(mut self, domains: Vec<String>) -> Self {
        self.nofollow_deny_domains = domains;
        self
    }

    pub fn with_allow_domains(mut self, domains: Vec<String>) -> Self {
        self.nofollow_allow_domains = domains;
        self
    }

    /// Reject empty, URL-shaped or whitespace-containing domains
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.parent_domain.is_empty() {
            validate_domain("parent_domain", &self.parent_domain)?;
        }
        for domain in &self.nofollow_deny_domains {
            validate_domain("nofollow_deny_domains", domain)?;
        }
        for domain in &self.nofollow_allow_domains {
            validate_domain("nofollow_allow_domains", domain)?;
        }
        Ok(())
    }
}

/// The link classifier research
#[derive(Debug, Clone, Default)]
pub struct LinkClassifier {
    policy: LinkPolicy,
}

impl LinkClassifier {
    pub fn new(policy: LinkPolicy) -> ConfigResult<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &LinkPolicy {
        &self.policy
    }

    /// Type of an anchor against the configured parent domain
    pub fn link_type(&self, anchor: &str) -> LinkType {
        classify_url(&href(anchor), &self.policy.parent_domain)
    }

    /// Follow state of an anchor already typed by [`link_type`](Self::link_type)
    pub fn follow_state(&self, anchor: &str, link_type: LinkType) -> FollowState {
        match rel(anchor) {
            Some(rel) => {
                let nofollow = rel
                    .split_whitespace()
                    .any(|token| token.eq_ignore_ascii_case("nofollow"));
                if nofollow {
                    FollowState::Nofollow
                } else {
                    FollowState::Dofollow
                }
            }
            None if link_type != LinkType::Internal && self.policy.add_nofollow_to_externals => {
                self.policy_follow_state(&href(anchor))
            }
            None => FollowState::Dofollow,
        }
    }

    fn policy_follow_state(&self, href: &str) -> FollowState {
        let host = host_of(href).unwrap_or_default();
        let deny = &self.policy.nofollow_deny_domains;
        let allow = &self.policy.nofollow_allow_domains;

        if !deny.is_empty() && host_matches(&host, deny) {
            return FollowState::Nofollow;
        }
        if !allow.is_empty() {
            return if host_matches(&host, allow) {
                FollowState::Dofollow
            } else {
                FollowState::Nofollow
            };
        }
        FollowState::Dofollow
    }

    /// Counts of every anchor in the text by type and follow state
    ///
    /// `anchors` stays `None` when the text has no anchors.
    pub fn link_stats(&self, text: &str) -> LinkStatistics {
        let found = anchors(text);
        let mut stats = LinkStatistics::default();
        if found.is_empty() {
            return stats;
        }

        stats.total = found.len();
        for anchor in &found {
            let link_type = self.link_type(anchor);
            let follow = self.follow_state(anchor, link_type);
            stats.add(link_type, follow);
        }
        stats.anchors = Some(found);
        stats
    }
}

/// Type of a URL relative to a reference domain
///
/// Non-http(s) schemes and fragments are `Other`. URLs without a host are
/// internal; hosted URLs are internal when the host contains the reference
/// domain. An empty reference domain matches no host.
pub fn classify_url(href: &str, reference_domain: &str) -> LinkType {
    match parse_href(href) {
        ParsedHref::Fragment => LinkType::Other,
        ParsedHref::Relative => LinkType::Internal,
        ParsedHref::Scheme { scheme, host } => {
            if scheme != "http" && scheme != "https" {
                return LinkType::Other;
            }
            match host {
                None => LinkType::Internal,
                Some(host) => {
                    let domain = reference_domain.trim().to_lowercase();
                    if !domain.is_empty() && host.contains(&domain) {
                        LinkType::Internal
                    } else {
                        LinkType::External
                    }
                }
            }
        }
    }
}
