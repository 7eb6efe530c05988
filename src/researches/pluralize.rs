//! Rule-based English pluralization
//!
//! Resolution order for a word:
//! 1. irregular singular -> plural table (pronouns, auxiliaries, Latin/Greek forms)
//! 2. known irregular plurals are returned as they are
//! 3. uncountable words are returned unchanged
//! 4. pattern rules, tested from the last declared to the first; first match wins
//! 5. no match: the word is returned unchanged
//!
//! Every result has the casing of the input restored (`CAT` -> `CATS`,
//! `Child` -> `Children`).

use crate::error::{ConfigError, ConfigResult};
use regex::{Captures, Regex};
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

const UNCOUNTABLES: &[&str] = &[
    "adulthood", "advice", "agenda", "aid", "alcohol", "ammo", "anime", "athletics", "audio",
    "bison", "blood", "bream", "buffalo", "butter", "carp", "cash", "chassis", "chess",
    "clothing", "cod", "commerce", "cooperation", "corps", "debris", "diabetes", "digestion",
    "elk", "energy", "equipment", "excretion", "expertise", "flounder", "fun", "gallows",
    "garbage", "graffiti", "headquarters", "health", "herpes", "highjinks", "homework",
    "housework", "information", "jeans", "justice", "kudos", "labour", "literature",
    "machinery", "mackerel", "mail", "media", "mews", "moose", "music", "mud", "manga", "news",
    "pike", "plankton", "pliers", "police", "pollution", "premises", "rain", "research", "rice",
    "salmon", "scissors", "seo", "series", "sewage", "shambles", "shrimp", "species", "staff",
    "swine", "tennis", "traffic", "transportation", "trout", "tuna", "wealth", "welfare",
    "whiting", "wildebeest", "wildlife", "wordpress", "you",
];

const IRREGULARS: &[(&str, &str)] = &[
    // Pronouns
    ("i", "we"),
    ("me", "us"),
    ("he", "they"),
    ("she", "they"),
    ("them", "them"),
    ("myself", "ourselves"),
    ("yourself", "yourselves"),
    ("itself", "themselves"),
    ("herself", "themselves"),
    ("himself", "themselves"),
    ("themself", "themselves"),
    ("is", "are"),
    ("was", "were"),
    ("has", "have"),
    ("this", "these"),
    ("that", "those"),
    // Consonant + `o`
    ("echo", "echoes"),
    ("dingo", "dingoes"),
    ("volcano", "volcanoes"),
    ("tornado", "tornadoes"),
    ("torpedo", "torpedoes"),
    // `-us`
    ("genus", "genera"),
    ("viscus", "viscera"),
    // `-ma`
    ("stigma", "stigmata"),
    ("stoma", "stomata"),
    ("dogma", "dogmata"),
    ("lemma", "lemmata"),
    ("schema", "schemata"),
    ("anathema", "anathemata"),
    // Other
    ("ox", "oxen"),
    ("axe", "axes"),
    ("die", "dice"),
    ("yes", "yeses"),
    ("foot", "feet"),
    ("eave", "eaves"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("quiz", "quizzes"),
    ("human", "humans"),
    ("proof", "proofs"),
    ("carve", "carves"),
    ("valve", "valves"),
    ("looey", "looies"),
    ("thief", "thieves"),
    ("groove", "grooves"),
    ("pickaxe", "pickaxes"),
    ("whiskey", "whiskies"),
    ("thou", "you"),
];

/// Pattern rules in declaration order; matching walks them backwards
const RULES: &[(&str, &str)] = &[
    (r"s?$", "s"),
    (r"[^\x00-\x7F]$", "$0"),
    (r"([^aeiou]ese)$", "$1"),
    (r"(ax|test)is$", "$1es"),
    (r"(alias|[^aou]us|t[lm]as|gas|ris)$", "$1es"),
    (r"(e[mn]u)s?$", "$1s"),
    (r"([^l]ias|[aeiou]las|[ejzr]as|[iu]am)$", "$1"),
    (
        r"(alumn|syllab|octop|vir|radi|nucle|fung|cact|stimul|termin|bacill|foc|uter|loc|strat)(?:us|i)$",
        "$1i",
    ),
    (r"(alumn|alg|vertebr)(?:a|ae)$", "$1ae"),
    (r"(seraph|cherub)(?:im)?$", "$1im"),
    (r"(her|at|gr)o$", "$1oes"),
    (
        r"(agend|addend|millenni|dat|extrem|bacteri|desiderat|strat|candelabr|errat|ov|symposi|curricul|automat|quor)(?:a|um)$",
        "$1a",
    ),
    (
        r"(apheli|hyperbat|periheli|asyndet|noumen|phenomen|criteri|organ|prolegomen|hedr|automat)(?:a|on)$",
        "$1a",
    ),
    (r"sis$", "ses"),
    (r"(?:(kni|wi|li)fe|(ar|l|ea|eo|oa|hoo)f)$", "$1$2ves"),
    (r"([^aeiouy]|qu)y$", "$1ies"),
    (r"([^ch][ieo][ln])ey$", "$1ies"),
    (r"(x|ch|ss|sh|zz)$", "$1es"),
    (r"(matr|cod|mur|sil|vert|ind|append)(?:ix|ex)$", "$1ices"),
    (r"\b((?:tit)?m|l)(?:ice|ouse)$", "$1ice"),
    (r"(pe)(?:rson|ople)$", "$1ople"),
    (r"(child)(?:ren)?$", "$1ren"),
    (r"eaux$", "$0"),
    (r"m[ae]n$", "men"),
    // Same singular and plural; declared last so they are tested first
    (r"[^aeiou]ese$", "$0"),
    (r"deer$", "$0"),
    (r"fish$", "$0"),
    (r"measles$", "$0"),
    (r"o[iu]s$", "$0"),
    (r"pox$", "$0"),
    (r"sheep$", "$0"),
];

static TEMPLATE_REF: OnceLock<Regex> = OnceLock::new();

fn template_ref() -> &'static Regex {
    TEMPLATE_REF.get_or_init(|| Regex::new(r"\$(\d{1,2})").expect("valid regex"))
}

/// A compiled pattern rule: a case-insensitive pattern and a replacement template
#[derive(Debug, Clone)]
pub struct InflectionRule {
    pattern: Regex,
    replacement: String,
}

impl InflectionRule {
    /// Compile a rule, checking the template only references existing groups
    pub fn new(pattern: &str, replacement: &str) -> ConfigResult<Self> {
        let compiled = Regex::new(&format!("(?i){}", pattern)).map_err(|e| {
            ConfigError::MalformedRule {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;

        // captures_len counts group 0
        let groups = compiled.captures_len();
        for caps in template_ref().captures_iter(replacement) {
            let index: usize = caps[1].parse().unwrap_or(usize::MAX);
            if index >= groups {
                return Err(ConfigError::MalformedRule {
                    pattern: pattern.to_string(),
                    reason: format!(
                        "replacement `{}` references group ${} but the pattern has {}",
                        replacement,
                        index,
                        groups - 1
                    ),
                });
            }
        }

        Ok(Self {
            pattern: compiled,
            replacement: replacement.to_string(),
        })
    }

    pub fn is_match(&self, word: &str) -> bool {
        self.pattern.is_match(word)
    }

    /// Replace the first match, restoring the case of the matched text
    fn apply(&self, word: &str) -> String {
        let Some(caps) = self.pattern.captures(word) else {
            return word.to_string();
        };
        let Some(whole) = caps.get(0) else {
            return word.to_string();
        };

        let result = interpolate(&self.replacement, &caps);
        let restored = if whole.as_str().is_empty() {
            // Empty match (`s?$` on "cat"): take the case of the preceding character
            match word[..whole.start()].chars().next_back() {
                Some(prev) => restore_case(&prev.to_string(), &result),
                None => result,
            }
        } else {
            restore_case(whole.as_str(), &result)
        };

        format!("{}{}{}", &word[..whole.start()], restored, &word[whole.end()..])
    }
}

/// Substitute `$0`..`$99` with capture groups; missing groups become empty
fn interpolate(template: &str, caps: &Captures<'_>) -> String {
    template_ref()
        .replace_all(template, |r: &Captures<'_>| {
            r[1].parse::<usize>()
                .ok()
                .and_then(|i| caps.get(i))
                .map_or(String::new(), |m| m.as_str().to_string())
        })
        .into_owned()
}

/// Give `token` the casing pattern of `word`
///
/// Exact match wins, then all-caps, then capitalized, else lowercase.
pub fn restore_case(word: &str, token: &str) -> String {
    if word == token {
        return token.to_string();
    }
    if word == word.to_uppercase() {
        return token.to_uppercase();
    }

    let first_is_upper = word
        .chars()
        .next()
        .is_some_and(|c| c.to_uppercase().eq(std::iter::once(c)));
    if first_is_upper {
        let mut chars = token.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => String::new(),
        };
    }

    token.to_lowercase()
}

/// The pluralize research
#[derive(Debug, Clone)]
pub struct Pluralize {
    irregular_singles: HashMap<String, String>,
    irregular_plurals: HashMap<String, String>,
    uncountables: HashSet<String>,
    rules: Vec<InflectionRule>,
}

impl Pluralize {
    /// Build the English tables; fails only if a built-in rule does not compile
    pub fn new() -> ConfigResult<Self> {
        let mut pluralize = Self {
            irregular_singles: HashMap::new(),
            irregular_plurals: HashMap::new(),
            uncountables: UNCOUNTABLES.iter().map(|w| w.to_string()).collect(),
            rules: Vec::with_capacity(RULES.len()),
        };

        for (single, plural) in IRREGULARS {
            pluralize.add_irregular(single, plural);
        }
        for (pattern, replacement) in RULES {
            pluralize.add_rule(pattern, replacement)?;
        }

        Ok(pluralize)
    }

    /// Append a pattern rule; later rules take precedence
    pub fn add_rule(&mut self, pattern: &str, replacement: &str) -> ConfigResult<()> {
        self.rules.push(InflectionRule::new(pattern, replacement)?);
        Ok(())
    }

    /// Register an irregular singular/plural pair (both directions)
    pub fn add_irregular(&mut self, single: &str, plural: &str) {
        let single = single.to_lowercase();
        let plural = plural.to_lowercase();
        self.irregular_singles.insert(single.clone(), plural.clone());
        self.irregular_plurals.insert(plural, single);
    }

    /// Register a word whose plural equals its singular
    pub fn add_uncountable(&mut self, word: &str) {
        self.uncountables.insert(word.to_lowercase());
    }

    pub fn is_uncountable(&self, word: &str) -> bool {
        self.uncountables.contains(&word.to_lowercase())
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Plural form of `word`, with the input's casing restored
    pub fn get(&self, word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }

        let token = word.to_lowercase();

        if let Some(plural) = self.irregular_singles.get(&token) {
            return restore_case(word, plural);
        }
        if self.irregular_plurals.contains_key(&token) {
            return restore_case(word, &token);
        }
        if self.uncountables.contains(&token) {
            return word.to_string();
        }

        self.rules
            .iter()
            .rev()
            .find(|rule| rule.is_match(word))
            .map_or_else(|| word.to_string(), |rule| rule.apply(word))
    }
}
