//! Free-text marketing angle cleanup and heuristic tagging.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static LABEL_PREFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^(Hook|Headline|Angle|Angle \d)\s*[:#-]\s*").ok());
static PAIN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)pain|problem|struggle|tired|failed|worst").ok());
static SOLUTION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)fix|solve|cure|relief|trick|hack").ok());
static URGENCY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)now|today|immediately|urgent").ok());

/// A cleaned angle plus keyword heuristics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedAngle {
    /// Angle without label prefix or quote characters.
    pub clean_angle: String,
    /// Extra context. Always empty today; kept for callers that fill it in.
    pub context: String,
    /// Mentions pain vocabulary.
    pub is_pain_focused: bool,
    /// Mentions fix/solution vocabulary.
    pub is_solution_focused: bool,
    /// Mentions urgency vocabulary.
    pub is_urgent: bool,
}

/// Strip the label prefix (`Hook:`, `Angle 3 -`, ...) and quotes, then tag.
///
/// Total: empty input gives an empty angle with every flag false.
pub fn parse_angle(raw: &str) -> ParsedAngle {
    let clean_angle = clean_angle(raw);
    ParsedAngle {
        is_pain_focused: matches(&PAIN, &clean_angle),
        is_solution_focused: matches(&SOLUTION, &clean_angle),
        is_urgent: matches(&URGENCY, &clean_angle),
        context: String::new(),
        clean_angle,
    }
}

/// Cleanup half of [`parse_angle`], for callers that only need the text.
///
/// Quotes go first so a quoted label is still seen as a prefix; stacked
/// labels (`Hook:Hook: x`) are stripped until none is left.
pub fn clean_angle(raw: &str) -> String {
    let mut text = raw
        .chars()
        .filter(|c| !matches!(c, '"' | '\''))
        .collect::<String>()
        .trim()
        .to_owned();
    let Some(re) = LABEL_PREFIX.as_ref() else {
        return text;
    };
    // Every match consumes at least the separator, so this terminates.
    while let Some(m) = re.find(&text) {
        text = text.get(m.end()..).unwrap_or_default().trim().to_owned();
    }
    text
}

fn matches(re: &LazyLock<Option<Regex>>, text: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(text))
}
