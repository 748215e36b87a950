//! Angle parsing tests.

use adcraft::prompt::angle::clean_angle;
use adcraft::prompt::{parse_angle, ParsedAngle};

#[test]
fn hook_prefix_is_stripped_and_pain_detected() {
    let parsed = parse_angle("Hook: I was tired of feeling stuck");
    assert_eq!(parsed.clean_angle, "I was tired of feeling stuck");
    assert!(parsed.is_pain_focused);
    assert!(!parsed.is_solution_focused);
    assert!(!parsed.is_urgent);
    assert!(parsed.context.is_empty());
}

#[test]
fn numbered_angle_prefix_and_quotes_are_removed() {
    assert_eq!(
        clean_angle("  Angle 3 - \"The 5-second trick\"  "),
        "The 5-second trick"
    );
    assert_eq!(clean_angle("headline# 'Quiet mornings'"), "Quiet mornings");
}

#[test]
fn quoted_label_is_still_stripped() {
    assert_eq!(parse_angle("\"Hook: x\"").clean_angle, "x");
    assert_eq!(parse_angle("  'Headline #  Stop'  ").clean_angle, "Stop");
}

#[test]
fn stacked_labels_are_all_stripped() {
    assert_eq!(parse_angle("Hook:Hook: x").clean_angle, "x");
    assert_eq!(clean_angle("Angle 1 - Headline: Hook # Sleep deeper"), "Sleep deeper");
}

#[test]
fn cleaned_angle_never_starts_with_a_label() {
    let label = regex::Regex::new(r"(?i)^(Hook|Headline|Angle|Angle \d)\s*[:#-]")
        .expect("label pattern should compile");
    for raw in [
        "\"Hook: \"Hook: x",
        "'Angle 2' - 'Angle: y'",
        "Headline-#Hook:z",
        "Hook:",
        "-Hook: w",
    ] {
        let clean = clean_angle(raw);
        assert!(!label.is_match(&clean), "{raw:?} cleaned to {clean:?}");
    }
}

#[test]
fn prefix_only_matches_at_start() {
    assert_eq!(
        clean_angle("Why the Hook: matters"),
        "Why the Hook: matters"
    );
}

#[test]
fn solution_and_urgency_are_case_insensitive() {
    let parsed = parse_angle("The RELIEF you need TODAY");
    assert!(parsed.is_solution_focused);
    assert!(parsed.is_urgent);
    assert!(!parsed.is_pain_focused);
}

#[test]
fn empty_input_yields_empty_angle() {
    assert_eq!(parse_angle(""), ParsedAngle::default());
    assert_eq!(parse_angle("   "), ParsedAngle::default());
}

#[test]
fn serializes_camel_case() {
    let value = serde_json::to_value(parse_angle("Fix it")).expect("should serialize");
    assert_eq!(value["cleanAngle"], "Fix it");
    assert_eq!(value["isSolutionFocused"], true);
    assert_eq!(value["isPainFocused"], false);
}
