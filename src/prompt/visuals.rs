//! Persona to physical description, for image prompts.

use std::fmt::Write as _;

use crate::creative::{avatar_visuals_for_label, Persona};

/// Physical cue added when any keyword shows up in the pain points.
const VISUAL_CUES: [(&[&str], &str); 4] = [
    (
        &["tired", "sleep"],
        "Subject has visible dark circles under eyes, messy hair bun, slightly oily skin texture.",
    ),
    (
        &["acne", "skin"],
        "Subject has visible skin texture, pores, redness, no makeup, authentic skin reality.",
    ),
    (
        &["fat", "weight"],
        "Subject wears loose comfortable clothing, posture is slightly slumped (vulnerable).",
    ),
    (
        &["money", "debt"],
        "Environment is cluttered, stack of papers/bills visible in background, modest furniture.",
    ),
];

const NO_CUES: &str = "Authentic, candid appearance. Not a model.";

/// Describe how the persona should look on camera.
///
/// A named avatar wins outright. Otherwise the block is derived from the
/// persona's profile and pain points, matched case-sensitively as written.
pub fn persona_visual_context(persona: &Persona) -> String {
    if let Some(avatar) = persona.avatar.as_deref().filter(|a| !a.trim().is_empty()) {
        return avatar_visuals_for_label(avatar).to_owned();
    }

    let pain_points = persona.visceral_symptoms.join(", ");
    let cues = VISUAL_CUES
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|k| pain_points.contains(*k)))
        .map(|(_, cue)| *cue)
        .collect::<Vec<_>>();
    let physical = if cues.is_empty() {
        NO_CUES.to_owned()
    } else {
        cues.join(" ")
    };

    let mut out = String::with_capacity(512);
    out.push_str("**VISUAL SOULMATE IDENTITY (STRICT):**\n");
    let _ = writeln!(
        out,
        "- WHO: A realistic person matching description: \"{}\".",
        persona.profile.as_deref().unwrap_or_default()
    );
    let _ = writeln!(out, "- PHYSICAL REALITY: {physical}");
    let _ = writeln!(out, "- CONTEXT: {pain_points}.");
    out.push_str(
        "- ENVIRONMENT: A realistic, lived-in space. If they are a parent, show toys on the \
         floor. If they are busy, show a messy desk. MAKE IT LOOK LIVED IN.\n",
    );
    out
}
