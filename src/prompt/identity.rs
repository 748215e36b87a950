//! Voice directive: lock an archetype or let the model choose one.

use std::fmt::Write as _;

use crate::creative::AdIdentity;

/// Heading of the locked-archetype directive.
pub const MANDATORY_HEADING: &str = "**MANDATORY VOICE ANCHOR:**";
/// Heading of the archetype selection menu.
pub const MENU_HEADING: &str = "**STEP 1: SELECT A VOICE ARCHETYPE (CRITICAL)**";

/// Menu entries, in the order the model sees them.
const MENU: [(&str, &str); 5] = [
    (
        "THE SKEPTIC CONVERT",
        "\"I didn't believe the hype, but...\" (High Relatability).",
    ),
    (
        "THE AUTHORITY",
        "\"As a specialist/founder, here is why X fails.\" (High Trust).",
    ),
    (
        "THE GATEKEEPER",
        "\"Don't walk, RUN. I found the cheat code.\" (High Curiosity/Influencer).",
    ),
    (
        "THE OBSERVER (Case Study)",
        "\"Look at what happened to [Name] in 30 days.\" (Social Proof).",
    ),
    (
        "THE VULNERABLE DIARIST",
        "\"I'm shaking writing this... I finally found it.\" (Deep Emotion).",
    ),
];

/// Identity block for the strategy prompt.
pub fn identity_instruction(identity: Option<AdIdentity>) -> String {
    let mut out = String::with_capacity(640);
    match identity {
        Some(id) => {
            let _ = writeln!(out, "{MANDATORY_HEADING}");
            let _ = writeln!(
                out,
                "You MUST adopt the persona of: \"{}\" throughout this creative.",
                id.label()
            );
            out.push_str("- **DO NOT** deviate from this character.\n");
            let _ = writeln!(out, "- TONE: {}", id.tone_hint());
        }
        None => {
            let _ = writeln!(out, "{MENU_HEADING}");
            out.push_str(
                "Instead of a generic user, pick the specific 'Character' who is speaking.\n",
            );
            out.push_str("Choose ONE that fits the Angle best:\n");
            for (n, (name, behaviour)) in (1..).zip(MENU) {
                let _ = writeln!(out, "{n}. **{name}:** {behaviour}");
            }
            out.push_str("Report the archetype you chose in 'voiceAnchor'.\n");
        }
    }
    out
}
