//! Voice directive tests.

use adcraft::creative::AdIdentity;
use adcraft::prompt::identity::{MANDATORY_HEADING, MENU_HEADING};
use adcraft::prompt::identity_instruction;

#[test]
fn locked_identity_gives_mandatory_directive_only() {
    let text = identity_instruction(Some(AdIdentity::Authority));
    assert!(text.contains(MANDATORY_HEADING));
    assert!(text.contains("You MUST adopt the persona of: \"The Authority\""));
    assert!(text.contains(AdIdentity::Authority.tone_hint()));
    assert!(!text.contains(MENU_HEADING));
    assert!(!text.contains(AdIdentity::Skeptic.tone_hint()));
}

#[test]
fn no_identity_gives_menu_only() {
    let text = identity_instruction(None);
    assert!(text.contains(MENU_HEADING));
    assert!(!text.contains(MANDATORY_HEADING));
    assert!(!text.contains("You MUST adopt"));
    for entry in [
        "1. **THE SKEPTIC CONVERT:**",
        "2. **THE AUTHORITY:**",
        "3. **THE GATEKEEPER:**",
        "4. **THE OBSERVER (Case Study):**",
        "5. **THE VULNERABLE DIARIST:**",
    ] {
        assert!(text.contains(entry), "missing {entry}");
    }
    assert!(text.contains("'voiceAnchor'"));
}
