//! Voice archetypes ("who is speaking") for generated copy.

use std::fmt;
use std::str::FromStr;

/// A named persona style that fixes the tone of the generated copy.
///
/// Optional at every call site: `None` lets the model pick one itself and
/// report the choice back in `voiceAnchor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdIdentity {
    /// Specialist or founder speaking with data.
    Authority,
    /// Former doubter who was converted.
    Skeptic,
    /// Influencer sharing a secret ("the gatekeeper").
    Influencer,
    /// Vulnerable first-person confession.
    Diarist,
    /// Third party reporting someone else's results.
    Observer,
}

impl AdIdentity {
    /// Every archetype, in picker order.
    pub const ALL: [AdIdentity; 5] = [
        Self::Authority,
        Self::Skeptic,
        Self::Influencer,
        Self::Diarist,
        Self::Observer,
    ];

    /// Display label, used verbatim in prompts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Authority => "The Authority",
            Self::Skeptic => "The Skeptic",
            Self::Influencer => "The Gatekeeper",
            Self::Diarist => "The Vulnerable Diarist",
            Self::Observer => "The Observer",
        }
    }

    /// One-line picker description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Authority => "High trust. Uses data & facts. 'As a specialist...'",
            Self::Skeptic => "High relatability. Overcomes objections. 'I didn't believe it...'",
            Self::Influencer => "High curiosity. Secret sharing. 'Don't walk, RUN.'",
            Self::Diarist => "High emotion. Vulnerable & raw. 'I'm shaking writing this...'",
            Self::Observer => "Social proof. Third-party analysis. 'Look at her results...'",
        }
    }

    /// Tone hint appended when this archetype is locked by the user.
    pub fn tone_hint(self) -> &'static str {
        match self {
            Self::Authority => "Be strict, factual, and professional.",
            Self::Skeptic => "Be cynical, use \"I didn't believe it\", and \"honestly\".",
            Self::Influencer => {
                "Be excited and insider-ish, use \"Don't walk, RUN\" and \"cheat code\"."
            }
            Self::Diarist => "Be emotional, use \"I'm shaking\", \"Deep secret\".",
            Self::Observer => {
                "Be a neutral narrator, describe someone else's transformation with specifics."
            }
        }
    }
}

impl fmt::Display for AdIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known archetype.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown voice archetype '{0}'")]
pub struct UnknownIdentity(pub String);

impl FromStr for AdIdentity {
    type Err = UnknownIdentity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        let needle = needle.strip_prefix("the ").unwrap_or(&needle);
        match needle {
            "authority" => Ok(Self::Authority),
            "skeptic" | "skeptic convert" => Ok(Self::Skeptic),
            "gatekeeper" | "influencer" => Ok(Self::Influencer),
            "diarist" | "vulnerable diarist" => Ok(Self::Diarist),
            "observer" => Ok(Self::Observer),
            _ => Err(UnknownIdentity(s.to_owned())),
        }
    }
}
