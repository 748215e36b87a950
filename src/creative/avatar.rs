//! UGC creator avatars and their fixed visual descriptions.

use std::fmt;
use std::str::FromStr;

/// Description used when an avatar label matches nothing in the table.
pub const DEFAULT_AVATAR_VISUALS: &str =
    "A realistic UGC creator, authentic appearance, not a model.";

/// Stock creator persona that visually anchors UGC-style image prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UgcAvatar {
    /// Early-twenties trend creator.
    GenZCreator,
    /// Thirty-something parent at home.
    MillennialMom,
    /// Home-office professional.
    CorporatePro,
    /// Gym regular.
    GymRat,
    /// Skincare enthusiast in a bathroom setting.
    SkincareGuru,
    /// Gadget reviewer at a desk setup.
    TechNerd,
    /// Parent in their fifties or sixties.
    OlderParent,
    /// Founder type in a co-working space.
    Entrepreneur,
    /// Clinician in scrubs or a white coat.
    Doctor,
}

impl UgcAvatar {
    /// Every avatar, in picker order.
    pub const ALL: [UgcAvatar; 9] = [
        Self::GenZCreator,
        Self::MillennialMom,
        Self::CorporatePro,
        Self::GymRat,
        Self::SkincareGuru,
        Self::TechNerd,
        Self::OlderParent,
        Self::Entrepreneur,
        Self::Doctor,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::GenZCreator => "Gen Z Creator",
            Self::MillennialMom => "Millennial Mom",
            Self::CorporatePro => "Corporate Pro",
            Self::GymRat => "Gym Rat",
            Self::SkincareGuru => "Skincare Guru",
            Self::TechNerd => "Tech Nerd",
            Self::OlderParent => "Older Parent",
            Self::Entrepreneur => "Entrepreneur",
            Self::Doctor => "Doctor",
        }
    }
}

impl fmt::Display for UgcAvatar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known avatar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown UGC avatar '{0}'")]
pub struct UnknownAvatar(pub String);

impl FromStr for UgcAvatar {
    type Err = UnknownAvatar;

    /// Case-insensitive; spaces, dashes and underscores are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalize = |v: &str| -> String {
            v.trim()
                .chars()
                .filter(|c| !matches!(c, ' ' | '-' | '_'))
                .collect::<String>()
                .to_ascii_lowercase()
        };
        let needle = normalize(s);
        Self::ALL
            .iter()
            .copied()
            .find(|a| normalize(a.label()) == needle)
            .ok_or_else(|| UnknownAvatar(s.to_owned()))
    }
}

/// Physical description of an avatar, ready to paste into an image prompt.
pub fn avatar_visuals(avatar: UgcAvatar) -> &'static str {
    match avatar {
        UgcAvatar::GenZCreator => {
            "Young adult (approx 22 years old), trendy oversized streetwear, expressive face, \
             ring light reflection in eyes, messy background with LED lights."
        }
        UgcAvatar::MillennialMom => {
            "Woman in her 30s, tired but happy eyes, wearing comfy loungewear, messy bun, \
             holding a coffee cup, background is a real living room with kid's toys."
        }
        UgcAvatar::CorporatePro => {
            "Professional in their late 30s, smart casual blazer, home office background, \
             clean look, glasses, laptop visible."
        }
        UgcAvatar::GymRat => {
            "Fit individual in gym wear, slightly sweaty sheen, gym background with equipment, \
             energetic posture, holding a water bottle."
        }
        UgcAvatar::SkincareGuru => {
            "Person with glowing skin but real texture (no filter), hair pulled back with a \
             headband, bathroom setting, bright clean lighting, holding a product."
        }
        UgcAvatar::TechNerd => {
            "Person wearing a graphic tee, sitting at a desk with multiple monitors, glasses, \
             RGB lighting in background, holding a gadget."
        }
        UgcAvatar::OlderParent => {
            "Person in their 50s-60s, warm smile, sensible clothing, cozy living room or \
             kitchen background, trustworthy demeanor."
        }
        UgcAvatar::Entrepreneur => {
            "Ambitious look, sharp dress shirt, minimalist modern office or co-working space, \
             holding a smartphone, confident gaze."
        }
        UgcAvatar::Doctor => {
            "Professional wearing a white coat or scrubs, stethoscope visible, clean clinical \
             background, reassuring and authoritative expression."
        }
    }
}

/// Resolve a free-text avatar label, falling back to [`DEFAULT_AVATAR_VISUALS`].
pub fn avatar_visuals_for_label(label: &str) -> &'static str {
    label
        .parse::<UgcAvatar>()
        .map(avatar_visuals)
        .unwrap_or(DEFAULT_AVATAR_VISUALS)
}
