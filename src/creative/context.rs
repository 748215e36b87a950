//! Request-scoped marketing context fed into the prompt builders.
//!
//! Field names follow the camelCase JSON produced by the research stages
//! upstream (`massDesireData`, `mechanismData`, ...), so a brief exported
//! from there deserializes without mapping. Every field is optional; explicit
//! `null`s read as defaults and empty strings count as missing.

use serde::{Deserialize, Deserializer, Serialize};

/// Tone register used when the target market is Indonesian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageRegister {
    /// "Aku/Kamu".
    #[default]
    Casual,
    /// "Gue/Lo".
    Slang,
    /// "Anda/Saya".
    Professional,
}

/// The product being advertised and where.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectContext {
    /// Product name.
    #[serde(deserialize_with = "null_as_default")]
    pub product_name: String,
    /// Short product description.
    #[serde(deserialize_with = "null_as_default")]
    pub product_description: String,
    /// Target country; drives language and cultural setting.
    pub target_country: Option<String>,
    /// Tone register for localized copy.
    pub language_register: Option<LanguageRegister>,
}

/// Foundational psychological driver of the market.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MassDesire {
    /// Core desire statement.
    #[serde(deserialize_with = "null_as_default")]
    pub headline: String,
    /// Life-Force-8 category.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    /// What keeps the market awake at night.
    #[serde(deserialize_with = "null_as_default")]
    pub market_symptom: String,
}

/// Logic pillar: the unique mechanism.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Mechanism {
    /// Scientific-sounding mechanism name.
    #[serde(deserialize_with = "null_as_default")]
    pub scientific_pseudo: String,
    /// Unique mechanism of the solution: how it works.
    #[serde(deserialize_with = "null_as_default")]
    pub ums: String,
}

/// Emotion pillar: the narrative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Story {
    /// Narrative arc.
    #[serde(deserialize_with = "null_as_default")]
    pub narrative: String,
    /// Emotional theme.
    #[serde(deserialize_with = "null_as_default")]
    pub emotional_theme: String,
}

/// Concept pillar: the big idea.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BigIdea {
    /// The concept.
    #[serde(deserialize_with = "null_as_default")]
    pub concept: String,
    /// Belief the concept shifts the audience away from.
    #[serde(deserialize_with = "null_as_default")]
    pub target_belief: String,
}

/// Persona metadata attached to a strategy, or the raw research persona.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Persona {
    /// Persona name ("Exhausted new mom").
    pub name: Option<String>,
    /// Free-text profile.
    pub profile: Option<String>,
    /// Physical and emotional pain symptoms, strongest first.
    #[serde(deserialize_with = "null_as_default")]
    pub visceral_symptoms: Vec<String>,
    /// Approved visual headline.
    pub headline: Option<String>,
    /// Approved caption hook.
    pub hook: Option<String>,
    /// Insider vocabulary of the tribe.
    #[serde(deserialize_with = "null_as_default")]
    pub coliseum_keywords: Vec<String>,
    /// Voice archetype chosen by an earlier generation.
    pub voice_anchor: Option<String>,
    /// UGC avatar label.
    pub avatar: Option<String>,
}

impl Persona {
    /// Strongest pain symptom, if any.
    pub fn primary_symptom(&self) -> Option<&str> {
        self.visceral_symptoms
            .first()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Loosely-typed strategy bag gathered from the research stages.
///
/// At most one of mechanism, story or big idea drives the brief; see
/// [`crate::prompt::brief::build_strategic_brief`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrategyContext {
    /// Deepest layer: mass desire.
    pub mass_desire_data: Option<MassDesire>,
    /// Logic pillar.
    pub mechanism_data: Option<Mechanism>,
    /// Emotion pillar.
    pub story_data: Option<Story>,
    /// Concept pillar.
    pub big_idea_data: Option<BigIdea>,
    /// Persona metadata and locked copy.
    pub meta: Option<Persona>,
    /// Locked headline when not nested under `meta`.
    pub headline: Option<String>,
    /// Locked hook when not nested under `meta`.
    pub hook: Option<String>,
    /// Keywords when not nested under `meta`.
    #[serde(deserialize_with = "null_as_default")]
    pub coliseum_keywords: Vec<String>,
    /// UGC avatar label.
    pub avatar: Option<String>,
}

impl StrategyContext {
    /// Approved visual headline: `meta.headline`, then `headline`.
    pub fn locked_headline(&self) -> Option<&str> {
        first_non_empty([
            self.meta.as_ref().and_then(|m| m.headline.as_deref()),
            self.headline.as_deref(),
        ])
    }

    /// Approved caption hook: `meta.hook`, then `hook`.
    pub fn locked_hook(&self) -> Option<&str> {
        first_non_empty([
            self.meta.as_ref().and_then(|m| m.hook.as_deref()),
            self.hook.as_deref(),
        ])
    }

    /// Mandatory vocabulary: `meta.coliseumKeywords`, then the top-level list.
    pub fn coliseum_keywords(&self) -> &[String] {
        match &self.meta {
            Some(meta) if !meta.coliseum_keywords.is_empty() => &meta.coliseum_keywords,
            _ => &self.coliseum_keywords,
        }
    }

    /// Voice archetype recorded by a previous strategy generation.
    pub fn voice_anchor(&self) -> Option<&str> {
        first_non_empty([self.meta.as_ref().and_then(|m| m.voice_anchor.as_deref())])
    }
}

/// Input file accepted by the CLI: everything one generation needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreativeBrief {
    /// Product and market.
    #[serde(deserialize_with = "null_as_default")]
    pub project: ProjectContext,
    /// Locked strategy.
    #[serde(deserialize_with = "null_as_default")]
    pub strategy: StrategyContext,
    /// Raw research persona, used for visuals.
    pub persona: Option<Persona>,
}

pub(crate) fn first_non_empty<'a, const N: usize>(
    candidates: [Option<&'a str>; N],
) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
}

/// Read an explicit JSON `null` as the field's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
