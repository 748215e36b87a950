//! Typed payloads parsed back from model replies.

use serde::{Deserialize, Serialize};

use crate::creative::context::null_as_default;

/// Four-part "ugly ad" copy skeleton.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UglyAdStructure {
    /// Trigger keyword.
    #[serde(deserialize_with = "null_as_default")]
    pub keyword: String,
    /// Emotion evoked.
    #[serde(deserialize_with = "null_as_default")]
    pub emotion: String,
    /// Audience qualifier.
    #[serde(deserialize_with = "null_as_default")]
    pub qualifier: String,
    /// Promised outcome.
    #[serde(deserialize_with = "null_as_default")]
    pub outcome: String,
}

/// Visual strategy and copy for one creative.
///
/// Missing or `null` fields deserialize as empty strings; the model does not always
/// fill every key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreativeStrategyResult {
    /// Background, people, props and lighting.
    #[serde(deserialize_with = "null_as_default")]
    pub visual_scene: String,
    /// Photography style.
    #[serde(deserialize_with = "null_as_default")]
    pub visual_style: String,
    /// Text rendered on the image.
    #[serde(deserialize_with = "null_as_default")]
    pub embedded_text: String,
    /// Ad caption.
    #[serde(deserialize_with = "null_as_default")]
    pub primary_text: String,
    /// Meta Ads headline.
    #[serde(deserialize_with = "null_as_default")]
    pub headline: String,
    /// Button text.
    #[serde(deserialize_with = "null_as_default")]
    pub cta: String,
    /// Why this works.
    #[serde(deserialize_with = "null_as_default")]
    pub rationale: String,
    /// Archetype the model chose (or was given).
    #[serde(deserialize_with = "null_as_default")]
    pub voice_anchor: String,
    /// Copy skeleton.
    #[serde(deserialize_with = "null_as_default")]
    pub ugly_ad_structure: UglyAdStructure,
}
