//! Strategic brief: the locked strategy block every prompt carries.

use std::fmt::Write as _;

use tracing::debug;

use crate::creative::StrategyContext;

/// Header line of every brief.
pub const BRIEF_HEADER: &str = "**STRATEGIC FOUNDATION (LOCKED - DO NOT CHANGE):**";

/// Symptom used when the persona lists none.
pub const DEFAULT_PAIN: &str = "General Pain";

/// Which strategy pillar drives the brief.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pillar {
    /// Logic: the unique mechanism.
    Mechanism,
    /// Emotion: the narrative.
    Story,
    /// Concept: the big idea.
    BigIdea,
}

impl Pillar {
    /// First present pillar in priority order: mechanism, story, big idea.
    pub fn select(ctx: &StrategyContext) -> Option<Self> {
        if ctx.mechanism_data.is_some() {
            Some(Self::Mechanism)
        } else if ctx.story_data.is_some() {
            Some(Self::Story)
        } else if ctx.big_idea_data.is_some() {
            Some(Self::BigIdea)
        } else {
            None
        }
    }
}

/// Render the brief for one strategy context.
///
/// Mass desire and persona blocks are included whenever present. Only one
/// pillar block is rendered; co-present pillars below it are dropped.
pub fn build_strategic_brief(ctx: &StrategyContext) -> String {
    let mut brief = String::with_capacity(1024);
    let _ = writeln!(brief, "{BRIEF_HEADER}");

    if let Some(desire) = &ctx.mass_desire_data {
        brief.push_str("- PSYCHOLOGICAL ANCHOR (MASS DESIRE):\n");
        let _ = writeln!(brief, "- CORE DESIRE: \"{}\"", desire.headline);
        let _ = writeln!(brief, "- LIFE FORCE 8 TYPE: {}", desire.kind);
        let _ = writeln!(
            brief,
            "- MARKET SYMPTOM: \"{}\" (This is exactly what keeps them awake at night).",
            desire.market_symptom
        );
    }

    let pillar = Pillar::select(ctx);
    let present = [
        ctx.mechanism_data.is_some(),
        ctx.story_data.is_some(),
        ctx.big_idea_data.is_some(),
    ]
    .into_iter()
    .filter(|p| *p)
    .count();
    if present > 1 {
        debug!(?pillar, present, "multiple strategy pillars present, rendering first only");
    }

    match pillar {
        Some(Pillar::Mechanism) => {
            if let Some(m) = &ctx.mechanism_data {
                brief.push_str("- CORE PILLAR: LOGIC / MECHANISM\n");
                let _ = writeln!(brief, "- UNIQUE MECHANISM: \"{}\"", m.scientific_pseudo);
                let _ = writeln!(brief, "- HOW IT WORKS: {}", m.ums);
                brief.push_str("- VISUAL FOCUS: Show the mechanism in action. Validate the logic.\n");
            }
        }
        Some(Pillar::Story) => {
            if let Some(s) = &ctx.story_data {
                brief.push_str("- CORE PILLAR: EMOTION / STORY\n");
                let _ = writeln!(brief, "- NARRATIVE ARC: \"{}\"", s.narrative);
                let _ = writeln!(brief, "- EMOTIONAL THEME: {}", s.emotional_theme);
                brief.push_str(
                    "- VISUAL FOCUS: Dramatize this specific moment. Show the emotion.\n",
                );
            }
        }
        Some(Pillar::BigIdea) => {
            if let Some(b) = &ctx.big_idea_data {
                brief.push_str("- CORE PILLAR: CONCEPT / BIG IDEA\n");
                let _ = writeln!(brief, "- CONCEPT: \"{}\"", b.concept);
                let _ = writeln!(
                    brief,
                    "- SHIFT: Moving from {} to New Opportunity.",
                    b.target_belief
                );
                brief.push_str(
                    "- VISUAL FOCUS: A metaphor or scene that represents this shift.\n",
                );
            }
        }
        None => {}
    }

    if let Some(meta) = &ctx.meta {
        let _ = writeln!(
            brief,
            "- TARGET WHO: {}",
            meta.name.as_deref().unwrap_or_default()
        );
        let _ = writeln!(
            brief,
            "- VISCERAL PAIN: \"{}\"",
            meta.primary_symptom().unwrap_or(DEFAULT_PAIN)
        );
    }

    brief
}
