//! Long-form sales letter prompt.

use crate::creative::{Mechanism, Story};

/// Direct-response letter opening on `headline`, built on the story and
/// mechanism pillars. Empty pillars render as empty quotes.
pub fn build_sales_letter_prompt(
    headline: &str,
    story: Option<&Story>,
    mechanism: Option<&Mechanism>,
    keywords: &[String],
) -> String {
    format!(
        "Write Gary Halbert style ad starting with: \"{headline}\". Story: \"{}\". \
         Mechanism: \"{}\". Keywords: {}.",
        story.map(|s| s.narrative.as_str()).unwrap_or_default(),
        mechanism
            .map(|m| m.scientific_pseudo.as_str())
            .unwrap_or_default(),
        keywords.join(", ")
    )
}
