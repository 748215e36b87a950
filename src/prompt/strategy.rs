//! Creative-strategy prompt and its response schema.

use std::fmt::Write as _;

use serde_json::{json, Value};

use crate::creative::context::first_non_empty;
use crate::creative::{AdIdentity, CreativeFormat, ProjectContext, StrategyContext};
use crate::prompt::angle::clean_angle;
use crate::prompt::brief::build_strategic_brief;
use crate::prompt::identity::identity_instruction;
use crate::prompt::language::{language_instruction, DEFAULT_COUNTRY};

/// Output keys the model must fill, in contract order.
pub const STRATEGY_OUTPUT_FIELDS: [&str; 9] = [
    "visualScene",
    "visualStyle",
    "embeddedText",
    "primaryText",
    "headline",
    "cta",
    "rationale",
    "voiceAnchor",
    "uglyAdStructure",
];

/// Assemble the visual-strategy prompt for one format.
///
/// Sections, in order: role, language, strategic brief, copy directive,
/// mandatory vocabulary (when keywords exist), voice directive, field
/// rules and the output contract.
pub fn build_creative_strategy_prompt(
    project: &ProjectContext,
    ctx: &StrategyContext,
    angle: &str,
    format: CreativeFormat,
    identity: Option<AdIdentity>,
) -> String {
    let clean = clean_angle(angle);
    let country = first_non_empty([project.target_country.as_deref()]).unwrap_or(DEFAULT_COUNTRY);
    let register = project.language_register.unwrap_or_default();

    let locked_headline = ctx.locked_headline().unwrap_or_default();
    let locked_hook = ctx
        .locked_hook()
        .map(str::to_owned)
        .unwrap_or_else(|| clean.clone());

    let mut prompt = String::with_capacity(6144);
    prompt.push_str("# ROLE: Creative Director (Execution Phase)\n");
    let _ = writeln!(prompt, "TASK: Visual Strategy for {format}.\n");
    let _ = writeln!(prompt, "{}\n", language_instruction(country, register));
    let _ = writeln!(prompt, "{}", build_strategic_brief(ctx));

    // Copy lock
    if locked_headline.is_empty() {
        let _ = writeln!(prompt, "ANGLE: \"{clean}\"\n");
    } else {
        prompt.push_str("**COPYWRITING INSTRUCTION (STRICT):**\n");
        let _ = writeln!(
            prompt,
            "- APPROVED VISUAL HEADLINE (For Image Overlay): \"{locked_headline}\""
        );
        let _ = writeln!(
            prompt,
            "- APPROVED CAPTION HOOK (For Caption First Line): \"{locked_hook}\""
        );
        prompt.push_str("- TASK: Execute this split strategy.\n\n");
    }

    // Vocabulary lock
    let keywords = ctx.coliseum_keywords();
    if !keywords.is_empty() {
        prompt.push_str("**MANDATORY VOCABULARY (THE TRIBE LANGUAGE):**\n");
        prompt.push_str(
            "You MUST use these specific insider keywords in the 'primaryText' or \
             'embeddedText' if natural:\n",
        );
        let _ = writeln!(prompt, "[{}].\n", keywords.join(", "));
    }

    let _ = writeln!(prompt, "{}", identity_instruction(identity));

    prompt.push_str("**INSTRUCTIONS FOR 'visualScene':**\n");
    prompt.push_str("- The scene MUST match the chosen Voice Archetype.\n");
    prompt.push_str("- If AUTHORITY: Show a clean office, lab coat, or professional setting.\n");
    prompt.push_str(
        "- If SKEPTIC/DIARIST: Show a messy bedroom, car interior, or dimly lit room (authentic).\n",
    );
    prompt.push_str("- If GATEKEEPER: Show a bright aesthetic space or outdoor walk.\n");
    prompt.push_str(
        "- **NO AD COPY:** Do NOT describe text on the background. Only physical objects.\n\n",
    );

    prompt.push_str("**INSTRUCTIONS FOR 'embeddedText' (Image Overlay):**\n");
    push_embedded_text_rules(&mut prompt, format, locked_headline, &locked_hook);

    prompt.push_str("**INSTRUCTIONS FOR 'primaryText' (Ad Caption):**\n");
    prompt.push_str("- This is the text BELOW/ABOVE the image (the post caption).\n");
    let _ = writeln!(
        prompt,
        "- MUST start with 'APPROVED CAPTION HOOK' (\"{locked_hook}\")."
    );
    prompt.push_str(
        "- Continue the copy naturally based on the 'STRATEGIC FOUNDATION' \
         (Mass Desire + Story/Mechanism).\n",
    );
    prompt.push_str("- WRITE IN TARGET LANGUAGE.\n\n");

    prompt.push_str("**OUTPUT JSON:**\n");
    prompt.push_str("- visualScene: (Rich description of background/people/props/lighting)\n");
    prompt.push_str("- visualStyle: (Photography style)\n");
    prompt.push_str("- embeddedText: (The overlay text)\n");
    prompt.push_str("- primaryText: (Ad caption - Must support the Approved Headline)\n");
    prompt.push_str("- headline: (Meta Ads Headline - MUST be based on Approved Headline)\n");
    prompt.push_str("- cta: (Button text)\n");
    prompt.push_str("- rationale: (Why this works)\n");
    prompt.push_str(
        "- voiceAnchor: (Which archetype did you choose? e.g. \"The Authority\", \"The Skeptic\")\n",
    );
    prompt.push_str("- uglyAdStructure: { keyword, emotion, qualifier, outcome }\n");

    prompt
}

fn push_embedded_text_rules(
    prompt: &mut String,
    format: CreativeFormat,
    locked_headline: &str,
    locked_hook: &str,
) {
    if format.is_long_form() {
        prompt.push_str(
            "CRITICAL: This format is a \"Wall of Text\". Write a 40-60 word paragraph \
             adopting the CHOSEN VOICE ARCHETYPE.\n",
        );
        prompt.push_str("- If Authority: Use data, logic, and \"I\" statements.\n");
        prompt.push_str("- If Skeptic: Admit your past doubts.\n");
        prompt.push_str("- If Case Study: Describe someone else's transformation.\n");
        prompt.push_str("- WRITE IN TARGET LANGUAGE.\n\n");
    } else if format.is_text_led() {
        let _ = writeln!(
            prompt,
            "This is a Text-First format. Write the content based on the APPROVED CAPTION HOOK \
             (\"{locked_hook}\") using the CHOSEN VOICE ARCHETYPE. WRITE IN TARGET LANGUAGE.\n"
        );
    } else {
        let _ = writeln!(
            prompt,
            "This is a Visual-First format. The text overlay MUST be the APPROVED VISUAL \
             HEADLINE (\"{locked_headline}\"). WRITE IN TARGET LANGUAGE.\n"
        );
    }
}

/// Structured-output schema for the strategy reply, in Gemini's
/// OpenAPI-subset dialect.
pub fn strategy_response_schema() -> Value {
    let string = json!({ "type": "STRING" });
    json!({
        "type": "OBJECT",
        "properties": {
            "visualScene": string,
            "visualStyle": string,
            "embeddedText": string,
            "primaryText": string,
            "headline": string,
            "cta": string,
            "rationale": string,
            "voiceAnchor": string,
            "uglyAdStructure": {
                "type": "OBJECT",
                "properties": {
                    "keyword": string,
                    "emotion": string,
                    "qualifier": string,
                    "outcome": string,
                },
            },
        },
    })
}
