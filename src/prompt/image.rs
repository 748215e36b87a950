//! Image-director prompt: asks the text model to write the final image prompt.
//!
//! Two templates. Video formats get a 3x3 storyboard shot list; every other
//! format gets the three-step "context, copy, visuals" template built around
//! the format's text-rendering guide. [`fallback_image_prompt`] is the
//! minimal prompt used when the model call fails.

use std::fmt::Write as _;

use crate::creative::context::first_non_empty;
use crate::creative::{
    avatar_visuals_for_label, CreativeFormat, Persona, ProjectContext, StrategyContext,
    DEFAULT_AVATAR_VISUALS,
};
use crate::prompt::angle::ParsedAngle;
use crate::prompt::brief::DEFAULT_PAIN;
use crate::prompt::format_guide::format_text_guide;
use crate::prompt::visuals::persona_visual_context;

/// Country shown when the project names none.
pub const DEFAULT_IMAGE_COUNTRY: &str = "General";
/// Persona shown when the research persona has no profile.
pub const DEFAULT_PERSONA: &str = "Target Customer";
/// Voice shown when no archetype has been recorded yet.
pub const DEFAULT_VOICE: &str = "Adaptive Persona";

/// Fixed storyboard beats: timestamp and content per panel.
pub const STORYBOARD_FRAMES: [(&str, &str); 9] = [
    ("00:00", "The Hook (Shocking face or Text Hook)."),
    ("00:02", "The Problem (Show the struggle)."),
    ("00:04", "Agitation (Zoom in on pain)."),
    ("00:06", "The Solution (Product Reveal)."),
    ("00:08", "Demo (Applying/Using it)."),
    ("00:10", "Reaction (Wow face)."),
    ("00:12", "Benefit (Result)."),
    ("00:14", "Social Proof (Before/After)."),
    ("00:16", "CTA (Holding product)."),
];

/// Inputs for one image-prompt generation.
#[derive(Debug, Clone, Copy)]
pub struct ImagePromptContext<'a> {
    /// Product and market.
    pub project: &'a ProjectContext,
    /// Requested layout.
    pub format: CreativeFormat,
    /// Parsed marketing angle; its clean text is the hook.
    pub angle: &'a ParsedAngle,
    /// Locked strategy (voice anchor, avatar).
    pub strategy: &'a StrategyContext,
    /// Raw research persona.
    pub persona: Option<&'a Persona>,
    /// Overlay text from a previous strategy generation.
    pub embedded_text: Option<&'a str>,
}

impl ImagePromptContext<'_> {
    /// Hook text: the cleaned angle.
    pub fn hook(&self) -> &str {
        &self.angle.clean_angle
    }

    fn country(&self) -> &str {
        first_non_empty([self.project.target_country.as_deref()]).unwrap_or(DEFAULT_IMAGE_COUNTRY)
    }

    fn persona_profile(&self) -> &str {
        first_non_empty([self.persona.and_then(|p| p.profile.as_deref())])
            .unwrap_or(DEFAULT_PERSONA)
    }

    fn pain_point(&self) -> &str {
        self.persona
            .and_then(Persona::primary_symptom)
            .unwrap_or(DEFAULT_PAIN)
    }

    fn voice(&self) -> &str {
        self.strategy.voice_anchor().unwrap_or(DEFAULT_VOICE)
    }

    /// Avatar description: the strategy's avatar, else the persona's look.
    pub fn avatar_visuals(&self) -> String {
        if let Some(avatar) = first_non_empty([self.strategy.avatar.as_deref()]) {
            return avatar_visuals_for_label(avatar).to_owned();
        }
        match self.persona {
            Some(persona) => persona_visual_context(persona),
            None => DEFAULT_AVATAR_VISUALS.to_owned(),
        }
    }
}

/// Director prompt for the image model's prompt writer.
pub fn build_image_director_prompt(ctx: &ImagePromptContext<'_>) -> String {
    if ctx.format.is_storyboard() {
        storyboard_prompt(ctx)
    } else {
        standard_prompt(ctx)
    }
}

fn storyboard_prompt(ctx: &ImagePromptContext<'_>) -> String {
    let mut p = String::with_capacity(2048);
    p.push_str("ROLE: Storyboard Artist & Video Director.\n\n");
    p.push_str(
        "TASK: Create a detailed Image Prompt for a **3x3 Grid Storyboard** (9 Panels total) \
         representing a short UGC video ad.\n\n",
    );

    p.push_str("*** VIDEO CONTEXT ***\n");
    p.push_str("- FORMAT: 9:16 Vertical Video (Instagram Story/Reels).\n");
    let _ = writeln!(p, "- AVATAR: {}", ctx.avatar_visuals().trim());
    let _ = writeln!(p, "- HOOK: \"{}\"", ctx.hook());
    let _ = writeln!(p, "- PRODUCT: {}\n", ctx.project.product_name);

    p.push_str("*** STORYBOARD STRUCTURE (3x3 GRID) ***\n");
    p.push_str("The image MUST be a grid of 9 frames showing the video progression:\n");
    for (n, (ts, beat)) in (1..).zip(STORYBOARD_FRAMES) {
        let _ = writeln!(p, "- Frame {n} ({ts}): {beat}");
    }

    p.push_str("\n**YOUR MISSION:**\n");
    p.push_str(
        "Write a single descriptive prompt for Gemini Image Generation that explicitly asks \
         for a \"3x3 grid storyboard\".\n",
    );
    p.push_str("Describe the Avatar in detail in the prompt.\n\n");
    p.push_str("**OUTPUT:** Return ONLY the final prompt paragraph.\n");
    p
}

fn standard_prompt(ctx: &ImagePromptContext<'_>) -> String {
    let hook = ctx.hook();
    let country = ctx.country();
    let voice = ctx.voice();

    let mut p = String::with_capacity(4096);
    p.push_str("ROLE: World-Class AI Creative Director & Copywriter.\n\n");
    p.push_str(
        "TASK: Analyze the Strategic Context and generate a high-fidelity Image Prompt + \
         Text Overlay.\n\n",
    );

    p.push_str("*** STEP 1: THE STRATEGIC CONTEXT ***\n");
    let _ = writeln!(p, "- PRODUCT: {}", ctx.project.product_name);
    if !ctx.project.product_description.is_empty() {
        let _ = writeln!(p, "- DESCRIPTION: {}", ctx.project.product_description);
    }
    let _ = writeln!(p, "- TARGET COUNTRY: {country} (Language: Native & Localized)");
    let _ = writeln!(p, "- FORMAT: {}", ctx.format);
    let _ = writeln!(p, "- IDENTITY (Voice): {voice}");
    let _ = writeln!(p, "- PERSONA: {}\n", ctx.persona_profile());
    p.push_str("=========== THE CORE MESSAGE ===========\n");
    let _ = writeln!(p, "- MARKETING HOOK: \"{hook}\"");
    let _ = writeln!(p, "- PERSONA PAIN: \"{}\"", ctx.pain_point());
    p.push_str("========================================\n\n");

    p.push_str("*** STEP 2: DYNAMIC COPYWRITING (THINK & WRITE) ***\n");
    p.push_str("You must determine the writing style YOURSELF based on the Context above.\n\n");
    p.push_str("**LOGIC PROTOCOL:**\n");
    p.push_str("IF Format is 'Twitter/Reddit/Text' -> Use raw, lower-case, typos, internet slang.\n");
    p.push_str("IF Format is 'Notification/Chat' -> Use urgent, intimate, short bursts.\n");
    p.push_str(
        "IF Identity is 'Skeptic' -> Be cynical, questioning, use words like \"scam\", \"honest\".\n",
    );
    p.push_str("IF Identity is 'Authority' -> Be professional, use data, clear grammar.\n\n");
    p.push_str("**YOUR MISSION:**\n");
    let _ = writeln!(p, "Write the text overlay based on the MARKETING HOOK: \"{hook}\".");
    p.push_str("- Do NOT just copy the hook. ADAPT it to the format.\n");
    let _ = writeln!(p, "- LANGUAGE: {country} Native.\n");

    p.push_str("*** STEP 3: VISUAL EXECUTION ***\n");
    p.push_str("Create the final image prompt.\n");
    let _ = writeln!(
        p,
        "1. **CONTAINER:** Strictly follow these UI Rules: {}",
        format_text_guide(ctx.format)
    );
    if ctx.format.is_flat_ui() {
        p.push_str(
            "   This is a RAW SCREENSHOT: no camera, no hand, no phone bezel, no 3D perspective.\n",
        );
    }
    let _ = writeln!(
        p,
        "2. **SCENE:** Visualise the environment where this Persona ({voice}) lives."
    );
    let _ = writeln!(p, "   LOOK: {}", ctx.avatar_visuals().trim());
    let _ = writeln!(
        p,
        "   SETTING: {country} context. Ensure the environment, architectural style, and \
         background characters match {country}."
    );
    p.push_str("3. **TEXT INJECTION:**\n");
    p.push_str(
        "You MUST explicitly write: \"The image features text that says: \
         '[YOUR GENERATED TEXT]'.\"\n\n",
    );
    p.push_str("**OUTPUT:** Return ONLY the final prompt paragraph.\n");
    p
}

/// Minimal prompt built from local data only.
///
/// Uses the overlay text when one was supplied, the hook otherwise.
pub fn fallback_image_prompt(ctx: &ImagePromptContext<'_>) -> String {
    let text = first_non_empty([ctx.embedded_text]).unwrap_or(ctx.hook());
    format!(
        "A high quality photo for {}. Text says: \"{}\". Style: {}.",
        ctx.project.product_name, text, ctx.format
    )
}
