//! Prompt assembly.
//!
//! Every function here is pure: structured marketing context in, one
//! instruction string out. The assemblers ([`strategy`], [`image`],
//! [`sales_letter`]) chain the smaller builders in a fixed order.

pub mod angle;
pub mod brief;
pub mod format_guide;
pub mod identity;
pub mod image;
pub mod language;
pub mod sales_letter;
pub mod strategy;
pub mod visuals;

pub use angle::{parse_angle, ParsedAngle};
pub use brief::build_strategic_brief;
pub use format_guide::{format_text_guide, format_text_guide_for_label, DEFAULT_FORMAT_GUIDE};
pub use identity::identity_instruction;
pub use image::{build_image_director_prompt, fallback_image_prompt, ImagePromptContext};
pub use language::language_instruction;
pub use sales_letter::build_sales_letter_prompt;
pub use strategy::{build_creative_strategy_prompt, strategy_response_schema};
pub use visuals::persona_visual_context;
