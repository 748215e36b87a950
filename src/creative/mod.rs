//! Closed marketing vocabularies and the request-scoped context types.
//!
//! Everything here is plain data: enums known at build time
//! ([`CreativeFormat`], [`AdIdentity`], [`UgcAvatar`]) and the structures the
//! prompt builders read from.

pub mod avatar;
pub mod context;
pub mod format;
pub mod identity;
pub mod result;

pub use avatar::{avatar_visuals, avatar_visuals_for_label, UgcAvatar, DEFAULT_AVATAR_VISUALS};
pub use context::{
    BigIdea, CreativeBrief, LanguageRegister, MassDesire, Mechanism, Persona, ProjectContext,
    Story, StrategyContext,
};
pub use format::{is_storyboard_label, CreativeFormat, FormatGroup};
pub use identity::AdIdentity;
pub use result::{CreativeStrategyResult, UglyAdStructure};
