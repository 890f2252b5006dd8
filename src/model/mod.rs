//! Data model for the dependency browser.
//!
//! A [`Dependency`] is created once per direct requirement in the manifest and
//! lives for the whole session. Only its star status and cached size change.

mod dependency;
mod size;

pub use dependency::*;
pub use size::format_size;
