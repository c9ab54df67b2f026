//! Texture and font resources referenced by the export.

pub mod atlas;
pub mod font;
pub mod region;
pub mod resolver;
