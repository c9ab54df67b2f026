//! Entry points: configure an editor over one export and build scenes from it.

pub mod editor;
pub mod scene;
