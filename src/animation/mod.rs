//! Keyframe animation: easing curves, compiled timelines and the compiler that binds the export's
//! action lists to built widgets.

pub mod compile;
pub mod ease;
pub mod timeline;
