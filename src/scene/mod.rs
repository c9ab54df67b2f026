//! Export boundary model and the built widget graph.

/// Decoded export wrapper.
pub mod export;
/// Arena scene graph holding built widgets.
pub mod graph;
/// serde definitions of the export document.
pub mod model;
/// Concrete widget payloads.
pub mod widget;
