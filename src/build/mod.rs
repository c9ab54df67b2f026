//! Turning the decoded widget tree into a [`crate::scene::graph::SceneGraph`].
//!
//! The walker looks up a [`registry::WidgetParser`] by class name, lets it build the bare widget,
//! applies the common properties in [`finish`] and records the widget in the session indices.

pub mod builders;
pub mod finish;
pub mod registry;
pub mod walk;
