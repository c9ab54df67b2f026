//! cocoui turns CocoStudio UI exports into live widget trees and keyframe timelines.
//!
//! The API is editor-oriented:
//!
//! - Decode a [`UiExport`]
//! - Configure a [`UiEditor`] with an atlas, fonts and a base directory ([`EditorOpts`])
//! - Build a [`Scene`] and query widgets by name or play back its compiled actions
//!
//! Missing resources, unsupported widget classes and malformed references never abort a build;
//! they are reported through a [`DiagnosticSink`].
#![forbid(unsafe_code)]

pub mod animation;
pub mod assets;
pub mod build;
pub mod foundation;
pub mod scene;
pub mod session;

pub use crate::foundation::core::{Color, Point, Size, Vec2};
pub use crate::foundation::diag::{
    CollectingSink, Diagnostic, DiagnosticKind, DiagnosticSink, Severity, TracingSink,
};
pub use crate::foundation::error::{UiError, UiResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::timeline::{Pose, Timeline, TimelineStep};
pub use crate::assets::atlas::TextureAtlas;
pub use crate::assets::font::{
    BitmapFont, FontFace, FontSource, FontStyle, GlyphRasterizer, ParleyRasterizer,
};
pub use crate::assets::region::{OwnedRegion, Region, SharedRegion, TextureRegion};
pub use crate::build::registry::{ParserRegistry, WidgetParser};
pub use crate::scene::export::UiExport;
pub use crate::scene::graph::{SceneGraph, Widget, WidgetId};
pub use crate::scene::widget::WidgetKind;
pub use crate::session::editor::{EditorOpts, UiEditor};
pub use crate::session::scene::Scene;
