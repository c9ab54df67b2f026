use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::animation::compile::compile_actions;
use crate::assets::atlas::TextureAtlas;
use crate::assets::font::{BitmapFont, FontSource, GlyphRasterizer, ParleyRasterizer};
use crate::assets::resolver::Resolver;
use crate::build::registry::{ParserRegistry, WidgetParser};
use crate::build::walk::{BuildSession, walk};
use crate::foundation::diag::{Diagnostic, DiagnosticKind, DiagnosticSink, TracingSink};
use crate::foundation::error::UiResult;
use crate::scene::export::UiExport;
use crate::session::scene::Scene;

/// Resources available to a build.
#[derive(Clone, Debug)]
pub struct EditorOpts {
    /// Directory loose textures and bitmap fonts are read from.
    pub base_dir: PathBuf,
    /// Packed atlas. When set, texture paths name atlas regions instead of files.
    pub atlas: Option<Arc<TextureAtlas>>,
    /// Vector font sources keyed by font name.
    pub ttf_fonts: Option<HashMap<String, FontSource>>,
    /// Pre-loaded bitmap fonts keyed by file path as written in the export.
    pub bitmap_fonts: Option<HashMap<String, Arc<BitmapFont>>>,
}

impl Default for EditorOpts {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            atlas: None,
            ttf_fonts: None,
            bitmap_fonts: None,
        }
    }
}

/// Builds scenes from one decoded export.
///
/// The editor is immutable during a build; every call to [`UiEditor::create_group`] produces an
/// independent [`Scene`].
#[derive(Debug)]
pub struct UiEditor {
    export: UiExport,
    opts: EditorOpts,
    registry: ParserRegistry,
}

impl UiEditor {
    /// Editor over an already decoded export, with the built-in parsers registered.
    pub fn new(export: UiExport, opts: EditorOpts) -> Self {
        Self {
            export,
            opts,
            registry: ParserRegistry::with_defaults(),
        }
    }

    /// Decode the export at `path`. A relative `opts.base_dir` is taken relative to the export's
    /// directory.
    pub fn from_path(path: impl AsRef<Path>, mut opts: EditorOpts) -> UiResult<Self> {
        let path = path.as_ref();
        let export = UiExport::from_path(path)?;
        if let Some(dir) = path.parent() {
            opts.base_dir = dir.join(&opts.base_dir);
        }
        Ok(Self::new(export, opts))
    }

    /// Register an extra parser; it replaces any parser for the same class name.
    pub fn add_parser(&mut self, parser: impl WidgetParser + 'static) {
        self.registry.register(parser);
    }

    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }

    pub fn opts(&self) -> &EditorOpts {
        &self.opts
    }

    pub fn export(&self) -> &UiExport {
        &self.export
    }

    /// Build the widget tree and compile its animations.
    ///
    /// Diagnostics go to `tracing`; glyphs are generated with parley.
    #[tracing::instrument(skip_all)]
    pub fn create_group(&self) -> Scene {
        let mut sink = TracingSink;
        let mut rasterizer = ParleyRasterizer::new();
        self.create_group_with(&mut sink, &mut rasterizer)
    }

    /// [`UiEditor::create_group`] with a caller supplied sink and glyph generator.
    pub fn create_group_with(
        &self,
        sink: &mut dyn DiagnosticSink,
        rasterizer: &mut dyn GlyphRasterizer,
    ) -> Scene {
        let def = self.export.def();
        let mut session = BuildSession::new();

        let root = {
            let mut res = Resolver::new(&self.opts, rasterizer, sink);
            let root = walk(&mut session, &self.registry, &mut res, None, &def.widget_tree);
            if let Some(id) = root
                && !session.graph[id].kind.is_container()
            {
                let w = &session.graph[id];
                res.report(Diagnostic::error(
                    DiagnosticKind::RootNotContainer,
                    Some(w.name.as_str()),
                    format!("root widget is a {}, not a container", w.kind.type_name()),
                ));
            }
            root
        };

        let actions = compile_actions(&def.animation, &session.by_tag, sink);
        tracing::debug!(
            widgets = session.graph.len(),
            actions = actions.len(),
            "scene built"
        );
        Scene::new(session, root, actions)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/editor.rs"]
mod tests;
