//! Resolution of texture and font references found in option bags.
//!
//! Every failure here is reported as a diagnostic and turned into a missing visual; nothing is
//! propagated to the caller.

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::Arc;

use crate::assets::atlas::TextureAtlas;
use crate::assets::font::{BitmapFont, FontFace, FontStyle, GlyphRasterizer};
use crate::assets::region::{OwnedRegion, Region, SharedRegion, Texture, TextureRegion};
use crate::foundation::core::Color;
use crate::foundation::diag::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::scene::model::{OptionDef, resource_path};
use crate::session::editor::EditorOpts;

/// Per-build view over the editor's resources, glyph generator and diagnostic sink.
pub struct Resolver<'a> {
    opts: &'a EditorOpts,
    rasterizer: &'a mut dyn GlyphRasterizer,
    sink: &'a mut dyn DiagnosticSink,
}

impl<'a> Resolver<'a> {
    /// Borrow everything a build needs.
    pub fn new(
        opts: &'a EditorOpts,
        rasterizer: &'a mut dyn GlyphRasterizer,
        sink: &'a mut dyn DiagnosticSink,
    ) -> Self {
        Self {
            opts,
            rasterizer,
            sink,
        }
    }

    /// Forward a diagnostic to the sink.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.sink.emit(diagnostic);
    }

    /// Resolve `path` to a texture region, honoring the option's flip flags.
    ///
    /// Without an atlas the image is probed from `base_dir/path` and the widget owns the region.
    /// With an atlas, `path` must look like `<atlas stem>/<region>.<ext>`; a trailing `_<n>` on the
    /// region name selects indexed entry `n` first, falling back to the full name.
    pub fn texture_region(&mut self, option: &OptionDef, path: &str) -> Option<Region> {
        if path.is_empty() {
            return None;
        }
        let widget = Some(option.name.as_str());
        let opts = self.opts;

        let Some(atlas) = opts.atlas.as_deref() else {
            let full = opts.base_dir.join(path);
            return match Texture::load(&full) {
                Ok(texture) => {
                    let mut region = OwnedRegion::new(TextureRegion::whole(Arc::new(texture)));
                    if option.flip_x || option.flip_y {
                        region.flip(option.flip_x, option.flip_y);
                    }
                    Some(Region::Owned(region))
                }
                Err(e) => {
                    self.report(Diagnostic::debug(
                        DiagnosticKind::MissingResource,
                        widget,
                        format!("texture '{path}' not found: {e}"),
                    ));
                    None
                }
            };
        };

        let Some(candidate) = atlas_region_name(path) else {
            self.report(Diagnostic::error(
                DiagnosticKind::MalformedReference,
                widget,
                format!("texture path '{path}' does not follow <atlas>/<region>.<ext>"),
            ));
            return None;
        };

        let Some(shared) = find_in_atlas(atlas, candidate) else {
            self.report(Diagnostic::debug(
                DiagnosticKind::MissingResource,
                widget,
                format!("atlas has no region '{candidate}' (from '{path}')"),
            ));
            return None;
        };

        if option.flip_x || option.flip_y {
            Some(Region::Owned(
                shared.flipped_copy(option.flip_x, option.flip_y),
            ))
        } else {
            Some(Region::Shared(shared))
        }
    }

    /// Text style for labels, buttons and text fields.
    ///
    /// Returns `None` only when generating the vector font failed.
    pub fn font_style(&mut self, option: &OptionDef) -> Option<FontStyle> {
        let color = text_color(option);
        let widget = Some(option.name.as_str());
        let opts = self.opts;

        let source = opts
            .ttf_fonts
            .as_ref()
            .and_then(|fonts| fonts.get(&option.font_name));
        let Some(source) = source else {
            self.report(Diagnostic::debug(
                DiagnosticKind::MissingResource,
                widget,
                format!("vector font '{}' is not registered", option.font_name),
            ));
            return Some(FontStyle {
                face: FontFace::Default,
                color,
            });
        };

        let glyphs = remove_repeated_char(&option.text);
        match self
            .rasterizer
            .generate(source, option.font_size as f32, &glyphs)
        {
            Ok(font) => Some(FontStyle {
                face: FontFace::Generated(Arc::new(font)),
                color,
            }),
            Err(e) => {
                self.report(Diagnostic::error(
                    DiagnosticKind::RasterizationFailure,
                    widget,
                    format!(
                        "generate font '{}' for text \"{}\": {e}",
                        option.font_name, option.text
                    ),
                ));
                None
            }
        }
    }

    /// Bitmap font named by the option's `fileNameData`.
    ///
    /// A supplied registry is consulted by exact path; otherwise the file is read from
    /// `base_dir`. Missing fonts fall back to the default face.
    pub fn bitmap_font(&mut self, option: &OptionDef) -> FontFace {
        let path = resource_path(&option.file_name_data);
        let opts = self.opts;
        let font = match &opts.bitmap_fonts {
            Some(fonts) => fonts.get(path).cloned(),
            None => BitmapFont::from_path(opts.base_dir.join(path))
                .ok()
                .map(Arc::new),
        };

        match font {
            Some(font) => FontFace::Bitmap(font),
            None => {
                self.report(Diagnostic::debug(
                    DiagnosticKind::MissingResource,
                    Some(option.name.as_str()),
                    format!("bitmap font '{path}' not found"),
                ));
                FontFace::Default
            }
        }
    }
}

/// Strip the leading atlas segment and the 4-character extension.
fn atlas_region_name(path: &str) -> Option<&str> {
    let (_, rest) = path.split_once('/')?;
    rest.len().checked_sub(4).and_then(|end| rest.get(..end))
}

fn find_in_atlas(atlas: &TextureAtlas, candidate: &str) -> Option<SharedRegion> {
    if let Some((base, suffix)) = candidate.rsplit_once('_')
        && let Ok(index) = suffix.parse::<i32>()
        && let Some(region) = atlas.find_region_indexed(base, index)
    {
        return Some(region);
    }
    atlas.find_region(candidate)
}

/// Text color: the secondary text color unless all its channels are zero, then the primary color.
/// Alpha always comes from the option's opacity.
fn text_color(option: &OptionDef) -> Color {
    if option.text_color_r == 0 && option.text_color_g == 0 && option.text_color_b == 0 {
        Color::from_rgba8(option.color_r, option.color_g, option.color_b, option.opacity)
    } else {
        Color::from_rgba8(
            option.text_color_r,
            option.text_color_g,
            option.text_color_b,
            option.opacity,
        )
    }
}

/// Each distinct character of `text` once, in order of first appearance.
///
/// Borrows the input when it has no repeated characters.
pub fn remove_repeated_char(text: &str) -> Cow<'_, str> {
    let mut seen = HashSet::new();
    let unique: String = text.chars().filter(|c| seen.insert(*c)).collect();
    if unique.len() == text.len() {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(unique)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/resolver.rs"]
mod tests;
