use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::foundation::core::Color;
use crate::foundation::error::{UiError, UiResult};

/// Pre-rasterized AngelCode bitmap font (`.fnt`, text variant).
///
/// Only the header is read; glyph pages are left to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct BitmapFont {
    /// File the font was read from.
    pub path: PathBuf,
    /// `face` from the `info` line.
    pub face: String,
    /// `size` from the `info` line.
    pub size: i32,
    /// `lineHeight` from the `common` line.
    pub line_height: u32,
}

impl BitmapFont {
    /// Read and parse a `.fnt` file.
    pub fn from_path(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| UiError::font(format!("read bitmap font '{}': {e}", path.display())))?;
        Self::parse(&text, path)
    }

    /// Parse `.fnt` text.
    pub fn parse(text: &str, path: impl Into<PathBuf>) -> UiResult<Self> {
        let mut face = None;
        let mut size = 0;
        let mut line_height = None;

        for line in text.lines() {
            let line = line.trim_start();
            let (tag, rest) = line.split_once(' ').unwrap_or((line, ""));
            match tag {
                "info" => {
                    for (k, v) in attributes(rest) {
                        match k {
                            "face" => face = Some(v),
                            "size" => size = v.parse().unwrap_or(0),
                            _ => {}
                        }
                    }
                }
                "common" => {
                    for (k, v) in attributes(rest) {
                        if k == "lineHeight" {
                            line_height = v.parse().ok();
                        }
                    }
                }
                _ => {}
            }
        }

        let line_height = line_height
            .ok_or_else(|| UiError::font("bitmap font has no common lineHeight"))?;
        Ok(Self {
            path: path.into(),
            face: face.unwrap_or_default(),
            size,
            line_height,
        })
    }
}

/// Split `key=value key2="quoted value"` pairs.
fn attributes(s: &str) -> Vec<(&str, String)> {
    let mut out = Vec::new();
    let mut rest = s.trim_start();
    while let Some((key, after)) = rest.split_once('=') {
        let key = key.trim();
        let (value, next) = if let Some(quoted) = after.strip_prefix('"') {
            match quoted.split_once('"') {
                Some((v, n)) => (v.to_owned(), n),
                None => (quoted.to_owned(), ""),
            }
        } else {
            match after.split_once(char::is_whitespace) {
                Some((v, n)) => (v.to_owned(), n),
                None => (after.to_owned(), ""),
            }
        };
        out.push((key, value));
        rest = next.trim_start();
    }
    out
}

/// Vector font file registered under a font name.
#[derive(Clone, Debug)]
pub struct FontSource {
    /// Name used by the export's `fontName`.
    pub name: String,
    /// Raw TTF/OTF bytes.
    pub bytes: Arc<Vec<u8>>,
}

impl FontSource {
    /// Wrap in-memory font bytes.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes: Arc::new(bytes),
        }
    }

    /// Read a font file.
    pub fn from_path(name: impl Into<String>, path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| UiError::font(format!("read font '{}': {e}", path.display())))?;
        Ok(Self::new(name, bytes))
    }
}

/// Font generated from a [`FontSource`] for one point size and glyph set.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedFont {
    /// Family name reported by the font.
    pub family: String,
    /// Point size the glyphs were generated at.
    pub size_px: f32,
    /// Exact glyph set, each character once.
    pub glyphs: String,
    /// Height of one laid out line.
    pub line_height: f32,
}

/// Font face carried by a text style.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FontFace {
    /// Host toolkit default font.
    #[default]
    Default,
    /// Bitmap font loaded from a `.fnt` file.
    Bitmap(Arc<BitmapFont>),
    /// Font generated from a vector source.
    Generated(Arc<GeneratedFont>),
}

/// Font plus text color.
#[derive(Clone, Debug, PartialEq)]
pub struct FontStyle {
    /// Face used to draw text.
    pub face: FontFace,
    /// Text color, already normalized.
    pub color: Color,
}

/// Generates a font for a fixed glyph set.
pub trait GlyphRasterizer {
    /// Generate `source` at `size_px` covering exactly `glyphs`.
    fn generate(
        &mut self,
        source: &FontSource,
        size_px: f32,
        glyphs: &str,
    ) -> UiResult<GeneratedFont>;
}

/// [`GlyphRasterizer`] backed by Parley shaping.
pub struct ParleyRasterizer {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
}

impl Default for ParleyRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ParleyRasterizer {
    /// Fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }
}

impl GlyphRasterizer for ParleyRasterizer {
    fn generate(
        &mut self,
        source: &FontSource,
        size_px: f32,
        glyphs: &str,
    ) -> UiResult<GeneratedFont> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(UiError::font("font size must be finite and > 0"));
        }

        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(source.bytes.to_vec()),
            None,
        );
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            UiError::font(format!("no font families registered from '{}'", source.name))
        })?;
        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| UiError::font("registered font family has no name"))?
            .to_string();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, glyphs, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        let mut layout: parley::Layout<()> = builder.build(glyphs);
        layout.break_all_lines(None);

        let height = layout.height();
        Ok(GeneratedFont {
            family,
            size_px,
            glyphs: glyphs.to_owned(),
            line_height: if height > 0.0 { height } else { size_px },
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
