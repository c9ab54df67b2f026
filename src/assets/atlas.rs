use std::path::Path;
use std::sync::Arc;

use crate::assets::region::{SharedRegion, Texture, TextureRegion};
use crate::foundation::error::{UiError, UiResult};

/// Named entry of a texture atlas.
#[derive(Clone, Debug)]
pub struct AtlasRegion {
    /// Region name without extension.
    pub name: String,
    /// Frame index for families of similarly named regions.
    pub index: Option<i32>,
    region: Arc<TextureRegion>,
}

/// Packed sheet of sub-images addressed by name (and optionally index).
///
/// The atlas is read-only once built; lookups hand out [`SharedRegion`] handles.
#[derive(Clone, Debug, Default)]
pub struct TextureAtlas {
    regions: Vec<AtlasRegion>,
}

impl TextureAtlas {
    /// Empty atlas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a region. Lookups return the first match, so earlier entries win.
    pub fn add_region(&mut self, name: impl Into<String>, index: Option<i32>, region: TextureRegion) {
        self.regions.push(AtlasRegion {
            name: name.into(),
            index,
            region: Arc::new(region),
        });
    }

    /// First region called `name`, whatever its index.
    pub fn find_region(&self, name: &str) -> Option<SharedRegion> {
        self.regions
            .iter()
            .find(|r| r.name == name)
            .map(|r| SharedRegion::new(Arc::clone(&r.region)))
    }

    /// Region called `name` carrying exactly `index`.
    pub fn find_region_indexed(&self, name: &str, index: i32) -> Option<SharedRegion> {
        self.regions
            .iter()
            .find(|r| r.name == name && r.index == Some(index))
            .map(|r| SharedRegion::new(Arc::clone(&r.region)))
    }

    /// All entries in pack order.
    pub fn regions(&self) -> &[AtlasRegion] {
        &self.regions
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// `true` when the atlas has no entries.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Load a libGDX `.atlas` pack file; page images are resolved next to it.
    pub fn from_path(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| UiError::asset(format!("read atlas '{}': {e}", path.display())))?;
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&text, dir)
    }

    /// Parse libGDX pack text.
    ///
    /// Both the legacy layout (indented `xy:` / `size:` per region) and the newer one (`bounds:`)
    /// are accepted. Page images are not decoded; their size comes from the page `size:` header.
    pub fn parse(text: &str, images_dir: impl AsRef<Path>) -> UiResult<Self> {
        let images_dir = images_dir.as_ref();
        let mut atlas = Self::new();

        let mut expect_page = true;
        let mut page_name = String::new();
        let mut page_size = (0u32, 0u32);
        let mut page: Option<Arc<Texture>> = None;
        let mut pending: Option<PendingRegion> = None;

        for (lineno, raw) in text.lines().enumerate() {
            let line = raw.trim();
            let lineno = lineno + 1;

            if line.is_empty() {
                flush(&mut atlas, &mut pending, &page);
                page = None;
                expect_page = true;
                continue;
            }

            if expect_page {
                page_name = line.to_owned();
                page_size = (0, 0);
                expect_page = false;
                continue;
            }

            match line.split_once(':') {
                Some((key, value)) => {
                    let key = key.trim();
                    match pending.as_mut() {
                        Some(region) => region.apply(key, value, lineno)?,
                        None => {
                            if key == "size" {
                                let [w, h] = parse_ints::<2>(value, lineno)?;
                                page_size = (to_u32(w, lineno)?, to_u32(h, lineno)?);
                            }
                        }
                    }
                }
                None => {
                    flush(&mut atlas, &mut pending, &page);
                    if page.is_none() {
                        page = Some(Arc::new(Texture {
                            path: images_dir.join(&page_name),
                            width: page_size.0,
                            height: page_size.1,
                        }));
                    }
                    pending = Some(PendingRegion::named(line));
                }
            }
        }
        flush(&mut atlas, &mut pending, &page);

        Ok(atlas)
    }
}

#[derive(Debug)]
struct PendingRegion {
    name: String,
    bounds: [u32; 4],
    index: Option<i32>,
}

impl PendingRegion {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            bounds: [0; 4],
            index: None,
        }
    }

    fn apply(&mut self, key: &str, value: &str, lineno: usize) -> UiResult<()> {
        match key {
            "xy" => {
                let [x, y] = parse_ints::<2>(value, lineno)?;
                self.bounds[0] = to_u32(x, lineno)?;
                self.bounds[1] = to_u32(y, lineno)?;
            }
            "size" => {
                let [w, h] = parse_ints::<2>(value, lineno)?;
                self.bounds[2] = to_u32(w, lineno)?;
                self.bounds[3] = to_u32(h, lineno)?;
            }
            "bounds" => {
                let v = parse_ints::<4>(value, lineno)?;
                for (slot, n) in self.bounds.iter_mut().zip(v) {
                    *slot = to_u32(n, lineno)?;
                }
            }
            "index" => {
                let [i] = parse_ints::<1>(value, lineno)?;
                let index = i32::try_from(i).map_err(|_| {
                    UiError::validation(format!("atlas line {lineno}: index {i} is out of range"))
                })?;
                self.index = (index >= 0).then_some(index);
            }
            _ => {}
        }
        Ok(())
    }
}

fn flush(atlas: &mut TextureAtlas, pending: &mut Option<PendingRegion>, page: &Option<Arc<Texture>>) {
    let (Some(region), Some(page)) = (pending.take(), page.as_ref()) else {
        return;
    };
    let [x, y, width, height] = region.bounds;
    atlas.add_region(
        region.name,
        region.index,
        TextureRegion {
            texture: Arc::clone(page),
            x,
            y,
            width,
            height,
            flip_x: false,
            flip_y: false,
        },
    );
}

fn parse_ints<const N: usize>(value: &str, lineno: usize) -> UiResult<[i64; N]> {
    let mut out = [0i64; N];
    let mut parts = value.split(',').map(str::trim);
    for slot in &mut out {
        let part = parts.next().ok_or_else(|| {
            UiError::validation(format!("atlas line {lineno}: expected {N} values"))
        })?;
        *slot = part.parse().map_err(|_| {
            UiError::validation(format!("atlas line {lineno}: invalid number \"{part}\""))
        })?;
    }
    Ok(out)
}

fn to_u32(v: i64, lineno: usize) -> UiResult<u32> {
    u32::try_from(v)
        .map_err(|_| UiError::validation(format!("atlas line {lineno}: {v} is out of range")))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/atlas.rs"]
mod tests;
