//! Texture regions and the ownership rule that keeps atlas data immutable.
//!
//! A region loaded from a loose file belongs to the widget that asked for it and can be flipped in
//! place ([`OwnedRegion`]). A region taken from a [`crate::assets::atlas::TextureAtlas`] is shared
//! by every widget that references it ([`SharedRegion`]); it exposes no mutation and must be copied
//! with [`SharedRegion::flipped_copy`] instead.

use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::foundation::core::Size;
use crate::foundation::error::{UiError, UiResult};

/// A texture page: an image file and its pixel dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Texture {
    /// Image file backing the texture.
    pub path: PathBuf,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Texture {
    /// Probe an image file for its dimensions without decoding the pixels.
    pub fn load(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let (width, height) = image::image_dimensions(path)
            .map_err(|e| UiError::asset(format!("read image '{}': {e}", path.display())))?;
        Ok(Self {
            path: path.to_path_buf(),
            width,
            height,
        })
    }
}

/// Rectangular area of a texture, with flip state.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureRegion {
    /// Backing texture.
    pub texture: Arc<Texture>,
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Mirrored horizontally.
    pub flip_x: bool,
    /// Mirrored vertically.
    pub flip_y: bool,
}

impl TextureRegion {
    /// Region covering the whole texture.
    pub fn whole(texture: Arc<Texture>) -> Self {
        let (width, height) = (texture.width, texture.height);
        Self {
            texture,
            x: 0,
            y: 0,
            width,
            height,
            flip_x: false,
            flip_y: false,
        }
    }

    /// Region size as floating point geometry.
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    fn toggle_flip(&mut self, x: bool, y: bool) {
        if x {
            self.flip_x = !self.flip_x;
        }
        if y {
            self.flip_y = !self.flip_y;
        }
    }
}

/// Region uniquely owned by one widget.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedRegion(TextureRegion);

impl OwnedRegion {
    /// Take ownership of a region.
    pub fn new(region: TextureRegion) -> Self {
        Self(region)
    }

    /// Toggle the flip flags in place.
    pub fn flip(&mut self, x: bool, y: bool) {
        self.0.toggle_flip(x, y);
    }
}

impl Deref for OwnedRegion {
    type Target = TextureRegion;

    fn deref(&self) -> &TextureRegion {
        &self.0
    }
}

/// Read-only region owned by an atlas.
#[derive(Clone, Debug, PartialEq)]
pub struct SharedRegion(Arc<TextureRegion>);

impl SharedRegion {
    pub(crate) fn new(region: Arc<TextureRegion>) -> Self {
        Self(region)
    }

    /// Copy the region and flip the copy; the shared region is left untouched.
    pub fn flipped_copy(&self, x: bool, y: bool) -> OwnedRegion {
        let mut owned = OwnedRegion::new((*self.0).clone());
        owned.flip(x, y);
        owned
    }

    /// `true` when both handles point at the same atlas entry.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SharedRegion {
    type Target = TextureRegion;

    fn deref(&self) -> &TextureRegion {
        &self.0
    }
}

/// Region as held by a widget.
#[derive(Clone, Debug, PartialEq)]
pub enum Region {
    /// Widget-owned region (loose file, or flipped copy of an atlas entry).
    Owned(OwnedRegion),
    /// Shared atlas entry.
    Shared(SharedRegion),
}

impl Region {
    /// `true` for an unmodified atlas entry.
    pub fn is_shared(&self) -> bool {
        matches!(self, Self::Shared(_))
    }
}

impl Deref for Region {
    type Target = TextureRegion;

    fn deref(&self) -> &TextureRegion {
        match self {
            Self::Owned(r) => r,
            Self::Shared(r) => r,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/region.rs"]
mod tests;
