//! Texture handles, atlas sub-rectangles and the texture table.
//!
//! The engine owns the actual GPU (or whatever) texture; the core only keeps
//! the opaque [`TextureHandle`] it was given on upload plus the rectangles it
//! slices out of the atlas.

/// Opaque handle returned by [`Engine::load_texture`](crate::render::Engine::load_texture).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Axis-aligned pixel rectangle, `[x0, x1) x [y0, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Rect {
    /// Builds a rectangle from two corners, swapping coordinates if needed.
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    pub fn fits_in(&self, width: u32, height: u32) -> bool {
        self.x1 <= width && self.y1 <= height
    }
}

/// A named region of an uploaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubTex {
    pub texture: TextureHandle,
    pub rect: Rect,
}

/// Logical texture identifiers used by the arrangers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureId {
    Gopher,
    Ground,
}

impl TextureId {
    pub const ALL: [TextureId; 2] = [TextureId::Gopher, TextureId::Ground];
}

/// Immutable lookup from [`TextureId`] to its [`SubTex`].
///
/// Built once by [`load_textures`](crate::resources::load_textures) and
/// shared read-only by every arranger afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureTable {
    gopher: SubTex,
    ground: SubTex,
}

impl TextureTable {
    pub fn new(gopher: SubTex, ground: SubTex) -> Self {
        Self { gopher, ground }
    }

    pub fn get(&self, id: TextureId) -> SubTex {
        match id {
            TextureId::Gopher => self.gopher,
            TextureId::Ground => self.ground,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (TextureId, SubTex)> + '_ {
        TextureId::ALL.into_iter().map(|id| (id, self.get(id)))
    }
}
