//! Runtime configuration shared by the scene builder, the arrangers and the
//! host loop.
//!
//! Everything here is plain data. [`Context::default`] reproduces the classic
//! layout: a 16x16 grid of 16px tiles, three overscan ground columns, the
//! gopher standing on column 1 and a 128px atlas cell.

use crate::data_structures::texture::Rect;

/// Geometry of the tile grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileLayout {
    pub tile_width: f32,
    pub tile_height: f32,
    /// Visible tile columns.
    pub tiles_x: usize,
    /// Visible tile rows.
    pub tiles_y: usize,
    /// Extra ground columns kept beyond the visible ones.
    pub overscan: usize,
    /// Column the sprite stands on (0-indexed).
    pub gopher_tile: usize,
}

impl TileLayout {
    /// Number of ground slots in the simulation state.
    pub fn columns(&self) -> usize {
        self.tiles_x + self.overscan
    }

    /// Baseline ground offset: the top of the bottom row.
    pub fn init_ground_y(&self) -> f32 {
        self.tile_height * self.tiles_y.saturating_sub(1) as f32
    }
}

impl Default for TileLayout {
    fn default() -> Self {
        Self {
            tile_width: 16.0,
            tile_height: 16.0,
            tiles_x: 16,
            tiles_y: 16,
            overscan: 3,
            gopher_tile: 1,
        }
    }
}

/// Where the sprites live inside the texture atlas.
///
/// The atlas is a row of square cells of `cell` pixels. Each sub-texture is
/// inset by one pixel horizontally to avoid bleeding from its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasLayout {
    pub cell: u32,
    pub gopher_cell: u32,
    pub ground_cell: u32,
}

impl AtlasLayout {
    /// `None` when the cell is too small to hold a pixel after the inset, or
    /// when its edges don't fit in `u32`.
    fn cell_rect(&self, index: u32) -> Option<Rect> {
        let n = self.cell;
        let x0 = n.checked_mul(index)?.checked_add(1)?;
        let x1 = n.checked_mul(index.checked_add(1)?)?.checked_sub(1)?;
        (x1 > x0).then(|| Rect::new(x0, 0, x1, n))
    }

    pub fn gopher(&self) -> Option<Rect> {
        self.cell_rect(self.gopher_cell)
    }

    pub fn ground(&self) -> Option<Rect> {
        self.cell_rect(self.ground_cell)
    }

    /// Smallest atlas (width, height) that contains every sub-texture, or
    /// `None` if the layout cannot describe valid sub-textures.
    pub fn required_size(&self) -> Option<(u32, u32)> {
        let gopher = self.gopher()?;
        let ground = self.ground()?;
        Some((gopher.x1.max(ground.x1), gopher.y1.max(ground.y1)))
    }
}

impl Default for AtlasLayout {
    fn default() -> Self {
        Self {
            cell: 128,
            gopher_cell: 0,
            ground_cell: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    pub layout: TileLayout,
    pub atlas: AtlasLayout,
    /// Name of the atlas image, resolved through an `AssetSource`.
    pub asset_name: String,
    /// Wall-clock length of one simulation tick.
    pub tick_duration_millis: u64,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `f` and hands the context back, for builder-style setup.
    pub fn configure(mut self, f: impl FnOnce(&mut Context)) -> Self {
        f(&mut self);
        self
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            layout: TileLayout::default(),
            atlas: AtlasLayout::default(),
            asset_name: "placeholder-sprites.png".to_string(),
            tick_duration_millis: 16,
        }
    }
}
