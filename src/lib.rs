//! sprite-ngin
//!
//! A small tile-grid scene driver. It builds a scene graph of ground tiles and
//! one sprite on top of an engine-agnostic render capability, and advances
//! simulation state one discrete tick at a time from a monotonically
//! increasing clock, replaying every pending tick exactly once per frame.
//!
//! High-level modules
//! - `clock`: ticks and clocks (wall-clock driven or manually stepped)
//! - `context`: tile, atlas and timing configuration
//! - `data_structures`: simulation state, transforms, textures, scene graph
//! - `error`: typed errors raised while building a scene
//! - `flow`: frame advance and the host loop
//! - `resources`: asset sources and texture loading
//! - `render`: the engine capability and a headless recording engine
//!

pub mod clock;
pub mod context;
pub mod data_structures;
pub mod error;
pub mod flow;
pub mod render;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath;
pub use image;

pub use clock::{Clock, FrameClock, ManualClock, Tick};
pub use context::{AtlasLayout, Context, TileLayout};
pub use data_structures::{
    affine::Affine,
    scene_graph::{Arrangement, Arranger, Scene, SceneNode},
    simulation::{Hold, Sawtooth, SimulationState, Transition},
    texture::{Rect, SubTex, TextureHandle, TextureId, TextureTable},
};
pub use error::SceneError;
pub use flow::{FrameReport, FrameStats, Game, run};
pub use render::{Engine, NodeId, RecordingEngine};
pub use resources::{AssetSource, FsAssets, MemoryAssets, load_textures};
