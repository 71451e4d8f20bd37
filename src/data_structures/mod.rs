//! Engine data structures: simulation state, transforms, textures and the
//! scene graph.
//!
//! - `simulation` holds the ground offsets and the per-tick transition
//! - `affine` is the 2x3 transform pushed to the engine for every node
//! - `texture` contains texture handles, atlas rectangles and the texture table
//! - `scene_graph` builds the node tree and arranges it each frame

pub mod affine;
pub mod scene_graph;
pub mod simulation;
pub mod texture;
