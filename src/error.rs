/// Errors produced while building a scene.
///
/// The simulation itself cannot fail; everything here happens once, before
/// the first frame. The caller decides whether to abort or retry.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The asset could not be opened or read.
    #[error("failed to load asset '{name}': {source}")]
    AssetLoad {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The asset bytes are not a decodable image.
    #[error("failed to decode asset '{name}' as an image: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    /// The engine refused the decoded image.
    #[error("engine rejected texture upload for '{name}': {source}")]
    TextureUpload {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// The atlas decoded fine but cannot hold every sub-texture.
    #[error(
        "atlas '{name}' is {width}x{height} but sub-textures need at least {required_width}x{required_height}"
    )]
    AtlasTooSmall {
        name: String,
        width: u32,
        height: u32,
        required_width: u32,
        required_height: u32,
    },

    /// The atlas layout cannot produce non-empty sub-textures.
    #[error("atlas layout for '{name}' is invalid: cell size {cell} with cells {gopher_cell} and {ground_cell}")]
    InvalidAtlasLayout {
        name: String,
        cell: u32,
        gopher_cell: u32,
        ground_cell: u32,
    },

    /// A scene built from this game is still alive.
    #[error("scene already built; discard the previous scene before building a new one")]
    SceneAlreadyBuilt,

    /// The scene handed to `discard_scene` belongs to another game.
    #[error("scene was built by a different game and cannot be discarded here")]
    ForeignScene(Box<crate::data_structures::scene_graph::Scene>),
}
