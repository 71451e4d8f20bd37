//! Scene graph and per-node arrangement.
//!
//! The scene is a shallow tree: a root node with one child per ground column
//! followed by the sprite. Each child carries an [`Arranger`] describing what
//! it is; [`Arranger::arrange`] turns that, the current simulation state and
//! the texture table into the texture and transform to draw.
//!
//! Nodes hold no reference to the simulation state. The state is passed in
//! read-only every time the scene is arranged.

use crate::{
    clock::Tick,
    context::{Context, TileLayout},
    data_structures::{
        affine::Affine,
        simulation::SimulationState,
        texture::{SubTex, TextureId, TextureTable},
    },
    error::SceneError,
    render::{Engine, NodeId},
    resources::{AssetSource, load_textures},
};

/// Immutable per-node behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arranger {
    /// A ground tile following the ground offset of its column.
    GroundTile { column: usize },
    /// The sprite, pinned to a fixed column at the top of the scene.
    Sprite { column: usize },
}

/// What a node should look like for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrangement {
    pub texture: TextureId,
    pub sub_tex: SubTex,
    pub transform: Affine,
}

impl Arranger {
    /// Computes the arrangement for the current state.
    ///
    /// Pure: calling it any number of times with the same inputs gives the
    /// same answer and touches nothing. `_now` is available to time-based
    /// animation; the ground and sprite only depend on the state.
    pub fn arrange(
        &self,
        textures: &TextureTable,
        layout: &TileLayout,
        state: &SimulationState,
        _now: Tick,
    ) -> Arrangement {
        let (texture, transform) = match *self {
            Arranger::GroundTile { column } => {
                let y = state.ground_y(column).unwrap_or_else(|| {
                    log::warn!(
                        "ground column {} is outside the simulation state (len {}), using baseline",
                        column,
                        state.len()
                    );
                    state.baseline()
                });
                (
                    TextureId::Ground,
                    Affine::tile(
                        layout.tile_width,
                        layout.tile_height,
                        column as f32 * layout.tile_width,
                        y,
                    ),
                )
            }
            Arranger::Sprite { column } => (
                TextureId::Gopher,
                Affine::tile(
                    layout.tile_width,
                    layout.tile_height,
                    layout.tile_width * column as f32,
                    0.0,
                ),
            ),
        };
        Arrangement {
            texture,
            sub_tex: textures.get(texture),
            transform,
        }
    }
}

/// A node registered with the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    id: NodeId,
    arranger: Option<Arranger>,
    children: Vec<SceneNode>,
}

impl SceneNode {
    /// Registers a new node. Container nodes pass `None`.
    pub fn new<E: Engine + ?Sized>(engine: &mut E, arranger: Option<Arranger>) -> Self {
        Self {
            id: engine.register(),
            arranger,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn arranger(&self) -> Option<Arranger> {
        self.arranger
    }

    pub fn get_children(&self) -> &[SceneNode] {
        &self.children
    }

    pub fn add_child<E: Engine + ?Sized>(&mut self, engine: &mut E, child: SceneNode) {
        engine.append_child(self.id, child.id);
        self.children.push(child);
    }

    /// Number of nodes in this subtree, `self` included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SceneNode::node_count).sum::<usize>()
    }

    fn arrange<E: Engine + ?Sized>(
        &self,
        engine: &mut E,
        textures: &TextureTable,
        layout: &TileLayout,
        state: &SimulationState,
        now: Tick,
    ) {
        if let Some(arranger) = self.arranger {
            let arrangement = arranger.arrange(textures, layout, state, now);
            engine.set_sub_tex(self.id, arrangement.sub_tex);
            engine.set_transform(self.id, arrangement.transform);
        }
        for child in &self.children {
            child.arrange(engine, textures, layout, state, now);
        }
    }
}

/// A built scene: the node tree plus the textures and layout its arrangers
/// read from.
///
/// A game has at most one live `Scene`, so it is not `Clone`.
#[derive(Debug, PartialEq)]
pub struct Scene {
    /// Id of the `Game` that built this scene.
    pub(crate) owner: u64,
    root: SceneNode,
    textures: TextureTable,
    layout: TileLayout,
}

impl Scene {
    pub fn root(&self) -> &SceneNode {
        &self.root
    }

    pub fn textures(&self) -> &TextureTable {
        &self.textures
    }

    pub fn layout(&self) -> &TileLayout {
        &self.layout
    }

    /// Pushes the current arrangement of every node to the engine.
    ///
    /// Must run after the state has been advanced for this frame.
    pub fn arrange<E: Engine + ?Sized>(&self, engine: &mut E, state: &SimulationState, now: Tick) {
        self.root
            .arrange(engine, &self.textures, &self.layout, state, now);
    }
}

/// Builds the scene: root, one ground tile per state slot, then the sprite.
///
/// Loads the atlas first, so an asset failure leaves the engine without any
/// registered nodes. `state` is only read for its length. Hosts go through
/// [`Game::scene`](crate::flow::Game::scene), which keeps one scene alive at
/// a time.
pub(crate) fn build_scene<E, A>(
    engine: &mut E,
    assets: &A,
    ctx: &Context,
    state: &SimulationState,
) -> Result<Scene, SceneError>
where
    E: Engine + ?Sized,
    A: AssetSource + ?Sized,
{
    let textures = load_textures(engine, assets, ctx)?;

    let mut root = SceneNode::new(engine, None);
    engine.set_transform(root.id(), Affine::IDENTITY);

    for column in 0..state.len() {
        let node = SceneNode::new(engine, Some(Arranger::GroundTile { column }));
        root.add_child(engine, node);
    }

    let gopher = SceneNode::new(
        engine,
        Some(Arranger::Sprite {
            column: ctx.layout.gopher_tile,
        }),
    );
    root.add_child(engine, gopher);

    log::debug!(
        "scene built: {} ground tiles, gopher on column {}",
        state.len(),
        ctx.layout.gopher_tile
    );

    Ok(Scene {
        owner: 0,
        root,
        textures,
        layout: ctx.layout,
    })
}
