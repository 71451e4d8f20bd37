//! The render engine capability consumed by the core.
//!
//! The core never draws anything itself. It registers nodes, links them into
//! a tree, uploads one texture and pushes a transform plus a sub-texture per
//! node each frame. Anything that implements [`Engine`] can sit behind that
//! surface: a GPU sprite renderer, a terminal renderer, or the headless
//! [`RecordingEngine`] shipped here.
//!
//! # Key types
//!
//! - [`Engine`] is the capability trait
//! - [`NodeId`] is the opaque node handle the engine hands out
//! - [`RecordingEngine`] keeps the last state of every node in memory
//!

use std::collections::HashMap;

use crate::data_structures::{
    affine::Affine,
    texture::{SubTex, TextureHandle},
};

/// Opaque handle to a node owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

pub trait Engine {
    /// Registers a fresh node and returns its handle.
    fn register(&mut self) -> NodeId;

    fn append_child(&mut self, parent: NodeId, child: NodeId);

    fn set_transform(&mut self, node: NodeId, transform: Affine);

    fn set_sub_tex(&mut self, node: NodeId, sub_tex: SubTex);

    /// Uploads a decoded image and returns a handle to it.
    fn load_texture(&mut self, image: &image::DynamicImage) -> anyhow::Result<TextureHandle>;
}

impl<E: Engine + ?Sized> Engine for &mut E {
    fn register(&mut self) -> NodeId {
        (**self).register()
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        (**self).append_child(parent, child)
    }

    fn set_transform(&mut self, node: NodeId, transform: Affine) {
        (**self).set_transform(node, transform)
    }

    fn set_sub_tex(&mut self, node: NodeId, sub_tex: SubTex) {
        (**self).set_sub_tex(node, sub_tex)
    }

    fn load_texture(&mut self, image: &image::DynamicImage) -> anyhow::Result<TextureHandle> {
        (**self).load_texture(image)
    }
}

/// What the engine knows about one node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeRecord {
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub transform: Option<Affine>,
    pub sub_tex: Option<SubTex>,
    /// How many times `set_transform` was called on this node.
    pub arranged: u64,
}

/// A headless engine that stores everything it is told.
///
/// Used by the demo and the tests; also a handy reference for what a real
/// engine has to keep track of.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    nodes: HashMap<NodeId, NodeRecord>,
    next_node: u32,
    textures: Vec<(u32, u32)>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeRecord> {
        self.nodes.get(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&id)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    pub fn transform(&self, id: NodeId) -> Option<Affine> {
        self.nodes.get(&id).and_then(|n| n.transform)
    }

    pub fn sub_tex(&self, id: NodeId) -> Option<SubTex> {
        self.nodes.get(&id).and_then(|n| n.sub_tex)
    }

    /// Dimensions of every uploaded texture, indexed by handle.
    pub fn textures(&self) -> &[(u32, u32)] {
        &self.textures
    }

    fn record_mut(&mut self, id: NodeId) -> Option<&mut NodeRecord> {
        let record = self.nodes.get_mut(&id);
        if record.is_none() {
            log::warn!("node {:?} was never registered with this engine", id);
        }
        record
    }
}

impl Engine for RecordingEngine {
    fn register(&mut self) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        self.nodes.insert(id, NodeRecord::default());
        id
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(record) = self.record_mut(child) {
            record.parent = Some(parent);
        }
        if let Some(record) = self.record_mut(parent) {
            record.children.push(child);
        }
    }

    fn set_transform(&mut self, node: NodeId, transform: Affine) {
        if let Some(record) = self.record_mut(node) {
            record.transform = Some(transform);
            record.arranged += 1;
        }
    }

    fn set_sub_tex(&mut self, node: NodeId, sub_tex: SubTex) {
        if let Some(record) = self.record_mut(node) {
            record.sub_tex = Some(sub_tex);
        }
    }

    fn load_texture(&mut self, image: &image::DynamicImage) -> anyhow::Result<TextureHandle> {
        let (width, height) = (image.width(), image.height());
        anyhow::ensure!(width > 0 && height > 0, "refusing to upload an empty image");
        let handle = TextureHandle(u32::try_from(self.textures.len())?);
        self.textures.push((width, height));
        log::debug!("uploaded {}x{} texture as {:?}", width, height, handle);
        Ok(handle)
    }
}
