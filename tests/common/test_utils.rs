use std::{cell::RefCell, io::Cursor};

use sprite_ngin::{
    Affine, Context, Engine, MemoryAssets, NodeId, RecordingEngine, SimulationState, SubTex,
    TextureHandle, Transition,
};

/// Encodes a solid `width` x `height` PNG.
pub fn atlas_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([90, 160, 60, 255]));
    let mut cursor = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut cursor, image::ImageFormat::Png)
        .expect("encoding a PNG in memory");
    cursor.into_inner()
}

/// In-memory assets holding a correctly sized atlas under the context's name.
pub fn test_assets(ctx: &Context) -> MemoryAssets {
    let (width, height) = ctx.atlas.required_size().expect("valid atlas layout");
    MemoryAssets::new().with(ctx.asset_name.clone(), atlas_png(width, height))
}

/// Bumps slot 0 by one per step and remembers every value it produced.
#[derive(Default)]
pub struct Counter {
    pub seen: RefCell<Vec<f32>>,
}

impl Counter {
    pub fn calls(&self) -> usize {
        self.seen.borrow().len()
    }
}

impl Transition for Counter {
    fn step(&self, state: &mut SimulationState) {
        let ground = state.ground_mut();
        ground[0] += 1.0;
        self.seen.borrow_mut().push(ground[0]);
    }
}

/// Records like [`RecordingEngine`] but rejects every texture upload.
#[derive(Default)]
pub struct RejectingEngine(pub RecordingEngine);

impl Engine for RejectingEngine {
    fn register(&mut self) -> NodeId {
        self.0.register()
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.0.append_child(parent, child)
    }

    fn set_transform(&mut self, node: NodeId, transform: Affine) {
        self.0.set_transform(node, transform)
    }

    fn set_sub_tex(&mut self, node: NodeId, sub_tex: SubTex) {
        self.0.set_sub_tex(node, sub_tex)
    }

    fn load_texture(&mut self, _: &image::DynamicImage) -> anyhow::Result<TextureHandle> {
        anyhow::bail!("out of texture memory")
    }
}
