use sprite_ngin::{
    Context, FsAssets, Game, MemoryAssets, Rect, RecordingEngine, SceneError, TextureId,
    load_textures,
};

use crate::common::test_utils::{RejectingEngine, atlas_png, test_assets};

mod common;

#[test]
fn atlas_is_sliced_into_gopher_and_ground() {
    let ctx = Context::default();
    let mut engine = RecordingEngine::new();

    let table = load_textures(&mut engine, &test_assets(&ctx), &ctx).unwrap();

    let gopher = table.get(TextureId::Gopher);
    let ground = table.get(TextureId::Ground);
    assert_eq!(gopher.rect, Rect::new(1, 0, 127, 128));
    assert_eq!(ground.rect, Rect::new(385, 0, 511, 128));
    assert_eq!(gopher.texture, ground.texture);
    assert_eq!(engine.textures(), &[(511, 128)]);
    assert_eq!(table.iter().count(), 2);
}

#[test]
fn missing_asset_is_an_asset_load_error() {
    let ctx = Context::default();
    let mut engine = RecordingEngine::new();

    let err = load_textures(&mut engine, &MemoryAssets::new(), &ctx).unwrap_err();

    match err {
        SceneError::AssetLoad { name, source } => {
            assert_eq!(name, "placeholder-sprites.png");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected AssetLoad, got {other:?}"),
    }
    assert!(engine.textures().is_empty());
}

#[test]
fn missing_file_on_disk_is_an_asset_load_error() {
    let ctx = Context::default();
    let mut engine = RecordingEngine::new();
    let assets = FsAssets::new("./definitely/not/here");

    let err = load_textures(&mut engine, &assets, &ctx).unwrap_err();

    assert!(matches!(err, SceneError::AssetLoad { .. }));
}

#[test]
fn garbage_bytes_are_a_decode_error() {
    let ctx = Context::default();
    let mut engine = RecordingEngine::new();
    let assets = MemoryAssets::new().with(ctx.asset_name.clone(), b"not an image".to_vec());

    let err = load_textures(&mut engine, &assets, &ctx).unwrap_err();

    assert!(matches!(err, SceneError::Decode { .. }), "{err}");
    assert!(engine.textures().is_empty());
}

#[test]
fn rejected_upload_is_a_texture_upload_error() {
    let ctx = Context::default();
    let mut engine = RejectingEngine::default();

    let err = load_textures(&mut engine, &test_assets(&ctx), &ctx).unwrap_err();

    match &err {
        SceneError::TextureUpload { source, .. } => {
            assert!(source.to_string().contains("out of texture memory"));
        }
        other => panic!("expected TextureUpload, got {other:?}"),
    }
}

#[test]
fn small_atlas_is_rejected_before_upload() {
    let ctx = Context::default();
    let mut engine = RecordingEngine::new();
    let assets = MemoryAssets::new().with(ctx.asset_name.clone(), atlas_png(256, 128));

    let err = load_textures(&mut engine, &assets, &ctx).unwrap_err();

    match err {
        SceneError::AtlasTooSmall {
            width,
            height,
            required_width,
            required_height,
            ..
        } => {
            assert_eq!((width, height), (256, 128));
            assert_eq!((required_width, required_height), (511, 128));
        }
        other => panic!("expected AtlasTooSmall, got {other:?}"),
    }
    assert!(engine.textures().is_empty());
}

#[test]
fn failed_load_registers_no_nodes() {
    let ctx = Context::default();
    let mut engine = RecordingEngine::new();
    let mut game = Game::new(&ctx.layout);

    let result = game.scene(&mut engine, &MemoryAssets::new(), &ctx);

    assert!(result.is_err());
    assert_eq!(engine.node_count(), 0);
    // a failed build does not count as a live scene
    assert!(game.scene(&mut engine, &test_assets(&ctx), &ctx).is_ok());
}

#[test]
fn custom_asset_name_and_cell_size() {
    let ctx = Context::default().configure(|ctx| {
        ctx.asset_name = "tiny.png".to_string();
        ctx.atlas.cell = 8;
    });
    let mut engine = RecordingEngine::new();
    let assets = MemoryAssets::new().with("tiny.png", atlas_png(32, 8));

    let table = load_textures(&mut engine, &assets, &ctx).unwrap();

    assert_eq!(table.get(TextureId::Gopher).rect, Rect::new(1, 0, 7, 8));
    assert_eq!(table.get(TextureId::Ground).rect, Rect::new(25, 0, 31, 8));
}

#[test]
fn bundled_atlas_loads() {
    let ctx = Context::default();
    let mut engine = RecordingEngine::new();

    let table = load_textures(&mut engine, &FsAssets::bundled(), &ctx).unwrap();

    assert_eq!(table.get(TextureId::Ground).rect.width(), 126);
    assert_eq!(engine.textures(), &[(512, 128)]);
}

#[test]
fn zero_cell_size_is_an_invalid_layout() {
    let ctx = Context::default().configure(|ctx| ctx.atlas.cell = 0);
    let mut engine = RecordingEngine::new();
    let assets = test_assets(&Context::default());

    assert_eq!(ctx.atlas.required_size(), None);
    let err = load_textures(&mut engine, &assets, &ctx).unwrap_err();

    match err {
        SceneError::InvalidAtlasLayout { name, cell, .. } => {
            assert_eq!(name, "placeholder-sprites.png");
            assert_eq!(cell, 0);
        }
        other => panic!("expected InvalidAtlasLayout, got {other:?}"),
    }
    assert!(engine.textures().is_empty());
}

#[test]
fn overflowing_cell_size_is_an_invalid_layout() {
    let ctx = Context::default().configure(|ctx| ctx.atlas.cell = u32::MAX / 2);
    let mut engine = RecordingEngine::new();
    let mut game = Game::new(&ctx.layout);

    assert_eq!(ctx.atlas.gopher(), Some(Rect::new(1, 0, u32::MAX / 2 - 1, u32::MAX / 2)));
    assert_eq!(ctx.atlas.ground(), None);
    let err = game
        .scene(&mut engine, &test_assets(&Context::default()), &ctx)
        .unwrap_err();

    assert!(matches!(err, SceneError::InvalidAtlasLayout { .. }), "{err}");
    assert_eq!(engine.node_count(), 0);
    assert!(engine.textures().is_empty());
}

#[test]
fn default_layout_needs_four_cells() {
    assert_eq!(Context::default().atlas.required_size(), Some((511, 128)));
}
