use crate::{
    context::Context,
    data_structures::texture::{SubTex, TextureTable},
    error::SceneError,
    render::Engine,
    resources::{AssetSource, load_binary},
};

/// Decodes an image from raw asset bytes, letting `image` guess the format.
pub fn decode(name: &str, bytes: &[u8]) -> Result<image::DynamicImage, SceneError> {
    image::load_from_memory(bytes).map_err(|source| SceneError::Decode {
        name: name.to_string(),
        source,
    })
}

/// Opens the atlas named in `ctx`, uploads it once and slices the gopher and
/// ground sub-textures out of it.
///
/// Nothing is opened unless the atlas layout is valid, and nothing is
/// uploaded unless the image decodes and is large enough for both
/// sub-rectangles.
pub fn load_textures<E, A>(
    engine: &mut E,
    assets: &A,
    ctx: &Context,
) -> Result<TextureTable, SceneError>
where
    E: Engine + ?Sized,
    A: AssetSource + ?Sized,
{
    let name = ctx.asset_name.as_str();
    let invalid_layout = || SceneError::InvalidAtlasLayout {
        name: name.to_string(),
        cell: ctx.atlas.cell,
        gopher_cell: ctx.atlas.gopher_cell,
        ground_cell: ctx.atlas.ground_cell,
    };
    let (Some(gopher), Some(ground)) = (ctx.atlas.gopher(), ctx.atlas.ground()) else {
        return Err(invalid_layout());
    };
    let (required_width, required_height) =
        ctx.atlas.required_size().ok_or_else(invalid_layout)?;

    let bytes = load_binary(assets, name).map_err(|source| SceneError::AssetLoad {
        name: name.to_string(),
        source,
    })?;
    let img = decode(name, &bytes)?;

    if img.width() < required_width || img.height() < required_height {
        return Err(SceneError::AtlasTooSmall {
            name: name.to_string(),
            width: img.width(),
            height: img.height(),
            required_width,
            required_height,
        });
    }

    let texture = engine
        .load_texture(&img)
        .map_err(|source| SceneError::TextureUpload {
            name: name.to_string(),
            source,
        })?;
    log::debug!(
        "atlas '{}' ({}x{}) uploaded as {:?}",
        name,
        img.width(),
        img.height(),
        texture
    );

    Ok(TextureTable::new(
        SubTex {
            texture,
            rect: gopher,
        },
        SubTex {
            texture,
            rect: ground,
        },
    ))
}
