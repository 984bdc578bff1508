//! Alpha mask conversion for the plane trails

use bevy::asset::RenderAssetUsages;
use bevy::image::TextureAccessError;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

/// Build a white RGBA image whose alpha is the mask's green channel.
///
/// The mask must be loaded as linear so the green value is the stored byte.
pub fn alpha_from_green(mask: &Image) -> Result<Image, TextureAccessError> {
    let width = mask.width();
    let height = mask.height();
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let green = mask.get_color_at(x, y)?.to_linear().green;
            let alpha = (green.clamp(0.0, 1.0) * 255.0).round() as u8;
            data.extend_from_slice(&[255, 255, 255, alpha]);
        }
    }

    Ok(Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    ))
}

#[cfg(test)]
pub(crate) fn rgba_mask(width: u32, height: u32, pixels: &[[u8; 4]]) -> Image {
    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        pixels.concat(),
        TextureFormat::Rgba8Unorm,
        RenderAssetUsages::default(),
    )
}
