//! Sprite cache: the two mirror-image raster variants of the walking
//! sprite, rasterized once from SVG at startup.

use std::fs;
use std::io::Cursor;

use anyhow::{anyhow, Context, Result};
use image::{imageops, DynamicImage, ImageFormat, RgbaImage};
use resvg::{tiny_skia, usvg};

use tui_walle_types::{Direction, EngineConfig, SPRITE_PX_PER_COL};

/// PNG-encoded left- and right-facing renders of the sprite. Which raw
/// render maps to which facing is decided here, once, from the configured
/// base orientation; consumers only ever ask for a logical [`Direction`].
#[derive(Debug, Clone)]
pub struct SpriteImages {
    left: Vec<u8>,
    right: Vec<u8>,
}

impl SpriteImages {
    /// Read the SVG source from disk and build both variants.
    pub fn load(config: &EngineConfig) -> Result<Self> {
        let data = fs::read(&config.sprite_path)
            .with_context(|| format!("read sprite svg {}", config.sprite_path.display()))?;
        Self::from_svg_data(&data, config)
    }

    /// Build both variants from in-memory SVG data.
    pub fn from_svg_data(data: &[u8], config: &EngineConfig) -> Result<Self> {
        let px_width = config.sprite_cols as u32 * SPRITE_PX_PER_COL;
        let plain = rasterize_svg(data, px_width)?;
        let mirrored = imageops::flip_horizontal(&plain);

        let (left, right) = match config.base_orientation {
            Direction::Left => (plain, mirrored),
            Direction::Right => (mirrored, plain),
        };

        Ok(Self {
            left: encode_png(left)?,
            right: encode_png(right)?,
        })
    }

    /// PNG bytes for the sprite facing its direction of travel.
    pub fn facing(&self, direction: Direction) -> &[u8] {
        match direction {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }
}

/// Rasterize SVG data at a fixed pixel width, preserving aspect ratio.
fn rasterize_svg(data: &[u8], px_width: u32) -> Result<RgbaImage> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_data(data, &options).map_err(|e| anyhow!("parse sprite svg: {e}"))?;

    let size = tree.size();
    let scale = px_width as f32 / size.width();
    let px_height = ((size.height() * scale).ceil() as u32).max(1);

    let mut pixmap = tiny_skia::Pixmap::new(px_width, px_height)
        .ok_or_else(|| anyhow!("zero-sized sprite raster ({px_width}x{px_height})"))?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied alpha; undo that for PNG/RGBA.
    let mut rgba = Vec::with_capacity((px_width * px_height * 4) as usize);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(px_width, px_height, rgba)
        .ok_or_else(|| anyhow!("sprite raster buffer size mismatch"))
}

fn encode_png(img: RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, ImageFormat::Png)
        .context("encode sprite png")?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // Asymmetric art: a circle in the left half.
    const TEST_SVG: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="16">
        <rect width="40" height="16" fill="#222222"/>
        <circle cx="10" cy="8" r="6" fill="#ffcc00"/>
    </svg>"##;

    fn test_config(base: Direction) -> EngineConfig {
        EngineConfig {
            sprite_path: PathBuf::new(),
            backdrop_path: PathBuf::new(),
            base_orientation: base,
            sprite_image_id: 2,
            backdrop_image_id: 1,
            sprite_cols: 10,
            sprite_rows: 4,
        }
    }

    #[test]
    fn rasterizes_at_requested_width() {
        let img = rasterize_svg(TEST_SVG, 100).unwrap();
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 40);
    }

    #[test]
    fn variants_are_pixel_for_pixel_mirrors() {
        let sprites = SpriteImages::from_svg_data(TEST_SVG, &test_config(Direction::Left)).unwrap();
        let left = image::load_from_memory(sprites.facing(Direction::Left))
            .unwrap()
            .to_rgba8();
        let right = image::load_from_memory(sprites.facing(Direction::Right))
            .unwrap()
            .to_rgba8();
        assert_eq!(imageops::flip_horizontal(&left), right);
        // The art is asymmetric, so the variants must differ.
        assert_ne!(left, right);
    }

    #[test]
    fn base_orientation_swaps_the_mapping() {
        let as_left = SpriteImages::from_svg_data(TEST_SVG, &test_config(Direction::Left)).unwrap();
        let as_right = SpriteImages::from_svg_data(TEST_SVG, &test_config(Direction::Right)).unwrap();
        assert_eq!(as_left.facing(Direction::Left), as_right.facing(Direction::Right));
        assert_eq!(as_left.facing(Direction::Right), as_right.facing(Direction::Left));
    }

    #[test]
    fn invalid_svg_is_a_startup_error() {
        let cfg = test_config(Direction::Left);
        assert!(SpriteImages::from_svg_data(b"not svg at all", &cfg).is_err());
    }
}
