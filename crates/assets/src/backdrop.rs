//! Backdrop: decoded once at startup, scaled to the terminal's pixel size
//! and dimmed before the loop begins.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use image::{imageops::FilterType, DynamicImage, ImageFormat};

use tui_walle_types::{BACKDROP_DIM, CELL_PX_HEIGHT, CELL_PX_WIDTH};

/// The decoded backdrop image. Scaling happens against the terminal size in
/// effect when the loop starts; the backdrop is drawn exactly once.
#[derive(Debug)]
pub struct Backdrop {
    image: DynamicImage,
}

impl Backdrop {
    pub fn load(path: &Path) -> Result<Self> {
        let image =
            image::open(path).with_context(|| format!("read backdrop {}", path.display()))?;
        Ok(Self { image })
    }

    pub fn from_image(image: DynamicImage) -> Self {
        Self { image }
    }

    /// Stretch to cover `cols x rows` cells, dim to 80% brightness, and
    /// PNG-encode for the graphics protocol.
    pub fn scaled_png(&self, cols: u16, rows: u16) -> Result<Vec<u8>> {
        let target_w = cols as u32 * CELL_PX_WIDTH;
        let target_h = rows as u32 * CELL_PX_HEIGHT;

        let mut rgb = self
            .image
            .resize_exact(target_w, target_h, FilterType::Triangle)
            .to_rgb8();
        for pixel in rgb.pixels_mut() {
            for channel in &mut pixel.0 {
                *channel = (*channel as f32 * BACKDROP_DIM) as u8;
            }
        }

        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(rgb)
            .write_to(&mut buf, ImageFormat::Png)
            .context("encode backdrop png")?;
        Ok(buf.into_inner())
    }
}
