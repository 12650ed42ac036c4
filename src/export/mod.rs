use std::path::Path;

use egui::{Pos2, Rect, Vec2, vec2};
use image::{ImageFormat, RgbImage};

use crate::document::CanvasSnapshot;
use crate::error::{ExportError, ExportResult};
use crate::renderer::Renderer;

mod raster;
pub use raster::{BACKGROUND, Rasterizer};

/// Image size for a canvas of `size` points, one pixel per point.
///
/// Shapes are stored in points, so this keeps them at the same place in the
/// exported image regardless of the display scale.
pub fn export_size(size: Vec2) -> [u32; 2] {
    [size.x.round().max(0.0) as u32, size.y.round().max(0.0) as u32]
}

/// Renders the canvas off-screen and writes it out as a PNG
#[derive(Debug, Default)]
pub struct ImageExporter {
    renderer: Renderer,
}

impl ImageExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint `snapshot` into a `width`x`height` image with a white background
    pub fn rasterize(&self, snapshot: CanvasSnapshot<'_>, [width, height]: [u32; 2]) -> ExportResult<RgbImage> {
        if width == 0 || height == 0 {
            return Err(ExportError::EmptyCanvas { width, height });
        }

        let canvas = Rect::from_min_size(Pos2::ZERO, vec2(width as f32, height as f32));
        let outside = snapshot
            .shapes()
            .filter(|shape| !canvas.intersects(shape.painted_bounds()))
            .count();
        if outside > 0 {
            log::debug!("{outside} shapes lie outside the {width}x{height} canvas");
        }

        let mut raster = Rasterizer::new(width, height);
        self.renderer.render(&mut raster, snapshot, None);
        Ok(raster.into_image())
    }

    /// Rasterize and encode as PNG at `path`, replacing any existing file
    pub fn export_png(&self, snapshot: CanvasSnapshot<'_>, size: [u32; 2], path: &Path) -> ExportResult<()> {
        let image = self.rasterize(snapshot, size)?;
        image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| ExportError::Encode {
                path: path.to_path_buf(),
                source,
            })?;

        log::info!(
            "Saved {}x{} image with {} shapes to {}",
            size[0],
            size[1],
            snapshot.shape_count(),
            path.display()
        );
        Ok(())
    }
}
