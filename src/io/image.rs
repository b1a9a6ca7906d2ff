//! Frame rasterization and PNG export

use crate::io::configuration::{PART_INSET, STROKE_WIDTH};
use crate::io::error::{ApparatusError, Result, file_system_error};
use crate::io::palette::{Palette, Rgba8};
use crate::spatial::rectangle::{Position, Rectangle};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Grid-unit region a sequence of frames is drawn into
///
/// Covers every position a part takes over its whole path, plus a margin, so that all
/// frames of one cycle share a size and origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    /// Leftmost grid unit
    pub min_x: i32,
    /// Topmost grid unit
    pub min_y: i32,
    /// Width in grid units
    pub width: u32,
    /// Height in grid units
    pub height: u32,
}

impl Canvas {
    /// Smallest canvas containing every part at every recorded position
    ///
    /// Parts without a path contribute their current position.
    ///
    /// # Errors
    ///
    /// Returns `EmptyApparatus` if `parts` is empty
    pub fn enclosing(parts: &[Rectangle], margin: u32) -> Result<Self> {
        let mut extent: Option<(i32, i32, i32, i32)> = None;

        for part in parts {
            let current = [part.position()];
            let positions: &[Position] = if part.path.is_empty() {
                &current
            } else {
                &part.path
            };
            for position in positions {
                let (x1, y1) = (position.x, position.y);
                let (x2, y2) = (x1 + part.w, y1 + part.h);
                extent = Some(match extent {
                    None => (x1, y1, x2, y2),
                    Some((a, b, c, d)) => (a.min(x1), b.min(y1), c.max(x2), d.max(y2)),
                });
            }
        }

        let (x1, y1, x2, y2) = extent.ok_or(ApparatusError::EmptyApparatus)?;
        let margin = margin as i32;
        Ok(Self {
            min_x: x1 - margin,
            min_y: y1 - margin,
            width: (x2 - x1 + 2 * margin).max(1) as u32,
            height: (y2 - y1 + 2 * margin).max(1) as u32,
        })
    }

    /// Canvas covering the whole generation grid of `xdim × ydim` units
    pub const fn grid(xdim: usize, ydim: usize) -> Self {
        Self {
            min_x: 0,
            min_y: 0,
            width: xdim as u32 + 1,
            height: ydim as u32 + 1,
        }
    }

    /// Enclosing canvas of generated parts, or the whole grid if generation left it empty
    pub fn framing(parts: &[Rectangle], margin: u32, (xdim, ydim): (usize, usize)) -> Self {
        Self::enclosing(parts, margin).unwrap_or(Self::grid(xdim, ydim))
    }

    /// Image size in pixels at `scale` pixels per grid unit
    pub const fn pixel_size(&self, scale: u32) -> (u32, u32) {
        (self.width * scale, self.height * scale)
    }
}

/// Draw every part at path index `path_index`
///
/// Each part is an outlined box inset from its grid cell boundary. Parts whose path is
/// shorter than `path_index` are drawn at their current position.
///
/// # Errors
///
/// Returns `InvalidColorIndex` if a part's color is missing from `palette`
pub fn render_frame(
    parts: &[Rectangle],
    path_index: usize,
    palette: &Palette,
    scale: u32,
    canvas: &Canvas,
) -> Result<RgbaImage> {
    let (width, height) = canvas.pixel_size(scale);
    let mut img = RgbaImage::from_pixel(width, height, Rgba(palette.background()));

    for part in parts {
        let position = part.position_at(path_index).unwrap_or(part.position());
        let fill = palette.fill(part.color)?;
        let outline = palette.outline(part.color)?;

        let x = i64::from(position.x - canvas.min_x) * i64::from(scale) + i64::from(PART_INSET);
        let y = i64::from(position.y - canvas.min_y) * i64::from(scale) + i64::from(PART_INSET);
        let w = i64::from(part.w) * i64::from(scale) - 2 * i64::from(PART_INSET);
        let h = i64::from(part.h) * i64::from(scale) - 2 * i64::from(PART_INSET);

        fill_box(&mut img, (x, y, w, h), outline);
        let stroke = i64::from(STROKE_WIDTH);
        fill_box(
            &mut img,
            (x + stroke, y + stroke, w - 2 * stroke, h - 2 * stroke),
            fill,
        );
    }

    Ok(img)
}

// Clipped to the image
fn fill_box(img: &mut RgbaImage, (x, y, w, h): (i64, i64, i64, i64), color: Rgba8) {
    if w <= 0 || h <= 0 {
        return;
    }
    let x_start = x.max(0);
    let y_start = y.max(0);
    let x_end = (x + w).min(i64::from(img.width()));
    let y_end = (y + h).min(i64::from(img.height()));

    for py in y_start..y_end {
        for px in x_start..x_end {
            img.put_pixel(px as u32, py as u32, Rgba(color));
        }
    }
}

/// Export the apparatus at path index `path_index` as a PNG image
///
/// Index 0 shows the assembled state once a cycle has run.
///
/// # Errors
///
/// Returns an error if:
/// - A part's color is missing from `palette`
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(
    parts: &[Rectangle],
    path_index: usize,
    palette: &Palette,
    scale: u32,
    canvas: &Canvas,
    output_path: &Path,
) -> Result<()> {
    let img = render_frame(parts, path_index, palette, scale, canvas)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|e| ApparatusError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::debug!(
        "Wrote {}x{} frame to {}",
        img.width(),
        img.height(),
        output_path.display()
    );
    Ok(())
}
