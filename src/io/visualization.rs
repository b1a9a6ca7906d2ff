//! Animated GIF export of a simulated cycle
//!
//! The scheduler records a cycle as a scramble. Playback runs it backwards, so the GIF
//! opens on the scattered parts, shows them assembling, and holds the finished apparatus
//! for the final frames.

use crate::algorithm::scheduler::playback_index;
use crate::io::error::{ApparatusError, Result, file_system_error};
use crate::io::image::{Canvas, render_frame};
use crate::io::palette::Palette;
use crate::spatial::rectangle::Rectangle;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};
use std::path::Path;

/// A finished cycle ready to be rendered frame by frame
pub struct CycleAnimation<'a> {
    parts: &'a [Rectangle],
    palette: &'a Palette,
    shuffle_length: usize,
    scale: u32,
    canvas: Canvas,
}

impl<'a> CycleAnimation<'a> {
    /// Prepare an animation over parts whose paths hold `shuffle_length` positions
    ///
    /// Every frame is drawn onto `canvas`, which should enclose the whole motion.
    pub const fn new(
        parts: &'a [Rectangle],
        palette: &'a Palette,
        shuffle_length: usize,
        scale: u32,
        canvas: Canvas,
    ) -> Self {
        Self {
            parts,
            palette,
            shuffle_length,
            scale,
            canvas,
        }
    }

    /// Number of frames in playback
    pub const fn frame_count(&self) -> usize {
        self.shuffle_length
    }

    /// Shared canvas of all frames
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Render every frame in playback order
    ///
    /// # Errors
    ///
    /// Returns `InvalidColorIndex` if a part's color is missing from the palette
    pub fn frames(&self, frame_delay_ms: u32) -> Result<Vec<Frame>> {
        let delay = Delay::from_numer_denom_ms(frame_delay_ms, 1);
        (0..self.frame_count())
            .filter_map(|frame| playback_index(self.shuffle_length, frame))
            .map(|index| {
                render_frame(self.parts, index, self.palette, self.scale, &self.canvas)
                    .map(|img| Frame::from_parts(img, 0, 0, delay))
            })
            .collect()
    }

    /// Encode the playback as a looping GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A part's color is missing from the palette
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        let frames = self.frames(frame_delay_ms)?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }

        let file = std::fs::File::create(output_path)
            .map_err(|e| file_system_error(output_path, "create file", e))?;

        let export_error = |e: image::ImageError| ApparatusError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        };
        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;
        encoder.encode_frames(frames).map_err(export_error)?;

        log::debug!(
            "Encoded {} frames to {}",
            self.frame_count(),
            output_path.display()
        );
        Ok(())
    }
}
