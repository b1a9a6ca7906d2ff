//! Tests for canvas bounds, frame rasterization and PNG export

#[cfg(test)]
mod tests {
    use apparatus::io::error::ApparatusError;
    use apparatus::io::image::{Canvas, export_png, render_frame};
    use apparatus::io::palette::Palette;
    use apparatus::spatial::rectangle::{Position, Rectangle};

    fn square() -> Rectangle {
        Rectangle::new(0, 0, 2, 2, 0, 0)
    }

    // The canvas covers every recorded position plus the margin
    // Verified by ignoring path positions after the first
    #[test]
    fn test_canvas_covers_paths() {
        let mut part = square();
        part.path = vec![Position::new(0, 0), Position::new(3, 1)];

        let canvas = Canvas::enclosing(&[part], 1);
        assert!(matches!(
            canvas,
            Ok(Canvas {
                min_x: -1,
                min_y: -1,
                width: 7,
                height: 5
            })
        ));
    }

    // No parts means nothing to frame
    // Verified by returning a 1x1 canvas for empty input
    #[test]
    fn test_canvas_empty() {
        assert!(matches!(
            Canvas::enclosing(&[], 0),
            Err(ApparatusError::EmptyApparatus)
        ));
    }

    // Parts are outlined boxes inset from their cell boundary
    // Verified by drawing the fill over the whole box
    #[test]
    fn test_render_frame_layers() {
        let (Ok(palette), Ok(canvas)) = (Palette::assembly(), Canvas::enclosing(&[square()], 0))
        else {
            return;
        };
        let Ok(img) = render_frame(&[square()], 0, &palette, 8, &canvas) else {
            return;
        };
        let (Ok(fill), Ok(outline)) = (palette.fill(0), palette.outline(0)) else {
            return;
        };

        assert_eq!(img.dimensions(), (16, 16));
        assert_eq!(img.get_pixel(0, 0).0, palette.background());
        assert_eq!(img.get_pixel(2, 2).0, outline);
        assert_eq!(img.get_pixel(13, 13).0, outline);
        assert_eq!(img.get_pixel(4, 4).0, fill);
        assert_eq!(img.get_pixel(11, 11).0, fill);
        assert_eq!(img.get_pixel(14, 14).0, palette.background());
    }

    // The frame shows each part where its path says
    // Verified by always drawing the current position
    #[test]
    fn test_render_frame_uses_path() {
        let mut part = square();
        part.path = vec![Position::new(0, 0), Position::new(2, 0)];
        let parts = [part];
        let (Ok(palette), Ok(canvas)) = (Palette::assembly(), Canvas::enclosing(&parts, 0)) else {
            return;
        };
        let (Ok(first), Ok(second)) = (
            render_frame(&parts, 0, &palette, 4, &canvas),
            render_frame(&parts, 1, &palette, 4, &canvas),
        ) else {
            return;
        };

        assert_eq!(first.dimensions(), (16, 8));
        assert_ne!(first.get_pixel(4, 4).0, palette.background());
        assert_eq!(second.get_pixel(4, 4).0, palette.background());
        assert_ne!(second.get_pixel(12, 4).0, palette.background());
    }

    // Colors outside the palette are reported
    // Verified by skipping parts with unknown colors
    #[test]
    fn test_render_unknown_color() {
        let part = Rectangle::new(0, 0, 1, 1, 25, 0);
        let Ok(palette) = Palette::assembly() else {
            return;
        };
        let Ok(canvas) = Canvas::enclosing(std::slice::from_ref(&part), 0) else {
            return;
        };
        assert!(matches!(
            render_frame(&[part], 0, &palette, 4, &canvas),
            Err(ApparatusError::InvalidColorIndex { index: 25, .. })
        ));
    }

    // The grid canvas spans every grid line of the generation area
    // Verified by sizing the grid canvas to xdim by ydim
    #[test]
    fn test_canvas_grid() {
        assert_eq!(
            Canvas::grid(18, 22),
            Canvas {
                min_x: 0,
                min_y: 0,
                width: 19,
                height: 23
            }
        );
    }

    // Framing encloses the parts and falls back to the grid when there are none
    // Verified by framing empty input with a 1x1 canvas
    #[test]
    fn test_canvas_framing() {
        assert_eq!(Canvas::framing(&[], 1, (4, 6)), Canvas::grid(4, 6));
        let Ok(enclosing) = Canvas::enclosing(&[square()], 1) else {
            return;
        };
        assert_eq!(Canvas::framing(&[square()], 1, (4, 6)), enclosing);
    }

    // Export creates missing directories and writes a readable PNG
    // Verified by skipping directory creation
    #[test]
    fn test_export_png() {
        let (Ok(dir), Ok(palette), Ok(canvas)) = (
            tempfile::tempdir(),
            Palette::assembly(),
            Canvas::enclosing(&[square()], 1),
        ) else {
            return;
        };
        let path = dir.path().join("nested").join("apparatus.png");

        assert!(export_png(&[square()], 0, &palette, 4, &canvas, &path).is_ok());
        assert!(path.exists());
        assert!(matches!(image::image_dimensions(&path), Ok((16, 16))));
    }

    // Exporting nothing writes the bare background over the canvas
    // Verified by failing on empty input
    #[test]
    fn test_export_empty() {
        let (Ok(dir), Ok(palette)) = (tempfile::tempdir(), Palette::assembly()) else {
            return;
        };
        let path = dir.path().join("empty.png");

        assert!(export_png(&[], 0, &palette, 4, &Canvas::grid(2, 3), &path).is_ok());
        let Ok(img) = image::open(&path) else {
            return;
        };
        let img = img.to_rgba8();
        assert_eq!(img.dimensions(), (12, 16));
        assert!(img.pixels().all(|pixel| pixel.0 == palette.background()));
    }
}
