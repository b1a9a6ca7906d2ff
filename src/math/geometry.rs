/// Axis-aligned ellipse used to bound where regions may start or grow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    /// Center in grid coordinates (x, y)
    pub center: (f64, f64),
    /// Radii along x and y
    pub radii: (f64, f64),
}

impl Ellipse {
    /// Create an ellipse from its center and radii
    pub const fn new(center: (f64, f64), radii: (f64, f64)) -> Self {
        Self { center, radii }
    }

    /// Strict interior test with both radii scaled by `scale`
    ///
    /// A zero scale (or zero radius) divides to infinity and reports outside.
    pub fn contains_scaled(&self, x: f64, y: f64, scale: f64) -> bool {
        let dx = x - self.center.0;
        let dy = y - self.center.1;
        let rx = self.radii.0 * scale;
        let ry = self.radii.1 * scale;
        let value = (dx * dx) / (rx * rx) + (dy * dy) / (ry * ry);
        value < 1.0
    }

    /// Strict interior test at the nominal radii
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.contains_scaled(x, y, 1.0)
    }
}
