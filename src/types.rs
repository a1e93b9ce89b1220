//! Small value types shared across the passes.

use std::fmt;

use glam::DVec2;

/// Geographic coordinate in degrees
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn is_finite(self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lon, self.lat)
    }
}

/// Simple color model; the renderer owns the real palette.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
}

impl Color {
    pub fn black() -> Self {
        Color::Rgb(0, 0, 0)
    }

    /// Alpha channel, 255 for opaque variants
    pub fn alpha(&self) -> u8 {
        match self {
            Color::Rgba(_, _, _, a) => *a,
            Color::Named(_) | Color::Rgb(..) => 255,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::black()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({},{},{},{})", r, g, b, a),
        }
    }
}

/// Horizontal text justification relative to the draw position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Justify {
    Left,
    #[default]
    Center,
    Right,
}

/// Axis-aligned bounding box in pixel space (y grows downward)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point; `None` for an empty slice
    pub fn from_points(points: &[DVec2]) -> Option<Self> {
        let first = *points.first()?;
        let mut bounds = Bounds::new(first, first);
        for p in &points[1..] {
            bounds.min = bounds.min.min(*p);
            bounds.max = bounds.max.max(*p);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Corners in drawing order starting top-left
    pub fn corners(&self) -> [DVec2; 4] {
        [
            self.min,
            DVec2::new(self.max.x, self.min.y),
            self.max,
            DVec2::new(self.min.x, self.max.y),
        ]
    }
}
