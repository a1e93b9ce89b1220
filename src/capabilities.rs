//! External capabilities the engine consumes: text metrics, pixel/geo
//! conversion and geodesic math, with simple default implementations.

use glam::{DVec2, DVec3, dvec2};

use crate::graphic::Font;
use crate::types::GeoPoint;

/// Measures text for a font
pub trait FontMetrics {
    /// Width of `text` in pixels (widest line for multi-line text)
    fn string_width(&self, font: &Font, text: &str) -> f64;
    /// Height of one line in pixels
    fn line_height(&self, font: &Font) -> f64;
}

/// Converts between screen pixels and geographic coordinates
pub trait PointConverter {
    fn geo_to_pixels(&self, geo: GeoPoint) -> DVec2;
    fn pixels_to_geo(&self, px: DVec2) -> GeoPoint;
}

/// Geodesic math on the earth's surface
pub trait Geodesic {
    /// Initial bearing in degrees clockwise from north
    fn azimuth(&self, from: GeoPoint, to: GeoPoint) -> f64;
    /// Destination after travelling `distance` meters along `azimuth` degrees
    fn point_at(&self, origin: GeoPoint, distance: f64, azimuth: f64) -> GeoPoint;
    /// Center of a polygon, `None` when it cannot be determined
    fn polygon_center(&self, points: &[GeoPoint]) -> Option<GeoPoint>;
}

/// Capabilities every placement call needs
#[derive(Clone, Copy)]
pub struct Capabilities<'a> {
    pub metrics: &'a dyn FontMetrics,
    pub geodesic: &'a dyn Geodesic,
}

impl<'a> Capabilities<'a> {
    pub fn new(metrics: &'a dyn FontMetrics, geodesic: &'a dyn Geodesic) -> Self {
        Self { metrics, geodesic }
    }
}

// ============================================================================
// Proportional text metrics
// ============================================================================

/// Proportional character widths in hundredths of an average glyph, for ' '..='~'.
#[rustfmt::skip]
pub const AW_CHAR: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Average glyph width as a fraction of the font size
const CHAR_WIDTH_RATIO: f64 = 0.6;
/// Line height as a multiple of the font size
const LINE_HEIGHT_RATIO: f64 = 1.2;

/// Sum of proportional widths in hundredths of an average glyph
pub fn text_length_hundredths(text: &str) -> u32 {
    text.chars()
        .map(|c| {
            if (' '..='~').contains(&c) {
                AW_CHAR[(c as usize) - 0x20] as u32
            } else {
                100
            }
        })
        .sum()
}

/// Table-driven metrics; no glyph shaping
#[derive(Debug, Clone, Copy, Default)]
pub struct ProportionalMetrics;

impl FontMetrics for ProportionalMetrics {
    fn string_width(&self, font: &Font, text: &str) -> f64 {
        let widest = text.lines().map(text_length_hundredths).max().unwrap_or(0);
        let mut width = widest as f64 * 0.01 * font.size * CHAR_WIDTH_RATIO;
        if font.bold {
            width *= 1.1;
        }
        width
    }

    fn line_height(&self, font: &Font) -> f64 {
        font.size * LINE_HEIGHT_RATIO
    }
}

// ============================================================================
// Spherical geodesy
// ============================================================================

/// Mean earth radius in meters
pub const EARTH_RADIUS: f64 = 6_371_008.8;

/// Great-circle math on a spherical earth
#[derive(Debug, Clone, Copy, Default)]
pub struct SphericalGeodesic;

fn to_unit(p: GeoPoint) -> DVec3 {
    let (lat, lon) = (p.lat.to_radians(), p.lon.to_radians());
    DVec3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
}

impl Geodesic for SphericalGeodesic {
    fn azimuth(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        let (lat1, lat2) = (from.lat.to_radians(), to.lat.to_radians());
        let dlon = (to.lon - from.lon).to_radians();
        let y = dlon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
        y.atan2(x).to_degrees().rem_euclid(360.0)
    }

    fn point_at(&self, origin: GeoPoint, distance: f64, azimuth: f64) -> GeoPoint {
        let delta = distance / EARTH_RADIUS;
        let theta = azimuth.to_radians();
        let lat1 = origin.lat.to_radians();
        let lon1 = origin.lon.to_radians();
        let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
        let lon2 = lon1
            + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());
        let lon = (lon2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
        GeoPoint::new(lon, lat2.to_degrees())
    }

    fn polygon_center(&self, points: &[GeoPoint]) -> Option<GeoPoint> {
        if points.is_empty() {
            return None;
        }
        let sum: DVec3 = points.iter().map(|p| to_unit(*p)).sum();
        let n = sum.try_normalize()?;
        let lat = n.z.asin().to_degrees();
        let lon = n.y.atan2(n.x).to_degrees();
        Some(GeoPoint::new(lon, lat))
    }
}

// ============================================================================
// Viewport conversion
// ============================================================================

/// Equirectangular viewport: `origin` maps to pixel (0, 0), y grows southward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConverter {
    pub origin: GeoPoint,
    pub pixels_per_degree: f64,
}

impl ViewportConverter {
    pub fn new(origin: GeoPoint, pixels_per_degree: f64) -> Self {
        Self {
            origin,
            pixels_per_degree,
        }
    }
}

impl PointConverter for ViewportConverter {
    fn geo_to_pixels(&self, geo: GeoPoint) -> DVec2 {
        dvec2(
            (geo.lon - self.origin.lon) * self.pixels_per_degree,
            (self.origin.lat - geo.lat) * self.pixels_per_degree,
        )
    }

    fn pixels_to_geo(&self, px: DVec2) -> GeoPoint {
        GeoPoint::new(
            self.origin.lon + px.x / self.pixels_per_degree,
            self.origin.lat - px.y / self.pixels_per_degree,
        )
    }
}
