//! Viewport clip regions used to pick visible label segments.

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::geometry::polygon_contains;
use crate::types::Bounds;

/// Containment test shared by every clip shape
#[enum_dispatch]
pub trait ClipArea {
    fn contains(&self, p: DVec2) -> bool;
}

/// Axis-aligned clip rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    pub bounds: Bounds,
}

impl ClipRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            bounds: Bounds::new(DVec2::new(x, y), DVec2::new(x + width, y + height)),
        }
    }
}

impl ClipArea for ClipRect {
    fn contains(&self, p: DVec2) -> bool {
        self.bounds.contains(p)
    }
}

/// Arbitrary clip polygon, implicitly closed
#[derive(Debug, Clone, PartialEq)]
pub struct ClipPolygon {
    pub points: Vec<DVec2>,
}

impl ClipPolygon {
    pub fn new(points: Vec<DVec2>) -> Self {
        Self { points }
    }
}

impl ClipArea for ClipPolygon {
    fn contains(&self, p: DVec2) -> bool {
        polygon_contains(&self.points, p)
    }
}

/// Rectangle or polygon clip; an absent clip is `Option::None` at call sites
#[enum_dispatch(ClipArea)]
#[derive(Debug, Clone, PartialEq)]
pub enum ClipRegion {
    Rect(ClipRect),
    Polygon(ClipPolygon),
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn rect_and_polygon_agree_on_a_square() {
        let rect: ClipRegion = ClipRect::new(0.0, 0.0, 10.0, 10.0).into();
        let poly: ClipRegion = ClipPolygon::new(vec![
            dvec2(0.0, 0.0),
            dvec2(10.0, 0.0),
            dvec2(10.0, 10.0),
            dvec2(0.0, 10.0),
        ])
        .into();
        for p in [dvec2(5.0, 5.0), dvec2(1.0, 9.0), dvec2(11.0, 5.0), dvec2(-1.0, -1.0)] {
            assert_eq!(rect.contains(p), poly.contains(p), "disagree at {p}");
        }
    }
}
