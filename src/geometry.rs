//! Pixel-space geometry helpers: segment math, containment, centers.
//!
//! All points are screen pixels with y growing downward.

use glam::DVec2;

/// Distance between two points
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}

pub fn midpoint(a: DVec2, b: DVec2) -> DVec2 {
    (a + b) * 0.5
}

/// Unit vector from `from` toward `to`, or +x for a zero-length segment
pub fn direction(from: DVec2, to: DVec2) -> DVec2 {
    (to - from).try_normalize().unwrap_or(DVec2::X)
}

/// Angle of the segment in radians, measured on screen (y down)
pub fn segment_angle(from: DVec2, to: DVec2) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Angle in `[0, π]` between the reversed previous segment and the next one.
///
/// Small values mean the path folds back onto itself at `vertex`.
pub fn turn_back_angle(prev: DVec2, vertex: DVec2, next: DVec2) -> f64 {
    let a = prev - vertex;
    let b = next - vertex;
    if a.length_squared() == 0.0 || b.length_squared() == 0.0 {
        return std::f64::consts::PI;
    }
    let cos = a.dot(b) / (a.length() * b.length());
    cos.clamp(-1.0, 1.0).acos()
}

/// Synthetic segment of length `width` centered on the midpoint of `p0 → p1`
pub fn centered_segment(p0: DVec2, p1: DVec2, width: f64) -> (DVec2, DVec2) {
    let mid = midpoint(p0, p1);
    let d = direction(p0, p1);
    (mid - d * (width / 2.0), mid + d * (width / 2.0))
}

/// Total length of a polyline
pub fn path_length(points: &[DVec2]) -> f64 {
    points.windows(2).map(|w| distance(w[0], w[1])).sum()
}

/// Ray-casting point-in-polygon test. The polygon is implicitly closed.
pub fn polygon_contains(polygon: &[DVec2], p: DVec2) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > p.y) != (pj.y > p.y) {
            let intersect_x = (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x;
            if p.x < intersect_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Signed shoelace area (positive for clockwise on a y-down screen)
pub fn signed_area(polygon: &[DVec2]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += polygon[i].x * polygon[j].y - polygon[j].x * polygon[i].y;
    }
    area / 2.0
}

/// Area-weighted centroid; falls back to the vertex mean for degenerate outlines
pub fn polygon_centroid(polygon: &[DVec2]) -> Option<DVec2> {
    if polygon.is_empty() {
        return None;
    }
    let area = signed_area(polygon);
    if area.abs() < f64::EPSILON {
        let sum: DVec2 = polygon.iter().copied().sum();
        return Some(sum / polygon.len() as f64);
    }
    let n = polygon.len();
    let mut c = DVec2::ZERO;
    for i in 0..n {
        let (a, b) = (polygon[i], polygon[(i + 1) % n]);
        let cross = a.x * b.y - b.x * a.y;
        c += (a + b) * cross;
    }
    Some(c / (6.0 * area))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn square() -> Vec<DVec2> {
        vec![
            dvec2(0.0, 0.0),
            dvec2(10.0, 0.0),
            dvec2(10.0, 10.0),
            dvec2(0.0, 10.0),
        ]
    }

    #[test]
    fn square_contains_center_not_outside() {
        let sq = square();
        assert!(polygon_contains(&sq, dvec2(5.0, 5.0)));
        assert!(!polygon_contains(&sq, dvec2(15.0, 5.0)));
    }

    #[test]
    fn centroid_of_square() {
        let c = polygon_centroid(&square()).unwrap();
        assert!((c - dvec2(5.0, 5.0)).length() < 1e-9);
    }

    #[test]
    fn centroid_of_collinear_points_is_mean() {
        let c = polygon_centroid(&[dvec2(0.0, 0.0), dvec2(4.0, 0.0)]).unwrap();
        assert_eq!(c, dvec2(2.0, 0.0));
    }

    #[test]
    fn fold_back_angle_is_small_for_reversal() {
        let a = turn_back_angle(dvec2(0.0, 0.0), dvec2(10.0, 0.0), dvec2(0.0, 0.5));
        assert!(a < 0.1);
        let straight = turn_back_angle(dvec2(0.0, 0.0), dvec2(10.0, 0.0), dvec2(20.0, 0.0));
        assert!((straight - std::f64::consts::PI).abs() < 1e-9);
    }
}
