//! Anchor segment selection.
//!
//! Segment `i` always means `pixels[i] → pixels[i + 1]`.

use glam::DVec2;

use crate::clip::{ClipArea, ClipRegion};
use crate::defaults;
use crate::geometry::{distance, path_length, turn_back_angle};
use crate::graphic::TacticalLine;

/// Middle segment by point count: `floor((N + 1) / 2) - 1`
pub fn middle_segment(n: usize) -> usize {
    ((n + 1) / 2).saturating_sub(1)
}

/// Middle segment that is actually visible inside `clip`.
///
/// Scans forward from the count-based middle for a segment at least
/// [`defaults::MIN_VISIBLE_SEGMENT`] long with an endpoint inside the clip,
/// then backward; falls back to the count-based middle. For `BOUNDARY`
/// segments that fold back onto their predecessor are skipped as well.
pub fn visible_middle_segment(
    pixels: &[DVec2],
    line_type: TacticalLine,
    clip: Option<&ClipRegion>,
) -> usize {
    let start = middle_segment(pixels.len());
    let Some(clip) = clip else {
        return start;
    };
    let segments = pixels.len().saturating_sub(1);

    let qualifies = |i: usize| {
        let (a, b) = (pixels[i], pixels[i + 1]);
        if distance(a, b) < defaults::MIN_VISIBLE_SEGMENT {
            return false;
        }
        if !(clip.contains(a) || clip.contains(b)) {
            return false;
        }
        !(line_type == TacticalLine::BOUNDARY
            && i > 0
            && turn_back_angle(pixels[i - 1], a, b) < defaults::FOLD_BACK_ANGLE)
    };

    (start..segments)
        .find(|&i| qualifies(i))
        .or_else(|| (0..start.min(segments)).rev().find(|&i| qualifies(i)))
        .unwrap_or(start)
}

/// Segment containing the point halfway along the path
pub fn arc_middle_segment(pixels: &[DVec2]) -> usize {
    let half = path_length(pixels) / 2.0;
    let mut walked = 0.0;
    for (i, w) in pixels.windows(2).enumerate() {
        walked += distance(w[0], w[1]);
        if walked >= half {
            return i;
        }
    }
    middle_segment(pixels.len())
}

/// Index of the longest segment; the first one wins ties
pub fn longest_segment(pixels: &[DVec2]) -> usize {
    let mut best = (0, f64::MIN);
    for (i, w) in pixels.windows(2).enumerate() {
        let len = distance(w[0], w[1]);
        if len > best.1 {
            best = (i, len);
        }
    }
    best.0
}

/// First segment at least `min_len` long
pub fn first_segment_at_least(pixels: &[DVec2], min_len: f64) -> Option<usize> {
    pixels
        .windows(2)
        .position(|w| distance(w[0], w[1]) >= min_len)
}

/// Point `t` (0..=1) of the way along the path by arc length
pub fn point_along(pixels: &[DVec2], t: f64) -> Option<DVec2> {
    if pixels.is_empty() {
        return None;
    }
    let target = path_length(pixels) * t.clamp(0.0, 1.0);
    let mut walked = 0.0;
    for w in pixels.windows(2) {
        let len = distance(w[0], w[1]);
        if len > 0.0 && walked + len >= target {
            return Some(w[0] + (w[1] - w[0]) * ((target - walked) / len));
        }
        walked += len;
    }
    pixels.last().copied()
}

/// Synthetic segment between the quarter and three-quarter points of the path
pub fn quartile_segment(pixels: &[DVec2]) -> Option<(DVec2, DVec2)> {
    Some((point_along(pixels, 0.25)?, point_along(pixels, 0.75)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::ClipRect;
    use glam::dvec2;

    fn zigzag(n: usize) -> Vec<DVec2> {
        (0..n)
            .map(|i| dvec2(i as f64 * 20.0, if i % 2 == 0 { 0.0 } else { 10.0 }))
            .collect()
    }

    #[test]
    fn no_clip_is_count_middle() {
        for n in 2..40 {
            assert_eq!(
                visible_middle_segment(&zigzag(n), TacticalLine::PL, None),
                (n + 1) / 2 - 1
            );
        }
    }

    #[test]
    fn clip_moves_forward_to_visible_segment() {
        let pts = zigzag(9);
        let clip: ClipRegion = ClipRect::new(115.0, -5.0, 100.0, 20.0).into();
        // middle is segment 4 (80..100); first with an endpoint past x = 115 is 5 (100..120)
        assert_eq!(visible_middle_segment(&pts, TacticalLine::PL, Some(&clip)), 5);
    }

    #[test]
    fn clip_falls_back_to_backward_scan() {
        let pts = zigzag(9);
        let clip: ClipRegion = ClipRect::new(-5.0, -5.0, 30.0, 20.0).into();
        assert_eq!(visible_middle_segment(&pts, TacticalLine::PL, Some(&clip)), 1);
    }

    #[test]
    fn nothing_visible_keeps_count_middle() {
        let pts = zigzag(9);
        let clip: ClipRegion = ClipRect::new(1000.0, 1000.0, 10.0, 10.0).into();
        assert_eq!(visible_middle_segment(&pts, TacticalLine::PL, Some(&clip)), 4);
    }

    #[test]
    fn boundary_skips_fold_back() {
        let pts = vec![
            dvec2(0.0, 0.0),
            dvec2(100.0, 0.0),
            dvec2(0.0, 1.0),
            dvec2(0.0, 50.0),
        ];
        let clip: ClipRegion = ClipRect::new(-10.0, -10.0, 200.0, 200.0).into();
        // middle is segment 1, which reverses segment 0
        assert_eq!(visible_middle_segment(&pts, TacticalLine::PL, Some(&clip)), 1);
        assert_eq!(visible_middle_segment(&pts, TacticalLine::BOUNDARY, Some(&clip)), 2);
    }

    #[test]
    fn longest_and_arc_middle() {
        let pts = vec![dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(50.0, 0.0), dvec2(52.0, 0.0)];
        assert_eq!(longest_segment(&pts), 1);
        assert_eq!(arc_middle_segment(&pts), 1);
        assert_eq!(first_segment_at_least(&pts, 2.0), Some(1));
        assert_eq!(first_segment_at_least(&pts, 100.0), None);
    }

    #[test]
    fn quartiles_of_straight_line() {
        let (a, b) = quartile_segment(&[dvec2(0.0, 0.0), dvec2(100.0, 0.0)]).unwrap();
        assert_eq!(a, dvec2(25.0, 0.0));
        assert_eq!(b, dvec2(75.0, 0.0));
    }
}
