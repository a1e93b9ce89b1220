//! Auto-scale pass: shrink or expand an area's label stack to its shape.
//!
//! Heights compare in font-size units: a stack whose topmost line factor is
//! `lf` occupies `|lf| * font.size` pixels above the center.

use crate::config::RendererSettings;
use crate::defaults;
use crate::geometry::distance;
use crate::graphic::{ClientContext, TacticalGraphic, TacticalLine};
use crate::modifier::{Modifier, ModifierContent};
use crate::types::Bounds;

fn scales(line_type: TacticalLine) -> bool {
    use TacticalLine::*;
    if matches!(
        line_type,
        PAA_RECTANGULAR
            | PAA_CIRCULAR
            | RECTANGULAR_TARGET
            | RANGE_FAN
            | RANGE_FAN_SECTOR
            | RADAR_SEARCH
    ) {
        return false;
    }
    line_type.is_closed_polygon() || line_type.is_change1_area()
}

/// Half the room available to the stack, `None` for degenerate shapes
fn available_height(graphic: &TacticalGraphic) -> Option<f64> {
    let pixels = &graphic.pixels;
    let height = if graphic.line_type.is_change1_rectangular() {
        if pixels.len() < 2 {
            return None;
        }
        distance(pixels[0], pixels[1])
    } else {
        Bounds::from_points(pixels)?.height() / 2.0
    };
    (height > 0.0).then_some(height)
}

/// Shrink stacks that overflow their shape and spread out stacks that use
/// less than half of it.
///
/// Shrinking shifts every stacked line down by the overflow and drops lines
/// that still overflow, except the topmost one. When text was dropped a
/// single ellipsis line is appended after the last remaining line.
pub fn scale_modifiers(graphic: &mut TacticalGraphic, settings: &RendererSettings) {
    if !settings.auto_collapse_modifiers || graphic.client != ClientContext::Ge {
        return;
    }
    if !scales(graphic.line_type) {
        return;
    }
    let Some(hmbr) = available_height(graphic) else {
        return;
    };
    let change1 = graphic.line_type.is_change1_area();
    let fs = graphic.font.size;

    // index of the first modifier holding the minimum line factor
    let Some(top) = graphic
        .modifiers
        .iter()
        .enumerate()
        .filter(|(_, m)| m.is_stacked(change1))
        .fold(None, |best: Option<(usize, f64)>, (i, m)| match best {
            Some((_, lf)) if lf <= m.line_factor => best,
            _ => Some((i, m.line_factor)),
        })
    else {
        return;
    };
    let (top_index, min_lf) = top;
    let hm = min_lf.abs() * fs;

    if hm > hmbr {
        shrink(graphic, change1, top_index, (hm - hmbr) / fs, hmbr);
    } else if hm > 0.0 && hm < defaults::EXPAND_THRESHOLD * hmbr {
        let factor =
            (1.0 + (hmbr / hm - 1.0) / defaults::EXPAND_DAMPING).min(defaults::MAX_EXPAND_FACTOR);
        for m in graphic.modifiers.iter_mut().filter(|m| m.is_stacked(change1)) {
            m.line_factor *= factor;
        }
        crate::log::debug!(line_type = ?graphic.line_type, factor, "expanded label stack");
    }
}

fn shrink(graphic: &mut TacticalGraphic, change1: bool, top_index: usize, delta: f64, hmbr: f64) {
    let fs = graphic.font.size;
    let mut dropped: Option<Modifier> = None;
    let mut kept = Vec::with_capacity(graphic.modifiers.len());

    for (i, mut m) in std::mem::take(&mut graphic.modifiers).into_iter().enumerate() {
        if !m.is_stacked(change1) {
            kept.push(m);
            continue;
        }
        m.line_factor += delta;
        if i != top_index && (m.line_factor * fs).abs() >= hmbr {
            if matches!(m.content, ModifierContent::Text(_)) {
                dropped = Some(m);
            }
            continue;
        }
        kept.push(m);
    }

    if let Some(removed) = dropped {
        let last = kept
            .iter()
            .filter(|m| m.is_stacked(change1))
            .map(|m| m.line_factor)
            .reduce(f64::max);
        if let Some(last) = last {
            kept.push(Modifier {
                content: ModifierContent::Text(defaults::ELLIPSIS.to_string()),
                line_factor: last + 1.0,
                tag: None,
                ..removed
            });
        }
    }
    crate::log::debug!(
        line_type = ?graphic.line_type,
        delta,
        kept = kept.len(),
        "shrank label stack"
    );
    graphic.modifiers = kept;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphic::TacticalLine::*;
    use glam::{DVec2, dvec2};

    fn square(size: f64) -> Vec<DVec2> {
        vec![
            dvec2(0.0, 0.0),
            dvec2(size, 0.0),
            dvec2(size, size),
            dvec2(0.0, size),
        ]
    }

    fn graphic(size: f64, factors: &[f64]) -> TacticalGraphic {
        let c = dvec2(size / 2.0, size / 2.0);
        let mut g = TacticalGraphic::new(ROZ, square(size)).with_client(ClientContext::Ge);
        g.modifiers = factors
            .iter()
            .enumerate()
            .filter_map(|(i, lf)| Modifier::area(format!("L{i}"), *lf, c))
            .collect();
        g
    }

    fn on() -> RendererSettings {
        RendererSettings::default().with_auto_collapse(true)
    }

    fn factors(g: &TacticalGraphic) -> Vec<f64> {
        g.modifiers.iter().map(|m| m.line_factor).collect()
    }

    #[test]
    fn shrink_drops_overflow_and_appends_one_ellipsis() {
        // hmbr = 30, hm = 3 * 12 = 36
        let mut g = graphic(60.0, &[-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0]);
        scale_modifiers(&mut g, &on());
        let delta = (36.0 - 30.0) / 12.0;
        let kept: Vec<&str> = g.modifiers.iter().filter_map(|m| m.text_str()).collect();
        assert_eq!(kept, vec!["L0", "L1", "L2", "L3", "L4", defaults::ELLIPSIS]);
        assert_eq!(g.modifiers[0].line_factor, -3.0 + delta);
        assert_eq!(g.modifiers.last().unwrap().line_factor, 1.0 + delta + 1.0);
        let ellipses = kept.iter().filter(|t| **t == defaults::ELLIPSIS).count();
        assert_eq!(ellipses, 1);
    }

    #[test]
    fn topmost_line_is_immune() {
        // hmbr = 24, both tied lines land exactly on the edge
        let mut g = graphic(48.0, &[-4.0, -4.0, 0.0]);
        scale_modifiers(&mut g, &on());
        let kept: Vec<&str> = g.modifiers.iter().filter_map(|m| m.text_str()).collect();
        assert_eq!(kept, vec!["L0", defaults::ELLIPSIS]);
        assert_eq!(factors(&g), vec![-2.0, -1.0]);
    }

    #[test]
    fn small_stack_expands() {
        // hmbr = 30, hm = 12
        let mut g = graphic(60.0, &[-1.0, 0.0, 1.0]);
        scale_modifiers(&mut g, &on());
        assert_eq!(factors(&g), vec![-1.375, 0.0, 1.375]);
    }

    #[test]
    fn expansion_is_capped() {
        let mut g = graphic(2000.0, &[-1.0, 1.0]);
        scale_modifiers(&mut g, &on());
        assert_eq!(factors(&g), vec![-2.0, 2.0]);
    }

    #[test]
    fn only_ge_with_auto_collapse() {
        let mut g = graphic(200.0, &[-1.0, 0.0, 1.0]);
        scale_modifiers(&mut g, &RendererSettings::default());
        assert_eq!(factors(&g), vec![-1.0, 0.0, 1.0]);

        g.client = ClientContext::Cpof2d;
        scale_modifiers(&mut g, &on());
        assert_eq!(factors(&g), vec![-1.0, 0.0, 1.0]);
    }

    #[test]
    fn excluded_types_are_left_alone() {
        let mut g = graphic(200.0, &[-1.0, 0.0, 1.0]);
        g.line_type = PAA_RECTANGULAR;
        scale_modifiers(&mut g, &on());
        assert_eq!(factors(&g), vec![-1.0, 0.0, 1.0]);
    }

    #[test]
    fn change1_rectangles_measure_first_edge() {
        let pts = vec![
            dvec2(0.0, 0.0),
            dvec2(0.0, 100.0),
            dvec2(300.0, 100.0),
            dvec2(300.0, 0.0),
        ];
        let mut g = TacticalGraphic::new(FFA_RECTANGULAR, pts).with_client(ClientContext::Ge);
        let (a, b) = (dvec2(0.0, 50.0), dvec2(300.0, 50.0));
        g.modifiers = vec![
            Modifier::text("FFA", crate::modifier::Placement::AboveMiddle, -1.0, a, b).unwrap(),
            Modifier::text("X", crate::modifier::Placement::AboveMiddle, 1.0, a, b).unwrap(),
        ];
        scale_modifiers(&mut g, &on());
        // hmbr = 100, hm = 12: capped
        assert_eq!(factors(&g), vec![-2.0, 2.0]);
    }
}
