//! Fit/prune pass for CPOF clients.
//!
//! Tagged modifiers whose rendered footprint leaves the containing shape are
//! removed together with every other member of their tag group, so a stack
//! never shows "TIME FROM" without its "TIME TO".

use std::collections::HashSet;

use glam::DVec2;

use crate::capabilities::FontMetrics;
use crate::emit::footprint;
use crate::geometry::polygon_contains;
use crate::graphic::TacticalGraphic;
use crate::modifier::TagGroup;
use crate::types::Bounds;

/// Shape the modifiers of `graphic` must stay inside on this iteration
fn containing_polygon(graphic: &TacticalGraphic, iteration: u32) -> Option<Vec<DVec2>> {
    let line_type = graphic.line_type;
    match iteration {
        1 if line_type.is_change1_rectangular() => {
            Bounds::from_points(&graphic.pixels).map(|b| b.corners().to_vec())
        }
        0 if line_type.is_closed_polygon() && graphic.pixels.len() >= 3 => {
            Some(graphic.pixels.clone())
        }
        _ => None,
    }
}

/// Drop tagged modifiers (and their groups) that do not fit inside the shape.
///
/// Iteration 0 tests closed polygons against their outline, iteration 1 tests
/// change-1 rectangles against their bounding box. Untagged modifiers are
/// never evaluated. Returns how many modifiers were removed.
pub fn remove_modifiers(
    graphic: &mut TacticalGraphic,
    metrics: &dyn FontMetrics,
    iteration: u32,
) -> usize {
    if !graphic.client.is_cpof() {
        return 0;
    }
    let Some(polygon) = containing_polygon(graphic, iteration) else {
        return 0;
    };

    let mut failed: HashSet<TagGroup> = HashSet::new();
    let font = graphic.font.clone();
    for m in graphic.modifiers.iter_mut() {
        let Some(tag) = m.tag else { continue };
        let corners = footprint(m, metrics, &font);
        if corners.iter().any(|c| !polygon_contains(&polygon, *c)) {
            m.fits_mbr = false;
            failed.insert(tag.group());
        }
    }
    if failed.is_empty() {
        return 0;
    }

    let before = graphic.modifiers.len();
    graphic
        .modifiers
        .retain(|m| m.tag.is_none_or(|t| !failed.contains(&t.group())));
    let removed = before - graphic.modifiers.len();
    crate::log::debug!(
        line_type = ?graphic.line_type,
        iteration,
        removed,
        "pruned modifiers outside shape"
    );
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::ProportionalMetrics;
    use crate::graphic::{ClientContext, TacticalLine};
    use crate::modifier::{Modifier, ModifierTag};
    use glam::dvec2;

    fn square(size: f64) -> Vec<DVec2> {
        vec![
            dvec2(0.0, 0.0),
            dvec2(size, 0.0),
            dvec2(size, size),
            dvec2(0.0, size),
        ]
    }

    fn stacked(size: f64, client: ClientContext) -> TacticalGraphic {
        let c = dvec2(size / 2.0, size / 2.0);
        let mut g = TacticalGraphic::new(TacticalLine::ROZ, square(size)).with_client(client);
        g.modifiers = vec![
            Modifier::area("ROZ", -1.0, c).unwrap(),
            Modifier::area("TIME FROM: 200001Z", 0.0, c)
                .unwrap()
                .with_tag(ModifierTag::W),
            Modifier::area("TO", 1.0, c).unwrap().with_tag(ModifierTag::W1),
            Modifier::area("MIN ALT: 10", 2.0, c)
                .unwrap()
                .with_tag(ModifierTag::H),
        ];
        g
    }

    fn texts(g: &TacticalGraphic) -> Vec<&str> {
        g.modifiers.iter().filter_map(|m| m.text_str()).collect()
    }

    #[test]
    fn effective_group_is_removed_together() {
        // wide enough for everything but the long W line
        let mut g = stacked(120.0, ClientContext::Cpof2d);
        assert_eq!(remove_modifiers(&mut g, &ProportionalMetrics, 0), 2);
        assert_eq!(texts(&g), vec!["ROZ", "MIN ALT: 10"]);
    }

    #[test]
    fn untagged_modifiers_survive_a_tiny_shape() {
        let mut g = stacked(4.0, ClientContext::Cpof3d);
        remove_modifiers(&mut g, &ProportionalMetrics, 0);
        assert_eq!(texts(&g), vec!["ROZ"]);
    }

    #[test]
    fn non_cpof_clients_are_untouched() {
        let mut g = stacked(4.0, ClientContext::Ge);
        assert_eq!(remove_modifiers(&mut g, &ProportionalMetrics, 0), 0);
        assert_eq!(g.modifiers.len(), 4);
    }

    #[test]
    fn iteration_selects_the_shape() {
        let mut g = stacked(4.0, ClientContext::Cpof2d);
        remove_modifiers(&mut g, &ProportionalMetrics, 1);
        assert_eq!(g.modifiers.len(), 4);

        let mut rect = stacked(4.0, ClientContext::Cpof2d);
        rect.line_type = TacticalLine::ACA_RECTANGULAR;
        remove_modifiers(&mut rect, &ProportionalMetrics, 0);
        assert_eq!(rect.modifiers.len(), 4);
        remove_modifiers(&mut rect, &ProportionalMetrics, 1);
        assert_eq!(texts(&rect), vec!["ROZ"]);
    }

    #[test]
    fn combined_time_line_is_its_own_group() {
        let c = dvec2(50.0, 50.0);
        let mut g = TacticalGraphic::new(TacticalLine::FFA, square(100.0))
            .with_client(ClientContext::Cpof2d);
        g.modifiers = vec![
            Modifier::area("0800Z - 1000Z 0800Z - 1000Z", 0.0, c)
                .unwrap()
                .with_tag(ModifierTag::WW1),
            Modifier::area("T", 1.0, c).unwrap().with_tag(ModifierTag::W),
        ];
        remove_modifiers(&mut g, &ProportionalMetrics, 0);
        assert_eq!(texts(&g), vec!["T"]);
    }
}
