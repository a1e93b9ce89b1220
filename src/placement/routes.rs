//! Routes, convoys, axes of advance and directions of attack.

use super::segments::{first_segment_at_least, longest_segment, middle_segment};
use super::text::{StackLine, build_stack, dtg_range, join_non_empty, split_if_wider};
use super::{Rule, RuleContext};
use crate::defaults;
use crate::errors::ModifierError;
use crate::geometry::{direction, distance, midpoint};
use crate::graphic::TacticalLine;
use crate::modifier::{Modifier, ModifierTag, Placement};

pub(super) static SUPPLY_ROUTE: Rule = Rule::pixel("supply_route", supply_route);
pub(super) static CONVOY_RULE: Rule = Rule::pixel("convoy", convoy);
pub(super) static AXIS: Rule = Rule::pixel("axis", axis);
pub(super) static DIRECT_ATTACK: Rule = Rule::pixel("direct_attack", direct_attack);

fn has_arrow(line_type: TacticalLine) -> bool {
    use TacticalLine::*;
    matches!(
        line_type,
        MSR_ONEWAY
            | MSR_TWOWAY
            | MSR_ALT
            | ASR_ONEWAY
            | ASR_TWOWAY
            | ASR_ALT
            | TRAFFIC_ROUTE_ONEWAY
            | TRAFFIC_ROUTE_ALT
    )
}

/// Route name on the first segment long enough to hold it, else the middle
/// segment. Routes with a direction arrow at the segment midpoint keep the
/// label between the segment start and the arrow, or lift it clear of the
/// arrow when that stretch is too short. Label and name split onto two lines
/// when the chosen stretch is shorter than both together.
fn supply_route(ctx: &mut RuleContext<'_>) -> Result<(), ModifierError> {
    let pts = ctx.pixels(2)?;
    let label = ctx.label();
    let name = ctx.graphic.attributes.name.clone();
    let width = ctx.width(&join_non_empty(&[label, &name], " "));
    let i = first_segment_at_least(&pts, width * defaults::LABEL_WIDTH_SLACK)
        .unwrap_or_else(|| middle_segment(pts.len()));
    let (a, b) = (pts[i], pts[i + 1]);
    let cs = ctx.cs();

    let ((a, b), lf) = if has_arrow(ctx.graphic.line_type) {
        let arrow_tail = midpoint(a, b) - direction(a, b) * ctx.settings.arrow_size();
        if distance(a, arrow_tail) >= width {
            ((a, arrow_tail), defaults::ABOVE_LINE * cs)
        } else {
            ((a, b), -1.5 * cs)
        }
    } else {
        ((a, b), defaults::ABOVE_LINE * cs)
    };
    let lines = split_if_wider(label, &name, " ", lf, cs, distance(a, b), |t| ctx.width(t));
    for (text, lf) in lines {
        ctx.push(Modifier::text(text, Placement::AboveMiddle, lf, a, b));
    }
    Ok(())
}

/// Name above and DTG below the first segment wide enough for them, else the
/// first segment. A "from - to" time that does not fit splits onto two lines.
fn convoy(ctx: &mut RuleContext<'_>) -> Result<(), ModifierError> {
    let pts = ctx.pixels(2)?;
    let attrs = &ctx.graphic.attributes;
    let name = attrs.name.clone();
    let (dtg, dtg1) = (attrs.dtg.clone(), attrs.dtg1.clone());
    let width = ctx.width(&name).max(ctx.width(&dtg_range(&dtg, &dtg1)));
    let i = first_segment_at_least(&pts, width).unwrap_or(0);
    let (a, b) = (pts[i], pts[i + 1]);
    let cs = ctx.cs();

    ctx.push(Modifier::text(name, Placement::AboveMiddle, -cs, a, b));
    let times = split_if_wider(&dtg, &dtg1, " - ", cs, cs, distance(a, b), |t| ctx.width(t));
    let tags: &[ModifierTag] = if times.len() == 2 {
        &[ModifierTag::W, ModifierTag::W1]
    } else {
        &[ModifierTag::WW1]
    };
    for ((text, lf), tag) in times.into_iter().zip(tags) {
        ctx.push(
            Modifier::text(text, Placement::AboveMiddle, lf, a, b).map(|m| m.with_tag(*tag)),
        );
    }
    Ok(())
}

/// Label stack along the spine of the arrow body.
///
/// The generator emits the body outline so that the first and last points
/// sit across from each other at the tail, and the second and second-to-last
/// one step further in.
fn axis(ctx: &mut RuleContext<'_>) -> Result<(), ModifierError> {
    let pts = ctx.pixels(4)?;
    let n = pts.len();
    let a = midpoint(pts[0], pts[n - 1]);
    let b = midpoint(pts[1], pts[n - 2]);
    let attrs = &ctx.graphic.attributes;
    let lines = vec![
        StackLine::plain(join_non_empty(&[ctx.label(), &attrs.name], " ")),
        StackLine::tagged(dtg_range(&attrs.dtg, &attrs.dtg1), ModifierTag::WW1),
    ];
    let stack = build_stack(lines, ctx.cs(), |text, lf| {
        Modifier::text(text, Placement::AboveMiddle, lf, a, b)
    });
    ctx.extend(stack);
    Ok(())
}

/// Name above the longest segment
fn direct_attack(ctx: &mut RuleContext<'_>) -> Result<(), ModifierError> {
    let pts = ctx.pixels(2)?;
    let i = longest_segment(&pts);
    let name = ctx.graphic.attributes.name.clone();
    let lf = defaults::ABOVE_LINE * ctx.cs();
    ctx.push(Modifier::text(name, Placement::AboveMiddle, lf, pts[i], pts[i + 1]));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::capabilities::{Capabilities, ProportionalMetrics, SphericalGeodesic};
    use crate::config::RendererSettings;
    use crate::graphic::{Attributes, TacticalGraphic, TacticalLine::*};
    use crate::modifier::{ModifierTag, Placement};
    use crate::placement::place_modifiers;
    use glam::dvec2;

    fn place(g: &mut TacticalGraphic) {
        let caps = Capabilities::new(&ProportionalMetrics, &SphericalGeodesic);
        place_modifiers(g, caps, &RendererSettings::default());
    }

    fn texts(g: &TacticalGraphic) -> Vec<&str> {
        g.modifiers.iter().filter_map(|m| m.text_str()).collect()
    }

    #[test]
    fn route_skips_short_segments() {
        let pts = vec![
            dvec2(0.0, 0.0),
            dvec2(10.0, 0.0),
            dvec2(300.0, 0.0),
            dvec2(310.0, 0.0),
        ];
        let mut g = TacticalGraphic::new(MSR, pts).with_name("TAMPA");
        place(&mut g);
        assert_eq!(g.modifiers.len(), 1);
        assert_eq!(g.modifiers[0].text_str(), Some("MSR TAMPA"));
        assert_eq!(g.modifiers[0].text_path, [dvec2(10.0, 0.0), dvec2(300.0, 0.0)]);
    }

    #[test]
    fn one_way_route_stops_before_arrow() {
        let pts = vec![dvec2(0.0, 0.0), dvec2(400.0, 0.0)];
        let mut g = TacticalGraphic::new(MSR_ONEWAY, pts).with_name("A");
        place(&mut g);
        // arrow is 20 px long at 96 dpi, centered on x = 200
        assert_eq!(g.modifiers[0].text_path, [dvec2(0.0, 0.0), dvec2(180.0, 0.0)]);
        assert_eq!(g.modifiers[0].line_factor, -0.7);
    }

    #[test]
    fn short_one_way_route_lifts_label() {
        let pts = vec![dvec2(0.0, 0.0), dvec2(60.0, 0.0)];
        let mut g = TacticalGraphic::new(ASR_ONEWAY, pts).with_name("LONGROUTENAME");
        place(&mut g);
        // lifted clear of the arrow, then split because 60 px cannot hold both
        assert_eq!(texts(&g), vec!["ASR", "LONGROUTENAME"]);
        assert_eq!(g.modifiers[0].line_factor, -2.5);
        assert_eq!(g.modifiers[1].line_factor, -1.5);
    }

    #[test]
    fn route_without_room_splits_label_and_name() {
        let pts = vec![dvec2(0.0, 0.0), dvec2(40.0, 0.0), dvec2(80.0, 0.0)];
        let mut g = TacticalGraphic::new(MSR, pts).with_name("TAMPA");
        place(&mut g);
        assert_eq!(texts(&g), vec!["MSR", "TAMPA"]);
        assert_eq!(g.modifiers[0].line_factor, -1.7);
        assert_eq!(g.modifiers[1].line_factor, -0.7);
        // no segment is long enough: the middle one
        assert_eq!(g.modifiers[0].text_path, [dvec2(40.0, 0.0), dvec2(80.0, 0.0)]);
    }

    #[test]
    fn convoy_moves_to_a_segment_that_fits() {
        let attrs = Attributes {
            name: "C1".into(),
            dtg: "0600Z".into(),
            ..Default::default()
        };
        let pts = vec![dvec2(0.0, 0.0), dvec2(20.0, 0.0), dvec2(300.0, 0.0)];
        let mut g = TacticalGraphic::new(HCONVOY, pts).with_attributes(attrs);
        place(&mut g);
        let on_second = [dvec2(20.0, 0.0), dvec2(300.0, 0.0)];
        assert_eq!(g.modifiers.len(), 2);
        assert!(g.modifiers.iter().all(|m| m.text_path == on_second));
    }

    #[test]
    fn convoy_time_range_splits_into_from_and_to() {
        let attrs = Attributes {
            name: "C1".into(),
            dtg: "010600ZJAN".into(),
            dtg1: "020600ZJAN".into(),
            ..Default::default()
        };
        let mut g = TacticalGraphic::new(CONVOY, vec![dvec2(0.0, 0.0), dvec2(100.0, 0.0)])
            .with_attributes(attrs);
        place(&mut g);
        assert_eq!(texts(&g), vec!["C1", "010600ZJAN", "020600ZJAN"]);
        let factors: Vec<f64> = g.modifiers.iter().map(|m| m.line_factor).collect();
        assert_eq!(factors, vec![-1.0, 1.0, 2.0]);
        assert_eq!(g.modifiers[1].tag, Some(ModifierTag::W));
        assert_eq!(g.modifiers[2].tag, Some(ModifierTag::W1));
    }

    #[test]
    fn convoy_name_and_time() {
        let attrs = Attributes {
            name: "C1".into(),
            dtg: "0600Z".into(),
            ..Default::default()
        };
        let mut g = TacticalGraphic::new(CONVOY, vec![dvec2(0.0, 0.0), dvec2(100.0, 0.0)])
            .with_attributes(attrs);
        place(&mut g);
        assert_eq!(g.modifiers.len(), 2);
        assert_eq!(g.modifiers[0].line_factor, -1.0);
        assert_eq!(g.modifiers[1].line_factor, 1.0);
        assert_eq!(g.modifiers[1].tag, Some(ModifierTag::WW1));
    }

    #[test]
    fn axis_label_on_spine() {
        let pts = vec![
            dvec2(0.0, -10.0),
            dvec2(100.0, -10.0),
            dvec2(120.0, 0.0),
            dvec2(100.0, 10.0),
            dvec2(0.0, 10.0),
        ];
        let mut g = TacticalGraphic::new(CATK, pts).with_name("2");
        place(&mut g);
        assert_eq!(g.modifiers[0].text_str(), Some("CATK 2"));
        assert_eq!(g.modifiers[0].placement, Placement::AboveMiddle);
        assert_eq!(g.modifiers[0].text_path, [dvec2(0.0, 0.0), dvec2(100.0, 0.0)]);
    }

    #[test]
    fn direct_attack_uses_longest_segment() {
        let pts = vec![dvec2(0.0, 0.0), dvec2(5.0, 0.0), dvec2(5.0, 200.0)];
        let mut g = TacticalGraphic::new(DIRATKGND, pts).with_name("X");
        place(&mut g);
        assert_eq!(g.modifiers[0].text_path, [dvec2(5.0, 0.0), dvec2(5.0, 200.0)]);
    }
}
