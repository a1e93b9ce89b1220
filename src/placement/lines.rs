//! Control lines, bearing lines, linear targets and air corridors.

use glam::DVec2;

use super::segments::{arc_middle_segment, quartile_segment, visible_middle_segment};
use super::text::{StackLine, build_stack, dtg_range, join_non_empty, prefixed, split_if_wider};
use super::{Rule, RuleContext};
use crate::defaults;
use crate::errors::ModifierError;
use crate::geometry::{centered_segment, distance};
use crate::graphic::TacticalLine;
use crate::modifier::{Modifier, ModifierTag, Placement};

pub(super) static BOTH_ENDS: Rule = Rule::geo("both_ends", both_ends);
pub(super) static FIRE_SUPPORT_LINE: Rule = Rule::geo("fire_support_line", fire_support_line);
pub(super) static BEARING_LINE: Rule = Rule::geo("bearing_line", bearing_line);
pub(super) static LINEAR_TARGET: Rule = Rule::geo("linear_target", linear_target);
pub(super) static AIR_CORRIDOR: Rule = Rule::geo("air_corridor", air_corridor);

/// Label + name beyond each end of the line.
///
/// With `two_labels_only` off, paths of four or more points also get the
/// label above their visible middle segment, split onto two lines when the
/// segment is too short. A FLOT or LC with a hostile marker (N) carries it
/// above each end.
fn both_ends(ctx: &mut RuleContext<'_>) -> Result<(), ModifierError> {
    use TacticalLine::*;

    let pts = ctx.pixels(2)?;
    let n = pts.len();
    let line_type = ctx.graphic.line_type;
    let label = ctx.label();
    let name = match line_type {
        FEBA => String::new(),
        _ => ctx.graphic.attributes.name.clone(),
    };
    let hostile = ctx.graphic.attributes.n.clone();
    let text = join_non_empty(&[label, &name], " ");
    let cs = ctx.cs();

    for (a, b) in [(pts[0], pts[1]), (pts[n - 1], pts[n - 2])] {
        ctx.push(Modifier::text(text.clone(), Placement::ToEnd, 0.0, a, b));
        if matches!(line_type, FLOT | LC) {
            ctx.push(Modifier::text(
                hostile.clone(),
                Placement::AboveEnd,
                defaults::ABOVE_LINE * cs,
                a,
                b,
            ));
        }
    }

    if !ctx.settings.two_labels_only && n >= 4 {
        let i = visible_middle_segment(&pts, line_type, ctx.clip);
        let (a, b) = (pts[i], pts[i + 1]);
        let lines = split_if_wider(
            label,
            &name,
            " ",
            defaults::ABOVE_LINE * cs,
            cs,
            distance(a, b),
            |t| ctx.width(t),
        );
        for (text, lf) in lines {
            ctx.push(Modifier::text(text, Placement::AboveMiddle, lf, a, b));
        }
    }
    Ok(())
}

/// Label + name above, DTG below, just inside the start of the line and
/// again just inside its end when the line is long enough to hold a second
/// copy. Label and name split onto two lines when the segment is shorter
/// than both together.
fn fire_support_line(ctx: &mut RuleContext<'_>) -> Result<(), ModifierError> {
    let pts = ctx.pixels(2)?;
    let n = pts.len();
    let attrs = &ctx.graphic.attributes;
    let label = ctx.label();
    let name = attrs.name.clone();
    let bottom = dtg_range(&attrs.dtg, &attrs.dtg1);
    let top = join_non_empty(&[label, &name], " ");
    let width = ctx.width(&top).max(ctx.width(&bottom));
    if width <= 0.0 {
        return Ok(());
    }
    let cs = ctx.cs();

    let mut anchors = vec![(Placement::AboveStartInside, pts[0], pts[1])];
    let repeat = n > 2 || distance(pts[0], pts[1]) > defaults::SECOND_LABEL_SPAN * width;
    if repeat {
        anchors.push((Placement::AboveEndInside, pts[n - 2], pts[n - 1]));
    }

    for (placement, a, b) in anchors {
        let lines = split_if_wider(
            label,
            &name,
            " ",
            defaults::ABOVE_LINE * cs,
            cs,
            distance(a, b),
            |t| ctx.width(t),
        );
        for (text, lf) in lines {
            ctx.push(Modifier::text(text, placement, lf, a, b));
        }
        ctx.push(
            Modifier::text(bottom.clone(), placement, defaults::BELOW_LINE * cs, a, b)
                .map(|m| m.with_tag(ModifierTag::WW1)),
        );
    }
    Ok(())
}

/// Single letter (or name) centered above the bearing, on the segment
/// halfway along the path when it has several
fn bearing_line(ctx: &mut RuleContext<'_>) -> Result<(), ModifierError> {
    let pts = ctx.pixels(2)?;
    let text = join_non_empty(&[ctx.label(), &ctx.graphic.attributes.name], " ");
    let width = ctx.width(&text);
    let i = arc_middle_segment(&pts);
    let (mut a, mut b) = (pts[i], pts[i + 1]);
    if distance(a, b) < width {
        (a, b) = centered_segment(a, b, width * defaults::LABEL_WIDTH_SLACK);
    }
    let lf = defaults::ABOVE_LINE * ctx.cs();
    ctx.push(Modifier::text(text, Placement::AboveMiddle, lf, a, b));
    Ok(())
}

/// Target number above, detail below the visible middle segment; falls back
/// to the quarter points of the path when that segment is too short for the
/// text. The target number is AP, or the name when no number is given.
fn linear_target(ctx: &mut RuleContext<'_>) -> Result<(), ModifierError> {
    let pts = ctx.pixels(2)?;
    let attrs = &ctx.graphic.attributes;
    let number = if attrs.ap.is_empty() {
        attrs.name.clone()
    } else {
        attrs.ap.clone()
    };
    let (above, below) = match ctx.graphic.line_type {
        TacticalLine::FPF => (join_non_empty(&[ctx.label(), &number], " "), attrs.t1.clone()),
        TacticalLine::LINTGTS => (
            number,
            join_non_empty(&[ctx.label(), &dtg_range(&attrs.dtg, &attrs.dtg1)], " "),
        ),
        _ => (number, attrs.t1.clone()),
    };

    let i = visible_middle_segment(&pts, ctx.graphic.line_type, ctx.clip);
    let (mut a, mut b) = (pts[i], pts[i + 1]);
    let width = ctx.width(&above).max(ctx.width(&below));
    if distance(a, b) < width && pts.len() > 2 {
        if let Some(q) = quartile_segment(&pts) {
            (a, b) = q;
        }
    }

    let cs = ctx.cs();
    ctx.push(Modifier::text(above, Placement::AboveMiddle, defaults::ABOVE_LINE * cs, a, b));
    ctx.push(
        Modifier::text(below, Placement::AboveMiddle, defaults::BELOW_LINE * cs, a, b)
            .map(|m| m.with_tag(ModifierTag::T1)),
    );
    Ok(())
}

/// Identification, altitude band and time stacked along the visible middle
/// segment of the corridor centerline. The corridor width reads across the
/// corridor, beside the stack.
fn air_corridor(ctx: &mut RuleContext<'_>) -> Result<(), ModifierError> {
    let pts = ctx.pixels(2)?;
    let attrs = &ctx.graphic.attributes;
    let lines = vec![
        StackLine::plain(join_non_empty(&[ctx.label(), &attrs.name], " ")),
        StackLine::tagged(prefixed("MIN ALT: ", &attrs.h), ModifierTag::H),
        StackLine::tagged(prefixed("MAX ALT: ", &attrs.h1), ModifierTag::H1),
        StackLine::tagged(prefixed("DTG Start: ", &attrs.dtg), ModifierTag::W),
        StackLine::tagged(prefixed("DTG End: ", &attrs.dtg1), ModifierTag::W1),
    ];
    let corridor_width = prefixed("Width: ", &attrs.am);
    let widest = lines
        .iter()
        .map(|l| ctx.width(&l.text))
        .fold(0.0, f64::max);
    let lh = ctx.line_height();

    let i = visible_middle_segment(&pts, ctx.graphic.line_type, ctx.clip);
    let (a, b): (DVec2, DVec2) = (pts[i], pts[i + 1]);
    let stack = build_stack(lines, ctx.cs(), |text, lf| {
        Modifier::text(text, Placement::AboveMiddle, lf, a, b)
    });
    ctx.extend(stack);
    if lh > 0.0 {
        // perpendicular text offsets along the segment
        let lf = (widest / 2.0 + lh) / lh;
        ctx.push(Modifier::text(
            corridor_width,
            Placement::AboveMiddlePerpendicular,
            lf,
            a,
            b,
        ));
    }
    Ok(())
}
