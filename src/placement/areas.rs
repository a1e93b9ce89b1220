//! Closed areas, airspace coordination areas, fire support areas and their
//! rectangular/circular variants.

use super::text::{StackLine, build_stack, dtg_range, join_non_empty, prefixed};
use super::{Rule, RuleContext};
use crate::defaults;
use crate::errors::ModifierError;
use crate::graphic::TacticalLine;
use crate::modifier::{Modifier, ModifierTag, Placement};
use crate::types::Bounds;

pub(super) static LABELED_AREA: Rule = Rule::geo("labeled_area", labeled_area);
pub(super) static AIRSPACE_AREA: Rule = Rule::geo("airspace_area", airspace_area);
pub(super) static FIRE_AREA: Rule = Rule::geo("fire_area", fire_area);
pub(super) static KILL_BOX: Rule = Rule::geo("kill_box", kill_box);
pub(super) static NAMED_SHAPE: Rule = Rule::geo("named_shape", named_shape);
pub(super) static RECTANGULAR_TARGET_RULE: Rule =
    Rule::geo("rectangular_target", rectangular_target);

fn altitude_lines(h: &str, h1: &str) -> [StackLine; 2] {
    [
        StackLine::tagged(prefixed("MIN ALT: ", h), ModifierTag::H),
        StackLine::tagged(prefixed("MAX ALT: ", h1), ModifierTag::H1),
    ]
}

fn time_lines(dtg: &str, dtg1: &str) -> [StackLine; 2] {
    [
        StackLine::tagged(prefixed("TIME FROM: ", dtg), ModifierTag::W),
        StackLine::tagged(prefixed("TIME TO: ", dtg1), ModifierTag::W1),
    ]
}

/// Stack `lines` on the shape.
///
/// Change-1 rectangles run the stack parallel to their second edge through
/// the center; everything else stacks horizontally on the center.
fn place_stack(ctx: &mut RuleContext<'_>, lines: Vec<StackLine>) -> Result<(), ModifierError> {
    ctx.pixels(1)?;
    let center = ctx.center()?;
    let cs = ctx.cs();

    let stack = if ctx.graphic.line_type.is_change1_rectangular() {
        let pts = ctx.pixels(3)?;
        let half = (pts[2] - pts[1]) / 2.0;
        let (a, b) = (center - half, center + half);
        build_stack(lines, cs, |text, lf| {
            Modifier::text(text, Placement::AboveMiddle, lf, a, b)
        })
    } else {
        build_stack(lines, cs, |text, lf| Modifier::area(text, lf, center))
    };

    if let (Some(symbol), Some(top)) = (
        ctx.graphic.attributes.symbol.clone(),
        stack.iter().map(|m| m.line_factor).reduce(f64::min),
    ) {
        // bottom edge of the symbol touches the top of the first text line
        if symbol.height > 0.0 {
            let lh = ctx.line_height();
            let lf = (top * lh - lh / 2.0) / symbol.height - 0.5;
            ctx.push(Some(Modifier::image(symbol, lf, center)));
        }
    }
    ctx.extend(stack);
    Ok(())
}

/// Maneuver and support areas: label and name, T1, then the effective time
fn labeled_area(ctx: &mut RuleContext<'_>) -> Result<(), ModifierError> {
    use TacticalLine::*;

    let attrs = &ctx.graphic.attributes;
    let title = match ctx.graphic.line_type {
        NAI | TAI => join_non_empty(&[ctx.label(), &attrs.name], " - "),
        PNO => join_non_empty(&[&attrs.name, ctx.label()], " "),
        _ => join_non_empty(&[ctx.label(), &attrs.name], " "),
    };
    let lines = vec![
        StackLine::plain(title),
        StackLine::tagged(attrs.t1.clone(), ModifierTag::T1),
        StackLine::tagged(dtg_range(&attrs.dtg, &attrs.dtg1), ModifierTag::WW1),
    ];
    place_stack(ctx, lines)
}

/// Airspace coordination areas: altitude band, grids and effective times
fn airspace_area(ctx: &mut RuleContext<'_>) -> Result<(), ModifierError> {
    let attrs = &ctx.graphic.attributes;
    let mut lines = vec![StackLine::plain(ctx.label()), StackLine::plain(attrs.name.clone())];
    lines.extend(altitude_lines(&attrs.h, &attrs.h1));
    lines.push(StackLine::tagged(prefixed("Grids: ", &attrs.h2), ModifierTag::H2));
    lines.extend(time_lines(&attrs.dtg, &attrs.dtg1));
    place_stack(ctx, lines)
}

/// Fire support areas; ACA carries an altitude band and split times, the
/// rest a single "from - to" time line
fn fire_area(ctx: &mut RuleContext<'_>) -> Result<(), ModifierError> {
    use TacticalLine::*;

    let attrs = &ctx.graphic.attributes;
    let mut lines = vec![StackLine::plain(ctx.label()), StackLine::plain(attrs.name.clone())];
    if matches!(ctx.graphic.line_type, ACA | ACA_RECTANGULAR | ACA_CIRCULAR) {
        lines.extend(altitude_lines(&attrs.h, &attrs.h1));
        lines.push(StackLine::tagged(prefixed("Grids: ", &attrs.h2), ModifierTag::H2));
        lines.extend(time_lines(&attrs.dtg, &attrs.dtg1));
    } else {
        lines.push(StackLine::tagged(
            dtg_range(&attrs.dtg, &attrs.dtg1),
            ModifierTag::WW1,
        ));
    }
    place_stack(ctx, lines)
}

fn kill_box(ctx: &mut RuleContext<'_>) -> Result<(), ModifierError> {
    let attrs = &ctx.graphic.attributes;
    let mut lines = vec![StackLine::plain(join_non_empty(&[ctx.label(), &attrs.name], " "))];
    lines.extend(altitude_lines(&attrs.h, &attrs.h1));
    lines.extend(time_lines(&attrs.dtg, &attrs.dtg1));
    place_stack(ctx, lines)
}

/// Plain rectangles, circles, bomb areas, launch areas and PBS shapes:
/// name, equipment type (V), location, then the effective time
fn named_shape(ctx: &mut RuleContext<'_>) -> Result<(), ModifierError> {
    let attrs = &ctx.graphic.attributes;
    let lines = vec![
        StackLine::plain(join_non_empty(&[ctx.label(), &attrs.name], " ")),
        StackLine::plain(attrs.v.clone()),
        StackLine::plain(attrs.location.clone()),
        StackLine::tagged(dtg_range(&attrs.dtg, &attrs.dtg1), ModifierTag::WW1),
    ];
    place_stack(ctx, lines)
}

/// Target number (AP, or the name without one) above the top edge of the
/// rectangle
fn rectangular_target(ctx: &mut RuleContext<'_>) -> Result<(), ModifierError> {
    let pts = ctx.pixels(2)?;
    let bounds = Bounds::from_points(&pts).ok_or(ModifierError::DegenerateGeometry {
        what: "rectangular target has no extent",
    })?;
    let [top_left, top_right, ..] = bounds.corners();
    let attrs = &ctx.graphic.attributes;
    let number = if attrs.ap.is_empty() {
        attrs.name.clone()
    } else {
        attrs.ap.clone()
    };
    let lf = defaults::ABOVE_LINE * ctx.cs();
    ctx.push(Modifier::text(number, Placement::AboveMiddle, lf, top_left, top_right));
    Ok(())
}
