//! Boundary and electronic warfare line labels.
//!
//! Echelon marks sit on the line itself, the unit designation (T) on one side
//! and T1 on the other. The side is chosen per segment from its heading so
//! that T always stays left of travel.

use glam::DVec2;

use super::segments::visible_middle_segment;
use super::text::{join_non_empty, ordered_pair, with_country};
use super::{Rule, RuleContext};
use crate::clip::ClipArea;
use crate::defaults;
use crate::errors::ModifierError;
use crate::geometry::{distance, turn_back_angle};
use crate::graphic::TacticalLine;
use crate::modifier::{Modifier, ModifierTag, Placement};

pub(super) static BOUNDARY_RULE: Rule = Rule::geo("boundary", add_boundary_modifiers);

/// Nudge near-vertical segments so stacked text never renders exactly vertical.
///
/// Walking the path, any vertex within one pixel horizontally of its
/// predecessor is pushed [`defaults::BOUNDARY_NUDGE`] to the right on even
/// vertices and to the left on odd ones.
pub fn shift_modifier_path(pixels: &mut [DVec2]) {
    for i in 1..pixels.len() {
        let prev = pixels[i - 1].x;
        if (pixels[i].x - prev).abs() < defaults::BOUNDARY_NUDGE {
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            pixels[i].x = prev + sign * defaults::BOUNDARY_NUDGE;
        }
    }
}

/// Horizontal direction of a segment. [`shift_modifier_path`] runs first, so
/// no labeled segment is vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    LeftToRight,
    RightToLeft,
}

impl Heading {
    fn of(a: DVec2, b: DVec2) -> Self {
        if b.x < a.x {
            Heading::RightToLeft
        } else {
            Heading::LeftToRight
        }
    }

    /// Signs of the T and T1 line factors
    fn sides(self) -> (f64, f64) {
        match self {
            Heading::LeftToRight => (-1.0, 1.0),
            Heading::RightToLeft => (1.0, -1.0),
        }
    }
}

/// Place the designation, echelon and T1 on every visible segment long
/// enough to carry them, or on the visible middle segment when none is.
///
/// The pixel path is nudged first with [`shift_modifier_path`]; the caller's
/// pixel guard undoes that when placement returns.
pub(crate) fn add_boundary_modifiers(ctx: &mut RuleContext<'_>) -> Result<(), ModifierError> {
    ctx.pixels(2)?;
    shift_modifier_path(&mut ctx.graphic.pixels);
    let pts = ctx.graphic.pixels.clone();

    let attrs = &ctx.graphic.attributes;
    let bare_name = join_non_empty(&[ctx.label(), &attrs.name], " ");
    let name = with_country(&bare_name, &attrs.country);
    let echelon = attrs.echelon.clone();
    let t1 = attrs.t1.clone();
    let country = attrs.country.clone();

    let width = ctx
        .width(&name)
        .max(ctx.width(&echelon))
        .max(ctx.width(&t1));
    if width <= 0.0 {
        return Ok(());
    }
    let needed = width * defaults::LABEL_WIDTH_SLACK;

    let visible = |i: usize| {
        let (a, b) = (pts[i], pts[i + 1]);
        let inside = ctx.clip.is_none_or(|c| c.contains(a) || c.contains(b));
        let folded = ctx.graphic.line_type == TacticalLine::BOUNDARY
            && i > 0
            && turn_back_angle(pts[i - 1], a, b) < defaults::FOLD_BACK_ANGLE;
        inside && !folded && distance(a, b) >= needed
    };
    let mut chosen: Vec<usize> = (0..pts.len() - 1).filter(|&i| visible(i)).collect();
    if chosen.is_empty() {
        chosen.push(visible_middle_segment(&pts, ctx.graphic.line_type, ctx.clip));
    }

    let cs = ctx.cs();
    let name_fits = ctx.width(&name) <= distance(pts[chosen[0]], pts[chosen[0] + 1]);
    for i in chosen {
        let (a, b) = (pts[i], pts[i + 1]);
        let (t_sign, t1_sign) = Heading::of(a, b).sides();
        let t_lf = t_sign * defaults::BELOW_LINE * cs;
        let t1_lf = t1_sign * defaults::BELOW_LINE * cs;

        if name_fits || country.is_empty() {
            ctx.push(
                Modifier::text(name.clone(), Placement::AboveMiddle, t_lf, a, b)
                    .map(Modifier::integral),
            );
        } else {
            // name and country on two lines, stacked away from the line
            let (name_lf, country_lf) = ordered_pair(t_lf, t_lf + t_sign * cs);
            ctx.push(
                Modifier::text(bare_name.clone(), Placement::AboveMiddle, name_lf, a, b)
                    .map(Modifier::integral),
            );
            ctx.push(
                Modifier::text(format!("({country})"), Placement::AboveMiddle, country_lf, a, b)
                    .map(Modifier::integral),
            );
        }
        ctx.push(
            Modifier::text(echelon.clone(), Placement::AboveMiddle, 0.0, a, b)
                .map(Modifier::integral),
        );
        ctx.push(
            Modifier::text(t1.clone(), Placement::AboveMiddle, t1_lf, a, b)
                .map(|m| m.integral().with_tag(ModifierTag::T1)),
        );
    }
    Ok(())
}
