//! Tactical mission task letters.

use super::text::dtg_range;
use super::{Rule, RuleContext};
use crate::errors::ModifierError;
use crate::graphic::TacticalLine;
use crate::modifier::{Modifier, ModifierTag, Placement};

pub(super) static TASK_LETTER: Rule = Rule::pixel("task_letter", task_letter);
pub(super) static TASK_CENTER: Rule = Rule::pixel("task_center", task_center);
pub(super) static SCREEN_RULE: Rule = Rule::geo("screen", screen);

/// Task letter centered on the first segment; DELAY adds its time below
fn task_letter(ctx: &mut RuleContext<'_>) -> Result<(), ModifierError> {
    let pts = ctx.pixels(2)?;
    let label = ctx.label();
    ctx.push(Modifier::text(label, Placement::AboveMiddle, 0.0, pts[0], pts[1]));

    if ctx.graphic.line_type == TacticalLine::DELAY {
        let attrs = &ctx.graphic.attributes;
        let dtg = dtg_range(&attrs.dtg, &attrs.dtg1);
        let lf = ctx.cs();
        ctx.push(
            Modifier::text(dtg, Placement::AboveMiddle, lf, pts[0], pts[1])
                .map(|m| m.with_tag(ModifierTag::WW1)),
        );
    }
    Ok(())
}

/// Task letter in the middle of the enclosing arc or outline
fn task_center(ctx: &mut RuleContext<'_>) -> Result<(), ModifierError> {
    ctx.pixels(2)?;
    let center = ctx.center()?;
    let label = ctx.label();
    ctx.push(Modifier::area(label, 0.0, center));
    Ok(())
}

/// Screen, cover and guard letters next to both arrow heads.
///
/// The split-arrow layout the generator produces for these has its arrow
/// tips at fixed indices 13 and 26; shorter outlines carry them at 1 and 2.
/// Both letters are offset away from the origin at index 0.
fn screen(ctx: &mut RuleContext<'_>) -> Result<(), ModifierError> {
    let pts = ctx.pixels(3)?;
    let (tip_a, tip_b) = if pts.len() > 26 {
        (pts[13], pts[26])
    } else {
        (pts[1], pts[2])
    };
    let label = ctx.label();
    ctx.push(Modifier::text(label, Placement::Screen, 0.0, tip_a, pts[0]));
    ctx.push(Modifier::text(label, Placement::Screen, 0.0, tip_b, pts[0]));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::capabilities::{Capabilities, ProportionalMetrics, SphericalGeodesic};
    use crate::config::RendererSettings;
    use crate::graphic::{Attributes, TacticalGraphic, TacticalLine::*};
    use crate::modifier::Placement;
    use crate::placement::{place_modifiers, place_modifiers_geo};
    use glam::{DVec2, dvec2};

    fn caps() -> Capabilities<'static> {
        Capabilities::new(&ProportionalMetrics, &SphericalGeodesic)
    }

    #[test]
    fn delay_adds_time() {
        let attrs = Attributes {
            dtg: "1200Z".into(),
            ..Default::default()
        };
        let mut g = TacticalGraphic::new(DELAY, vec![dvec2(0.0, 0.0), dvec2(80.0, 0.0)])
            .with_attributes(attrs);
        place_modifiers(&mut g, caps(), &RendererSettings::default());
        let texts: Vec<_> = g.modifiers.iter().filter_map(|m| m.text_str()).collect();
        assert_eq!(texts, vec!["D", "1200Z"]);
    }

    #[test]
    fn seize_letter_in_center() {
        let pts = vec![
            dvec2(0.0, 0.0),
            dvec2(40.0, 0.0),
            dvec2(40.0, 40.0),
            dvec2(0.0, 40.0),
        ];
        let mut g = TacticalGraphic::new(SEIZE, pts);
        place_modifiers(&mut g, caps(), &RendererSettings::default());
        assert_eq!(g.modifiers.len(), 1);
        assert_eq!(g.modifiers[0].placement, Placement::Area);
        assert_eq!(g.modifiers[0].text_path[0], dvec2(20.0, 20.0));
    }

    #[test]
    fn screen_uses_split_arrow_tips() {
        let pts: Vec<DVec2> = (0..30).map(|i| dvec2(i as f64, 0.0)).collect();
        let mut g = TacticalGraphic::new(SCREEN, pts);
        place_modifiers_geo(&mut g, None, None, caps(), &RendererSettings::default());
        assert_eq!(g.modifiers.len(), 2);
        assert_eq!(g.modifiers[0].text_path[0], dvec2(13.0, 0.0));
        assert_eq!(g.modifiers[1].text_path[0], dvec2(26.0, 0.0));
        assert!(g.modifiers.iter().all(|m| m.placement == Placement::Screen));

        let tips = vec![dvec2(0.0, 0.0), dvec2(-20.0, -20.0), dvec2(20.0, -20.0)];
        let mut short = TacticalGraphic::new(GUARD, tips);
        place_modifiers_geo(&mut short, None, None, caps(), &RendererSettings::default());
        assert_eq!(short.modifiers[0].text_str(), Some("G"));
        assert_eq!(short.modifiers[1].text_path, [dvec2(20.0, -20.0), dvec2(0.0, 0.0)]);
    }
}
