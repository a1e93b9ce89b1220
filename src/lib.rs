//! Text modifier placement for MIL-STD-2525 / APP-6 tactical graphics.
//!
//! A shape generator produces the pixel outline of a tactical graphic; this
//! crate decides where its labels go. Work happens in passes over one
//! [`TacticalGraphic`]:
//!
//! 1. [`place_modifiers`] and [`place_modifiers_geo`] attach modifiers using
//!    the placement rule registered for the graphic's line type.
//! 2. [`remove_modifiers`] prunes tagged labels that leave their shape (CPOF
//!    clients only).
//! 3. [`scale_modifiers`] shrinks or expands an area's label stack (GE client
//!    with auto-collapse on).
//! 4. [`emit`] turns the survivors into positioned text/image primitives and
//!    optional background quads.
//!
//! [`process`] runs all of them in order.

pub mod capabilities;
pub mod catalog;
pub mod clip;
pub mod config;
pub mod defaults;
pub mod emit;
pub mod errors;
pub mod fit;
pub mod geometry;
pub mod graphic;
mod log;
pub mod modifier;
pub mod placement;
pub mod scale;
pub mod types;

pub use capabilities::{
    Capabilities, FontMetrics, Geodesic, PointConverter, ProportionalMetrics, SphericalGeodesic,
    ViewportConverter,
};
pub use catalog::label_for;
pub use clip::{ClipArea, ClipPolygon, ClipRect, ClipRegion};
pub use config::RendererSettings;
pub use emit::{Emission, Primitive, PrimitiveContent, Quad, display_modifiers, emit, text_background};
pub use errors::{ModifierError, SettingsError};
pub use fit::remove_modifiers;
pub use graphic::{
    Attributes, ClientContext, Font, SymbolVersion, TacticalGraphic, TacticalLine,
};
pub use modifier::{ImageRef, Modifier, ModifierContent, ModifierTag, Placement, TagGroup};
pub use placement::{place_modifiers, place_modifiers_geo};
pub use scale::scale_modifiers;
pub use types::{Bounds, Color, GeoPoint, Justify};

/// Run every pass on `graphic` and return what to draw.
///
/// The graphic keeps the final modifier list, so callers can inspect or
/// re-emit it later.
pub fn process(
    graphic: &mut TacticalGraphic,
    clip: Option<&ClipRegion>,
    converter: Option<&dyn PointConverter>,
    caps: Capabilities<'_>,
    settings: &RendererSettings,
) -> Emission {
    graphic.modifiers.clear();
    place_modifiers(graphic, caps, settings);
    place_modifiers_geo(graphic, clip, converter, caps, settings);
    remove_modifiers(graphic, caps.metrics, 0);
    remove_modifiers(graphic, caps.metrics, 1);
    scale_modifiers(graphic, settings);
    emit(graphic, caps.metrics, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn caps() -> Capabilities<'static> {
        Capabilities::new(&ProportionalMetrics, &SphericalGeodesic)
    }

    #[test]
    fn phase_line_end_to_end() {
        let pts = vec![dvec2(0.0, 100.0), dvec2(200.0, 100.0), dvec2(400.0, 120.0)];
        let mut g = TacticalGraphic::new(TacticalLine::PL, pts).with_name("BLUE");
        let out = process(&mut g, None, None, caps(), &RendererSettings::default());
        assert_eq!(out.primitives.len(), 2);
        assert!(out.backgrounds.is_empty());
        assert!(out.primitives.iter().all(|p| p.is_text()));
        assert_eq!(out.primitives[0].justify, Justify::Right);
        assert_eq!(out.primitives[1].justify, Justify::Left);
    }

    #[test]
    fn process_replaces_previous_modifiers() {
        let pts = vec![
            dvec2(0.0, 0.0),
            dvec2(300.0, 0.0),
            dvec2(300.0, 300.0),
            dvec2(0.0, 300.0),
        ];
        let mut g = TacticalGraphic::new(TacticalLine::NAI, pts).with_name("7");
        let settings = RendererSettings::default();
        process(&mut g, None, None, caps(), &settings);
        let out = process(&mut g, None, None, caps(), &settings);
        assert_eq!(g.modifiers.len(), 1);
        assert_eq!(out.primitives[0].content, PrimitiveContent::Text("NAI - 7".into()));
        assert_eq!(out.primitives[0].position, dvec2(150.0, 150.0));
    }
}
