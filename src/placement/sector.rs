//! Range fans, sector range fans and radar search areas.
//!
//! These labels are computed in geographic space from the first coordinate
//! of the graphic and projected back to pixels, so a converter and the
//! graphic's coordinates are both required.

use glam::DVec2;

use super::text::{join_non_empty, prefixed};
use super::{Rule, RuleContext};
use crate::capabilities::PointConverter;
use crate::defaults;
use crate::errors::ModifierError;
use crate::graphic::TacticalLine;
use crate::modifier::Modifier;
use crate::types::GeoPoint;

pub(super) static SECTOR: Rule = Rule::geo("sector", add_sector_modifiers);

/// A numeric field entry that keeps its original spelling for display
#[derive(Debug, Clone, PartialEq)]
struct Token {
    text: String,
    value: f64,
}

fn parse_list(field: &'static str, raw: &str) -> Result<Vec<Token>, ModifierError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let value: f64 = s.parse().map_err(|_| ModifierError::InvalidNumber {
                field,
                value: s.to_string(),
            })?;
            if !value.is_finite() {
                return Err(ModifierError::NonFinite { what: field });
            }
            Ok(Token {
                text: s.to_string(),
                value,
            })
        })
        .collect()
}

/// Per-ring altitude labels: "ALT x", or "ALT x - x1" when a ceiling is given
fn altitude_labels(x: &str, x1: &str) -> Vec<String> {
    let ceilings: Vec<&str> = x1.split(',').map(str::trim).collect();
    x.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(k, floor)| {
            let band = join_non_empty(&[floor, ceilings.get(k).copied().unwrap_or("")], " - ");
            prefixed("ALT ", &band)
        })
        .collect()
}

/// Ring, range and azimuth labels for range fans and radar search areas
pub(crate) fn add_sector_modifiers(ctx: &mut RuleContext<'_>) -> Result<(), ModifierError> {
    let converter = ctx.converter()?;
    let origin = *ctx
        .graphic
        .lat_longs
        .first()
        .ok_or(ModifierError::MissingLatLongs)?;

    match ctx.graphic.line_type {
        TacticalLine::RADAR_SEARCH => radar_search(ctx, converter, origin),
        TacticalLine::RANGE_FAN => range_fan(ctx, converter, origin),
        _ => range_fan_sector(ctx, converter, origin),
    }
}

/// One "ALT" / "RG" pair per ring at the middle of the ring along the
/// orientation indicator, plus the left and right azimuths at the ring's
/// outer edge.
fn range_fan_sector(
    ctx: &mut RuleContext<'_>,
    converter: &dyn PointConverter,
    origin: GeoPoint,
) -> Result<(), ModifierError> {
    let pts = ctx.pixels(5)?;
    let n = pts.len();
    let attrs = &ctx.graphic.attributes;
    let mut ranges = parse_list("AM", &attrs.am)?;
    let azimuths = parse_list("AN", &attrs.an)?;
    let altitudes = altitude_labels(&attrs.x, &attrs.x1);

    let sectors = azimuths.len() / 2;
    if sectors == 0 {
        return Err(ModifierError::MissingAttribute { attribute: "AN" });
    }
    // only maximum ranges given: the first ring starts at the origin
    if ranges.len() == sectors {
        ranges.insert(
            0,
            Token {
                text: "0".into(),
                value: 0.0,
            },
        );
    }
    if ranges.len() < sectors + 1 {
        return Err(ModifierError::MissingAttribute { attribute: "AM" });
    }

    let geodesic = ctx.geodesic();
    let orientation = geodesic.azimuth(
        converter.pixels_to_geo(pts[n - 5]),
        converter.pixels_to_geo(pts[n - 4]),
    );
    let hide = ctx.graphic.hide_optional_labels;
    let cs = ctx.cs();

    let mut out = Vec::new();
    for k in 0..sectors {
        let (inner, outer) = (&ranges[k], &ranges[k + 1]);
        let mid = geodesic.point_at(origin, (inner.value + outer.value) / 2.0, orientation);
        let at = converter.geo_to_pixels(mid);

        if let Some(alt) = altitudes.get(k) {
            out.extend(Modifier::area(alt.clone(), 0.0, at));
        }
        if hide {
            continue;
        }
        out.extend(Modifier::area(format!("RG {}", outer.text), -cs, at));
        for az in &azimuths[2 * k..2 * k + 2] {
            let edge = geodesic.point_at(origin, outer.value, az.value);
            out.extend(Modifier::area(az.text.clone(), 0.0, converter.geo_to_pixels(edge)));
        }
    }
    ctx.extend(out);
    Ok(())
}

/// Name on the bisector of the searched sector, just past the maximum range
fn radar_search(
    ctx: &mut RuleContext<'_>,
    converter: &dyn PointConverter,
    origin: GeoPoint,
) -> Result<(), ModifierError> {
    let attrs = &ctx.graphic.attributes;
    let values = parse_list("left_right_min_max", &attrs.left_right_min_max)?;
    if values.len() < 4 {
        return Err(ModifierError::MissingAttribute {
            attribute: "left_right_min_max",
        });
    }
    let name = attrs.name.clone();

    let left = values[0].value.rem_euclid(360.0);
    let right = values[1].value.rem_euclid(360.0);
    let mut orientation = (left + right) / 2.0;
    if left > right {
        orientation += 180.0;
    }
    let orientation = orientation.rem_euclid(360.0);
    let radius = values[3].value * defaults::RADAR_LABEL_RANGE;

    let at = ctx.geodesic().point_at(origin, radius, orientation);
    let at: DVec2 = converter.geo_to_pixels(at);
    ctx.push(Modifier::area(name, 0.0, at));
    Ok(())
}

/// Name at the center and a label per ring due north of it
fn range_fan(
    ctx: &mut RuleContext<'_>,
    converter: &dyn PointConverter,
    origin: GeoPoint,
) -> Result<(), ModifierError> {
    let attrs = &ctx.graphic.attributes;
    let ranges = parse_list("AM", &attrs.am)?;
    if ranges.is_empty() {
        return Err(ModifierError::MissingAttribute { attribute: "AM" });
    }
    let altitudes = altitude_labels(&attrs.x, &attrs.x1);
    let name = attrs.name.clone();
    let center = ctx.center()?;
    let hide = ctx.graphic.hide_optional_labels;
    let cs = ctx.cs();
    let geodesic = ctx.geodesic();

    ctx.push(Modifier::area(name, 0.0, center));
    for (k, range) in ranges.iter().enumerate() {
        let at = converter.geo_to_pixels(geodesic.point_at(origin, range.value, 0.0));
        if !hide {
            ctx.push(Modifier::area(format!("RG {}", range.text), 0.0, at));
        }
        if let Some(alt) = altitudes.get(k) {
            ctx.push(Modifier::area(alt.clone(), -cs, at));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::{
        Capabilities, ProportionalMetrics, SphericalGeodesic, ViewportConverter,
    };
    use crate::config::RendererSettings;
    use crate::graphic::{Attributes, TacticalGraphic};
    use crate::placement::place_modifiers_geo;
    use glam::dvec2;

    const ORIGIN: GeoPoint = GeoPoint::new(0.5, 0.5);

    fn viewport() -> ViewportConverter {
        ViewportConverter::new(GeoPoint::new(0.0, 1.0), 1000.0)
    }

    fn place(g: &mut TacticalGraphic, conv: &ViewportConverter) {
        let caps = Capabilities::new(&ProportionalMetrics, &SphericalGeodesic);
        place_modifiers_geo(g, None, Some(conv), caps, &RendererSettings::default());
    }

    fn sector_graphic(attrs: Attributes) -> TacticalGraphic {
        let o = viewport().geo_to_pixels(ORIGIN);
        // the orientation indicator runs east from the origin
        let pixels = vec![
            o + dvec2(0.0, -50.0),
            o + dvec2(50.0, 0.0),
            o,
            o + dvec2(100.0, 0.0),
            o + dvec2(90.0, 5.0),
            o + dvec2(90.0, -5.0),
            o + dvec2(100.0, 0.0),
        ];
        TacticalGraphic::new(TacticalLine::RANGE_FAN_SECTOR, pixels)
            .with_lat_longs(vec![ORIGIN])
            .with_attributes(attrs)
    }

    #[test]
    fn parse_keeps_original_spelling() {
        let t = parse_list("AM", " 1000, 2.5e3 ,").unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].text, "2.5e3");
        assert_eq!(t[1].value, 2500.0);
        assert!(matches!(
            parse_list("AM", "10,abc"),
            Err(ModifierError::InvalidNumber { field: "AM", .. })
        ));
    }

    #[test]
    fn altitude_band_uses_ceiling_when_given() {
        assert_eq!(
            altitude_labels("100,200,", "300"),
            vec!["ALT 100 - 300".to_string(), "ALT 200".into(), String::new()]
        );
        assert_eq!(altitude_labels("", "500"), vec!["ALT 500".to_string()]);
    }

    #[test]
    fn sector_rings_follow_orientation() {
        let attrs = Attributes {
            am: "2000".into(),
            an: "0,180".into(),
            x: "500".into(),
            ..Default::default()
        };
        let mut g = sector_graphic(attrs);
        place(&mut g, &viewport());
        let texts: Vec<_> = g.modifiers.iter().filter_map(|m| m.text_str()).collect();
        assert_eq!(texts, vec!["ALT 500", "RG 2000", "0", "180"]);

        let o = viewport().geo_to_pixels(ORIGIN);
        let alt = g.modifiers[0].text_path[0];
        assert!(alt.x > o.x + 5.0, "{alt} vs {o}");
        assert!((alt.y - o.y).abs() < 0.5);
        assert_eq!(g.modifiers[1].line_factor, -1.0);
    }

    #[test]
    fn hidden_optional_labels_keep_altitudes() {
        let attrs = Attributes {
            am: "0,1000,2000".into(),
            an: "0,90,90,180".into(),
            x: "100,200".into(),
            ..Default::default()
        };
        let mut g = sector_graphic(attrs);
        g.hide_optional_labels = true;
        place(&mut g, &viewport());
        let texts: Vec<_> = g.modifiers.iter().filter_map(|m| m.text_str()).collect();
        assert_eq!(texts, vec!["ALT 100", "ALT 200"]);
    }

    #[test]
    fn sector_without_converter_places_nothing() {
        let attrs = Attributes {
            am: "2000".into(),
            an: "0,180".into(),
            ..Default::default()
        };
        let mut g = sector_graphic(attrs);
        let caps = Capabilities::new(&ProportionalMetrics, &SphericalGeodesic);
        place_modifiers_geo(&mut g, None, None, caps, &RendererSettings::default());
        assert!(g.modifiers.is_empty());
    }

    fn range_fan_graphic(attrs: Attributes) -> TacticalGraphic {
        let o = viewport().geo_to_pixels(ORIGIN);
        let pixels = vec![
            o + dvec2(-30.0, -30.0),
            o + dvec2(30.0, -30.0),
            o + dvec2(30.0, 30.0),
            o + dvec2(-30.0, 30.0),
        ];
        TacticalGraphic::new(TacticalLine::RANGE_FAN, pixels)
            .with_lat_longs(vec![ORIGIN])
            .with_attributes(attrs)
    }

    #[test]
    fn range_fan_rings_due_north_of_center() {
        let attrs = Attributes {
            name: "F1".into(),
            am: "1000,3000".into(),
            x: "100,300".into(),
            ..Default::default()
        };
        let mut g = range_fan_graphic(attrs);
        place(&mut g, &viewport());
        let texts: Vec<_> = g.modifiers.iter().filter_map(|m| m.text_str()).collect();
        assert_eq!(texts, vec!["F1", "RG 1000", "ALT 100", "RG 3000", "ALT 300"]);

        let o = viewport().geo_to_pixels(ORIGIN);
        assert!((g.modifiers[0].text_path[0] - o).length() < 1e-6);
        let (inner, outer) = (g.modifiers[1].text_path[0], g.modifiers[3].text_path[0]);
        // 1000 m is about 9 px at 1000 px per degree
        assert!((inner.y - (o.y - 9.0)).abs() < 0.5, "{inner} vs {o}");
        assert!(outer.y < inner.y - 15.0, "{outer} vs {inner}");
        assert!((inner.x - o.x).abs() < 0.5 && (outer.x - o.x).abs() < 0.5);
        // altitude one line above its range, on the same point
        assert_eq!(g.modifiers[2].text_path[0], inner);
        assert_eq!(g.modifiers[1].line_factor, 0.0);
        assert_eq!(g.modifiers[2].line_factor, -1.0);
    }

    #[test]
    fn range_fan_hides_ranges_but_not_altitudes() {
        let attrs = Attributes {
            name: "F1".into(),
            am: "1000,3000".into(),
            x: "100".into(),
            ..Default::default()
        };
        let mut g = range_fan_graphic(attrs);
        g.hide_optional_labels = true;
        place(&mut g, &viewport());
        let texts: Vec<_> = g.modifiers.iter().filter_map(|m| m.text_str()).collect();
        assert_eq!(texts, vec!["F1", "ALT 100"]);
    }

    #[test]
    fn range_fan_without_ranges_places_nothing() {
        let mut g = range_fan_graphic(Attributes {
            name: "F1".into(),
            ..Default::default()
        });
        place(&mut g, &viewport());
        assert!(g.modifiers.is_empty());
    }

    #[test]
    fn radar_search_name_on_wrapped_bisector() {
        let conv = viewport();
        let o = conv.geo_to_pixels(ORIGIN);
        let attrs = Attributes {
            name: "RS1".into(),
            left_right_min_max: "350,10,0,5000".into(),
            ..Default::default()
        };
        let pixels = vec![o, o + dvec2(10.0, 0.0)];
        let mut g = TacticalGraphic::new(TacticalLine::RADAR_SEARCH, pixels)
            .with_lat_longs(vec![ORIGIN])
            .with_attributes(attrs);
        place(&mut g, &conv);
        assert_eq!(g.modifiers.len(), 1);
        let at = g.modifiers[0].text_path[0];
        // due north of the origin
        assert!(at.y < o.y - 40.0, "{at} vs {o}");
        assert!((at.x - o.x).abs() < 0.5);
    }
}
