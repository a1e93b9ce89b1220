//! Shape/glyph emission: turns finished modifiers into drawable primitives.
//!
//! Every placement mode resolves to a draw position, a rotation and a
//! justification. Text rotation follows the anchor segment but is flipped by
//! π when the segment runs right-to-left so labels always read left-to-right.
//! The local frame of a label has `r` along the text and `n` pointing "down"
//! the text; positive line factors move along `n`.

use std::f64::consts::{FRAC_PI_2, PI};

use glam::{DVec2, dvec2};

use crate::capabilities::FontMetrics;
use crate::config::RendererSettings;
use crate::defaults;
use crate::geometry::{direction, midpoint, segment_angle};
use crate::graphic::{Font, TacticalGraphic};
use crate::modifier::{ImageRef, Modifier, ModifierContent, Placement};
use crate::types::{Color, Justify};

/// Content of a drawable primitive
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveContent {
    Text(String),
    Image(ImageRef),
}

/// One positioned text run or image for the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub content: PrimitiveContent,
    /// Vertical center of the first text line (or the image center)
    pub position: DVec2,
    pub rotation_degrees: f64,
    pub justify: Justify,
    pub line_color: Color,
    pub fill_color: Option<Color>,
}

impl Primitive {
    pub fn is_text(&self) -> bool {
        matches!(self.content, PrimitiveContent::Text(_))
    }
}

/// Filled quadrilateral drawn behind a text run
#[derive(Debug, Clone, PartialEq)]
pub struct Quad {
    pub corners: [DVec2; 4],
    pub fill: Color,
}

/// Everything emitted for one graphic
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Emission {
    pub primitives: Vec<Primitive>,
    pub backgrounds: Vec<Quad>,
}

/// Resolved draw geometry of one modifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Layout {
    pub position: DVec2,
    /// Radians, screen orientation (y down)
    pub theta: f64,
    pub justify: Justify,
    pub width: f64,
    pub line_height: f64,
    pub lines: usize,
}

/// Readable rotation of `p0 → p1`
fn text_angle(p0: DVec2, p1: DVec2) -> f64 {
    let theta = segment_angle(p0, p1);
    if p1.x < p0.x { theta + PI } else { theta }
}

fn frame(theta: f64) -> (DVec2, DVec2) {
    let r = DVec2::from_angle(theta);
    (r, r.perp())
}

fn content_size(modifier: &Modifier, metrics: &dyn FontMetrics, font: &Font) -> (f64, f64, usize) {
    match &modifier.content {
        ModifierContent::Text(text) => (
            metrics.string_width(font, text),
            metrics.line_height(font),
            text.lines().count().max(1),
        ),
        ModifierContent::Image(img) => (img.width, img.height, 1),
    }
}

pub(crate) fn layout(modifier: &Modifier, metrics: &dyn FontMetrics, font: &Font) -> Layout {
    let [p0, p1] = modifier.text_path;
    let (width, lh, lines) = content_size(modifier, metrics, font);
    let lf = modifier.line_factor;
    let dir = direction(p0, p1);

    let mut theta = text_angle(p0, p1);
    let (r, n) = frame(theta);
    let offset = n * (lf * lh);

    let (position, justify) = match modifier.placement {
        Placement::ToEnd => {
            let at = p0 - dir * (lh * defaults::END_GAP) + offset;
            let justify = if r.dot(-dir) > 0.0 {
                Justify::Left
            } else {
                Justify::Right
            };
            (at, justify)
        }
        Placement::AboveEnd => {
            let justify = if r.dot(dir) >= 0.0 {
                Justify::Left
            } else {
                Justify::Right
            };
            (p0 + offset, justify)
        }
        Placement::AboveMiddle => (midpoint(p0, p1) + offset, Justify::Center),
        Placement::AboveMiddlePerpendicular => {
            theta += FRAC_PI_2;
            if theta.cos() < -1e-9 {
                theta -= PI;
            }
            let (_, n) = frame(theta);
            (midpoint(p0, p1) + n * (lf * lh), Justify::Center)
        }
        Placement::AboveStartInside => (
            p0 + dir * (width / 2.0 + defaults::TEXT_PADDING) + offset,
            Justify::Center,
        ),
        Placement::AboveEndInside => (
            p1 - dir * (width / 2.0 + defaults::TEXT_PADDING) + offset,
            Justify::Center,
        ),
        Placement::Area | Placement::AreaImage => {
            theta = 0.0;
            (p0 + dvec2(0.0, lf * lh), Justify::Center)
        }
        Placement::Screen => {
            theta = 0.0;
            let sx = (p0.x - p1.x).signum();
            let sy = (p0.y - p1.y).signum();
            let at = p0 + dvec2(sx * width / 2.0, sy * lh / 2.0 + lf * lh);
            (at, Justify::Center)
        }
    };

    Layout {
        position,
        theta,
        justify,
        width,
        line_height: lh,
        lines,
    }
}

/// Corners of a text box around `position` in the rotated label frame.
///
/// `pad` grows the box on every side.
fn text_box(
    position: DVec2,
    theta: f64,
    justify: Justify,
    width: f64,
    lines: usize,
    lh: f64,
    pad: f64,
) -> [DVec2; 4] {
    let (r, n) = frame(theta);
    let (x0, x1) = match justify {
        Justify::Left => (0.0, width),
        Justify::Center => (-width / 2.0, width / 2.0),
        Justify::Right => (-width, 0.0),
    };
    let (y0, y1) = (-lh / 2.0, (lines as f64 - 0.5) * lh);
    let (x0, x1, y0, y1) = (x0 - pad, x1 + pad, y0 - pad, y1 + pad);
    [
        position + r * x0 + n * y0,
        position + r * x1 + n * y0,
        position + r * x1 + n * y1,
        position + r * x0 + n * y1,
    ]
}

/// Rendered footprint of a modifier, used by the fit/prune pass
pub(crate) fn footprint(modifier: &Modifier, metrics: &dyn FontMetrics, font: &Font) -> [DVec2; 4] {
    let l = layout(modifier, metrics, font);
    text_box(l.position, l.theta, l.justify, l.width, l.lines, l.line_height, 0.0)
}

/// Drawable primitives for every modifier on the graphic, in order
pub fn display_modifiers(graphic: &TacticalGraphic, metrics: &dyn FontMetrics) -> Vec<Primitive> {
    graphic
        .modifiers
        .iter()
        .map(|m| {
            let l = layout(m, metrics, &graphic.font);
            let content = match &m.content {
                ModifierContent::Text(t) => PrimitiveContent::Text(t.clone()),
                ModifierContent::Image(img) => PrimitiveContent::Image(img.clone()),
            };
            Primitive {
                content,
                position: l.position,
                rotation_degrees: l.theta.to_degrees(),
                justify: l.justify,
                line_color: graphic.line_color.clone(),
                fill_color: graphic.fill_color.clone(),
            }
        })
        .collect()
}

fn backing_color(line: &Color) -> Color {
    let is_white = match line {
        Color::Rgb(255, 255, 255) | Color::Rgba(255, 255, 255, _) => true,
        Color::Named(name) => name.eq_ignore_ascii_case("white"),
        _ => false,
    };
    if is_white {
        Color::black()
    } else {
        Color::Rgb(255, 255, 255)
    }
}

/// Background quad behind a text primitive, `None` for images.
///
/// Sized to the measured text plus padding and shifted off the anchor by
/// half the stacked line count, matching where the text is drawn.
pub fn text_background(primitive: &Primitive, metrics: &dyn FontMetrics, font: &Font) -> Option<Quad> {
    let PrimitiveContent::Text(text) = &primitive.content else {
        return None;
    };
    let width = metrics.string_width(font, text);
    let lh = metrics.line_height(font);
    let lines = text.lines().count().max(1);
    let corners = text_box(
        primitive.position,
        primitive.rotation_degrees.to_radians(),
        primitive.justify,
        width,
        lines,
        lh,
        defaults::TEXT_PADDING,
    );
    Some(Quad {
        corners,
        fill: backing_color(&primitive.line_color),
    })
}

/// Primitives plus backgrounds when the settings ask for them or the area
/// fill is opaque enough to hide the text
pub fn emit(
    graphic: &TacticalGraphic,
    metrics: &dyn FontMetrics,
    settings: &RendererSettings,
) -> Emission {
    let primitives = display_modifiers(graphic, metrics);
    let obscured = graphic
        .fill_color
        .as_ref()
        .is_some_and(|c| c.alpha() >= settings.fill_alpha_obscures_text);
    let backgrounds = if settings.text_background || obscured {
        primitives
            .iter()
            .filter_map(|p| text_background(p, metrics, &graphic.font))
            .collect()
    } else {
        Vec::new()
    };
    crate::log::debug!(
        primitives = primitives.len(),
        backgrounds = backgrounds.len(),
        "emitted modifiers"
    );
    Emission {
        primitives,
        backgrounds,
    }
}
