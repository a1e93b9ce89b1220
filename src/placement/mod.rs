//! Placement engine
//!
//! Every supported graphic type maps to one [`Rule`]. A rule reads the
//! graphic's pixels and attributes and pushes the modifiers it wants drawn.
//! Two entry points exist:
//!
//! - [`place_modifiers`] runs the pixel-space rules (routes, axes, tasks)
//!   straight against the pixel path.
//! - [`place_modifiers_geo`] runs the geo-aware rules (control lines,
//!   boundaries, areas, sectors). It resolves a true center for the shape
//!   first and guards the pixel path so any sub-step mutation is undone
//!   before returning.
//!
//! Rules append after whatever modifiers the graphic already holds. A rule
//! that fails leaves the list as it was before the call; the failure is
//! logged with the rule's name.

mod areas;
mod boundary;
mod lines;
mod routes;
mod sector;
pub mod segments;
mod tasks;
mod text;

use std::ops::{Deref, DerefMut};

use glam::DVec2;

pub use boundary::shift_modifier_path;
pub use segments::visible_middle_segment;

use crate::capabilities::{Capabilities, Geodesic, PointConverter};
use crate::catalog::label_for;
use crate::clip::ClipRegion;
use crate::config::RendererSettings;
use crate::defaults;
use crate::errors::ModifierError;
use crate::geometry::polygon_centroid;
use crate::graphic::{ClientContext, TacticalGraphic, TacticalLine};
use crate::modifier::Modifier;
use crate::types::GeoPoint;

// ============================================================================
// Rule table
// ============================================================================

/// Which entry point a rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSpace {
    Pixel,
    Geo,
}

type ApplyFn = fn(&mut RuleContext<'_>) -> Result<(), ModifierError>;

/// One placement recipe shared by a family of graphic types
pub struct Rule {
    pub name: &'static str,
    pub space: RuleSpace,
    apply: ApplyFn,
}

impl Rule {
    pub(crate) const fn pixel(name: &'static str, apply: ApplyFn) -> Self {
        Self {
            name,
            space: RuleSpace::Pixel,
            apply,
        }
    }

    pub(crate) const fn geo(name: &'static str, apply: ApplyFn) -> Self {
        Self {
            name,
            space: RuleSpace::Geo,
            apply,
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("space", &self.space)
            .finish()
    }
}

/// Placement rule for a graphic type, `None` for types that carry no modifiers
pub fn rule_for(line_type: TacticalLine) -> Option<&'static Rule> {
    use TacticalLine::*;

    let rule = match line_type {
        PL | LL | HOLD | HOLD_GE | BRDGHD | BRDGHD_GE | RELEASE | LOA | LD | LDLC | PLD | FEBA
        | BCL | BCL_REVD | ICL | LC | FLOT | SL | TC | IFF_OFF | IFF_ON | PDF | MFP => {
            &lines::BOTH_ENDS
        }
        FSCL | CFL | NFL | RFL | FCL => &lines::FIRE_SUPPORT_LINE,
        BEARING | ELECTRO | ACOUSTIC | TORPEDO | OPTICAL => &lines::BEARING_LINE,
        LINTGT | LINTGTS | FPF => &lines::LINEAR_TARGET,
        AC | SAAFR | LLTR | MRR | SC | UAV => &lines::AIR_CORRIDOR,

        BOUNDARY | EWL => &boundary::BOUNDARY_RULE,

        GENERAL | AO | NAI | TAI | OBJ | EA | ASSY | ATKPOS | DZ | EZ | LZ | PZ | LAA | FARP
        | ASSAULT | AIRFIELD | BATTLE | PNO | STRONG | BASE_CAMP | BASE_CAMP_REVD
        | GUERILLA_BASE | GUERILLA_BASE_REVD | NOTACK | MINED | FENCED | UXO | ABATIS
        | OBSAREA | OBSFAREA => &areas::LABELED_AREA,
        SAA | SGAA | ROZ | AARROZ | UAROZ | WEZ | FEZ | JEZ | MEZ | LOMEZ | HIMEZ | FAADZ
        | HIDACZ | WFZ | BDZ | JTAA => &areas::AIRSPACE_AREA,
        FSA | FSA_RECTANGULAR | FSA_CIRCULAR | ACA | ACA_RECTANGULAR | ACA_CIRCULAR | FFA
        | FFA_RECTANGULAR | FFA_CIRCULAR | NFA | NFA_RECTANGULAR | NFA_CIRCULAR | RFA
        | RFA_RECTANGULAR | RFA_CIRCULAR | PAA | PAA_RECTANGULAR | PAA_CIRCULAR | ATI
        | ATI_RECTANGULAR | ATI_CIRCULAR | CFFZ | CFFZ_RECTANGULAR | CFFZ_CIRCULAR | SENSOR
        | SENSOR_RECTANGULAR | SENSOR_CIRCULAR | CENSOR | CENSOR_RECTANGULAR | CENSOR_CIRCULAR
        | DA | DA_RECTANGULAR | DA_CIRCULAR | CFZ | CFZ_RECTANGULAR | CFZ_CIRCULAR | ZOR
        | ZOR_RECTANGULAR | ZOR_CIRCULAR | TBA | TBA_RECTANGULAR | TBA_CIRCULAR | TVAR
        | TVAR_RECTANGULAR | TVAR_CIRCULAR | SHIP_AOI_RECTANGULAR | SHIP_AOI_CIRCULAR
        | DEFENDED_AREA_RECTANGULAR | DEFENDED_AREA_CIRCULAR => &areas::FIRE_AREA,
        KILLBOXBLUE | KILLBOXBLUE_RECTANGULAR | KILLBOXBLUE_CIRCULAR | KILLBOXPURPLE
        | KILLBOXPURPLE_RECTANGULAR | KILLBOXPURPLE_CIRCULAR => &areas::KILL_BOX,
        RECTANGULAR | CIRCULAR | BOMB | LAUNCH_AREA | PBS_RECTANGLE | PBS_SQUARE | PBS_CIRCLE
        | PBS_ELLIPSE => &areas::NAMED_SHAPE,
        RECTANGULAR_TARGET => &areas::RECTANGULAR_TARGET_RULE,

        RANGE_FAN | RANGE_FAN_SECTOR | RADAR_SEARCH => &sector::SECTOR,

        SCREEN | COVER | GUARD => &tasks::SCREEN_RULE,
        BLOCK | BREACH | BYPASS | CANALIZE | CLEAR | CONTAIN | DELAY | DISRUPT | FIX
        | PENETRATE | RIP | RETIREMENT | WITHDRAW | WDRAWUP | DISENGAGE | DEMONSTRATE
        | MOBILE_DEFENSE | FPOL | RPOL | PURSUIT => &tasks::TASK_LETTER,
        ISOLATE | OCCUPY | RETAIN | SECURE | SEIZE | CORDONKNOCK | CORDONSEARCH => {
            &tasks::TASK_CENTER
        }

        MSR | MSR_ONEWAY | MSR_TWOWAY | MSR_ALT | ASR | ASR_ONEWAY | ASR_TWOWAY | ASR_ALT
        | TRAFFIC_ROUTE | TRAFFIC_ROUTE_ONEWAY | TRAFFIC_ROUTE_ALT => &routes::SUPPLY_ROUTE,
        CONVOY | HCONVOY => &routes::CONVOY_RULE,
        MAIN | SPT | AIRAOA | AAAAA | AXAD | CATK | CATKBYFIRE => &routes::AXIS,
        DIRATKAIR | DIRATKGND | DIRATKSPT => &routes::DIRECT_ATTACK,

        FOLLA | FOLSP | RANGE_FAN_FILL => return None,
    };
    Some(rule)
}

// ============================================================================
// Rule context
// ============================================================================

/// Everything a rule may read, plus the graphic it writes modifiers into
pub(crate) struct RuleContext<'a> {
    pub graphic: &'a mut TacticalGraphic,
    pub caps: Capabilities<'a>,
    pub settings: &'a RendererSettings,
    pub clip: Option<&'a ClipRegion>,
    converter: Option<&'a dyn PointConverter>,
    center: Option<DVec2>,
}

impl<'a> RuleContext<'a> {
    pub fn label(&self) -> &'static str {
        label_for(self.graphic.line_type, self.graphic.version)
    }

    /// Line spacing factor for the client
    pub fn cs(&self) -> f64 {
        if self.graphic.client == ClientContext::Cpof3d {
            defaults::CPOF3D_LINE_SPACING
        } else {
            1.0
        }
    }

    pub fn width(&self, text: &str) -> f64 {
        self.caps.metrics.string_width(&self.graphic.font, text)
    }

    pub fn line_height(&self) -> f64 {
        self.caps.metrics.line_height(&self.graphic.font)
    }

    /// Copy of the pixel path, failing when it has fewer than `needed` points
    pub fn pixels(&self, needed: usize) -> Result<Vec<DVec2>, ModifierError> {
        let got = self.graphic.pixels.len();
        if got < needed {
            return Err(ModifierError::too_few_points(
                self.graphic.line_type,
                needed,
                got,
            ));
        }
        Ok(self.graphic.pixels.clone())
    }

    pub fn center(&self) -> Result<DVec2, ModifierError> {
        match self.center {
            Some(c) if c.is_finite() => Ok(c),
            Some(_) => Err(ModifierError::NonFinite {
                what: "shape center",
            }),
            None => Err(ModifierError::DegenerateGeometry {
                what: "shape has no center",
            }),
        }
    }

    pub fn converter(&self) -> Result<&'a dyn PointConverter, ModifierError> {
        self.converter.ok_or(ModifierError::MissingConverter)
    }

    pub fn geodesic(&self) -> &'a dyn Geodesic {
        self.caps.geodesic
    }

    pub fn push(&mut self, modifier: Option<Modifier>) {
        if let Some(m) = modifier {
            self.graphic.modifiers.push(m);
        }
    }

    pub fn extend(&mut self, modifiers: impl IntoIterator<Item = Modifier>) {
        self.graphic.modifiers.extend(modifiers);
    }
}

// ============================================================================
// Pixel guard
// ============================================================================

/// Snapshot of a graphic's pixel path, written back when dropped.
///
/// Restoration runs on every exit path, including unwinding.
pub struct PixelGuard<'g> {
    graphic: &'g mut TacticalGraphic,
    saved: Vec<DVec2>,
}

impl<'g> PixelGuard<'g> {
    pub fn new(graphic: &'g mut TacticalGraphic) -> Self {
        let saved = graphic.pixels.clone();
        Self { graphic, saved }
    }
}

impl Deref for PixelGuard<'_> {
    type Target = TacticalGraphic;

    fn deref(&self) -> &TacticalGraphic {
        self.graphic
    }
}

impl DerefMut for PixelGuard<'_> {
    fn deref_mut(&mut self) -> &mut TacticalGraphic {
        self.graphic
    }
}

impl Drop for PixelGuard<'_> {
    fn drop(&mut self) {
        self.graphic.pixels = std::mem::take(&mut self.saved);
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Attach modifiers to a pixel-space graphic (routes, axes, tasks).
/// No-op for types handled by [`place_modifiers_geo`] or carrying no modifiers.
pub fn place_modifiers(
    graphic: &mut TacticalGraphic,
    caps: Capabilities<'_>,
    settings: &RendererSettings,
) {
    let Some(rule) = rule_for(graphic.line_type).filter(|r| r.space == RuleSpace::Pixel) else {
        return;
    };
    let center = polygon_centroid(&graphic.pixels);
    let mut ctx = RuleContext {
        graphic,
        caps,
        settings,
        clip: None,
        converter: None,
        center,
    };
    run(rule, &mut ctx);
}

/// Attach modifiers to a geo-aware graphic.
///
/// With a converter, center-anchored labels sit on the geodesic center of the
/// shape (or the first coordinate for circles); without one they fall back to
/// the planar centroid. The pixel path is identical before and after the call.
pub fn place_modifiers_geo(
    graphic: &mut TacticalGraphic,
    clip: Option<&ClipRegion>,
    converter: Option<&dyn PointConverter>,
    caps: Capabilities<'_>,
    settings: &RendererSettings,
) {
    let Some(rule) = rule_for(graphic.line_type).filter(|r| r.space == RuleSpace::Geo) else {
        return;
    };
    let mut guard = PixelGuard::new(graphic);
    let center = geo_center(&guard, converter, caps.geodesic);
    let mut ctx = RuleContext {
        graphic: &mut guard,
        caps,
        settings,
        clip,
        converter,
        center,
    };
    run(rule, &mut ctx);
}

// `err` is only read by the log line
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn run(rule: &Rule, ctx: &mut RuleContext<'_>) {
    // rules only append, so the caller's modifiers are the first `before` entries
    let before = ctx.graphic.modifiers.len();
    match (rule.apply)(ctx) {
        Ok(()) => {
            crate::log::debug!(
                rule = rule.name,
                placed = ctx.graphic.modifiers.len() - before,
                "placed modifiers"
            );
        }
        Err(err) => {
            crate::log::warn!(rule = rule.name, error = %err, "modifier placement failed");
            ctx.graphic.modifiers.truncate(before);
        }
    }
}

/// Pixel position of the shape's center
fn geo_center(
    graphic: &TacticalGraphic,
    converter: Option<&dyn PointConverter>,
    geodesic: &dyn Geodesic,
) -> Option<DVec2> {
    let planar = polygon_centroid(&graphic.pixels);
    let Some(converter) = converter else {
        return planar;
    };

    if graphic.line_type.is_circular() {
        if let Some(origin) = graphic.lat_longs.first() {
            return Some(converter.geo_to_pixels(*origin));
        }
    }

    let geo: Vec<GeoPoint> =
        if !graphic.lat_longs.is_empty() && graphic.lat_longs.len() == graphic.pixels.len() {
            graphic.lat_longs.clone()
        } else {
            graphic
                .pixels
                .iter()
                .map(|p| converter.pixels_to_geo(*p))
                .collect()
        };

    geodesic
        .polygon_center(&geo)
        .filter(|c| c.is_finite())
        .map(|c| converter.geo_to_pixels(c))
        .or(planar)
}
