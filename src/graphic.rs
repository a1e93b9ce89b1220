//! Tactical graphic instances and their line-type identifiers.

use glam::DVec2;

use crate::errors::SettingsError;
use crate::modifier::{ImageRef, Modifier};
use crate::types::{Color, GeoPoint};
use crate::defaults;

/// Tactical graphic type.
///
/// Variant names follow the symbology short names so they can be matched
/// against symbol tables without a translation layer.
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TacticalLine {
    // Control lines
    BOUNDARY,
    FLOT,
    LC,
    PL,
    FEBA,
    PDF,
    LL,
    EWL,
    FCL,
    FSCL,
    CFL,
    NFL,
    RFL,
    MFP,
    BCL,
    BCL_REVD,
    ICL,
    HOLD,
    HOLD_GE,
    BRDGHD,
    BRDGHD_GE,
    LOA,
    LD,
    LDLC,
    RELEASE,
    PLD,
    SL,
    TC,
    IFF_OFF,
    IFF_ON,
    // Bearing lines
    BEARING,
    ELECTRO,
    ACOUSTIC,
    TORPEDO,
    OPTICAL,
    // Linear targets
    LINTGT,
    LINTGTS,
    FPF,
    // Air corridors
    AC,
    SAAFR,
    LLTR,
    MRR,
    SC,
    UAV,
    // Tactical tasks
    BLOCK,
    BREACH,
    BYPASS,
    CANALIZE,
    CLEAR,
    CONTAIN,
    CATK,
    CATKBYFIRE,
    DELAY,
    DISRUPT,
    FIX,
    FOLLA,
    FOLSP,
    ISOLATE,
    OCCUPY,
    PENETRATE,
    RIP,
    RETAIN,
    RETIREMENT,
    SECURE,
    SEIZE,
    SCREEN,
    COVER,
    GUARD,
    WITHDRAW,
    WDRAWUP,
    DISENGAGE,
    DEMONSTRATE,
    MOBILE_DEFENSE,
    FPOL,
    RPOL,
    PURSUIT,
    CORDONKNOCK,
    CORDONSEARCH,
    // Routes and axes
    MSR,
    MSR_ONEWAY,
    MSR_TWOWAY,
    MSR_ALT,
    ASR,
    ASR_ONEWAY,
    ASR_TWOWAY,
    ASR_ALT,
    TRAFFIC_ROUTE,
    TRAFFIC_ROUTE_ONEWAY,
    TRAFFIC_ROUTE_ALT,
    CONVOY,
    HCONVOY,
    MAIN,
    SPT,
    AIRAOA,
    AAAAA,
    AXAD,
    DIRATKAIR,
    DIRATKGND,
    DIRATKSPT,
    // Maneuver and support areas
    GENERAL,
    AO,
    NAI,
    TAI,
    OBJ,
    EA,
    ASSY,
    ATKPOS,
    DZ,
    EZ,
    LZ,
    PZ,
    LAA,
    FARP,
    ASSAULT,
    AIRFIELD,
    BATTLE,
    PNO,
    STRONG,
    BASE_CAMP,
    BASE_CAMP_REVD,
    GUERILLA_BASE,
    GUERILLA_BASE_REVD,
    NOTACK,
    MINED,
    FENCED,
    UXO,
    ABATIS,
    OBSAREA,
    OBSFAREA,
    // Airspace coordination areas
    SAA,
    SGAA,
    ROZ,
    AARROZ,
    UAROZ,
    WEZ,
    FEZ,
    JEZ,
    MEZ,
    LOMEZ,
    HIMEZ,
    FAADZ,
    HIDACZ,
    WFZ,
    BDZ,
    JTAA,
    // Fire support areas
    FSA,
    FSA_RECTANGULAR,
    FSA_CIRCULAR,
    ACA,
    ACA_RECTANGULAR,
    ACA_CIRCULAR,
    FFA,
    FFA_RECTANGULAR,
    FFA_CIRCULAR,
    NFA,
    NFA_RECTANGULAR,
    NFA_CIRCULAR,
    RFA,
    RFA_RECTANGULAR,
    RFA_CIRCULAR,
    PAA,
    PAA_RECTANGULAR,
    PAA_CIRCULAR,
    ATI,
    ATI_RECTANGULAR,
    ATI_CIRCULAR,
    CFFZ,
    CFFZ_RECTANGULAR,
    CFFZ_CIRCULAR,
    SENSOR,
    SENSOR_RECTANGULAR,
    SENSOR_CIRCULAR,
    CENSOR,
    CENSOR_RECTANGULAR,
    CENSOR_CIRCULAR,
    DA,
    DA_RECTANGULAR,
    DA_CIRCULAR,
    CFZ,
    CFZ_RECTANGULAR,
    CFZ_CIRCULAR,
    ZOR,
    ZOR_RECTANGULAR,
    ZOR_CIRCULAR,
    TBA,
    TBA_RECTANGULAR,
    TBA_CIRCULAR,
    TVAR,
    TVAR_RECTANGULAR,
    TVAR_CIRCULAR,
    KILLBOXBLUE,
    KILLBOXBLUE_RECTANGULAR,
    KILLBOXBLUE_CIRCULAR,
    KILLBOXPURPLE,
    KILLBOXPURPLE_RECTANGULAR,
    KILLBOXPURPLE_CIRCULAR,
    // Targets, ranges and sensor coverage
    RECTANGULAR,
    CIRCULAR,
    RECTANGULAR_TARGET,
    BOMB,
    RANGE_FAN,
    RANGE_FAN_SECTOR,
    RANGE_FAN_FILL,
    RADAR_SEARCH,
    SHIP_AOI_RECTANGULAR,
    SHIP_AOI_CIRCULAR,
    DEFENDED_AREA_RECTANGULAR,
    DEFENDED_AREA_CIRCULAR,
    LAUNCH_AREA,
    PBS_RECTANGLE,
    PBS_SQUARE,
    PBS_CIRCLE,
    PBS_ELLIPSE,
}

use TacticalLine::*;

impl TacticalLine {
    /// Every graphic type, in declaration order
    pub const ALL: &'static [TacticalLine] = &[
        BOUNDARY, FLOT, LC, PL, FEBA, PDF, LL, EWL, FCL, FSCL, CFL, NFL, RFL, MFP, BCL,
        BCL_REVD, ICL, HOLD, HOLD_GE, BRDGHD, BRDGHD_GE, LOA, LD, LDLC, RELEASE, PLD, SL, TC,
        IFF_OFF, IFF_ON, BEARING, ELECTRO, ACOUSTIC, TORPEDO, OPTICAL, LINTGT, LINTGTS, FPF, AC,
        SAAFR, LLTR, MRR, SC, UAV, BLOCK, BREACH, BYPASS, CANALIZE, CLEAR, CONTAIN, CATK,
        CATKBYFIRE, DELAY, DISRUPT, FIX, FOLLA, FOLSP, ISOLATE, OCCUPY, PENETRATE, RIP, RETAIN,
        RETIREMENT, SECURE, SEIZE, SCREEN, COVER, GUARD, WITHDRAW, WDRAWUP, DISENGAGE,
        DEMONSTRATE, MOBILE_DEFENSE, FPOL, RPOL, PURSUIT, CORDONKNOCK, CORDONSEARCH, MSR,
        MSR_ONEWAY, MSR_TWOWAY, MSR_ALT, ASR, ASR_ONEWAY, ASR_TWOWAY, ASR_ALT, TRAFFIC_ROUTE,
        TRAFFIC_ROUTE_ONEWAY, TRAFFIC_ROUTE_ALT, CONVOY, HCONVOY, MAIN, SPT, AIRAOA, AAAAA,
        AXAD, DIRATKAIR, DIRATKGND, DIRATKSPT, GENERAL, AO, NAI, TAI, OBJ, EA, ASSY, ATKPOS, DZ,
        EZ, LZ, PZ, LAA, FARP, ASSAULT, AIRFIELD, BATTLE, PNO, STRONG, BASE_CAMP,
        BASE_CAMP_REVD, GUERILLA_BASE, GUERILLA_BASE_REVD, NOTACK, MINED, FENCED, UXO, ABATIS,
        OBSAREA, OBSFAREA, SAA, SGAA, ROZ, AARROZ, UAROZ, WEZ, FEZ, JEZ, MEZ, LOMEZ, HIMEZ,
        FAADZ, HIDACZ, WFZ, BDZ, JTAA, FSA, FSA_RECTANGULAR, FSA_CIRCULAR, ACA, ACA_RECTANGULAR,
        ACA_CIRCULAR, FFA, FFA_RECTANGULAR, FFA_CIRCULAR, NFA, NFA_RECTANGULAR, NFA_CIRCULAR,
        RFA, RFA_RECTANGULAR, RFA_CIRCULAR, PAA, PAA_RECTANGULAR, PAA_CIRCULAR, ATI,
        ATI_RECTANGULAR, ATI_CIRCULAR, CFFZ, CFFZ_RECTANGULAR, CFFZ_CIRCULAR, SENSOR,
        SENSOR_RECTANGULAR, SENSOR_CIRCULAR, CENSOR, CENSOR_RECTANGULAR, CENSOR_CIRCULAR, DA,
        DA_RECTANGULAR, DA_CIRCULAR, CFZ, CFZ_RECTANGULAR, CFZ_CIRCULAR, ZOR, ZOR_RECTANGULAR,
        ZOR_CIRCULAR, TBA, TBA_RECTANGULAR, TBA_CIRCULAR, TVAR, TVAR_RECTANGULAR, TVAR_CIRCULAR,
        KILLBOXBLUE, KILLBOXBLUE_RECTANGULAR, KILLBOXBLUE_CIRCULAR, KILLBOXPURPLE,
        KILLBOXPURPLE_RECTANGULAR, KILLBOXPURPLE_CIRCULAR, RECTANGULAR, CIRCULAR,
        RECTANGULAR_TARGET, BOMB, RANGE_FAN, RANGE_FAN_SECTOR, RANGE_FAN_FILL, RADAR_SEARCH,
        SHIP_AOI_RECTANGULAR, SHIP_AOI_CIRCULAR, DEFENDED_AREA_RECTANGULAR,
        DEFENDED_AREA_CIRCULAR, LAUNCH_AREA, PBS_RECTANGLE, PBS_SQUARE, PBS_CIRCLE, PBS_ELLIPSE,
    ];

    /// Closed polygon outlines whose interior holds the label stack
    pub fn is_closed_polygon(self) -> bool {
        matches!(
            self,
            GENERAL
                | AO
                | NAI
                | TAI
                | OBJ
                | EA
                | ASSY
                | ATKPOS
                | DZ
                | EZ
                | LZ
                | PZ
                | LAA
                | FARP
                | ASSAULT
                | AIRFIELD
                | BATTLE
                | PNO
                | STRONG
                | BASE_CAMP
                | BASE_CAMP_REVD
                | GUERILLA_BASE
                | GUERILLA_BASE_REVD
                | NOTACK
                | MINED
                | FENCED
                | UXO
                | OBSAREA
                | OBSFAREA
                | SAA
                | SGAA
                | ROZ
                | AARROZ
                | UAROZ
                | WEZ
                | FEZ
                | JEZ
                | MEZ
                | LOMEZ
                | HIMEZ
                | FAADZ
                | HIDACZ
                | WFZ
                | BDZ
                | JTAA
                | FSA
                | ACA
                | FFA
                | NFA
                | RFA
                | PAA
                | ATI
                | CFFZ
                | SENSOR
                | CENSOR
                | DA
                | CFZ
                | ZOR
                | TBA
                | TVAR
                | KILLBOXBLUE
                | KILLBOXPURPLE
        )
    }

    /// Rectangular and circular areas built from a center and dimensions
    pub fn is_change1_area(self) -> bool {
        self.is_change1_rectangular()
            || self.is_circular()
            || matches!(
                self,
                RECTANGULAR
                    | RECTANGULAR_TARGET
                    | PAA_RECTANGULAR
                    | PBS_RECTANGLE
                    | PBS_SQUARE
                    | PBS_ELLIPSE
                    | LAUNCH_AREA
                    | BOMB
                    | RANGE_FAN_SECTOR
                    | RANGE_FAN_FILL
                    | RADAR_SEARCH
            )
    }

    /// Change-1 rectangles whose first two vertices span the label stack height
    pub fn is_change1_rectangular(self) -> bool {
        matches!(
            self,
            FSA_RECTANGULAR
                | SHIP_AOI_RECTANGULAR
                | DEFENDED_AREA_RECTANGULAR
                | FFA_RECTANGULAR
                | ACA_RECTANGULAR
                | NFA_RECTANGULAR
                | RFA_RECTANGULAR
                | ATI_RECTANGULAR
                | CFFZ_RECTANGULAR
                | SENSOR_RECTANGULAR
                | CENSOR_RECTANGULAR
                | DA_RECTANGULAR
                | CFZ_RECTANGULAR
                | ZOR_RECTANGULAR
                | TBA_RECTANGULAR
                | TVAR_RECTANGULAR
                | KILLBOXBLUE_RECTANGULAR
                | KILLBOXPURPLE_RECTANGULAR
        )
    }

    /// Circles whose first geographic coordinate is the center
    pub fn is_circular(self) -> bool {
        matches!(
            self,
            CIRCULAR
                | FSA_CIRCULAR
                | ACA_CIRCULAR
                | FFA_CIRCULAR
                | NFA_CIRCULAR
                | RFA_CIRCULAR
                | PAA_CIRCULAR
                | ATI_CIRCULAR
                | CFFZ_CIRCULAR
                | SENSOR_CIRCULAR
                | CENSOR_CIRCULAR
                | DA_CIRCULAR
                | CFZ_CIRCULAR
                | ZOR_CIRCULAR
                | TBA_CIRCULAR
                | TVAR_CIRCULAR
                | KILLBOXBLUE_CIRCULAR
                | KILLBOXPURPLE_CIRCULAR
                | SHIP_AOI_CIRCULAR
                | DEFENDED_AREA_CIRCULAR
                | PBS_CIRCLE
                | RANGE_FAN
        )
    }
}

/// Symbology standard revision of the symbol ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum SymbolVersion {
    #[default]
    V2525D,
    V2525E,
}

/// Map client the graphic is rendered for
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClientContext {
    Cpof2d,
    Cpof3d,
    Ge,
    #[default]
    Other,
}

impl ClientContext {
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "cpof2d" => ClientContext::Cpof2d,
            "cpof3d" => ClientContext::Cpof3d,
            "ge" => ClientContext::Ge,
            _ => ClientContext::Other,
        }
    }

    pub fn is_cpof(&self) -> bool {
        matches!(self, ClientContext::Cpof2d | ClientContext::Cpof3d)
    }
}

/// Font descriptor handed to the metrics provider
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f64,
    pub bold: bool,
}

impl Font {
    pub fn try_new(family: impl Into<String>, size: f64) -> Result<Self, SettingsError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(SettingsError::InvalidFontSize { value: size });
        }
        Ok(Self {
            family: family.into(),
            size,
            bold: false,
        })
    }
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
            size: defaults::FONT_SIZE,
            bold: true,
        }
    }
}

/// Free-text attribute fields; an empty string means "not set"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    /// Unique designation (T)
    pub name: String,
    pub t1: String,
    pub dtg: String,
    pub dtg1: String,
    /// Minimum altitude
    pub h: String,
    /// Maximum altitude
    pub h1: String,
    pub h2: String,
    /// Comma separated altitudes per sector
    pub x: String,
    pub x1: String,
    /// Comma separated ranges
    pub am: String,
    /// Comma separated azimuth pairs
    pub an: String,
    pub v: String,
    pub ap: String,
    pub n: String,
    pub location: String,
    /// Echelon symbol already rendered as text
    pub echelon: String,
    /// Country code (AS)
    pub country: String,
    /// Radar search "left,right,min,max"
    pub left_right_min_max: String,
    /// Pre-rendered unit symbol drawn above an area's label stack
    pub symbol: Option<ImageRef>,
}

/// One graphic being annotated
#[derive(Debug, Clone)]
pub struct TacticalGraphic {
    pub line_type: TacticalLine,
    pub version: SymbolVersion,
    pub pixels: Vec<DVec2>,
    pub lat_longs: Vec<GeoPoint>,
    pub attributes: Attributes,
    pub font: Font,
    pub line_color: Color,
    pub fill_color: Option<Color>,
    pub client: ClientContext,
    pub hide_optional_labels: bool,
    pub modifiers: Vec<Modifier>,
}

impl TacticalGraphic {
    pub fn new(line_type: TacticalLine, pixels: Vec<DVec2>) -> Self {
        Self {
            line_type,
            version: SymbolVersion::default(),
            pixels,
            lat_longs: Vec::new(),
            attributes: Attributes::default(),
            font: Font::default(),
            line_color: Color::default(),
            fill_color: None,
            client: ClientContext::default(),
            hide_optional_labels: false,
            modifiers: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.attributes.name = name.into();
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_client(mut self, client: ClientContext) -> Self {
        self.client = client;
        self
    }

    pub fn with_lat_longs(mut self, lat_longs: Vec<GeoPoint>) -> Self {
        self.lat_longs = lat_longs;
        self
    }

    pub fn with_version(mut self, version: SymbolVersion) -> Self {
        self.version = version;
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }
}
