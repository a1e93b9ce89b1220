//! Error types with diagnostics using miette
//!
//! Placement rules return these; the engine catches them at the rule
//! boundary, logs them and degrades the graphic to "no modifiers".

use miette::Diagnostic;
use thiserror::Error;

use crate::graphic::TacticalLine;

// ============================================================================
// Placement Errors
// ============================================================================

/// Errors raised while computing modifiers for one graphic
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ModifierError {
    #[error("{line_type:?} needs at least {needed} points, got {got}")]
    #[diagnostic(
        code(tactical_modifiers::placement::too_few_points),
        help("the shape generator produced fewer vertices than this graphic's layout expects")
    )]
    TooFewPoints {
        line_type: TacticalLine,
        needed: usize,
        got: usize,
    },

    #[error("missing attribute: {attribute}")]
    #[diagnostic(code(tactical_modifiers::placement::missing_attribute))]
    MissingAttribute { attribute: &'static str },

    #[error("invalid number in {field}: {value:?}")]
    #[diagnostic(
        code(tactical_modifiers::placement::invalid_number),
        help("sector fields are comma separated decimal numbers")
    )]
    InvalidNumber { field: &'static str, value: String },

    #[error("graphic has no geographic coordinates")]
    #[diagnostic(code(tactical_modifiers::placement::missing_lat_longs))]
    MissingLatLongs,

    #[error("no point converter supplied")]
    #[diagnostic(
        code(tactical_modifiers::placement::missing_converter),
        help("this graphic type places modifiers in geographic space")
    )]
    MissingConverter,

    #[error("degenerate geometry: {what}")]
    #[diagnostic(code(tactical_modifiers::placement::degenerate_geometry))]
    DegenerateGeometry { what: &'static str },

    #[error("non-finite value in {what}")]
    #[diagnostic(code(tactical_modifiers::placement::non_finite))]
    NonFinite { what: &'static str },
}

impl ModifierError {
    /// Shorthand for the point-count guard every rule starts with
    pub fn too_few_points(line_type: TacticalLine, needed: usize, got: usize) -> Self {
        ModifierError::TooFewPoints {
            line_type,
            needed,
            got,
        }
    }
}

// ============================================================================
// Settings Errors
// ============================================================================

/// Errors from validating [`crate::config::RendererSettings`]
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("invalid device DPI: {value}")]
    #[diagnostic(
        code(tactical_modifiers::settings::invalid_dpi),
        help("DPI must be a positive integer")
    )]
    InvalidDpi { value: u32 },

    #[error("invalid font size: {value}")]
    #[diagnostic(code(tactical_modifiers::settings::invalid_font_size))]
    InvalidFontSize { value: f64 },
}
