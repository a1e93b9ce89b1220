//! Renderer settings passed explicitly into the placement and scaling passes.

use crate::defaults;
use crate::errors::SettingsError;

/// Read-only switches queried by the passes at call time
#[derive(Debug, Clone, PartialEq)]
pub struct RendererSettings {
    /// Shrink or expand area label stacks to fit their shape (GE client only)
    pub auto_collapse_modifiers: bool,
    /// Lines with two distinct ends get labels at the ends only
    pub two_labels_only: bool,
    /// Device resolution used to size arrow glyphs on routes
    pub device_dpi: u32,
    /// Always emit a background quad behind text
    pub text_background: bool,
    /// Fill alpha at or above which text gets a background anyway
    pub fill_alpha_obscures_text: u8,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            auto_collapse_modifiers: false,
            two_labels_only: true,
            device_dpi: defaults::DEVICE_DPI,
            text_background: false,
            fill_alpha_obscures_text: defaults::FILL_ALPHA_OBSCURES_TEXT,
        }
    }
}

impl RendererSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a DPI before building settings from user input
    pub fn try_with_dpi(self, dpi: u32) -> Result<Self, SettingsError> {
        if dpi == 0 {
            return Err(SettingsError::InvalidDpi { value: dpi });
        }
        Ok(Self {
            device_dpi: dpi,
            ..self
        })
    }

    pub fn with_auto_collapse(mut self, enabled: bool) -> Self {
        self.auto_collapse_modifiers = enabled;
        self
    }

    pub fn with_two_labels_only(mut self, enabled: bool) -> Self {
        self.two_labels_only = enabled;
        self
    }

    pub fn with_text_background(mut self, enabled: bool) -> Self {
        self.text_background = enabled;
        self
    }

    /// Arrow glyph length in device pixels
    pub fn arrow_size(&self) -> f64 {
        defaults::ARROW_BASE * self.device_dpi as f64 / defaults::REFERENCE_DPI
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dpi_is_rejected() {
        let err = RendererSettings::new().try_with_dpi(0).unwrap_err();
        assert_eq!(err, SettingsError::InvalidDpi { value: 0 });
    }

    #[test]
    fn arrow_scales_with_dpi() {
        let s = RendererSettings::new().try_with_dpi(192).unwrap();
        assert_eq!(s.arrow_size(), 2.0 * defaults::ARROW_BASE);
    }

    #[test]
    fn defaults() {
        let s = RendererSettings::default();
        assert!(!s.auto_collapse_modifiers);
        assert!(s.two_labels_only);
        assert_eq!(s.device_dpi, 96);
    }
}
