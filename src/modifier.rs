//! Modifier records attached to a graphic by the placement engine.

use std::fmt;

use glam::DVec2;

/// Geometric rule that turns (anchor segment, line factor) into a draw position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Beyond the first anchor point, away from the second
    ToEnd,
    /// Centered on the anchor segment, stacked perpendicular to it
    AboveMiddle,
    /// Horizontal text centered on the first anchor point
    Area,
    /// Screen/guard/cover letters offset into the quadrant away from the second point
    Screen,
    /// Starting at the first anchor point, running along the segment
    AboveEnd,
    /// Centered on the segment, rotated perpendicular to it
    AboveMiddlePerpendicular,
    /// Just inside the segment start
    AboveStartInside,
    /// Just inside the segment end
    AboveEndInside,
    /// Image centered on the first anchor point
    AreaImage,
}

/// Semantic role of a modifier, used for group pruning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierTag {
    /// Effective time from
    W,
    /// Effective time to
    W1,
    /// Combined "from - to" time line
    WW1,
    /// Minimum altitude
    H,
    /// Maximum altitude
    H1,
    H2,
    T1,
}

/// Tags that are pruned together when any member fails to fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagGroup {
    Effective,
    Altitude,
    Single(ModifierTag),
}

impl ModifierTag {
    pub fn group(self) -> TagGroup {
        match self {
            ModifierTag::W | ModifierTag::W1 => TagGroup::Effective,
            ModifierTag::H | ModifierTag::H1 | ModifierTag::H2 => TagGroup::Altitude,
            other => TagGroup::Single(other),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModifierTag::W => "W",
            ModifierTag::W1 => "W1",
            ModifierTag::WW1 => "W+W1",
            ModifierTag::H => "H",
            ModifierTag::H1 => "H1",
            ModifierTag::H2 => "H2",
            ModifierTag::T1 => "T1",
        }
    }
}

impl fmt::Display for ModifierTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pre-rendered sub-symbol handed through to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRef {
    pub id: String,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModifierContent {
    Text(String),
    Image(ImageRef),
}

/// One label or image attached to a graphic
#[derive(Debug, Clone, PartialEq)]
pub struct Modifier {
    /// Reference segment; both points coincide for area placement
    pub text_path: [DVec2; 2],
    pub content: ModifierContent,
    pub placement: Placement,
    /// Signed stacking index; pixel offset is `line_factor * line_height`
    pub line_factor: f64,
    pub tag: Option<ModifierTag>,
    /// Position follows the original path rather than a fixed anchor
    pub is_integral: bool,
    pub fits_mbr: bool,
}

impl Modifier {
    /// Text modifier; `None` when the text is empty
    pub fn text(
        text: impl Into<String>,
        placement: Placement,
        line_factor: f64,
        p0: DVec2,
        p1: DVec2,
    ) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text_path: [p0, p1],
            content: ModifierContent::Text(text),
            placement,
            line_factor,
            tag: None,
            is_integral: false,
            fits_mbr: true,
        })
    }

    /// Area-centered text modifier
    pub fn area(text: impl Into<String>, line_factor: f64, center: DVec2) -> Option<Self> {
        Self::text(text, Placement::Area, line_factor, center, center)
    }

    pub fn image(image: ImageRef, line_factor: f64, center: DVec2) -> Self {
        Self {
            text_path: [center, center],
            content: ModifierContent::Image(image),
            placement: Placement::AreaImage,
            line_factor,
            tag: None,
            is_integral: false,
            fits_mbr: true,
        }
    }

    pub fn with_tag(mut self, tag: ModifierTag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn integral(mut self) -> Self {
        self.is_integral = true;
        self
    }

    pub fn text_str(&self) -> Option<&str> {
        match &self.content {
            ModifierContent::Text(s) => Some(s),
            ModifierContent::Image(_) => None,
        }
    }

    /// Counts toward the auto-scale stack height
    pub fn is_stacked(&self, change1: bool) -> bool {
        match self.placement {
            Placement::Area => true,
            Placement::AboveMiddle => change1,
            _ => false,
        }
    }
}
