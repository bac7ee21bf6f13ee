use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    core::{FrameIndex, FrameRange},
    error::{MenucastError, MenucastResult},
};

/// Maximum number of images a slideshow element may carry.
pub const MAX_SLIDESHOW_IMAGES: usize = 5;

/// Closed set of element kinds. The kind determines which content fields of
/// an [`Element`] are meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Literal text in `src_or_text`.
    Text,
    /// Single raster image locator in `src_or_text`.
    Image,
    /// Single video locator in `src_or_text`.
    Video,
    /// Cycling image sequence in `images` (up to [`MAX_SLIDESHOW_IMAGES`]).
    Slideshow,
}

/// Horizontal text alignment inside the element box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Align to the left edge.
    Left,
    /// Center within the box.
    #[default]
    Center,
    /// Align to the right edge.
    Right,
}

/// Optional visual properties; kind-dependent defaults apply at evaluation.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementProps {
    /// Text color (opaque CSS-style color string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    /// Font family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Font size in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Horizontal text alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    /// Corner radius in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    /// Shadow descriptor (opaque, passed through to the consumer).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    /// Frames each slideshow image holds before transitioning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slideshow_duration: Option<u64>,
}

/// One positioned, timed visual layer of a menu board.
///
/// Elements are pure data: the field set mirrors what the external editor
/// session persists, serialized camelCase to stay wire-compatible with the
/// project store's `canvas_state`. Geometry and timing fields default to
/// zero when absent; a defaulted `duration_frames` of zero marks the element
/// malformed and it is skipped at evaluation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Unique identifier, stable for the element's lifetime.
    pub id: String,
    /// Element kind.
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Display name for timeline-layer labeling.
    #[serde(default)]
    pub name: String,

    /// Left edge in canvas pixels.
    #[serde(default)]
    pub x: f64,
    /// Top edge in canvas pixels.
    #[serde(default)]
    pub y: f64,
    /// Box width in pixels.
    #[serde(default)]
    pub width: f64,
    /// Box height in pixels.
    #[serde(default)]
    pub height: f64,
    /// Rotation in degrees, clockwise, about the box center.
    #[serde(default)]
    pub rotation: f64,
    /// Draw order; higher is drawn later (on top). Ties keep list order.
    #[serde(default)]
    pub z_index: i32,

    /// Literal text for `Text`, else a single opaque media locator.
    #[serde(default)]
    pub src_or_text: String,
    /// Ordered media locators, meaningful only for `Slideshow`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// Optional visual properties.
    #[serde(default, rename = "properties")]
    pub props: ElementProps,

    /// Absolute frame at which the element becomes eligible to render.
    #[serde(default)]
    pub start_frame: u64,
    /// How many frames the element remains eligible. Must be > 0.
    #[serde(default)]
    pub duration_frames: u64,
}

impl Element {
    /// The half-open visible window `[start_frame, start_frame + duration_frames)`.
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(self.start_frame),
            end: FrameIndex(self.start_frame.saturating_add(self.duration_frames)),
        }
    }

    /// Whether the element is eligible to render at `frame`.
    pub fn is_visible_at(&self, frame: FrameIndex) -> bool {
        self.range().contains(frame)
    }

    /// Frames elapsed since the element became visible.
    ///
    /// Meaningful only when [`Element::is_visible_at`] holds for `frame`;
    /// the compositor never evaluates invisible elements.
    pub fn local_frame(&self, frame: FrameIndex) -> FrameIndex {
        FrameIndex(frame.0.saturating_sub(self.start_frame))
    }

    /// Validate element invariants.
    pub fn validate(&self) -> MenucastResult<()> {
        if self.id.trim().is_empty() {
            return Err(MenucastError::validation("element id must be non-empty"));
        }
        for (name, value) in [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
            ("rotation", self.rotation),
        ] {
            if !value.is_finite() {
                return Err(MenucastError::validation(format!(
                    "element '{}' {name} must be finite",
                    self.id
                )));
            }
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(MenucastError::validation(format!(
                "element '{}' width/height must be >= 0",
                self.id
            )));
        }
        if self.duration_frames == 0 {
            return Err(MenucastError::validation(format!(
                "element '{}' duration_frames must be > 0",
                self.id
            )));
        }
        if self.kind == ElementKind::Slideshow && self.images.len() > MAX_SLIDESHOW_IMAGES {
            return Err(MenucastError::validation(format!(
                "element '{}' has {} slideshow images (max {MAX_SLIDESHOW_IMAGES})",
                self.id,
                self.images.len()
            )));
        }
        if let Some(size) = self.props.font_size
            && (!size.is_finite() || size <= 0.0)
        {
            return Err(MenucastError::validation(format!(
                "element '{}' font_size must be finite and > 0 when set",
                self.id
            )));
        }
        if let Some(radius) = self.props.border_radius
            && (!radius.is_finite() || radius < 0.0)
        {
            return Err(MenucastError::validation(format!(
                "element '{}' border_radius must be finite and >= 0 when set",
                self.id
            )));
        }
        if self.props.slideshow_duration == Some(0) {
            return Err(MenucastError::validation(format!(
                "element '{}' slideshow_duration must be > 0 when set",
                self.id
            )));
        }
        Ok(())
    }
}

/// Immutable input of one render job: the persisted element list plus an
/// optional project reference.
///
/// A snapshot is read once per job from the external project store and never
/// mutated by the core; editing-session mutation lives outside this crate.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Project reference in the external store, if the job has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Ordered element list (list order breaks z ties).
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Snapshot {
    /// Parse a snapshot from a JSON string.
    pub fn from_json(json: &str) -> MenucastResult<Self> {
        serde_json::from_str(json).map_err(|e| MenucastError::serde(e.to_string()))
    }

    /// Read and parse a snapshot from a JSON file.
    pub fn from_path(path: &Path) -> MenucastResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read snapshot '{}'", path.display()))?;
        Self::from_json(&raw)
    }

    /// Validate snapshot-wide invariants: every element valid, ids unique.
    pub fn validate(&self) -> MenucastResult<()> {
        let mut seen = BTreeSet::new();
        for element in &self.elements {
            element.validate()?;
            if !seen.insert(element.id.as_str()) {
                return Err(MenucastError::validation(format!(
                    "duplicate element id '{}'",
                    element.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
