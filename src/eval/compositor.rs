use rayon::prelude::*;

use crate::{
    animation::entrance::{entrance_opacity, entrance_scale},
    effects::slideshow::{DEFAULT_HOLD_FRAMES, blend_at},
    foundation::core::{Affine, BOARD_FPS, Fps, FrameIndex, FrameRange, Transform2D, Vec2},
    scene::model::{Element, ElementKind, TextAlign},
};

const DEFAULT_TEXT_COLOR: &str = "#ffffff";
const DEFAULT_FONT_FAMILY: &str = "sans-serif";
const DEFAULT_FONT_SIZE_PX: f64 = 24.0;

/// One element fully resolved at one frame, ready for display or encoding.
///
/// The interactive preview and the headless batch renderer both consume this
/// exact structure; equal `(elements, frame)` inputs must produce equal
/// nodes. The box is placed at `(x, y)` and `transform` is the local box
/// transform (element rotation plus entrance scale, both pivoting on the
/// box center), mirroring how the consumer's `left`/`top` + `transform`
/// split works.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VisualNode {
    /// Source element id.
    pub id: String,
    /// Resolved draw order (ascending; output is painter's order).
    pub z: i32,
    /// Left edge in canvas pixels.
    pub x: f64,
    /// Top edge in canvas pixels.
    pub y: f64,
    /// Box width in pixels.
    pub width: f64,
    /// Box height in pixels.
    pub height: f64,
    /// Local box transform about the box center.
    pub transform: Affine,
    /// Final node opacity (entrance fade).
    pub opacity: f64,
    /// Corner radius in pixels (0 when unset).
    pub border_radius: f64,
    /// Opaque shadow descriptor, passed through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    /// Type-tagged resolved content.
    pub content: VisualContent,
}

/// Resolved, type-tagged content of a [`VisualNode`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VisualContent {
    /// Styled text.
    Text {
        /// Literal text content.
        text: String,
        /// Resolved text color.
        color: String,
        /// Resolved font family.
        font_family: String,
        /// Resolved font size in pixels.
        font_size_px: f64,
        /// Resolved alignment.
        align: TextAlign,
    },
    /// Single image layer.
    Image {
        /// Opaque media locator.
        source: String,
    },
    /// Single video layer.
    Video {
        /// Opaque media locator.
        source: String,
    },
    /// Slideshow composite: one or two blended image layers.
    Slideshow {
        /// Layers in draw order (current image first, then the fading-in
        /// next image once its window has begun).
        layers: Vec<SlideLayerNode>,
    },
}

/// One resolved image layer of a slideshow composite.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SlideLayerNode {
    /// Opaque media locator.
    pub source: String,
    /// Blend opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Stateless compositor from an element list to per-frame visual nodes.
///
/// Pure in `(elements, frame)`: no IO, no caching, no cross-frame state.
/// Calls may run concurrently without coordination.
pub struct Compositor;

impl Compositor {
    /// Resolve all elements visible at `frame` on the fixed board clock.
    ///
    /// Invisible elements are skipped entirely; malformed elements are
    /// skipped with a warning and never abort their siblings. The returned
    /// nodes are in painter's order: stable-sorted by `z` ascending, ties
    /// keeping the input list order.
    #[tracing::instrument(skip(elements))]
    pub fn render_frame(elements: &[Element], frame: FrameIndex) -> Vec<VisualNode> {
        Self::render_frame_at(elements, frame, BOARD_FPS)
    }

    /// [`Compositor::render_frame`] with an explicit frame rate (the rate
    /// only affects the entrance spring's elapsed-time mapping).
    pub fn render_frame_at(elements: &[Element], frame: FrameIndex, fps: Fps) -> Vec<VisualNode> {
        let mut nodes: Vec<VisualNode> = Vec::new();
        for element in elements {
            if !element.is_visible_at(frame) {
                continue;
            }
            if let Err(err) = element.validate() {
                tracing::warn!(element = %element.id, error = %err, "skipping malformed element");
                continue;
            }
            if let Some(node) = eval_element(element, frame, fps) {
                nodes.push(node);
            }
        }
        // Stable: equal z keeps element list order.
        nodes.sort_by_key(|n| n.z);
        nodes
    }

    /// Evaluate every frame of `range` in parallel.
    ///
    /// Frames are independent, so this is a plain data-parallel map; the
    /// result is ordered by frame and identical to a serial loop over
    /// [`Compositor::render_frame`].
    pub fn render_range(
        elements: &[Element],
        range: FrameRange,
    ) -> Vec<(FrameIndex, Vec<VisualNode>)> {
        let frames: Vec<u64> = (range.start.0..range.end.0).collect();
        frames
            .par_iter()
            .map(|&f| {
                let frame = FrameIndex(f);
                (frame, Self::render_frame(elements, frame))
            })
            .collect()
    }
}

fn eval_element(element: &Element, frame: FrameIndex, fps: Fps) -> Option<VisualNode> {
    let local = element.local_frame(frame);

    let content = match element.kind {
        ElementKind::Text => VisualContent::Text {
            text: element.src_or_text.clone(),
            color: element
                .props
                .fill_color
                .clone()
                .unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string()),
            font_family: element
                .props
                .font_family
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
            font_size_px: element.props.font_size.unwrap_or(DEFAULT_FONT_SIZE_PX),
            align: element.props.text_align.unwrap_or_default(),
        },
        ElementKind::Image => VisualContent::Image {
            source: element.src_or_text.clone(),
        },
        ElementKind::Video => VisualContent::Video {
            source: element.src_or_text.clone(),
        },
        ElementKind::Slideshow => {
            let hold = element
                .props
                .slideshow_duration
                .unwrap_or(DEFAULT_HOLD_FRAMES);
            // Empty image list: a defined empty case, no node at all.
            let blend = blend_at(element.images.len(), hold, local.0)?;
            let mut layers = vec![SlideLayerNode {
                source: element.images[blend.current.index].clone(),
                opacity: blend.current.opacity,
            }];
            if let Some(next) = blend.next {
                layers.push(SlideLayerNode {
                    source: element.images[next.index].clone(),
                    opacity: next.opacity,
                });
            }
            VisualContent::Slideshow { layers }
        }
    };

    let scale = entrance_scale(local.0, fps);
    let transform = Transform2D {
        translate: Vec2::ZERO,
        rotation_rad: element.rotation.to_radians(),
        scale: Vec2::new(scale, scale),
        anchor: Vec2::new(element.width / 2.0, element.height / 2.0),
    }
    .to_affine();

    Some(VisualNode {
        id: element.id.clone(),
        z: element.z_index,
        x: element.x,
        y: element.y,
        width: element.width,
        height: element.height,
        transform,
        opacity: entrance_opacity(local.0),
        border_radius: element.props.border_radius.unwrap_or(0.0),
        box_shadow: element.props.box_shadow.clone(),
        content,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/eval/compositor.rs"]
mod tests;
