//! Menucast is a deterministic compositing core for digital menu-board videos.
//!
//! A menu board is a short vertical video (1080x1920 at 60 fps) composed from
//! layered text, image, video, and slideshow elements, each with a half-open
//! timing window on a shared frame clock. Menucast owns the frame-indexed
//! evaluation of that layer stack:
//!
//! 1. **Load**: a [`Snapshot`] (`{ elements }`) is the immutable input of one
//!    render job, read from the external project store.
//! 2. **Evaluate**: [`Compositor::render_frame`] resolves the visible
//!    elements at one frame into type-tagged [`VisualNode`]s in painter's
//!    order (entrance fade/scale applied, slideshow crossfades blended).
//! 3. **Consume**: an interactive preview loop and a headless batch encoder
//!    drive the same entry point with different frame clocks and must observe
//!    identical output for identical `(elements, frame)` input.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure evaluation**: no IO, no caching, no cross-frame state. Frame N
//!   and frame N+1 are independent and may be computed out of order or in
//!   parallel ([`Compositor::render_range`]).
//! - **Per-element isolation**: a malformed element is skipped with a
//!   warning and never suppresses its siblings.
//!
//! Media locators (`src_or_text`, slideshow `images`) are opaque strings
//! resolved by an external asset collaborator; this crate never fetches or
//! validates bytes.

#![forbid(unsafe_code)]

mod animation;
mod effects;
mod eval;
mod foundation;
mod scene;

pub use animation::entrance::{
    ENTRANCE_FADE_FRAMES, ENTRANCE_SCALE_MIN, ENTRANCE_SPRING, entrance_opacity, entrance_scale,
};
pub use animation::spring::{SpringParams, spring01};
pub use effects::slideshow::{
    DEFAULT_HOLD_FRAMES, SlideLayer, SlideshowBlend, TRANSITION_FRAMES, blend_at,
};
pub use eval::compositor::{Compositor, SlideLayerNode, VisualContent, VisualNode};
pub use foundation::core::{
    Affine, BOARD_CANVAS, BOARD_FPS, Canvas, Fps, FrameIndex, FrameRange, Transform2D, Vec2,
};
pub use foundation::error::{MenucastError, MenucastResult};
pub use foundation::math::map_range_clamped;
pub use scene::model::{
    Element, ElementKind, ElementProps, MAX_SLIDESHOW_IMAGES, Snapshot, TextAlign,
};
