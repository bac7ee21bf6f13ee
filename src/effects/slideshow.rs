use crate::foundation::math::map_range_clamped;

/// Frames each image holds when the element does not specify its own
/// duration (2 s at the board clock).
pub const DEFAULT_HOLD_FRAMES: u64 = 120;

/// Fixed crossfade length in frames (1.5 s at the board clock).
///
/// Independent of the hold duration. A hold of `<= 90` frames therefore
/// produces overlapping, always-blending transitions; that behavior is
/// intentional and must not be clamped away.
pub const TRANSITION_FRAMES: u64 = 90;

/// One image layer of a slideshow blend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideLayer {
    /// Index into the element's image list.
    pub index: usize,
    /// Blend opacity in `[0, 1]`.
    pub opacity: f64,
}

/// The image layer(s) a slideshow shows at one local frame.
///
/// `next` is only present once the crossfade window has begun; the upcoming
/// image is never drawn (not even at opacity 0) before its fade-in starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideshowBlend {
    /// The image currently being held (fading out inside the window).
    pub current: SlideLayer,
    /// The upcoming image fading in, once inside the window.
    pub next: Option<SlideLayer>,
}

/// Compute the slideshow blend at `local_frame` of an element's visible
/// window.
///
/// The sequence loops for as long as the element stays visible: the cycle
/// length is `image_count * hold_frames`. The last [`TRANSITION_FRAMES`]
/// frames of each hold blend linearly from the current image (1 -> 0) to
/// the next (0 -> 1), with clamped extrapolation outside the window.
///
/// Returns `None` for an empty image list (a slideshow with nothing to show
/// is a defined empty case, not an error) and for a zero hold duration.
pub fn blend_at(image_count: usize, hold_frames: u64, local_frame: u64) -> Option<SlideshowBlend> {
    if image_count == 0 || hold_frames == 0 {
        return None;
    }

    let total = image_count as u64 * hold_frames;
    let cycle = local_frame % total;
    let index = (cycle / hold_frames) as usize;
    let next_index = (index + 1) % image_count;
    let frame_in_image = (cycle % hold_frames) as f64;

    // Signed, because the fixed window may be longer than the hold itself.
    let fade_start = hold_frames as f64 - TRANSITION_FRAMES as f64;
    let hold_end = hold_frames as f64;

    let current = SlideLayer {
        index,
        opacity: map_range_clamped(frame_in_image, fade_start, hold_end, 1.0, 0.0),
    };
    let next = (frame_in_image > fade_start).then(|| SlideLayer {
        index: next_index,
        opacity: map_range_clamped(frame_in_image, fade_start, hold_end, 0.0, 1.0),
    });

    Some(SlideshowBlend { current, next })
}

#[cfg(test)]
#[path = "../../tests/unit/effects/slideshow.rs"]
mod tests;
