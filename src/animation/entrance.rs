use crate::{
    animation::spring::{SpringParams, spring01},
    foundation::core::Fps,
    foundation::math::map_range_clamped,
};

/// Local frames over which entrance opacity ramps linearly from 0 to 1.
pub const ENTRANCE_FADE_FRAMES: u64 = 25;

/// Spring driving the entrance scale-in (under-damped, slight overshoot).
pub const ENTRANCE_SPRING: SpringParams = SpringParams {
    damping: 12.0,
    stiffness: 100.0,
    mass: 0.5,
};

/// Scale at the first visible frame; the spring settles toward 1.0.
pub const ENTRANCE_SCALE_MIN: f64 = 0.95;

/// Entrance opacity at a local frame: 0 at frame 0, 1 at frame
/// [`ENTRANCE_FADE_FRAMES`] and beyond, linear in between.
pub fn entrance_opacity(local_frame: u64) -> f64 {
    map_range_clamped(
        local_frame as f64,
        0.0,
        ENTRANCE_FADE_FRAMES as f64,
        0.0,
        1.0,
    )
}

/// Entrance scale at a local frame: the spring's unit response remapped
/// from its nominal `[0, 1]` range onto `[0.95, 1.0]`.
///
/// The remap is a plain lerp, not a clamp, so the spring's slight overshoot
/// past 1 survives as a scale fractionally above 1.0 around frame 25.
pub fn entrance_scale(local_frame: u64, fps: Fps) -> f64 {
    let s = spring01(ENTRANCE_SPRING, fps.frames_to_secs(local_frame));
    ENTRANCE_SCALE_MIN + (1.0 - ENTRANCE_SCALE_MIN) * s
}

#[cfg(test)]
#[path = "../../tests/unit/animation/entrance.rs"]
mod tests;
