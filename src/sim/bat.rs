//! Bat pose and contact geometry
//!
//! The bat hangs off a pivot with a fixed mount rotation; a swing rotates
//! the pivot about its x axis, easing out and back over the swing window.
//! Contact testing uses a single sweet-spot point in the pivot's local
//! frame, carried into world space by the current pivot orientation.

use glam::{EulerRot, Quat, Vec3};

use crate::consts::*;

/// Swing angle for a given time into the swing: rises to
/// `MAX_SWING_ANGLE` at the midpoint and returns to zero at
/// `SWING_DURATION`. Timing, not input magnitude, is all that matters.
pub fn swing_angle(elapsed: f32) -> f32 {
    let progress = (elapsed / SWING_DURATION).clamp(0.0, 1.0);
    (progress * std::f32::consts::PI).sin() * MAX_SWING_ANGLE
}

/// World orientation of the bat pivot at a given swing angle
pub fn orientation(swing: f32) -> Quat {
    Quat::from_euler(EulerRot::XYZ, -swing, BAT_MOUNT_YAW, BAT_MOUNT_ROLL)
}

/// World position of the sweet spot at a given swing angle
pub fn contact_point(swing: f32) -> Vec3 {
    BAT_PIVOT + orientation(swing) * BAT_CONTACT_OFFSET
}

/// Direction the bat face points; the shot flattens this onto the ground
/// plane before scaling
pub fn forward(swing: f32) -> Vec3 {
    orientation(swing) * Vec3::NEG_Z
}
