//! Tests for channel hue resolution

mod override_tests;

/// Hue for an angle in degrees
pub fn degrees(angle: f32) -> f32 {
    angle / 360.0
}
