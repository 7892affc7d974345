//! Clamped angle parameters for swing limits.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ClampedAngle
// ---------------------------------------------------------------------------

/// An angle stored in degrees and clamped to one full turn (±360°).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClampedAngle(f32);

impl ClampedAngle {
    /// Largest representable magnitude, in degrees.
    pub const MAX_DEGREES: f32 = 360.0;

    /// Create from degrees, clamping to ±360°.
    #[must_use]
    pub fn from_degrees(degrees: f32) -> Self {
        Self(degrees.clamp(-Self::MAX_DEGREES, Self::MAX_DEGREES))
    }

    /// Create from radians, clamping to ±2π.
    #[must_use]
    pub fn from_radians(radians: f32) -> Self {
        Self::from_degrees(radians.to_degrees())
    }

    /// Value in degrees.
    #[must_use]
    pub const fn degrees(self) -> f32 {
        self.0
    }

    /// Value in radians.
    #[must_use]
    pub fn radians(self) -> f32 {
        self.0.to_radians()
    }
}

// ---------------------------------------------------------------------------
// RotationLimits
// ---------------------------------------------------------------------------

/// A `[min, max]` swing range around a constraint axis.
///
/// `min <= max` is not enforced; the range is forwarded to the backend as
/// configured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationLimits {
    pub min: ClampedAngle,
    pub max: ClampedAngle,
}

impl RotationLimits {
    /// Create from endpoints in degrees; each is clamped to ±360°.
    #[must_use]
    pub fn new(min_degrees: f32, max_degrees: f32) -> Self {
        Self {
            min: ClampedAngle::from_degrees(min_degrees),
            max: ClampedAngle::from_degrees(max_degrees),
        }
    }

    /// The full unrestricted turn (0° to 360°).
    #[must_use]
    pub fn full_turn() -> Self {
        Self::new(0.0, 360.0)
    }

    /// Both endpoints in radians, `[min, max]`.
    #[must_use]
    pub fn to_radians(self) -> [f32; 2] {
        [self.min.radians(), self.max.radians()]
    }
}

impl Default for RotationLimits {
    fn default() -> Self {
        Self::full_turn()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_within_range_is_kept() {
        let angle = ClampedAngle::from_degrees(45.0);
        assert!((angle.degrees() - 45.0).abs() < f32::EPSILON);
    }

    #[test]
    fn angle_clamps_above_full_turn() {
        let angle = ClampedAngle::from_degrees(500.0);
        assert!((angle.degrees() - 360.0).abs() < f32::EPSILON);
    }

    #[test]
    fn angle_clamps_below_negative_full_turn() {
        let angle = ClampedAngle::from_degrees(-500.0);
        assert!((angle.degrees() + 360.0).abs() < f32::EPSILON);
    }

    #[test]
    fn angle_radian_conversion() {
        let angle = ClampedAngle::from_degrees(180.0);
        assert!((angle.radians() - std::f32::consts::PI).abs() < 1e-6);

        let from_rad = ClampedAngle::from_radians(std::f32::consts::PI);
        assert!((from_rad.degrees() - 180.0).abs() < 1e-4);
    }

    #[test]
    fn angle_from_radians_clamps() {
        let angle = ClampedAngle::from_radians(3.0 * std::f32::consts::TAU);
        assert!((angle.degrees() - 360.0).abs() < f32::EPSILON);
    }

    #[test]
    fn default_angle_is_zero() {
        assert!(ClampedAngle::default().degrees().abs() < f32::EPSILON);
    }

    #[test]
    fn limits_default_to_full_turn() {
        let limits = RotationLimits::default();
        assert!(limits.min.degrees().abs() < f32::EPSILON);
        assert!((limits.max.degrees() - 360.0).abs() < f32::EPSILON);
    }

    #[test]
    fn limits_clamp_each_endpoint() {
        let limits = RotationLimits::new(-720.0, 720.0);
        assert!((limits.min.degrees() + 360.0).abs() < f32::EPSILON);
        assert!((limits.max.degrees() - 360.0).abs() < f32::EPSILON);
    }

    #[test]
    fn inverted_range_is_preserved() {
        // min > max is the caller's business; it must survive untouched.
        let limits = RotationLimits::new(90.0, -90.0);
        assert!((limits.min.degrees() - 90.0).abs() < f32::EPSILON);
        assert!((limits.max.degrees() + 90.0).abs() < f32::EPSILON);
    }

    #[test]
    fn limits_to_radians() {
        let [min, max] = RotationLimits::new(0.0, 180.0).to_radians();
        assert!(min.abs() < f32::EPSILON);
        assert!((max - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn limits_serialize_roundtrip() {
        let limits = RotationLimits::new(-45.0, 45.0);
        let json = serde_json::to_string(&limits).unwrap();
        let limits2: RotationLimits = serde_json::from_str(&json).unwrap();
        assert_eq!(limits, limits2);
    }
}
