//! Wire format of a constraint creation request.
//!
//! These types cross the [`ConstraintBackend`](crate::backend::ConstraintBackend)
//! boundary unchanged; the backend translates them into engine-specific
//! joint data.

use bevy::prelude::{Quat, Vec3};

use tethers_core::types::BodyHandle;

// ---------------------------------------------------------------------------
// Buddy
// ---------------------------------------------------------------------------

/// The body on the far end of a constraint, from the requesting body's
/// perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buddy {
    /// The immovable world frame (infinite mass, no motion, no collider).
    World,
    /// Another simulated body.
    Body(BodyHandle),
}

impl Buddy {
    /// Returns `true` for the world frame.
    #[must_use]
    pub const fn is_world(self) -> bool {
        matches!(self, Self::World)
    }
}

// ---------------------------------------------------------------------------
// ConstraintFlags
// ---------------------------------------------------------------------------

/// Creation flags on a constraint request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstraintFlags {
    /// Endpoint points and frames are expressed in world space.
    pub world_frames: bool,
    /// The joint must not separate under load.
    pub no_tear: bool,
    /// Suppress collision response between the two endpoint bodies.
    pub ignore_buddy: bool,
    /// Create the constraint disabled; it only registers its body pairing.
    pub inactive: bool,
}

// ---------------------------------------------------------------------------
// PointConstraintParams
// ---------------------------------------------------------------------------

/// Parameters for a point constraint: both endpoints pinned together, with
/// bounded relative rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct PointConstraintParams {
    /// Constraint endpoint on the requesting body and on the buddy.
    pub points: [Vec3; 2],
    /// Constraint-local reference frame at each endpoint.
    pub frames: [Quat; 2],
    /// Swing limits around the primary axis, in radians.
    pub x_limits: [f32; 2],
    /// Swing limits around the two secondary axes, in radians.
    pub yz_limits: [f32; 2],
    /// Rotational damping; 0 means undamped.
    pub damping: f32,
    /// Far end of the constraint.
    pub buddy: Buddy,
    /// Creation flags.
    pub flags: ConstraintFlags,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::prelude::World;

    #[test]
    fn flags_default_to_all_clear() {
        let flags = ConstraintFlags::default();
        assert!(!flags.world_frames);
        assert!(!flags.no_tear);
        assert!(!flags.ignore_buddy);
        assert!(!flags.inactive);
    }

    #[test]
    fn buddy_world_detection() {
        let mut world = World::new();
        let body = BodyHandle(world.spawn_empty().id());
        assert!(Buddy::World.is_world());
        assert!(!Buddy::Body(body).is_world());
    }

    #[test]
    fn params_clone_and_eq() {
        let params = PointConstraintParams {
            points: [Vec3::ONE, Vec3::ONE],
            frames: [Quat::IDENTITY, Quat::IDENTITY],
            x_limits: [0.0, std::f32::consts::TAU],
            yz_limits: [0.0, std::f32::consts::TAU],
            damping: 0.5,
            buddy: Buddy::World,
            flags: ConstraintFlags {
                world_frames: true,
                no_tear: true,
                ..ConstraintFlags::default()
            },
        };
        assert_eq!(params, params.clone());
    }
}
