use bevy::ecs::entity::Entity;

// ---------------------------------------------------------------------------
// ConstraintId
// ---------------------------------------------------------------------------

/// Opaque identifier for a constraint created by the physics backend.
///
/// Meaningful only to the backend that minted it; holders are responsible
/// for symmetric create/remove accounting, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstraintId(pub u64);

// ---------------------------------------------------------------------------
// BodyHandle
// ---------------------------------------------------------------------------

/// Non-owning reference to an entity's physical representation.
///
/// Minted by the backend when the entity is currently physicalized; a held
/// handle may go stale at any time and backends tolerate stale handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub Entity);

// ---------------------------------------------------------------------------
// AttachTarget
// ---------------------------------------------------------------------------

/// Configured re-attachment target for a constraint manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachTarget {
    /// Anchor to a fixed point in space (the immovable world frame).
    #[default]
    World,
    /// Anchor to another simulated entity's body.
    Entity {
        target: Entity,
        /// Suppress collision response between the owner and the target.
        disable_collisions: bool,
    },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
