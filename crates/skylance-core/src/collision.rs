//! Collision layer filtering for the all-pairs sphere pass.

/// Collision layer bit assignments.
pub struct CollisionLayers;

impl CollisionLayers {
    /// No layer; a mask of NONE collides with nothing.
    pub const NONE: u32 = 0;

    /// Player ship and player shots.
    pub const PLAYER: u32 = 1 << 0;

    /// Enemy ships and enemy shots.
    pub const ENEMY: u32 = 1 << 1;

    /// Whether two bodies should be tested against each other.
    ///
    /// The check is symmetric: each body's attribute must appear in the
    /// other's mask. Same-side pairs (both PLAYER or both ENEMY with
    /// opposing masks) are filtered out before any distance math runs.
    pub fn should_collide(attr_a: u32, mask_a: u32, attr_b: u32, mask_b: u32) -> bool {
        (attr_a & mask_b) != 0 && (attr_b & mask_a) != 0
    }
}
