//! Tunable constants for collision resolution.

/// Extra separation added beyond the exact overlap so resolved circles do not
/// stick or jitter at the boundary.
pub const SEPARATION_PADDING: f32 = 0.3;

/// Widening of the corner thresholds in circle-vs-rectangle region
/// classification. Borderline diagonal contacts classify as edges.
pub const CORNER_BIAS_PADDING: f32 = 1.0;

/// Diameter of the stand-in circle used for point contacts.
pub const POINT_DIAMETER: f32 = 1.0;

/// Configuration for the collision engine.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionConfig {
    /// Padding added to circle overlaps before separating. Default: 0.3.
    pub separation_padding: f32,
    /// Corner threshold widening for region classification. Default: 1.0.
    pub corner_bias: f32,
    /// Diameter given to points treated as circles. Default: 1.0.
    pub point_diameter: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            separation_padding: SEPARATION_PADDING,
            corner_bias: CORNER_BIAS_PADDING,
            point_diameter: POINT_DIAMETER,
        }
    }
}
