/// Tolerance used by every floating-point equality check in this crate.
///
/// Vector, matrix, quaternion and colour equality all compare per component
/// against this single value, so e.g. `Colour` and `Vec2` equality agree on
/// what "equal" means.
pub const EPSILON: f32 = 1e-6;
