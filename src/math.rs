//! Rotation construction helpers for the orientation tracker

use nalgebra::{Unit, UnitQuaternion, Vector3};

/// Returns the minimal rotation taking the direction of `from` onto the
/// direction of `to`.
///
/// The rotation axis is the cross product of the two vectors, so the result
/// never contains a component about either input direction. Degenerate
/// inputs are defined rather than NaN-producing:
///
/// - if either vector has zero magnitude, the identity rotation is returned;
/// - if the vectors are exactly opposed the axis is ambiguous, and a
///   half-turn about a deterministically chosen axis orthogonal to `from`
///   is returned.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use orientation_tracker::rotation_between_vectors;
///
/// let rotation = rotation_between_vectors(&Vector3::x(), &Vector3::y());
/// let rotated = rotation * Vector3::x();
/// assert!((rotated - Vector3::y()).norm() < 1e-12);
/// ```
pub fn rotation_between_vectors(
    from: &Vector3<f64>,
    to: &Vector3<f64>,
) -> UnitQuaternion<f64> {
    UnitQuaternion::rotation_between(from, to).unwrap_or_else(|| {
        // Opposing vectors: any axis orthogonal to `from` gives a valid
        // half-turn; pick one deterministically.
        UnitQuaternion::from_axis_angle(&orthogonal_axis(from), core::f64::consts::PI)
    })
}

/// A unit axis orthogonal to `v`, chosen deterministically.
///
/// Crosses `v` against the coordinate axis it is least aligned with, which
/// keeps the construction well-conditioned. `v` must be non-zero.
fn orthogonal_axis(v: &Vector3<f64>) -> Unit<Vector3<f64>> {
    let basis = if v.x.abs() <= v.y.abs() && v.x.abs() <= v.z.abs() {
        Vector3::x()
    } else if v.y.abs() <= v.z.abs() {
        Vector3::y()
    } else {
        Vector3::z()
    };
    Unit::new_normalize(v.cross(&basis))
}
