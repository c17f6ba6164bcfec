//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a transform from a row-major 3x3 matrix that multiplies column
/// vectors.
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub fn transform_3x3(
    m11: Component, m12: Component, m13: Component,
    m21: Component, m22: Component, m23: Component,
    m31: Component, m32: Component, m33: Component,
) -> Transform {
    // euclid multiplies row vectors, so the matrix is stored transposed.
    Transform::new(
        m11, m21, m31, 0.0,
        m12, m22, m32, 0.0,
        m13, m23, m33, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

/// Round to the nearest integer with halves rounded up, so -2.5 becomes -2.
pub fn round<T: Float>(value: T) -> T {
    let half = T::one() / (T::one() + T::one());
    (value + half).floor()
}

/// Clamp a value into `[min, max]`. NaN is mapped to `min`.
pub fn clamp<T: Float>(value: T, min: T, max: T) -> T {
    value.max(min).min(max)
}

/// Wrap a hue in degrees into the range [0, 360). NaN and infinite hues are
/// mapped to 0.
pub fn normalize_hue<T: Float>(hue: T) -> T {
    if !hue.is_finite() {
        return T::zero();
    }

    let full = T::from(360).unwrap_or_else(T::zero);

    let hue = hue % full;
    let hue = if hue < T::zero() { hue + full } else { hue };
    if hue >= full {
        hue - full
    } else {
        hue
    }
}
