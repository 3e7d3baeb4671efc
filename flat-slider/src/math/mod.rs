//! Mathematical utilities for the bearing transformation chain

use nalgebra::{Matrix2, Matrix3, Matrix6, SMatrix, SVector, Vector2, Vector3, Vector6};

use crate::error::{BearingError, BearingResult};

pub type Mat2 = Matrix2<f64>;
pub type Mat3 = Matrix3<f64>;
pub type Mat6 = Matrix6<f64>;
pub type Vec2 = Vector2<f64>;
pub type Vec3 = Vector3<f64>;
pub type Vec6 = Vector6<f64>;

/// 12x12 matrix for element stiffness in the local and global systems
pub type Mat12 = SMatrix<f64, 12, 12>;
/// 12-element vector for element forces/displacements
pub type Vec12 = SVector<f64, 12>;
/// 6x12 matrix mapping local displacements to basic deformations
pub type Mat6x12 = SMatrix<f64, 6, 12>;

/// Build the orthonormal direction cosine matrix of the local frame
///
/// # Arguments
/// * `x` - Local x direction (axial)
/// * `y` - Vector in the local x-y plane
///
/// # Returns
/// 3x3 matrix whose rows are the normalized local x, y and z axes.
/// The local z axis is `x × y`, and y is re-orthogonalized as `z × x`.
pub fn orientation_axes(x: &Vec3, y: &Vec3) -> BearingResult<Mat3> {
    let xn = x.norm();
    let y_len = y.norm();
    if xn <= f64::EPSILON || y_len <= f64::EPSILON {
        return Err(BearingError::InvalidOrientation(format!(
            "x = [{}, {}, {}] and y = [{}, {}, {}] must have non-zero length",
            x[0], x[1], x[2], y[0], y[1], y[2]
        )));
    }

    let z = x.cross(y);
    let zn = z.norm();
    if zn <= f64::EPSILON * xn * y_len {
        return Err(BearingError::InvalidOrientation(format!(
            "x = [{}, {}, {}] and y = [{}, {}, {}] must not be parallel",
            x[0], x[1], x[2], y[0], y[1], y[2]
        )));
    }

    let y = z.cross(x);
    let yn = y.norm();

    let x = x / xn;
    let y = y / yn;
    let z = z / zn;

    #[rustfmt::skip]
    let r = Mat3::new(
        x[0], x[1], x[2],
        y[0], y[1], y[2],
        z[0], z[1], z[2],
    );
    Ok(r)
}

/// Compute the 12x12 transformation from the global to the local system
///
/// The direction cosine matrix is repeated on the four diagonal 3x3 blocks
/// (translations and rotations of both end nodes).
pub fn global_to_local(r: &Mat3) -> Mat12 {
    let mut t = Mat12::zeros();
    for i in 0..4 {
        let offset = i * 3;
        t.fixed_view_mut::<3, 3>(offset, offset).copy_from(r);
    }
    t
}

/// Compute the 6x12 transformation from the local to the basic system
///
/// Basic deformations are relative end displacements (j minus i) with the
/// shear terms corrected for the rotation of node j through the element length.
pub fn local_to_basic(length: f64) -> Mat6x12 {
    let mut t = Mat6x12::zeros();
    for i in 0..6 {
        t[(i, i)] = -1.0;
        t[(i, i + 6)] = 1.0;
    }
    t[(1, 11)] = -length;
    t[(2, 10)] = length;
    t
}
