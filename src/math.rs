//! Matrix utilities for the direct-stiffness solver strategy

use nalgebra::{DMatrix, DVector, Matrix3, SMatrix, SVector};

pub type Mat = DMatrix<f64>;
pub type DVec = DVector<f64>;
pub type Mat3 = Matrix3<f64>;

/// 12x12 matrix for member stiffness
pub type Mat12 = SMatrix<f64, 12, 12>;
/// 12-element vector for member forces/displacements
pub type Vec12 = SVector<f64, 12>;

/// Compute the local-to-global transformation matrix for a 3D frame member
///
/// # Arguments
/// * `start` - Start node coordinates [X, Y, Z]
/// * `end` - End node coordinates [X, Y, Z]
///
/// Member length must be nonzero; callers screen degenerate members first.
pub fn member_transformation_matrix(start: &[f64; 3], end: &[f64; 3]) -> Mat12 {
    let dx = end[0] - start[0];
    let dy = end[1] - start[1];
    let dz = end[2] - start[2];
    let length = (dx * dx + dy * dy + dz * dz).sqrt();

    // Direction cosines for local x-axis (along member)
    let x = [dx / length, dy / length, dz / length];

    // Local y/z axes: vertical members use global X as local z; otherwise
    // local z lies in the plane of local x and global Y
    let (y, z) = if x[0].abs() < 1e-10 && x[2].abs() < 1e-10 {
        if x[1] > 0.0 {
            ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0])
        } else {
            ([0.0, 0.0, -1.0], [1.0, 0.0, 0.0])
        }
    } else {
        let global_y = [0.0, 1.0, 0.0];
        let z_unnorm = [
            x[1] * global_y[2] - x[2] * global_y[1],
            x[2] * global_y[0] - x[0] * global_y[2],
            x[0] * global_y[1] - x[1] * global_y[0],
        ];
        let z_len = (z_unnorm[0].powi(2) + z_unnorm[1].powi(2) + z_unnorm[2].powi(2)).sqrt();
        let z = [z_unnorm[0] / z_len, z_unnorm[1] / z_len, z_unnorm[2] / z_len];
        let y = [
            z[1] * x[2] - z[2] * x[1],
            z[2] * x[0] - z[0] * x[2],
            z[0] * x[1] - z[1] * x[0],
        ];
        (y, z)
    };

    let r = Mat3::new(
        x[0], x[1], x[2], //
        y[0], y[1], y[2], //
        z[0], z[1], z[2],
    );

    let mut t = Mat12::zeros();
    for block in 0..4 {
        let offset = block * 3;
        for row in 0..3 {
            for col in 0..3 {
                t[(offset + row, offset + col)] = r[(row, col)];
            }
        }
    }

    t
}

/// Compute the 12x12 local stiffness matrix for a 3D frame member
///
/// # Arguments
/// * `e` - Modulus of elasticity
/// * `g` - Shear modulus
/// * `a` - Cross-sectional area
/// * `iy` - Moment of inertia about local y-axis
/// * `iz` - Moment of inertia about local z-axis
/// * `j` - Torsional constant
/// * `length` - Member length
pub fn member_local_stiffness(
    e: f64,
    g: f64,
    a: f64,
    iy: f64,
    iz: f64,
    j: f64,
    length: f64,
) -> Mat12 {
    let l = length;
    let l2 = l * l;
    let l3 = l2 * l;

    let ea_l = e * a / l;
    let gj_l = g * j / l;

    let eiy_l3 = e * iy / l3;
    let eiy_l2 = e * iy / l2;
    let eiy_l = e * iy / l;

    let eiz_l3 = e * iz / l3;
    let eiz_l2 = e * iz / l2;
    let eiz_l = e * iz / l;

    #[rustfmt::skip]
    let data = [
        ea_l,      0.0,          0.0,           0.0,    0.0,           0.0,          -ea_l,     0.0,          0.0,           0.0,    0.0,           0.0,
        0.0,       12.0*eiz_l3,  0.0,           0.0,    0.0,           6.0*eiz_l2,   0.0,       -12.0*eiz_l3, 0.0,           0.0,    0.0,           6.0*eiz_l2,
        0.0,       0.0,          12.0*eiy_l3,   0.0,    -6.0*eiy_l2,   0.0,          0.0,       0.0,          -12.0*eiy_l3,  0.0,    -6.0*eiy_l2,   0.0,
        0.0,       0.0,          0.0,           gj_l,   0.0,           0.0,          0.0,       0.0,          0.0,           -gj_l,  0.0,           0.0,
        0.0,       0.0,          -6.0*eiy_l2,   0.0,    4.0*eiy_l,     0.0,          0.0,       0.0,          6.0*eiy_l2,    0.0,    2.0*eiy_l,     0.0,
        0.0,       6.0*eiz_l2,   0.0,           0.0,    0.0,           4.0*eiz_l,    0.0,       -6.0*eiz_l2,  0.0,           0.0,    0.0,           2.0*eiz_l,
        -ea_l,     0.0,          0.0,           0.0,    0.0,           0.0,          ea_l,      0.0,          0.0,           0.0,    0.0,           0.0,
        0.0,       -12.0*eiz_l3, 0.0,           0.0,    0.0,           -6.0*eiz_l2,  0.0,       12.0*eiz_l3,  0.0,           0.0,    0.0,           -6.0*eiz_l2,
        0.0,       0.0,          -12.0*eiy_l3,  0.0,    6.0*eiy_l2,    0.0,          0.0,       0.0,          12.0*eiy_l3,   0.0,    6.0*eiy_l2,    0.0,
        0.0,       0.0,          0.0,           -gj_l,  0.0,           0.0,          0.0,       0.0,          0.0,           gj_l,   0.0,           0.0,
        0.0,       0.0,          -6.0*eiy_l2,   0.0,    2.0*eiy_l,     0.0,          0.0,       0.0,          6.0*eiy_l2,    0.0,    4.0*eiy_l,     0.0,
        0.0,       -6.0*eiz_l2,  0.0,           0.0,    0.0,           2.0*eiz_l,    0.0,       6.0*eiz_l2,   0.0,           0.0,    0.0,           4.0*eiz_l,
    ];

    Mat12::from_row_slice(&data)
}

/// Fixed end reactions for a uniform load along a member
///
/// # Arguments
/// * `w` - Load intensity (force per unit length)
/// * `length` - Member length
/// * `direction` - Local direction index (0 = x, 1 = y, 2 = z)
pub fn fer_uniform_load(w: f64, length: f64, direction: usize) -> Vec12 {
    let l = length;
    let l2 = l * l;

    let mut fer = Vec12::zeros();
    match direction {
        0 => {
            fer[0] = -w * l / 2.0;
            fer[6] = -w * l / 2.0;
        }
        1 => {
            fer[1] = -w * l / 2.0;
            fer[5] = -w * l2 / 12.0;
            fer[7] = -w * l / 2.0;
            fer[11] = w * l2 / 12.0;
        }
        2 => {
            fer[2] = -w * l / 2.0;
            fer[4] = w * l2 / 12.0;
            fer[8] = -w * l / 2.0;
            fer[10] = -w * l2 / 12.0;
        }
        _ => {}
    }

    fer
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transformation_matrix_horizontal() {
        let t = member_transformation_matrix(&[0.0, 0.0, 0.0], &[10.0, 0.0, 0.0]);
        // Local x aligns with global X
        assert_relative_eq!(t[(0, 0)], 1.0, epsilon = 1e-10);
        assert_relative_eq!(t[(0, 1)], 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_transformation_matrix_vertical() {
        let t = member_transformation_matrix(&[0.0, 0.0, 0.0], &[0.0, 10.0, 0.0]);
        // Local x aligns with global Y
        assert_relative_eq!(t[(0, 1)], 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_local_stiffness_symmetry() {
        let k = member_local_stiffness(200e9, 77e9, 0.01, 1e-4, 2e-4, 1e-5, 10.0);
        for i in 0..12 {
            for j in 0..12 {
                assert_relative_eq!(k[(i, j)], k[(j, i)], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_fer_uniform_transverse() {
        let fer = fer_uniform_load(10.0, 6.0, 1);
        assert_relative_eq!(fer[1], -30.0, epsilon = 1e-12);
        assert_relative_eq!(fer[5], -30.0, epsilon = 1e-12);
        assert_relative_eq!(fer[11], 30.0, epsilon = 1e-12);
    }
}
