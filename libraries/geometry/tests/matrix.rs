use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use approx::assert_abs_diff_eq;
use lib_geometry::{Matrix4x4, Vector3};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_matrix(rng: &mut StdRng) -> Matrix4x4 {
    Matrix4x4::from_rows([(); 4].map(|()| [(); 4].map(|()| rng.gen_range(-2.0..2.0))))
}

fn assert_close(actual: Matrix4x4, expected: impl Into<glam::Mat4>, tolerance: f32) {
    let expected = expected.into();
    assert!(
        glam::Mat4::from(actual).abs_diff_eq(expected, tolerance),
        "{actual}\n!=\n{expected}"
    );
}

#[test]
fn rotations_agree_with_glam() {
    for angle in [0.0, FRAC_PI_4, FRAC_PI_2, 2.5, -1.0] {
        assert_close(
            Matrix4x4::from_rotation_x(angle),
            glam::Mat4::from_rotation_x(angle),
            1e-6,
        );
        assert_close(
            Matrix4x4::from_rotation_y(angle),
            glam::Mat4::from_rotation_y(angle),
            1e-6,
        );
        assert_close(
            Matrix4x4::from_rotation_z(angle),
            glam::Mat4::from_rotation_z(angle),
            1e-6,
        );
    }
}

#[test]
fn quarter_turn_around_z_maps_x_to_y() {
    let rotated = Matrix4x4::from_rotation_z(FRAC_PI_2).transform_vector3(Vector3::RIGHT);
    assert_abs_diff_eq!(rotated.x, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(rotated.y, 1.0, epsilon = 1e-6);
}

#[test]
fn multiplication_agrees_with_glam() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let left = random_matrix(&mut rng);
        let right = random_matrix(&mut rng);
        assert_close(
            left * right,
            glam::Mat4::from(left) * glam::Mat4::from(right),
            1e-4,
        );

        let mut accumulated = left;
        accumulated *= right;
        assert_eq!(accumulated, left * right);
    }
}

#[test]
fn composition_applies_right_operand_first() {
    let translate = Matrix4x4::from_translation(Vector3::new(5.0, 0.0, 0.0));
    let rotate = Matrix4x4::from_rotation_y(FRAC_PI_2);

    let moved = (translate * rotate) * Vector3::FORWARD;
    assert_abs_diff_eq!(moved.x, 6.0, epsilon = 1e-6);
    assert_abs_diff_eq!(moved.z, 0.0, epsilon = 1e-6);
}

#[test]
fn inverse_and_determinant() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..50 {
        let matrix = random_matrix(&mut rng);
        let glam_matrix = glam::Mat4::from(matrix);
        assert_abs_diff_eq!(
            matrix.determinant(),
            glam_matrix.determinant(),
            epsilon = 1e-3
        );

        if matrix.determinant().abs() < 1.0 {
            continue;
        }
        let inverse = matrix.inverse().unwrap();
        assert_close(matrix * inverse, Matrix4x4::IDENTITY, 1e-3);
        assert_close(inverse, glam_matrix.inverse(), 1e-2);
    }
}

#[test]
fn singular_matrices_have_no_inverse() {
    assert_eq!(Matrix4x4::ZERO.inverse(), None);

    let flattened = Matrix4x4::from_rows([
        [1.0, 2.0, 3.0, 4.0],
        [2.0, 4.0, 6.0, 8.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    assert_eq!(flattened.determinant(), 0.0);
    assert_eq!(flattened.inverse(), None);
}

#[test]
fn translation() {
    let translation = Matrix4x4::from_translation(Vector3::new(1.0, -2.0, 3.0));
    assert_eq!(
        translation.transform_point3(Vector3::ONE),
        Vector3::new(2.0, -1.0, 4.0)
    );
    assert_eq!(translation.transform_vector3(Vector3::ONE), Vector3::ONE);
    assert_eq!(translation.determinant(), 1.0);
    assert_eq!(
        translation.inverse(),
        Some(Matrix4x4::from_translation(Vector3::new(-1.0, 2.0, -3.0)))
    );
}

#[test]
fn projected_points_agree_with_glam() {
    let projection = Matrix4x4::perspective_rh(1.2, 1.5, 0.1, 50.0);
    let point = Vector3::new(1.0, -2.0, -7.0);
    let expected = glam::Mat4::from(projection).project_point3(point.into());
    let actual = projection.project_point3(point);
    assert_abs_diff_eq!(actual.distance(expected.into()), 0.0, epsilon = 1e-5);
}

#[test]
fn element_access() {
    let matrix = Matrix4x4::from_rows([
        [0.0, 1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0, 7.0],
        [8.0, 9.0, 10.0, 11.0],
        [12.0, 13.0, 14.0, 15.0],
    ]);

    assert_eq!(matrix.get(2, 1), Some(9.0));
    assert_eq!(matrix.get(4, 0), None);
    assert_eq!(matrix.get(0, 4), None);
    assert_eq!(matrix.row(1), Some([4.0, 5.0, 6.0, 7.0]));
    assert_eq!(matrix.column(1), Some([1.0, 5.0, 9.0, 13.0]));
    assert_eq!(matrix.column(4), None);
    assert_eq!(matrix.transpose().row(1), matrix.column(1));

    let columns = matrix.to_cols_array();
    assert_eq!(columns[..4], [0.0, 4.0, 8.0, 12.0]);
    assert_eq!(Matrix4x4::from_cols_array(&columns), matrix);
    assert_eq!(
        glam::Mat4::from(matrix).row(2),
        glam::Vec4::new(8.0, 9.0, 10.0, 11.0)
    );
    assert_eq!(matrix * 2.0 * 0.5, matrix);
}

#[test]
fn display_prints_rows() {
    let text = Matrix4x4::from_translation(Vector3::new(1.5, 2.0, -3.0)).to_string();
    assert_eq!(
        text,
        "[1, 0, 0, 1.5]\n[0, 1, 0, 2]\n[0, 0, 1, -3]\n[0, 0, 0, 1]"
    );
}

#[test]
fn default_is_identity() {
    assert_eq!(Matrix4x4::default(), Matrix4x4::IDENTITY);
}
