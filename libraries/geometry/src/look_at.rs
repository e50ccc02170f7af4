use crate::{DegenerateInputError, Matrix4x4, Vector3};

/// Builds a right-handed view matrix for a viewer at `eye` looking at `target`.
///
/// The result maps world space into the viewer's local frame: `eye` becomes the origin, the
/// direction toward `target` becomes `-z` and `up` is projected onto `+y`.
///
/// Rows of the result are `right`, `true up` and `-forward`, each followed by the negated
/// projection of `eye` onto that axis, and finally `(0, 0, 0, 1)`.
///
/// # Errors
///
/// - [`DegenerateInputError::ZeroForward`] if `eye` and `target` coincide
/// - [`DegenerateInputError::ParallelUp`] if `up` is zero or parallel to the viewing direction
pub fn look_at(
    eye: Vector3,
    target: Vector3,
    up: Vector3,
) -> Result<Matrix4x4, DegenerateInputError> {
    look_to(eye, target - eye, up)
}

/// Like [`look_at`], but takes the viewing `direction` instead of a target point.
///
/// # Errors
///
/// - [`DegenerateInputError::ZeroForward`] if `direction` is zero
/// - [`DegenerateInputError::ParallelUp`] if `up` is zero or parallel to `direction`
pub fn look_to(
    eye: Vector3,
    direction: Vector3,
    up: Vector3,
) -> Result<Matrix4x4, DegenerateInputError> {
    let forward = direction
        .try_normalize()
        .ok_or(DegenerateInputError::ZeroForward)?;
    let right = forward
        .cross(up)
        .try_normalize()
        .ok_or(DegenerateInputError::ParallelUp)?;
    let true_up = right.cross(forward);

    Ok(Matrix4x4::from_rows([
        [right.x, right.y, right.z, -right.dot(eye)],
        [true_up.x, true_up.y, true_up.z, -true_up.dot(eye)],
        [-forward.x, -forward.y, -forward.z, forward.dot(eye)],
        [0.0, 0.0, 0.0, 1.0],
    ]))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn looking_down_negative_z_is_identity() {
        let view = look_at(Vector3::ZERO, Vector3::BACK, Vector3::UP);
        assert_eq!(view, Ok(Matrix4x4::IDENTITY));
    }

    #[test]
    fn looking_down_positive_z_turns_around_y() {
        let view = look_at(Vector3::ZERO, Vector3::FORWARD, Vector3::UP).unwrap();
        assert_eq!(
            view.to_rows(),
            [
                [-1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, -1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]
        );
    }

    #[test]
    fn translation_uses_projected_eye() {
        let eye = Vector3::new(1.0, 2.0, 3.0);
        let view = look_at(eye, eye + Vector3::BACK, Vector3::UP).unwrap();
        assert_eq!(view.column(3), Some([-1.0, -2.0, -3.0, 1.0]));
    }

    #[test]
    fn target_lands_on_negative_z_axis() {
        let eye = Vector3::new(4.0, -1.0, 2.0);
        let target = Vector3::new(-3.0, 5.0, 0.5);
        let view = look_at(eye, target, Vector3::UP).unwrap();

        let local = view.transform_point3(target);
        assert_abs_diff_eq!(local.x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(local.y, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(local.z, -eye.distance(target), epsilon = 1e-4);
    }

    #[test]
    fn up_does_not_need_to_be_unit_or_orthogonal() {
        let eye = Vector3::new(0.0, 0.0, 5.0);
        let reference = look_at(eye, Vector3::ZERO, Vector3::UP).unwrap();
        let tilted = look_at(eye, Vector3::ZERO, Vector3::new(0.0, 7.0, 3.0)).unwrap();
        assert!(glam::Mat4::from(reference).abs_diff_eq(tilted.into(), 1e-6));
    }

    #[test]
    fn degenerate_inputs() {
        let eye = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(
            look_at(eye, eye, Vector3::UP),
            Err(DegenerateInputError::ZeroForward)
        );
        assert_eq!(
            look_at(Vector3::ZERO, Vector3::UP, Vector3::UP),
            Err(DegenerateInputError::ParallelUp)
        );
        assert_eq!(
            look_at(Vector3::ZERO, Vector3::UP, Vector3::DOWN * 4.0),
            Err(DegenerateInputError::ParallelUp)
        );
        assert_eq!(
            look_at(Vector3::ZERO, Vector3::BACK, Vector3::ZERO),
            Err(DegenerateInputError::ParallelUp)
        );
        assert_eq!(
            look_to(eye, Vector3::ZERO, Vector3::UP),
            Err(DegenerateInputError::ZeroForward)
        );
    }
}
