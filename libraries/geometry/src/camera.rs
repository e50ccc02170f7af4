use crate::{look_at, DegenerateInputError, Matrix4x4, Projection, Vector3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vector3,
    pub look_at: Vector3,
    pub up: Vector3,
}

impl Camera {
    #[must_use]
    pub fn new(eye: Vector3, center: Vector3) -> Self {
        Self {
            position: eye,
            look_at: center,
            up: Vector3::UP,
        }
    }

    #[must_use]
    pub fn with_up(self, up: Vector3) -> Self {
        Self { up, ..self }
    }

    /// # Errors
    ///
    /// [`DegenerateInputError`] if position and target coincide or `up` points along the line
    /// of sight.
    pub fn view_matrix(&self) -> Result<Matrix4x4, DegenerateInputError> {
        look_at(self.position, self.look_at, self.up)
    }

    /// # Errors
    ///
    /// See [`Self::view_matrix`].
    pub fn view_projection(
        &self,
        projection: &Projection,
    ) -> Result<Matrix4x4, DegenerateInputError> {
        Ok(projection.matrix() * self.view_matrix()?)
    }
}
