use std::ops::Range;

use crate::Matrix4x4;

/// Maps view space into clip space for a render surface of a given size.
#[derive(Clone, Debug, PartialEq)]
pub enum Projection {
    Perspective {
        surface_width: u32,
        surface_height: u32,
        /// vertical field of view in radians
        fov: f32,
        z_range: Range<f32>,
    },
    /// One world unit per pixel, centered on the line of sight.
    Orthographic {
        surface_width: u32,
        surface_height: u32,
        z_range: Range<f32>,
    },
}

impl Projection {
    #[must_use]
    pub fn new_perspective(
        (surface_width, surface_height): (u32, u32),
        fov: f32,
        z_range: Range<f32>,
    ) -> Self {
        Self::Perspective {
            surface_width,
            surface_height,
            fov,
            z_range,
        }
    }

    #[must_use]
    pub fn new_orthographic(
        (surface_width, surface_height): (u32, u32),
        z_range: Range<f32>,
    ) -> Self {
        Self::Orthographic {
            surface_width,
            surface_height,
            z_range,
        }
    }

    fn surface_dimensions(&self) -> (u32, u32) {
        match *self {
            Self::Perspective {
                surface_width,
                surface_height,
                ..
            }
            | Self::Orthographic {
                surface_width,
                surface_height,
                ..
            } => (surface_width, surface_height),
        }
    }

    fn z_range(&self) -> &Range<f32> {
        match *self {
            Self::Perspective { ref z_range, .. } | Self::Orthographic { ref z_range, .. } => {
                z_range
            }
        }
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "surface sizes are far below 2^24 pixels"
    )]
    fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.surface_dimensions();
        width as f32 / height as f32
    }

    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        reason = "surface sizes are far below 2^24 pixels"
    )]
    pub fn matrix(&self) -> Matrix4x4 {
        let Range { start, end } = *self.z_range();
        match *self {
            Self::Perspective { fov, .. } => {
                Matrix4x4::perspective_rh(fov, self.aspect_ratio(), start, end)
            }
            Self::Orthographic { .. } => {
                let (width, height) = self.surface_dimensions();
                let half_width = width as f32 / 2.0;
                let half_height = height as f32 / 2.0;
                Matrix4x4::orthographic_rh(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    start,
                    end,
                )
            }
        }
    }

    pub fn set_surface_dimensions(&mut self, (new_surface_width, new_surface_height): (u32, u32)) {
        match *self {
            Self::Perspective {
                ref mut surface_width,
                ref mut surface_height,
                ..
            }
            | Self::Orthographic {
                ref mut surface_width,
                ref mut surface_height,
                ..
            } => {
                *surface_width = new_surface_width;
                *surface_height = new_surface_height;
            }
        }
    }
}
