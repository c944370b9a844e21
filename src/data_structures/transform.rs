//! Model transforms and per-frame animation state.
//!
//! A [`Transform`] composes translation, rotation and scale into the model
//! matrix a lesson multiplies into its MVP. [`Spin`] is the animation state
//! for the rotating-cube lessons: an angle that only ever grows, advanced by
//! elapsed time rather than by frame count.

use cgmath::{Matrix4, One, Quaternion, Rad, Rotation3, Vector3};
use instant::Duration;

/// Position, rotation and scale of a rendered object.
#[derive(Clone, Debug)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub scale: Vector3<f32>,
}

impl Transform {
    /// Identity transform (no move, rotate, or scale).
    pub fn new() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            // `Quaternion::one()` is the identity quaternion (no rotation)
            rotation: Quaternion::one(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn to_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from(self.rotation)
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vector3<f32>> for Transform {
    fn from(position: Vector3<f32>) -> Self {
        Transform {
            position,
            ..Default::default()
        }
    }
}

/// Monotonic rotation around the vertical axis, advanced by elapsed time.
#[derive(Clone, Copy, Debug)]
pub struct Spin {
    pub angle: Rad<f32>,
    /// Angular speed per second.
    pub speed: Rad<f32>,
}

impl Spin {
    pub fn new<S: Into<Rad<f32>>>(speed: S) -> Self {
        Self {
            angle: Rad(0.0),
            speed: speed.into(),
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.angle += Rad(self.speed.0 * dt.as_secs_f32());
    }

    pub fn quaternion(&self) -> Quaternion<f32> {
        Quaternion::from_angle_y(self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Deg, SquareMatrix};

    #[test]
    fn default_transform_is_identity() {
        assert_eq!(Transform::new().to_matrix(), Matrix4::identity());
    }

    #[test]
    fn translation_lands_in_the_last_column() {
        let transform = Transform::from(Vector3::new(-1.5, 0.0, -2.0));
        let matrix = transform.to_matrix();
        assert_eq!(matrix.w.x, -1.5);
        assert_eq!(matrix.w.y, 0.0);
        assert_eq!(matrix.w.z, -2.0);
    }

    #[test]
    fn scale_lands_on_the_diagonal() {
        let transform = Transform {
            scale: Vector3::new(2.0, 3.0, 4.0),
            ..Default::default()
        };
        let matrix = transform.to_matrix();
        assert_eq!(matrix.x.x, 2.0);
        assert_eq!(matrix.y.y, 3.0);
        assert_eq!(matrix.z.z, 4.0);
    }

    #[test]
    fn spin_advances_monotonically_with_elapsed_time() {
        let mut spin = Spin::new(Deg(90.0));
        let mut previous = spin.angle;
        for _ in 0..10 {
            spin.advance(Duration::from_millis(16));
            assert!(spin.angle > previous);
            previous = spin.angle;
        }
    }

    #[test]
    fn spin_is_proportional_to_dt() {
        let mut spin = Spin::new(Rad(2.0));
        spin.advance(Duration::from_millis(500));
        assert!((spin.angle.0 - 1.0).abs() < 1e-6);
    }
}
