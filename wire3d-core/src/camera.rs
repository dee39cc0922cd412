//! Camera state and the view/perspective transform pipeline.

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::vector::Vector3;

/// The camera viewing the 3D world.
///
/// The camera looks down negative Z in its own right-handed frame, so
/// `near` and `far` are negative distances along the view axis and a valid
/// configuration satisfies `far < near < 0`. The viewport dimensions are
/// derived once at construction from near plane, field of view and aspect
/// ratio.
///
/// The combined transform is a cache: it is only valid until the next
/// `move_by` or `look_move`, and `calculate_transforms` must run once per
/// frame before any vertex is projected against it.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vector3,
    look_at: Vector3,
    up: Vector3,
    near: f64,
    far: f64,
    fov_degrees: f64,
    aspect_ratio: f64,
    viewport_width: f64,
    viewport_height: f64,
    transform: Matrix,
}

impl Camera {
    /// Creates a camera and eagerly computes its combined transform, so a
    /// degenerate configuration (coincident position and look-at point, up
    /// vector parallel to the view direction, or misordered clip planes)
    /// is rejected here rather than at the first frame.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        position: Vector3,
        look_at: Vector3,
        up: Vector3,
        near: f64,
        far: f64,
        fov_degrees: f64,
        aspect_ratio: f64,
    ) -> Result<Self> {
        if !(far < near && near < 0.0) {
            return Err(Error::InvalidClipPlanes { near, far });
        }

        let fov_radians = fov_degrees.to_radians();
        let viewport_width = -2.0 * near * (fov_radians / 2.0).tan();
        let viewport_height = viewport_width / aspect_ratio;

        let mut camera = Self {
            position,
            look_at,
            up,
            near,
            far,
            fov_degrees,
            aspect_ratio,
            viewport_width,
            viewport_height,
            transform: Matrix::identity(4),
        };
        camera.calculate_transforms()?;
        Ok(camera)
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn look_at(&self) -> Vector3 {
        self.look_at
    }

    pub fn fov_degrees(&self) -> f64 {
        self.fov_degrees
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Width of the viewport in pixels, derived at construction.
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Height of the viewport in pixels, derived at construction.
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// The cached combination of all three transforms, as of the last
    /// `calculate_transforms` call.
    pub fn combined_transform(&self) -> &Matrix {
        &self.transform
    }

    /// Translation moving the world so the camera sits at the origin.
    pub fn location_transform(&self) -> Matrix {
        let mut transform = Matrix::identity(4);
        transform[(0, 3)] = -self.position.x;
        transform[(1, 3)] = -self.position.y;
        transform[(2, 3)] = -self.position.z;
        transform
    }

    /// Rotation aligning world axes with the camera basis.
    ///
    /// The basis is `n` along the view direction, `u` to the right and `v`
    /// the recomputed up axis; the rows of the rotation are `u`, `v`, `n`.
    /// Fails when the position coincides with the look-at point or the up
    /// vector is parallel to the view direction.
    pub fn look_transform(&self) -> Result<Matrix> {
        let direction = self.look_at - self.position;

        let n = direction.normalize()?;
        let u = Vector3::cross(self.up, n).normalize()?;
        let v = Vector3::cross(n, u).normalize()?;

        let mut transform = Matrix::new(4, 4);
        transform[(0, 0)] = u.x;
        transform[(0, 1)] = u.y;
        transform[(0, 2)] = u.z;

        transform[(1, 0)] = v.x;
        transform[(1, 1)] = v.y;
        transform[(1, 2)] = v.z;

        transform[(2, 0)] = n.x;
        transform[(2, 1)] = n.y;
        transform[(2, 2)] = n.z;

        transform[(3, 3)] = 1.0;
        Ok(transform)
    }

    /// Perspective projection onto the near plane.
    pub fn perspective_transform(&self) -> Matrix {
        let mut transform = Matrix::new(4, 4);
        transform[(0, 0)] = 2.0 * self.near / self.viewport_width;
        transform[(1, 1)] = 2.0 * self.near / self.viewport_height;
        transform[(2, 2)] = -(self.far + self.near) / (self.far - self.near);
        transform[(2, 3)] = -2.0 * self.far * self.near / (self.far - self.near);
        transform[(3, 2)] = -1.0;
        transform
    }

    /// Recomputes the combined transform as
    /// `perspective * look * location`, in exactly that order, and caches
    /// the result. Call once per frame before projecting vertices.
    pub fn calculate_transforms(&mut self) -> Result<&Matrix> {
        let combined = self
            .perspective_transform()
            .multiply(&self.look_transform()?)?
            .multiply(&self.location_transform())?;

        log::trace!("recomputed camera transform at position {:?}", self.position);
        self.transform = combined;
        Ok(&self.transform)
    }

    /// Shifts the camera position. The cached transform is left stale
    /// until the next frame recomputes it.
    pub fn move_by(&mut self, dx: f64, dy: f64, dz: f64) {
        self.position.x += dx;
        self.position.y += dy;
        self.position.z += dz;
    }

    /// Shifts the look-at point. The cached transform is left stale until
    /// the next frame recomputes it.
    pub fn look_move(&mut self, dx: f64, dy: f64, dz: f64) {
        self.look_at.x += dx;
        self.look_at.y += dy;
        self.look_at.z += dz;
    }
}

impl Default for Camera {
    /// The reference configuration: a camera a little off the origin
    /// looking toward (400, 0, 400) with a 90 degree field of view.
    fn default() -> Self {
        Camera::new(
            Vector3::new(15.0, 20.0, 5.0),
            Vector3::new(400.0, 0.0, 400.0),
            Vector3::new(0.0, 1.0, 0.0),
            -300.0,
            -5000.0,
            90.0,
            16.0 / 9.0,
        )
        .expect("reference camera configuration is valid")
    }
}
