//! Vertices and triangles, with projection into screen space.

use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Vertices whose transformed `|w|` falls below this lie on the camera
/// plane and cannot be perspective-divided.
const W_EPSILON: f64 = 1e-9;

/// An integer pixel position with the origin at the top-left corner of
/// the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: i64,
    pub y: i64,
}

/// A homogeneous model-space point with a cached screen-space position.
///
/// The `x`/`y`/`z`/`w` components are immutable input data; the screen
/// cache is overwritten on every `project` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
    screen: Option<ScreenPoint>,
}

impl Vertex {
    /// Creates an object-space vertex with `w = 1`.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::with_w(x, y, z, 1.0)
    }

    pub fn with_w(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self {
            x,
            y,
            z,
            w,
            screen: None,
        }
    }

    /// The screen-space position cached by the last successful `project`
    /// call, if any.
    pub fn screen(&self) -> Option<ScreenPoint> {
        self.screen
    }

    fn to_column(self) -> Matrix {
        let mut column = Matrix::new(4, 1);
        column[(0, 0)] = self.x;
        column[(1, 0)] = self.y;
        column[(2, 0)] = self.z;
        column[(3, 0)] = self.w;
        column
    }

    /// Projects the vertex through the camera's cached combined transform
    /// and stores the resulting screen position.
    ///
    /// After the transform, the point is divided by its homogeneous `w`
    /// and the normalized device coordinates in [-1, 1] are mapped onto
    /// the viewport with the Y axis flipped for a top-left origin.
    /// Out-of-frustum vertices are not clipped and yield out-of-range
    /// screen coordinates; a vertex on the camera plane fails instead of
    /// propagating NaN.
    pub fn project(&mut self, camera: &Camera) -> Result<ScreenPoint> {
        let clip = camera.combined_transform().multiply(&self.to_column())?;

        let w = clip[(3, 0)];
        if w.abs() < W_EPSILON {
            return Err(Error::ProjectionSingularity);
        }
        let x = clip[(0, 0)] / w;
        let y = clip[(1, 0)] / w;

        let half_width = camera.viewport_width() / 2.0;
        let half_height = camera.viewport_height() / 2.0;
        let point = ScreenPoint {
            x: (x * half_width + half_width) as i64,
            y: (-y * half_height + half_height) as i64,
        };
        self.screen = Some(point);
        Ok(point)
    }
}

/// An ordered triple of vertices forming one wireframe face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vertex,
    pub b: Vertex,
    pub c: Vertex,
}

impl Triangle {
    pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self { a, b, c }
    }

    /// Re-projects all three vertices against the camera.
    pub fn project(&mut self, camera: &Camera) -> Result<()> {
        self.a.project(camera)?;
        self.b.project(camera)?;
        self.c.project(camera)?;
        Ok(())
    }

    /// The three cached screen positions, if every vertex has been
    /// projected.
    pub fn screen_points(&self) -> Option<[ScreenPoint; 3]> {
        Some([self.a.screen()?, self.b.screen()?, self.c.screen()?])
    }
}
