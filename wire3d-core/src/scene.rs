//! Scene construction.

use crate::geometry::{Triangle, Vertex};

/// The collection of triangles handed to the renderer each frame.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub triangles: Vec<Triangle>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Wraps a caller-supplied triangle list.
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Builds the default pyramid: a square base of side 100 in the y = 0
    /// plane with the apex centered 75 units above it. All four faces
    /// share the apex vertex.
    pub fn pyramid() -> Self {
        const NEAR: f64 = 50.0;
        const MID: f64 = 100.0;
        const FAR: f64 = 150.0;
        const HEIGHT: f64 = 75.0;

        let v1 = Vertex::new(NEAR, 0.0, NEAR);
        let v2 = Vertex::new(FAR, 0.0, NEAR);
        let v3 = Vertex::new(NEAR, 0.0, FAR);
        let v4 = Vertex::new(FAR, 0.0, FAR);
        let apex = Vertex::new(MID, HEIGHT, MID);

        Self::from_triangles(vec![
            Triangle::new(v1, v2, apex),
            Triangle::new(v1, v3, apex),
            Triangle::new(v2, v4, apex),
            Triangle::new(v3, v4, apex),
        ])
    }
}
