//! Per-frame projection of a scene into 2D line segments.

use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::geometry::ScreenPoint;
use crate::scene::Scene;

/// A line between two screen positions, ready for a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSegment {
    pub start: ScreenPoint,
    pub end: ScreenPoint,
}

/// Projects the scene through the camera and returns the wireframe edges
/// to draw, three per triangle.
///
/// The combined camera transform is recomputed once up front, so any
/// movement applied since the previous frame takes effect here and no
/// vertex ever sees a stale transform. A triangle with a vertex on the
/// camera plane is dropped for this frame; a degenerate camera fails the
/// whole frame.
pub fn render_frame(camera: &mut Camera, scene: &mut Scene) -> Result<Vec<LineSegment>> {
    camera.calculate_transforms()?;

    let mut segments = Vec::with_capacity(scene.triangles.len() * 3);
    for triangle in &mut scene.triangles {
        match triangle.project(camera) {
            Ok(()) => {}
            Err(Error::ProjectionSingularity) => {
                log::debug!("skipping triangle with a vertex on the camera plane");
                continue;
            }
            Err(e) => return Err(e),
        }

        if let Some([a, b, c]) = triangle.screen_points() {
            segments.push(LineSegment { start: a, end: b });
            segments.push(LineSegment { start: a, end: c });
            segments.push(LineSegment { start: b, end: c });
        }
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Triangle, Vertex};

    #[test]
    fn test_pyramid_renders_twelve_segments() {
        let mut camera = Camera::default();
        let mut scene = Scene::pyramid();
        let segments = render_frame(&mut camera, &mut scene).unwrap();
        assert_eq!(segments.len(), 12);
    }

    #[test]
    fn test_camera_movement_changes_the_frame() {
        let mut camera = Camera::default();
        let mut scene = Scene::pyramid();

        let before = render_frame(&mut camera, &mut scene).unwrap();
        camera.move_by(10.0, 0.0, 0.0);
        let after = render_frame(&mut camera, &mut scene).unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn test_move_round_trip_reproduces_the_frame() {
        let mut camera = Camera::default();
        let mut scene = Scene::pyramid();

        let before = render_frame(&mut camera, &mut scene).unwrap();
        camera.move_by(10.0, -10.0, 10.0);
        render_frame(&mut camera, &mut scene).unwrap();
        camera.move_by(-10.0, 10.0, -10.0);
        let after = render_frame(&mut camera, &mut scene).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_singular_triangle_is_skipped_not_fatal() {
        let mut camera = Camera::default();
        let at_camera = Vertex::new(15.0, 20.0, 5.0);
        let mut scene = Scene::from_triangles(vec![
            Triangle::new(
                at_camera,
                Vertex::new(350.0, 10.0, 400.0),
                Vertex::new(400.0, -10.0, 350.0),
            ),
            Triangle::new(
                Vertex::new(400.0, 0.0, 400.0),
                Vertex::new(350.0, 10.0, 400.0),
                Vertex::new(400.0, -10.0, 350.0),
            ),
        ]);

        let segments = render_frame(&mut camera, &mut scene).unwrap();
        assert_eq!(segments.len(), 3);
    }

    #[test]
    fn test_degenerate_camera_fails_the_frame() {
        let mut camera = Camera::default();
        let mut scene = Scene::pyramid();
        let look_at = camera.look_at();
        let position = camera.position();
        camera.look_move(
            position.x - look_at.x,
            position.y - look_at.y,
            position.z - look_at.z,
        );
        assert_eq!(
            render_frame(&mut camera, &mut scene).err(),
            Some(Error::DegenerateGeometry)
        );
    }
}
