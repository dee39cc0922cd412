//! Prints the projected wireframe edges for the default camera and the
//! built-in pyramid, one line per segment. Useful for checking the
//! projection pipeline without a terminal shell.

use wire3d_core::{render_frame, Camera, Scene};

fn main() -> wire3d_core::Result<()> {
    let mut camera = Camera::default();
    let mut scene = Scene::pyramid();

    for segment in render_frame(&mut camera, &mut scene)? {
        println!(
            "({}, {}) -> ({}, {})",
            segment.start.x, segment.start.y, segment.end.x, segment.end.y
        );
    }
    Ok(())
}
