//! Wire3D terminal viewer
//!
//! Projects the built-in pyramid through the camera and draws the
//! wireframe as ASCII. Controls:
//!   a/d, s/w, q/e - move the camera along X/Y/Z
//!   j/l, k/i, u/o - move the look-at point along X/Y/Z
//!   Esc           - quit

use anyhow::Context;
use wire3d_core::{Camera, Scene};
use wire3d_terminal::TerminalApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let camera = Camera::default();
    let scene = Scene::pyramid();
    log::info!("starting viewer with {} triangles", scene.triangles.len());

    let mut app = TerminalApp::new(camera, scene).context("initializing terminal")?;
    app.run()
}
