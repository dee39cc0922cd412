//! Interactive terminal shell for the wireframe viewer.

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{stdout, Write};
use wire3d_core::{render_frame, Camera, Scene};

pub mod renderer;

pub use renderer::WireframeCanvas;

/// Movement step applied per keypress, in world units.
const MOVE_STEP: f64 = 10.0;

const STATUS_LINE: &str =
    "wire3d | a/d s/w q/e: move camera | j/l k/i u/o: move look point | Esc: quit";

/// Event loop owning the camera, the scene and the canvas.
///
/// One frame is rendered per input event; the loop blocks on the next key
/// in between, so camera mutation never interleaves with an in-flight
/// projection pass.
pub struct TerminalApp {
    camera: Camera,
    scene: Scene,
    canvas: WireframeCanvas,
    running: bool,
}

impl TerminalApp {
    pub fn new(camera: Camera, scene: Scene) -> anyhow::Result<Self> {
        let (width, height) = terminal::size()?;
        let canvas = WireframeCanvas::new(
            width as usize,
            height as usize,
            camera.viewport_width(),
            camera.viewport_height(),
        );
        Ok(Self {
            camera,
            scene,
            canvas,
            running: true,
        })
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Always restore the terminal, error path included
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> anyhow::Result<()> {
        self.render()?;

        while self.running {
            match event::read()? {
                Event::Key(KeyEvent { code, .. }) => {
                    if self.handle_key(code) {
                        self.render()?;
                    }
                }
                Event::Resize(width, height) => {
                    self.canvas = WireframeCanvas::new(
                        width as usize,
                        height as usize,
                        self.camera.viewport_width(),
                        self.camera.viewport_height(),
                    );
                    self.render()?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Applies one movement command. Returns true when the camera changed
    /// and the frame needs a redraw.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        let camera = &mut self.camera;
        match code {
            KeyCode::Esc => {
                self.running = false;
                false
            }
            // Camera position
            KeyCode::Char('a') => {
                camera.move_by(-MOVE_STEP, 0.0, 0.0);
                true
            }
            KeyCode::Char('d') => {
                camera.move_by(MOVE_STEP, 0.0, 0.0);
                true
            }
            KeyCode::Char('s') => {
                camera.move_by(0.0, -MOVE_STEP, 0.0);
                true
            }
            KeyCode::Char('w') => {
                camera.move_by(0.0, MOVE_STEP, 0.0);
                true
            }
            KeyCode::Char('q') => {
                camera.move_by(0.0, 0.0, -MOVE_STEP);
                true
            }
            KeyCode::Char('e') => {
                camera.move_by(0.0, 0.0, MOVE_STEP);
                true
            }
            // Look-at point
            KeyCode::Char('j') => {
                camera.look_move(-MOVE_STEP, 0.0, 0.0);
                true
            }
            KeyCode::Char('l') => {
                camera.look_move(MOVE_STEP, 0.0, 0.0);
                true
            }
            KeyCode::Char('k') => {
                camera.look_move(0.0, -MOVE_STEP, 0.0);
                true
            }
            KeyCode::Char('i') => {
                camera.look_move(0.0, MOVE_STEP, 0.0);
                true
            }
            KeyCode::Char('u') => {
                camera.look_move(0.0, 0.0, -MOVE_STEP);
                true
            }
            KeyCode::Char('o') => {
                camera.look_move(0.0, 0.0, MOVE_STEP);
                true
            }
            _ => false,
        }
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let segments = match render_frame(&mut self.camera, &mut self.scene) {
            Ok(segments) => segments,
            Err(e) => {
                // A degenerate camera skips the frame and keeps the
                // previous picture; the next movement can recover it.
                log::warn!("skipping frame: {e}");
                return Ok(());
            }
        };

        self.canvas.clear();
        for segment in &segments {
            self.canvas.draw_segment(segment);
        }

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.canvas.draw(&mut stdout)?;
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(STATUS_LINE),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire3d_core::Vector3;

    fn app() -> TerminalApp {
        TerminalApp {
            camera: Camera::default(),
            scene: Scene::pyramid(),
            canvas: WireframeCanvas::new(80, 24, 600.0, 337.5),
            running: true,
        }
    }

    #[test]
    fn test_movement_keys_shift_the_camera() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('d')));
        assert!(app.handle_key(KeyCode::Char('w')));
        assert!(app.handle_key(KeyCode::Char('q')));
        assert_eq!(app.camera.position(), Vector3::new(25.0, 30.0, -5.0));
        assert_eq!(app.camera.look_at(), Vector3::new(400.0, 0.0, 400.0));
    }

    #[test]
    fn test_look_keys_shift_the_look_point() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('j')));
        assert!(app.handle_key(KeyCode::Char('i')));
        assert!(app.handle_key(KeyCode::Char('o')));
        assert_eq!(app.camera.look_at(), Vector3::new(390.0, 10.0, 410.0));
        assert_eq!(app.camera.position(), Vector3::new(15.0, 20.0, 5.0));
    }

    #[test]
    fn test_escape_stops_the_loop_without_redraw() {
        let mut app = app();
        assert!(!app.handle_key(KeyCode::Esc));
        assert!(!app.running);
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut app = app();
        let position = app.camera.position();
        assert!(!app.handle_key(KeyCode::Char('x')));
        assert!(!app.handle_key(KeyCode::Enter));
        assert_eq!(app.camera.position(), position);
    }
}
