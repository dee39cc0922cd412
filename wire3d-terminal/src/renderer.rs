//! ASCII canvas that rasterizes wireframe line segments into terminal
//! cells.

use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wire3d_core::{LineSegment, ScreenPoint};

const LINE_CHAR: char = '*';
const LINE_COLOR: Color = Color::Red;

// Cohen-Sutherland outcodes
const INSIDE: u8 = 0b0000;
const LEFT: u8 = 0b0001;
const RIGHT: u8 = 0b0010;
const BOTTOM: u8 = 0b0100;
const TOP: u8 = 0b1000;

/// A character buffer the size of the terminal.
///
/// Segments arrive in camera viewport pixel coordinates and are scaled
/// down to cell coordinates before rasterization. The core does no
/// clipping, so segment endpoints can land far outside the buffer; the
/// canvas clips each segment to its own bounds and discards everything
/// else.
pub struct WireframeCanvas {
    width: usize,
    height: usize,
    scale_x: f64,
    scale_y: f64,
    cells: Vec<char>,
}

impl WireframeCanvas {
    pub fn new(width: usize, height: usize, viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            width,
            height,
            scale_x: width as f64 / viewport_width,
            scale_y: height as f64 / viewport_height,
            cells: vec![' '; width * height],
        }
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = ' ';
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> char {
        self.cells[y * self.width + x]
    }

    /// Rasterizes one segment into the buffer with integer Bresenham,
    /// after clipping it to the canvas bounds.
    pub fn draw_segment(&mut self, segment: &LineSegment) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let (x0, y0) = self.to_cell(segment.start);
        let (x1, y1) = self.to_cell(segment.end);

        let Some((x0, y0, x1, y1)) = self.clip(x0, y0, x1, y1) else {
            return;
        };

        let (mut x, mut y) = (x0.round() as i64, y0.round() as i64);
        let (end_x, end_y) = (x1.round() as i64, y1.round() as i64);

        let dx = (end_x - x).abs();
        let dy = -(end_y - y).abs();
        let step_x = if x < end_x { 1 } else { -1 };
        let step_y = if y < end_y { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y);
            if x == end_x && y == end_y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += step_x;
            }
            if e2 <= dx {
                err += dx;
                y += step_y;
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(LINE_COLOR))?;
        for y in 0..self.height {
            for x in 0..self.width {
                writer.queue(Print(self.cell(x, y)))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }

    fn to_cell(&self, point: ScreenPoint) -> (f64, f64) {
        (point.x as f64 * self.scale_x, point.y as f64 * self.scale_y)
    }

    fn plot(&mut self, x: i64, y: i64) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = LINE_CHAR;
    }

    fn outcode(&self, x: f64, y: f64) -> u8 {
        let mut code = INSIDE;
        if x < 0.0 {
            code |= LEFT;
        } else if x > self.width as f64 - 1.0 {
            code |= RIGHT;
        }
        if y < 0.0 {
            code |= TOP;
        } else if y > self.height as f64 - 1.0 {
            code |= BOTTOM;
        }
        code
    }

    /// Cohen-Sutherland clip of a segment against the cell rectangle.
    /// Returns `None` when nothing of the segment is visible.
    fn clip(&self, mut x0: f64, mut y0: f64, mut x1: f64, mut y1: f64) -> Option<(f64, f64, f64, f64)> {
        let x_max = self.width as f64 - 1.0;
        let y_max = self.height as f64 - 1.0;

        let mut code0 = self.outcode(x0, y0);
        let mut code1 = self.outcode(x1, y1);

        loop {
            if code0 | code1 == INSIDE {
                return Some((x0, y0, x1, y1));
            }
            if code0 & code1 != INSIDE {
                return None;
            }

            let out = if code0 != INSIDE { code0 } else { code1 };
            let (x, y) = if out & TOP != INSIDE {
                (x0 + (x1 - x0) * (0.0 - y0) / (y1 - y0), 0.0)
            } else if out & BOTTOM != INSIDE {
                (x0 + (x1 - x0) * (y_max - y0) / (y1 - y0), y_max)
            } else if out & RIGHT != INSIDE {
                (x_max, y0 + (y1 - y0) * (x_max - x0) / (x1 - x0))
            } else {
                (0.0, y0 + (y1 - y0) * (0.0 - x0) / (x1 - x0))
            };

            if out == code0 {
                x0 = x;
                y0 = y;
                code0 = self.outcode(x0, y0);
            } else {
                x1 = x;
                y1 = y;
                code1 = self.outcode(x1, y1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_canvas(width: usize, height: usize) -> WireframeCanvas {
        // Viewport dimensions equal to the cell grid, so scale is 1:1.
        WireframeCanvas::new(width, height, width as f64, height as f64)
    }

    fn segment(x0: i64, y0: i64, x1: i64, y1: i64) -> LineSegment {
        LineSegment {
            start: ScreenPoint { x: x0, y: y0 },
            end: ScreenPoint { x: x1, y: y1 },
        }
    }

    fn lit_cells(canvas: &WireframeCanvas, width: usize, height: usize) -> usize {
        let mut count = 0;
        for y in 0..height {
            for x in 0..width {
                if canvas.cell(x, y) != ' ' {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_segment_covers_both_endpoints() {
        let mut canvas = unit_canvas(20, 10);
        canvas.draw_segment(&segment(2, 3, 15, 8));
        assert_eq!(canvas.cell(2, 3), '*');
        assert_eq!(canvas.cell(15, 8), '*');
    }

    #[test]
    fn test_clear_resets_cells() {
        let mut canvas = unit_canvas(20, 10);
        canvas.draw_segment(&segment(0, 0, 19, 9));
        canvas.clear();
        assert_eq!(lit_cells(&canvas, 20, 10), 0);
    }

    #[test]
    fn test_fully_off_canvas_segment_is_discarded() {
        let mut canvas = unit_canvas(20, 10);
        canvas.draw_segment(&segment(100, 100, 200, 150));
        assert_eq!(lit_cells(&canvas, 20, 10), 0);
    }

    #[test]
    fn test_partially_visible_segment_is_clipped_not_dropped() {
        let mut canvas = unit_canvas(20, 10);
        canvas.draw_segment(&segment(5, 5, 500_000, 5));
        assert_eq!(canvas.cell(5, 5), '*');
        assert_eq!(canvas.cell(19, 5), '*');
    }

    #[test]
    fn test_far_out_of_range_coordinates_do_not_hang() {
        // No 3D clipping upstream means near-singular vertices can yield
        // enormous coordinates; the canvas must stay O(width + height).
        let mut canvas = unit_canvas(20, 10);
        canvas.draw_segment(&segment(-4_000_000_000, -3_000_000_000, 5_000_000_000, 2_000_000_000));
        canvas.draw_segment(&segment(3, -2_000_000_000, 3, 2_000_000_000));
        assert_eq!(canvas.cell(3, 0), '*');
    }

    #[test]
    fn test_viewport_scaling_maps_center_to_center() {
        // Viewport (300, 168) scales to cell (40, 168 * 24 / 337.5) = (40, ~12).
        let mut canvas = WireframeCanvas::new(80, 24, 600.0, 337.5);
        canvas.draw_segment(&segment(300, 168, 300, 168));
        assert_eq!(canvas.cell(40, 12), '*');
    }
}
