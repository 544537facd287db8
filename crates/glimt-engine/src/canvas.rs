//! Cell canvas the render passes draw onto.
//!
//! A canvas is a width by height grid of optional styled glyphs over a
//! background color. Passes write cells in order; later writes win. The
//! finished frame is converted to [`ratatui`] lines for the host widget.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

#[derive(Debug, Clone)]
pub struct Canvas {
    width: u16,
    height: u16,
    bg: Color,
    cells: Vec<Option<(char, Color)>>,
}

impl Canvas {
    pub fn new(width: u16, height: u16, bg: Color) -> Self {
        Self {
            width,
            height,
            bg,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Drop all drawn glyphs, keeping size and background.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Resize the grid, discarding the previous frame.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![None; width as usize * height as usize];
    }

    pub fn set_background(&mut self, bg: Color) {
        self.bg = bg;
    }

    pub fn background(&self) -> Color {
        self.bg
    }

    /// Draw one glyph. Out-of-bounds coordinates are ignored.
    pub fn put(&mut self, x: i32, y: i32, glyph: char, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.cells[idx] = Some((glyph, color));
    }

    /// Draw a line between two points by sampling along the longer axis.
    pub fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, glyph: char, color: Color) {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let steps = dx.abs().max(dy.abs()).ceil() as i32;
        if steps == 0 {
            self.put(x0.round() as i32, y0.round() as i32, glyph, color);
            return;
        }
        for k in 0..=steps {
            let t = k as f32 / steps as f32;
            let x = (x0 + dx * t).round() as i32;
            let y = (y0 + dy * t).round() as i32;
            self.put(x, y, glyph, color);
        }
    }

    /// The glyph at a cell, if one was drawn.
    pub fn glyph_at(&self, x: u16, y: u16) -> Option<(char, Color)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Number of cells holding a drawn glyph.
    pub fn drawn_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Render the frame as styled lines for a `Paragraph`.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.height as usize);
        for y in 0..self.height {
            let mut spans = Vec::with_capacity(self.width as usize);
            for x in 0..self.width {
                let idx = y as usize * self.width as usize + x as usize;
                let span = match self.cells[idx] {
                    Some((glyph, fg)) => Span::styled(
                        glyph.to_string(),
                        Style::default().fg(fg).bg(self.bg),
                    ),
                    None => Span::styled(" ".to_string(), Style::default().bg(self.bg)),
                };
                spans.push(span);
            }
            lines.push(Line::from(spans));
        }
        lines
    }
}
