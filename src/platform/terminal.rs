//! Terminal drawing backend
//!
//! Rasterizes a recorded frame into a grid of colored character cells, scaled
//! from the logical 800x600 screen to the terminal size, then writes the grid
//! with crossterm.

use std::io::{self, Write};

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Color as TermColor, Print},
};
use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::palette::{BLACK, Color};
use crate::renderer::{DrawCommand, DrawList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Color,
}

const BLANK: Cell = Cell { ch: ' ', fg: BLACK };

#[derive(Debug, Clone)]
pub struct TerminalSurface {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl TerminalSurface {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![BLANK; usize::from(cols) * usize::from(rows)],
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        log::debug!("Terminal resized to {cols}x{rows}");
        *self = Self::new(cols, rows);
    }

    /// Cells per logical unit along each axis
    fn scale(&self) -> Vec2 {
        Vec2::new(
            f32::from(self.cols) / SCREEN_WIDTH,
            f32::from(self.rows) / SCREEN_HEIGHT,
        )
    }

    fn to_cell(&self, p: Vec2) -> (i32, i32) {
        let c = p * self.scale();
        (c.x.floor() as i32, c.y.floor() as i32)
    }

    fn put(&mut self, col: i32, row: i32, ch: char, fg: Color) {
        if col < 0 || row < 0 || col >= i32::from(self.cols) || row >= i32::from(self.rows) {
            return;
        }
        let index = row as usize * usize::from(self.cols) + col as usize;
        self.cells[index] = Cell { ch, fg };
    }

    /// Paint every command of `list` into the cell grid
    pub fn rasterize(&mut self, list: &DrawList) {
        for command in list.commands() {
            match command {
                DrawCommand::Clear(_) => self.cells.fill(BLANK),
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => self.fill_circle(*center, *radius, *color),
                DrawCommand::Rect { pos, size, color } => self.fill_rect(*pos, *size, *color),
                DrawCommand::RectOutline { pos, size, color } => {
                    self.outline_rect(*pos, *size, *color)
                }
                DrawCommand::Line { from, to, color } => self.line(*from, *to, *color),
                DrawCommand::Text {
                    text, pos, color, ..
                } => {
                    let (col, row) = self.to_cell(*pos);
                    for (i, ch) in text.chars().enumerate() {
                        self.put(col + i as i32, row, ch, *color);
                    }
                }
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let scale = self.scale();
        let (c0, r0) = self.to_cell(center - Vec2::splat(radius));
        let (c1, r1) = self.to_cell(center + Vec2::splat(radius));
        let mut painted = false;
        for row in r0..=r1 {
            for col in c0..=c1 {
                let cell_center = Vec2::new(col as f32 + 0.5, row as f32 + 0.5) / scale;
                if cell_center.distance(center) <= radius {
                    self.put(col, row, '█', color);
                    painted = true;
                }
            }
        }
        // Smaller than a cell
        if !painted {
            let (col, row) = self.to_cell(center);
            self.put(col, row, '●', color);
        }
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        let (c0, r0) = self.to_cell(pos);
        let (c1, r1) = self.to_cell(pos + size);
        for row in r0..=r1.max(r0 + 1) - 1 {
            for col in c0..=c1.max(c0 + 1) - 1 {
                self.put(col, row, '█', color);
            }
        }
    }

    fn outline_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        let (c0, r0) = self.to_cell(pos);
        let (c1, r1) = self.to_cell(pos + size);
        let (c1, r1) = (c1 - 1, r1 - 1);
        for col in c0 + 1..c1 {
            self.put(col, r0, '─', color);
            self.put(col, r1, '─', color);
        }
        for row in r0 + 1..r1 {
            self.put(c0, row, '│', color);
            self.put(c1, row, '│', color);
        }
        self.put(c0, r0, '┌', color);
        self.put(c1, r0, '┐', color);
        self.put(c0, r1, '└', color);
        self.put(c1, r1, '┘', color);
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let (c0, r0) = self.to_cell(from);
        let (c1, r1) = self.to_cell(to);
        let steps = (c1 - c0).abs().max((r1 - r0).abs());
        for i in 0..=steps {
            let t = if steps == 0 { 0.0 } else { i as f32 / steps as f32 };
            let col = c0 as f32 + (c1 - c0) as f32 * t;
            let row = r0 as f32 + (r1 - r0) as f32 * t;
            self.put(col.round() as i32, row.round() as i32, '·', color);
        }
    }

    /// Row `row` as plain text
    pub fn row_text(&self, row: u16) -> String {
        let start = usize::from(row) * usize::from(self.cols);
        self.cells[start..start + usize::from(self.cols)]
            .iter()
            .map(|c| c.ch)
            .collect()
    }

    /// Rasterize `list` and write the whole grid
    pub fn present<W: Write>(&mut self, out: &mut W, list: &DrawList) -> io::Result<()> {
        self.rasterize(list);

        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;
            let start = usize::from(row) * usize::from(self.cols);
            let line = &self.cells[start..start + usize::from(self.cols)];

            let mut current: Option<Color> = None;
            let mut run = String::new();
            for cell in line {
                if current != Some(cell.fg) {
                    if let Some(fg) = current {
                        out.queue(style::SetForegroundColor(term_color(fg)))?;
                        out.queue(Print(&run))?;
                        run.clear();
                    }
                    current = Some(cell.fg);
                }
                run.push(cell.ch);
            }
            if let Some(fg) = current {
                out.queue(style::SetForegroundColor(term_color(fg)))?;
                out.queue(Print(&run))?;
            }
        }

        out.queue(style::ResetColor)?;
        out.flush()
    }
}

fn term_color(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{GREEN, RED, WHITE};
    use crate::renderer::Surface;

    // 80x60 cells: ten logical units per cell
    fn surface() -> TerminalSurface {
        TerminalSurface::new(80, 60)
    }

    #[test]
    fn test_text_lands_on_scaled_cell() {
        let mut term = surface();
        let mut list = DrawList::new();
        list.clear(BLACK);
        list.text("HI", Vec2::new(35.0, 25.0), 20.0, WHITE);
        term.rasterize(&list);
        assert_eq!(&term.row_text(2)[3..5], "HI");
    }

    #[test]
    fn test_text_is_clipped() {
        let mut term = surface();
        let mut list = DrawList::new();
        list.text("OVERFLOW", Vec2::new(770.0, 0.0), 20.0, WHITE);
        list.text("GONE", Vec2::new(-100.0, -50.0), 20.0, WHITE);
        term.rasterize(&list);
        assert!(term.row_text(0).ends_with("OVE"));
    }

    #[test]
    fn test_small_circle_still_visible() {
        let mut term = surface();
        let mut list = DrawList::new();
        list.circle(Vec2::new(401.0, 301.0), 2.0, RED);
        term.rasterize(&list);
        assert_eq!(term.row_text(30).chars().nth(40), Some('●'));
    }

    #[test]
    fn test_outline_corners() {
        let mut term = surface();
        let mut list = DrawList::new();
        list.rect_outline(Vec2::ZERO, Vec2::new(800.0, 600.0), GREEN);
        term.rasterize(&list);
        let top = term.row_text(0);
        assert!(top.starts_with('┌'));
        assert!(top.ends_with('┐'));
        assert!(term.row_text(59).starts_with('└'));
        assert_eq!(term.row_text(30).chars().nth(79), Some('│'));
    }

    #[test]
    fn test_clear_blanks_grid() {
        let mut term = surface();
        let mut list = DrawList::new();
        list.rect(Vec2::ZERO, Vec2::new(800.0, 600.0), RED);
        term.rasterize(&list);
        assert!(term.row_text(10).chars().all(|c| c == '█'));

        list.clear(BLACK);
        term.rasterize(&list);
        assert!(term.row_text(10).chars().all(|c| c == ' '));
    }

    #[test]
    fn test_present_writes_every_row() {
        let mut term = TerminalSurface::new(8, 3);
        let mut list = DrawList::new();
        list.clear(BLACK);
        list.text("ok", Vec2::ZERO, 20.0, WHITE);

        let mut out = Vec::new();
        term.present(&mut out, &list).unwrap();
        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("ok"));
    }
}
