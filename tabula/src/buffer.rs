use crate::layout::Rect;
use crate::style::{Rgb, Style, TextStyle};
use crate::text::char_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// True for the trailing cell of a double-width character.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

impl Cell {
    pub fn new(char: char) -> Self {
        Self {
            char,
            ..Default::default()
        }
    }

    pub fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    pub fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

/// A width x height grid of cells the widgets draw into. Rendering never
/// touches the terminal directly; the terminal layer diffs two buffers and
/// writes only what changed.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    /// Write a string starting at (x, y), clipped to `max_width` cells and to
    /// the buffer edge. Double-width characters occupy two cells; a character
    /// that would straddle the clip edge is dropped. Returns the number of
    /// cells written.
    pub fn set_string(&mut self, x: u16, y: u16, s: &str, style: Style, max_width: u16) -> u16 {
        if y >= self.height || x >= self.width {
            return 0;
        }

        let fg = style
            .foreground
            .map(|c| c.to_rgb())
            .unwrap_or(Rgb::new(255, 255, 255));
        let bg = style
            .background
            .map(|c| c.to_rgb())
            .unwrap_or(Rgb::new(0, 0, 0));

        let limit = max_width.min(self.width - x);
        let mut offset: u16 = 0;

        for ch in s.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if offset + w > limit {
                break;
            }

            self.set(
                x + offset,
                y,
                Cell {
                    char: ch,
                    fg,
                    bg,
                    style: style.text_style,
                    wide_continuation: false,
                },
            );
            if w == 2 {
                self.set(
                    x + offset + 1,
                    y,
                    Cell {
                        char: ' ',
                        fg,
                        bg,
                        style: style.text_style,
                        wide_continuation: true,
                    },
                );
            }
            offset += w;
        }

        offset
    }

    /// Fill a rect with a single cell value, clipped to the buffer.
    pub fn fill(&mut self, area: Rect, cell: Cell) {
        let right = area.right().min(self.width);
        let bottom = area.bottom().min(self.height);
        for y in area.top()..bottom {
            for x in area.left()..right {
                self.set(x, y, cell);
            }
        }
    }

    /// Draw a border style around the edge of `area`. Areas smaller than
    /// 2x2 are skipped.
    pub fn draw_border(&mut self, area: Rect, border: crate::style::Border, style: Style) {
        let Some((h, v, tl, tr, bl, br)) = border.chars() else {
            return;
        };
        if area.width < 2 || area.height < 2 {
            return;
        }
        let right = area.right() - 1;
        let bottom = area.bottom() - 1;

        let mut horizontal = String::with_capacity((area.width as usize - 2) * h.len_utf8());
        for _ in area.x + 1..right {
            horizontal.push(h);
        }
        self.set_string(area.x + 1, area.y, &horizontal, style, area.width - 2);
        self.set_string(area.x + 1, bottom, &horizontal, style, area.width - 2);

        let vertical = v.to_string();
        for y in area.y + 1..bottom {
            self.set_string(area.x, y, &vertical, style, 1);
            self.set_string(right, y, &vertical, style, 1);
        }
        self.set_string(area.x, area.y, &tl.to_string(), style, 1);
        self.set_string(right, area.y, &tr.to_string(), style, 1);
        self.set_string(area.x, bottom, &bl.to_string(), style, 1);
        self.set_string(right, bottom, &br.to_string(), style, 1);
    }

    /// Iterate cells that differ from `other`, with their coordinates.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    /// The characters of one row as a string, trailing continuation cells
    /// skipped. Test helper, but generally useful for debugging.
    pub fn row_text(&self, y: u16) -> String {
        let mut s = String::new();
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                if !cell.wide_continuation {
                    s.push(cell.char);
                }
            }
        }
        s
    }
}
