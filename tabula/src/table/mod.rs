mod row;
mod state;

pub use row::{CellValue, TableRow};
pub use state::{RowHandle, TableState};

use crate::buffer::Buffer;
use crate::layout::Rect;
use crate::style::{Border, Color, Style};
use crate::text::{display_width, pad_to_width, truncate_to_width};

/// Describes how one field of a row is projected and labelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub header: String,
    /// Whether this column shows the active-sort marker. Sorting itself is
    /// gated only by the table-wide sortable flag.
    pub sortable: bool,
}

impl Column {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: false,
        }
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }
}

/// Direction for a manual row shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    Up,
    Down,
}

/// What the table widget shows for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Loading,
    Empty,
    Populated,
}

/// Events emitted by table operations, for the caller to observe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// The selection changed. Payload: selected row indices, in the order
    /// the rows were selected.
    SelectionChanged(Vec<usize>),
    /// The rows were sorted by a column.
    Sorted { key: String },
    /// A row was manually moved.
    RowShifted { from: usize, to: usize },
}

/// The table widget itself: column layout plus presentation knobs. Holds no
/// row data; pair it with a [`TableState`] when rendering.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    border: Border,
    style: Style,
    header_style: Style,
    cursor_style: Style,
    selected_style: Style,
    loading_text: String,
    empty_text: String,
}

const SELECT_COL_WIDTH: u16 = 3;
const SHIFT_COL_WIDTH: u16 = 1;
const COL_GAP: u16 = 1;

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            border: Border::Single,
            style: Style::new(),
            header_style: Style::new().bold(),
            cursor_style: Style::new().background(Color::oklch(0.32, 0.02, 250.0)),
            selected_style: Style::new().foreground(Color::oklch(0.8, 0.12, 150.0)),
            loading_text: "Loading...".to_string(),
            empty_text: "No data available".to_string(),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = style;
        self
    }

    pub fn cursor_style(mut self, style: Style) -> Self {
        self.cursor_style = style;
        self
    }

    pub fn selected_style(mut self, style: Style) -> Self {
        self.selected_style = style;
        self
    }

    pub fn loading_text(mut self, text: impl Into<String>) -> Self {
        self.loading_text = text.into();
        self
    }

    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// Draw the table for `state` into `area`. Loading and empty modes
    /// replace the table with their indicator text.
    pub fn render<T: TableRow>(&self, state: &TableState<T>, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        match state.display_mode() {
            DisplayMode::Loading => {
                buf.set_string(area.x, area.y, &self.loading_text, self.style, area.width);
            }
            DisplayMode::Empty => {
                buf.set_string(area.x, area.y, &self.empty_text, self.style, area.width);
            }
            DisplayMode::Populated => self.render_rows(state, area, buf),
        }
    }

    fn render_rows<T: TableRow>(&self, state: &TableState<T>, area: Rect, buf: &mut Buffer) {
        let inner = if self.border == Border::None {
            area
        } else {
            buf.draw_border(area, self.border, self.style);
            area.inner()
        };
        if inner.is_empty() {
            return;
        }

        // Fixed leading columns for selection checkboxes and shift handles.
        let mut x = inner.x;
        let mut fixed = 0;
        if state.is_selectable() {
            fixed += SELECT_COL_WIDTH + COL_GAP;
        }
        if state.is_row_sortable() {
            fixed += SHIFT_COL_WIDTH + COL_GAP;
        }

        let mut widths = self.natural_widths(state);
        fit_widths(&mut widths, inner.width.saturating_sub(fixed));

        // Header row.
        let header_y = inner.y;
        if state.is_selectable() {
            x += SELECT_COL_WIDTH + COL_GAP;
        }
        if state.is_row_sortable() {
            x += SHIFT_COL_WIDTH + COL_GAP;
        }
        for (column, width) in self.columns.iter().zip(&widths) {
            let mut header = column.header.clone();
            if state.is_sortable()
                && column.sortable
                && state.sort_key() == Some(column.key.as_str())
            {
                header.push_str(" ▼");
            }
            let header =
                pad_to_width(&truncate_to_width(&header, *width as usize), *width as usize);
            buf.set_string(x, header_y, &header, self.header_style, *width);
            x += width + COL_GAP;
        }

        // Separator under the header.
        if inner.height > 1 {
            let line: String = "─".repeat(inner.width as usize);
            buf.set_string(inner.x, header_y + 1, &line, self.style.dim(), inner.width);
        }

        // Data rows.
        let first_row_y = header_y + 2;
        for (index, row) in state.rows().enumerate() {
            let y = first_row_y + index as u16;
            if y >= inner.bottom() {
                break;
            }

            let style = if index == state.cursor() {
                self.cursor_style
            } else if state.is_selected(index) {
                self.selected_style
            } else {
                self.style
            };

            let mut x = inner.x;
            if state.is_selectable() {
                let marker = if state.is_selected(index) {
                    "[x]"
                } else {
                    "[ ]"
                };
                buf.set_string(x, y, marker, style, SELECT_COL_WIDTH);
                x += SELECT_COL_WIDTH + COL_GAP;
            }
            if state.is_row_sortable() {
                buf.set_string(x, y, "↕", style, SHIFT_COL_WIDTH);
                x += SHIFT_COL_WIDTH + COL_GAP;
            }
            for (column, width) in self.columns.iter().zip(&widths) {
                let value = row.cell(&column.key).display();
                let cell =
                    pad_to_width(&truncate_to_width(&value, *width as usize), *width as usize);
                buf.set_string(x, y, &cell, style, *width);
                x += width + COL_GAP;
            }
        }
    }

    /// Width each data column would take untruncated: the wider of the
    /// header (plus sort marker room) and the widest cell.
    fn natural_widths<T: TableRow>(&self, state: &TableState<T>) -> Vec<u16> {
        self.columns
            .iter()
            .map(|column| {
                let mut width = display_width(&column.header);
                if state.is_sortable() && column.sortable {
                    width += 2; // " ▼"
                }
                for row in state.rows() {
                    width = width.max(display_width(&row.cell(&column.key).display()));
                }
                width as u16
            })
            .collect()
    }
}

/// Shrink widths, widest column first, until they fit `available` with one
/// gap cell between columns. Columns never shrink below one cell.
fn fit_widths(widths: &mut [u16], available: u16) {
    if widths.is_empty() {
        return;
    }
    let gaps = (widths.len() - 1) as u16 * COL_GAP;
    let avail = available.saturating_sub(gaps);

    loop {
        let total: u16 = widths.iter().sum();
        if total <= avail {
            return;
        }
        let widest = widths
            .iter()
            .enumerate()
            .max_by_key(|(_, w)| **w)
            .map(|(i, _)| i);
        match widest {
            Some(i) if widths[i] > 1 => widths[i] -= 1,
            _ => return,
        }
    }
}
