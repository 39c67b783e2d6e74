use crate::event::{Key, Modifiers};

use super::row::TableRow;
use super::{Column, DisplayMode, ShiftDirection, TableEvent};

/// Stable identity for a row while it is in the table. Handles survive
/// sorting and manual reordering; replacing the data assigns fresh ones, so
/// selections made against the old data simply stop matching anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowHandle(u64);

#[derive(Debug)]
struct Entry<T> {
    handle: RowHandle,
    row: T,
}

/// State for a [`Table`](super::Table) widget: the working copy of the rows
/// (reordered by sorting or manual shifts), the selection, the active sort
/// key annotation, and the keyboard cursor.
///
/// All operations are synchronous in-memory transformations. Out-of-range
/// indices are ignored rather than reported.
#[derive(Debug)]
pub struct TableState<T: TableRow> {
    entries: Vec<Entry<T>>,
    /// Selected row handles, in the order they were selected.
    selection: Vec<RowHandle>,
    sort_key: Option<String>,
    cursor: usize,
    next_handle: u64,
    selectable: bool,
    sortable: bool,
    row_sortable: bool,
    loading: bool,
}

impl<T: TableRow> TableState<T> {
    pub fn new(rows: Vec<T>) -> Self {
        let mut state = Self {
            entries: Vec::new(),
            selection: Vec::new(),
            sort_key: None,
            cursor: 0,
            next_handle: 0,
            selectable: false,
            sortable: false,
            row_sortable: false,
            loading: false,
        };
        state.set_rows(rows);
        state
    }

    /// Enable checkbox row selection.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Enable column sorting.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Enable manual row reordering.
    pub fn row_sortable(mut self, row_sortable: bool) -> Self {
        self.row_sortable = row_sortable;
        self
    }

    /// Set the initial sort key annotation. Marks the column in the header
    /// without reordering anything.
    pub fn with_sort_key(mut self, key: impl Into<String>) -> Self {
        self.sort_key = Some(key.into());
        self
    }

    /// Set the externally supplied loading flag. While set, the widget shows
    /// the loading indicator regardless of data contents.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_row_sortable(&self) -> bool {
        self.row_sortable
    }

    /// Replace the input data. The working order resets to exactly the new
    /// input's order, discarding any prior sort or manual reorder. The
    /// selection is deliberately left alone: fresh handles mean stale
    /// selections no longer match any row, but a caller holding the selection
    /// should not rely on either behavior across a data replacement.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.entries = rows
            .into_iter()
            .map(|row| {
                let handle = RowHandle(self.next_handle);
                self.next_handle += 1;
                Entry { handle, row }
            })
            .collect();
        self.cursor = self.cursor.min(self.entries.len().saturating_sub(1));
        log::debug!("[table] data replaced, {} rows", self.entries.len());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|e| &e.row)
    }

    pub fn row(&self, index: usize) -> Option<&T> {
        self.entries.get(index).map(|e| &e.row)
    }

    /// The column key the table was last sorted by (or the initial
    /// annotation). Display only; setting it never reorders rows.
    pub fn sort_key(&self) -> Option<&str> {
        self.sort_key.as_deref()
    }

    /// Row the keyboard cursor is on.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }

    /// Which of the three display modes the widget should render. Loading
    /// wins over everything; an empty sequence shows the empty state.
    pub fn display_mode(&self) -> DisplayMode {
        if self.loading {
            DisplayMode::Loading
        } else if self.entries.is_empty() {
            DisplayMode::Empty
        } else {
            DisplayMode::Populated
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.entries
            .get(index)
            .is_some_and(|e| self.selection.contains(&e.handle))
    }

    /// Indices of the selected rows, in the order they were selected.
    /// Selections whose rows are gone (data was replaced) are skipped.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection
            .iter()
            .filter_map(|handle| self.entries.iter().position(|e| e.handle == *handle))
            .collect()
    }

    /// Selected rows in selection order.
    pub fn selected_rows(&self) -> Vec<&T> {
        self.selection
            .iter()
            .filter_map(|handle| {
                self.entries
                    .iter()
                    .find(|e| e.handle == *handle)
                    .map(|e| &e.row)
            })
            .collect()
    }

    /// Toggle selection of the row at `index`. Toggling twice restores the
    /// prior selection. Returns the selection-changed event, or `None` when
    /// selection is disabled or the index is out of range.
    pub fn toggle_select(&mut self, index: usize) -> Option<TableEvent> {
        if !self.selectable {
            return None;
        }
        let handle = self.entries.get(index)?.handle;

        if let Some(pos) = self.selection.iter().position(|h| *h == handle) {
            self.selection.remove(pos);
        } else {
            self.selection.push(handle);
        }
        log::debug!(
            "[table] selection toggled at {index}, {} selected",
            self.selection.len()
        );
        Some(TableEvent::SelectionChanged(self.selected_indices()))
    }

    /// Sort ascending by the projection of `key`. No-op unless sorting is
    /// enabled. Null values order first; the sort is stable, so rows that
    /// compare equal keep their current relative order. Updates the sort key
    /// annotation.
    pub fn sort_by(&mut self, key: &str) -> Option<TableEvent> {
        if !self.sortable {
            return None;
        }

        self.entries
            .sort_by(|a, b| a.row.cell(key).sort_cmp(&b.row.cell(key)));
        self.sort_key = Some(key.to_string());
        log::debug!("[table] sorted by {key}");
        Some(TableEvent::Sorted {
            key: key.to_string(),
        })
    }

    /// Move the row at `index` one position up or down. Shifting up at the
    /// first row or down at the last is a boundary no-op, as is an index past
    /// the end. Independent of sort state.
    pub fn shift_row(&mut self, direction: ShiftDirection, index: usize) -> Option<TableEvent> {
        if index >= self.entries.len() {
            return None;
        }
        let to = match direction {
            ShiftDirection::Up => {
                if index == 0 {
                    return None;
                }
                index - 1
            }
            ShiftDirection::Down => {
                if index + 1 == self.entries.len() {
                    return None;
                }
                index + 1
            }
        };

        self.entries.swap(index, to);
        log::debug!("[table] row shifted {index} -> {to}");
        Some(TableEvent::RowShifted { from: index, to })
    }

    /// Map a key press to table operations and return the events they emit.
    ///
    /// Up/Down move the cursor; Shift+Up/Down shift the cursor row (the
    /// cursor follows it); Space toggles selection; digits 1-9 sort by the
    /// n-th column. Column sorting still requires the global sortable flag.
    pub fn handle_key(
        &mut self,
        key: Key,
        modifiers: Modifiers,
        columns: &[Column],
    ) -> Vec<TableEvent> {
        let mut events = Vec::new();

        match key {
            Key::Up if modifiers.none() => self.cursor_up(),
            Key::Down if modifiers.none() => self.cursor_down(),

            Key::Up if modifiers.shift && self.row_sortable => {
                if let Some(event) = self.shift_row(ShiftDirection::Up, self.cursor) {
                    self.cursor -= 1;
                    events.push(event);
                }
            }
            Key::Down if modifiers.shift && self.row_sortable => {
                if let Some(event) = self.shift_row(ShiftDirection::Down, self.cursor) {
                    self.cursor += 1;
                    events.push(event);
                }
            }

            Key::Char(' ') if modifiers.none() => {
                events.extend(self.toggle_select(self.cursor));
            }

            Key::Char(c @ '1'..='9') if modifiers.none() => {
                let idx = (c as u8 - b'1') as usize;
                if let Some(column) = columns.get(idx) {
                    let key = column.key.clone();
                    events.extend(self.sort_by(&key));
                }
            }

            _ => {}
        }

        events
    }
}
