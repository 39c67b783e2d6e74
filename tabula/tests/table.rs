use tabula::{
    CellValue, Column, DisplayMode, Key, Modifiers, ShiftDirection, TableEvent, TableRow,
    TableState,
};

#[derive(Debug, Clone, PartialEq)]
struct Item {
    name: &'static str,
    value: Option<i64>,
}

impl Item {
    fn new(name: &'static str, value: i64) -> Self {
        Self {
            name,
            value: Some(value),
        }
    }

    fn unvalued(name: &'static str) -> Self {
        Self { name, value: None }
    }
}

impl TableRow for Item {
    fn cell(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.into(),
            "value" => self.value.into(),
            _ => CellValue::Null,
        }
    }
}

fn names<T: TableRow>(state: &TableState<T>) -> Vec<String> {
    state.rows().map(|r| r.cell("name").display()).collect()
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").sortable(true),
        Column::new("value", "Value").sortable(true),
    ]
}

// ============================================================================
// Data replacement
// ============================================================================

#[test]
fn test_replace_input_resets_order() {
    let mut state = TableState::new(vec![
        Item::new("a", 1),
        Item::new("b", 2),
        Item::new("c", 3),
    ])
    .sortable(true);

    state.sort_by("name");
    state.shift_row(ShiftDirection::Down, 0);

    state.set_rows(vec![Item::new("z", 9), Item::new("y", 8), Item::new("x", 7)]);
    assert_eq!(names(&state), vec!["z", "y", "x"]);
}

#[test]
fn test_replace_with_empty_then_restore() {
    let mut state = TableState::new(vec![Item::new("a", 1)]);
    state.set_rows(Vec::new());
    assert!(state.is_empty());
    assert_eq!(state.display_mode(), DisplayMode::Empty);

    state.set_rows(vec![Item::new("b", 2), Item::new("c", 3)]);
    assert_eq!(names(&state), vec!["b", "c"]);
    assert_eq!(state.display_mode(), DisplayMode::Populated);
}

#[test]
fn test_replace_does_not_clear_selection_but_stale_handles_stop_matching() {
    let mut state = TableState::new(vec![Item::new("a", 1), Item::new("b", 2)]).selectable(true);

    state.toggle_select(0);
    assert_eq!(state.selected_indices(), vec![0]);

    // New data, fresh handles: the old selection matches nothing.
    state.set_rows(vec![Item::new("a", 1), Item::new("b", 2)]);
    assert!(state.selected_indices().is_empty());
    assert!(state.selected_rows().is_empty());
    assert!(!state.is_selected(0));

    // Selection still works against the new rows.
    let event = state.toggle_select(1).unwrap();
    assert_eq!(event, TableEvent::SelectionChanged(vec![1]));
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_toggle_selection_is_involution() {
    let mut state = TableState::new(vec![Item::new("a", 1), Item::new("b", 2)]).selectable(true);

    state.toggle_select(1);
    assert!(state.is_selected(1));

    state.toggle_select(1);
    assert!(!state.is_selected(1));
    assert!(state.selected_indices().is_empty());
}

#[test]
fn test_toggle_is_noop_when_selection_disabled() {
    let mut state = TableState::new(vec![Item::new("a", 1)]);
    assert_eq!(state.toggle_select(0), None);
    assert!(!state.is_selected(0));
}

#[test]
fn test_toggle_out_of_range_is_ignored() {
    let mut state = TableState::new(vec![Item::new("a", 1)]).selectable(true);
    assert_eq!(state.toggle_select(5), None);
    assert!(state.selected_indices().is_empty());
}

#[test]
fn test_selection_event_reports_selection_order() {
    let mut state = TableState::new(vec![
        Item::new("a", 1),
        Item::new("b", 2),
        Item::new("c", 3),
    ])
    .selectable(true);

    state.toggle_select(2);
    let event = state.toggle_select(0).unwrap();
    assert_eq!(event, TableEvent::SelectionChanged(vec![2, 0]));

    let selected: Vec<_> = state.selected_rows().iter().map(|r| r.name).collect();
    assert_eq!(selected, vec!["c", "a"]);
}

#[test]
fn test_selection_follows_rows_through_sort() {
    let mut state = TableState::new(vec![
        Item::new("c", 3),
        Item::new("a", 1),
        Item::new("b", 2),
    ])
    .selectable(true)
    .sortable(true);

    state.toggle_select(0); // "c"
    state.sort_by("name");

    // "c" moved to the end but stays selected.
    assert_eq!(state.selected_indices(), vec![2]);
    assert_eq!(state.selected_rows()[0].name, "c");
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_numeric_sort_ascending() {
    let mut state = TableState::new(vec![
        Item::new("x", 3),
        Item::new("y", 1),
        Item::new("z", 2),
    ])
    .sortable(true);

    state.sort_by("value");

    let values: Vec<_> = state.rows().map(|r| r.value.unwrap()).collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_null_values_sort_first() {
    let mut state = TableState::new(vec![Item::new("a", 2), Item::unvalued("b")]).sortable(true);

    state.sort_by("value");
    assert_eq!(names(&state), vec!["b", "a"]);
}

#[test]
fn test_text_sort_is_lexicographic() {
    let mut state = TableState::new(vec![
        Item::new("pear", 1),
        Item::new("apple", 2),
        Item::new("orange", 3),
    ])
    .sortable(true);

    state.sort_by("name");
    assert_eq!(names(&state), vec!["apple", "orange", "pear"]);
}

#[test]
fn test_sort_is_stable_for_ties() {
    let mut state = TableState::new(vec![
        Item::new("first", 1),
        Item::new("second", 1),
        Item::new("third", 0),
        Item::new("fourth", 1),
    ])
    .sortable(true);

    state.sort_by("value");
    assert_eq!(names(&state), vec!["third", "first", "second", "fourth"]);
}

#[test]
fn test_sort_requires_sortable_flag() {
    let mut state = TableState::new(vec![Item::new("b", 2), Item::new("a", 1)]);

    assert_eq!(state.sort_by("value"), None);
    assert_eq!(names(&state), vec!["b", "a"]);
    assert_eq!(state.sort_key(), None);
}

#[test]
fn test_sort_updates_sort_key_and_emits_event() {
    let mut state = TableState::new(vec![Item::new("a", 1)]).sortable(true);

    let event = state.sort_by("value").unwrap();
    assert_eq!(
        event,
        TableEvent::Sorted {
            key: "value".to_string()
        }
    );
    assert_eq!(state.sort_key(), Some("value"));
}

#[test]
fn test_initial_sort_key_does_not_reorder() {
    let state = TableState::new(vec![Item::new("b", 2), Item::new("a", 1)])
        .sortable(true)
        .with_sort_key("value");

    assert_eq!(state.sort_key(), Some("value"));
    assert_eq!(names(&state), vec!["b", "a"]);
}

#[test]
fn test_sort_by_unknown_key_treats_all_as_null() {
    let mut state = TableState::new(vec![Item::new("b", 2), Item::new("a", 1)]).sortable(true);

    // Every projection is Null, so the stable sort leaves the order alone.
    state.sort_by("missing");
    assert_eq!(names(&state), vec!["b", "a"]);
}

// ============================================================================
// Manual row shifts
// ============================================================================

#[test]
fn test_shift_up_at_first_row_is_noop() {
    let mut state = TableState::new(vec![Item::new("a", 1), Item::new("b", 2)]);
    assert_eq!(state.shift_row(ShiftDirection::Up, 0), None);
    assert_eq!(names(&state), vec!["a", "b"]);
}

#[test]
fn test_shift_down_at_last_row_is_noop() {
    let mut state = TableState::new(vec![Item::new("a", 1), Item::new("b", 2)]);
    assert_eq!(state.shift_row(ShiftDirection::Down, 1), None);
    assert_eq!(names(&state), vec!["a", "b"]);
}

#[test]
fn test_shift_up_moves_row_one_earlier() {
    let mut state = TableState::new(vec![
        Item::new("A", 1),
        Item::new("B", 2),
        Item::new("C", 3),
        Item::new("D", 4),
    ]);

    let event = state.shift_row(ShiftDirection::Up, 2).unwrap();
    assert_eq!(event, TableEvent::RowShifted { from: 2, to: 1 });
    assert_eq!(names(&state), vec!["A", "C", "B", "D"]);
}

#[test]
fn test_shift_down_moves_row_one_later() {
    let mut state = TableState::new(vec![
        Item::new("A", 1),
        Item::new("B", 2),
        Item::new("C", 3),
    ]);

    state.shift_row(ShiftDirection::Down, 0);
    assert_eq!(names(&state), vec!["B", "A", "C"]);
}

#[test]
fn test_shift_out_of_range_is_ignored() {
    let mut state = TableState::new(vec![Item::new("a", 1)]);
    assert_eq!(state.shift_row(ShiftDirection::Down, 10), None);
    assert_eq!(state.shift_row(ShiftDirection::Up, 10), None);
}

// ============================================================================
// Display modes
// ============================================================================

#[test]
fn test_loading_wins_over_data() {
    let mut state = TableState::new(vec![Item::new("a", 1)]);
    state.set_loading(true);
    assert_eq!(state.display_mode(), DisplayMode::Loading);

    state.set_loading(false);
    assert_eq!(state.display_mode(), DisplayMode::Populated);
}

#[test]
fn test_empty_regardless_of_flags() {
    let state = TableState::new(Vec::<Item>::new())
        .selectable(true)
        .sortable(true)
        .row_sortable(true);
    assert_eq!(state.display_mode(), DisplayMode::Empty);
}

#[test]
fn test_loading_wins_over_empty() {
    let mut state = TableState::new(Vec::<Item>::new());
    state.set_loading(true);
    assert_eq!(state.display_mode(), DisplayMode::Loading);
}

// ============================================================================
// Keyboard handling
// ============================================================================

#[test]
fn test_cursor_moves_and_clamps() {
    let mut state = TableState::new(vec![Item::new("a", 1), Item::new("b", 2)]);

    state.handle_key(Key::Up, Modifiers::new(), &columns());
    assert_eq!(state.cursor(), 0);

    state.handle_key(Key::Down, Modifiers::new(), &columns());
    assert_eq!(state.cursor(), 1);

    state.handle_key(Key::Down, Modifiers::new(), &columns());
    assert_eq!(state.cursor(), 1);
}

#[test]
fn test_space_toggles_selection_at_cursor() {
    let mut state = TableState::new(vec![Item::new("a", 1), Item::new("b", 2)]).selectable(true);

    state.handle_key(Key::Down, Modifiers::new(), &columns());
    let events = state.handle_key(Key::Char(' '), Modifiers::new(), &columns());

    assert_eq!(events, vec![TableEvent::SelectionChanged(vec![1])]);
    assert!(state.is_selected(1));
}

#[test]
fn test_digit_sorts_by_nth_column() {
    let mut state = TableState::new(vec![Item::new("b", 2), Item::new("a", 1)]).sortable(true);

    let events = state.handle_key(Key::Char('1'), Modifiers::new(), &columns());
    assert_eq!(
        events,
        vec![TableEvent::Sorted {
            key: "name".to_string()
        }]
    );
    assert_eq!(names(&state), vec!["a", "b"]);
}

#[test]
fn test_shift_down_key_moves_cursor_row() {
    let mut state = TableState::new(vec![
        Item::new("a", 1),
        Item::new("b", 2),
        Item::new("c", 3),
    ])
    .row_sortable(true);

    let events = state.handle_key(Key::Down, Modifiers::shift(), &columns());
    assert_eq!(events, vec![TableEvent::RowShifted { from: 0, to: 1 }]);
    assert_eq!(names(&state), vec!["b", "a", "c"]);
    assert_eq!(state.cursor(), 1);
}

#[test]
fn test_shift_key_noop_without_row_sortable() {
    let mut state = TableState::new(vec![Item::new("a", 1), Item::new("b", 2)]);

    let events = state.handle_key(Key::Down, Modifiers::shift(), &columns());
    assert!(events.is_empty());
    assert_eq!(names(&state), vec!["a", "b"]);
}

// ============================================================================
// Cell values
// ============================================================================

#[test]
fn test_int_and_float_compare_numerically() {
    use std::cmp::Ordering;

    assert_eq!(
        CellValue::Int(2).sort_cmp(&CellValue::Float(2.5)),
        Ordering::Less
    );
    assert_eq!(
        CellValue::Float(3.0).sort_cmp(&CellValue::Int(2)),
        Ordering::Greater
    );
}

#[test]
fn test_null_orders_before_everything() {
    use std::cmp::Ordering;

    assert_eq!(
        CellValue::Null.sort_cmp(&CellValue::Int(-100)),
        Ordering::Less
    );
    assert_eq!(
        CellValue::Text(String::new()).sort_cmp(&CellValue::Null),
        Ordering::Greater
    );
    assert_eq!(CellValue::Null.sort_cmp(&CellValue::Null), Ordering::Equal);
}

#[test]
fn test_option_conversion_maps_none_to_null() {
    let none: Option<i64> = None;
    assert_eq!(CellValue::from(none), CellValue::Null);
    assert_eq!(CellValue::from(Some(3i64)), CellValue::Int(3));
}
