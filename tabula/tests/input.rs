use tabula::{InputField, InputResult, InputState, Key, Modifiers};

fn plain_field() -> InputField {
    InputField::new()
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn test_insert_at_end() {
    let mut state = InputState::new("ab");
    state.insert_char('c');
    assert_eq!(state.text(), "abc");
    assert_eq!(state.cursor(), 3);
}

#[test]
fn test_insert_in_middle() {
    let mut state = InputState::new("ac");
    state.move_left();
    state.insert_char('b');
    assert_eq!(state.text(), "abc");
    assert_eq!(state.cursor(), 2);
}

#[test]
fn test_backspace_deletes_before_cursor() {
    let mut state = InputState::new("abc");
    assert!(state.delete_back());
    assert_eq!(state.text(), "ab");
    assert_eq!(state.cursor(), 2);
}

#[test]
fn test_backspace_at_start_is_noop() {
    let mut state = InputState::new("abc");
    state.move_to_start();
    assert!(!state.delete_back());
    assert_eq!(state.text(), "abc");
}

#[test]
fn test_delete_forward() {
    let mut state = InputState::new("abc");
    state.move_to_start();
    assert!(state.delete_forward());
    assert_eq!(state.text(), "bc");
    assert_eq!(state.cursor(), 0);
}

#[test]
fn test_delete_forward_at_end_is_noop() {
    let mut state = InputState::new("abc");
    assert!(!state.delete_forward());
    assert_eq!(state.text(), "abc");
}

#[test]
fn test_cursor_movement_clamps() {
    let mut state = InputState::new("ab");
    state.move_right();
    assert_eq!(state.cursor(), 2);

    state.move_to_start();
    state.move_left();
    assert_eq!(state.cursor(), 0);
}

#[test]
fn test_unicode_editing_uses_char_indices() {
    let mut state = InputState::new("日本");
    assert_eq!(state.cursor(), 2);

    state.insert_char('語');
    assert_eq!(state.text(), "日本語");

    state.move_left();
    assert!(state.delete_back());
    assert_eq!(state.text(), "日語");
}

#[test]
fn test_set_text_places_cursor_at_end() {
    let mut state = InputState::new("");
    state.set_text("hello");
    assert_eq!(state.cursor(), 5);
}

// ============================================================================
// Password visibility
// ============================================================================

#[test]
fn test_password_toggle_is_involution() {
    let mut state = InputState::new("secret");
    assert!(!state.password_visible());

    state.toggle_password();
    assert!(state.password_visible());

    state.toggle_password();
    assert!(!state.password_visible());
}

#[test]
fn test_display_text_masks_hidden_password() {
    let field = InputField::new().password_toggle(true);
    let mut state = InputState::new("abc");

    assert_eq!(field.display_text(&state), "•••");

    state.toggle_password();
    assert_eq!(field.display_text(&state), "abc");
}

#[test]
fn test_display_text_unmasked_without_toggle() {
    let field = plain_field();
    let state = InputState::new("abc");
    assert_eq!(field.display_text(&state), "abc");
}

// ============================================================================
// Key handling
// ============================================================================

#[test]
fn test_typing_reports_changed() {
    let field = plain_field();
    let mut state = InputState::new("");

    let result = state.handle_key(Key::Char('x'), Modifiers::new(), &field);
    assert_eq!(result, InputResult::Changed);
    assert_eq!(state.text(), "x");
}

#[test]
fn test_enter_reports_submitted() {
    let field = plain_field();
    let mut state = InputState::new("done");

    let result = state.handle_key(Key::Enter, Modifiers::new(), &field);
    assert_eq!(result, InputResult::Submitted);
}

#[test]
fn test_cursor_keys_report_handled() {
    let field = plain_field();
    let mut state = InputState::new("ab");

    assert_eq!(
        state.handle_key(Key::Left, Modifiers::new(), &field),
        InputResult::Handled
    );
    assert_eq!(
        state.handle_key(Key::Home, Modifiers::new(), &field),
        InputResult::Handled
    );
}

#[test]
fn test_disabled_field_ignores_everything() {
    let field = InputField::new().disabled(true);
    let mut state = InputState::new("ab");

    assert_eq!(
        state.handle_key(Key::Char('x'), Modifiers::new(), &field),
        InputResult::Ignored
    );
    assert_eq!(state.text(), "ab");

    assert_eq!(
        state.handle_key(Key::Enter, Modifiers::new(), &field),
        InputResult::Ignored
    );
}

#[test]
fn test_ctrl_t_toggles_visibility_with_password_toggle() {
    let field = InputField::new().password_toggle(true);
    let mut state = InputState::new("pw");

    let result = state.handle_key(Key::Char('t'), Modifiers::ctrl(), &field);
    assert_eq!(result, InputResult::Handled);
    assert!(state.password_visible());
    assert_eq!(state.text(), "pw");
}

#[test]
fn test_ctrl_t_without_toggle_is_ignored() {
    let field = plain_field();
    let mut state = InputState::new("pw");

    let result = state.handle_key(Key::Char('t'), Modifiers::ctrl(), &field);
    assert_eq!(result, InputResult::Ignored);
    assert!(!state.password_visible());
}

#[test]
fn test_backspace_at_start_reports_handled() {
    let field = plain_field();
    let mut state = InputState::new("");

    let result = state.handle_key(Key::Backspace, Modifiers::new(), &field);
    assert_eq!(result, InputResult::Handled);
}
