use crate::buffer::{Buffer, Cell};
use crate::event::{Key, Modifiers};
use crate::layout::Rect;
use crate::style::{Border, Color, Style};
use crate::text::display_width;

/// Visual treatment of the input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    Filled,
    #[default]
    Outlined,
    Ghost,
}

/// Field sizing, mapped to horizontal padding inside the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl InputSize {
    fn padding(self) -> u16 {
        match self {
            InputSize::Sm => 1,
            InputSize::Md => 2,
            InputSize::Lg => 3,
        }
    }
}

/// Result of handling a key press in an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Text was modified.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text didn't change (cursor movement, visibility
    /// toggle).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Editing state for a single input field: text, cursor, and the
/// password-visibility flag. The cursor is a char index into the text.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    text: String,
    cursor: usize,
    show_password: bool,
}

impl InputState {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            show_password: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, placing the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether masked text is currently revealed.
    pub fn password_visible(&self) -> bool {
        self.show_password
    }

    /// Flip password visibility. Toggling twice restores the prior state.
    pub fn toggle_password(&mut self) -> bool {
        self.show_password = !self.show_password;
        log::debug!("[input] password visibility -> {}", self.show_password);
        self.show_password
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Returns true if text changed.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = char_to_byte_index(&self.text, self.cursor - 1);
        let end = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    /// Delete the character at the cursor. Returns true if text changed.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.chars().count() {
            return false;
        }
        let start = char_to_byte_index(&self.text, self.cursor);
        let end = char_to_byte_index(&self.text, self.cursor + 1);
        self.text.replace_range(start..end, "");
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let char_count = self.text.chars().count();
        if self.cursor < char_count {
            self.cursor += 1;
        }
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Handle a key press for `field`. Disabled fields ignore everything.
    /// Ctrl+T toggles password visibility when the field has a toggle.
    pub fn handle_key(
        &mut self,
        key: Key,
        modifiers: Modifiers,
        field: &InputField,
    ) -> InputResult {
        if field.disabled {
            return InputResult::Ignored;
        }

        match key {
            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                self.insert_char(c);
                InputResult::Changed
            }

            Key::Char('t') if modifiers.ctrl && field.password_toggle => {
                self.toggle_password();
                InputResult::Handled
            }

            Key::Backspace if modifiers.none() => {
                if self.delete_back() {
                    InputResult::Changed
                } else {
                    InputResult::Handled
                }
            }

            Key::Delete if modifiers.none() => {
                if self.delete_forward() {
                    InputResult::Changed
                } else {
                    InputResult::Handled
                }
            }

            Key::Left if !modifiers.ctrl => {
                self.move_left();
                InputResult::Handled
            }

            Key::Right if !modifiers.ctrl => {
                self.move_right();
                InputResult::Handled
            }

            Key::Home => {
                self.move_to_start();
                InputResult::Handled
            }

            Key::End => {
                self.move_to_end();
                InputResult::Handled
            }

            Key::Enter => InputResult::Submitted,

            _ => InputResult::Ignored,
        }
    }
}

/// The input field widget: label, placeholder, helper/error messages and
/// visual treatment. Holds no editing state; pair with an [`InputState`].
#[derive(Debug, Clone, Default)]
pub struct InputField {
    label: Option<String>,
    placeholder: Option<String>,
    helper_text: Option<String>,
    error_message: Option<String>,
    disabled: bool,
    invalid: bool,
    variant: Variant,
    size: InputSize,
    password_toggle: bool,
    focused: bool,
}

const MASK_CHAR: char = '•';
const FILLED_BG: Color = Color::Oklch {
    l: 0.25,
    c: 0.01,
    h: 250.0,
};

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn helper_text(mut self, helper_text: impl Into<String>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    pub fn error_message(mut self, error_message: impl Into<String>) -> Self {
        self.error_message = Some(error_message.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    /// Mask the text with bullets and allow revealing it with Ctrl+T.
    pub fn password_toggle(mut self, password_toggle: bool) -> Self {
        self.password_toggle = password_toggle;
        self
    }

    /// Whether the field is focused (draws the cursor).
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn has_password_toggle(&self) -> bool {
        self.password_toggle
    }

    /// Rows this field occupies: optional label, the box (bordered for the
    /// outlined variant), optional message line.
    pub fn height(&self) -> u16 {
        let mut height = self.box_height();
        if self.label.is_some() {
            height += 1;
        }
        if self.message().is_some() {
            height += 1;
        }
        height
    }

    fn box_height(&self) -> u16 {
        match self.variant {
            Variant::Outlined => 3,
            Variant::Filled | Variant::Ghost => 1,
        }
    }

    /// The message line under the box: error wins while invalid, else the
    /// helper text.
    fn message(&self) -> Option<(&str, bool)> {
        if self.invalid {
            if let Some(error) = self.error_message.as_deref() {
                return Some((error, true));
            }
        }
        self.helper_text.as_deref().map(|helper| (helper, false))
    }

    /// The text to show for the current state: bullets per char while a
    /// password is hidden, the raw text otherwise.
    pub fn display_text(&self, state: &InputState) -> String {
        if self.password_toggle && !state.password_visible() {
            state.text().chars().map(|_| MASK_CHAR).collect()
        } else {
            state.text().to_string()
        }
    }

    pub fn render(&self, state: &InputState, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let accent = if self.invalid {
            Color::oklch(0.62, 0.19, 25.0)
        } else {
            Color::oklch(0.62, 0.12, 250.0)
        };
        let base = if self.disabled {
            Style::new().dim()
        } else {
            Style::new()
        };

        let mut y = area.y;

        if let Some(label) = &self.label {
            buf.set_string(area.x, y, label, base.bold(), area.width);
            y += 1;
        }

        let box_area = Rect::new(area.x, y, area.width, self.box_height());
        let content = match self.variant {
            Variant::Outlined => {
                buf.draw_border(box_area, Border::Single, base.foreground(accent));
                box_area.inner()
            }
            Variant::Filled => {
                let fill = Cell::new(' ')
                    .with_fg(Color::oklch(0.9, 0.01, 250.0).to_rgb())
                    .with_bg(FILLED_BG.to_rgb())
                    .with_style(base.text_style);
                buf.fill(box_area, fill);
                box_area
            }
            Variant::Ghost => box_area,
        };
        self.render_text(state, content, buf, base);
        y += self.box_height();

        if let Some((message, is_error)) = self.message() {
            let style = if is_error {
                base.foreground(accent)
            } else {
                base.dim()
            };
            buf.set_string(area.x, y, message, style, area.width);
        }
    }

    fn render_text(&self, state: &InputState, content: Rect, buf: &mut Buffer, base: Style) {
        if content.is_empty() {
            return;
        }

        let pad = self.size.padding().min(content.width / 2);
        let mut text_area = content.shrink(0, pad, 0, pad);
        let text_style = match self.variant {
            Variant::Filled => base.background(FILLED_BG),
            _ => base,
        };

        // Reserve the rightmost text cell for the visibility glyph.
        if self.password_toggle && text_area.width > 2 {
            let glyph = if state.password_visible() { "○" } else { "●" };
            buf.set_string(
                text_area.right() - 1,
                text_area.y,
                glyph,
                text_style.dim(),
                1,
            );
            text_area.width -= 2;
        }
        if text_area.is_empty() {
            return;
        }

        let text = self.display_text(state);
        if text.is_empty() {
            if let Some(placeholder) = &self.placeholder {
                buf.set_string(
                    text_area.x,
                    text_area.y,
                    placeholder,
                    text_style.dim(),
                    text_area.width,
                );
            }
        } else {
            // Scroll so the cursor stays visible in a long value.
            let avail = text_area.width as usize;
            let skip = state.cursor().saturating_sub(avail.saturating_sub(1));
            let visible: String = text.chars().skip(skip).collect();
            buf.set_string(text_area.x, text_area.y, &visible, text_style, text_area.width);
        }

        if self.focused && !self.disabled {
            let text = self.display_text(state);
            let avail = text_area.width as usize;
            let skip = state.cursor().saturating_sub(avail.saturating_sub(1));
            let before: String = text.chars().skip(skip).take(state.cursor() - skip).collect();
            let cursor_x = text_area.x + display_width(&before) as u16;
            if text_area.contains(cursor_x, text_area.y) {
                let under = text.chars().nth(state.cursor()).unwrap_or(' ');
                let cursor_style = Style::new()
                    .foreground(Color::oklch(0.15, 0.01, 250.0))
                    .background(Color::oklch(0.9, 0.02, 250.0));
                buf.set_string(cursor_x, text_area.y, &under.to_string(), cursor_style, 2);
            }
        }
    }
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
