use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabula::{InputField, InputResult, InputState, Key, Rect, Style, Terminal};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("input_field.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let field = InputField::new()
        .label("Password")
        .placeholder("Enter your password")
        .helper_text("Ctrl+T toggles visibility")
        .password_toggle(true)
        .focused(true);

    let mut state = InputState::new("");
    let mut submitted = String::new();

    let mut term = Terminal::new()?;

    loop {
        term.draw(|buf| {
            let area = Rect::from_size(buf.width(), buf.height()).shrink(1, 2, 1, 2);
            buf.set_string(
                area.x,
                area.y,
                "Input Field Demo - type, Enter to submit, Esc to quit",
                Style::new().dim(),
                area.width,
            );

            let field_area = Rect::new(area.x, area.y + 2, area.width.min(40), field.height());
            field.render(&state, field_area, buf);

            let below = area.y + 2 + field.height() + 1;
            buf.set_string(
                area.x,
                below,
                &format!("Value: {}", state.text()),
                Style::new(),
                area.width,
            );
            if !submitted.is_empty() {
                buf.set_string(
                    area.x,
                    below + 1,
                    &format!("Submitted: {submitted}"),
                    Style::new().bold(),
                    area.width,
                );
            }
        })?;

        for (key, modifiers) in term.poll(None)? {
            if key == Key::Escape {
                return Ok(());
            }
            if let InputResult::Submitted = state.handle_key(key, modifiers, &field) {
                submitted = state.text().to_string();
            }
        }
    }
}
