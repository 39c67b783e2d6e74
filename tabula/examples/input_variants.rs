use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabula::{InputField, InputSize, InputState, Key, Rect, Style, Terminal, Variant};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("input_variants.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let fields = vec![
        (
            InputField::new().label("Outlined (default)").variant(Variant::Outlined),
            InputState::new("hello"),
        ),
        (
            InputField::new().label("Filled").variant(Variant::Filled),
            InputState::new("hello"),
        ),
        (
            InputField::new().label("Ghost").variant(Variant::Ghost),
            InputState::new("hello"),
        ),
        (
            InputField::new().label("Small").size(InputSize::Sm),
            InputState::new("sm"),
        ),
        (
            InputField::new().label("Large").size(InputSize::Lg),
            InputState::new("lg"),
        ),
        (
            InputField::new()
                .label("Email")
                .invalid(true)
                .error_message("Invalid email format"),
            InputState::new("not-an-email"),
        ),
        (
            InputField::new().label("Disabled").disabled(true),
            InputState::new("Can't type here"),
        ),
    ];

    let mut term = Terminal::new()?;

    loop {
        term.draw(|buf| {
            let area = Rect::from_size(buf.width(), buf.height()).shrink(1, 2, 1, 2);
            buf.set_string(
                area.x,
                area.y,
                "Input variants and sizes - q to quit",
                Style::new().dim(),
                area.width,
            );

            let mut y = area.y + 2;
            for (field, state) in &fields {
                let field_area = Rect::new(area.x, y, area.width.min(36), field.height());
                field.render(state, field_area, buf);
                y += field.height() + 1;
            }
        })?;

        for (key, _) in term.poll(None)? {
            if matches!(key, Key::Escape | Key::Char('q')) {
                return Ok(());
            }
        }
    }
}
