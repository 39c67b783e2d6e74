use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabula::{
    CellValue, Column, Key, Rect, Style, Table, TableEvent, TableRow, TableState, Terminal,
};

#[derive(Debug, Clone)]
struct Person {
    id: u32,
    name: &'static str,
    age: Option<i64>,
    email: &'static str,
}

impl TableRow for Person {
    fn cell(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.into(),
            "age" => self.age.into(),
            "email" => self.email.into(),
            _ => CellValue::Null,
        }
    }

    fn row_id(&self) -> Option<String> {
        Some(self.id.to_string())
    }
}

fn sample_people() -> Vec<Person> {
    vec![
        Person {
            id: 1,
            name: "Alice",
            age: Some(24),
            email: "alice@example.com",
        },
        Person {
            id: 2,
            name: "Bob",
            age: Some(30),
            email: "bob@example.com",
        },
        Person {
            id: 3,
            name: "Charlie",
            age: Some(28),
            email: "charlie@example.com",
        },
        Person {
            id: 4,
            name: "Diana",
            age: None,
            email: "diana@example.com",
        },
    ]
}

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("data_table.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let table = Table::new(vec![
        Column::new("name", "Name").sortable(true),
        Column::new("age", "Age").sortable(true),
        Column::new("email", "Email"),
    ]);

    let mut state = TableState::new(sample_people())
        .selectable(true)
        .sortable(true)
        .row_sortable(true)
        .with_sort_key("age");

    let mut term = Terminal::new()?;
    let mut status = String::from("ready");

    loop {
        term.draw(|buf| {
            let area = term_area(buf);
            buf.set_string(
                area.x,
                area.y,
                "Up/Down move · Space select · Shift+Up/Down shift row · 1-3 sort",
                Style::new().dim(),
                area.width,
            );
            buf.set_string(
                area.x,
                area.y + 1,
                "l toggle loading · e empty data · r restore data · q quit",
                Style::new().dim(),
                area.width,
            );

            let table_area =
                Rect::new(area.x, area.y + 3, area.width, area.height.saturating_sub(5));
            table.render(&state, table_area, buf);

            let selected: Vec<&str> = state.selected_rows().iter().map(|p| p.name).collect();
            buf.set_string(
                area.x,
                area.bottom().saturating_sub(1),
                &format!("selected: [{}]  last: {status}", selected.join(", ")),
                Style::new(),
                area.width,
            );
        })?;

        for (key, modifiers) in term.poll(None)? {
            match key {
                Key::Escape | Key::Char('q') => return Ok(()),
                Key::Char('l') => state.set_loading(!state.is_loading()),
                Key::Char('e') => state.set_rows(Vec::new()),
                Key::Char('r') => state.set_rows(sample_people()),
                _ => {
                    for event in state.handle_key(key, modifiers, table.columns()) {
                        status = match event {
                            TableEvent::SelectionChanged(indices) => {
                                format!("selection -> {indices:?}")
                            }
                            TableEvent::Sorted { key } => format!("sorted by {key}"),
                            TableEvent::RowShifted { from, to } => {
                                format!("row {from} -> {to}")
                            }
                        };
                    }
                }
            }
        }
    }
}

fn term_area(buf: &tabula::Buffer) -> Rect {
    Rect::from_size(buf.width(), buf.height()).shrink(1, 2, 1, 2)
}
