pub mod buffer;
pub mod event;
pub mod input;
pub mod layout;
pub mod style;
pub mod table;
pub mod terminal;
pub mod text;

pub use buffer::{Buffer, Cell};
pub use event::{Key, Modifiers};
pub use input::{InputField, InputResult, InputSize, InputState, Variant};
pub use layout::Rect;
pub use style::{Border, Color, Rgb, Style, TextStyle};
pub use table::{
    CellValue, Column, DisplayMode, ShiftDirection, Table, TableEvent, TableRow, TableState,
};
pub use terminal::Terminal;
