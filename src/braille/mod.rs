mod canvas;
mod painter;

pub use canvas::{BrailleCanvas, Cell};
pub use painter::{Label, TerminalPainter};
