//! Terminal rendering - escape generation, output batching, panel drawing.
//!
//! The renderer is "blind": it knows rectangles, glyphs, and escape
//! sequences, never domain content. There is no diffing and no retained
//! state - every frame rebuilds its output from scratch.

pub mod ansi;
pub mod output;
pub mod panel;

pub use output::OutputBuffer;
pub use panel::{draw_labels, draw_panel, draw_rows, Row};
