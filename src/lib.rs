//! # filepick
//!
//! Terminal file selection dialog built on a thin console control layer.
//!
//! # Architecture
//!
//! ```text
//! native console queue                    terminal
//!        │                                    ▲
//!        ▼                                    │ escape sequences
//!  ConsoleBackend (one per platform family)   │
//!        │ raw records → InputEvent      OutputBuffer (one write per frame)
//!        ▼                                    ▲
//!  ConsoleEventSource ──► Engine ──► Dialog ──┤
//!  (injection stack       │ owns panels,      │ render::draw_panel
//!   preempts, LIFO)       │ cached size,      │ render::draw_rows
//!                         │ mouse state       │
//!                         ▼                   │
//!                    FramePacer (ring of 8 frame costs → adaptive sleep)
//! ```
//!
//! Everything runs on one thread: drain events, relayout on resize, redraw
//! content, pace, repeat. Every frame is a full redraw - no diffing, no
//! retained scene graph.
//!
//! The native layer models exactly one console API family; on other
//! platforms construction fails with [`Error::UnsupportedPlatform`], and
//! support means adding another [`input::ConsoleBackend`] implementation.

pub mod engine;
pub mod error;
pub mod fs;
pub mod input;
pub mod layout;
pub mod pacing;
pub mod picker;
pub mod render;
pub mod shell;

pub use engine::{DEFAULT_QUIT_KEY, Dialog, Engine};
pub use error::{Error, Result};
pub use input::{
    ConsoleBackend, ConsoleEventSource, InputEvent, MouseButtons, MouseEventFlags, NativeConsole,
};
pub use layout::{Panel, PanelId, PanelSet, compute_panels};
pub use pacing::{FrameCostWindow, FramePacer};
pub use picker::{FilePicker, select};
pub use render::OutputBuffer;
