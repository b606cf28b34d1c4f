//! ANSI escape sequences for terminal control.
//!
//! Pure generators: each function writes the exact byte sequence for its
//! input and does no I/O of its own. Callers accumulate into an
//! [`OutputBuffer`](super::OutputBuffer) and flush once per frame.
//!
//! Coordinates are 0-based on the way in and 1-based on the wire, matching
//! the CSI cursor positioning convention.

use std::io::Write;

// =============================================================================
// Cursor Movement
// =============================================================================

/// Move cursor to absolute position (0-indexed input, 1-indexed sequence).
#[inline]
pub fn move_to<W: Write>(w: &mut W, x: u16, y: u16) -> std::io::Result<()> {
    write!(w, "\x1b[{};{}H", y + 1, x + 1)
}

// =============================================================================
// Screen Control
// =============================================================================

/// Clear entire line.
#[inline]
pub fn erase_line<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[2K")
}

/// Clear entire screen.
#[inline]
pub fn erase_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[2J")
}

// =============================================================================
// Attributes
// =============================================================================

/// Reset all attributes and colors.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[0m")
}

/// Bold text.
#[inline]
pub fn bold<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[1m")
}

/// Underlined text.
#[inline]
pub fn underline<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[4m")
}

/// Inverse video.
#[inline]
pub fn inverse<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[7m")
}

// =============================================================================
// Colors
// =============================================================================

/// Set 24-bit foreground color.
#[inline]
pub fn fg<W: Write>(w: &mut W, r: u8, g: u8, b: u8) -> std::io::Result<()> {
    write!(w, "\x1b[38;2;{};{};{}m", r, g, b)
}

/// Set 24-bit background color.
#[inline]
pub fn bg<W: Write>(w: &mut W, r: u8, g: u8, b: u8) -> std::io::Result<()> {
    write!(w, "\x1b[48;2;{};{};{}m", r, g, b)
}

// =============================================================================
// Tests
// =============================================================================
